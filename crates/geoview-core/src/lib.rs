//! Shared domain types for geoview: the validated [`Coordinate`], coordinate
//! providers, the source failure taxonomy, and environment-driven configuration.

pub mod app_config;
pub mod config;
pub mod coordinate;
pub mod outcome;
pub mod provider;

use thiserror::Error;

pub use app_config::{AppConfig, Environment, SourceLimits, TrailAdapterKind};
pub use config::{load_app_config, load_app_config_from_env};
pub use coordinate::{Coordinate, CoordinateError};
pub use outcome::{FailureKind, SourceStatus};
pub use provider::{resolve_or_default, CoordinateProvider, FixedCoordinate};

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid value for {var}: {reason}")]
    InvalidEnvVar { var: String, reason: String },
}
