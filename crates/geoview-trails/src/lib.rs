//! Trail directory sources.
//!
//! Two upstream schemas are supported behind the [`TrailSource`] trait:
//! [`TrailApiClient`] (keyed activity map, the active adapter) and
//! [`PrescriptionTrailsClient`] (flat list with string coordinates, kept as a
//! reference adapter). Both normalize into [`TrailRecord`].

pub mod error;
pub mod normalize;
pub mod prescription;
pub mod record;
pub mod source;
pub mod trailapi;

mod fetch;
mod parse_helpers;

pub use error::TrailError;
pub use normalize::RejectedTrail;
pub use prescription::PrescriptionTrailsClient;
pub use record::{filter_by_activities, Activity, TrailQueryResult, TrailRecord};
pub use source::{TrailAdapter, TrailSource};
pub use trailapi::TrailApiClient;
