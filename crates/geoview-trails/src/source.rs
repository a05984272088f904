use std::future::Future;

use geoview_core::{AppConfig, Coordinate, SourceLimits, TrailAdapterKind};

use crate::error::TrailError;
use crate::prescription::PrescriptionTrailsClient;
use crate::record::TrailQueryResult;
use crate::trailapi::TrailApiClient;

/// Anything that can answer "which trails are near this point".
pub trait TrailSource {
    fn fetch_trails(
        &self,
        coordinate: Coordinate,
        limits: SourceLimits,
    ) -> impl Future<Output = Result<TrailQueryResult, TrailError>> + Send;
}

impl TrailSource for TrailApiClient {
    async fn fetch_trails(
        &self,
        coordinate: Coordinate,
        limits: SourceLimits,
    ) -> Result<TrailQueryResult, TrailError> {
        self.fetch_nearby(coordinate, limits).await
    }
}

impl TrailSource for PrescriptionTrailsClient {
    async fn fetch_trails(
        &self,
        coordinate: Coordinate,
        limits: SourceLimits,
    ) -> Result<TrailQueryResult, TrailError> {
        self.fetch_nearby(coordinate, limits).await
    }
}

/// The configured trail adapter. Exactly one schema is active per process.
pub enum TrailAdapter {
    TrailApi(TrailApiClient),
    PrescriptionTrails(PrescriptionTrailsClient),
}

impl TrailAdapter {
    /// Builds whichever adapter `config.trail_adapter` selects.
    ///
    /// # Errors
    ///
    /// Returns [`TrailError::Http`] if the HTTP client cannot be built, or
    /// [`TrailError::InvalidBaseUrl`] if the configured base URL does not parse.
    pub fn from_config(config: &AppConfig) -> Result<Self, TrailError> {
        Ok(match config.trail_adapter {
            TrailAdapterKind::TrailApi => Self::TrailApi(TrailApiClient::from_config(config)?),
            TrailAdapterKind::PrescriptionTrails => {
                Self::PrescriptionTrails(PrescriptionTrailsClient::from_config(config)?)
            }
        })
    }

    #[must_use]
    pub fn kind(&self) -> TrailAdapterKind {
        match self {
            Self::TrailApi(_) => TrailAdapterKind::TrailApi,
            Self::PrescriptionTrails(_) => TrailAdapterKind::PrescriptionTrails,
        }
    }
}

impl TrailSource for TrailAdapter {
    async fn fetch_trails(
        &self,
        coordinate: Coordinate,
        limits: SourceLimits,
    ) -> Result<TrailQueryResult, TrailError> {
        match self {
            Self::TrailApi(client) => client.fetch_nearby(coordinate, limits).await,
            Self::PrescriptionTrails(client) => client.fetch_nearby(coordinate, limits).await,
        }
    }
}
