use geoview_core::{CoordinateError, FailureKind};
use geoview_trails::TrailError;
use geoview_webcams::WebcamError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum AggregatorError {
    /// Rejected before any request was issued.
    #[error("invalid search coordinate: {0}")]
    InvalidCoordinate(#[from] CoordinateError),

    #[error("failed to build webcam source: {0}")]
    WebcamSetup(#[from] WebcamError),

    #[error("failed to build trail source: {0}")]
    TrailSetup(#[from] TrailError),
}

impl AggregatorError {
    #[must_use]
    pub fn kind(&self) -> FailureKind {
        match self {
            Self::InvalidCoordinate(_) => FailureKind::Validation,
            Self::WebcamSetup(e) => e.kind(),
            Self::TrailSetup(e) => e.kind(),
        }
    }
}

/// Why a [`LatestSearch::submit`](crate::LatestSearch::submit) produced no results.
#[derive(Debug, Error)]
pub enum SearchError {
    /// A newer search was submitted before this one finished.
    #[error("search superseded by a newer request")]
    Superseded,

    /// The search task panicked.
    #[error("search task failed: {0}")]
    Task(#[from] tokio::task::JoinError),
}
