use geoview_core::{AppConfig, Coordinate, SourceLimits, SourceStatus};
use geoview_trails::{TrailAdapter, TrailSource};
use geoview_webcams::{WebcamClient, WebcamSource};

use crate::error::AggregatorError;
use crate::results::SearchResults;

/// Queries a webcam source and a trail source concurrently for one coordinate.
///
/// Stateless between calls: every [`search`](Self::search) issues two fresh
/// fetches, with no caching.
pub struct GeoAggregator<W, T> {
    webcams: W,
    trails: T,
    webcam_limits: SourceLimits,
    trail_limits: SourceLimits,
}

impl GeoAggregator<WebcamClient, TrailAdapter> {
    /// Builds the webcam client and the configured trail adapter.
    ///
    /// # Errors
    ///
    /// Returns [`AggregatorError::WebcamSetup`] or [`AggregatorError::TrailSetup`]
    /// if either HTTP client cannot be built from `config`.
    pub fn from_config(config: &AppConfig) -> Result<Self, AggregatorError> {
        let webcams = WebcamClient::from_config(config)?;
        let trails = TrailAdapter::from_config(config)?;
        tracing::debug!(trail_adapter = %trails.kind(), "aggregator configured");
        Ok(Self::new(
            webcams,
            trails,
            config.webcam_limits,
            config.trail_limits,
        ))
    }
}

impl<W, T> GeoAggregator<W, T>
where
    W: WebcamSource,
    T: TrailSource,
{
    #[must_use]
    pub fn new(
        webcams: W,
        trails: T,
        webcam_limits: SourceLimits,
        trail_limits: SourceLimits,
    ) -> Self {
        Self {
            webcams,
            trails,
            webcam_limits,
            trail_limits,
        }
    }

    /// Fetches webcams and trails around `coordinate` at the same time and
    /// waits for both.
    ///
    /// Never fails: a source error becomes an empty list and a
    /// [`SourceStatus::Failed`] tag carrying the error's kind.
    pub async fn search(&self, coordinate: Coordinate) -> SearchResults {
        let (webcam_result, trail_result) = tokio::join!(
            self.webcams.fetch_webcams(coordinate, self.webcam_limits),
            self.trails.fetch_trails(coordinate, self.trail_limits),
        );

        let (webcams, webcam_status) = match webcam_result {
            Ok(result) => {
                let status = SourceStatus::Ok {
                    count: result.webcams.len(),
                    dropped: result.dropped,
                };
                (result.webcams, status)
            }
            Err(e) => {
                tracing::warn!(
                    source = "webcams",
                    %coordinate,
                    kind = %e.kind(),
                    error = %e,
                    "webcam source failed, returning no webcams"
                );
                (Vec::new(), SourceStatus::Failed { kind: e.kind() })
            }
        };

        let (trails, trail_status) = match trail_result {
            Ok(result) => {
                let status = SourceStatus::Ok {
                    count: result.trails.len(),
                    dropped: result.dropped,
                };
                (result.trails, status)
            }
            Err(e) => {
                tracing::warn!(
                    source = "trails",
                    %coordinate,
                    kind = %e.kind(),
                    error = %e,
                    "trail source failed, returning no trails"
                );
                (Vec::new(), SourceStatus::Failed { kind: e.kind() })
            }
        };

        tracing::info!(
            %coordinate,
            %webcam_status,
            %trail_status,
            "search complete"
        );

        SearchResults {
            coordinate,
            webcams,
            trails,
            webcam_status,
            trail_status,
        }
    }

    /// Validates a raw pair, then searches.
    ///
    /// # Errors
    ///
    /// Returns [`AggregatorError::InvalidCoordinate`] for non-finite or
    /// out-of-range input. No request is issued in that case.
    pub async fn search_lat_lon(
        &self,
        latitude: f64,
        longitude: f64,
    ) -> Result<SearchResults, AggregatorError> {
        let coordinate = Coordinate::new(latitude, longitude)?;
        Ok(self.search(coordinate).await)
    }

    #[must_use]
    pub fn webcam_limits(&self) -> SourceLimits {
        self.webcam_limits
    }

    #[must_use]
    pub fn trail_limits(&self) -> SourceLimits {
        self.trail_limits
    }
}

#[cfg(test)]
#[path = "aggregator_test.rs"]
mod tests;
