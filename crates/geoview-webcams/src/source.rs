use std::future::Future;

use geoview_core::{Coordinate, SourceLimits};

use crate::client::WebcamClient;
use crate::error::WebcamError;
use crate::record::WebcamQueryResult;

/// Anything that can answer "which webcams are near this point".
///
/// The aggregator depends on this seam rather than on [`WebcamClient`] so
/// tests can substitute canned or failing sources.
pub trait WebcamSource {
    fn fetch_webcams(
        &self,
        coordinate: Coordinate,
        limits: SourceLimits,
    ) -> impl Future<Output = Result<WebcamQueryResult, WebcamError>> + Send;
}

impl WebcamSource for WebcamClient {
    async fn fetch_webcams(
        &self,
        coordinate: Coordinate,
        limits: SourceLimits,
    ) -> Result<WebcamQueryResult, WebcamError> {
        self.fetch_nearby(coordinate, limits).await
    }
}
