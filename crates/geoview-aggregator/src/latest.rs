//! Last-search-wins coordination.
//!
//! Each submitted search runs as its own task. Submitting a new one aborts the
//! task still in flight, and the superseded caller gets
//! [`SearchError::Superseded`] instead of stale results.

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

use geoview_core::Coordinate;
use geoview_trails::TrailSource;
use geoview_webcams::WebcamSource;
use tokio::sync::Mutex;
use tokio::task::AbortHandle;

use crate::aggregator::GeoAggregator;
use crate::error::SearchError;
use crate::results::SearchResults;

pub struct LatestSearch<W, T> {
    aggregator: Arc<GeoAggregator<W, T>>,
    generation: AtomicU64,
    in_flight: Mutex<Option<AbortHandle>>,
}

impl<W, T> LatestSearch<W, T>
where
    W: WebcamSource + Send + Sync + 'static,
    T: TrailSource + Send + Sync + 'static,
{
    #[must_use]
    pub fn new(aggregator: GeoAggregator<W, T>) -> Self {
        Self::from_shared(Arc::new(aggregator))
    }

    #[must_use]
    pub fn from_shared(aggregator: Arc<GeoAggregator<W, T>>) -> Self {
        Self {
            aggregator,
            generation: AtomicU64::new(0),
            in_flight: Mutex::new(None),
        }
    }

    /// Starts a search for `coordinate`, cancelling any search still running.
    ///
    /// # Errors
    ///
    /// - [`SearchError::Superseded`] if another `submit` started before this
    ///   search finished.
    /// - [`SearchError::Task`] if the search task panicked.
    pub async fn submit(&self, coordinate: Coordinate) -> Result<SearchResults, SearchError> {
        // Generation bump, abort, and handle swap happen under one lock so
        // concurrent submits agree on which one is newest.
        let (generation, task) = {
            let mut in_flight = self.in_flight.lock().await;
            if let Some(previous) = in_flight.take() {
                previous.abort();
            }
            let generation = self.generation.fetch_add(1, Ordering::SeqCst) + 1;
            let aggregator = Arc::clone(&self.aggregator);
            let task = tokio::spawn(async move { aggregator.search(coordinate).await });
            *in_flight = Some(task.abort_handle());
            (generation, task)
        };

        let outcome = task.await;
        if self.generation.load(Ordering::SeqCst) != generation {
            tracing::debug!(%coordinate, generation, "discarding superseded search");
            return Err(SearchError::Superseded);
        }

        match outcome {
            Ok(results) => Ok(results),
            Err(e) if e.is_cancelled() => Err(SearchError::Superseded),
            Err(e) => Err(SearchError::Task(e)),
        }
    }

    /// Number of searches submitted so far.
    #[must_use]
    pub fn generation(&self) -> u64 {
        self.generation.load(Ordering::SeqCst)
    }

    #[must_use]
    pub fn aggregator(&self) -> &GeoAggregator<W, T> {
        &self.aggregator
    }
}
