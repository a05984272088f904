//! Concurrent webcam and trail search around a coordinate.
//!
//! [`GeoAggregator`] fans one coordinate out to both sources at once and
//! never fails a search because a source did: a failed source contributes an
//! empty list plus a [`SourceStatus::Failed`](geoview_core::SourceStatus)
//! tag. [`LatestSearch`] layers last-search-wins cancellation on top.

pub mod aggregator;
pub mod error;
pub mod latest;
pub mod results;

pub use aggregator::GeoAggregator;
pub use error::{AggregatorError, SearchError};
pub use latest::LatestSearch;
pub use results::SearchResults;
