//! Coordinate providers: where the search centre comes from.

use std::future::Future;

use crate::coordinate::Coordinate;

/// Supplies the coordinate a search should be centred on, e.g. a device
/// location lookup. `None` means no location is available right now.
pub trait CoordinateProvider {
    fn current_coordinate(&self) -> impl Future<Output = Option<Coordinate>> + Send;
}

/// A provider that always returns the same answer (manual entry, tests).
#[derive(Debug, Clone, Copy)]
pub struct FixedCoordinate(pub Option<Coordinate>);

impl CoordinateProvider for FixedCoordinate {
    async fn current_coordinate(&self) -> Option<Coordinate> {
        self.0
    }
}

/// Asks `provider` for a coordinate and falls back to `fallback` when it has none.
pub async fn resolve_or_default<P>(provider: &P, fallback: Coordinate) -> Coordinate
where
    P: CoordinateProvider + Sync,
{
    provider.current_coordinate().await.unwrap_or(fallback)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn resolve_prefers_provider_value() {
        let here = Coordinate::new(43.5, -116.0).unwrap();
        let fallback = Coordinate::new(39.8283, -98.5795).unwrap();
        let resolved = resolve_or_default(&FixedCoordinate(Some(here)), fallback).await;
        assert_eq!(resolved, here);
    }

    #[tokio::test]
    async fn resolve_uses_fallback_when_provider_is_empty() {
        let fallback = Coordinate::new(39.8283, -98.5795).unwrap();
        let resolved = resolve_or_default(&FixedCoordinate(None), fallback).await;
        assert_eq!(resolved, fallback);
    }
}
