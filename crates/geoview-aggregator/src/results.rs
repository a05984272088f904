use geoview_core::{Coordinate, SourceStatus};
use geoview_trails::{filter_by_activities, TrailRecord};
use geoview_webcams::WebcamRecord;
use serde::Serialize;

/// One completed search: both record lists plus how each source fared.
///
/// A failed source shows up as an empty list with a `Failed` status, never
/// as an error.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SearchResults {
    pub coordinate: Coordinate,
    pub webcams: Vec<WebcamRecord>,
    pub trails: Vec<TrailRecord>,
    pub webcam_status: SourceStatus,
    pub trail_status: SourceStatus,
}

impl SearchResults {
    #[must_use]
    pub fn webcam_by_id(&self, id: i64) -> Option<&WebcamRecord> {
        self.webcams.iter().find(|w| w.id == id)
    }

    #[must_use]
    pub fn trail_by_place_id(&self, place_id: i64) -> Option<&TrailRecord> {
        self.trails.iter().find(|t| t.place_id == place_id)
    }

    /// Trails offering any of `activities`; everything when the filter is empty.
    #[must_use]
    pub fn trails_offering<S: AsRef<str>>(&self, activities: &[S]) -> Vec<&TrailRecord> {
        filter_by_activities(&self.trails, activities)
    }

    /// True when neither source returned a record, whatever the reason.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.webcams.is_empty() && self.trails.is_empty()
    }

    #[must_use]
    pub fn all_failed(&self) -> bool {
        !self.webcam_status.is_ok() && !self.trail_status.is_ok()
    }
}
