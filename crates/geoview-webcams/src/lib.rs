//! Webcam directory source.
//!
//! Queries a Windy-style webcam directory for cameras near a coordinate and
//! normalizes the response into [`WebcamRecord`]s.

pub mod client;
pub mod error;
pub mod normalize;
pub mod record;
pub mod source;
pub mod types;

pub use client::{WebcamClient, DEFAULT_CATEGORIES};
pub use error::WebcamError;
pub use normalize::normalize_webcam;
pub use record::{
    ImageSet, ImageSize, ImageSizes, WebcamCategory, WebcamImages, WebcamLocation,
    WebcamQueryResult, WebcamRecord, WebcamUrls,
};
pub use source::WebcamSource;
