//! Gallery category filter and the looping marquee strip.

use std::str::FromStr;

use serde::Serialize;

use crate::errors::AppError;
use crate::models::{GalleryCategory, GalleryImage};

/// Horizontal scroll speed of the marquee, in pixels per animation frame.
pub const MARQUEE_SPEED: f64 = 0.3;

/// Category picked in the gallery filter bar.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CategoryFilter {
    #[default]
    All,
    Only(GalleryCategory),
}

impl CategoryFilter {
    /// Parse an optional query value; absent or empty means `all`.
    pub fn parse(value: Option<&str>) -> Result<Self, AppError> {
        match value.map(str::trim) {
            None | Some("") => Ok(CategoryFilter::All),
            Some(raw) => raw.parse(),
        }
    }

    pub fn matches(&self, category: GalleryCategory) -> bool {
        match self {
            CategoryFilter::All => true,
            CategoryFilter::Only(wanted) => *wanted == category,
        }
    }

    /// Keep the images in this category, preserving their order.
    pub fn apply(&self, images: Vec<GalleryImage>) -> Vec<GalleryImage> {
        images
            .into_iter()
            .filter(|image| self.matches(image.category))
            .collect()
    }
}

impl FromStr for CategoryFilter {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s == "all" {
            return Ok(CategoryFilter::All);
        }
        s.parse::<GalleryCategory>()
            .map(CategoryFilter::Only)
            .map_err(|e| AppError::BadRequest(e.to_string()))
    }
}

/// Images laid out for the continuously scrolling strip.
///
/// The track holds the images twice so the second copy slides in as the first leaves.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MarqueeTrack {
    pub images: Vec<GalleryImage>,
    pub speed_px_per_frame: f64,
}

impl MarqueeTrack {
    pub fn new(images: Vec<GalleryImage>) -> Self {
        let mut track = Vec::with_capacity(images.len() * 2);
        track.extend(images.iter().cloned());
        track.extend(images);
        Self {
            images: track,
            speed_px_per_frame: MARQUEE_SPEED,
        }
    }

    /// Offset after one frame for a track `track_width` pixels wide.
    ///
    /// Wraps to zero once half the width (one full copy) has scrolled past.
    #[allow(dead_code)]
    pub fn advance(&self, offset: f64, track_width: f64) -> f64 {
        let next = offset + self.speed_px_per_frame;
        if next >= track_width / 2.0 {
            0.0
        } else {
            next
        }
    }
}
