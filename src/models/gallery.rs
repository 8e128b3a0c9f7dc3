//! Gallery image model matching the `gallery_images` table.

use std::str::FromStr;

use serde::{Deserialize, Serialize};
use validator::Validate;

/// Section of the gallery an image belongs to.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum GalleryCategory {
    Rooms,
    Exterior,
    Pool,
    Views,
    Dining,
}

impl GalleryCategory {
    pub const ALL: [GalleryCategory; 5] = [
        GalleryCategory::Rooms,
        GalleryCategory::Exterior,
        GalleryCategory::Pool,
        GalleryCategory::Views,
        GalleryCategory::Dining,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            GalleryCategory::Rooms => "rooms",
            GalleryCategory::Exterior => "exterior",
            GalleryCategory::Pool => "pool",
            GalleryCategory::Views => "views",
            GalleryCategory::Dining => "dining",
        }
    }
}

/// Error returned for a category name outside the known set.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownCategory(pub String);

impl std::fmt::Display for UnknownCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Unknown gallery category: {}", self.0)
    }
}

impl std::error::Error for UnknownCategory {}

impl FromStr for GalleryCategory {
    type Err = UnknownCategory;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        GalleryCategory::ALL
            .into_iter()
            .find(|c| c.as_str() == s)
            .ok_or_else(|| UnknownCategory(s.to_string()))
    }
}

/// An image shown in the photo gallery.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct GalleryImage {
    pub id: String,
    pub image_url: String,
    pub category: GalleryCategory,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub alt_key: Option<String>,
    pub order_position: i64,
    pub created_at: String,
}

/// Request body for adding a gallery image.
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct CreateGalleryImageRequest {
    #[validate(url)]
    pub image_url: String,
    pub category: GalleryCategory,
    #[serde(default)]
    pub alt_key: Option<String>,
    #[serde(default)]
    pub order_position: i64,
}
