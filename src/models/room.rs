//! Room model matching the `rooms` table.

use serde::{Deserialize, Serialize};
use validator::Validate;

/// A bookable room with bilingual copy.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Room {
    pub id: String,
    pub name_fr: String,
    pub name_en: String,
    pub description_fr: String,
    pub description_en: String,
    pub image_url: Vec<String>,
    pub type_fr: String,
    pub type_en: String,
    /// Maximum number of guests
    pub capacity: i64,
    /// Surface area in square meters
    pub surface: f64,
    pub price_per_night: f64,
    pub devise: String,
    pub status_fr: String,
    pub status_en: String,
    pub amenities_fr: Vec<String>,
    pub amenities_en: Vec<String>,
    pub order_position: i64,
    pub created_at: String,
}

/// Request body for creating a room.
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct CreateRoomRequest {
    #[validate(length(min = 1, max = 120))]
    pub name_fr: String,
    #[validate(length(min = 1, max = 120))]
    pub name_en: String,
    #[serde(default)]
    pub description_fr: String,
    #[serde(default)]
    pub description_en: String,
    #[serde(default)]
    pub image_url: Vec<String>,
    #[serde(default)]
    pub type_fr: String,
    #[serde(default)]
    pub type_en: String,
    #[validate(range(min = 1, max = 20))]
    pub capacity: i64,
    #[validate(range(min = 0.0))]
    #[serde(default)]
    pub surface: f64,
    #[validate(range(min = 0.0))]
    pub price_per_night: f64,
    #[serde(default = "default_devise")]
    #[validate(length(equal = 3))]
    pub devise: String,
    #[serde(default = "default_status_fr")]
    pub status_fr: String,
    #[serde(default = "default_status_en")]
    pub status_en: String,
    #[serde(default)]
    pub amenities_fr: Vec<String>,
    #[serde(default)]
    pub amenities_en: Vec<String>,
    #[serde(default)]
    pub order_position: i64,
}

fn default_devise() -> String {
    "MAD".to_string()
}

fn default_status_fr() -> String {
    "Disponible".to_string()
}

fn default_status_en() -> String {
    "Available".to_string()
}

/// Query parameters for listing rooms.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct RoomFilter {
    /// Only rooms sleeping at least this many guests.
    #[serde(default)]
    pub min_capacity: Option<i64>,
}
