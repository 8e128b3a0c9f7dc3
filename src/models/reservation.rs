//! Reservation model matching the `reservations` table.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::booking::BookingQuery;

/// A reservation request left on the site.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Reservation {
    pub id: String,
    pub check_in: NaiveDate,
    pub check_out: NaiveDate,
    pub adults: u32,
    pub children: u32,
    pub child_ages: Vec<u8>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub room_id: Option<String>,
    pub guest_name: String,
    pub guest_email: String,
    pub guest_phone: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub special_requests: Option<String>,
    pub created_at: String,
}

/// Reservation form submission.
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct CreateReservationRequest {
    pub check_in: NaiveDate,
    pub check_out: NaiveDate,
    #[serde(default = "default_adults")]
    pub adults: u32,
    #[serde(default)]
    pub children: u32,
    #[serde(default)]
    pub child_ages: Option<Vec<u8>>,
    #[serde(default)]
    pub room_id: Option<String>,
    #[validate(length(min = 1, max = 200))]
    pub guest_name: String,
    #[validate(email)]
    pub guest_email: String,
    #[validate(length(min = 1, max = 40))]
    pub guest_phone: String,
    #[serde(default)]
    #[validate(length(max = 2000))]
    pub special_requests: Option<String>,
}

/// The form starts at two adults.
fn default_adults() -> u32 {
    2
}

impl CreateReservationRequest {
    /// Trim the text fields; blank optional fields count as absent.
    pub fn normalized(self) -> Self {
        Self {
            guest_name: self.guest_name.trim().to_string(),
            guest_email: self.guest_email.trim().to_string(),
            guest_phone: self.guest_phone.trim().to_string(),
            special_requests: self
                .special_requests
                .map(|s| s.trim().to_string())
                .filter(|s| !s.is_empty()),
            room_id: self
                .room_id
                .map(|s| s.trim().to_string())
                .filter(|s| !s.is_empty()),
            ..self
        }
    }

    /// Dates and guests as a booking query.
    pub fn booking_query(&self) -> BookingQuery {
        BookingQuery {
            check_in: self.check_in,
            check_out: self.check_out,
            adults: self.adults,
            children: self.children,
            child_ages: self.child_ages.clone(),
        }
    }
}
