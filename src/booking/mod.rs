//! Reservation query builder for the hosted booking engine.
//!
//! Turns the dates and guest counts entered on the site into the search payload the
//! booking engine expects, and appends it to the engine URL as `?search=<json>`.

use std::collections::BTreeMap;

use chrono::NaiveDate;
use serde::Serialize;

use crate::errors::AppError;

/// Age preselected for every child until the visitor picks one.
pub const DEFAULT_CHILD_AGE: u8 = 1;
pub const MIN_CHILD_AGE: u8 = 1;
pub const MAX_CHILD_AGE: u8 = 10;
pub const MIN_ADULTS: u32 = 1;
pub const MAX_ADULTS: u32 = 10;
pub const MAX_CHILDREN: u32 = 10;

/// Number of nights between two calendar dates.
pub fn night_count(check_in: NaiveDate, check_out: NaiveDate) -> i64 {
    (check_out - check_in).num_days()
}

/// Adults, children and one age per child.
///
/// The age list always has exactly one entry per child.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GuestSelection {
    adults: u32,
    children: u32,
    child_ages: Vec<u8>,
}

impl GuestSelection {
    pub fn new(adults: u32, children: u32) -> Self {
        let mut selection = Self {
            adults,
            children: 0,
            child_ages: Vec::new(),
        };
        selection.set_children(children);
        selection
    }

    /// Change the child count. Any ages picked so far are discarded.
    pub fn set_children(&mut self, children: u32) {
        self.children = children;
        self.child_ages = default_ages(children);
    }

    /// Set the age of the child at `index` (zero-based).
    pub fn set_child_age(&mut self, index: usize, age: u8) -> Result<(), AppError> {
        if !(MIN_CHILD_AGE..=MAX_CHILD_AGE).contains(&age) {
            return Err(AppError::Validation(format!(
                "Child age must be between {} and {}",
                MIN_CHILD_AGE, MAX_CHILD_AGE
            )));
        }
        let slot = self.child_ages.get_mut(index).ok_or_else(|| {
            AppError::Validation(format!("No child at position {}", index + 1))
        })?;
        *slot = age;
        Ok(())
    }

    pub fn adults(&self) -> u32 {
        self.adults
    }

    pub fn children(&self) -> u32 {
        self.children
    }

    pub fn child_ages(&self) -> &[u8] {
        &self.child_ages
    }

    pub fn guest_count(&self) -> u32 {
        self.adults + self.children
    }
}

fn default_ages(children: u32) -> Vec<u8> {
    vec![DEFAULT_CHILD_AGE; children as usize]
}

/// What the visitor typed into the reservation form.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BookingQuery {
    pub check_in: NaiveDate,
    pub check_out: NaiveDate,
    pub adults: u32,
    pub children: u32,
    pub child_ages: Option<Vec<u8>>,
}

impl BookingQuery {
    /// Check dates and guest counts against what the form allows.
    pub fn validate(&self) -> Result<(), AppError> {
        if self.check_out <= self.check_in {
            return Err(AppError::Validation(
                "Check-out must be after check-in".to_string(),
            ));
        }
        if !(MIN_ADULTS..=MAX_ADULTS).contains(&self.adults) {
            return Err(AppError::Validation(format!(
                "Adults must be between {} and {}",
                MIN_ADULTS, MAX_ADULTS
            )));
        }
        if self.children > MAX_CHILDREN {
            return Err(AppError::Validation(format!(
                "Children must be at most {}",
                MAX_CHILDREN
            )));
        }
        self.guests().map(|_| ())
    }

    /// Normalized guest selection.
    ///
    /// Ages whose count differs from the child count are stale and fall back to the defaults.
    pub fn guests(&self) -> Result<GuestSelection, AppError> {
        let mut selection = GuestSelection::new(self.adults, self.children);
        if let Some(ages) = self.matching_ages() {
            for (index, age) in ages.iter().enumerate() {
                selection.set_child_age(index, *age)?;
            }
        }
        Ok(selection)
    }

    pub fn nights(&self) -> i64 {
        night_count(self.check_in, self.check_out)
    }

    fn matching_ages(&self) -> Option<&[u8]> {
        self.child_ages
            .as_deref()
            .filter(|ages| ages.len() == self.children as usize)
    }
}

/// Occupancy of one room in the booking engine search.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GuestRoom {
    pub adult_count: u32,
    pub guest_count: u32,
    pub child_count: u32,
    pub child_ages: Vec<u8>,
}

impl From<&GuestSelection> for GuestRoom {
    fn from(selection: &GuestSelection) -> Self {
        Self {
            adult_count: selection.adults(),
            guest_count: selection.guest_count(),
            child_count: selection.children(),
            child_ages: selection.child_ages().to_vec(),
        }
    }
}

/// Search payload understood by the booking engine.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BookingSearch {
    pub checkin_date: NaiveDate,
    pub checkout_date: NaiveDate,
    pub day_count: i64,
    pub room_count: u32,
    pub total_adult: u32,
    pub total_child: u32,
    pub rooms: Vec<GuestRoom>,
    pub guest_rooms: BTreeMap<String, GuestRoom>,
}

impl BookingSearch {
    /// Build the single-room search for a validated query.
    pub fn from_query(query: &BookingQuery) -> Result<Self, AppError> {
        query.validate()?;

        let guests = query.guests()?;
        let room = GuestRoom::from(&guests);
        let mut guest_rooms = BTreeMap::new();
        guest_rooms.insert("0".to_string(), room.clone());

        Ok(Self {
            checkin_date: query.check_in,
            checkout_date: query.check_out,
            day_count: query.nights(),
            room_count: 1,
            total_adult: guests.adults(),
            total_child: guests.children(),
            rooms: vec![room],
            guest_rooms,
        })
    }

    /// Booking engine URL carrying this search as percent-encoded JSON.
    pub fn redirect_url(&self, base: &str) -> Result<String, AppError> {
        let payload = serde_json::to_string(self)?;
        let separator = if base.contains('?') { '&' } else { '?' };
        Ok(format!(
            "{}{}search={}",
            base,
            separator,
            urlencoding::encode(&payload)
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(s: &str) -> NaiveDate {
        NaiveDate::parse_from_str(s, "%Y-%m-%d").unwrap()
    }

    fn query(check_in: &str, check_out: &str, adults: u32, children: u32) -> BookingQuery {
        BookingQuery {
            check_in: date(check_in),
            check_out: date(check_out),
            adults,
            children,
            child_ages: None,
        }
    }

    #[test]
    fn test_night_count_is_day_difference() {
        let start = date("2026-02-20");
        for nights in 1..=60 {
            let end = start + chrono::Duration::days(nights);
            assert_eq!(night_count(start, end), nights);
        }
    }

    #[test]
    fn test_night_count_across_month_and_dst() {
        assert_eq!(night_count(date("2026-03-28"), date("2026-04-02")), 5);
        assert_eq!(night_count(date("2026-10-24"), date("2026-10-26")), 2);
        assert_eq!(night_count(date("2027-12-31"), date("2028-01-01")), 1);
    }

    #[test]
    fn test_set_children_resets_ages() {
        let mut guests = GuestSelection::new(2, 2);
        guests.set_child_age(0, 7).unwrap();
        guests.set_child_age(1, 4).unwrap();
        assert_eq!(guests.child_ages(), &[7, 4]);

        guests.set_children(3);
        assert_eq!(guests.child_ages(), &[1, 1, 1]);

        guests.set_children(0);
        assert!(guests.child_ages().is_empty());
    }

    #[test]
    fn test_set_child_age_bounds() {
        let mut guests = GuestSelection::new(2, 1);
        assert!(guests.set_child_age(0, 0).is_err());
        assert!(guests.set_child_age(0, 11).is_err());
        assert!(guests.set_child_age(1, 5).is_err());
        assert!(guests.set_child_age(0, 10).is_ok());
        assert_eq!(guests.guest_count(), 3);
    }

    #[test]
    fn test_stale_ages_fall_back_to_defaults() {
        let mut q = query("2026-07-01", "2026-07-04", 2, 3);
        q.child_ages = Some(vec![8, 6]);
        assert_eq!(q.guests().unwrap().child_ages(), &[1, 1, 1]);

        q.child_ages = Some(vec![8, 6, 2]);
        assert_eq!(q.guests().unwrap().child_ages(), &[8, 6, 2]);
    }

    #[test]
    fn test_validate_rejects_bad_stays() {
        assert!(query("2026-07-04", "2026-07-04", 2, 0).validate().is_err());
        assert!(query("2026-07-04", "2026-07-01", 2, 0).validate().is_err());
        assert!(query("2026-07-01", "2026-07-04", 0, 0).validate().is_err());
        assert!(query("2026-07-01", "2026-07-04", 11, 0).validate().is_err());
        assert!(query("2026-07-01", "2026-07-04", 2, 11).validate().is_err());

        let mut q = query("2026-07-01", "2026-07-04", 2, 1);
        q.child_ages = Some(vec![12]);
        assert!(q.validate().is_err());
        q.child_ages = Some(vec![9]);
        assert!(q.validate().is_ok());
    }

    #[test]
    fn test_search_payload_shape() {
        let mut q = query("2026-08-10", "2026-08-13", 2, 2);
        q.child_ages = Some(vec![5, 9]);
        let search = BookingSearch::from_query(&q).unwrap();

        let value = serde_json::to_value(&search).unwrap();
        assert_eq!(value["checkin_date"], "2026-08-10");
        assert_eq!(value["checkout_date"], "2026-08-13");
        assert_eq!(value["day_count"], 3);
        assert_eq!(value["room_count"], 1);
        assert_eq!(value["total_adult"], 2);
        assert_eq!(value["total_child"], 2);
        assert_eq!(value["rooms"][0]["guest_count"], 4);
        assert_eq!(value["rooms"][0]["child_ages"], serde_json::json!([5, 9]));
        assert_eq!(value["guest_rooms"]["0"], value["rooms"][0]);
    }

    #[test]
    fn test_redirect_url_encodes_payload() {
        let search = BookingSearch::from_query(&query("2026-08-10", "2026-08-12", 1, 0)).unwrap();
        let url = search
            .redirect_url("https://engine.example/bv3/search")
            .unwrap();

        let encoded = url
            .strip_prefix("https://engine.example/bv3/search?search=")
            .unwrap();
        assert!(!encoded.contains('{'));
        assert!(!encoded.contains('"'));

        let decoded = urlencoding::decode(encoded).unwrap();
        let value: serde_json::Value = serde_json::from_str(&decoded).unwrap();
        assert_eq!(value["day_count"], 2);
        assert_eq!(value["total_adult"], 1);
    }

    #[test]
    fn test_redirect_url_appends_to_existing_query() {
        let search = BookingSearch::from_query(&query("2026-08-10", "2026-08-12", 1, 0)).unwrap();
        let url = search
            .redirect_url("https://engine.example/search?lang=fr")
            .unwrap();
        assert!(url.starts_with("https://engine.example/search?lang=fr&search="));
    }
}
