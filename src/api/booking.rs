//! Booking engine redirect endpoints.

use axum::{
    extract::{Query, State},
    http::{header, HeaderValue, StatusCode},
    response::{IntoResponse, Response},
};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::{success, ApiResult};
use crate::booking::{BookingQuery, BookingSearch};
use crate::errors::AppError;
use crate::AppState;

/// Reservation widget fields as query parameters.
#[derive(Debug, Deserialize)]
pub struct BookingParams {
    pub check_in: NaiveDate,
    pub check_out: NaiveDate,
    #[serde(default = "default_adults")]
    pub adults: u32,
    #[serde(default)]
    pub children: u32,
    /// Comma-separated ages, one per child.
    #[serde(default)]
    pub child_ages: Option<String>,
}

fn default_adults() -> u32 {
    2
}

impl BookingParams {
    pub fn into_query(self) -> Result<BookingQuery, AppError> {
        let child_ages = match self.child_ages.as_deref().map(str::trim) {
            None | Some("") => None,
            Some(raw) => Some(parse_ages(raw)?),
        };
        Ok(BookingQuery {
            check_in: self.check_in,
            check_out: self.check_out,
            adults: self.adults,
            children: self.children,
            child_ages,
        })
    }
}

fn parse_ages(raw: &str) -> Result<Vec<u8>, AppError> {
    raw.split(',')
        .map(|part| {
            part.trim()
                .parse::<u8>()
                .map_err(|_| AppError::BadRequest(format!("Invalid child age: {:?}", part)))
        })
        .collect()
}

/// Search payload and the URL that carries it.
#[derive(Debug, Serialize)]
pub struct BookingRedirect {
    pub url: String,
    pub search: BookingSearch,
}

fn build_redirect(state: &AppState, params: BookingParams) -> Result<BookingRedirect, AppError> {
    let search = BookingSearch::from_query(&params.into_query()?)?;
    let url = search.redirect_url(&state.config.booking_engine_url)?;
    Ok(BookingRedirect { url, search })
}

/// GET /api/booking/search - Build the booking engine search without redirecting.
pub async fn booking_search(
    State(state): State<AppState>,
    Query(params): Query<BookingParams>,
) -> ApiResult<BookingRedirect> {
    success(build_redirect(&state, params)?)
}

/// GET /book - Send the visitor to the booking engine.
pub async fn book(
    State(state): State<AppState>,
    Query(params): Query<BookingParams>,
) -> Result<Response, AppError> {
    let redirect = build_redirect(&state, params)?;
    let location = HeaderValue::from_str(&redirect.url).map_err(|_| {
        AppError::Internal("Booking engine URL is not a valid header value".to_string())
    })?;

    tracing::debug!(
        "Redirecting to booking engine for {} night(s)",
        redirect.search.day_count
    );

    Ok((StatusCode::SEE_OTHER, [(header::LOCATION, location)]).into_response())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn params(child_ages: Option<&str>, children: u32) -> BookingParams {
        BookingParams {
            check_in: NaiveDate::from_ymd_opt(2026, 5, 1).unwrap(),
            check_out: NaiveDate::from_ymd_opt(2026, 5, 3).unwrap(),
            adults: 2,
            children,
            child_ages: child_ages.map(str::to_string),
        }
    }

    #[test]
    fn test_parse_child_ages() {
        let query = params(Some("3, 7"), 2).into_query().unwrap();
        assert_eq!(query.child_ages, Some(vec![3, 7]));

        let query = params(Some(""), 0).into_query().unwrap();
        assert_eq!(query.child_ages, None);

        assert!(params(Some("3,x"), 2).into_query().is_err());
        assert!(params(Some("-1"), 1).into_query().is_err());
    }
}
