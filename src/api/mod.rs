//! REST API module.
//!
//! Contains the public site routes and the admin routes.

mod admin;
mod booking;
mod contact;
mod gallery;
mod reservations;
mod rooms;

pub use admin::*;
pub use booking::*;
pub use contact::*;
pub use gallery::*;
pub use reservations::*;
pub use rooms::*;

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;

/// Success response envelope.
#[derive(Debug, Serialize)]
pub struct ApiResponse<T: Serialize> {
    pub success: bool,
    pub data: T,
}

impl<T: Serialize> ApiResponse<T> {
    pub fn new(data: T) -> Self {
        Self {
            success: true,
            data,
        }
    }
}

impl<T: Serialize> IntoResponse for ApiResponse<T> {
    fn into_response(self) -> Response {
        (StatusCode::OK, Json(self)).into_response()
    }
}

/// Response type that can be either success or error.
pub type ApiResult<T> = Result<ApiResponse<T>, crate::errors::AppError>;

/// Create a successful API response.
pub fn success<T: Serialize>(data: T) -> ApiResult<T> {
    Ok(ApiResponse::new(data))
}

/// A stored form submission plus the notification the site shows for it.
#[derive(Debug, Serialize)]
pub struct Receipt<T: Serialize> {
    pub record: T,
    /// i18n key of the success toast
    pub notice: &'static str,
}
