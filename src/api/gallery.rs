//! Gallery API endpoints.

use axum::extract::{Query, State};
use serde::Deserialize;

use super::{success, ApiResult};
use crate::gallery::{CategoryFilter, MarqueeTrack};
use crate::models::GalleryImage;
use crate::AppState;

/// Gallery query parameters.
#[derive(Debug, Default, Deserialize)]
pub struct GalleryQuery {
    /// `all` or one category name (default: all).
    #[serde(default)]
    pub category: Option<String>,
}

async fn filtered_images(
    state: &AppState,
    query: &GalleryQuery,
) -> Result<Vec<GalleryImage>, crate::errors::AppError> {
    let filter = CategoryFilter::parse(query.category.as_deref())?;
    let images = state.repo.list_gallery_images().await?;
    Ok(filter.apply(images))
}

/// GET /api/gallery - Gallery images in the selected category.
pub async fn list_gallery(
    State(state): State<AppState>,
    Query(query): Query<GalleryQuery>,
) -> ApiResult<Vec<GalleryImage>> {
    success(filtered_images(&state, &query).await?)
}

/// GET /api/gallery/marquee - The selected images laid out for the scrolling strip.
pub async fn gallery_marquee(
    State(state): State<AppState>,
    Query(query): Query<GalleryQuery>,
) -> ApiResult<MarqueeTrack> {
    let images = filtered_images(&state, &query).await?;
    success(MarqueeTrack::new(images))
}
