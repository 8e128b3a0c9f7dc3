//! Admin API endpoints for managing site content and reading submissions.

use axum::{extract::State, Json};
use validator::Validate;

use super::{success, ApiResult};
use crate::models::{
    ContactMessage, CreateGalleryImageRequest, CreateRoomRequest, GalleryImage, Reservation, Room,
};
use crate::AppState;

/// POST /api/admin/rooms - Add a room to the catalog.
pub async fn create_room(
    State(state): State<AppState>,
    Json(request): Json<CreateRoomRequest>,
) -> ApiResult<Room> {
    request.validate()?;

    let room = state.repo.create_room(&request).await?;
    tracing::info!("Room {} created ({})", room.name_en, room.id);
    success(room)
}

/// POST /api/admin/gallery - Add an image to the gallery.
pub async fn create_gallery_image(
    State(state): State<AppState>,
    Json(request): Json<CreateGalleryImageRequest>,
) -> ApiResult<GalleryImage> {
    request.validate()?;

    let image = state.repo.create_gallery_image(&request).await?;
    tracing::info!("Gallery image {} added to {}", image.id, image.category.as_str());
    success(image)
}

/// GET /api/admin/contact-messages - All contact messages, newest first.
pub async fn list_contact_messages(
    State(state): State<AppState>,
) -> ApiResult<Vec<ContactMessage>> {
    success(state.repo.list_contact_messages().await?)
}

/// GET /api/admin/reservations - All reservation requests, newest first.
pub async fn list_reservations(State(state): State<AppState>) -> ApiResult<Vec<Reservation>> {
    success(state.repo.list_reservations().await?)
}
