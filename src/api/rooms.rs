//! Room API endpoints.

use axum::extract::{Path, Query, State};

use super::{success, ApiResult};
use crate::errors::AppError;
use crate::models::{Room, RoomFilter};
use crate::AppState;

/// GET /api/rooms - List rooms, optionally filtered by minimum capacity.
pub async fn list_rooms(
    State(state): State<AppState>,
    Query(filter): Query<RoomFilter>,
) -> ApiResult<Vec<Room>> {
    if filter.min_capacity.is_some_and(|c| c < 0) {
        return Err(AppError::Validation(
            "min_capacity must not be negative".to_string(),
        ));
    }

    success(state.repo.list_rooms(&filter).await?)
}

/// GET /api/rooms/:id - Get a single room.
pub async fn get_room(State(state): State<AppState>, Path(id): Path<String>) -> ApiResult<Room> {
    match state.repo.get_room(&id).await? {
        Some(room) => success(room),
        None => Err(AppError::NotFound(format!("Room {} not found", id))),
    }
}
