//! Reservation form endpoint.

use axum::{extract::State, Json};
use validator::Validate;

use super::{success, ApiResult, Receipt};
use crate::db::NewReservation;
use crate::errors::AppError;
use crate::models::{CreateReservationRequest, Reservation};
use crate::AppState;

pub const RESERVATION_SUCCESS_NOTICE: &str = "reservation_page.success_message";

/// POST /api/reservations - Store a reservation request.
pub async fn submit_reservation(
    State(state): State<AppState>,
    Json(request): Json<CreateReservationRequest>,
) -> ApiResult<Receipt<Reservation>> {
    let request = request.normalized();
    request.validate()?;

    let query = request.booking_query();
    query.validate()?;
    let guests = query.guests()?;

    if let Some(room_id) = &request.room_id {
        let room = state
            .repo
            .get_room(room_id)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Room {} not found", room_id)))?;

        if i64::from(guests.guest_count()) > room.capacity {
            return Err(AppError::Validation(format!(
                "{} sleeps at most {} guests, {} requested",
                room.name_en,
                room.capacity,
                guests.guest_count()
            )));
        }
    }

    let reservation = state
        .repo
        .create_reservation(NewReservation {
            check_in: query.check_in,
            check_out: query.check_out,
            adults: guests.adults(),
            children: guests.children(),
            child_ages: guests.child_ages().to_vec(),
            room_id: request.room_id,
            guest_name: request.guest_name,
            guest_email: request.guest_email,
            guest_phone: request.guest_phone,
            special_requests: request.special_requests,
        })
        .await?;

    tracing::info!(
        "Reservation {} received for {} night(s)",
        reservation.id,
        query.nights()
    );

    success(Receipt {
        record: reservation,
        notice: RESERVATION_SUCCESS_NOTICE,
    })
}
