//! Contact form endpoint.

use axum::{extract::State, Json};
use validator::Validate;

use super::{success, ApiResult, Receipt};
use crate::models::{ContactMessage, CreateContactMessageRequest};
use crate::AppState;

pub const CONTACT_SUCCESS_NOTICE: &str = "contact_page.success_message";

/// POST /api/contact - Store a contact form submission.
pub async fn submit_contact(
    State(state): State<AppState>,
    Json(request): Json<CreateContactMessageRequest>,
) -> ApiResult<Receipt<ContactMessage>> {
    let request = request.normalized();
    request.validate()?;

    let message = state.repo.create_contact_message(&request).await?;
    tracing::info!("Contact message {} received", message.id);

    success(Receipt {
        record: message,
        notice: CONTACT_SUCCESS_NOTICE,
    })
}
