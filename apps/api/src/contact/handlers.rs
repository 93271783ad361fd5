use axum::{
    extract::{rejection::JsonRejection, State},
    http::StatusCode,
    Json,
};
use serde::Serialize;

use crate::contact::validation::{validate_contact, ContactSubmission};
use crate::errors::AppError;
use crate::state::AppState;

#[derive(Debug, Serialize)]
pub struct ContactCreatedResponse {
    pub message: String,
    pub id: u64,
}

/// POST /api/contact
///
/// Validates the form before touching the store; responds 201 with the new id.
pub async fn handle_submit_contact(
    State(state): State<AppState>,
    payload: Result<Json<ContactSubmission>, JsonRejection>,
) -> Result<(StatusCode, Json<ContactCreatedResponse>), AppError> {
    let Json(submission) = payload?;
    let request = validate_contact(&submission).map_err(AppError::invalid_fields)?;

    let created = state
        .write_store("Failed to submit contact request")?
        .create_contact_request(request);

    tracing::info!(
        id = created.id,
        urgency = %created.urgency,
        "Contact request received"
    );

    Ok((
        StatusCode::CREATED,
        Json(ContactCreatedResponse {
            message: "Contact request submitted successfully".to_string(),
            id: created.id,
        }),
    ))
}
