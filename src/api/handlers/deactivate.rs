//! Handler for short URL deactivation.

use axum::{
    extract::{Path, State},
    Json,
};

use crate::api::dto::deactivate::DeactivateResponse;
use crate::error::AppError;
use crate::state::AppState;

/// Deactivates a short URL.
///
/// # Endpoint
///
/// `PATCH /short-urls/{short_key}/deactivate`
///
/// # Response
///
/// `{"status": "deactivated"}` on success.
///
/// # Errors
///
/// Returns 404 Not Found for an unknown key and 409 Conflict when the record
/// is already deactivated.
pub async fn deactivate_handler(
    State(state): State<AppState>,
    Path(short_key): Path<String>,
) -> Result<Json<DeactivateResponse>, AppError> {
    state.deactivation.deactivate(&short_key).await?;

    Ok(Json(DeactivateResponse::deactivated()))
}
