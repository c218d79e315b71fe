//! Handler for short URL creation.

use axum::{extract::State, http::StatusCode, Json};
use validator::Validate;

use crate::api::dto::create::CreateShortUrlRequest;
use crate::api::dto::short_url::ShortUrlResponse;
use crate::error::AppError;
use crate::state::AppState;

/// Creates a new short URL.
///
/// # Endpoint
///
/// `POST /short-urls`
///
/// # Request Body
///
/// ```json
/// {
///   "original_url": "https://example.com/some/long/path",
///   "custom_key": "abc123",   // optional
///   "expires_days": 7         // optional, default 1
/// }
/// ```
///
/// # Errors
///
/// Returns 400 Bad Request on validation failures and 409 Conflict when the
/// custom key is already taken.
pub async fn create_handler(
    State(state): State<AppState>,
    Json(payload): Json<CreateShortUrlRequest>,
) -> Result<(StatusCode, Json<ShortUrlResponse>), AppError> {
    payload.validate()?;

    let url = state
        .short_urls
        .create_short_url(payload.original_url, payload.custom_key, payload.expires_days)
        .await?;

    Ok((
        StatusCode::CREATED,
        Json(ShortUrlResponse::from_entity(url, &state.base_url)),
    ))
}
