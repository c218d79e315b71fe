//! Handler for short URL redirect.

use axum::{
    extract::{Path, State},
    response::Redirect,
};

use crate::error::AppError;
use crate::state::AppState;

/// Redirects a short key to its original URL.
///
/// # Endpoint
///
/// `GET /{short_key}`
///
/// # Outcomes
///
/// - **307 Temporary Redirect** with `Location` set to the original URL for
///   an active, unexpired key; one click event is queued for recording
/// - **410 Gone** when the key exists but is deactivated or expired
/// - **404 Not Found** when the key never existed
///
/// Click recording is fire-and-forget: the redirect never waits on, or fails
/// because of, the click pipeline.
pub async fn redirect_handler(
    Path(short_key): Path<String>,
    State(state): State<AppState>,
) -> Result<Redirect, AppError> {
    let original_url = state.redirects.resolve(&short_key).await?;

    Ok(Redirect::temporary(&original_url))
}
