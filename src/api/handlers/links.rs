//! Handlers for short URL retrieval and listing.

use axum::{
    extract::{Path, Query, State},
    Json,
};
use serde_json::json;

use crate::api::dto::pagination::{ListQueryParams, PaginationMeta};
use crate::api::dto::short_url::{ShortUrlListResponse, ShortUrlResponse};
use crate::error::AppError;
use crate::state::AppState;

/// Returns one short URL record, in any active or expiry state.
///
/// # Endpoint
///
/// `GET /short-urls/{short_key}`
///
/// # Errors
///
/// Returns 404 Not Found if no record holds the key.
pub async fn get_handler(
    State(state): State<AppState>,
    Path(short_key): Path<String>,
) -> Result<Json<ShortUrlResponse>, AppError> {
    let url = state.short_urls.get_by_key(&short_key).await?;

    Ok(Json(ShortUrlResponse::from_entity(url, &state.base_url)))
}

/// Lists short URL records with pagination and an explicit active filter.
///
/// # Endpoint
///
/// `GET /short-urls`
///
/// # Query Parameters
///
/// - `page` (optional): Page number (default: 1)
/// - `page_size` (optional): Items per page (default: 25, max: 1000)
/// - `active` (optional): `true` for active records, `false` for deactivated
///   ones; absent returns everything
pub async fn list_handler(
    State(state): State<AppState>,
    Query(params): Query<ListQueryParams>,
) -> Result<Json<ShortUrlListResponse>, AppError> {
    let (offset, limit) = params
        .pagination
        .validate_and_get_offset_limit()
        .map_err(|e| AppError::bad_request(e, json!({})))?;

    let page = params.pagination.page.unwrap_or(1);
    let page_size = params.pagination.page_size.unwrap_or(25);

    let (items, total) = state.short_urls.list(params.active, offset, limit).await?;

    let total_pages = (total as f64 / page_size as f64).ceil() as u32;

    Ok(Json(ShortUrlListResponse {
        pagination: PaginationMeta {
            page,
            page_size,
            total_items: total,
            total_pages,
        },
        items: items
            .into_iter()
            .map(|url| ShortUrlResponse::from_entity(url, &state.base_url))
            .collect(),
    }))
}
