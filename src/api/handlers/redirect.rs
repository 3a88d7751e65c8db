//! Handler for short id resolution and redirect.

use axum::{
    extract::{Path, State},
    http::{header, StatusCode},
    response::IntoResponse,
};

use crate::error::AppError;
use crate::state::AppState;

/// Redirects a short id to its original URL.
///
/// # Endpoint
///
/// `GET /api/shorturl/{id}`
///
/// The identifier must be a positive integer. A non-numeric or
/// non-positive identifier is a validation failure rendered exactly like a
/// rejected URL submission, whereas a well-formed id with no mapping is a
/// distinct not-found outcome.
///
/// # Errors
///
/// Returns 400 with `{"error": "invalid url"}` for bad identifiers.
/// Returns 404 with `{"error": "No short URL found for given input"}` for
/// unassigned ids.
pub async fn redirect_handler(
    Path(id): Path<String>,
    State(state): State<AppState>,
) -> Result<impl IntoResponse, AppError> {
    let short_id = id
        .parse::<i64>()
        .ok()
        .filter(|id| *id > 0)
        .ok_or_else(|| AppError::bad_request("invalid url"))?;

    let mapping = state.shortener.resolve_id(short_id).await?;

    Ok((
        StatusCode::FOUND,
        [(header::LOCATION, mapping.original_url)],
    ))
}
