//! Handler for the short URL creation endpoint.

use axum::{extract::State, Form, Json};

use crate::api::dto::shorten::{ShortenRequest, ShortenResponse};
use crate::error::AppError;
use crate::state::AppState;

/// Creates (or returns) the numeric short id for a submitted URL.
///
/// # Endpoint
///
/// `POST /api/shorturl` (form-urlencoded, field `url`)
///
/// # Flow
///
/// 1. Validator accepts or rejects the submission (syntax, scheme,
///    hostname resolution)
/// 2. Registry returns the existing mapping or assigns the next id
///
/// # Response
///
/// ```json
/// { "original_url": "https://www.freecodecamp.org", "short_url": 1 }
/// ```
///
/// # Errors
///
/// Returns 400 with `{"error": "invalid url"}` on any validation failure.
/// Returns 500 with `{"error": "Server error"}` on store failures.
pub async fn shorten_handler(
    State(state): State<AppState>,
    Form(payload): Form<ShortenRequest>,
) -> Result<Json<ShortenResponse>, AppError> {
    let original_url = state.validator.validate(&payload.url).await?;

    let mapping = state.shortener.get_or_create(&original_url).await?;

    Ok(Json(ShortenResponse {
        original_url: mapping.original_url,
        short_url: mapping.short_id,
    }))
}
