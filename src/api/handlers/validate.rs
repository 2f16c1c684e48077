//! Handler for the URL validation endpoint.

use axum::{Json, extract::State};

use crate::api::dto::validate::{ValidateRequest, ValidateResponse};
use crate::api::handlers::ensure_within_limit;
use crate::domain::validator::is_valid_url;
use crate::error::AppError;
use crate::state::AppState;

/// Reports whether a string is a well-formed, fully-qualified URL.
///
/// # Endpoint
///
/// `POST /api/validate`
///
/// No protocol inference is applied: `example.com` is reported as invalid,
/// `http://example.com` as valid.
///
/// # Response
///
/// ```json
/// { "url": "http://example.com", "valid": true }
/// ```
pub async fn validate_handler(
    State(state): State<AppState>,
    Json(payload): Json<ValidateRequest>,
) -> Result<Json<ValidateResponse>, AppError> {
    ensure_within_limit(&state, "url", &payload.url)?;

    let valid = is_valid_url(&payload.url);

    Ok(Json(ValidateResponse {
        url: payload.url,
        valid,
    }))
}
