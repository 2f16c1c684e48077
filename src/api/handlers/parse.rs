//! Handler for the URL parsing endpoint.

use axum::{Json, extract::State};

use crate::api::dto::parse::ParseRequest;
use crate::api::handlers::ensure_within_limit;
use crate::domain::parser::{ParsedUrl, parse};
use crate::error::AppError;
use crate::state::AppState;

/// Decomposes a URL into its components.
///
/// # Endpoint
///
/// `POST /api/parse`
///
/// # Response
///
/// ```json
/// {
///   "protocol": "http:",
///   "slashes": true,
///   "auth": "",
///   "host": "google.com",
///   "hostname": "google.com",
///   "port": 80,
///   "hash": "",
///   "search": "",
///   "query": {},
///   "pathname": "/",
///   "path": "/",
///   "href": "http://google.com/"
/// }
/// ```
///
/// # Errors
///
/// Returns 400 Bad Request with code `invalid_url` if the URL has no hostname.
pub async fn parse_handler(
    State(state): State<AppState>,
    Json(payload): Json<ParseRequest>,
) -> Result<Json<ParsedUrl>, AppError> {
    ensure_within_limit(&state, "url", &payload.url)?;

    Ok(Json(parse(&payload.url)?))
}
