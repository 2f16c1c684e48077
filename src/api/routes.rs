//! API route configuration.

use crate::api::handlers::{expand_handler, parse_handler, resolve_handler, validate_handler};
use crate::state::AppState;
use axum::{Router, routing::post};

/// All API routes. The URL core is stateless, so none require authentication.
///
/// # Endpoints
///
/// - `POST /resolve`   - Resolve URLs into canonical form (batch-capable)
/// - `POST /validate`  - Check whether a string is a fully-qualified URL
/// - `POST /expand`    - Substitute values into a route template
/// - `POST /parse`     - Decompose a URL into its components
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .route("/resolve", post(resolve_handler))
        .route("/validate", post(validate_handler))
        .route("/expand", post(expand_handler))
        .route("/parse", post(parse_handler))
}
