//! Handler for the route template expansion endpoint.

use axum::{Json, extract::State};

use crate::api::dto::expand::{ExpandRequest, ExpandResponse};
use crate::api::handlers::ensure_within_limit;
use crate::domain::template::{RouteParams, expand, param_names};
use crate::error::AppError;
use crate::state::AppState;

/// Substitutes values into a colon-token route template.
///
/// # Endpoint
///
/// `POST /api/expand`
///
/// # Request Body
///
/// ```json
/// {
///   "template": "/api/v1/user/:id/friends/:friendId",
///   "values": { "id": 7, "friendId": "abc" }
/// }
/// ```
///
/// # Response
///
/// ```json
/// {
///   "template": "/api/v1/user/:id/friends/:friendId",
///   "url": "/api/v1/user/7/friends/abc"
/// }
/// ```
///
/// Parameters without a value expand to an empty string and are listed in
/// `missing`.
pub async fn expand_handler(
    State(state): State<AppState>,
    Json(payload): Json<ExpandRequest>,
) -> Result<Json<ExpandResponse>, AppError> {
    ensure_within_limit(&state, "template", &payload.template)?;

    let url = expand(&payload.template, &payload.values);
    let missing = param_names(&payload.template)
        .into_iter()
        .filter(|name| payload.values.param(name).is_none())
        .map(str::to_string)
        .collect();

    Ok(Json(ExpandResponse {
        template: payload.template,
        url,
        missing,
    }))
}
