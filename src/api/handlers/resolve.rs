//! Handler for the URL resolution endpoint.

use axum::{Json, extract::State};
use validator::Validate;

use crate::api::dto::resolve::{
    BatchSummary, ResolveItem, ResolveRequest, ResolveResponse, ResolveResultItem,
};
use crate::api::handlers::ensure_within_limit;
use crate::domain::resolver::resolve;
use crate::error::AppError;
use crate::state::AppState;

/// Resolves one or more URLs into sanitized, fully-qualified URLs.
///
/// # Endpoint
///
/// `POST /api/resolve`
///
/// # Batch Processing
///
/// Processes URLs independently. If one fails, others continue processing.
/// Each result includes either the resolved URL or error information.
///
/// # Request Body
///
/// ```json
/// {
///   "urls": [
///     { "url": "example.com/search" },
///     { "url": "/foo/bar", "base_url": "api.example.com/pets" }
///   ]
/// }
/// ```
///
/// # Response
///
/// ```json
/// {
///   "summary": { "total": 2, "successful": 2, "failed": 0 },
///   "items": [
///     { "url": "example.com/search", "resolved": "http://example.com/search" },
///     {
///       "url": "/foo/bar",
///       "base_url": "api.example.com/pets",
///       "resolved": "http://api.example.com/pets/foo/bar"
///     }
///   ]
/// }
/// ```
///
/// # Errors
///
/// Returns 400 Bad Request if the batch is empty, larger than the configured
/// batch size, or contains an input over the configured length limit.
/// Individual resolution errors are returned in the response items array.
pub async fn resolve_handler(
    State(state): State<AppState>,
    Json(payload): Json<ResolveRequest>,
) -> Result<Json<ResolveResponse>, AppError> {
    payload.validate()?;

    let total = payload.urls.len();
    if total > state.max_batch_size {
        return Err(AppError::bad_request(
            "Too many URLs in batch",
            serde_json::json!({ "provided": total, "max": state.max_batch_size }),
        ));
    }

    for item in &payload.urls {
        ensure_within_limit(&state, "url", &item.url)?;
        if let Some(base_url) = &item.base_url {
            ensure_within_limit(&state, "base_url", base_url)?;
        }
    }

    let mut results = Vec::with_capacity(total);
    let mut successful = 0;
    let mut failed = 0;

    for item in payload.urls {
        match process_single_url(&item) {
            Ok(resolved) => {
                successful += 1;
                results.push(ResolveResultItem::Success {
                    url: item.url,
                    base_url: item.base_url,
                    resolved,
                });
            }
            Err(err) => {
                failed += 1;
                results.push(ResolveResultItem::Error {
                    url: item.url,
                    base_url: item.base_url,
                    error: err.to_error_info(),
                });
            }
        }
    }

    Ok(Json(ResolveResponse {
        summary: BatchSummary {
            total,
            successful,
            failed,
        },
        items: results,
    }))
}

/// Resolves a single batch item.
fn process_single_url(item: &ResolveItem) -> Result<String, AppError> {
    Ok(resolve(&item.url, item.base_url.as_deref())?)
}
