//! Handler for health check endpoint.

use axum::{Json, http::StatusCode};

use crate::api::dto::health::{CheckStatus, HealthChecks, HealthResponse};
use crate::domain::resolver::resolve;

/// Input and expected output of the resolver self-check.
const PROBE_INPUT: &str = "//example.com//health/";
const PROBE_EXPECTED: &str = "http://example.com/health";

/// Returns service health status with component checks.
///
/// # Endpoint
///
/// `GET /health`
///
/// # Response Codes
///
/// - **200 OK**: All components healthy
/// - **503 Service Unavailable**: One or more components degraded
///
/// # Components Checked
///
/// 1. **Resolver**: Resolves a fixed URL and compares the result
///
/// # Response
///
/// ```json
/// {
///   "status": "healthy",
///   "version": "0.1.0",
///   "checks": {
///     "resolver": { "status": "ok", "message": "http://example.com/health" }
///   }
/// }
/// ```
pub async fn health_handler() -> Result<Json<HealthResponse>, (StatusCode, Json<HealthResponse>)> {
    let resolver_check = check_resolver();

    let all_healthy = resolver_check.status == "ok";

    let response = HealthResponse {
        status: if all_healthy { "healthy" } else { "degraded" }.to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        checks: HealthChecks {
            resolver: resolver_check,
        },
    };

    if all_healthy {
        Ok(Json(response))
    } else {
        Err((StatusCode::SERVICE_UNAVAILABLE, Json(response)))
    }
}

/// Checks that the resolver produces the expected canonical URL.
fn check_resolver() -> CheckStatus {
    match resolve(PROBE_INPUT, None) {
        Ok(resolved) if resolved == PROBE_EXPECTED => CheckStatus {
            status: "ok".to_string(),
            message: Some(resolved),
        },
        Ok(resolved) => CheckStatus {
            status: "error".to_string(),
            message: Some(format!("Unexpected resolution: {resolved}")),
        },
        Err(e) => CheckStatus {
            status: "error".to_string(),
            message: Some(format!("Resolver error: {e}")),
        },
    }
}
