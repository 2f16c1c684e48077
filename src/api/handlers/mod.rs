//! HTTP request handlers for API endpoints.
//!
//! Each handler module corresponds to a logical grouping of endpoints.

pub mod expand;
pub mod health;
pub mod parse;
pub mod resolve;
pub mod validate;

pub use expand::expand_handler;
pub use health::health_handler;
pub use parse::parse_handler;
pub use resolve::resolve_handler;
pub use validate::validate_handler;

use serde_json::json;

use crate::error::AppError;
use crate::state::AppState;

/// Rejects a request field longer than the configured input limit.
pub(crate) fn ensure_within_limit(
    state: &AppState,
    field: &'static str,
    value: &str,
) -> Result<(), AppError> {
    if value.len() > state.max_input_length {
        return Err(AppError::bad_request(
            format!("Field `{field}` is too long"),
            json!({ "field": field, "length": value.len(), "max": state.max_input_length }),
        ));
    }
    Ok(())
}
