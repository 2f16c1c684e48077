//! DTOs for the route template expansion endpoint.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Request to expand a route template.
///
/// `values` may hold strings, numbers, booleans or `null`; `null` and
/// missing keys expand to an empty string.
#[derive(Debug, Deserialize)]
pub struct ExpandRequest {
    pub template: String,

    #[serde(default)]
    pub values: Map<String, Value>,
}

#[derive(Debug, Serialize)]
pub struct ExpandResponse {
    pub template: String,
    pub url: String,

    /// Parameters referenced by the template that had no value.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub missing: Vec<String>,
}
