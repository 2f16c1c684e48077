//! DTOs for the URL resolution endpoint.

use crate::error::ErrorInfo;
use serde::{Deserialize, Serialize};
use validator::Validate;

/// Request to resolve one or more URLs.
///
/// Supports batch processing; each item is resolved independently.
#[derive(Debug, Deserialize, Validate)]
pub struct ResolveRequest {
    #[validate(length(min = 1, message = "At least one URL is required"))]
    pub urls: Vec<ResolveItem>,
}

/// Individual URL to resolve.
///
/// Field lengths are checked in bytes by the handler against the configured
/// input limit.
#[derive(Debug, Deserialize, Serialize)]
pub struct ResolveItem {
    /// URL (or, with `base_url`, URL path) to resolve.
    pub url: String,

    /// Optional base URL the path is resolved against.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub base_url: Option<String>,
}

/// Response containing batch resolution results.
#[derive(Debug, Serialize)]
pub struct ResolveResponse {
    pub summary: BatchSummary,
    pub items: Vec<ResolveResultItem>,
}

/// Individual result for a URL in the batch.
///
/// Uses untagged enum for cleaner JSON structure (no discriminator field).
#[derive(Debug, Serialize)]
#[serde(untagged)]
pub enum ResolveResultItem {
    Success {
        url: String,
        #[serde(skip_serializing_if = "Option::is_none")]
        base_url: Option<String>,
        resolved: String,
    },
    Error {
        url: String,
        #[serde(skip_serializing_if = "Option::is_none")]
        base_url: Option<String>,
        error: ErrorInfo,
    },
}

/// Summary statistics for batch processing.
#[derive(Debug, Serialize)]
pub struct BatchSummary {
    pub total: usize,
    pub successful: usize,
    pub failed: usize,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn request(urls: serde_json::Value) -> ResolveRequest {
        serde_json::from_value(json!({ "urls": urls })).unwrap()
    }

    #[test]
    fn test_empty_batch_fails_validation() {
        let errors = request(json!([])).validate().unwrap_err();
        let field_errors = errors.field_errors();
        let urls = field_errors.get("urls").unwrap();
        assert_eq!(urls[0].code, "length");
        assert_eq!(urls[0].message.as_deref(), Some("At least one URL is required"));
    }

    #[test]
    fn test_non_empty_batch_passes_validation() {
        let req = request(json!([
            { "url": "example.com" },
            { "url": "/x", "base_url": "api.example.com" }
        ]));
        assert!(req.validate().is_ok());
        assert_eq!(req.urls[1].base_url.as_deref(), Some("api.example.com"));
    }

    #[test]
    fn test_item_serializes_without_absent_base_url() {
        let item = ResolveItem {
            url: "example.com".to_string(),
            base_url: None,
        };
        assert_eq!(serde_json::to_value(&item).unwrap(), json!({ "url": "example.com" }));
    }
}
