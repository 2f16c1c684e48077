//! DTOs for the URL validation endpoint.

use serde::{Deserialize, Serialize};

#[derive(Debug, Deserialize)]
pub struct ValidateRequest {
    pub url: String,
}

#[derive(Debug, Serialize)]
pub struct ValidateResponse {
    pub url: String,
    pub valid: bool,
}
