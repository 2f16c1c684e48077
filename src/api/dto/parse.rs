//! DTOs for the URL parsing endpoint.
//!
//! The response body is [`crate::domain::parser::ParsedUrl`] serialized as is.

use serde::Deserialize;

#[derive(Debug, Deserialize)]
pub struct ParseRequest {
    pub url: String,
}
