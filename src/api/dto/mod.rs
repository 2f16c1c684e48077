//! Data Transfer Objects for API requests and responses.
//!
//! All DTOs use Serde for JSON serialization/deserialization and validator
//! for input validation.

pub mod expand;
pub mod health;
pub mod parse;
pub mod resolve;
pub mod validate;

/// Hard upper bound on any URL or template accepted in a request body.
///
/// The configured `MAX_INPUT_LENGTH` is enforced by the handlers and can
/// only be lower than this.
pub const MAX_INPUT_HARD_LIMIT: usize = 1_048_576;
