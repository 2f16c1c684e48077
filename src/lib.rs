//! # urlkit
//!
//! Small, composable URL utilities with an HTTP front end.
//!
//! ## Architecture
//!
//! - **Domain Layer** ([`domain`]) - Pure URL core: resolution, validation,
//!   template expansion, parsing
//! - **API Layer** ([`api`]) - REST handlers, DTOs and middleware exposing
//!   the core over HTTP
//!
//! ## Features
//!
//! - Protocol inference (`example.com` becomes `http://example.com`)
//! - Duplicate-slash collapsing and trailing-slash trimming
//! - Resolution of URL paths against a base URL
//! - Percent-encoding through the `url` crate
//! - Express-style `:param` template expansion
//!
//! ## Example
//!
//! ```
//! use urlkit::prelude::*;
//!
//! assert_eq!(resolve("//example.com/x/", None).unwrap(), "http://example.com/x");
//! assert!(is_valid_url("https://example.com"));
//! ```
//!
//! ## Configuration
//!
//! Service configuration is loaded from environment variables via [`config::Config`].
//! See [`config`] module for available options.

pub mod api;
pub mod domain;
pub mod error;
pub mod state;
pub mod utils;

pub mod config;
pub mod server;
pub mod telemetry;

pub mod routes;

pub use error::AppError;
pub use state::AppState;

/// Commonly used types for external consumers.
///
/// Re-exports frequently used types to simplify imports for library users
/// and integration tests.
pub mod prelude {
    pub use crate::domain::{
        BaseUrlProblem, InvalidUrlReason, ParsedUrl, RouteParams, UrlError, expand, is_valid_url,
        parse, resolve,
    };
    pub use crate::error::AppError;
    pub use crate::state::AppState;
}
