//! Domain layer: the pure URL core.
//!
//! Every operation here is a synchronous, side-effect-free function of its
//! inputs. Nothing is shared or cached, so calls can run concurrently without
//! coordination.
//!
//! # Architecture
//!
//! - [`resolver`] - Protocol inference, slash cleanup, base-URL resolution
//! - [`validator`] - Fully-qualified URL check used by the resolver
//! - [`template`] - Colon-token route template expansion
//! - [`parser`] - URL decomposition into a flat record
//! - [`error`] - Error kinds surfaced by the resolver and parser
//!
//! # Design Principles
//!
//! - Domain layer has no dependencies on the HTTP layer
//! - URL parsing, relative resolution and percent-encoding are delegated to
//!   the [`url`] crate; nothing here re-implements them

pub mod error;
pub mod parser;
pub mod resolver;
pub mod template;
pub mod validator;

pub use error::{BaseUrlProblem, InvalidUrlReason, UrlError};
pub use parser::{ParsedUrl, parse};
pub use resolver::resolve;
pub use template::{RouteParams, expand, param_names};
pub use validator::is_valid_url;
