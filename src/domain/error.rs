//! Errors produced by the URL core.

use std::fmt;

/// Why a primary URL was rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InvalidUrlReason {
    /// After normalization the URL is not syntactically valid or has no host.
    NotFullyQualified,
    /// A base URL was supplied, but the primary URL already carries a scheme.
    AbsoluteWithBase,
}

impl fmt::Display for InvalidUrlReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NotFullyQualified => f.write_str(
                "was not a valid, fully-qualified URL. Make sure it includes the hostname (e.g. \"example.com\")",
            ),
            Self::AbsoluteWithBase => f.write_str(
                "already includes a protocol. When a base URL is provided, the URL must be a path (e.g. \"/foo/bar\")",
            ),
        }
    }
}

/// What is wrong with a base URL.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BaseUrlProblem {
    /// The base URL contains a query string (`?...`).
    Query,
    /// The base URL contains a fragment (`#...`).
    Fragment,
    /// After normalization the base URL is not a valid URL with a hostname.
    NotFullyQualified,
}

impl BaseUrlProblem {
    /// Short machine-readable name, used in API error details.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Query => "query",
            Self::Fragment => "fragment",
            Self::NotFullyQualified => "not_fully_qualified",
        }
    }
}

impl fmt::Display for BaseUrlProblem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Query => f.write_str(
                "contains a query string; a query string is only allowed on the primary URL",
            ),
            Self::Fragment => f.write_str(
                "contains a fragment; a fragment is only allowed on the primary URL",
            ),
            Self::NotFullyQualified => f.write_str(
                "was not a valid, fully-qualified URL. Make sure it includes the hostname (e.g. \"api.example.com\")",
            ),
        }
    }
}

/// Errors returned by [`crate::domain::resolver::resolve`] and
/// [`crate::domain::parser::parse`].
///
/// Every variant carries the raw input so callers can report exactly what
/// was rejected.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum UrlError {
    #[error("The provided URL (`{input}`) {reason}.")]
    InvalidUrl {
        input: String,
        reason: InvalidUrlReason,
    },

    #[error("The provided base URL (`{input}`) {problem}.")]
    InvalidBaseUrl {
        input: String,
        problem: BaseUrlProblem,
    },

    /// An internal invariant was violated. Indicates a bug.
    #[error("Internal consistency error: {0}")]
    InternalConsistency(String),
}

impl UrlError {
    pub(crate) fn not_fully_qualified(input: &str) -> Self {
        Self::InvalidUrl {
            input: input.to_string(),
            reason: InvalidUrlReason::NotFullyQualified,
        }
    }

    pub(crate) fn base(input: &str, problem: BaseUrlProblem) -> Self {
        Self::InvalidBaseUrl {
            input: input.to_string(),
            problem,
        }
    }
}
