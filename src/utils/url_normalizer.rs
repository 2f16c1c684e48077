//! URL normalization primitives.
//!
//! Shared building blocks for [`crate::domain::resolver`] and
//! [`crate::domain::parser`]: scheme detection, protocol inference,
//! duplicate-slash collapsing, trailing-slash trimming and re-serialization
//! through the [`url`] crate.

use regex::Regex;
use std::sync::LazyLock;
use url::Url;

use crate::domain::error::UrlError;

/// Scheme prefix accepted as "protocol already present".
///
/// Matches a lowercase-letter-led scheme followed by `://`, e.g. `http://`,
/// `https://`, `ftp://`, `ws://`. The check is case-sensitive.
static SCHEME_PREFIX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[a-z][a-z0-9]+://").unwrap());

/// Two or more consecutive slashes.
static SLASH_RUN: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"/{2,}").unwrap());

/// Scheme used when the input carries none.
pub const DEFAULT_SCHEME_PREFIX: &str = "http://";

/// Returns `true` if `input` starts with a full scheme prefix (`scheme://`).
pub fn has_scheme(input: &str) -> bool {
    SCHEME_PREFIX.is_match(input)
}

/// Infers a protocol for `input`.
///
/// # Rules
///
/// 1. Input already starting with `scheme://` is returned unchanged
/// 2. Protocol-relative input (`//host/path`) gets `http:` in front
/// 3. Anything else is treated as host-relative and gets `http://` prepended
///
/// # Examples
///
/// ```ignore
/// assert_eq!(qualify("https://example.com"), "https://example.com");
/// assert_eq!(qualify("//example.com/x"), "http://example.com/x");
/// assert_eq!(qualify("example.com/x"), "http://example.com/x");
/// ```
pub fn qualify(input: &str) -> String {
    if has_scheme(input) {
        input.to_string()
    } else if let Some(rest) = input.strip_prefix("//") {
        format!("{DEFAULT_SCHEME_PREFIX}{rest}")
    } else {
        format!("{DEFAULT_SCHEME_PREFIX}{input}")
    }
}

/// Collapses runs of `/` that occur after the `scheme://` separator.
///
/// The two slashes of the separator itself are never touched.
///
/// # Errors
///
/// Returns [`UrlError::InternalConsistency`] if `qualified` has no `://`
/// separator; callers only pass strings produced by [`qualify`].
pub fn collapse_slashes(qualified: &str) -> Result<String, UrlError> {
    let (scheme, rest) = qualified.split_once("://").ok_or_else(|| {
        tracing::warn!(input = qualified, "qualified URL has no scheme separator");
        UrlError::InternalConsistency(format!(
            "expected a scheme separator in qualified URL `{qualified}`"
        ))
    })?;

    Ok(format!("{scheme}://{}", SLASH_RUN.replace_all(rest, "/")))
}

/// Strips every trailing `/`.
pub fn trim_trailing_slashes(input: &str) -> &str {
    input.trim_end_matches('/')
}

/// Applies protocol inference, slash collapsing and trailing-slash trimming.
///
/// This is the textual part of resolution, before the URL library is involved.
pub fn sanitize(input: &str) -> Result<String, UrlError> {
    let collapsed = collapse_slashes(&qualify(input))?;
    Ok(trim_trailing_slashes(&collapsed).to_string())
}

/// Re-serializes `candidate` through the URL parser.
///
/// Percent-encodes characters that are not allowed in the path, query and
/// fragment, lowercases (and IDNA-encodes) the host and drops default ports.
/// The serializer appends `/` for an empty path and rewrites `\` to `/` for
/// special schemes, so the result is collapsed and trimmed once more.
///
/// Returns `None` if `candidate` cannot be parsed.
pub fn reserialize(candidate: &str) -> Option<String> {
    let parsed = Url::parse(candidate).ok()?;
    let collapsed = collapse_slashes(parsed.as_str()).ok()?;
    Some(trim_trailing_slashes(&collapsed).to_string())
}
