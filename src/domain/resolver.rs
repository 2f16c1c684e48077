//! URL resolution: turns a URL-like string (optionally relative to a base URL)
//! into a canonical, fully-qualified, validated URL.
//!
//! # Without a base URL
//!
//! 1. Infer a protocol (`scheme://` kept, `//` becomes `http://`, anything
//!    else gets `http://` prepended)
//! 2. Collapse duplicate slashes after the `scheme://` separator
//! 3. Trim trailing slashes
//! 4. Re-serialize through the URL parser (percent-encoding)
//! 5. Validate with [`is_valid_url`]
//!
//! # With a base URL
//!
//! The primary URL is treated as a path below the base URL. The base URL may
//! not carry a query string or fragment, and the primary URL may not carry a
//! scheme. Leading slashes of the path are ignored, so `/foo` resolved against
//! `api.example.com/pets` gives `http://api.example.com/pets/foo`.

use url::Url;

use crate::domain::error::{BaseUrlProblem, InvalidUrlReason, UrlError};
use crate::domain::validator::{has_surrounding_junk, is_valid_url};
use crate::utils::url_normalizer::{has_scheme, reserialize, sanitize};

/// Resolves `url` into a sanitized, fully-qualified URL.
///
/// When `base_url` is provided, `url` is resolved as a path relative to it.
///
/// # Errors
///
/// - [`UrlError::InvalidUrl`] if the result is not a valid URL with a
///   hostname, or if `url` carries a scheme while `base_url` is provided
/// - [`UrlError::InvalidBaseUrl`] if `base_url` contains a query string or
///   fragment, or has no hostname
///
/// # Examples
///
/// ```
/// use urlkit::domain::resolver::resolve;
///
/// assert_eq!(resolve("example.com/x", None).unwrap(), "http://example.com/x");
/// assert_eq!(resolve("http://foo///bar//baz", None).unwrap(), "http://foo/bar/baz");
/// assert_eq!(
///     resolve("/foo/bar", Some("api.example.com/pets")).unwrap(),
///     "http://api.example.com/pets/foo/bar"
/// );
/// assert!(resolve("/foo/bar", None).is_err());
/// ```
pub fn resolve(url: &str, base_url: Option<&str>) -> Result<String, UrlError> {
    let resolved = match base_url {
        None => resolve_absolute(url)?,
        Some(base) => resolve_against_base(url, base)?,
    };

    tracing::debug!(input = url, base_url, resolved = %resolved, "resolved URL");
    Ok(resolved)
}

fn resolve_absolute(url: &str) -> Result<String, UrlError> {
    let sanitized = sanitize(url)?;
    finish(&sanitized, url)
}

fn resolve_against_base(url: &str, base_url: &str) -> Result<String, UrlError> {
    if base_url.contains('?') {
        return Err(UrlError::base(base_url, BaseUrlProblem::Query));
    }
    if base_url.contains('#') {
        return Err(UrlError::base(base_url, BaseUrlProblem::Fragment));
    }

    let base = normalized_base(base_url)?;

    if has_scheme(url) {
        return Err(UrlError::InvalidUrl {
            input: url.to_string(),
            reason: InvalidUrlReason::AbsoluteWithBase,
        });
    }

    if has_surrounding_junk(url) {
        return Err(UrlError::not_fully_qualified(url));
    }

    let path = url.trim_start_matches('/');
    let joined = base
        .join(&format!("./{path}"))
        .map_err(|_| UrlError::not_fully_qualified(url))?;

    finish(joined.as_str(), url)
}

/// Normalizes the base URL and prepares it for path-segment joining.
///
/// The path is forced to end with `/`, so joining appends segments instead
/// of replacing the last one (`/pets` + `foo` gives `/pets/foo`).
fn normalized_base(base_url: &str) -> Result<Url, UrlError> {
    let sanitized = sanitize(base_url)?;
    if !is_valid_url(&sanitized) {
        return Err(UrlError::base(base_url, BaseUrlProblem::NotFullyQualified));
    }

    let mut base = Url::parse(&sanitized)
        .map_err(|_| UrlError::base(base_url, BaseUrlProblem::NotFullyQualified))?;
    if !base.path().ends_with('/') {
        let directory = format!("{}/", base.path());
        base.set_path(&directory);
    }

    Ok(base)
}

/// Validates, re-serializes and validates again, reporting `raw` on failure.
fn finish(candidate: &str, raw: &str) -> Result<String, UrlError> {
    if !is_valid_url(candidate) {
        return Err(UrlError::not_fully_qualified(raw));
    }

    let serialized = reserialize(candidate).ok_or_else(|| UrlError::not_fully_qualified(raw))?;

    if !is_valid_url(&serialized) {
        return Err(UrlError::not_fully_qualified(raw));
    }

    Ok(serialized)
}
