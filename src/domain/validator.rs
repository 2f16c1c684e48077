//! Syntactic URL validation.

use url::Url;
use validator::ValidateUrl;

/// Reports whether `candidate` is a well-formed, fully-qualified URL.
///
/// The candidate must parse as a URL with a scheme and a non-empty host, and
/// the host must be spelled out after `scheme://`. The URL parser on its own
/// accepts `http:///foo` as host `foo`; that is rejected here. Leading or
/// trailing whitespace and C0 control characters are rejected rather than
/// silently stripped by the parser. No network access is performed.
///
/// # Examples
///
/// ```
/// use urlkit::domain::validator::is_valid_url;
///
/// assert!(is_valid_url("http://example.com"));
/// assert!(is_valid_url("ftp://files.example.com/pub"));
/// assert!(!is_valid_url("example.com"));
/// assert!(!is_valid_url("http://"));
/// ```
pub fn is_valid_url(candidate: &str) -> bool {
    if candidate.is_empty() || has_surrounding_junk(candidate) {
        return false;
    }

    if !has_authority_text(candidate) {
        return false;
    }

    if !candidate.validate_url() {
        return false;
    }

    Url::parse(candidate)
        .ok()
        .and_then(|url| url.host_str().map(|host| !host.is_empty()))
        .unwrap_or(false)
}

/// Unicode whitespace or C0 controls (including space) at either end.
pub(crate) fn has_surrounding_junk(candidate: &str) -> bool {
    let is_junk = |c: char| c <= ' ' || c.is_whitespace();
    candidate.starts_with(is_junk) || candidate.ends_with(is_junk)
}

/// Checks that something other than a path, query or fragment follows `://`.
fn has_authority_text(candidate: &str) -> bool {
    candidate
        .split_once("://")
        .is_some_and(|(_, rest)| !rest.is_empty() && !rest.starts_with(['/', '\\', '?', '#']))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_http_urls() {
        assert!(is_valid_url("http://example.com"));
        assert!(is_valid_url("https://example.com/path?q=1#frag"));
        assert!(is_valid_url("http://localhost:3000/test"));
        assert!(is_valid_url("http://192.168.1.1:8080/api"));
        assert!(is_valid_url("http://[::1]:8080/"));
    }

    #[test]
    fn test_valid_other_schemes_with_host() {
        assert!(is_valid_url("ftp://files.example.com/pub"));
        assert!(is_valid_url("ws://example.com/socket"));
    }

    #[test]
    fn test_invalid_without_scheme() {
        assert!(!is_valid_url("example.com"));
        assert!(!is_valid_url("/foo/bar"));
        assert!(!is_valid_url("//example.com"));
    }

    #[test]
    fn test_invalid_without_host() {
        assert!(!is_valid_url("http://"));
        assert!(!is_valid_url("file:///etc/passwd"));
        assert!(!is_valid_url("mailto:user@example.com"));
        assert!(!is_valid_url("data:text/plain,Hello"));
    }

    #[test]
    fn test_invalid_empty_authority() {
        assert!(!is_valid_url("http:///foo/bar"));
        assert!(!is_valid_url("http://?q=1"));
        assert!(!is_valid_url("http:example.com"));
    }

    #[test]
    fn test_invalid_malformed() {
        assert!(!is_valid_url(""));
        assert!(!is_valid_url("not a url at all???"));
        assert!(!is_valid_url("http://not a url at all???"));
    }

    #[test]
    fn test_invalid_surrounding_whitespace() {
        assert!(!is_valid_url(" http://example.com"));
        assert!(!is_valid_url("http://example.com\n"));
    }

    #[test]
    fn test_invalid_surrounding_control_chars() {
        assert!(!is_valid_url("http://example.com/\0"));
        assert!(!is_valid_url("\0http://example.com"));
        assert!(!is_valid_url("http://example.com\u{1f}"));
        assert!(!is_valid_url("\u{7}http://example.com"));
    }
}
