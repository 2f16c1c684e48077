//! URL decomposition into a flat, serializable record.

use serde::Serialize;
use std::collections::BTreeMap;
use url::Url;

use crate::domain::error::UrlError;
use crate::domain::validator::is_valid_url;
use crate::utils::url_normalizer::qualify;

/// Port reported for `https:` URLs without an explicit port.
pub const DEFAULT_HTTPS_PORT: u16 = 443;

/// Port reported for every other URL without an explicit port.
pub const DEFAULT_PORT: u16 = 80;

/// Components of a parsed URL.
///
/// Field names follow the classic `protocol`/`host`/`pathname` breakdown so
/// the JSON form is familiar to HTTP clients.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ParsedUrl {
    /// Scheme with trailing colon, e.g. `https:`.
    pub protocol: String,
    pub slashes: bool,
    /// `user` or `user:password`; empty when absent.
    pub auth: String,
    /// Hostname plus `:port` when a non-default port is present.
    pub host: String,
    pub hostname: String,
    /// Explicit port, or 443 for `https:` and 80 otherwise.
    pub port: u16,
    /// `#fragment`, or empty.
    pub hash: String,
    /// `?query`, or empty.
    pub search: String,
    /// Decoded query pairs. Later duplicates win.
    pub query: BTreeMap<String, String>,
    pub pathname: String,
    /// `pathname` followed by `search`.
    pub path: String,
    pub href: String,
}

/// Parses `url` into its components, inferring `http://` when no protocol
/// is present.
///
/// Unlike [`crate::domain::resolver::resolve`], slashes are neither collapsed
/// nor trimmed.
///
/// # Errors
///
/// Returns [`UrlError::InvalidUrl`] if the qualified URL has no hostname or
/// is malformed.
///
/// # Examples
///
/// ```
/// use urlkit::domain::parser::parse;
///
/// let parsed = parse("https://example.com/search?q=rust").unwrap();
/// assert_eq!(parsed.protocol, "https:");
/// assert_eq!(parsed.port, 443);
/// assert_eq!(parsed.query["q"], "rust");
/// ```
pub fn parse(url: &str) -> Result<ParsedUrl, UrlError> {
    let qualified = qualify(url);
    if !is_valid_url(&qualified) {
        return Err(UrlError::not_fully_qualified(url));
    }

    let parsed = Url::parse(&qualified).map_err(|_| UrlError::not_fully_qualified(url))?;
    let record = ParsedUrl::from_url(&parsed);

    tracing::debug!(input = url, href = %record.href, "parsed URL");
    Ok(record)
}

impl ParsedUrl {
    fn from_url(url: &Url) -> Self {
        let protocol = format!("{}:", url.scheme());
        let hostname = url.host_str().unwrap_or_default().to_string();

        let host = match url.port() {
            Some(port) => format!("{hostname}:{port}"),
            None => hostname.clone(),
        };

        let port = url.port().unwrap_or(if protocol == "https:" {
            DEFAULT_HTTPS_PORT
        } else {
            DEFAULT_PORT
        });

        let auth = match (url.username(), url.password()) {
            ("", None) => String::new(),
            (user, None) => user.to_string(),
            (user, Some(password)) => format!("{user}:{password}"),
        };

        let search = url.query().map(|q| format!("?{q}")).unwrap_or_default();
        let hash = url.fragment().map(|f| format!("#{f}")).unwrap_or_default();
        let query = url.query_pairs().into_owned().collect();
        let pathname = url.path().to_string();

        Self {
            protocol,
            slashes: url.has_authority(),
            auth,
            host,
            hostname,
            port,
            hash,
            path: format!("{pathname}{search}"),
            search,
            query,
            pathname,
            href: url.to_string(),
        }
    }
}
