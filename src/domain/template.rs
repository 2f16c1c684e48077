//! Route template expansion.
//!
//! Substitutes values for colon-prefixed tokens in a URL template, the format
//! used by Express-style routers (`/api/v1/user/:id/friends/:friendId`).

use regex::{Captures, Regex};
use serde_json::Value;
use std::borrow::Cow;
use std::collections::{BTreeMap, HashMap};
use std::hash::BuildHasher;
use std::sync::LazyLock;

/// A route parameter token: `:` followed by one or more characters that are
/// not `/`, `:` or `.`.
static ROUTE_PARAM: LazyLock<Regex> = LazyLock::new(|| Regex::new(r":([^/:.]+)").unwrap());

/// Source of values for route parameters.
///
/// Returning `None` means the parameter has no value; its token is replaced
/// with an empty string.
pub trait RouteParams {
    fn param(&self, name: &str) -> Option<Cow<'_, str>>;
}

impl<S: BuildHasher> RouteParams for HashMap<String, String, S> {
    fn param(&self, name: &str) -> Option<Cow<'_, str>> {
        self.get(name).map(|v| Cow::Borrowed(v.as_str()))
    }
}

impl<S: BuildHasher> RouteParams for HashMap<String, Option<String>, S> {
    fn param(&self, name: &str) -> Option<Cow<'_, str>> {
        self.get(name)?.as_deref().map(Cow::Borrowed)
    }
}

impl RouteParams for BTreeMap<String, String> {
    fn param(&self, name: &str) -> Option<Cow<'_, str>> {
        self.get(name).map(|v| Cow::Borrowed(v.as_str()))
    }
}

/// JSON values: `null` has no value, strings are used verbatim and anything
/// else is rendered as compact JSON (`7`, `true`, `[1,2]`).
impl RouteParams for serde_json::Map<String, Value> {
    fn param(&self, name: &str) -> Option<Cow<'_, str>> {
        match self.get(name)? {
            Value::Null => None,
            Value::String(s) => Some(Cow::Borrowed(s.as_str())),
            other => Some(Cow::Owned(other.to_string())),
        }
    }
}

impl<P: RouteParams + ?Sized> RouteParams for &P {
    fn param(&self, name: &str) -> Option<Cow<'_, str>> {
        (**self).param(name)
    }
}

/// Builds a URL from `template` by substituting values from `params`.
///
/// The scan is purely textual: a token inside what looks like a query string
/// is substituted like any other. Values are inserted verbatim, without
/// percent-encoding. Missing values become empty strings, so expansion never
/// fails.
///
/// # Examples
///
/// ```
/// use std::collections::HashMap;
/// use urlkit::domain::template::expand;
///
/// let params = HashMap::from([
///     ("id".to_string(), "7".to_string()),
///     ("friendId".to_string(), "abc".to_string()),
/// ]);
/// assert_eq!(
///     expand("/api/v1/user/:id/friends/:friendId", &params),
///     "/api/v1/user/7/friends/abc"
/// );
/// assert_eq!(expand("/x/:id", &HashMap::<String, String>::new()), "/x/");
/// ```
pub fn expand<P: RouteParams + ?Sized>(template: &str, params: &P) -> String {
    ROUTE_PARAM
        .replace_all(template, |caps: &Captures<'_>| {
            params
                .param(&caps[1])
                .map(Cow::into_owned)
                .unwrap_or_default()
        })
        .into_owned()
}

/// Lists the parameter names referenced by `template`, in order of appearance.
///
/// Repeated tokens are reported once.
pub fn param_names(template: &str) -> Vec<&str> {
    let mut names: Vec<&str> = Vec::new();
    for caps in ROUTE_PARAM.captures_iter(template) {
        if let Some(name) = caps.get(1).map(|m| m.as_str())
            && !names.contains(&name)
        {
            names.push(name);
        }
    }
    names
}
