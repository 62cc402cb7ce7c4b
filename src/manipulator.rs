use crate::action::ActionSet;
use crate::compat::{String, ToOwned};
use crate::error::{Error, Result};
use crate::parser::{get_url_params, split_url};
use crate::resolver::resolve_url_params;
use crate::serializer::construct_url_params;
#[cfg(feature = "serde")]
use serde::Deserialize;

/// Derive a new URL by applying `actions` to the query string of `url`.
///
/// Returns `None` when `url` is empty. The part before the query and the
/// `#fragment` are kept verbatim, as are previous parameters the actions do
/// not touch. When the resulting parameter list is empty no `?` is emitted.
///
/// ```
/// use qsm::{ActionSet, qsm};
///
/// let url = qsm(
///     "https://example.com/foo?bar=xx#top",
///     &ActionSet::new().set("bar", "XXXXX").set("page", 10),
/// );
/// assert_eq!(url.as_deref(), Some("https://example.com/foo?bar=XXXXX&page=10#top"));
/// ```
pub fn qsm(url: &str, actions: &ActionSet) -> Option<String> {
    try_qsm(url, actions).ok()
}

/// Like [`qsm`], reporting an empty URL as [`Error::InvalidUrl`].
pub fn try_qsm(url: &str, actions: &ActionSet) -> Result<String> {
    if url.is_empty() {
        tracing::debug!("rejected empty url");
        return Err(Error::InvalidUrl);
    }

    let (base, _, fragment) = split_url(url);
    let params = resolve_url_params(&get_url_params(url), actions);
    let query = construct_url_params(&params);

    if query.is_empty() && fragment.is_none() {
        return Ok(base.to_owned());
    }

    let mut result = String::with_capacity(url.len() + query.len());
    result.push_str(base);
    if !query.is_empty() {
        result.push('?');
        result.push_str(&query);
    }
    if let Some(fragment) = fragment {
        result.push('#');
        result.push_str(fragment);
    }
    Ok(result)
}

/// Entry point for loosely typed input such as a decoded JSON request.
///
/// `url` must be a non-empty string; any other value yields
/// [`Error::InvalidUrl`]. `actions` uses the `{"remove", "set", "toggle"}`
/// object form, with `null` meaning no actions.
#[cfg(feature = "serde")]
pub fn qsm_value(url: &serde_json::Value, actions: &serde_json::Value) -> Result<String> {
    let Some(url) = url.as_str() else {
        tracing::debug!(kind = json_kind(url), "rejected non-string url");
        return Err(Error::InvalidUrl);
    };

    let actions = if actions.is_null() {
        ActionSet::new()
    } else {
        ActionSet::deserialize(actions).map_err(|e| Error::InvalidActions(e.to_string()))?
    };

    try_qsm(url, &actions)
}

#[cfg(feature = "serde")]
fn json_kind(value: &serde_json::Value) -> &'static str {
    match value {
        serde_json::Value::Null => "null",
        serde_json::Value::Bool(_) => "bool",
        serde_json::Value::Number(_) => "number",
        serde_json::Value::String(_) => "string",
        serde_json::Value::Array(_) => "array",
        serde_json::Value::Object(_) => "object",
    }
}
