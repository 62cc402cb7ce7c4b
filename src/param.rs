use crate::compat::String;
use core::hash::{Hash, Hasher};

/// A single query parameter.
///
/// Keys are not unique: the same key may appear several times in an ordered
/// parameter list, and the order among duplicates is significant.
/// A `value` of `None` is a valueless pair (`?flag`), distinct from an empty
/// value (`?flag=`).
///
/// A parameter parsed from a URL remembers its source text and is serialized
/// back verbatim, so untouched parameters keep their exact escapes. Equality
/// and hashing only look at `key` and `value`.
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Param {
    pub key: String,
    #[cfg_attr(feature = "serde", serde(default))]
    pub value: Option<String>,
    #[cfg_attr(feature = "serde", serde(skip))]
    pub(crate) raw: Option<String>,
}

impl Param {
    pub fn new(key: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            value: Some(value.into()),
            raw: None,
        }
    }

    /// A parameter with no `=` part.
    pub fn bare(key: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            value: None,
            raw: None,
        }
    }

    /// Value as a string, with a valueless pair reading as `""`.
    pub fn value_str(&self) -> &str {
        self.value.as_deref().unwrap_or_default()
    }

    /// The `key=value` text this parameter was parsed from, if any.
    pub fn source(&self) -> Option<&str> {
        self.raw.as_deref()
    }
}

impl PartialEq for Param {
    fn eq(&self, other: &Self) -> bool {
        self.key == other.key && self.value == other.value
    }
}

impl Eq for Param {}

impl Hash for Param {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.key.hash(state);
        self.value.hash(state);
    }
}

impl<K: Into<String>, V: Into<String>> From<(K, V)> for Param {
    fn from((key, value): (K, V)) -> Self {
        Self::new(key, value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_value_str() {
        assert_eq!(Param::new("a", "1").value_str(), "1");
        assert_eq!(Param::new("a", "").value_str(), "");
        assert_eq!(Param::bare("a").value_str(), "");
        assert_ne!(Param::new("a", ""), Param::bare("a"));
    }

    #[test]
    fn test_equality_ignores_source() {
        let parsed = Param {
            raw: Some("k=%5b".into()),
            ..Param::new("k", "[")
        };
        assert_eq!(parsed, Param::new("k", "["));
        assert_eq!(parsed.source(), Some("k=%5b"));
        assert_eq!(Param::new("k", "[").source(), None);
    }
}
