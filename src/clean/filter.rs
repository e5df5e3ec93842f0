//! Field filter: decides whether a (key, value) leaf is worth keeping
//!
//! Structural Atom/XML metadata (links, ids, namespaces, timestamps) is
//! rejected by key, and empty or code-like values are rejected by shape.
//!
//! Every ignored key is lowercase, so `Identifiant` fields are dropped.
//! Older exports cleaned with a case-sensitive list kept them.

use once_cell::sync::Lazy;
use serde_json::Value;
use std::collections::HashSet;

/// Structural and XML-metadata keys, compared after normalization
pub static IGNORED_KEYS: Lazy<HashSet<&'static str>> = Lazy::new(|| {
    [
        "href",
        "rel",
        "type",
        "term",
        "title",
        "scheme",
        "prefix",
        "id",
        "identifiant",
        "updated",
        "published",
        "link",
        "links",
        "lang",
        "base",
        "author",
        "rights",
    ]
    .into_iter()
    .collect()
});

/// Strings at most this long must be purely alphabetic to be kept
const SHORT_VALUE_LEN: usize = 3;

/// Lowercased key with any namespace prefix removed (`" DC:Title"` -> `"title"`)
pub fn normalize_key(key: &str) -> String {
    let lowered = key.trim().to_lowercase();
    match lowered.rsplit_once(':') {
        Some((_, local)) => local.to_string(),
        None => lowered,
    }
}

/// Key as written to the output: namespace prefix removed, whitespace trimmed
pub fn clean_key(key: &str) -> &str {
    key.rsplit(':').next().unwrap_or(key).trim()
}

/// Check a leaf against the built-in ignore list only
pub fn is_useful_value(key: &str, value: &Value) -> bool {
    FieldFilter::default().accepts(key, value)
}

/// Field filter with optional caller-supplied ignored keys
#[derive(Debug, Clone, Default)]
pub struct FieldFilter {
    extra_ignored: HashSet<String>,
}

impl FieldFilter {
    pub fn new<I, S>(extra_ignored: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        FieldFilter {
            extra_ignored: extra_ignored
                .into_iter()
                .map(|k| normalize_key(k.as_ref()))
                .collect(),
        }
    }

    /// Returns true if the leaf should survive flattening
    pub fn accepts(&self, key: &str, value: &Value) -> bool {
        if key.is_empty() {
            return false;
        }

        let key = normalize_key(key);
        if self.is_ignored_key(&key) {
            return false;
        }

        match value {
            Value::Null => false,
            Value::Bool(b) => *b,
            Value::Number(n) => n.as_f64().map_or(true, |f| f != 0.0),
            Value::String(s) => Self::is_useful_text(s),
            Value::Array(_) | Value::Object(_) => true,
        }
    }

    fn is_ignored_key(&self, normalized: &str) -> bool {
        IGNORED_KEYS.contains(normalized)
            || normalized.starts_with("xml")
            || self.extra_ignored.contains(normalized)
    }

    fn is_useful_text(s: &str) -> bool {
        if s == "0" {
            return false;
        }

        let trimmed = s.trim();
        if trimmed.is_empty() {
            return false;
        }

        // Short codes like "12" or "A1" are noise, short words like "Mai" are not
        if trimmed.chars().count() <= SHORT_VALUE_LEN {
            return trimmed.chars().all(char::is_alphabetic);
        }

        true
    }
}
