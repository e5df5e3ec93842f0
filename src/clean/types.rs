use serde_json::{Map, Value};

/// A single-level record of cleaned keys to accepted scalar values
pub type FlatRecord = Map<String, Value>;

/// How result keys are named when nested structures are flattened
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum KeyStrategy {
    /// Leaf key only. Same-named leaves from different sub-objects collide
    /// and the last one encountered wins.
    #[default]
    Bare,

    /// Leaf key prefixed with the cleaned keys of its enclosing objects
    PathQualified,
}

/// Configuration for the cleaning process
#[derive(Debug, Clone)]
pub struct CleanConfig {
    /// Naming of flattened keys
    pub key_strategy: KeyStrategy,

    /// Separator between path segments (only used with `PathQualified`)
    pub separator: String,

    /// Keys to reject in addition to the built-in ignore list
    pub extra_ignored_keys: Vec<String>,
}

impl Default for CleanConfig {
    fn default() -> Self {
        CleanConfig {
            key_strategy: KeyStrategy::Bare,
            separator: String::from("_"),
            extra_ignored_keys: vec![],
        }
    }
}

impl CleanConfig {
    pub fn path_qualified(mut self) -> Self {
        self.key_strategy = KeyStrategy::PathQualified;
        self
    }

    pub fn with_separator(mut self, separator: impl Into<String>) -> Self {
        self.separator = separator.into();
        self
    }

    pub fn with_ignored_keys<I, S>(mut self, keys: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.extra_ignored_keys.extend(keys.into_iter().map(Into::into));
        self
    }
}
