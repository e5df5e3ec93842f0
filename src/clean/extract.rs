use crate::clean::flatten::Flattener;
use crate::clean::types::{CleanConfig, FlatRecord};
use log::{debug, warn};
use serde_json::Value;

/// Pulls `feed.entry` out of a syndication document and flattens each entry
pub struct EntryExtractor {
    flattener: Flattener,
}

impl EntryExtractor {
    pub fn new(config: CleanConfig) -> Self {
        EntryExtractor {
            flattener: Flattener::new(config),
        }
    }

    /// Flatten every entry of `{ "feed": { "entry": [...] } }`.
    ///
    /// A missing `feed` is logged and yields no records. Entries that
    /// flatten to nothing are dropped.
    pub fn extract(&self, document: &Value) -> Vec<FlatRecord> {
        let feed = match document.get("feed") {
            Some(feed @ Value::Object(_)) => feed,
            Some(Value::Null) | None => {
                warn!("'feed' key is missing in the data.");
                return Vec::new();
            }
            Some(_) => {
                warn!("'feed' is not an object, ignoring it.");
                return Vec::new();
            }
        };

        let entries: &[Value] = match feed.get("entry") {
            Some(Value::Array(entries)) => entries,
            Some(entry @ Value::Object(_)) => std::slice::from_ref(entry),
            _ => &[],
        };

        let mut cleaned = Vec::with_capacity(entries.len());
        for (idx, entry) in entries.iter().enumerate() {
            let flat = self.flattener.flatten(entry);
            if flat.is_empty() {
                debug!("Dropping entry {} with no useful fields", idx);
                continue;
            }
            cleaned.push(flat);
        }
        cleaned
    }
}

impl Default for EntryExtractor {
    fn default() -> Self {
        EntryExtractor::new(CleanConfig::default())
    }
}

/// Extract and flatten feed entries with the default configuration
pub fn extract_clean_entries(document: &Value) -> Vec<FlatRecord> {
    EntryExtractor::default().extract(document)
}
