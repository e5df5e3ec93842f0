//! Feed cleaning - strip metadata noise and flatten entries
//!
//! Each feed entry is walked depth-first. Leaves that pass the field filter
//! are collected into one flat record per entry, keyed by their leaf name.

pub mod types;
pub mod filter;
pub mod flatten;
pub mod extract;

pub use types::{CleanConfig, FlatRecord, KeyStrategy};
pub use filter::{is_useful_value, FieldFilter, IGNORED_KEYS};
pub use flatten::{flatten_relevant, Flattener};
pub use extract::{extract_clean_entries, EntryExtractor};
