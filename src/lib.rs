//! # Keep Essentials - Tourinsoft feed cleaning toolkit
//!
//! Turns syndication-style JSON exports (an Atom-like `feed` with a list of
//! `entry` objects) into flat records ready for database import.
//!
//! ## Modules
//!
//! - **clean**: Drop structural/XML metadata and flatten each entry into one record
//! - **mapping**: Project flat records onto the fixed import schema
//! - **io**: Load documents and write pretty-printed JSON
//!
//! ## Quick Start
//!
//! ### Cleaning a feed
//!
//! ```rust
//! use keep_essentials::{clean_document, CleanConfig};
//! use serde_json::json;
//!
//! let feed = json!({
//!     "feed": {
//!         "xmlns": "http://www.w3.org/2005/Atom",
//!         "entry": [
//!             {"id": "urn:1", "content": {"d:Commune": "Bordeaux", "d:Code": "12"}}
//!         ]
//!     }
//! });
//!
//! let records = clean_document(&feed, CleanConfig::default());
//! assert_eq!(records.len(), 1);
//! assert_eq!(records[0]["Commune"], "Bordeaux");
//! ```
//!
//! ### Mapping onto the import schema
//!
//! ```rust
//! use keep_essentials::mapping::map_values;
//! use serde_json::json;
//!
//! # fn main() -> keep_essentials::Result<()> {
//! let records = map_values(&[json!({"SyndicObjectID": "42", "Commune": "Paris"})])?;
//! assert_eq!(records[0].city, "Paris");
//! # Ok(())
//! # }
//! ```

use log::warn;
use serde_json::Value;
use std::path::Path;

pub mod clean;
pub mod error;
pub mod io;
pub mod mapping;

// Re-export commonly used types for convenience
pub use clean::{CleanConfig, EntryExtractor, FieldFilter, FlatRecord, Flattener, KeyStrategy};
pub use error::{Error, Result};
pub use io::{load_document, write_json_file, JsonWriter};
pub use mapping::TargetRecord;

/// Clean an already-parsed feed document
pub fn clean_document(document: &Value, config: CleanConfig) -> Vec<FlatRecord> {
    let records = EntryExtractor::new(config).extract(document);
    if records.is_empty() {
        warn!("No cleaned data found. Check the input JSON structure.");
    }
    records
}

/// Main entry point: load a feed file and clean its entries
pub fn clean_file<P: AsRef<Path>>(input: P, config: CleanConfig) -> Result<Vec<FlatRecord>> {
    let document = load_document(input)?;
    Ok(clean_document(&document, config))
}

/// Load a file of source records (or a whole feed) and map it onto the import schema
pub fn map_file<P: AsRef<Path>>(input: P) -> Result<Vec<TargetRecord>> {
    let document = load_document(input)?;
    mapping::map_document(&document)
}
