//! Schema mapping - project Tourinsoft records onto the import schema
//!
//! Source field names (`SyndicObjectID`, `Commune`, `Datedebut`, ...) are
//! fixed. A few target fields are derived: dates are normalized, latitude
//! and longitude are joined into a geopoint, and market events get an
//! activity tag.

pub mod types;
pub mod date;
pub mod mapper;

pub use types::{TargetRecord, TARGET_FIELDS};
pub use date::format_date;
pub use mapper::{clean_tourinsoft_data, map_document, map_record, map_values};
