//! Document loading and JSON output

pub mod reader;
pub mod writer;

pub use reader::{load_document, parse_document};
pub use writer::{write_json_file, JsonWriter};
