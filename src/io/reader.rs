use crate::error::{Error, Result};
use serde_json::Value;
use std::path::Path;

/// Read and parse a JSON document from disk
pub fn load_document<P: AsRef<Path>>(path: P) -> Result<Value> {
    let path = path.as_ref();
    let mut content = std::fs::read(path).map_err(|e| Error::io(path, e))?;
    parse_document(&mut content, path)
}

/// Parse JSON bytes with SIMD acceleration. `content` is used as scratch
/// space and is left modified.
pub fn parse_document(content: &mut [u8], source: &Path) -> Result<Value> {
    simd_json::serde::from_slice(content).map_err(|e| Error::Parse {
        path: source.to_path_buf(),
        source: e,
    })
}
