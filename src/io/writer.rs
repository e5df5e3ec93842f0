use crate::error::{Error, Result};
use log::info;
use serde::Serialize;
use std::io::Write;
use std::path::Path;

/// Writes JSON documents, pretty-printed with 2-space indentation by default.
/// Non-ASCII characters are written as-is.
pub struct JsonWriter<W: Write> {
    writer: W,
    pretty: bool,
}

impl<W: Write> JsonWriter<W> {
    pub fn new(writer: W) -> Self {
        JsonWriter {
            writer,
            pretty: true,
        }
    }

    pub fn compact(mut self) -> Self {
        self.pretty = false;
        self
    }

    /// Serialize `value` followed by a newline
    pub fn write_json<T: Serialize + ?Sized>(&mut self, value: &T) -> Result<()> {
        if self.pretty {
            serde_json::to_writer_pretty(&mut self.writer, value)?;
        } else {
            serde_json::to_writer(&mut self.writer, value)?;
        }
        writeln!(self.writer).map_err(|e| Error::io("<output>", e))?;
        Ok(())
    }

    pub fn flush(&mut self) -> Result<()> {
        self.writer.flush().map_err(|e| Error::io("<output>", e))
    }

    pub fn into_inner(self) -> W {
        self.writer
    }
}

/// Write `value` to `path`, creating the parent directory if needed
pub fn write_json_file<T, P>(path: P, value: &T, pretty: bool) -> Result<()>
where
    T: Serialize + ?Sized,
    P: AsRef<Path>,
{
    let path = path.as_ref();
    if let Some(dir) = path.parent().filter(|d| !d.as_os_str().is_empty()) {
        if !dir.exists() {
            info!("Creating output directory: {}", dir.display());
            std::fs::create_dir_all(dir).map_err(|e| Error::io(dir, e))?;
        }
    }

    let file = std::fs::File::create(path).map_err(|e| Error::io(path, e))?;
    let mut writer = JsonWriter::new(std::io::BufWriter::new(file));
    if !pretty {
        writer = writer.compact();
    }
    writer.write_json(value)?;
    writer.flush().map_err(|e| match e {
        Error::Io { source, .. } => Error::io(path, source),
        other => other,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_pretty_output() {
        let mut writer = JsonWriter::new(Vec::new());
        writer.write_json(&json!([{"Commune": "Bègles"}])).unwrap();

        let output = String::from_utf8(writer.into_inner()).unwrap();
        assert_eq!(output, "[\n  {\n    \"Commune\": \"Bègles\"\n  }\n]\n");
    }

    #[test]
    fn test_compact_output() {
        let mut writer = JsonWriter::new(Vec::new()).compact();
        writer.write_json(&json!({"Commune": "Bègles"})).unwrap();

        let output = String::from_utf8(writer.into_inner()).unwrap();
        assert_eq!(output, "{\"Commune\":\"Bègles\"}\n");
    }

    #[test]
    fn test_write_file_creates_directory() {
        let dir = std::env::temp_dir().join(format!("keep-essentials-writer-{}", std::process::id()));
        let path = dir.join("nested").join("out.json");
        let _ = std::fs::remove_dir_all(&dir);

        write_json_file(&path, &json!([{"Commune": "Arès"}]), true).unwrap();

        let written = std::fs::read_to_string(&path).unwrap();
        assert!(written.contains("\"Commune\": \"Arès\""));
        std::fs::remove_dir_all(&dir).unwrap();
    }
}
