use crate::clean::{extract_clean_entries, FlatRecord};
use crate::error::{Error, Result};
use crate::mapping::date::format_date_value;
use crate::mapping::types::TargetRecord;
use serde_json::{Map, Value};

const UNTITLED: &str = "Sans titre";
const MARKET_KEYWORD: &str = "marché";
const MARKET_ACTIVITY: &str = "Marché";

/// Project Tourinsoft-style records onto the import schema.
///
/// `index` is the record's position in the input list and names the
/// fallback `event_<index>` id.
pub fn map_record(index: usize, source: &Map<String, Value>) -> TargetRecord {
    let get = |key: &str| field(source, key);
    let object_type = get("ObjectTypeName").map(text).unwrap_or_default();

    TargetRecord {
        id: get("SyndicObjectID")
            .map(text)
            .unwrap_or_else(|| format!("event_{}", index)),
        title: first_truthy(get("SyndicObjectName"))
            .or_else(|| get("NOMMANIFESTATION"))
            .map(text)
            .unwrap_or_else(|| UNTITLED.to_string()),
        insee: String::new(),
        city: get("Commune").map(text).unwrap_or_default(),
        start_date: format_date_value(get("Datedebut")),
        end_date: format_date_value(get("Datefin")),
        kind: object_type.clone(),
        description: first_truthy(get("DESCRIPTIFCOMMERCIAL"))
            .or_else(|| get("DESCRIPTIFSYNTHETIQUE"))
            .map(text)
            .unwrap_or_default(),
        theme: String::new(),
        category: object_type,
        geopoint: geopoint(get("GmapLatitude"), get("GmapLongitude")),
        epci: String::new(),
        activities: activities(get("DESCRIPTIFCOMMERCIAL")),
    }
}

/// Map flat records produced by the cleaner
pub fn clean_tourinsoft_data(records: &[FlatRecord]) -> Vec<TargetRecord> {
    records
        .iter()
        .enumerate()
        .map(|(idx, record)| map_record(idx, record))
        .collect()
}

/// Map a JSON array of source objects
pub fn map_values(values: &[Value]) -> Result<Vec<TargetRecord>> {
    values
        .iter()
        .enumerate()
        .map(|(idx, value)| match value {
            Value::Object(obj) => Ok(map_record(idx, obj)),
            other => Err(Error::UnexpectedShape(format!(
                "record {} is a {}, expected an object",
                idx,
                kind_name(other)
            ))),
        })
        .collect()
}

/// Map either an array of source records or a whole feed document
pub fn map_document(document: &Value) -> Result<Vec<TargetRecord>> {
    match document {
        Value::Array(values) => map_values(values),
        Value::Object(obj) if obj.contains_key("feed") => {
            Ok(clean_tourinsoft_data(&extract_clean_entries(document)))
        }
        other => Err(Error::UnexpectedShape(format!(
            "expected an array of records or a feed document, found {}",
            kind_name(other)
        ))),
    }
}

fn field<'a>(source: &'a Map<String, Value>, key: &str) -> Option<&'a Value> {
    source.get(key).filter(|v| !v.is_null())
}

fn geopoint(lat: Option<&Value>, lon: Option<&Value>) -> String {
    match (first_truthy(lat), first_truthy(lon)) {
        (Some(lat), Some(lon)) => format!("{}, {}", text(lat), text(lon)),
        _ => String::new(),
    }
}

fn activities(description: Option<&Value>) -> String {
    match description {
        Some(Value::String(s)) if s.to_lowercase().contains(MARKET_KEYWORD) => {
            MARKET_ACTIVITY.to_string()
        }
        _ => String::new(),
    }
}

fn first_truthy(value: Option<&Value>) -> Option<&Value> {
    value.filter(|v| is_truthy(v))
}

/// Null, false, zero, and empty strings/arrays/objects are falsy
fn is_truthy(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_f64().map_or(true, |f| f != 0.0),
        Value::String(s) => !s.is_empty(),
        Value::Array(a) => !a.is_empty(),
        Value::Object(o) => !o.is_empty(),
    }
}

/// Strings verbatim, anything else as its JSON text
fn text(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}

fn kind_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}
