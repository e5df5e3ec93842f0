use serde::Serialize;

/// Fields of the import schema, in output order
pub const TARGET_FIELDS: [&str; 13] = [
    "id",
    "title",
    "insee",
    "city",
    "start_date",
    "end_date",
    "type",
    "description",
    "theme",
    "category",
    "geopoint",
    "epci",
    "activities",
];

/// One event row in the database import format
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TargetRecord {
    pub id: String,
    pub title: String,
    /// Needs an external INSEE lookup; always empty
    pub insee: String,
    pub city: String,
    pub start_date: Option<String>,
    pub end_date: Option<String>,
    #[serde(rename = "type")]
    pub kind: String,
    pub description: String,
    /// Not present in Tourinsoft exports; always empty
    pub theme: String,
    pub category: String,
    /// `"<lat>, <lon>"` or empty
    pub geopoint: String,
    /// Not present in Tourinsoft exports; always empty
    pub epci: String,
    pub activities: String,
}
