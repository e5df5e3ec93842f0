use crate::clean::filter::{clean_key, FieldFilter};
use crate::clean::types::{CleanConfig, FlatRecord, KeyStrategy};
use serde_json::{Map, Value};

/// Collapses arbitrarily nested JSON into a single flat record
pub struct Flattener {
    config: CleanConfig,
    filter: FieldFilter,
}

impl Flattener {
    pub fn new(config: CleanConfig) -> Self {
        let filter = FieldFilter::new(&config.extra_ignored_keys);
        Flattener { config, filter }
    }

    /// Flatten a JSON value. Scalars outside any object have no key and
    /// produce an empty record.
    pub fn flatten(&self, value: &Value) -> FlatRecord {
        let mut record = Map::new();
        self.flatten_into(value, "", &mut record);
        record
    }

    /// Depth-first, left-to-right walk. Later leaves overwrite earlier ones
    /// with the same output key.
    fn flatten_into(&self, value: &Value, prefix: &str, record: &mut FlatRecord) {
        match value {
            Value::Object(obj) => self.flatten_object(obj, prefix, record),
            Value::Array(arr) => {
                for item in arr {
                    self.flatten_into(item, prefix, record);
                }
            }
            _ => {}
        }
    }

    fn flatten_object(&self, obj: &Map<String, Value>, prefix: &str, record: &mut FlatRecord) {
        for (key, value) in obj {
            match value {
                Value::Object(_) | Value::Array(_) => {
                    let nested_prefix = self.output_key(prefix, key);
                    self.flatten_into(value, &nested_prefix, record);
                }
                _ => {
                    if self.filter.accepts(key, value) {
                        record.insert(self.output_key(prefix, key), value.clone());
                    }
                }
            }
        }
    }

    fn output_key(&self, prefix: &str, key: &str) -> String {
        let key = clean_key(key);
        match self.config.key_strategy {
            KeyStrategy::Bare => key.to_string(),
            KeyStrategy::PathQualified if prefix.is_empty() => key.to_string(),
            KeyStrategy::PathQualified => format!("{}{}{}", prefix, self.config.separator, key),
        }
    }
}

impl Default for Flattener {
    fn default() -> Self {
        Flattener::new(CleanConfig::default())
    }
}

/// Flatten with the default configuration
pub fn flatten_relevant(value: &Value) -> FlatRecord {
    Flattener::default().flatten(value)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_nested_object() {
        let input = json!({"a": {"b": "hello", "id": "x"}, "c": "hi!"});
        let flat = flatten_relevant(&input);

        assert_eq!(Value::Object(flat), json!({"b": "hello"}));
    }

    #[test]
    fn test_strips_namespace_from_keys() {
        let input = json!({
            "content": {
                "tif:Commune": "Bordeaux",
                "  tif:NomOffre ": "Marché des Capucins"
            }
        });
        let flat = flatten_relevant(&input);

        assert_eq!(flat.get("Commune").unwrap(), "Bordeaux");
        assert_eq!(flat.get("NomOffre").unwrap(), "Marché des Capucins");
        assert_eq!(flat.len(), 2);
    }

    #[test]
    fn test_last_writer_wins() {
        let input = json!({
            "adresse": {"Ville": "Pessac"},
            "organisateur": {"Ville": "Talence"},
            "contacts": [{"Nom": "Dupont"}, {"Nom": "Martin"}]
        });
        let flat = flatten_relevant(&input);

        assert_eq!(flat.get("Ville").unwrap(), "Talence");
        assert_eq!(flat.get("Nom").unwrap(), "Martin");
    }

    #[test]
    fn test_overwrite_keeps_first_position() {
        let input = json!({
            "a": {"Ville": "Pessac"},
            "Commune": "Bordeaux",
            "b": {"Ville": "Talence"}
        });
        let flat = flatten_relevant(&input);
        let keys: Vec<&str> = flat.keys().map(String::as_str).collect();

        assert_eq!(keys, vec!["Ville", "Commune"]);
        assert_eq!(flat.get("Ville").unwrap(), "Talence");
    }

    #[test]
    fn test_scalars_without_key_context() {
        assert!(flatten_relevant(&json!("Bordeaux")).is_empty());
        assert!(flatten_relevant(&json!(42)).is_empty());
        assert!(flatten_relevant(&json!({"tags": ["marché", "brocante"]})).is_empty());
    }

    #[test]
    fn test_top_level_array() {
        let input = json!([{"Commune": "Bordeaux"}, {"Lieu": "Place Pey-Berland"}]);
        let flat = flatten_relevant(&input);

        assert_eq!(flat.len(), 2);
        assert_eq!(flat.get("Lieu").unwrap(), "Place Pey-Berland");
    }

    #[test]
    fn test_flatten_is_idempotent() {
        let input = json!({
            "entry": {
                "id": "urn:1",
                "dc:Commune": "Bordeaux",
                "geo": {"GmapLatitude": "44.84", "GmapLongitude": "-0.58"},
                "Capacite": 120
            }
        });
        let once = flatten_relevant(&input);
        let twice = flatten_relevant(&Value::Object(once.clone()));

        assert_eq!(once, twice);
    }

    #[test]
    fn test_path_qualified_keys() {
        let input = json!({
            "adresse": {"Ville": "Pessac"},
            "organisateur": {"Ville": "Talence", "contacts": [{"ns:Nom": "Dupont"}]},
            "Commune": "Bordeaux"
        });
        let flattener = Flattener::new(CleanConfig::default().path_qualified().with_separator("."));
        let flat = flattener.flatten(&input);

        assert_eq!(flat.get("adresse.Ville").unwrap(), "Pessac");
        assert_eq!(flat.get("organisateur.Ville").unwrap(), "Talence");
        assert_eq!(flat.get("organisateur.contacts.Nom").unwrap(), "Dupont");
        assert_eq!(flat.get("Commune").unwrap(), "Bordeaux");
    }

    #[test]
    fn test_extra_ignored_keys() {
        let input = json!({"content": {"Commune": "Bordeaux", "Tarif": "Entrée libre"}});
        let flattener = Flattener::new(CleanConfig::default().with_ignored_keys(["tarif"]));
        let flat = flattener.flatten(&input);

        assert_eq!(Value::Object(flat), json!({"Commune": "Bordeaux"}));
    }
}
