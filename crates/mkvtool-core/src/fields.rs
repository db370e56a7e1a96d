//! Metadata mapping fed to the mask renderer.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Numeric values at or below this are "not extracted" sentinels and are
/// never rendered.
pub const UNSET_NUMBER_CEILING: i64 = 0;

/// Value of a single metadata field.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum FieldValue {
    Text(String),
    Number(i64),
}

impl FieldValue {
    /// Whether the value carries real data. Empty strings and non-positive
    /// numbers are sentinels for "not extracted".
    pub fn is_set(&self) -> bool {
        match self {
            FieldValue::Text(s) => !s.is_empty(),
            FieldValue::Number(n) => *n > UNSET_NUMBER_CEILING,
        }
    }
}

impl From<&str> for FieldValue {
    fn from(s: &str) -> Self {
        FieldValue::Text(s.to_string())
    }
}

impl From<String> for FieldValue {
    fn from(s: String) -> Self {
        FieldValue::Text(s)
    }
}

impl From<i64> for FieldValue {
    fn from(n: i64) -> Self {
        FieldValue::Number(n)
    }
}

/// Mapping from lowercase field name to value.
///
/// Keys are lowercased on insertion and lookup, so `Title` and `title` name
/// the same field.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Fields {
    values: BTreeMap<String, FieldValue>,
}

impl Fields {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set a field, replacing any previous value.
    pub fn insert(&mut self, key: &str, value: impl Into<FieldValue>) {
        self.values.insert(key.to_lowercase(), value.into());
    }

    pub fn with_text(mut self, key: &str, value: impl Into<String>) -> Self {
        self.insert(key, FieldValue::Text(value.into()));
        self
    }

    pub fn with_number(mut self, key: &str, value: i64) -> Self {
        self.insert(key, FieldValue::Number(value));
        self
    }

    /// Look up a field by name, ignoring case.
    pub fn get(&self, key: &str) -> Option<&FieldValue> {
        self.values.get(&key.to_lowercase())
    }

    /// Whether the field exists and carries real data.
    pub fn is_set(&self, key: &str) -> bool {
        self.get(key).is_some_and(FieldValue::is_set)
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Iterate over fields in key order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &FieldValue)> {
        self.values.iter().map(|(k, v)| (k.as_str(), v))
    }
}

impl<K: AsRef<str>, V: Into<FieldValue>> FromIterator<(K, V)> for Fields {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut fields = Fields::new();
        for (k, v) in iter {
            fields.insert(k.as_ref(), v);
        }
        fields
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sentinels() {
        assert!(FieldValue::from("x").is_set());
        assert!(!FieldValue::from("").is_set());
        assert!(FieldValue::from(1).is_set());
        assert!(!FieldValue::from(0).is_set());
        assert!(!FieldValue::from(-3).is_set());
    }

    #[test]
    fn test_keys_are_case_insensitive() {
        let fields = Fields::new().with_text("Title", "Foo");
        assert_eq!(fields.get("title"), Some(&FieldValue::from("Foo")));
        assert_eq!(fields.get("TITLE"), Some(&FieldValue::from("Foo")));
        assert!(fields.is_set("title"));
        assert!(!fields.is_set("year"));
    }

    #[test]
    fn test_from_iter() {
        let fields: Fields = [("season", FieldValue::from(2)), ("group", FieldValue::from(""))]
            .into_iter()
            .collect();
        assert_eq!(fields.len(), 2);
        assert!(fields.is_set("season"));
        assert!(!fields.is_set("group"));
    }

    #[test]
    fn test_iter_in_key_order() {
        let fields = Fields::new()
            .with_text("year", "")
            .with_number("episode", 3)
            .with_text("Title", "Foo");
        let keys: Vec<&str> = fields.iter().map(|(key, _)| key).collect();
        assert_eq!(keys, vec!["episode", "title", "year"]);

        let set: Vec<&str> = fields
            .iter()
            .filter(|(_, value)| value.is_set())
            .map(|(key, _)| key)
            .collect();
        assert_eq!(set, vec!["episode", "title"]);
    }

    #[test]
    fn test_serialize_untagged() {
        let fields = Fields::new().with_text("title", "Foo").with_number("year", 2022);
        let json = serde_json::to_string(&fields).unwrap();
        assert_eq!(json, r#"{"title":"Foo","year":2022}"#);
    }
}
