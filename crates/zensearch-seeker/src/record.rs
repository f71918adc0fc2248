//! Records: ordered field maps deserialized from JSON objects.

use serde::Deserialize;
use serde_json::{Map, Value as JsonValue};

use crate::traits::Seekable;
use crate::value::FieldValue;

/// One JSON object from a dataset.
///
/// Fields keep the key order of the source object, which is the order used
/// when a record is printed and when a dataset's searchable fields are listed.
///
/// # Example
///
/// ```
/// use zensearch_seeker::{FieldValue, Record};
///
/// let record: Record = serde_json::from_str(r#"{"_id": 1, "role": "admin"}"#).unwrap();
/// assert_eq!(record.field_names().collect::<Vec<_>>(), ["_id", "role"]);
/// assert_eq!(record.get("role"), Some(&FieldValue::Text("admin".into())));
/// ```
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(from = "Map<String, JsonValue>")]
pub struct Record {
    fields: Vec<(String, FieldValue)>,
}

impl Record {
    /// Creates an empty record.
    pub fn new() -> Self {
        Record::default()
    }

    /// Adds or replaces a field, returning the record.
    pub fn with(mut self, name: impl Into<String>, value: impl Into<FieldValue>) -> Self {
        self.insert(name, value);
        self
    }

    /// Adds or replaces a field in place.
    ///
    /// A replaced field keeps its original position.
    pub fn insert(&mut self, name: impl Into<String>, value: impl Into<FieldValue>) {
        let name = name.into();
        let value = value.into();
        match self.fields.iter_mut().find(|(existing, _)| *existing == name) {
            Some((_, slot)) => *slot = value,
            None => self.fields.push((name, value)),
        }
    }

    /// Returns the value of a field, or `None` if the record lacks it.
    pub fn get(&self, name: &str) -> Option<&FieldValue> {
        self.fields
            .iter()
            .find(|(existing, _)| existing == name)
            .map(|(_, value)| value)
    }

    /// Returns `true` if the record has the field.
    pub fn contains(&self, name: &str) -> bool {
        self.get(name).is_some()
    }

    /// Field names in source order.
    pub fn field_names(&self) -> impl Iterator<Item = &str> {
        self.fields.iter().map(|(name, _)| name.as_str())
    }

    /// `(name, value)` pairs in source order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &FieldValue)> {
        self.fields.iter().map(|(name, value)| (name.as_str(), value))
    }

    /// Number of fields.
    pub fn len(&self) -> usize {
        self.fields.len()
    }

    /// Returns `true` if the record has no fields.
    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }
}

impl From<Map<String, JsonValue>> for Record {
    fn from(map: Map<String, JsonValue>) -> Self {
        Record {
            fields: map
                .into_iter()
                .map(|(name, value)| (name, FieldValue::from(value)))
                .collect(),
        }
    }
}

impl<K, V> FromIterator<(K, V)> for Record
where
    K: Into<String>,
    V: Into<FieldValue>,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut record = Record::new();
        for (name, value) in iter {
            record.insert(name, value);
        }
        record
    }
}

impl Seekable for Record {
    fn seeker_field_value(&self, field: &str) -> Option<&FieldValue> {
        self.get(field)
    }
}
