use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// One element of the array returned by the API.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Record {
    pub data: HashMap<String, serde_json::Value>,
}

/// Records in the order the API returned them.
pub type RecordBatch = Vec<Record>;

/// A record as written to the table: every value reduced to a string.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PersistedItem {
    pub attributes: HashMap<String, String>,
}

impl PersistedItem {
    pub fn from_record(record: &Record) -> Self {
        let attributes = record
            .data
            .iter()
            .map(|(key, value)| (key.clone(), coerce_value(value)))
            .collect();
        Self { attributes }
    }

    pub fn get(&self, field: &str) -> Option<&str> {
        self.attributes.get(field).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.attributes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.attributes.is_empty()
    }
}

impl From<&Record> for PersistedItem {
    fn from(record: &Record) -> Self {
        Self::from_record(record)
    }
}

/// Strings are kept verbatim; everything else becomes its compact JSON text.
pub fn coerce_value(value: &serde_json::Value) -> String {
    match value {
        serde_json::Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}
