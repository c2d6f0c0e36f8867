//! One result item as flat text fields plus highlighted fragments.

use std::collections::HashMap;

use serde_json::{Map, Value};

use crate::error::{Error, Result};

const HIGHLIGHT_KEY: &str = "highlight";

/// A single hit from a search or suggest response.
///
/// Every value is rendered as text regardless of the schema type the server
/// declares. The `highlight` block, when present, is split off into
/// `highlighted_fields` and never appears in `fields`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Record {
    fields: HashMap<String, String>,
    highlighted_fields: HashMap<String, String>,
}

impl Record {
    pub fn from_json(value: Value) -> Result<Self> {
        match value {
            Value::Object(object) => Ok(Self::from_object(object)),
            other => Err(Error::Decode(format!("expected a record object, found {}", type_name(&other)))),
        }
    }

    pub fn from_object(mut object: Map<String, Value>) -> Self {
        let highlighted_fields = match object.remove(HIGHLIGHT_KEY) {
            Some(Value::Object(highlights)) => stringify_fields(highlights),
            _ => HashMap::new(),
        };
        Self { fields: stringify_fields(object), highlighted_fields }
    }

    /// Parses every element or nothing: one malformed element fails the list.
    pub fn list_from_json(value: Value) -> Result<Vec<Self>> {
        match value {
            Value::Array(items) => items.into_iter().map(Self::from_json).collect(),
            other => Err(Error::Decode(format!("expected a record array, found {}", type_name(&other)))),
        }
    }

    pub fn fields(&self) -> &HashMap<String, String> {
        &self.fields
    }

    pub fn highlighted_fields(&self) -> &HashMap<String, String> {
        &self.highlighted_fields
    }

    pub fn field(&self, name: &str) -> Option<&str> {
        self.fields.get(name).map(String::as_str)
    }

    pub fn highlight(&self, name: &str) -> Option<&str> {
        self.highlighted_fields.get(name).map(String::as_str)
    }
}

fn stringify_fields(object: Map<String, Value>) -> HashMap<String, String> {
    object.into_iter().map(|(k, v)| (k, value_text(v))).collect()
}

pub(crate) fn value_text(value: Value) -> String {
    match value {
        Value::String(s) => s,
        other => other.to_string(),
    }
}

pub(crate) fn type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}
