use std::fmt;

use serde_json::{Map, Value};
use thiserror::Error;

pub mod blueprint;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum JsonKind {
    Null,
    Bool,
    Number,
    String,
    Array,
    Object,
}

impl JsonKind {
    pub fn of(value: &Value) -> Self {
        match value {
            Value::Null => JsonKind::Null,
            Value::Bool(_) => JsonKind::Bool,
            Value::Number(_) => JsonKind::Number,
            Value::String(_) => JsonKind::String,
            Value::Array(_) => JsonKind::Array,
            Value::Object(_) => JsonKind::Object,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            JsonKind::Null => "null",
            JsonKind::Bool => "boolean",
            JsonKind::Number => "number",
            JsonKind::String => "string",
            JsonKind::Array => "array",
            JsonKind::Object => "object",
        }
    }
}

impl fmt::Display for JsonKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("expected {expected} at {path}, found {found}")]
pub struct ShapeError {
    pub path: String,
    pub expected: JsonKind,
    pub found: JsonKind,
}

pub(crate) fn expect_object<'a>(
    value: &'a Value,
    path: &str,
) -> Result<&'a Map<String, Value>, ShapeError> {
    value.as_object().ok_or_else(|| ShapeError {
        path: path.to_string(),
        expected: JsonKind::Object,
        found: JsonKind::of(value),
    })
}

pub(crate) fn expect_array<'a>(value: &'a Value, path: &str) -> Result<&'a [Value], ShapeError> {
    value
        .as_array()
        .map(Vec::as_slice)
        .ok_or_else(|| ShapeError {
            path: path.to_string(),
            expected: JsonKind::Array,
            found: JsonKind::of(value),
        })
}

pub(crate) fn optional_object<'a>(
    parent: &'a Map<String, Value>,
    key: &str,
    path: &str,
) -> Result<Option<&'a Map<String, Value>>, ShapeError> {
    parent
        .get(key)
        .map(|value| expect_object(value, path))
        .transpose()
}

pub(crate) fn optional_array<'a>(
    parent: &'a Map<String, Value>,
    key: &str,
    path: &str,
) -> Result<&'a [Value], ShapeError> {
    match parent.get(key) {
        Some(value) => expect_array(value, path),
        None => Ok(&[]),
    }
}

pub(crate) fn key_path(parent: &str, key: &str) -> String {
    format!("{parent}.{key}")
}

pub(crate) fn index_path(parent: &str, index: usize) -> String {
    format!("{parent}[{index}]")
}

pub(crate) fn quoted_key_path(parent: &str, key: &str) -> String {
    format!("{parent}[{}]", Value::String(key.to_string()))
}
