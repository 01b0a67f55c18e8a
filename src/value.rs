//! Input values accepted by the formatter
//!
//! A [`Value`] is exactly one of two variants, text or numeric. The typed
//! API takes a `Value` directly; loosely typed sources (JSON documents,
//! YAML config entries) go through [`Value::try_from`], which rejects every
//! other kind instead of coercing it. YAML is converted directly rather than
//! through JSON so that `.nan` and `.inf` stay numeric.

use crate::error::{Result, ValueFmtError};
use serde::{Deserialize, Serialize};
use std::fmt;

/// A formatter input
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Value {
    /// Textual input
    Text(String),

    /// Numeric input
    Numeric(f64),
}

/// Runtime kind of a [`Value`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ValueKind {
    /// Kind of [`Value::Text`]
    Text,

    /// Kind of [`Value::Numeric`]
    Numeric,
}

impl ValueKind {
    /// Name printed for this kind (`string` or `number`)
    pub fn as_str(self) -> &'static str {
        match self {
            ValueKind::Text => "string",
            ValueKind::Numeric => "number",
        }
    }
}

impl fmt::Display for ValueKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl Value {
    pub fn kind(&self) -> ValueKind {
        match self {
            Value::Text(_) => ValueKind::Text,
            Value::Numeric(_) => ValueKind::Numeric,
        }
    }
}

impl From<String> for Value {
    fn from(s: String) -> Self {
        Value::Text(s)
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Value::Text(s.to_string())
    }
}

impl From<f64> for Value {
    fn from(v: f64) -> Self {
        Value::Numeric(v)
    }
}

impl From<i32> for Value {
    fn from(v: i32) -> Self {
        Value::Numeric(f64::from(v))
    }
}

/// Name of a JSON value's kind, used in `InvalidInputKind` errors
fn json_kind_name(value: &serde_json::Value) -> &'static str {
    match value {
        serde_json::Value::Null => "null",
        serde_json::Value::Bool(_) => "boolean",
        serde_json::Value::Number(_) => "number",
        serde_json::Value::String(_) => "string",
        serde_json::Value::Array(_) => "array",
        serde_json::Value::Object(_) => "object",
    }
}

impl TryFrom<&serde_json::Value> for Value {
    type Error = ValueFmtError;

    fn try_from(value: &serde_json::Value) -> Result<Self> {
        match value {
            serde_json::Value::String(s) => Ok(Value::Text(s.clone())),
            // Without arbitrary_precision every JSON number has an f64 view
            serde_json::Value::Number(n) => n
                .as_f64()
                .map(Value::Numeric)
                .ok_or_else(|| ValueFmtError::invalid_input_kind("number")),
            other => Err(ValueFmtError::invalid_input_kind(json_kind_name(other))),
        }
    }
}

impl TryFrom<serde_json::Value> for Value {
    type Error = ValueFmtError;

    fn try_from(value: serde_json::Value) -> Result<Self> {
        Value::try_from(&value)
    }
}

/// Name of a YAML value's kind, used in `InvalidInputKind` errors
fn yaml_kind_name(value: &serde_yaml::Value) -> &'static str {
    match value {
        serde_yaml::Value::Null => "null",
        serde_yaml::Value::Bool(_) => "boolean",
        serde_yaml::Value::Number(_) => "number",
        serde_yaml::Value::String(_) => "string",
        serde_yaml::Value::Sequence(_) => "sequence",
        serde_yaml::Value::Mapping(_) => "mapping",
        serde_yaml::Value::Tagged(_) => "tagged",
    }
}

// YAML numbers keep `.nan` and `.inf`, which a JSON value would turn into null
impl TryFrom<&serde_yaml::Value> for Value {
    type Error = ValueFmtError;

    fn try_from(value: &serde_yaml::Value) -> Result<Self> {
        match value {
            serde_yaml::Value::String(s) => Ok(Value::Text(s.clone())),
            serde_yaml::Value::Number(n) => n
                .as_f64()
                .map(Value::Numeric)
                .ok_or_else(|| ValueFmtError::invalid_input_kind("number")),
            other => Err(ValueFmtError::invalid_input_kind(yaml_kind_name(other))),
        }
    }
}
