//! Frozen JSON document with presence- and type-checked lookups.

use serde::de::Error as _;
use serde_json::{Map, Value};

use crate::error::{CardError, Result};

/// Human-readable name of a JSON value's variant.
pub fn kind_of(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(n) if n.is_f64() => "a float",
        Value::Number(_) => "an integer",
        Value::String(_) => "a string",
        Value::Array(_) => "a list",
        Value::Object(_) => "a mapping",
    }
}

/// A parsed response object. There is no mutable access once built.
#[derive(Debug, Clone, PartialEq)]
pub struct Document {
    fields: Map<String, Value>,
}

impl Document {
    /// Wraps a JSON value. The top level must be an object.
    pub fn from_value(value: Value) -> Result<Self> {
        match value {
            Value::Object(fields) => Ok(Self { fields }),
            other => Err(CardError::Decode(serde_json::Error::custom(format!(
                "expected a JSON object, found {}",
                kind_of(&other)
            )))),
        }
    }

    pub fn parse(body: &str) -> Result<Self> {
        Self::from_value(serde_json::from_str(body)?)
    }

    /// The raw mapping.
    pub fn fields(&self) -> &Map<String, Value> {
        &self.fields
    }

    pub fn contains(&self, key: &str) -> bool {
        self.fields.contains_key(key)
    }

    /// The `object` field, when it is a string ("card", "error", ...).
    pub fn object_kind(&self) -> Option<&str> {
        self.fields.get("object").and_then(Value::as_str)
    }

    pub fn get(&self, key: &str) -> Result<&Value> {
        self.fields.get(key).ok_or_else(|| CardError::missing(key))
    }

    /// Looks up `key` in the object at `self[parent][index]`.
    ///
    /// A missing parent, index or key is `MissingTupleField`; a parent that
    /// is not a list, or an entry that is not a mapping, is `TypeMismatch`.
    pub fn get_indexed(
        &self,
        parent: &'static str,
        index: usize,
        key: &'static str,
    ) -> Result<&Value> {
        let absent = || CardError::MissingTupleField {
            parent,
            index,
            field: key,
        };
        let items = match self.fields.get(parent) {
            None => return Err(absent()),
            Some(value) => value
                .as_array()
                .ok_or_else(|| mismatch(parent, "a list", value))?,
        };
        let item = items.get(index).ok_or_else(absent)?;
        let entry = item
            .as_object()
            .ok_or_else(|| mismatch(&format!("{parent}[{index}]"), "a mapping", item))?;
        entry.get(key).ok_or_else(absent)
    }

    pub fn str(&self, key: &str) -> Result<&str> {
        let value = self.get(key)?;
        value.as_str().ok_or_else(|| mismatch(key, "a string", value))
    }

    pub fn bool(&self, key: &str) -> Result<bool> {
        let value = self.get(key)?;
        value.as_bool().ok_or_else(|| mismatch(key, "a boolean", value))
    }

    /// Any JSON number, widened to `f64`.
    pub fn f64(&self, key: &str) -> Result<f64> {
        let value = self.get(key)?;
        value.as_f64().ok_or_else(|| mismatch(key, "a number", value))
    }

    pub fn u64(&self, key: &str) -> Result<u64> {
        let value = self.get(key)?;
        value
            .as_u64()
            .ok_or_else(|| mismatch(key, "a non-negative integer", value))
    }

    pub fn array(&self, key: &str) -> Result<&[Value]> {
        let value = self.get(key)?;
        value
            .as_array()
            .map(Vec::as_slice)
            .ok_or_else(|| mismatch(key, "a list", value))
    }

    pub fn object(&self, key: &str) -> Result<&Map<String, Value>> {
        let value = self.get(key)?;
        value.as_object().ok_or_else(|| mismatch(key, "a mapping", value))
    }

    pub fn indexed_array(
        &self,
        parent: &'static str,
        index: usize,
        key: &'static str,
    ) -> Result<&[Value]> {
        let value = self.get_indexed(parent, index, key)?;
        value
            .as_array()
            .map(Vec::as_slice)
            .ok_or_else(|| mismatch(&format!("{parent}[{index}].{key}"), "a list", value))
    }
}

fn mismatch(field: &str, expected: &'static str, found: &Value) -> CardError {
    CardError::TypeMismatch {
        field: field.to_string(),
        expected,
        found: kind_of(found),
    }
}
