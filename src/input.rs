// src/input.rs

//! Raw, un-normalized input for a descriptor.
//!
//! Values arrive either from a TOML manifest (deserialized through the
//! untagged [`RawValue`]) or are built in code through the `From` impls.

use std::collections::BTreeMap;

use serde::Deserialize;

/// Property name -> raw value.
pub type RawInput = BTreeMap<String, RawValue>;

/// A value as the user wrote it, before any validation or munging.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum RawValue {
    Bool(bool),
    Int(i64),
    Float(f64),
    Str(String),
    List(Vec<RawValue>),
    Map(BTreeMap<String, RawValue>),
}

impl RawValue {
    pub fn as_str(&self) -> Option<&str> {
        match self {
            RawValue::Str(s) => Some(s.as_str()),
            _ => None,
        }
    }

    /// `true` only for the empty string.
    pub fn is_blank(&self) -> bool {
        matches!(self, RawValue::Str(s) if s.is_empty())
    }

    /// Short name of the value's shape, for error messages.
    pub fn kind_name(&self) -> &'static str {
        match self {
            RawValue::Bool(_) => "boolean",
            RawValue::Int(_) => "integer",
            RawValue::Float(_) => "float",
            RawValue::Str(_) => "string",
            RawValue::List(_) => "list",
            RawValue::Map(_) => "mapping",
        }
    }

    /// Render a scalar the way it would be written as a plain string.
    ///
    /// Lists and mappings have no scalar rendering.
    pub fn scalar_to_string(&self) -> Option<String> {
        match self {
            RawValue::Bool(b) => Some(b.to_string()),
            RawValue::Int(i) => Some(i.to_string()),
            RawValue::Float(f) => Some(f.to_string()),
            RawValue::Str(s) => Some(s.clone()),
            RawValue::List(_) | RawValue::Map(_) => None,
        }
    }
}

impl From<&str> for RawValue {
    fn from(s: &str) -> Self {
        RawValue::Str(s.to_string())
    }
}

impl From<String> for RawValue {
    fn from(s: String) -> Self {
        RawValue::Str(s)
    }
}

impl From<i64> for RawValue {
    fn from(i: i64) -> Self {
        RawValue::Int(i)
    }
}

impl From<f64> for RawValue {
    fn from(f: f64) -> Self {
        RawValue::Float(f)
    }
}

impl From<bool> for RawValue {
    fn from(b: bool) -> Self {
        RawValue::Bool(b)
    }
}

impl<T: Into<RawValue>> From<Vec<T>> for RawValue {
    fn from(items: Vec<T>) -> Self {
        RawValue::List(items.into_iter().map(Into::into).collect())
    }
}

impl<K: Into<String>, V: Into<RawValue>> From<BTreeMap<K, V>> for RawValue {
    fn from(map: BTreeMap<K, V>) -> Self {
        RawValue::Map(
            map.into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        )
    }
}
