// src/resource/tags.rs

//! Shared tag normalization.
//!
//! Tags may be written in two shapes:
//!
//! ```toml
//! # scalar form: one flat mapping
//! tags = { env = "prod", team = "ops" }
//!
//! # structured form: a list of key/value records
//! tags = [{ key = "env", value = "prod" }, { Key = "team", Value = "ops" }]
//! ```
//!
//! Both are folded into one canonical [`TagMap`]. A list of flat mappings is
//! demoted into a single mapping. Everything here is a pure function.

use std::collections::BTreeMap;
use std::fmt;

use tracing::warn;

use crate::errors::ValidationError;
use crate::input::RawValue;

const FIELD: &str = "tags";

/// One structured `{ key, value }` entry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TagRecord {
    pub key: String,
    pub value: String,
}

/// The shapes tags may be supplied in.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TagForm {
    Mapping(BTreeMap<String, String>),
    Records(Vec<TagRecord>),
}

impl TagForm {
    /// Classify a raw value, checking that every key and value is a scalar.
    pub fn from_raw(value: &RawValue) -> Result<TagForm, ValidationError> {
        match value {
            RawValue::Map(map) => Ok(TagForm::Mapping(flat_mapping(map)?)),
            RawValue::List(items) => {
                let mut records = Vec::new();
                for item in items {
                    let RawValue::Map(map) = item else {
                        return Err(ValidationError::field(
                            FIELD,
                            format!("tags entries must be mappings, got {}", item.kind_name()),
                        ));
                    };
                    match as_record(map)? {
                        Some(record) => records.push(record),
                        None => {
                            for (key, value) in flat_mapping(map)? {
                                records.push(TagRecord { key, value });
                            }
                        }
                    }
                }
                Ok(TagForm::Records(records))
            }
            other => Err(ValidationError::field(
                FIELD,
                format!("tags should be a mapping, got {}", other.kind_name()),
            )),
        }
    }

    /// Fold into the canonical mapping. Keys that collide case-insensitively
    /// are rejected.
    pub fn normalize(self) -> Result<TagMap, ValidationError> {
        let pairs: Vec<(String, String)> = match self {
            TagForm::Mapping(map) => map.into_iter().collect(),
            TagForm::Records(records) => records.into_iter().map(|r| (r.key, r.value)).collect(),
        };

        let mut tags = TagMap::default();
        for (key, value) in pairs {
            if key.is_empty() {
                return Err(ValidationError::field(FIELD, "tag keys cannot be blank"));
            }
            if tags.get_ignore_case(&key).is_some() {
                return Err(ValidationError::field(
                    FIELD,
                    format!("duplicate tag key '{key}'"),
                ));
            }
            tags.entries.insert(key, value);
        }
        Ok(tags)
    }
}

/// Canonical, ordered tag mapping. Key spelling is preserved for providers.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TagMap {
    entries: BTreeMap<String, String>,
}

impl TagMap {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<String>) {
        self.entries.insert(key.into(), value.into());
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.entries.get(key).map(|v| v.as_str())
    }

    pub fn get_ignore_case(&self, key: &str) -> Option<&str> {
        self.entries
            .iter()
            .find(|(k, _)| k.eq_ignore_ascii_case(key))
            .map(|(_, v)| v.as_str())
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    /// Compare for reconciliation: keys match case-insensitively, values
    /// must be identical.
    ///
    /// Maps built through `FromIterator` skip duplicate checks, so an
    /// observed map may hold keys differing only by case (`Env` and `env`).
    /// Such a map is never in sync.
    pub fn insync(&self, observed: &TagMap) -> bool {
        match (folded(self), folded(observed)) {
            (Some(desired), Some(observed)) => desired == observed,
            _ => false,
        }
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for TagMap {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self {
            entries: iter.into_iter().map(|(k, v)| (k.into(), v.into())).collect(),
        }
    }
}

impl fmt::Display for TagMap {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let rendered: Vec<String> = self
            .entries
            .iter()
            .map(|(k, v)| format!("{k} => {v}"))
            .collect();
        write!(f, "{{{}}}", rendered.join(", "))
    }
}

/// Parse and normalize a raw `tags` value in one step.
pub fn normalize_tags(value: &RawValue) -> Result<TagMap, ValidationError> {
    TagForm::from_raw(value)?.normalize()
}

/// Lowercase every key; `None` when two keys collide.
fn folded(tags: &TagMap) -> Option<BTreeMap<String, &str>> {
    let mut out = BTreeMap::new();
    for (key, value) in &tags.entries {
        if out.insert(key.to_ascii_lowercase(), value.as_str()).is_some() {
            warn!(key = %key, "tag keys collide when compared case-insensitively");
            return None;
        }
    }
    Some(out)
}

fn flat_mapping(map: &BTreeMap<String, RawValue>) -> Result<BTreeMap<String, String>, ValidationError> {
    let mut out = BTreeMap::new();
    for (key, value) in map {
        out.insert(key.clone(), scalar_tag_value(key, value)?);
    }
    Ok(out)
}

/// A mapping is a record when its keys are exactly `key` and `value`
/// (any case).
fn as_record(map: &BTreeMap<String, RawValue>) -> Result<Option<TagRecord>, ValidationError> {
    if map.len() != 2 {
        return Ok(None);
    }
    let find = |name: &str| {
        map.iter()
            .find(|(k, _)| k.eq_ignore_ascii_case(name))
            .map(|(_, v)| v)
    };
    match (find("key"), find("value")) {
        (Some(key), Some(value)) => Ok(Some(TagRecord {
            key: scalar_tag_value("key", key)?,
            value: scalar_tag_value("value", value)?,
        })),
        _ => Ok(None),
    }
}

fn scalar_tag_value(key: &str, value: &RawValue) -> Result<String, ValidationError> {
    value.scalar_to_string().ok_or_else(|| {
        ValidationError::field(
            FIELD,
            format!("tag '{key}' must have a scalar value, got {}", value.kind_name()),
        )
    })
}
