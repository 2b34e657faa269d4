// src/resource/fields.rs

//! The field table.
//!
//! Every property is described by one [`FieldSpec`]: how raw input is
//! checked, how it is munged into a [`PropertyValue`], how a desired value is
//! compared with an observed one, and an optional default. The descriptor
//! constructor walks [`FIELDS`] in order, so the first failing field in that
//! order is the one reported.

use std::collections::BTreeSet;
use std::sync::LazyLock;

use regex::Regex;

use crate::errors::ValidationError;
use crate::input::RawValue;
use crate::resource::property::{Ensure, Property, PropertyValue};
use crate::resource::tags::normalize_tags;

pub type ValidateFn = fn(&'static str, &RawValue) -> Result<(), ValidationError>;
pub type MungeFn = fn(&'static str, &RawValue) -> Result<PropertyValue, ValidationError>;
pub type InsyncFn = fn(&PropertyValue, &PropertyValue) -> bool;

/// Cooldown applied when none is declared.
pub const DEFAULT_COOLDOWN: i64 = 300;

#[derive(Clone, Copy)]
pub struct FieldSpec {
    pub property: Property,
    pub validate: ValidateFn,
    pub munge: MungeFn,
    /// `insync(desired, observed)`.
    pub insync: InsyncFn,
    pub default: Option<fn() -> PropertyValue>,
}

impl FieldSpec {
    pub fn name(&self) -> &'static str {
        self.property.as_str()
    }

    /// Validate then munge one raw value.
    pub fn normalize(&self, raw: &RawValue) -> Result<PropertyValue, ValidationError> {
        (self.validate)(self.name(), raw)?;
        (self.munge)(self.name(), raw)
    }
}

pub static FIELDS: [FieldSpec; 11] = [
    FieldSpec {
        property: Property::Ensure,
        validate: validate_ensure,
        munge: munge_ensure,
        insync: values_equal,
        default: Some(default_ensure),
    },
    integer_field(Property::MinSize, None),
    integer_field(Property::MaxSize, None),
    integer_field(Property::DesiredCapacity, None),
    integer_field(Property::DefaultCooldown, Some(default_cooldown)),
    FieldSpec {
        property: Property::Region,
        validate: validate_region,
        munge: munge_string,
        insync: values_equal,
        default: None,
    },
    FieldSpec {
        property: Property::LaunchConfiguration,
        validate: validate_string,
        munge: munge_string,
        insync: values_equal,
        default: None,
    },
    FieldSpec {
        property: Property::InstanceCount,
        validate: validate_read_only,
        munge: munge_integer,
        insync: always_insync,
        default: None,
    },
    list_field(Property::AvailabilityZones),
    list_field(Property::Subnets),
    FieldSpec {
        property: Property::Tags,
        validate: validate_tags,
        munge: munge_tags,
        insync: tags_equal,
        default: None,
    },
];

/// Look up the table entry for a property.
///
/// `FIELDS` is laid out in `Property` declaration order.
pub fn field_spec(property: Property) -> &'static FieldSpec {
    &FIELDS[property as usize]
}

const fn integer_field(property: Property, default: Option<fn() -> PropertyValue>) -> FieldSpec {
    FieldSpec {
        property,
        validate: validate_integer,
        munge: munge_integer,
        insync: values_equal,
        default,
    }
}

const fn list_field(property: Property) -> FieldSpec {
    FieldSpec {
        property,
        validate: validate_string_list,
        munge: munge_string_list,
        insync: sets_equal,
        default: None,
    }
}

fn default_ensure() -> PropertyValue {
    PropertyValue::Intent(Ensure::Present)
}

fn default_cooldown() -> PropertyValue {
    PropertyValue::Int(DEFAULT_COOLDOWN)
}

// validators

fn validate_ensure(field: &'static str, raw: &RawValue) -> Result<(), ValidationError> {
    let Some(s) = raw.as_str() else {
        return Err(ValidationError::field(field, "ensure should be a String"));
    };
    s.parse::<Ensure>()
        .map(|_| ())
        .map_err(|msg| ValidationError::field(field, msg))
}

fn validate_integer(field: &'static str, raw: &RawValue) -> Result<(), ValidationError> {
    match raw {
        RawValue::Str(s) if s.is_empty() => Err(ValidationError::field(
            field,
            format!("{field} cannot be blank"),
        )),
        RawValue::Str(_) | RawValue::Int(_) | RawValue::Float(_) => Ok(()),
        other => Err(ValidationError::field(
            field,
            format!("{field} should be a number, got {}", other.kind_name()),
        )),
    }
}

static WHITESPACE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\s").expect("whitespace pattern is valid"));

fn validate_region(field: &'static str, raw: &RawValue) -> Result<(), ValidationError> {
    let Some(s) = raw.as_str() else {
        return Err(ValidationError::field(field, "region should be a String"));
    };
    if WHITESPACE.is_match(s) {
        return Err(ValidationError::field(field, "region should not contain spaces"));
    }
    if s.is_empty() {
        return Err(ValidationError::field(field, "region should not be blank"));
    }
    Ok(())
}

fn validate_string(field: &'static str, raw: &RawValue) -> Result<(), ValidationError> {
    match raw.as_str() {
        Some("") => Err(ValidationError::field(field, format!("{field} cannot be blank"))),
        Some(_) => Ok(()),
        None => Err(ValidationError::field(field, format!("{field} should be a String"))),
    }
}

fn validate_read_only(field: &'static str, _raw: &RawValue) -> Result<(), ValidationError> {
    Err(ValidationError::field(field, format!("{field} is read only")))
}

/// Accepts a single string or a list of strings.
fn validate_string_list(field: &'static str, raw: &RawValue) -> Result<(), ValidationError> {
    let all_strings = match raw {
        RawValue::Str(_) => true,
        RawValue::List(items) => items.iter().all(|item| item.as_str().is_some()),
        _ => false,
    };
    if all_strings {
        Ok(())
    } else {
        Err(ValidationError::field(field, format!("{field} should be a String")))
    }
}

fn validate_tags(_field: &'static str, raw: &RawValue) -> Result<(), ValidationError> {
    normalize_tags(raw).map(|_| ())
}

// munging

fn munge_ensure(field: &'static str, raw: &RawValue) -> Result<PropertyValue, ValidationError> {
    let s = raw.as_str().unwrap_or_default();
    s.parse::<Ensure>()
        .map(PropertyValue::Intent)
        .map_err(|msg| ValidationError::field(field, msg))
}

fn munge_integer(_field: &'static str, raw: &RawValue) -> Result<PropertyValue, ValidationError> {
    let value = match raw {
        RawValue::Int(i) => *i,
        RawValue::Float(f) => f.trunc() as i64,
        RawValue::Str(s) => parse_or_zero(s),
        _ => 0,
    };
    Ok(PropertyValue::Int(value))
}

fn munge_string(_field: &'static str, raw: &RawValue) -> Result<PropertyValue, ValidationError> {
    Ok(PropertyValue::Str(raw.as_str().unwrap_or_default().to_string()))
}

fn munge_string_list(
    _field: &'static str,
    raw: &RawValue,
) -> Result<PropertyValue, ValidationError> {
    let items = match raw {
        RawValue::Str(s) => vec![s.clone()],
        RawValue::List(items) => items
            .iter()
            .filter_map(|item| item.as_str().map(str::to_string))
            .collect(),
        _ => Vec::new(),
    };
    Ok(PropertyValue::List(items))
}

fn munge_tags(_field: &'static str, raw: &RawValue) -> Result<PropertyValue, ValidationError> {
    normalize_tags(raw).map(PropertyValue::Tags)
}

/// Lenient integer parse: leading whitespace and an optional sign, then the
/// longest run of digits (single underscores allowed between digits).
/// Input without a leading number yields 0. Out-of-range values saturate at
/// `i64::MIN` / `i64::MAX`.
pub fn parse_or_zero(s: &str) -> i64 {
    let s = s.trim_start();
    let (negative, digits) = match s.as_bytes().first() {
        Some(b'-') => (true, &s[1..]),
        Some(b'+') => (false, &s[1..]),
        _ => (false, s),
    };

    let mut value: i64 = 0;
    let mut seen_digit = false;
    let mut after_underscore = false;
    for c in digits.chars() {
        match c {
            '0'..='9' => {
                let digit = i64::from(c as u8 - b'0');
                value = value.saturating_mul(10);
                value = if negative {
                    value.saturating_sub(digit)
                } else {
                    value.saturating_add(digit)
                };
                seen_digit = true;
                after_underscore = false;
            }
            '_' if seen_digit && !after_underscore => after_underscore = true,
            _ => break,
        }
    }

    value
}

// insync

fn values_equal(desired: &PropertyValue, observed: &PropertyValue) -> bool {
    desired == observed
}

fn always_insync(_desired: &PropertyValue, _observed: &PropertyValue) -> bool {
    true
}

/// Unordered, duplicate-insensitive comparison of multi-valued properties.
fn sets_equal(desired: &PropertyValue, observed: &PropertyValue) -> bool {
    match (desired.as_list(), observed.as_list()) {
        (Some(d), Some(o)) => {
            let d: BTreeSet<&String> = d.iter().collect();
            let o: BTreeSet<&String> = o.iter().collect();
            d == o
        }
        _ => false,
    }
}

fn tags_equal(desired: &PropertyValue, observed: &PropertyValue) -> bool {
    match (desired.as_tags(), observed.as_tags()) {
        (Some(d), Some(o)) => d.insync(o),
        _ => false,
    }
}
