// src/resource/property.rs

//! Property names and their normalized values.

use std::fmt;
use std::str::FromStr;

use serde::Deserialize;

use crate::resource::tags::TagMap;

/// Desired lifecycle intent of a group.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Ensure {
    #[default]
    Present,
    Absent,
}

impl Ensure {
    pub fn as_str(&self) -> &'static str {
        match self {
            Ensure::Present => "present",
            Ensure::Absent => "absent",
        }
    }
}

impl fmt::Display for Ensure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Ensure {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "present" => Ok(Ensure::Present),
            "absent" => Ok(Ensure::Absent),
            other => Err(format!(
                "Invalid value \"{other}\". Valid values are present, absent."
            )),
        }
    }
}

/// Every property of an auto scaling group, in validation order.
///
/// `name` is not listed: it is the identity parameter and is checked before
/// any property.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Property {
    Ensure,
    MinSize,
    MaxSize,
    DesiredCapacity,
    DefaultCooldown,
    Region,
    LaunchConfiguration,
    InstanceCount,
    AvailabilityZones,
    Subnets,
    Tags,
}

impl Property {
    pub const ALL: [Property; 11] = [
        Property::Ensure,
        Property::MinSize,
        Property::MaxSize,
        Property::DesiredCapacity,
        Property::DefaultCooldown,
        Property::Region,
        Property::LaunchConfiguration,
        Property::InstanceCount,
        Property::AvailabilityZones,
        Property::Subnets,
        Property::Tags,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Property::Ensure => "ensure",
            Property::MinSize => "min_size",
            Property::MaxSize => "max_size",
            Property::DesiredCapacity => "desired_capacity",
            Property::DefaultCooldown => "default_cooldown",
            Property::Region => "region",
            Property::LaunchConfiguration => "launch_configuration",
            Property::InstanceCount => "instance_count",
            Property::AvailabilityZones => "availability_zones",
            Property::Subnets => "subnets",
            Property::Tags => "tags",
        }
    }

    pub fn from_name(name: &str) -> Option<Property> {
        Property::ALL.into_iter().find(|p| p.as_str() == name)
    }

    /// Properties that are only ever observed, never desired.
    pub fn is_read_only(&self) -> bool {
        matches!(self, Property::InstanceCount)
    }
}

impl fmt::Display for Property {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A property value after validation and munging.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PropertyValue {
    Int(i64),
    Str(String),
    /// Multi-valued property; keeps the list exactly as supplied.
    List(Vec<String>),
    Tags(TagMap),
    Intent(Ensure),
}

impl PropertyValue {
    pub fn as_int(&self) -> Option<i64> {
        match self {
            PropertyValue::Int(i) => Some(*i),
            _ => None,
        }
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            PropertyValue::Str(s) => Some(s.as_str()),
            _ => None,
        }
    }

    pub fn as_list(&self) -> Option<&[String]> {
        match self {
            PropertyValue::List(items) => Some(items.as_slice()),
            _ => None,
        }
    }

    pub fn as_tags(&self) -> Option<&TagMap> {
        match self {
            PropertyValue::Tags(tags) => Some(tags),
            _ => None,
        }
    }

    pub fn as_intent(&self) -> Option<Ensure> {
        match self {
            PropertyValue::Intent(e) => Some(*e),
            _ => None,
        }
    }
}

impl fmt::Display for PropertyValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PropertyValue::Int(i) => write!(f, "{i}"),
            PropertyValue::Str(s) => write!(f, "{s}"),
            PropertyValue::List(items) => write!(f, "[{}]", items.join(", ")),
            PropertyValue::Tags(tags) => write!(f, "{tags}"),
            PropertyValue::Intent(e) => write!(f, "{e}"),
        }
    }
}
