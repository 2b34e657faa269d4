// src/reconcile/observed.rs

//! Observed state as reported by a provider.

use std::collections::BTreeMap;

use serde::Deserialize;

use crate::resource::{Property, PropertyValue, TagMap};

/// Current values of one group, including read-only attributes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ObservedRecord {
    pub name: String,
    properties: BTreeMap<Property, PropertyValue>,
}

impl ObservedRecord {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            properties: BTreeMap::new(),
        }
    }

    pub fn get(&self, property: Property) -> Option<&PropertyValue> {
        self.properties.get(&property)
    }

    pub fn set(&mut self, property: Property, value: PropertyValue) {
        self.properties.insert(property, value);
    }

    /// Builder-style [`set`](Self::set).
    pub fn with(mut self, property: Property, value: PropertyValue) -> Self {
        self.set(property, value);
        self
    }

    pub fn properties(&self) -> impl Iterator<Item = (Property, &PropertyValue)> {
        self.properties.iter().map(|(p, v)| (*p, v))
    }

    pub fn instance_count(&self) -> Option<i64> {
        self.get(Property::InstanceCount)
            .and_then(PropertyValue::as_int)
    }
}

/// One `[group.<name>]` table of an observed-state file.
///
/// Unlike desired input this is already typed: it describes what a backend
/// reported, so no munging applies.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ObservedState {
    #[serde(default)]
    pub min_size: Option<i64>,
    #[serde(default)]
    pub max_size: Option<i64>,
    #[serde(default)]
    pub desired_capacity: Option<i64>,
    #[serde(default)]
    pub default_cooldown: Option<i64>,
    #[serde(default)]
    pub region: Option<String>,
    #[serde(default)]
    pub launch_configuration: Option<String>,
    #[serde(default)]
    pub instance_count: Option<i64>,
    #[serde(default)]
    pub availability_zones: Option<Vec<String>>,
    #[serde(default)]
    pub subnets: Option<Vec<String>>,
    #[serde(default)]
    pub tags: Option<BTreeMap<String, String>>,
}

impl ObservedState {
    pub fn into_record(self, name: impl Into<String>) -> ObservedRecord {
        let mut record = ObservedRecord::new(name);

        let ints = [
            (Property::MinSize, self.min_size),
            (Property::MaxSize, self.max_size),
            (Property::DesiredCapacity, self.desired_capacity),
            (Property::DefaultCooldown, self.default_cooldown),
            (Property::InstanceCount, self.instance_count),
        ];
        for (property, value) in ints {
            if let Some(v) = value {
                record.set(property, PropertyValue::Int(v));
            }
        }

        if let Some(region) = self.region {
            record.set(Property::Region, PropertyValue::Str(region));
        }
        if let Some(lc) = self.launch_configuration {
            record.set(Property::LaunchConfiguration, PropertyValue::Str(lc));
        }
        if let Some(zones) = self.availability_zones {
            record.set(Property::AvailabilityZones, PropertyValue::List(zones));
        }
        if let Some(subnets) = self.subnets {
            record.set(Property::Subnets, PropertyValue::List(subnets));
        }
        if let Some(tags) = self.tags {
            record.set(
                Property::Tags,
                PropertyValue::Tags(tags.into_iter().collect::<TagMap>()),
            );
        }

        record
    }
}
