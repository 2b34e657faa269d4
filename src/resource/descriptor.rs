// src/resource/descriptor.rs

use std::collections::BTreeMap;

use tracing::{debug, trace};

use crate::errors::ValidationError;
use crate::input::{RawInput, RawValue};
use crate::resource::fields::{FIELDS, field_spec};
use crate::resource::invariant::{CapacityRule, check_capacity};
use crate::resource::property::{Ensure, Property, PropertyValue};
use crate::resource::tags::TagMap;

/// Key holding the identity of the group.
pub const NAME_KEY: &str = "name";

/// Knobs for descriptor construction.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DescriptorOptions {
    pub capacity_rule: CapacityRule,
}

/// Validated desired state of one auto scaling group.
///
/// Construction is all-or-nothing: either every field passes and the
/// capacity check holds, or a [`ValidationError`] is returned and no
/// descriptor exists. After construction the only mutation is
/// [`record_instance_count`](Self::record_instance_count).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AutoScalingGroup {
    name: String,
    properties: BTreeMap<Property, PropertyValue>,
}

impl AutoScalingGroup {
    /// Construct with default options (literal capacity rule).
    pub fn new(input: RawInput) -> Result<Self, ValidationError> {
        Self::with_options(input, DescriptorOptions::default())
    }

    pub fn with_options(
        input: RawInput,
        options: DescriptorOptions,
    ) -> Result<Self, ValidationError> {
        let name = validate_name(input.get(NAME_KEY))?;

        if let Some(unknown) = input
            .keys()
            .find(|key| key.as_str() != NAME_KEY && Property::from_name(key).is_none())
        {
            return Err(ValidationError::UnknownProperty(unknown.clone()));
        }

        let mut properties = BTreeMap::new();
        for entry in FIELDS.iter() {
            let value = match input.get(entry.name()) {
                Some(raw) => entry.normalize(raw)?,
                None => match entry.default {
                    Some(default) => default(),
                    None => continue,
                },
            };
            trace!(group = %name, property = %entry.property, %value, "normalized property");
            properties.insert(entry.property, value);
        }

        let group = Self { name, properties };
        check_capacity(
            options.capacity_rule,
            group.min_size(),
            group.max_size(),
            group.desired_capacity(),
        )?;

        debug!(group = %group.name, properties = group.properties.len(), "constructed descriptor");
        Ok(group)
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn get(&self, property: Property) -> Option<&PropertyValue> {
        self.properties.get(&property)
    }

    /// Properties that carry a value, in validation order.
    pub fn properties(&self) -> impl Iterator<Item = (Property, &PropertyValue)> {
        self.properties.iter().map(|(p, v)| (*p, v))
    }

    pub fn ensure(&self) -> Ensure {
        self.get(Property::Ensure)
            .and_then(PropertyValue::as_intent)
            .unwrap_or_default()
    }

    pub fn min_size(&self) -> Option<i64> {
        self.int(Property::MinSize)
    }

    pub fn max_size(&self) -> Option<i64> {
        self.int(Property::MaxSize)
    }

    pub fn desired_capacity(&self) -> Option<i64> {
        self.int(Property::DesiredCapacity)
    }

    pub fn default_cooldown(&self) -> Option<i64> {
        self.int(Property::DefaultCooldown)
    }

    pub fn region(&self) -> Option<&str> {
        self.get(Property::Region).and_then(PropertyValue::as_str)
    }

    pub fn launch_configuration(&self) -> Option<&str> {
        self.get(Property::LaunchConfiguration)
            .and_then(PropertyValue::as_str)
    }

    /// Last observed instance count; never part of the desired input.
    pub fn instance_count(&self) -> Option<i64> {
        self.int(Property::InstanceCount)
    }

    pub fn availability_zones(&self) -> &[String] {
        self.list(Property::AvailabilityZones)
    }

    pub fn subnets(&self) -> &[String] {
        self.list(Property::Subnets)
    }

    pub fn tags(&self) -> Option<&TagMap> {
        self.get(Property::Tags).and_then(PropertyValue::as_tags)
    }

    /// Store the observed instance count after a refresh.
    pub fn record_instance_count(&mut self, count: i64) {
        self.properties
            .insert(Property::InstanceCount, PropertyValue::Int(count));
    }

    /// Whether the desired `property` matches `observed`.
    ///
    /// An unset desired property is unmanaged and therefore always in sync.
    pub fn insync(&self, property: Property, observed: Option<&PropertyValue>) -> bool {
        if property.is_read_only() {
            return true;
        }
        let Some(desired) = self.get(property) else {
            return true;
        };
        match observed {
            Some(observed) => (field_spec(property).insync)(desired, observed),
            None => false,
        }
    }

    fn int(&self, property: Property) -> Option<i64> {
        self.get(property).and_then(PropertyValue::as_int)
    }

    fn list(&self, property: Property) -> &[String] {
        self.get(property)
            .and_then(PropertyValue::as_list)
            .unwrap_or(&[])
    }
}

fn validate_name(raw: Option<&RawValue>) -> Result<String, ValidationError> {
    match raw {
        None => Err(ValidationError::MissingIdentity),
        Some(RawValue::Str(s)) if s.is_empty() => Err(ValidationError::field(
            NAME_KEY,
            "Auto scaling groups must have a name",
        )),
        Some(RawValue::Str(s)) => Ok(s.clone()),
        Some(_) => Err(ValidationError::field(NAME_KEY, "name should be a String")),
    }
}
