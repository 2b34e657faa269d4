#![allow(dead_code)]

use std::collections::BTreeMap;

use scalegroup::input::{RawInput, RawValue};
use scalegroup::reconcile::ObservedRecord;
use scalegroup::resource::{AutoScalingGroup, Property, PropertyValue, TagMap};

/// Builder for raw descriptor input.
///
/// Starts empty; [`GroupInputBuilder::example`] gives the canonical valid
/// group used throughout the tests.
#[derive(Debug, Clone, Default)]
pub struct GroupInputBuilder {
    input: RawInput,
}

impl GroupInputBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// `test-asg` with every numeric field supplied as a string.
    pub fn example() -> Self {
        Self::new()
            .name("test-asg")
            .set("max_size", "3")
            .set("desired_capacity", "2")
            .set("min_size", "1")
            .set("default_cooldown", "200")
            .set("launch_configuration", "test-lc")
            .set("region", "sa-east-1")
    }

    pub fn name(self, name: &str) -> Self {
        self.set("name", name)
    }

    pub fn set(mut self, key: &str, value: impl Into<RawValue>) -> Self {
        self.input.insert(key.to_string(), value.into());
        self
    }

    pub fn remove(mut self, key: &str) -> Self {
        self.input.remove(key);
        self
    }

    pub fn subnets(self, subnets: &[&str]) -> Self {
        self.set("subnets", subnets.to_vec())
    }

    pub fn availability_zones(self, zones: &[&str]) -> Self {
        self.set("availability_zones", zones.to_vec())
    }

    pub fn tags(self, tags: &[(&str, &str)]) -> Self {
        let map: BTreeMap<&str, &str> = tags.iter().copied().collect();
        self.set("tags", map)
    }

    pub fn build(self) -> RawInput {
        self.input
    }

    /// Construct the descriptor, panicking on validation errors.
    pub fn construct(self) -> AutoScalingGroup {
        AutoScalingGroup::new(self.input).expect("builder input should be valid")
    }
}

/// Builder for observed records.
#[derive(Debug, Clone)]
pub struct ObservedBuilder {
    record: ObservedRecord,
}

impl ObservedBuilder {
    pub fn new(name: &str) -> Self {
        Self {
            record: ObservedRecord::new(name),
        }
    }

    /// Observed state that matches [`GroupInputBuilder::example`] exactly.
    pub fn matching_example() -> Self {
        Self::new("test-asg")
            .int(Property::MinSize, 1)
            .int(Property::MaxSize, 3)
            .int(Property::DesiredCapacity, 2)
            .int(Property::DefaultCooldown, 200)
            .str(Property::LaunchConfiguration, "test-lc")
            .str(Property::Region, "sa-east-1")
            .int(Property::InstanceCount, 2)
    }

    pub fn int(mut self, property: Property, value: i64) -> Self {
        self.record.set(property, PropertyValue::Int(value));
        self
    }

    pub fn str(mut self, property: Property, value: &str) -> Self {
        self.record.set(property, PropertyValue::Str(value.to_string()));
        self
    }

    pub fn list(mut self, property: Property, values: &[&str]) -> Self {
        self.record.set(
            property,
            PropertyValue::List(values.iter().map(|v| v.to_string()).collect()),
        );
        self
    }

    pub fn tags(mut self, tags: &[(&str, &str)]) -> Self {
        let map: TagMap = tags.iter().copied().collect();
        self.record.set(Property::Tags, PropertyValue::Tags(map));
        self
    }

    pub fn build(self) -> ObservedRecord {
        self.record
    }
}
