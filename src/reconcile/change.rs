// src/reconcile/change.rs

//! Property-level change sets.

use std::fmt;

use crate::reconcile::observed::ObservedRecord;
use crate::resource::{AutoScalingGroup, Property, PropertyValue};

/// One property that is out of sync.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PropertyChange {
    pub property: Property,
    /// Observed value, or `None` if the backend reported nothing.
    pub from: Option<PropertyValue>,
    /// Desired value, as supplied (lists keep their order).
    pub to: PropertyValue,
}

impl fmt::Display for PropertyChange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.from {
            Some(from) => write!(f, "{}: {} -> {}", self.property, from, self.to),
            None => write!(f, "{}: (unset) -> {}", self.property, self.to),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ChangeSet {
    changes: Vec<PropertyChange>,
}

impl ChangeSet {
    pub fn is_empty(&self) -> bool {
        self.changes.is_empty()
    }

    pub fn len(&self) -> usize {
        self.changes.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = &PropertyChange> {
        self.changes.iter()
    }

    pub fn get(&self, property: Property) -> Option<&PropertyChange> {
        self.changes.iter().find(|c| c.property == property)
    }

    pub fn contains(&self, property: Property) -> bool {
        self.get(property).is_some()
    }

    fn push(&mut self, change: PropertyChange) {
        self.changes.push(change);
    }
}

/// Compare every managed property of `desired` with `observed`.
///
/// Properties `desired` does not set are left alone, `ensure` is handled by
/// [`plan`](crate::reconcile::plan) and `instance_count` is never compared.
pub fn diff(desired: &AutoScalingGroup, observed: Option<&ObservedRecord>) -> ChangeSet {
    let mut changes = ChangeSet::default();

    for (property, value) in desired.properties() {
        if property == Property::Ensure || property.is_read_only() {
            continue;
        }
        let current = observed.and_then(|o| o.get(property));
        if !desired.insync(property, current) {
            changes.push(PropertyChange {
                property,
                from: current.cloned(),
                to: value.clone(),
            });
        }
    }

    changes
}
