// src/resource/mod.rs

//! The `ec2_autoscalinggroup` resource model.
//!
//! - [`property`] names the properties and their normalized values.
//! - [`fields`] is the per-property table of validate / munge / insync rules.
//! - [`tags`] is the shared tag normalizer.
//! - [`invariant`] holds the cross-field capacity check.
//! - [`descriptor`] builds an [`AutoScalingGroup`] from raw input.
//! - [`edges`] derives ordering edges to referenced resources.

pub mod descriptor;
pub mod edges;
pub mod fields;
pub mod invariant;
pub mod property;
pub mod tags;

pub use descriptor::{AutoScalingGroup, DescriptorOptions};
pub use edges::{DependencyEdge, ResourceKind, derive_edges};
pub use fields::{DEFAULT_COOLDOWN, FIELDS, FieldSpec, parse_or_zero};
pub use invariant::CapacityRule;
pub use property::{Ensure, Property, PropertyValue};
pub use tags::{TagForm, TagMap, TagRecord};
