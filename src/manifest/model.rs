// src/manifest/model.rs

use std::collections::BTreeMap;

use serde::Deserialize;

use crate::input::RawInput;
use crate::reconcile::ObservedState;
use crate::resource::{AutoScalingGroup, CapacityRule, DescriptorOptions};

/// A manifest as read from TOML, before any group is constructed.
///
/// ```toml
/// [settings]
/// capacity_rule = "literal"
///
/// [group.test-asg]
/// min_size = "1"
/// max_size = "3"
/// desired_capacity = "2"
/// launch_configuration = "test-lc"
/// region = "sa-east-1"
/// subnets = ["subnet-a", "subnet-b"]
///
/// [group.test-asg.tags]
/// env = "prod"
/// ```
///
/// The table title doubles as the group's `name` unless `name` is given.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct RawManifest {
    #[serde(default)]
    pub settings: ManifestSettings,

    /// All groups from `[group.<title>]`, as untyped input.
    #[serde(default)]
    pub group: BTreeMap<String, RawInput>,
}

/// `[settings]` section.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ManifestSettings {
    /// `"literal"` (default) or `"strict"`.
    #[serde(default)]
    pub capacity_rule: CapacityRule,
}

impl ManifestSettings {
    pub fn descriptor_options(&self) -> DescriptorOptions {
        DescriptorOptions {
            capacity_rule: self.capacity_rule,
        }
    }
}

/// A manifest whose groups have all been constructed successfully.
///
/// Only obtainable through `TryFrom<RawManifest>` or [`Manifest::from_raw`].
#[derive(Debug, Clone)]
pub struct Manifest {
    pub settings: ManifestSettings,
    groups: Vec<AutoScalingGroup>,
}

impl Manifest {
    pub(crate) fn new_unchecked(settings: ManifestSettings, groups: Vec<AutoScalingGroup>) -> Self {
        Self { settings, groups }
    }

    pub fn groups(&self) -> &[AutoScalingGroup] {
        &self.groups
    }

    pub fn into_groups(self) -> Vec<AutoScalingGroup> {
        self.groups
    }

    pub fn group(&self, name: &str) -> Option<&AutoScalingGroup> {
        self.groups.iter().find(|g| g.name() == name)
    }
}

/// Observed-state file: `[group.<name>]` tables of typed values.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ObservedFile {
    #[serde(default)]
    pub group: BTreeMap<String, ObservedState>,
}
