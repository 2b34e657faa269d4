// src/resource/edges.rs

//! Dependency edges from a group to the resources it references.
//!
//! Derivation only looks at the descriptor itself. Whether a referenced
//! resource actually exists is for the caller to resolve.

use std::collections::BTreeSet;
use std::fmt;

use crate::resource::descriptor::AutoScalingGroup;

/// Kinds of resources that take part in ordering.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum ResourceKind {
    AutoScalingGroup,
    LaunchConfiguration,
    Subnet,
}

impl ResourceKind {
    /// Type name used by the surrounding engine.
    pub fn type_name(&self) -> &'static str {
        match self {
            ResourceKind::AutoScalingGroup => "ec2_autoscalinggroup",
            ResourceKind::LaunchConfiguration => "ec2_launchconfiguration",
            ResourceKind::Subnet => "ec2_vpc_subnet",
        }
    }
}

impl fmt::Display for ResourceKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.type_name())
    }
}

/// "Reconcile `kind[identity]` before this group."
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct DependencyEdge {
    pub kind: ResourceKind,
    pub identity: String,
}

impl DependencyEdge {
    pub fn new(kind: ResourceKind, identity: impl Into<String>) -> Self {
        Self {
            kind,
            identity: identity.into(),
        }
    }
}

impl fmt::Display for DependencyEdge {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}[{}]", self.kind, self.identity)
    }
}

/// All edges implied by `group`: one to its launch configuration (if set)
/// and one per subnet.
pub fn derive_edges(group: &AutoScalingGroup) -> BTreeSet<DependencyEdge> {
    let launch_configuration = group
        .launch_configuration()
        .map(|lc| DependencyEdge::new(ResourceKind::LaunchConfiguration, lc));

    let subnets = group
        .subnets()
        .iter()
        .map(|subnet| DependencyEdge::new(ResourceKind::Subnet, subnet.as_str()));

    launch_configuration.into_iter().chain(subnets).collect()
}
