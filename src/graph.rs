// src/graph.rs

//! Ordering view over a set of declared groups.
//!
//! Edge direction: dependency -> group. For a group `web` using launch
//! configuration `lc` and subnet `s1` we add `lc -> web` and `s1 -> web`.
//! Referenced resources that are not declared here still become nodes;
//! resolving them is up to whoever executes the order.
//!
//! Every edge ends at a group node and no group depends on another group, so
//! the graph is acyclic by construction. `DependencyCycle` can only surface
//! once a resource kind is allowed to depend on a group.

use std::collections::BTreeSet;
use std::fmt;

use petgraph::algo::toposort;
use petgraph::graphmap::DiGraphMap;
use tracing::debug;

use crate::errors::{Result, ScalegroupError};
use crate::resource::{AutoScalingGroup, DependencyEdge, ResourceKind, derive_edges};

/// A resource in the ordering graph, keyed by kind and identity.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ResourceNode {
    pub kind: ResourceKind,
    pub identity: String,
}

impl ResourceNode {
    pub fn new(kind: ResourceKind, identity: impl Into<String>) -> Self {
        Self {
            kind,
            identity: identity.into(),
        }
    }

    pub fn group(name: &str) -> Self {
        Self::new(ResourceKind::AutoScalingGroup, name)
    }
}

impl From<&DependencyEdge> for ResourceNode {
    fn from(edge: &DependencyEdge) -> Self {
        Self::new(edge.kind, edge.identity.clone())
    }
}

impl fmt::Display for ResourceNode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}[{}]", self.kind, self.identity)
    }
}

#[derive(Debug, Clone, Default)]
pub struct DependencyGraph {
    nodes: BTreeSet<ResourceNode>,
    /// `(dependency, dependent)` pairs.
    edges: BTreeSet<(ResourceNode, ResourceNode)>,
}

impl DependencyGraph {
    pub fn from_groups(groups: &[AutoScalingGroup]) -> Self {
        let mut graph = Self::default();

        for group in groups {
            let node = ResourceNode::group(group.name());
            graph.nodes.insert(node.clone());

            for edge in derive_edges(group) {
                let dep = ResourceNode::from(&edge);
                graph.nodes.insert(dep.clone());
                graph.edges.insert((dep, node.clone()));
            }
        }

        debug!(
            nodes = graph.nodes.len(),
            edges = graph.edges.len(),
            "built dependency graph"
        );
        graph
    }

    pub fn nodes(&self) -> impl Iterator<Item = &ResourceNode> {
        self.nodes.iter()
    }

    /// Immediate dependencies of `node`.
    pub fn dependencies_of(&self, node: &ResourceNode) -> Vec<&ResourceNode> {
        self.edges
            .iter()
            .filter(|(_, to)| to == node)
            .map(|(from, _)| from)
            .collect()
    }

    /// Immediate dependents of `node`.
    pub fn dependents_of(&self, node: &ResourceNode) -> Vec<&ResourceNode> {
        self.edges
            .iter()
            .filter(|(from, _)| from == node)
            .map(|(_, to)| to)
            .collect()
    }

    /// Referenced resources that are not auto scaling groups declared here.
    pub fn external_references(&self) -> Vec<&ResourceNode> {
        self.nodes
            .iter()
            .filter(|n| n.kind != ResourceKind::AutoScalingGroup)
            .collect()
    }

    /// A topological order: every resource appears after what it depends on.
    ///
    /// Never fails for graphs built by [`DependencyGraph::from_groups`].
    pub fn apply_order(&self) -> Result<Vec<ResourceNode>> {
        let graph = self.as_graphmap();
        match toposort(&graph, None) {
            Ok(order) => Ok(order.into_iter().cloned().collect()),
            Err(cycle) => Err(ScalegroupError::DependencyCycle(format!(
                "cycle detected involving {}",
                cycle.node_id()
            ))),
        }
    }

    fn as_graphmap(&self) -> DiGraphMap<&ResourceNode, ()> {
        let mut graph = DiGraphMap::new();
        for node in &self.nodes {
            graph.add_node(node);
        }
        for (from, to) in &self.edges {
            graph.add_edge(from, to, ());
        }
        graph
    }
}
