// src/lib.rs

pub mod cli;
pub mod errors;
pub mod graph;
pub mod input;
pub mod logging;
pub mod manifest;
pub mod reconcile;
pub mod resource;

use anyhow::Result;
use tracing::{debug, info};

use crate::cli::{CliArgs, Command};
use crate::graph::DependencyGraph;
use crate::manifest::{Manifest, ManifestSettings};
use crate::reconcile::{MemoryProvider, Reconciler};
use crate::resource::{AutoScalingGroup, CapacityRule, ResourceKind, derive_edges};

/// High-level entry point used by `main.rs`.
///
/// This wires together:
/// - manifest loading + group construction
/// - dependency ordering
/// - (for `plan`) an in-memory provider and a dry-run reconciler
pub async fn run(args: CliArgs) -> Result<()> {
    let manifest = load_manifest(&args)?;

    match args.command {
        Command::Check => {
            print_check(&manifest);
            Ok(())
        }
        Command::Plan { observed } => {
            let provider = match observed {
                Some(path) => crate::manifest::memory_provider_from_path(path)?,
                None => MemoryProvider::new(),
            };
            run_plan(manifest, provider).await
        }
    }
}

fn load_manifest(args: &CliArgs) -> Result<Manifest> {
    let path = args.manifest_path();
    let raw = manifest::load_from_path(&path)?;

    let mut settings: ManifestSettings = raw.settings;
    if args.strict_capacity {
        settings.capacity_rule = CapacityRule::Strict;
    }

    let manifest = Manifest::from_raw(raw, settings)?;
    info!(
        path = %path.display(),
        groups = manifest.groups().len(),
        rule = ?settings.capacity_rule,
        "manifest loaded"
    );
    Ok(manifest)
}

/// Print every group with its normalized properties and edges.
fn print_check(manifest: &Manifest) {
    println!("scalegroup check");
    println!("  settings.capacity_rule = {:?}", manifest.settings.capacity_rule);
    println!();

    println!("groups ({}):", manifest.groups().len());
    for group in manifest.groups() {
        println!("  - {}", group.name());
        for (property, value) in group.properties() {
            println!("      {property}: {value}");
        }
        let edges = derive_edges(group);
        if !edges.is_empty() {
            let rendered: Vec<String> = edges.iter().map(|e| e.to_string()).collect();
            println!("      requires: {}", rendered.join(", "));
        }
    }

    debug!("check complete (no provider calls)");
}

/// Plan groups in dependency order against `provider` without applying.
async fn run_plan(manifest: Manifest, provider: MemoryProvider) -> Result<()> {
    let graph = DependencyGraph::from_groups(manifest.groups());
    let order = graph.apply_order()?;

    let mut groups = order_groups(manifest.into_groups(), &order);

    let reconciler = Reconciler::new(provider).dry_run(true);
    let reports = reconciler.converge_all(&mut groups).await?;

    println!("scalegroup plan");
    for node in graph.external_references() {
        println!("  requires {node}");
    }
    for report in &reports {
        println!("  {} {}", report.action, report.name);
        if let Some(changes) = report.action.changes() {
            for change in changes.iter() {
                println!("      {change}");
            }
        }
    }

    let pending = reports.iter().filter(|r| !r.action.is_noop()).count();
    info!(groups = reports.len(), pending, "plan complete");
    Ok(())
}

/// Sort groups to follow the graph's apply order.
fn order_groups(
    groups: Vec<AutoScalingGroup>,
    order: &[graph::ResourceNode],
) -> Vec<AutoScalingGroup> {
    let mut remaining = groups;
    let mut ordered = Vec::with_capacity(remaining.len());
    for node in order.iter().filter(|n| n.kind == ResourceKind::AutoScalingGroup) {
        if let Some(pos) = remaining.iter().position(|g| g.name() == node.identity) {
            ordered.push(remaining.swap_remove(pos));
        }
    }
    ordered.extend(remaining);
    ordered
}
