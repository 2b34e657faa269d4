// src/reconcile/reconciler.rs

//! Async shell around the pure [`plan`] step.
//!
//! For each group: fetch observed state, record the observed instance count,
//! plan, then hand the action to the provider (unless running dry).

use tracing::{debug, info};

use crate::errors::Result;
use crate::reconcile::plan::{Action, plan};
use crate::reconcile::provider::Provider;
use crate::resource::AutoScalingGroup;

/// What happened to one group during a converge pass.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConvergeReport {
    pub name: String,
    pub action: Action,
    /// `false` for no-ops and dry runs.
    pub applied: bool,
}

#[derive(Debug)]
pub struct Reconciler<P: Provider> {
    provider: P,
    dry_run: bool,
}

impl<P: Provider> Reconciler<P> {
    pub fn new(provider: P) -> Self {
        Self {
            provider,
            dry_run: false,
        }
    }

    /// Plan only; never call `apply_changes`.
    pub fn dry_run(mut self, dry_run: bool) -> Self {
        self.dry_run = dry_run;
        self
    }

    pub fn provider(&self) -> &P {
        &self.provider
    }

    pub async fn converge(&self, group: &mut AutoScalingGroup) -> Result<ConvergeReport> {
        let observed = self.provider.fetch_observed(group.name()).await?;

        if let Some(count) = observed.as_ref().and_then(|o| o.instance_count()) {
            group.record_instance_count(count);
        }

        let action = plan(group, observed.as_ref());
        debug!(
            group = %group.name(),
            action = %action,
            changes = action.changes().map(|c| c.len()).unwrap_or(0),
            "planned group"
        );

        let applied = if action.is_noop() || self.dry_run {
            false
        } else {
            self.provider.apply_changes(group.name(), &action).await?;
            info!(group = %group.name(), action = %action, "applied changes");
            true
        };

        Ok(ConvergeReport {
            name: group.name().to_string(),
            action,
            applied,
        })
    }

    /// Converge groups one after another in the given order. Stops at the
    /// first provider error.
    pub async fn converge_all(
        &self,
        groups: &mut [AutoScalingGroup],
    ) -> Result<Vec<ConvergeReport>> {
        let mut reports = Vec::with_capacity(groups.len());
        for group in groups.iter_mut() {
            reports.push(self.converge(group).await?);
        }
        Ok(reports)
    }
}
