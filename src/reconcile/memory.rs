// src/reconcile/memory.rs

//! In-memory provider.
//!
//! Keeps observed records in a map and applies actions to it directly. Used
//! by the `plan` command (seeded from an observed-state file) and in tests.

use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use tracing::info;

use crate::errors::ProviderError;
use crate::reconcile::observed::ObservedRecord;
use crate::reconcile::plan::Action;
use crate::reconcile::provider::{Provider, ProviderFuture};
use crate::resource::{Property, PropertyValue};

#[derive(Debug, Clone, Default)]
pub struct MemoryProvider {
    groups: Arc<Mutex<HashMap<String, ObservedRecord>>>,
}

impl MemoryProvider {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_records(records: impl IntoIterator<Item = ObservedRecord>) -> Self {
        let groups = records
            .into_iter()
            .map(|r| (r.name.clone(), r))
            .collect::<HashMap<_, _>>();
        Self {
            groups: Arc::new(Mutex::new(groups)),
        }
    }

    /// Snapshot of one group, for inspection.
    pub fn snapshot(&self, name: &str) -> Result<Option<ObservedRecord>, ProviderError> {
        let groups = self.lock()?;
        Ok(groups.get(name).cloned())
    }

    pub fn len(&self) -> usize {
        self.lock().map(|g| g.len()).unwrap_or(0)
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    fn lock(
        &self,
    ) -> Result<std::sync::MutexGuard<'_, HashMap<String, ObservedRecord>>, ProviderError> {
        self.groups
            .lock()
            .map_err(|_| ProviderError::Backend("memory provider lock poisoned".to_string()))
    }

    fn apply_blocking(&self, name: &str, action: &Action) -> Result<(), ProviderError> {
        let mut groups = self.lock()?;
        match action {
            Action::Create(changes) => {
                let mut record = ObservedRecord::new(name);
                for change in changes.iter() {
                    record.set(change.property, change.to.clone());
                }
                settle_instance_count(&mut record);
                groups.insert(name.to_string(), record);
                info!(group = %name, properties = changes.len(), "created group (memory)");
            }
            Action::Update(changes) => {
                let record = groups
                    .get_mut(name)
                    .ok_or_else(|| ProviderError::NotFound(name.to_string()))?;
                for change in changes.iter() {
                    record.set(change.property, change.to.clone());
                }
                settle_instance_count(record);
                info!(group = %name, properties = changes.len(), "updated group (memory)");
            }
            Action::Delete => {
                if groups.remove(name).is_none() {
                    return Err(ProviderError::NotFound(name.to_string()));
                }
                info!(group = %name, "deleted group (memory)");
            }
            Action::Noop => {}
        }
        Ok(())
    }
}

/// The simulated group runs exactly `desired_capacity` instances, falling
/// back to `min_size`.
fn settle_instance_count(record: &mut ObservedRecord) {
    let count = record
        .get(Property::DesiredCapacity)
        .or_else(|| record.get(Property::MinSize))
        .and_then(PropertyValue::as_int)
        .unwrap_or(0);
    record.set(Property::InstanceCount, PropertyValue::Int(count));
}

impl Provider for MemoryProvider {
    fn fetch_observed(&self, name: &str) -> ProviderFuture<'_, Option<ObservedRecord>> {
        let name = name.to_string();
        Box::pin(async move { self.snapshot(&name) })
    }

    fn apply_changes(&self, name: &str, action: &Action) -> ProviderFuture<'_, ()> {
        let name = name.to_string();
        let action = action.clone();
        Box::pin(async move { self.apply_blocking(&name, &action) })
    }
}
