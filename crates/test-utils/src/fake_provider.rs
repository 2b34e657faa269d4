use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use scalegroup::errors::ProviderError;
use scalegroup::reconcile::{Action, ObservedRecord, Provider, ProviderFuture};

/// A fake provider that:
/// - serves observed records from a fixed map
/// - records every `apply_changes` call instead of acting on it
/// - can be told to reject applies for a given group.
#[derive(Debug, Clone, Default)]
pub struct RecordingProvider {
    observed: HashMap<String, ObservedRecord>,
    applied: Arc<Mutex<Vec<(String, Action)>>>,
    fetched: Arc<Mutex<Vec<String>>>,
    reject: Option<String>,
}

impl RecordingProvider {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_observed(mut self, record: ObservedRecord) -> Self {
        self.observed.insert(record.name.clone(), record);
        self
    }

    /// Fail every apply for `name`.
    pub fn rejecting(mut self, name: &str) -> Self {
        self.reject = Some(name.to_string());
        self
    }

    pub fn applied(&self) -> Vec<(String, Action)> {
        self.applied.lock().unwrap().clone()
    }

    pub fn fetched(&self) -> Vec<String> {
        self.fetched.lock().unwrap().clone()
    }
}

impl Provider for RecordingProvider {
    fn fetch_observed(&self, name: &str) -> ProviderFuture<'_, Option<ObservedRecord>> {
        let name = name.to_string();
        Box::pin(async move {
            self.fetched.lock().unwrap().push(name.clone());
            Ok(self.observed.get(&name).cloned())
        })
    }

    fn apply_changes(&self, name: &str, action: &Action) -> ProviderFuture<'_, ()> {
        let name = name.to_string();
        let action = action.clone();
        Box::pin(async move {
            if self.reject.as_deref() == Some(name.as_str()) {
                return Err(ProviderError::Rejected {
                    name,
                    reason: "rejected by test provider".to_string(),
                });
            }
            self.applied.lock().unwrap().push((name, action));
            Ok(())
        })
    }
}
