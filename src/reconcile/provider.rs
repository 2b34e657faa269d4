// src/reconcile/provider.rs

//! Pluggable provisioning provider abstraction.
//!
//! The reconciler never talks to a cloud API. It goes through a `Provider`,
//! which makes it easy to swap in the in-memory [`MemoryProvider`] or a
//! recording fake in tests.
//!
//! [`MemoryProvider`]: crate::reconcile::memory::MemoryProvider

use std::future::Future;
use std::pin::Pin;

use crate::errors::ProviderError;
use crate::reconcile::observed::ObservedRecord;
use crate::reconcile::plan::Action;

pub type ProviderFuture<'a, T> =
    Pin<Box<dyn Future<Output = Result<T, ProviderError>> + Send + 'a>>;

pub trait Provider: Send + Sync {
    /// Current state of the named group, or `None` if it does not exist.
    fn fetch_observed(&self, name: &str) -> ProviderFuture<'_, Option<ObservedRecord>>;

    /// Carry out a create / update / delete.
    ///
    /// Never called with [`Action::Noop`].
    fn apply_changes(&self, name: &str, action: &Action) -> ProviderFuture<'_, ()>;
}
