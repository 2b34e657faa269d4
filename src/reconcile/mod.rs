// src/reconcile/mod.rs

//! Reconciliation: compare desired against observed state and act on it.
//!
//! The pure pieces ([`change::diff`], [`plan::plan`]) do no IO. The
//! [`Reconciler`] is the async shell that talks to a [`Provider`].

pub mod change;
pub mod memory;
pub mod observed;
pub mod plan;
pub mod provider;
pub mod reconciler;

pub use change::{ChangeSet, PropertyChange, diff};
pub use memory::MemoryProvider;
pub use observed::{ObservedRecord, ObservedState};
pub use plan::{Action, plan};
pub use provider::{Provider, ProviderFuture};
pub use reconciler::{ConvergeReport, Reconciler};
