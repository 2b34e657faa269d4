// src/reconcile/plan.rs

//! Lifecycle intent state machine.
//!
//! | observed | ensure  | action              |
//! |----------|---------|---------------------|
//! | absent   | present | `Create`            |
//! | present  | present | `Update` or `Noop`  |
//! | present  | absent  | `Delete`            |
//! | absent   | absent  | `Noop`              |

use std::fmt;

use crate::reconcile::change::{ChangeSet, diff};
use crate::reconcile::observed::ObservedRecord;
use crate::resource::{AutoScalingGroup, Ensure};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    /// Group does not exist yet; the change set lists every desired value.
    Create(ChangeSet),
    /// Group exists but some properties drifted.
    Update(ChangeSet),
    Delete,
    Noop,
}

impl Action {
    pub fn verb(&self) -> &'static str {
        match self {
            Action::Create(_) => "create",
            Action::Update(_) => "update",
            Action::Delete => "delete",
            Action::Noop => "noop",
        }
    }

    pub fn is_noop(&self) -> bool {
        matches!(self, Action::Noop)
    }

    pub fn changes(&self) -> Option<&ChangeSet> {
        match self {
            Action::Create(changes) | Action::Update(changes) => Some(changes),
            Action::Delete | Action::Noop => None,
        }
    }
}

impl fmt::Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.verb())
    }
}

/// Decide what has to happen to move `observed` to `desired`.
pub fn plan(desired: &AutoScalingGroup, observed: Option<&ObservedRecord>) -> Action {
    match (desired.ensure(), observed) {
        (Ensure::Present, None) => Action::Create(diff(desired, None)),
        (Ensure::Present, Some(current)) => {
            let changes = diff(desired, Some(current));
            if changes.is_empty() {
                Action::Noop
            } else {
                Action::Update(changes)
            }
        }
        (Ensure::Absent, Some(_)) => Action::Delete,
        (Ensure::Absent, None) => Action::Noop,
    }
}
