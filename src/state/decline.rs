//! Confirmation state machine for declining a pending access request.
//!
//! ```text
//! Idle --open(id)--> Confirming --confirm(true)--> Deleting --settle--> Idle
//!                       |
//!                       +--confirm(false) / cancel--> Idle
//! ```
//!
//! Opening the modal never touches the network; only a confirmed denial hands
//! back the stored target for the caller to delete.

#[cfg(test)]
#[path = "decline_test.rs"]
mod decline_test;

use crate::net::types::Id;

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum DeclineModal {
    #[default]
    Idle,
    /// Modal visible, waiting on YES/NO for this requester.
    Confirming { target: Id },
    /// Modal hidden, delete request in flight.
    Deleting { target: Id },
}

impl DeclineModal {
    #[must_use]
    pub fn is_visible(&self) -> bool {
        matches!(self, Self::Confirming { .. })
    }

    /// Requester the modal is asking about, if it is showing.
    #[must_use]
    pub fn target(&self) -> Option<&Id> {
        match self {
            Self::Confirming { target } => Some(target),
            _ => None,
        }
    }

    pub fn open(&mut self, target: Id) {
        *self = Self::Confirming { target };
    }

    /// Hide the modal. Returns the requester to delete only when `do_deny` is set.
    pub fn confirm(&mut self, do_deny: bool) -> Option<Id> {
        match std::mem::take(self) {
            Self::Confirming { target } if do_deny => {
                *self = Self::Deleting { target: target.clone() };
                Some(target)
            }
            Self::Confirming { .. } => None,
            other => {
                *self = other;
                None
            }
        }
    }

    pub fn cancel(&mut self) {
        if self.is_visible() {
            *self = Self::Idle;
        }
    }

    /// Delete for `target` finished, successfully or not.
    pub fn settle(&mut self, target: &Id) {
        if matches!(self, Self::Deleting { target: pending } if pending == target) {
            *self = Self::Idle;
        }
    }
}
