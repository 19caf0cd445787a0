//! Async page drivers.
//!
//! A page owns its view state plus the data-access handle and session it
//! needs. User actions that touch the network are async methods; each turns
//! responses into state events and reports a typed outcome.

pub mod dashboard;
pub mod tenant;

/// Result of a page's initial load.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum LoadOutcome {
    /// Every request succeeded.
    Complete,
    /// Some sections failed; the rest were applied.
    Partial { failures: Vec<&'static str> },
    /// Nothing could be loaded.
    Failed { failures: Vec<&'static str> },
}

impl LoadOutcome {
    pub(crate) fn from_sections(attempted: usize, failures: Vec<&'static str>) -> Self {
        if failures.is_empty() {
            Self::Complete
        } else if failures.len() >= attempted {
            Self::Failed { failures }
        } else {
            Self::Partial { failures }
        }
    }
}
