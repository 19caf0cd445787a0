//! Tenant record view state: contact table, edit form, staff search, tickets.
//!
//! SYSTEM CONTEXT
//! ==============
//! Backs the single-tenant page. The record (tenant, property, tickets) is
//! loaded as one unit; edits are merged locally; the staff search panel keeps
//! its text, results, and chosen staff here.
//!
//! Search results carry no request generation: whichever response arrives
//! last wins, even if it answers an older query.

#[cfg(test)]
#[path = "tenant_test.rs"]
mod tenant_test;

use serde::Serialize;
use tracing::debug;

use super::notice::{Notice, Notices};
use crate::net::error::ApiError;
use crate::net::types::{Property, RoleQuery, StaffChoice, Tenant, Ticket, User, UserRole, staff_choices};
use crate::util::validation::EditForm;

/// Everything the page shows about one tenant.
#[derive(Clone, Debug, PartialEq)]
pub struct TenantRecord {
    pub tenant: Tenant,
    pub property: Property,
    pub tickets: Vec<Ticket>,
}

#[derive(Clone, Debug, Default, PartialEq)]
pub enum TenantLoad {
    #[default]
    Loading,
    Loaded(TenantRecord),
    Failed(String),
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum TicketTab {
    #[default]
    Ongoing,
    Closed,
}

impl TicketTab {
    pub const ALL: [Self; 2] = [Self::Ongoing, Self::Closed];

    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::Ongoing => "Ongoing",
            Self::Closed => "Closed",
        }
    }

    fn includes(self, ticket: &Ticket) -> bool {
        let closed = ticket
            .status
            .as_deref()
            .is_some_and(|s| s.eq_ignore_ascii_case("closed"));
        match self {
            Self::Ongoing => !closed,
            Self::Closed => closed,
        }
    }
}

/// One row of the contact table.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct ContactRow {
    pub key: &'static str,
    pub label: &'static str,
    pub value: String,
    /// Property rows render read-only even in edit mode.
    pub editable: bool,
}

#[derive(Clone, Debug, Default)]
pub struct TenantViewState {
    pub load: TenantLoad,
    pub editing: bool,
    pub submitting: bool,
    pub search_text: String,
    pub search_results: Vec<StaffChoice>,
    pub selections: Vec<StaffChoice>,
    pub active_tab: TicketTab,
    pub notices: Notices,
}

#[derive(Debug)]
pub enum TenantEvent {
    Loaded(TenantRecord),
    LoadFailed(ApiError),
    EditToggled,
    EditCancelled,
    EditSubmitted(EditForm),
    EditSettled,
    SearchChanged(String),
    SearchResolved(Vec<User>),
    SearchFailed(ApiError),
    SelectionsChanged(Vec<StaffChoice>),
    TabSelected(TicketTab),
}

impl TenantViewState {
    pub fn apply(&mut self, event: TenantEvent) {
        match event {
            TenantEvent::Loaded(record) => {
                self.selections = staff_choices(record.tenant.staff_members());
                self.load = TenantLoad::Loaded(record);
            }
            TenantEvent::LoadFailed(error) => {
                self.load = TenantLoad::Failed(error.to_string());
                self.notices.push(Notice::from_error(&error));
            }
            TenantEvent::EditToggled => self.editing = !self.editing,
            TenantEvent::EditCancelled => self.editing = false,
            TenantEvent::EditSubmitted(form) => {
                if let TenantLoad::Loaded(record) = &mut self.load {
                    merge_edit(&mut record.tenant, form);
                    self.submitting = true;
                }
            }
            TenantEvent::EditSettled => {
                self.submitting = false;
                self.editing = false;
            }
            TenantEvent::SearchChanged(text) => {
                if text.is_empty() {
                    self.search_results.clear();
                }
                self.search_text = text;
            }
            TenantEvent::SearchResolved(users) => {
                debug!(results = users.len(), "staff search resolved");
                self.search_results = staff_choices(&users);
            }
            TenantEvent::SearchFailed(error) => self.notices.push(Notice::from_error(&error)),
            TenantEvent::SelectionsChanged(choices) => self.selections = choices,
            TenantEvent::TabSelected(tab) => self.active_tab = tab,
        }
    }

    #[must_use]
    pub fn record(&self) -> Option<&TenantRecord> {
        match &self.load {
            TenantLoad::Loaded(record) => Some(record),
            _ => None,
        }
    }

    /// Staff query the current search text calls for; `None` when the text is empty.
    #[must_use]
    pub fn search_query(&self) -> Option<RoleQuery> {
        (!self.search_text.is_empty()).then(|| RoleQuery::search(UserRole::Staff, self.search_text.clone()))
    }

    /// Contact table rows, empty until the record has loaded.
    #[must_use]
    pub fn contact_rows(&self) -> Vec<ContactRow> {
        let Some(TenantRecord { tenant, property, .. }) = self.record() else {
            return Vec::new();
        };
        vec![
            ContactRow { key: "firstName", label: "First Name", value: tenant.first_name.clone(), editable: true },
            ContactRow { key: "lastName", label: "Last Name", value: tenant.last_name.clone(), editable: true },
            ContactRow { key: "phone", label: "Phone", value: tenant.phone.clone(), editable: true },
            ContactRow { key: "address", label: "Property", value: property.full_address(), editable: false },
            ContactRow { key: "unit", label: "Unit", value: property.unit.clone(), editable: false },
        ]
    }

    /// Tickets shown under the active tab.
    #[must_use]
    pub fn tickets_for_tab(&self) -> Vec<&Ticket> {
        self.record()
            .map(|r| r.tickets.iter().filter(|t| self.active_tab.includes(t)).collect())
            .unwrap_or_default()
    }
}

fn merge_edit(tenant: &mut Tenant, form: EditForm) {
    tenant.first_name = form.first_name;
    tenant.last_name = form.last_name;
    tenant.phone = form.phone;
    tenant.email = form.email;
}
