//! Admin dashboard state: staff assignment, widgets, and access requests.
//!
//! SYSTEM CONTEXT
//! ==============
//! The dashboard lists tenants with no staff, lets an admin pick one staff
//! member per tenant locally, then saves every pick in one batch. Pending
//! access requesters can be approved (navigation only) or declined through
//! the confirmation modal in [`super::decline`].
//!
//! All mutation goes through [`DashboardState::apply`]; the async driver in
//! `pages::dashboard` turns network results into events.

#[cfg(test)]
#[path = "dashboard_test.rs"]
mod dashboard_test;

use std::collections::HashSet;

use tracing::{debug, info, warn};

use super::decline::DeclineModal;
use super::notice::{Notice, Notices};
use crate::net::error::{ApiError, ErrorCode};
use crate::net::types::{AssignStaffAck, DeleteAck, Id, StaffAssignment, Tenant, USER_DELETED_ACK, User, Widgets};

/// Shown when a decline request fails in transport.
pub const REQUEST_ERROR_MESSAGE: &str = "There was an error processing your request. Please try again later";

#[derive(Clone, Debug, Default)]
pub struct DashboardState {
    /// Tenants with no staff, carrying any local (unsaved) picks.
    pub unstaffed: Vec<Tenant>,
    /// Users offered in each tenant's staff selector.
    pub staff_candidates: Vec<User>,
    /// Users awaiting access approval.
    pub pending: Vec<User>,
    pub widgets: Widgets,
    /// Set by the first assignment change; gates the save action.
    pub assignments_made: bool,
    /// True while a save batch is in flight.
    pub saving: bool,
    pub decline: DeclineModal,
    pub notices: Notices,
}

#[derive(Debug)]
pub enum DashboardEvent {
    TenantsLoaded(Vec<Tenant>),
    CandidatesLoaded(Vec<User>),
    PendingLoaded(Vec<User>),
    WidgetsLoaded(Widgets),
    LoadFailed(ApiError),
    /// A staff selector changed. An empty `staff` clears the pick.
    AssignmentChanged { tenant: Id, staff: Id },
    SaveStarted,
    /// Every request in the batch succeeded.
    SaveSucceeded(Vec<AssignStaffAck>),
    /// At least one request in the batch failed.
    SaveFailed(ApiError),
    DeclineClicked(Id),
    DeclineCancelled,
    DeleteAcked { id: Id, ack: DeleteAck },
    DeleteFailed { id: Id, error: ApiError },
}

/// Where the approve action navigates, plus the requester it carries along.
#[derive(Clone, Debug, PartialEq)]
pub struct AccessRoute<'a> {
    pub path: String,
    pub user: Option<&'a User>,
}

/// Keep only tenants whose staff reference is unset.
#[must_use]
pub fn unstaffed_tenants(tenants: Vec<Tenant>) -> Vec<Tenant> {
    tenants.into_iter().filter(|t| !t.is_staffed()).collect()
}

impl DashboardState {
    pub fn apply(&mut self, event: DashboardEvent) {
        match event {
            DashboardEvent::TenantsLoaded(tenants) => {
                self.unstaffed = unstaffed_tenants(tenants);
            }
            DashboardEvent::CandidatesLoaded(users) => self.staff_candidates = users,
            DashboardEvent::PendingLoaded(users) => self.pending = users,
            DashboardEvent::WidgetsLoaded(widgets) => self.widgets = widgets,
            DashboardEvent::LoadFailed(error) => self.notices.push(Notice::from_error(&error)),
            DashboardEvent::AssignmentChanged { tenant, staff } => self.change_assignment(&tenant, staff),
            DashboardEvent::SaveStarted => self.saving = true,
            DashboardEvent::SaveSucceeded(acks) => self.reconcile(&acks),
            DashboardEvent::SaveFailed(error) => {
                self.saving = false;
                warn!(error = %error, "staff assignment batch failed; nothing reconciled");
                self.notices.push(Notice::from_error(&error));
            }
            DashboardEvent::DeclineClicked(id) => {
                if self.pending.iter().any(|u| u.id == id) {
                    self.decline.open(id);
                } else {
                    debug!(user_id = %id, "decline ignored for unlisted requester");
                }
            }
            DashboardEvent::DeclineCancelled => self.decline.cancel(),
            DashboardEvent::DeleteAcked { id, ack } => self.finish_delete(&id, &ack),
            DashboardEvent::DeleteFailed { id, error } => {
                self.decline.settle(&id);
                warn!(user_id = %id, error = %error, "decline delete failed");
                self.notices.push(Notice {
                    message: REQUEST_ERROR_MESSAGE.to_owned(),
                    ..Notice::from_error(&error)
                });
            }
        }
    }

    /// Answer the decline modal. Returns the requester to delete when `do_deny` is set.
    pub fn confirm_decline(&mut self, do_deny: bool) -> Option<Id> {
        self.decline.confirm(do_deny)
    }

    #[must_use]
    pub fn can_save(&self) -> bool {
        self.assignments_made && !self.saving
    }

    /// `(tenant, staff)` for every unstaffed tenant that currently has a pick.
    #[must_use]
    pub fn pending_assignments(&self) -> Vec<(Id, Id)> {
        self.unstaffed
            .iter()
            .filter_map(|t| t.assigned_staff_id().map(|staff| (t.id.clone(), staff.clone())))
            .collect()
    }

    #[must_use]
    pub fn approve_target(&self, id: &Id) -> AccessRoute<'_> {
        AccessRoute {
            path: format!("/request-access/{id}"),
            user: self.pending.iter().find(|u| &u.id == id),
        }
    }

    fn change_assignment(&mut self, tenant_id: &Id, staff: Id) {
        let Some(tenant) = self.unstaffed.iter_mut().find(|t| &t.id == tenant_id) else {
            return;
        };
        tenant.staff = (!staff.is_empty()).then_some(StaffAssignment::Single(staff));
        self.assignments_made = true;
    }

    /// Drop every tenant echoed back by the batch; tenants without an echo stay.
    fn reconcile(&mut self, acks: &[AssignStaffAck]) {
        self.saving = false;
        let confirmed: HashSet<&Id> = acks.iter().filter_map(|ack| ack.id.as_ref()).collect();
        let before = self.unstaffed.len();
        self.unstaffed.retain(|t| !confirmed.contains(&t.id));
        info!(
            staffed = before - self.unstaffed.len(),
            remaining = self.unstaffed.len(),
            "staff assignments reconciled"
        );
    }

    fn finish_delete(&mut self, id: &Id, ack: &DeleteAck) {
        self.decline.settle(id);
        if ack.is_deleted() {
            self.pending.retain(|u| &u.id != id);
            info!(user_id = %id, "access request declined");
            return;
        }
        let error = ApiError::UnrecognizedAck {
            endpoint: "DELETE /api/user/{id}",
            message: ack.message.clone().unwrap_or_default(),
        };
        warn!(user_id = %id, expected = USER_DELETED_ACK, "unrecognized delete acknowledgment");
        self.notices.push(Notice::info(error.error_code(), error.to_string()));
    }
}
