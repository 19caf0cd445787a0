//! Admin dashboard driver.
//!
//! SYSTEM CONTEXT
//! ==============
//! On load, three independent branches run concurrently: the tenant roster
//! (plus staff candidates when anyone is unstaffed), the widget summary, and
//! the pending access requests. Saving fans out one `PUT` per picked tenant
//! and only reconciles once every response has settled.

#[cfg(test)]
#[path = "dashboard_test.rs"]
mod dashboard_test;

use std::sync::Arc;

use futures::future::join_all;
use tracing::{info, warn};

use super::LoadOutcome;
use crate::config::Session;
use crate::net::api::PropertyApi;
use crate::net::error::ApiError;
use crate::net::types::{Id, RoleQuery, Tenant, User, UserRole};
use crate::state::dashboard::{DashboardEvent, DashboardState};

/// Role queried for the staff selector on the dashboard.
pub const ASSIGNMENT_CANDIDATE_ROLE: UserRole = UserRole::Admin;

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SaveOutcome {
    /// Save was not enabled; no request was sent.
    NothingToSave,
    /// Every request succeeded and the list was reconciled.
    Saved { staffed: usize, remaining: usize },
    /// At least one request failed; the list is unchanged.
    Failed { attempted: usize, failed: usize },
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum DeclineOutcome {
    /// Modal dismissed without a delete.
    Cancelled,
    /// Requester deleted and removed from the list.
    Declined(Id),
    /// Delete answered with an unrecognized acknowledgment; requester kept.
    Kept(Id),
    /// Delete failed; requester kept.
    Failed(Id),
}

/// Result of the roster branch of the dashboard load.
struct Roster {
    tenants: Result<Vec<Tenant>, ApiError>,
    /// `None` when no tenant needed staff and the fetch was skipped.
    candidates: Option<Result<Vec<User>, ApiError>>,
}

pub struct DashboardPage {
    api: Arc<dyn PropertyApi>,
    session: Session,
    pub state: DashboardState,
}

impl DashboardPage {
    pub fn new(api: Arc<dyn PropertyApi>, session: Session) -> Self {
        Self { api, session, state: DashboardState::default() }
    }

    /// Fetch roster, widgets, and pending requests concurrently.
    pub async fn load(&mut self) -> LoadOutcome {
        let api = Arc::clone(&self.api);
        let session = &self.session;
        let pending_query = RoleQuery::role(UserRole::Pending);

        let (roster, widgets, pending) = futures::join!(
            load_roster(api.as_ref(), session),
            api.widgets(session),
            api.users_by_role(session, &pending_query),
        );

        let mut attempted = 3;
        let mut failures = Vec::new();

        match roster.tenants {
            Ok(tenants) => self.state.apply(DashboardEvent::TenantsLoaded(tenants)),
            Err(e) => self.fail_section("tenants", e, &mut failures),
        }
        if let Some(candidates) = roster.candidates {
            attempted += 1;
            match candidates {
                Ok(users) => self.state.apply(DashboardEvent::CandidatesLoaded(users)),
                Err(e) => self.fail_section("staff candidates", e, &mut failures),
            }
        }
        match widgets {
            Ok(widgets) => self.state.apply(DashboardEvent::WidgetsLoaded(widgets)),
            Err(e) => self.fail_section("widgets", e, &mut failures),
        }
        match pending {
            Ok(users) => self.state.apply(DashboardEvent::PendingLoaded(users)),
            Err(e) => self.fail_section("pending requests", e, &mut failures),
        }

        info!(
            unstaffed = self.state.unstaffed.len(),
            candidates = self.state.staff_candidates.len(),
            pending = self.state.pending.len(),
            failed = failures.len(),
            "dashboard loaded"
        );
        LoadOutcome::from_sections(attempted, failures)
    }

    fn fail_section(&mut self, section: &'static str, error: ApiError, failures: &mut Vec<&'static str>) {
        warn!(section, error = %error, "dashboard section failed to load");
        failures.push(section);
        self.state.apply(DashboardEvent::LoadFailed(error));
    }

    /// Record a local staff pick. No request is sent.
    pub fn change_assignment(&mut self, tenant: Id, staff: Id) {
        self.state.apply(DashboardEvent::AssignmentChanged { tenant, staff });
    }

    /// Send every local pick, then reconcile once all responses settle.
    pub async fn save_assignments(&mut self) -> SaveOutcome {
        if !self.state.can_save() {
            return SaveOutcome::NothingToSave;
        }

        let assignments = self.state.pending_assignments();
        let attempted = assignments.len();
        self.state.apply(DashboardEvent::SaveStarted);
        info!(attempted, "saving staff assignments");

        let api = Arc::clone(&self.api);
        let session = &self.session;
        let results = join_all(
            assignments
                .iter()
                .map(|(tenant, staff)| api.assign_staff(session, tenant, staff)),
        )
        .await;

        let mut acks = Vec::with_capacity(attempted);
        let mut first_error = None;
        let mut failed = 0;
        for result in results {
            match result {
                Ok(ack) => acks.push(ack),
                Err(e) => {
                    failed += 1;
                    first_error.get_or_insert(e);
                }
            }
        }

        if let Some(error) = first_error {
            self.state.apply(DashboardEvent::SaveFailed(error));
            return SaveOutcome::Failed { attempted, failed };
        }

        let before = self.state.unstaffed.len();
        self.state.apply(DashboardEvent::SaveSucceeded(acks));
        let remaining = self.state.unstaffed.len();
        SaveOutcome::Saved { staffed: before - remaining, remaining }
    }

    /// Open the decline confirmation for a listed requester. No request is sent.
    /// Returns `false` when `id` is not a pending request.
    pub fn decline(&mut self, id: Id) -> bool {
        self.state.apply(DashboardEvent::DeclineClicked(id.clone()));
        self.state.decline.target() == Some(&id)
    }

    /// Answer the decline confirmation; only `do_deny = true` deletes.
    pub async fn confirm_decline(&mut self, do_deny: bool) -> DeclineOutcome {
        let Some(id) = self.state.confirm_decline(do_deny) else {
            return DeclineOutcome::Cancelled;
        };

        match self.api.delete_user(&self.session, &id).await {
            Ok(ack) => {
                let deleted = ack.is_deleted();
                self.state.apply(DashboardEvent::DeleteAcked { id: id.clone(), ack });
                if deleted { DeclineOutcome::Declined(id) } else { DeclineOutcome::Kept(id) }
            }
            Err(error) => {
                self.state.apply(DashboardEvent::DeleteFailed { id: id.clone(), error });
                DeclineOutcome::Failed(id)
            }
        }
    }
}

/// Tenants, then staff candidates only if some tenant is unstaffed.
async fn load_roster(api: &dyn PropertyApi, session: &Session) -> Roster {
    let tenants = match api.tenants(session).await {
        Ok(tenants) => tenants,
        Err(e) => return Roster { tenants: Err(e), candidates: None },
    };

    if tenants.iter().all(Tenant::is_staffed) {
        return Roster { tenants: Ok(tenants), candidates: None };
    }

    let candidates = api
        .users_by_role(session, &RoleQuery::role(ASSIGNMENT_CANDIDATE_ROLE))
        .await;
    Roster { tenants: Ok(tenants), candidates: Some(candidates) }
}
