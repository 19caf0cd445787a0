//! In-memory [`PropertyApi`] double that records every call it receives.

use std::collections::HashSet;
use std::sync::Mutex;

use super::api::PropertyApi;
use super::error::ApiError;
use super::types::{AssignStaffAck, DeleteAck, Id, Property, RoleQuery, Tenant, Ticket, User, UserRole, Widgets};
use crate::config::Session;

#[derive(Clone, Debug, PartialEq)]
pub enum Call {
    Tenant(Id),
    Property(String),
    Tickets(Id),
    UsersByRole(RoleQuery),
    Tenants,
    Widgets,
    AssignStaff { tenant: Id, staff: Id },
    DeleteUser(Id),
}

/// Canned responses; a `None` slot answers with a transport error.
#[derive(Default)]
pub struct MockApi {
    pub calls: Mutex<Vec<Call>>,
    pub tenant: Option<Tenant>,
    pub property: Option<Property>,
    pub tickets: Option<Vec<Ticket>>,
    pub tenants: Option<Vec<Tenant>>,
    pub widgets: Option<Widgets>,
    pub pending_users: Option<Vec<User>>,
    pub staff_users: Option<Vec<User>>,
    pub admin_users: Option<Vec<User>>,
    /// Tenants whose `PUT` fails.
    pub assign_failures: HashSet<Id>,
    /// Tenants whose `PUT` succeeds but echoes no id.
    pub assign_without_echo: HashSet<Id>,
    pub delete_ack: Option<DeleteAck>,
}

impl MockApi {
    pub fn calls(&self) -> Vec<Call> {
        self.calls.lock().unwrap().clone()
    }

    pub fn count(&self, pred: impl Fn(&Call) -> bool) -> usize {
        self.calls.lock().unwrap().iter().filter(|c| pred(c)).count()
    }

    fn record(&self, call: Call) {
        self.calls.lock().unwrap().push(call);
    }
}

/// Mirrors `HttpApi`: protected endpoints refuse an anonymous session.
fn require_token(session: &Session, endpoint: &'static str) -> Result<(), ApiError> {
    if session.is_authenticated() { Ok(()) } else { Err(ApiError::Unauthenticated { endpoint }) }
}

fn canned<T: Clone>(slot: Option<&T>) -> Result<T, ApiError> {
    slot.cloned().ok_or_else(|| ApiError::Transport("mock failure".into()))
}

pub fn user(id: &str, first: &str, last: &str) -> User {
    User {
        id: Id::from(id),
        first_name: first.into(),
        last_name: last.into(),
        email: None,
        phone: None,
        userrole: None,
    }
}

pub fn tenant(id: &str, staff: Option<&str>) -> Tenant {
    Tenant {
        id: Id::from(id),
        first_name: format!("First{id}"),
        last_name: format!("Last{id}"),
        phone: "5551234".into(),
        email: None,
        property_name: "Elm".into(),
        staff: staff.map(|s| super::types::StaffAssignment::Single(Id::from(s))),
    }
}

#[async_trait::async_trait]
impl PropertyApi for MockApi {
    async fn tenant(&self, _session: &Session, id: &Id) -> Result<Tenant, ApiError> {
        self.record(Call::Tenant(id.clone()));
        canned(self.tenant.as_ref())
    }

    async fn property(&self, _session: &Session, name: &str) -> Result<Property, ApiError> {
        self.record(Call::Property(name.to_owned()));
        canned(self.property.as_ref())
    }

    async fn tickets(&self, _session: &Session, tenant: &Id) -> Result<Vec<Ticket>, ApiError> {
        self.record(Call::Tickets(tenant.clone()));
        canned(self.tickets.as_ref())
    }

    async fn users_by_role(&self, _session: &Session, query: &RoleQuery) -> Result<Vec<User>, ApiError> {
        self.record(Call::UsersByRole(query.clone()));
        match query.userrole {
            UserRole::Pending => canned(self.pending_users.as_ref()),
            UserRole::Staff => canned(self.staff_users.as_ref()),
            UserRole::Admin => canned(self.admin_users.as_ref()),
        }
    }

    async fn tenants(&self, session: &Session) -> Result<Vec<Tenant>, ApiError> {
        self.record(Call::Tenants);
        require_token(session, "GET /api/tenants")?;
        canned(self.tenants.as_ref())
    }

    async fn widgets(&self, session: &Session) -> Result<Widgets, ApiError> {
        self.record(Call::Widgets);
        require_token(session, "GET /api/widgets")?;
        canned(self.widgets.as_ref())
    }

    async fn assign_staff(&self, session: &Session, tenant: &Id, staff: &Id) -> Result<AssignStaffAck, ApiError> {
        self.record(Call::AssignStaff { tenant: tenant.clone(), staff: staff.clone() });
        require_token(session, "PUT /api/tenants/{id}")?;
        if self.assign_failures.contains(tenant) {
            return Err(ApiError::Status { status: 500, body: "boom".into() });
        }
        if self.assign_without_echo.contains(tenant) {
            return Ok(AssignStaffAck { id: None });
        }
        Ok(AssignStaffAck { id: Some(tenant.clone()) })
    }

    async fn delete_user(&self, session: &Session, id: &Id) -> Result<DeleteAck, ApiError> {
        self.record(Call::DeleteUser(id.clone()));
        require_token(session, "DELETE /api/user/{id}")?;
        canned(self.delete_ack.as_ref())
    }
}
