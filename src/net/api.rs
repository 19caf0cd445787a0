//! Data-access seam between page drivers and the REST transport.
//!
//! Page drivers only see [`PropertyApi`], so tests can drive the dashboard and
//! tenant flows against an in-memory double and count exactly which calls a
//! user action produced.

use super::error::ApiError;
use super::types::{AssignStaffAck, DeleteAck, Id, Property, RoleQuery, Tenant, Ticket, User, Widgets};
use crate::config::Session;

#[async_trait::async_trait]
pub trait PropertyApi: Send + Sync {
    /// `GET /api/tenants/{id}`.
    async fn tenant(&self, session: &Session, id: &Id) -> Result<Tenant, ApiError>;

    /// `GET /api/properties/{name}`.
    async fn property(&self, session: &Session, name: &str) -> Result<Property, ApiError>;

    /// `GET /api/tickets?tenant={id}`.
    async fn tickets(&self, session: &Session, tenant: &Id) -> Result<Vec<Ticket>, ApiError>;

    /// `POST /api/users/role`.
    async fn users_by_role(&self, session: &Session, query: &RoleQuery) -> Result<Vec<User>, ApiError>;

    /// `GET /api/tenants`; requires a token.
    async fn tenants(&self, session: &Session) -> Result<Vec<Tenant>, ApiError>;

    /// `GET /api/widgets`; requires a token.
    async fn widgets(&self, session: &Session) -> Result<Widgets, ApiError>;

    /// `PUT /api/tenants/{id}` with `{ staffIDs: [staff] }`; requires a token.
    async fn assign_staff(&self, session: &Session, tenant: &Id, staff: &Id) -> Result<AssignStaffAck, ApiError>;

    /// `DELETE /api/user/{id}`; requires a token.
    async fn delete_user(&self, session: &Session, id: &Id) -> Result<DeleteAck, ApiError>;
}
