//! Tenant record page driver.
//!
//! SYSTEM CONTEXT
//! ==============
//! Loads one tenant's record in dependency order (tenant, then its property,
//! then its tickets), runs the contact edit form, and backs the staff search
//! panel with role-filtered queries.

#[cfg(test)]
#[path = "tenant_test.rs"]
mod tenant_test;

use std::sync::Arc;
use std::time::Duration;

use tracing::{info, warn};

use super::LoadOutcome;
use crate::config::Session;
use crate::net::api::PropertyApi;
use crate::net::error::ApiError;
use crate::net::types::Id;
use crate::state::tenant::{TenantEvent, TenantRecord, TenantViewState};
use crate::util::validation::{EditForm, ValidationError, validate};

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SearchOutcome {
    /// Empty text: results cleared, no query sent.
    Cleared,
    /// Query answered with this many matches.
    Resolved(usize),
    /// Query failed; previous results kept.
    Failed,
}

pub struct TenantPage {
    api: Arc<dyn PropertyApi>,
    session: Session,
    tenant_id: Id,
    submit_delay: Duration,
    pub state: TenantViewState,
}

impl TenantPage {
    pub fn new(api: Arc<dyn PropertyApi>, session: Session, tenant_id: Id, submit_delay: Duration) -> Self {
        Self { api, session, tenant_id, submit_delay, state: TenantViewState::default() }
    }

    /// Fetch tenant, property, and tickets in order. Any failure stores nothing.
    pub async fn load(&mut self) -> LoadOutcome {
        match self.fetch_record().await {
            Ok(record) => {
                info!(
                    tenant_id = %self.tenant_id,
                    property = %record.property.name,
                    tickets = record.tickets.len(),
                    "tenant record loaded"
                );
                self.state.apply(TenantEvent::Loaded(record));
                LoadOutcome::Complete
            }
            Err((step, error)) => {
                warn!(tenant_id = %self.tenant_id, step, error = %error, "tenant record load failed");
                self.state.apply(TenantEvent::LoadFailed(error));
                LoadOutcome::Failed { failures: vec![step] }
            }
        }
    }

    async fn fetch_record(&self) -> Result<TenantRecord, (&'static str, ApiError)> {
        let tenant = self
            .api
            .tenant(&self.session, &self.tenant_id)
            .await
            .map_err(|e| ("tenant", e))?;
        let property = self
            .api
            .property(&self.session, &tenant.property_name)
            .await
            .map_err(|e| ("property", e))?;
        let tickets = self
            .api
            .tickets(&self.session, &tenant.id)
            .await
            .map_err(|e| ("tickets", e))?;
        Ok(TenantRecord { tenant, property, tickets })
    }

    /// Validate and merge the edit form locally, leaving edit mode after the
    /// configured delay. Nothing is persisted.
    ///
    /// # Errors
    ///
    /// Returns the failing fields; state is untouched in that case.
    pub async fn submit_edit(&mut self, form: EditForm) -> Result<(), ValidationError> {
        validate(&form)?;
        self.state.apply(TenantEvent::EditSubmitted(form));
        tokio::time::sleep(self.submit_delay).await;
        self.state.apply(TenantEvent::EditSettled);
        info!(tenant_id = %self.tenant_id, "tenant contact edit applied locally");
        Ok(())
    }

    /// Update the staff search text, querying staff when it is non-empty.
    pub async fn search(&mut self, text: impl Into<String>) -> SearchOutcome {
        self.state.apply(TenantEvent::SearchChanged(text.into()));
        let Some(query) = self.state.search_query() else {
            return SearchOutcome::Cleared;
        };

        match self.api.users_by_role(&self.session, &query).await {
            Ok(users) => {
                let found = users.len();
                self.state.apply(TenantEvent::SearchResolved(users));
                SearchOutcome::Resolved(found)
            }
            Err(error) => {
                warn!(error = %error, "staff search failed");
                self.state.apply(TenantEvent::SearchFailed(error));
                SearchOutcome::Failed
            }
        }
    }
}
