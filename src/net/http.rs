//! `reqwest` implementation of [`PropertyApi`].
//!
//! Thin HTTP wrapper: build the request, attach the bearer token, then decode
//! the body with `serde_json` so decode failures keep the raw text out of the
//! transport error path.

use std::time::Duration;

use reqwest::{Method, Url};
use serde::de::DeserializeOwned;
use tracing::{debug, warn};

use super::api::PropertyApi;
use super::error::ApiError;
use super::types::{
    AssignStaffAck, AssignStaffRequest, DeleteAck, Id, Property, RoleQuery, Tenant, TenantList, Ticket, User,
    UserList, Widgets,
};
use crate::config::{ClientConfig, Session};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Auth {
    /// Send the token when the session has one.
    Optional,
    /// Refuse to send without a token.
    Required,
}

pub struct HttpApi {
    http: reqwest::Client,
    base_url: Url,
}

impl HttpApi {
    /// Build an HTTP client for the configured API origin.
    ///
    /// # Errors
    ///
    /// Returns an error if the base URL is invalid or the client fails to build.
    pub fn new(config: &ClientConfig) -> Result<Self, ApiError> {
        let base_url = Url::parse(&config.base_url)
            .map_err(|e| ApiError::HttpClientBuild(format!("invalid base URL {}: {e}", config.base_url)))?;
        if base_url.cannot_be_a_base() {
            return Err(ApiError::HttpClientBuild(format!("base URL cannot carry paths: {}", config.base_url)));
        }
        let http = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.timeouts.request_secs))
            .connect_timeout(Duration::from_secs(config.timeouts.connect_secs))
            .build()
            .map_err(|e| ApiError::HttpClientBuild(e.to_string()))?;
        Ok(Self { http, base_url })
    }

    fn endpoint(&self, segments: &[&str]) -> Url {
        let mut url = self.base_url.clone();
        if let Ok(mut path) = url.path_segments_mut() {
            path.pop_if_empty().extend(segments);
        }
        url
    }

    async fn send<T: DeserializeOwned>(
        &self,
        session: &Session,
        auth: Auth,
        label: &'static str,
        method: Method,
        url: Url,
        body: Option<serde_json::Value>,
    ) -> Result<T, ApiError> {
        let token = session.access_token();
        if auth == Auth::Required && token.is_none() {
            return Err(ApiError::Unauthenticated { endpoint: label });
        }

        debug!(endpoint = label, %url, "api request");
        let mut request = self.http.request(method, url);
        if let Some(token) = token {
            request = request.bearer_auth(token);
        }
        if let Some(body) = body {
            request = request.json(&body);
        }

        let response = request.send().await.map_err(|e| {
            warn!(endpoint = label, error = %e, "api request failed");
            ApiError::Transport(e.to_string())
        })?;

        let status = response.status();
        let text = response
            .text()
            .await
            .map_err(|e| ApiError::Transport(e.to_string()))?;

        if !status.is_success() {
            warn!(endpoint = label, status = status.as_u16(), "api returned error status");
            return Err(ApiError::Status { status: status.as_u16(), body: text });
        }

        serde_json::from_str(&text).map_err(|e| {
            warn!(endpoint = label, error = %e, "api response decode failed");
            ApiError::Decode(e.to_string())
        })
    }
}

fn to_body<T: serde::Serialize>(value: &T) -> Result<serde_json::Value, ApiError> {
    serde_json::to_value(value).map_err(|e| ApiError::Decode(e.to_string()))
}

#[async_trait::async_trait]
impl PropertyApi for HttpApi {
    async fn tenant(&self, session: &Session, id: &Id) -> Result<Tenant, ApiError> {
        let url = self.endpoint(&["api", "tenants", id.as_str()]);
        self.send(session, Auth::Optional, "GET /api/tenants/{id}", Method::GET, url, None)
            .await
    }

    async fn property(&self, session: &Session, name: &str) -> Result<Property, ApiError> {
        let url = self.endpoint(&["api", "properties", name]);
        self.send(session, Auth::Optional, "GET /api/properties/{name}", Method::GET, url, None)
            .await
    }

    async fn tickets(&self, session: &Session, tenant: &Id) -> Result<Vec<Ticket>, ApiError> {
        let mut url = self.endpoint(&["api", "tickets"]);
        url.query_pairs_mut().append_pair("tenant", tenant.as_str());
        self.send(session, Auth::Optional, "GET /api/tickets", Method::GET, url, None)
            .await
    }

    async fn users_by_role(&self, session: &Session, query: &RoleQuery) -> Result<Vec<User>, ApiError> {
        let url = self.endpoint(&["api", "users", "role"]);
        let list: UserList = self
            .send(session, Auth::Optional, "POST /api/users/role", Method::POST, url, Some(to_body(query)?))
            .await?;
        Ok(list.users)
    }

    async fn tenants(&self, session: &Session) -> Result<Vec<Tenant>, ApiError> {
        let url = self.endpoint(&["api", "tenants"]);
        let list: TenantList = self
            .send(session, Auth::Required, "GET /api/tenants", Method::GET, url, None)
            .await?;
        Ok(list.tenants)
    }

    async fn widgets(&self, session: &Session) -> Result<Widgets, ApiError> {
        let url = self.endpoint(&["api", "widgets"]);
        self.send(session, Auth::Required, "GET /api/widgets", Method::GET, url, None)
            .await
    }

    async fn assign_staff(&self, session: &Session, tenant: &Id, staff: &Id) -> Result<AssignStaffAck, ApiError> {
        let url = self.endpoint(&["api", "tenants", tenant.as_str()]);
        let body = to_body(&AssignStaffRequest { staff_ids: [staff] })?;
        self.send(session, Auth::Required, "PUT /api/tenants/{id}", Method::PUT, url, Some(body))
            .await
    }

    async fn delete_user(&self, session: &Session, id: &Id) -> Result<DeleteAck, ApiError> {
        let url = self.endpoint(&["api", "user", id.as_str()]);
        self.send(session, Auth::Required, "DELETE /api/user/{id}", Method::DELETE, url, None)
            .await
    }
}
