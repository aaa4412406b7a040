//! Tenant management requests. These are not scoped to the configured tenant.

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::RequestError;

use super::{Endpoint, Method, require};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct TenantCreateRequest {
    pub id: String,
    pub name: String,
}

impl TenantCreateRequest {
    /// # Errors
    ///
    /// [`RequestError::EmptyField`] for a blank id or name.
    pub fn new(id: &str, name: &str) -> Result<Self, RequestError> {
        let request = TenantCreateRequest {
            id: require("tenant id", id)?,
            name: require("tenant name", name)?,
        };
        debug!(
            event = "Request",
            phase = "Build",
            kind = "tenant-create",
            id = request.id.as_str()
        );
        Ok(request)
    }
}

impl Endpoint for TenantCreateRequest {
    fn method(&self) -> Method {
        Method::Post
    }

    fn path(&self) -> String {
        "/v1/tenants/create".to_string()
    }
}

/// Delete a tenant; the id travels in the path, the body is empty.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct TenantDeleteRequest {
    #[serde(skip)]
    id: String,
}

impl TenantDeleteRequest {
    /// # Errors
    ///
    /// [`RequestError::EmptyField`] for a blank id.
    pub fn new(id: &str) -> Result<Self, RequestError> {
        let id = require("tenant id", id)?;
        debug!(
            event = "Request",
            phase = "Build",
            kind = "tenant-delete",
            id = id.as_str()
        );
        Ok(TenantDeleteRequest { id })
    }

    pub fn id(&self) -> &str {
        &self.id
    }
}

impl Endpoint for TenantDeleteRequest {
    fn method(&self) -> Method {
        Method::Delete
    }

    fn path(&self) -> String {
        format!("/v1/tenants/{}", self.id)
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct TenantListRequest {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub page_size: Option<u32>,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub continuous_token: String,
}

impl Endpoint for TenantListRequest {
    fn method(&self) -> Method {
        Method::Post
    }

    fn path(&self) -> String {
        "/v1/tenants/list".to_string()
    }
}
