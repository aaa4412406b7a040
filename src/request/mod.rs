//! Request bodies for the remote authorization service's REST API.
//!
//! Each request is built from a [`ClientConfig`] and parsed tuple values, knows
//! its HTTP method and path, and serializes to the JSON body the service
//! expects. Sending it is the transport's job.

use serde::{Deserialize, Serialize};
use strum_macros::{Display, EnumString};
use tracing::debug;

use crate::config::ClientConfig;
use crate::error::RequestError;

mod data;
mod permission;
mod schema;
mod tenancy;

pub use data::{
    AttributeFilter, AttributeReadRequest, DataWriteRequest, EntityFilter, RelationshipReadRequest,
    SubjectFilter, TupleFilter, WriteFlags,
};
pub use permission::{
    CheckFlags, PermissionCheckRequest, PermissionExpandRequest, PermissionLookupEntityRequest,
    PermissionLookupSubjectRequest, PermissionSubjectPermissionRequest,
};
pub use schema::{SCHEMA_FILE_EXTENSION, SchemaReadRequest, SchemaWriteRequest};
pub use tenancy::{TenantCreateRequest, TenantDeleteRequest, TenantListRequest};

/// Smallest graph depth the service accepts for depth-limited operations.
pub const MIN_DEPTH: i32 = 3;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumString)]
#[strum(serialize_all = "UPPERCASE")]
pub enum Method {
    Get,
    Post,
    Delete,
}

/// A request body together with where it is sent.
pub trait Endpoint: Serialize {
    fn method(&self) -> Method;

    /// Path below the service URL, e.g. `/v1/tenants/t1/permissions/check`.
    fn path(&self) -> String;
}

/// Request metadata shared by the tenant-scoped operations. Unset fields are
/// omitted from the body so the service applies its defaults.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct RequestMetadata {
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub schema_version: String,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub snap_token: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub depth: Option<i32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub only_permission: Option<bool>,
}

impl RequestMetadata {
    pub(crate) fn versioned(config: &ClientConfig) -> Self {
        RequestMetadata {
            schema_version: config.schema_version().to_string(),
            ..Default::default()
        }
    }

    /// Versioned metadata with the configured depth.
    ///
    /// # Errors
    ///
    /// [`RequestError::InvalidDepth`] below [`MIN_DEPTH`].
    pub(crate) fn with_depth(config: &ClientConfig) -> Result<Self, RequestError> {
        if config.depth() < MIN_DEPTH {
            return Err(RequestError::InvalidDepth(config.depth()));
        }
        Ok(RequestMetadata {
            depth: Some(config.depth()),
            ..Self::versioned(config)
        })
    }
}

/// A fully addressed request, ready for a transport.
#[derive(Debug, Clone, PartialEq)]
pub struct PreparedRequest {
    pub method: Method,
    pub url: String,
    pub body: serde_json::Value,
}

/// Address `endpoint` against the configured service URL and serialize it.
///
/// # Errors
///
/// [`RequestError::Serialization`] if the body cannot be encoded.
pub fn prepare<E: Endpoint>(
    config: &ClientConfig,
    endpoint: &E,
) -> Result<PreparedRequest, RequestError> {
    let url = format!(
        "{}{}",
        config.endpoint().trim_end_matches('/'),
        endpoint.path()
    );
    let body = serde_json::to_value(endpoint)?;

    debug!(
        event = "Request",
        phase = "Prepared",
        method = endpoint.method().to_string(),
        url = url.as_str()
    );

    Ok(PreparedRequest {
        method: endpoint.method(),
        url,
        body,
    })
}

/// The configured tenant; every tenant-scoped request needs one.
///
/// # Errors
///
/// [`RequestError::EmptyField`] for a blank tenant.
pub(crate) fn tenant_of(config: &ClientConfig) -> Result<String, RequestError> {
    require("tenant", config.tenant())
}

pub(crate) fn tenant_path(tenant: &str, suffix: &str) -> String {
    format!("/v1/tenants/{tenant}/{suffix}")
}

pub(crate) fn require(field: &str, value: &str) -> Result<String, RequestError> {
    let value = value.trim();
    if value.is_empty() {
        return Err(RequestError::EmptyField(field.to_string()));
    }
    Ok(value.to_string())
}
