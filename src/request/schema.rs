//! Schema requests.

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::config::ClientConfig;
use crate::error::RequestError;

use super::{Endpoint, Method, RequestMetadata, tenant_of, tenant_path};

/// Extension of schema files accepted by [`SchemaWriteRequest::from_file`].
pub const SCHEMA_FILE_EXTENSION: &str = "perm";

/// Write a new schema version.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct SchemaWriteRequest {
    #[serde(skip)]
    tenant_id: String,
    pub schema: String,
}

impl SchemaWriteRequest {
    /// # Errors
    ///
    /// [`RequestError::EmptyField`] for a blank tenant or schema.
    pub fn new(config: &ClientConfig, schema: impl Into<String>) -> Result<Self, RequestError> {
        let tenant_id = tenant_of(config)?;
        let schema = schema.into();
        if schema.trim().is_empty() {
            return Err(RequestError::EmptyField("schema".to_string()));
        }
        debug!(
            event = "Request",
            phase = "Build",
            kind = "schema-write",
            bytes = schema.len()
        );
        Ok(SchemaWriteRequest { tenant_id, schema })
    }

    /// Read the schema from a `.perm` file.
    ///
    /// # Errors
    ///
    /// [`RequestError::InvalidSchemaFile`] for any other extension,
    /// [`RequestError::Io`] if the file cannot be read.
    pub fn from_file(config: &ClientConfig, path: &Path) -> Result<Self, RequestError> {
        if path.extension().and_then(|ext| ext.to_str()) != Some(SCHEMA_FILE_EXTENSION) {
            return Err(RequestError::InvalidSchemaFile(path.display().to_string()));
        }
        let schema = fs::read_to_string(path)?;
        Self::new(config, schema)
    }
}

impl Endpoint for SchemaWriteRequest {
    fn method(&self) -> Method {
        Method::Post
    }

    fn path(&self) -> String {
        tenant_path(&self.tenant_id, "schemas/write")
    }
}

/// Read the configured (or latest) schema version.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct SchemaReadRequest {
    #[serde(skip)]
    tenant_id: String,
    pub metadata: RequestMetadata,
}

impl SchemaReadRequest {
    /// # Errors
    ///
    /// [`RequestError::EmptyField`] for a blank tenant.
    pub fn new(config: &ClientConfig) -> Result<Self, RequestError> {
        Ok(SchemaReadRequest {
            tenant_id: tenant_of(config)?,
            metadata: RequestMetadata::versioned(config),
        })
    }
}

impl Endpoint for SchemaReadRequest {
    fn method(&self) -> Method {
        Method::Post
    }

    fn path(&self) -> String {
        tenant_path(&self.tenant_id, "schemas/read")
    }
}
