//! Permission evaluation requests: check, expand, lookups and subject permissions.

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::config::ClientConfig;
use crate::error::RequestError;
use crate::traits::{Prompter, require_or_prompt, resolve_or_prompt};
use crate::types::{Entity, RelationReference, Subject};

use super::{Endpoint, Method, RequestMetadata, require, tenant_of, tenant_path};

/// Raw flag values of the `permission check` command; `None` or blank values
/// are prompted for.
#[derive(Debug, Clone, Copy, Default)]
pub struct CheckFlags<'a> {
    pub entity: Option<&'a str>,
    pub permission: Option<&'a str>,
    pub subject: Option<&'a str>,
}

/// Does `subject` have `permission` on `entity`?
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct PermissionCheckRequest {
    #[serde(skip)]
    tenant_id: String,
    pub metadata: RequestMetadata,
    pub entity: Entity,
    pub permission: String,
    pub subject: Subject,
}

impl PermissionCheckRequest {
    /// # Errors
    ///
    /// [`RequestError::EmptyField`] for a blank tenant or permission,
    /// [`RequestError::InvalidDepth`] for a configured depth below 3.
    pub fn new(
        config: &ClientConfig,
        entity: Entity,
        permission: &str,
        subject: Subject,
    ) -> Result<Self, RequestError> {
        let request = PermissionCheckRequest {
            tenant_id: tenant_of(config)?,
            metadata: RequestMetadata::with_depth(config)?,
            permission: require("permission", permission)?,
            entity,
            subject,
        };

        debug!(
            event = "Request",
            phase = "Build",
            kind = "check",
            entity = request.entity.to_string(),
            permission = request.permission.as_str(),
            subject = request.subject.to_string()
        );

        Ok(request)
    }

    /// Fill missing flags from the prompter, parse them, and build the request.
    ///
    /// # Errors
    ///
    /// Prompt failures, grammar errors for the entity and subject, and the
    /// errors of [`PermissionCheckRequest::new`].
    pub fn resolve<P: Prompter + ?Sized>(
        config: &ClientConfig,
        flags: &CheckFlags<'_>,
        prompter: &P,
    ) -> Result<Self, RequestError> {
        let entity: Entity =
            resolve_or_prompt(flags.entity, prompter, "Enter entity string", "<type>:<id>")?
                .parse()?;
        let permission = require_or_prompt(
            flags.permission,
            prompter,
            "permission",
            "Enter permission to check",
            "",
        )?;
        let subject: Subject = resolve_or_prompt(
            flags.subject,
            prompter,
            "Enter subject string (relation is optional)",
            "<type>:<id>#<relation>",
        )?
        .parse()?;

        Self::new(config, entity, &permission, subject)
    }
}

impl Endpoint for PermissionCheckRequest {
    fn method(&self) -> Method {
        Method::Post
    }

    fn path(&self) -> String {
        tenant_path(&self.tenant_id, "permissions/check")
    }
}

/// Expand the subject tree behind `entity#permission`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct PermissionExpandRequest {
    #[serde(skip)]
    tenant_id: String,
    pub metadata: RequestMetadata,
    pub entity: Entity,
    pub permission: String,
}

impl PermissionExpandRequest {
    /// # Errors
    ///
    /// [`RequestError::EmptyField`] for a blank tenant or permission.
    pub fn new(
        config: &ClientConfig,
        entity: Entity,
        permission: &str,
    ) -> Result<Self, RequestError> {
        let request = PermissionExpandRequest {
            tenant_id: tenant_of(config)?,
            metadata: RequestMetadata::versioned(config),
            permission: require("permission", permission)?,
            entity,
        };
        debug!(
            event = "Request",
            phase = "Build",
            kind = "expand",
            entity = request.entity.to_string(),
            permission = request.permission.as_str()
        );
        Ok(request)
    }
}

impl Endpoint for PermissionExpandRequest {
    fn method(&self) -> Method {
        Method::Post
    }

    fn path(&self) -> String {
        tenant_path(&self.tenant_id, "permissions/expand")
    }
}

/// Which entities of `entity_type` does `subject` have `permission` on?
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct PermissionLookupEntityRequest {
    #[serde(skip)]
    tenant_id: String,
    pub metadata: RequestMetadata,
    pub entity_type: String,
    pub permission: String,
    pub subject: Subject,
}

impl PermissionLookupEntityRequest {
    /// # Errors
    ///
    /// [`RequestError::EmptyField`] for a blank tenant, entity type or permission,
    /// [`RequestError::InvalidDepth`] for a configured depth below 3.
    pub fn new(
        config: &ClientConfig,
        entity_type: &str,
        permission: &str,
        subject: Subject,
    ) -> Result<Self, RequestError> {
        let request = PermissionLookupEntityRequest {
            tenant_id: tenant_of(config)?,
            metadata: RequestMetadata::with_depth(config)?,
            entity_type: require("entity type", entity_type)?,
            permission: require("permission", permission)?,
            subject,
        };
        debug!(
            event = "Request",
            phase = "Build",
            kind = "lookup-entity",
            entity_type = request.entity_type.as_str(),
            permission = request.permission.as_str(),
            subject = request.subject.to_string()
        );
        Ok(request)
    }
}

impl Endpoint for PermissionLookupEntityRequest {
    fn method(&self) -> Method {
        Method::Post
    }

    fn path(&self) -> String {
        tenant_path(&self.tenant_id, "permissions/lookup-entity")
    }
}

/// Which subjects shaped like `subject_reference` have `permission` on `entity`?
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct PermissionLookupSubjectRequest {
    #[serde(skip)]
    tenant_id: String,
    pub metadata: RequestMetadata,
    pub entity: Entity,
    pub permission: String,
    pub subject_reference: RelationReference,
}

impl PermissionLookupSubjectRequest {
    /// # Errors
    ///
    /// [`RequestError::EmptyField`] for a blank tenant, permission or subject type,
    /// [`RequestError::InvalidDepth`] for a configured depth below 3.
    pub fn new(
        config: &ClientConfig,
        entity: Entity,
        permission: &str,
        subject_reference: RelationReference,
    ) -> Result<Self, RequestError> {
        require("subject type", subject_reference.reference_type())?;
        let request = PermissionLookupSubjectRequest {
            tenant_id: tenant_of(config)?,
            metadata: RequestMetadata::with_depth(config)?,
            permission: require("permission", permission)?,
            entity,
            subject_reference,
        };
        debug!(
            event = "Request",
            phase = "Build",
            kind = "lookup-subject",
            entity = request.entity.to_string(),
            permission = request.permission.as_str(),
            subject_reference = request.subject_reference.to_string()
        );
        Ok(request)
    }
}

impl Endpoint for PermissionLookupSubjectRequest {
    fn method(&self) -> Method {
        Method::Post
    }

    fn path(&self) -> String {
        tenant_path(&self.tenant_id, "permissions/lookup-subject")
    }
}

/// Which permissions does `subject` hold on `entity`?
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct PermissionSubjectPermissionRequest {
    #[serde(skip)]
    tenant_id: String,
    pub metadata: RequestMetadata,
    pub entity: Entity,
    pub subject: Subject,
}

impl PermissionSubjectPermissionRequest {
    /// `only_permission` restricts the answer to permissions, leaving out relations.
    ///
    /// # Errors
    ///
    /// [`RequestError::EmptyField`] for a blank tenant,
    /// [`RequestError::InvalidDepth`] for a configured depth below 3.
    pub fn new(
        config: &ClientConfig,
        entity: Entity,
        subject: Subject,
        only_permission: bool,
    ) -> Result<Self, RequestError> {
        let request = PermissionSubjectPermissionRequest {
            tenant_id: tenant_of(config)?,
            metadata: RequestMetadata {
                only_permission: Some(only_permission),
                ..RequestMetadata::with_depth(config)?
            },
            entity,
            subject,
        };
        debug!(
            event = "Request",
            phase = "Build",
            kind = "subject-permission",
            entity = request.entity.to_string(),
            subject = request.subject.to_string()
        );
        Ok(request)
    }
}

impl Endpoint for PermissionSubjectPermissionRequest {
    fn method(&self) -> Method {
        Method::Post
    }

    fn path(&self) -> String {
        tenant_path(&self.tenant_id, "permissions/subject-permission")
    }
}
