//! Relationship and attribute data requests.

use itertools::Itertools;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::canonical;
use crate::config::ClientConfig;
use crate::error::{RequestError, TupleError};
use crate::traits::{Prompter, require_or_prompt, resolve_or_prompt};
use crate::types::{Entity, Subject, Tuple};

use super::{Endpoint, Method, RequestMetadata, require, tenant_of, tenant_path};

/// Raw flag values of the `data write` command.
#[derive(Debug, Clone, Copy, Default)]
pub struct WriteFlags<'a> {
    pub entity: Option<&'a str>,
    pub relation: Option<&'a str>,
    pub subject: Option<&'a str>,
}

/// Write relationship tuples.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct DataWriteRequest {
    #[serde(skip)]
    tenant_id: String,
    pub metadata: RequestMetadata,
    pub tuples: Vec<Tuple>,
}

impl DataWriteRequest {
    /// # Errors
    ///
    /// [`RequestError::EmptyField`] for a blank tenant, no tuples or a tuple
    /// without relation, [`TupleError::InvalidTuple`] for a relation with
    /// surrounding whitespace, [`TupleError::InvalidSubject`] for a subject
    /// without type or id.
    pub fn new(config: &ClientConfig, tuples: Vec<Tuple>) -> Result<Self, RequestError> {
        let tenant_id = tenant_of(config)?;
        if tuples.is_empty() {
            return Err(RequestError::EmptyField("tuples".to_string()));
        }
        for tuple in &tuples {
            let relation = require("relation", tuple.relation())?;
            if relation != tuple.relation() {
                return Err(TupleError::InvalidTuple(tuple.to_string()).into());
            }
            if !canonical::is_subject_valid(tuple.subject()) {
                return Err(TupleError::InvalidSubject(tuple.subject().to_string()).into());
            }
        }

        debug!(
            event = "Request",
            phase = "Build",
            kind = "data-write",
            tuples = tuples.iter().join(", ")
        );

        Ok(DataWriteRequest {
            tenant_id,
            metadata: RequestMetadata::versioned(config),
            tuples,
        })
    }

    /// Fill missing flags from the prompter and build a single-tuple write.
    ///
    /// # Errors
    ///
    /// Prompt failures, grammar errors, and the errors of [`DataWriteRequest::new`].
    pub fn resolve<P: Prompter + ?Sized>(
        config: &ClientConfig,
        flags: &WriteFlags<'_>,
        prompter: &P,
    ) -> Result<Self, RequestError> {
        let entity: Entity =
            resolve_or_prompt(flags.entity, prompter, "Enter entity string", "<type>:<id>")?
                .parse()?;
        let relation =
            require_or_prompt(flags.relation, prompter, "relation", "Enter relation", "")?;
        let subject: Subject = resolve_or_prompt(
            flags.subject,
            prompter,
            "Enter subject string (relation is optional)",
            "<type>:<id>#<relation>",
        )?
        .parse()?;

        Self::new(config, vec![Tuple::new(entity, relation, subject)])
    }
}

impl Endpoint for DataWriteRequest {
    fn method(&self) -> Method {
        Method::Post
    }

    fn path(&self) -> String {
        tenant_path(&self.tenant_id, "data/write")
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct EntityFilter {
    #[serde(rename = "type")]
    pub entity_type: String,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub ids: Vec<String>,
}

impl From<&Entity> for EntityFilter {
    fn from(entity: &Entity) -> Self {
        EntityFilter {
            entity_type: entity.entity_type().to_string(),
            ids: vec![entity.id().to_string()],
        }
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct SubjectFilter {
    #[serde(rename = "type")]
    pub subject_type: String,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub ids: Vec<String>,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub relation: String,
}

impl From<&Subject> for SubjectFilter {
    fn from(subject: &Subject) -> Self {
        SubjectFilter {
            subject_type: subject.subject_type().to_string(),
            ids: vec![subject.id().to_string()],
            relation: canonical::normalize_relation(subject.relation()).to_string(),
        }
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct TupleFilter {
    pub entity: EntityFilter,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub relation: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub subject: Option<SubjectFilter>,
}

/// Read relationships matching a filter.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct RelationshipReadRequest {
    #[serde(skip)]
    tenant_id: String,
    pub metadata: RequestMetadata,
    pub filter: TupleFilter,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub page_size: Option<u32>,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub continuous_token: String,
}

impl RelationshipReadRequest {
    /// Filter on `entity`, and optionally on `relation` and `subject`.
    ///
    /// # Errors
    ///
    /// [`RequestError::EmptyField`] for a blank tenant.
    pub fn new(
        config: &ClientConfig,
        entity: &Entity,
        relation: &str,
        subject: Option<&Subject>,
    ) -> Result<Self, RequestError> {
        let tenant_id = tenant_of(config)?;
        let filter = TupleFilter {
            entity: entity.into(),
            relation: relation.trim().to_string(),
            subject: subject.map(SubjectFilter::from),
        };
        debug!(
            event = "Request",
            phase = "Build",
            kind = "relationships-read",
            entity = entity.to_string(),
            relation = filter.relation.as_str()
        );
        Ok(RelationshipReadRequest {
            tenant_id,
            metadata: RequestMetadata::default(),
            filter,
            page_size: None,
            continuous_token: String::new(),
        })
    }

    /// Continue a paginated read.
    pub fn with_page(mut self, page_size: u32, continuous_token: impl Into<String>) -> Self {
        self.page_size = Some(page_size);
        self.continuous_token = continuous_token.into();
        self
    }
}

impl Endpoint for RelationshipReadRequest {
    fn method(&self) -> Method {
        Method::Post
    }

    fn path(&self) -> String {
        tenant_path(&self.tenant_id, "data/relationships/read")
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct AttributeFilter {
    pub entity: EntityFilter,
    pub attributes: Vec<String>,
}

/// Read named attributes of an entity.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct AttributeReadRequest {
    #[serde(skip)]
    tenant_id: String,
    pub metadata: RequestMetadata,
    pub filter: AttributeFilter,
}

impl AttributeReadRequest {
    /// # Errors
    ///
    /// [`RequestError::EmptyField`] for a blank tenant or when no non-blank
    /// attribute is named.
    pub fn new<I, S>(
        config: &ClientConfig,
        entity: &Entity,
        attributes: I,
    ) -> Result<Self, RequestError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let tenant_id = tenant_of(config)?;
        let attributes: Vec<String> = attributes
            .into_iter()
            .map(|a| a.as_ref().trim().to_string())
            .filter(|a| !a.is_empty())
            .collect();
        if attributes.is_empty() {
            return Err(RequestError::EmptyField("attribute".to_string()));
        }
        debug!(
            event = "Request",
            phase = "Build",
            kind = "attributes-read",
            entity = entity.to_string(),
            attributes = attributes.iter().join(", ")
        );
        Ok(AttributeReadRequest {
            tenant_id,
            metadata: RequestMetadata::default(),
            filter: AttributeFilter {
                entity: entity.into(),
                attributes,
            },
        })
    }
}

impl Endpoint for AttributeReadRequest {
    fn method(&self) -> Method {
        Method::Post
    }

    fn path(&self) -> String {
        tenant_path(&self.tenant_id, "data/attributes/read")
    }
}
