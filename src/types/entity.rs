//! Entities: a resource or principal of a given type, e.g. `document:1`.

use std::fmt::{Display, Formatter, Result as FmtResult};
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::error::TupleError;
use crate::grammar::{ENTITY_PATTERN, ENTITY_SEPARATOR};

/// A concrete entity, rendered as `<type>:<id>`.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema, PartialEq, Eq, Hash)]
pub struct Entity {
    #[serde(rename = "type")]
    entity_type: String,
    id: String,
}

impl Entity {
    /// Create an entity from its parts. No grammar check is applied; use
    /// `str::parse` for user input.
    pub fn new(entity_type: impl Into<String>, id: impl Into<String>) -> Self {
        Entity {
            entity_type: entity_type.into(),
            id: id.into(),
        }
    }

    pub fn entity_type(&self) -> &str {
        &self.entity_type
    }

    pub fn id(&self) -> &str {
        &self.id
    }
}

impl Display for Entity {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        write!(f, "{}{ENTITY_SEPARATOR}{}", self.entity_type, self.id)
    }
}

impl FromStr for Entity {
    type Err = TupleError;

    /// Accepts `<type>:<id>`; surrounding whitespace is ignored.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let caps = ENTITY_PATTERN
            .captures(s.trim())
            .ok_or_else(|| TupleError::InvalidEntity(s.to_string()))?;

        match (caps.get(1), caps.get(2)) {
            (Some(entity_type), Some(id)) => Ok(Entity::new(entity_type.as_str(), id.as_str())),
            _ => Err(TupleError::InvalidEntity(s.to_string())),
        }
    }
}
