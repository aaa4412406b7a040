//! An entity paired with a relation name, e.g. `document:1#owner`.

use std::fmt::{Display, Formatter, Result as FmtResult};
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::error::TupleError;
use crate::grammar::RELATION_SEPARATOR;

use super::entity::Entity;
use super::subject::Subject;

/// An entity and a (possibly empty) relation.
///
/// `...` is kept as a literal relation here; equality is structural.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema, PartialEq, Eq, Hash)]
pub struct EntityAndRelation {
    entity: Entity,
    #[serde(default)]
    relation: String,
}

impl EntityAndRelation {
    pub fn new(entity: Entity, relation: impl Into<String>) -> Self {
        EntityAndRelation {
            entity,
            relation: relation.into(),
        }
    }

    pub fn entity(&self) -> &Entity {
        &self.entity
    }

    pub fn relation(&self) -> &str {
        &self.relation
    }

    pub fn into_parts(self) -> (Entity, String) {
        (self.entity, self.relation)
    }
}

impl From<Subject> for EntityAndRelation {
    fn from(subject: Subject) -> Self {
        EntityAndRelation::new(subject.entity(), subject.relation())
    }
}

impl Display for EntityAndRelation {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        write!(f, "{}", self.entity)?;
        if !self.relation.is_empty() {
            write!(f, "{RELATION_SEPARATOR}{}", self.relation)?;
        }
        Ok(())
    }
}

impl FromStr for EntityAndRelation {
    type Err = TupleError;

    /// Accepts `<type>:<id>` or `<type>:<id>#<relation>`, splitting on the
    /// first `#` only; everything after it is the relation.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        let (entity_part, relation) = trimmed
            .split_once(RELATION_SEPARATOR)
            .unwrap_or((trimmed, ""));

        let entity = Entity::from_str(entity_part)
            .map_err(|_| TupleError::InvalidEntityAndRelation(s.to_string()))?;

        Ok(EntityAndRelation::new(entity, relation))
    }
}
