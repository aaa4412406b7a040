//! Relationship tuples: `<entity>#<relation>@<subject>`.

use std::fmt::{Display, Formatter, Result as FmtResult};
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::error::TupleError;
use crate::grammar::{RELATION_SEPARATOR, SUBJECT_SEPARATOR};

use super::entity::Entity;
use super::entity_and_relation::EntityAndRelation;
use super::subject::Subject;

/// "`entity` has `relation` with `subject`".
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema, PartialEq, Eq, Hash)]
pub struct Tuple {
    entity: Entity,
    relation: String,
    subject: Subject,
}

impl Tuple {
    pub fn new(entity: Entity, relation: impl Into<String>, subject: Subject) -> Self {
        Tuple {
            entity,
            relation: relation.into(),
            subject,
        }
    }

    pub fn entity(&self) -> &Entity {
        &self.entity
    }

    pub fn relation(&self) -> &str {
        &self.relation
    }

    pub fn subject(&self) -> &Subject {
        &self.subject
    }
}

impl Display for Tuple {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        write!(
            f,
            "{}{RELATION_SEPARATOR}{}{SUBJECT_SEPARATOR}{}",
            self.entity, self.relation, self.subject
        )
    }
}

impl FromStr for Tuple {
    type Err = TupleError;

    /// Accepts `<type>:<id>#<relation>@<type>:<id>[#<relation>]`.
    ///
    /// Both sides are parsed as [`EntityAndRelation`] and their errors are
    /// returned unchanged. The left relation must not be empty.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut sides = s.trim().split(SUBJECT_SEPARATOR);
        let (Some(left), Some(right), None) = (sides.next(), sides.next(), sides.next()) else {
            return Err(TupleError::InvalidTuple(s.to_string()));
        };

        let (entity, relation) = EntityAndRelation::from_str(left)?.into_parts();
        let (subject_entity, subject_relation) = EntityAndRelation::from_str(right)?.into_parts();

        if relation.is_empty() {
            return Err(TupleError::InvalidTuple(s.to_string()));
        }

        let subject = Subject::new(
            subject_entity.entity_type(),
            subject_entity.id(),
            subject_relation,
        );
        Ok(Tuple::new(entity, relation, subject))
    }
}
