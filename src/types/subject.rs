//! Subjects: the actor side of a relation, either a concrete principal
//! (`user:42`) or a relation on another entity (`group:eng#member`).

use std::fmt::{Display, Formatter, Result as FmtResult};
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::canonical;
use crate::error::TupleError;
use crate::grammar::{ENTITY_SEPARATOR, RELATION_SEPARATOR, SUBJECT_PATTERN};

use super::entity::Entity;

/// A subject. An empty `relation` makes it a direct subject.
///
/// The derived `PartialEq` compares the relation literally; use
/// [`canonical::subjects_equal`] when `...` must match the empty relation.
///
/// Rendering and parsing round-trip only for relations made of word
/// characters. Subjects taken from a [`Tuple`](super::Tuple) may carry `...`
/// or a computed relation, which render fine but do not parse back as a
/// `Subject`.
#[derive(Debug, Clone, Default, Serialize, Deserialize, ToSchema, PartialEq, Eq, Hash)]
pub struct Subject {
    #[serde(rename = "type")]
    subject_type: String,
    id: String,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    relation: String,
}

impl Subject {
    pub fn new(
        subject_type: impl Into<String>,
        id: impl Into<String>,
        relation: impl Into<String>,
    ) -> Self {
        Subject {
            subject_type: subject_type.into(),
            id: id.into(),
            relation: relation.into(),
        }
    }

    /// A concrete principal such as `user:42`.
    pub fn direct(subject_type: impl Into<String>, id: impl Into<String>) -> Self {
        Subject::new(subject_type, id, String::new())
    }

    /// A set of subjects reached through a relation, such as `group:eng#member`.
    pub fn userset(
        subject_type: impl Into<String>,
        id: impl Into<String>,
        relation: impl Into<String>,
    ) -> Self {
        Subject::new(subject_type, id, relation)
    }

    pub fn subject_type(&self) -> &str {
        &self.subject_type
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn relation(&self) -> &str {
        &self.relation
    }

    pub fn is_direct(&self) -> bool {
        canonical::is_direct_subject(self)
    }

    pub fn is_valid(&self) -> bool {
        canonical::is_subject_valid(self)
    }

    /// The subject's type and id as an entity, dropping the relation.
    pub fn entity(&self) -> Entity {
        Entity::new(self.subject_type.as_str(), self.id.as_str())
    }
}

impl Display for Subject {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        write!(f, "{}{ENTITY_SEPARATOR}{}", self.subject_type, self.id)?;
        if !self.is_direct() {
            write!(f, "{RELATION_SEPARATOR}{}", self.relation)?;
        }
        Ok(())
    }
}

impl FromStr for Subject {
    type Err = TupleError;

    /// Accepts `<type>:<id>` or `<type>:<id>#<relation>`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let caps = SUBJECT_PATTERN
            .captures(s.trim())
            .ok_or_else(|| TupleError::InvalidSubject(s.to_string()))?;

        let (Some(subject_type), Some(id)) = (caps.get(1), caps.get(2)) else {
            return Err(TupleError::InvalidSubject(s.to_string()));
        };
        let relation = caps.get(3).map(|m| m.as_str()).unwrap_or_default();

        Ok(Subject::new(subject_type.as_str(), id.as_str(), relation))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use insta::assert_json_snapshot;
    use yare::parameterized;

    #[parameterized(
        direct = { "user:42", "user", "42", "" },
        indirect = { "group:eng#member", "group", "eng", "member" },
        trimmed = { " group:eng#member \n", "group", "eng", "member" },
        digits_everywhere = { "t1:2#r3", "t1", "2", "r3" },
    )]
    fn test_subject_from_str(input: &str, subject_type: &str, id: &str, relation: &str) {
        let subject = Subject::from_str(input).unwrap();
        assert_eq!(subject, Subject::new(subject_type, id, relation));
    }

    #[parameterized(
        no_colon = { "user42" },
        empty_relation = { "group:eng#" },
        two_relations = { "group:eng#member#admin" },
        ellipsis = { "group:eng#..." },
        inner_space = { "group:eng #member" },
        extra_colon = { "user:4:2" },
        empty = { "   " },
    )]
    fn test_subject_from_str_rejects(input: &str) {
        assert_eq!(
            Subject::from_str(input),
            Err(TupleError::InvalidSubject(input.to_string()))
        );
    }

    #[parameterized(
        direct = { "user:42" },
        indirect = { "group:eng#member" },
    )]
    fn test_subject_round_trip(input: &str) {
        let subject: Subject = input.parse().unwrap();
        assert_eq!(subject.to_string(), input);
    }

    #[parameterized(
        ellipsis = { "document:1#viewer@group:eng#...", "group:eng#..." },
        computed = { "document:1#viewer@folder:root#parent.owner", "folder:root#parent.owner" },
    )]
    fn test_tuple_subject_renders_without_parsing_back(tuple: &str, rendered: &str) {
        let tuple: crate::types::Tuple = tuple.parse().unwrap();
        assert_eq!(tuple.subject().to_string(), rendered);
        assert_eq!(
            rendered.parse::<Subject>(),
            Err(TupleError::InvalidSubject(rendered.to_string()))
        );
    }

    #[test]
    fn test_subject_constructors() {
        assert!(Subject::direct("user", "1").is_direct());
        assert!(!Subject::userset("group", "eng", "member").is_direct());
        assert_eq!(
            Subject::userset("group", "eng", "member").entity(),
            Entity::new("group", "eng")
        );
    }

    #[test]
    fn test_subject_serialization_skips_empty_relation() {
        assert_json_snapshot!(Subject::direct("user", "42"), @r#"
        {
          "type": "user",
          "id": "42"
        }
        "#);
        assert_json_snapshot!(Subject::userset("group", "eng", "member"), @r#"
        {
          "type": "group",
          "id": "eng",
          "relation": "member"
        }
        "#);
    }

    #[test]
    fn test_subject_deserializes_without_relation() {
        let subject: Subject = serde_json::from_str(r#"{"type":"user","id":"1"}"#).unwrap();
        assert_eq!(subject, Subject::direct("user", "1"));
    }
}
