//! Subject type templates used by allow-lists and lookups, e.g. `group#member`.

use std::convert::Infallible;
use std::fmt::{Display, Formatter, Result as FmtResult};
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::grammar::RELATION_SEPARATOR;

/// A subject type with an optional relation and no concrete id.
#[derive(Debug, Clone, Default, Serialize, Deserialize, ToSchema, PartialEq, Eq, Hash)]
pub struct RelationReference {
    #[serde(rename = "type")]
    reference_type: String,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    relation: String,
}

impl RelationReference {
    pub fn new(reference_type: impl Into<String>, relation: impl Into<String>) -> Self {
        RelationReference {
            reference_type: reference_type.into(),
            relation: relation.into(),
        }
    }

    pub fn reference_type(&self) -> &str {
        &self.reference_type
    }

    pub fn relation(&self) -> &str {
        &self.relation
    }
}

impl Display for RelationReference {
    /// `<type>#<relation>`, or `<type>` when the relation is empty.
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        write!(f, "{}", self.reference_type)?;
        if !self.relation.is_empty() {
            write!(f, "{RELATION_SEPARATOR}{}", self.relation)?;
        }
        Ok(())
    }
}

impl FromStr for RelationReference {
    type Err = Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        let (reference_type, relation) = trimmed
            .split_once(RELATION_SEPARATOR)
            .unwrap_or((trimmed, ""));
        Ok(RelationReference::new(reference_type, relation))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use yare::parameterized;

    #[parameterized(
        type_only = { "user", "user", "" },
        with_relation = { "group#member", "group", "member" },
        trailing_hash = { "group#", "group", "" },
        empty = { "", "", "" },
    )]
    fn test_relation_reference_from_str(input: &str, reference_type: &str, relation: &str) {
        let reference: RelationReference = input.parse().unwrap();
        assert_eq!(reference, RelationReference::new(reference_type, relation));
    }

    #[parameterized(
        type_only = { "user" },
        with_relation = { "group#member" },
    )]
    fn test_relation_reference_round_trip(input: &str) {
        let reference: RelationReference = input.parse().unwrap();
        assert_eq!(reference.to_string(), input);
    }

    #[test]
    fn test_relation_reference_serialization() {
        let reference = RelationReference::new("group", "member");
        let serialized = serde_json::to_value(&reference).unwrap();
        assert_eq!(serialized, serde_json::json!({"type": "group", "relation": "member"}));

        let bare: RelationReference = serde_json::from_str(r#"{"type":"user"}"#).unwrap();
        assert_eq!(bare, RelationReference::new("user", ""));
    }
}
