//! Relation normalization, equality predicates and subject validation.
//!
//! Relations are compared two ways. Subjects use *effective* identity, where
//! `...` means "no relation". Entity-and-relation pairs use *structural*
//! identity, where `...` is a literal token. Keep the two predicates apart.

use strum_macros::{Display, EnumString};

use crate::error::TupleError;
use crate::grammar::{ELLIPSIS, RELATION_SEPARATOR, SEPARATOR};
use crate::types::{Entity, EntityAndRelation, RelationReference, Subject, Tuple};

/// Map the ellipsis relation to the empty relation; everything else is returned unchanged.
pub fn normalize_relation(relation: &str) -> &str {
    if relation == ELLIPSIS { "" } else { relation }
}

/// Effective subject identity: type and id match exactly, relations match
/// after normalization.
pub fn subjects_equal(a: &Subject, b: &Subject) -> bool {
    a.subject_type() == b.subject_type()
        && a.id() == b.id()
        && normalize_relation(a.relation()) == normalize_relation(b.relation())
}

/// Whether a query on `entity#permission` names the same thing as `subject`.
pub fn query_and_subject_equal(entity: &Entity, permission: &str, subject: &Subject) -> bool {
    entity.entity_type() == subject.subject_type()
        && entity.id() == subject.id()
        && normalize_relation(permission) == normalize_relation(subject.relation())
}

/// Structural identity: the relation is compared literally, so `...` and the
/// empty relation differ.
pub fn entity_and_relation_equal(a: &EntityAndRelation, b: &EntityAndRelation) -> bool {
    a.entity().entity_type() == b.entity().entity_type()
        && a.entity().id() == b.entity().id()
        && a.relation() == b.relation()
}

pub fn relation_references_equal(a: &RelationReference, b: &RelationReference) -> bool {
    a.reference_type() == b.reference_type() && a.relation() == b.relation()
}

/// Whether a tuple points back at itself (`document:1#owner@document:1#owner`).
pub fn is_entity_and_subject_equal(tuple: &Tuple) -> bool {
    tuple.entity().entity_type() == tuple.subject().subject_type()
        && tuple.entity().id() == tuple.subject().id()
        && tuple.relation() == tuple.subject().relation()
}

/// A concrete principal, as opposed to a relation on a group or role.
pub fn is_direct_subject(subject: &Subject) -> bool {
    subject.relation().is_empty()
}

/// How a subject is expected to be shaped.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumString)]
#[strum(serialize_all = "snake_case")]
pub enum SubjectKind {
    /// A concrete principal; must not carry a relation.
    Direct,
    /// A relation on another entity; must carry one.
    Indirect,
}

impl SubjectKind {
    /// Classify a subject by its own relation.
    pub fn of(subject: &Subject) -> Self {
        if is_direct_subject(subject) {
            SubjectKind::Direct
        } else {
            SubjectKind::Indirect
        }
    }
}

/// Check a subject against an externally supplied classification, e.g. one
/// taken from a schema that declares which types are principals.
pub fn is_subject_valid_as(subject: &Subject, kind: SubjectKind) -> bool {
    if subject.subject_type().is_empty() || subject.id().is_empty() {
        return false;
    }

    match kind {
        SubjectKind::Direct => subject.relation().is_empty(),
        SubjectKind::Indirect => !subject.relation().is_empty(),
    }
}

/// Type and id must be present; the relation must agree with the subject's
/// own classification.
pub fn is_subject_valid(subject: &Subject) -> bool {
    is_subject_valid_as(subject, SubjectKind::of(subject))
}

/// The allow-list key of a subject: `type`, or `type#relation` when it has a
/// relation other than `...`.
fn subject_type_key(subject: &Subject) -> String {
    match normalize_relation(subject.relation()) {
        "" => subject.subject_type().to_string(),
        relation => format!("{}{RELATION_SEPARATOR}{relation}", subject.subject_type()),
    }
}

/// Require the subject's `type[#relation]` key to appear in `allowed`.
///
/// An empty allow-list accepts nothing: an entity that declares no subject
/// types is closed to every subject.
///
/// # Errors
///
/// [`TupleError::SubjectTypeNotFound`] carrying the subject's key.
pub fn validate_subject_type<S: AsRef<str>>(
    subject: &Subject,
    allowed: &[S],
) -> Result<(), TupleError> {
    let key = subject_type_key(subject);

    if allowed.iter().any(|candidate| candidate.as_ref() == key) {
        Ok(())
    } else {
        Err(TupleError::SubjectTypeNotFound(key))
    }
}

/// Render relation references into allow-list keys for [`validate_subject_type`].
pub fn allowed_references(references: &[RelationReference]) -> Vec<String> {
    references.iter().map(reference_to_string).collect()
}

/// `type#relation`, or `type` when the relation is empty.
pub fn reference_to_string(reference: &RelationReference) -> String {
    reference.to_string()
}

/// Split a relation on `.`; the result always has at least two elements.
///
/// `owner` gives `["owner", ""]`, `owner.edit` gives `["owner", "edit"]`.
pub fn split_relation(relation: &str) -> Vec<&str> {
    let mut parts: Vec<&str> = relation.split(SEPARATOR).collect();
    if parts.len() == 1 {
        parts.push("");
    }
    parts
}

/// A leaf relation, not composed through a nested reference.
pub fn is_relation_computed(relation: &str) -> bool {
    !relation.contains(SEPARATOR)
}
