//! Value types of the tuple grammar.
//!
//! Canonical string forms:
//! - Entity: `document:1`
//! - Subject: `user:42` or `group:eng#member`
//! - Entity and relation: `document:1` or `document:1#owner`
//! - Relation reference: `user` or `group#member`
//! - Tuple: `document:1#owner@user:42` or `document:1#viewer@group:eng#member`
//!
//! Types and ids are ASCII word characters. Surrounding whitespace is trimmed
//! before parsing; whitespace inside a segment is rejected.

mod entity;
mod entity_and_relation;
mod relation_reference;
mod subject;
mod tuple;

pub use entity::Entity;
pub use entity_and_relation::EntityAndRelation;
pub use relation_reference::RelationReference;
pub use subject::Subject;
pub use tuple::Tuple;
