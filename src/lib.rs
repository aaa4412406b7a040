// src/lib.rs
pub use canonical::{
    SubjectKind, allowed_references, entity_and_relation_equal, is_direct_subject,
    is_entity_and_subject_equal, is_relation_computed, is_subject_valid, is_subject_valid_as,
    normalize_relation, query_and_subject_equal, reference_to_string, relation_references_equal,
    split_relation, subjects_equal, validate_subject_type,
};
pub use config::{ClientConfig, Profile, ProfileConfigs};
pub use error::{ConfigError, RequestError, TupleError};
pub use grammar::{ELLIPSIS, SEPARATOR};
pub use render::pretty_json;
pub use traits::{Prompter, require_or_prompt, resolve_or_prompt};
pub use types::{Entity, EntityAndRelation, RelationReference, Subject, Tuple};

pub mod canonical;
pub mod config;
mod error;
mod grammar;
mod render;
pub mod request;
pub mod response;
mod traits;
pub mod types;
