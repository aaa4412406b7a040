//! Compiled patterns and separators of the tuple string grammar.
//!
//! Word characters are ASCII only (`[A-Za-z0-9_]`).

use once_cell::sync::Lazy;
use regex::Regex;

/// Relation token equivalent to "no relation" when comparing subjects.
pub const ELLIPSIS: &str = "...";

/// Separates a base relation from a nested permission, e.g. `owner.edit`.
pub const SEPARATOR: &str = ".";

pub(crate) const ENTITY_SEPARATOR: char = ':';
pub(crate) const RELATION_SEPARATOR: char = '#';
pub(crate) const SUBJECT_SEPARATOR: char = '@';

/// `<type>:<id>`
pub(crate) static ENTITY_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^([A-Za-z0-9_]+):([A-Za-z0-9_]+)$").expect("entity pattern"));

const SUBJECT_REGEX: &str = r"^([A-Za-z0-9_]+):([A-Za-z0-9_]+)(?:#([A-Za-z0-9_]+))?$";

/// `<type>:<id>` with an optional `#<relation>`
pub(crate) static SUBJECT_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(SUBJECT_REGEX).expect("subject pattern"));

#[cfg(test)]
mod tests {
    use super::*;
    use yare::parameterized;

    #[parameterized(
        simple = { "document:1", true },
        underscores = { "team_space:eng_42", true },
        missing_colon = { "document1", false },
        two_colons = { "document:1:extra", false },
        empty_type = { ":1", false },
        empty_id = { "document:", false },
        dash_in_id = { "document:a-b", false },
        non_ascii = { "dokümant:1", false },
    )]
    fn test_entity_pattern(input: &str, expected: bool) {
        assert_eq!(ENTITY_PATTERN.is_match(input), expected);
    }

    #[parameterized(
        direct = { "user:42", true },
        indirect = { "group:eng#member", true },
        empty_relation = { "group:eng#", false },
        ellipsis = { "group:eng#...", false },
        two_relations = { "group:eng#member#admin", false },
    )]
    fn test_subject_pattern(input: &str, expected: bool) {
        assert_eq!(SUBJECT_PATTERN.is_match(input), expected);
    }
}
