use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Failures of the tuple grammar and of subject-type validation.
///
/// Every variant carries the offending input so callers can report it
/// without re-deriving it.
#[derive(Debug, Clone, PartialEq, Eq, Error, Serialize, Deserialize)]
pub enum TupleError {
    #[error("invalid entity '{0}' (expected format: <type>:<id>)")]
    InvalidEntity(String),

    #[error("invalid subject '{0}' (expected format: <type>:<id> or <type>:<id>#<relation>)")]
    InvalidSubject(String),

    #[error("invalid entity and relation '{0}' (expected format: <type>:<id>[#<relation>])")]
    InvalidEntityAndRelation(String),

    #[error(
        "invalid tuple '{0}' (expected format: <type>:<id>#<relation>@<type>:<id>[#<relation>])"
    )]
    InvalidTuple(String),

    #[error("subject type '{0}' not found in allowed subject types")]
    SubjectTypeNotFound(String),
}

/// Failures while turning user input into a request for the remote service,
/// or while reading its error responses.
#[derive(Debug, Clone, PartialEq, Eq, Error, Serialize, Deserialize)]
pub enum RequestError {
    #[error(transparent)]
    Tuple(#[from] TupleError),

    #[error("{0} must not be empty")]
    EmptyField(String),

    #[error("depth must be >= 3, got {0}")]
    InvalidDepth(i32),

    #[error("only perm schema files accepted, got '{0}'")]
    InvalidSchemaFile(String),

    #[error("I/O error: {0}")]
    Io(String),

    #[error("prompt failed: {0}")]
    Prompt(String),

    #[error("server responded with status {status}: {message}")]
    Server { status: u16, message: String },

    #[error("serialization error: {0}")]
    Serialization(String),
}

impl From<serde_json::Error> for RequestError {
    fn from(err: serde_json::Error) -> Self {
        RequestError::Serialization(err.to_string())
    }
}

impl From<std::io::Error> for RequestError {
    fn from(err: std::io::Error) -> Self {
        RequestError::Io(err.to_string())
    }
}

/// Failures while reading or validating CLI profile configuration.
#[derive(Debug, Clone, PartialEq, Eq, Error, Serialize, Deserialize)]
pub enum ConfigError {
    #[error("profile '{0}' is not configured")]
    UnknownProfile(String),

    #[error("permify url is empty for profile {0}")]
    MissingEndpoint(String),

    #[error("tenant is empty for profile {0}")]
    MissingTenant(String),

    #[error("failed to parse configuration: {0}")]
    Parse(String),
}

impl From<serde_yaml::Error> for ConfigError {
    fn from(err: serde_yaml::Error) -> Self {
        ConfigError::Parse(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tuple_error_display_includes_input() {
        let err = TupleError::InvalidEntity("document1".to_string());
        assert_eq!(
            err.to_string(),
            "invalid entity 'document1' (expected format: <type>:<id>)"
        );
    }

    #[test]
    fn test_request_error_wraps_tuple_error_transparently() {
        let err: RequestError = TupleError::SubjectTypeNotFound("group#admin".to_string()).into();
        assert!(matches!(
            err,
            RequestError::Tuple(TupleError::SubjectTypeNotFound(ref key)) if key == "group#admin"
        ));
        assert_eq!(
            err.to_string(),
            "subject type 'group#admin' not found in allowed subject types"
        );
    }

    #[test]
    fn test_request_error_from_serde_json() {
        let parse_err = serde_json::from_str::<serde_json::Value>("{").unwrap_err();
        let err: RequestError = parse_err.into();
        assert!(matches!(err, RequestError::Serialization(_)));
    }

    #[test]
    fn test_config_error_display() {
        let err = ConfigError::MissingTenant("default".to_string());
        assert_eq!(err.to_string(), "tenant is empty for profile default");
    }

    #[test]
    fn test_tuple_error_serialization() {
        let err = TupleError::InvalidTuple("a:b".to_string());
        let serialized = serde_json::to_value(&err).unwrap();
        let deserialized: TupleError = serde_json::from_value(serialized).unwrap();
        assert_eq!(err, deserialized);
    }
}
