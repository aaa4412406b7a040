//! Response models of the remote service that need more than pretty-printing.

use std::fmt::{Display, Formatter, Result as FmtResult};

use serde::{Deserialize, Serialize};
use strum_macros::{Display as StrumDisplay, EnumString};
use tracing::warn;

use crate::error::RequestError;

/// Outcome of a permission check.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[derive(StrumDisplay, EnumString)]
pub enum CheckResult {
    #[default]
    #[serde(rename = "CHECK_RESULT_UNSPECIFIED")]
    #[strum(serialize = "UNKNOWN")]
    Unspecified,
    #[serde(rename = "CHECK_RESULT_ALLOWED")]
    #[strum(serialize = "ALLOWED")]
    Allowed,
    #[serde(rename = "CHECK_RESULT_DENIED")]
    #[strum(serialize = "DENIED")]
    Denied,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CheckResponseMetadata {
    #[serde(default)]
    pub check_count: i32,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PermissionCheckResponse {
    #[serde(default)]
    pub can: CheckResult,
    #[serde(default)]
    pub metadata: CheckResponseMetadata,
}

impl PermissionCheckResponse {
    pub fn is_allowed(&self) -> bool {
        self.can == CheckResult::Allowed
    }
}

impl Display for PermissionCheckResponse {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        write!(f, "{} (check count: {})", self.can, self.metadata.check_count)
    }
}

/// Error body returned by the service for non-200 responses.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorResponse {
    #[serde(default)]
    pub status_code: i32,
    #[serde(default)]
    pub code: i32,
    #[serde(default)]
    pub message: String,
    #[serde(default, alias = "detail")]
    pub details: Vec<serde_json::Value>,
}

/// Turn a failed response into an error. A 500 carries no structured body,
/// so its raw text is surfaced; any other status must carry an
/// [`ErrorResponse`].
pub fn read_error_response(status: u16, body: &[u8]) -> RequestError {
    warn!(event = "Response", phase = "Error", status = status);

    if status == 500 {
        return RequestError::Server {
            status,
            message: String::from_utf8_lossy(body).into_owned(),
        };
    }

    match serde_json::from_slice::<ErrorResponse>(body) {
        Ok(response) => RequestError::Server {
            status,
            message: response.message,
        },
        Err(err) => err.into(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use yare::parameterized;

    #[parameterized(
        allowed = { r#"{"can":"CHECK_RESULT_ALLOWED","metadata":{"check_count":3}}"#, CheckResult::Allowed, 3 },
        denied = { r#"{"can":"CHECK_RESULT_DENIED","metadata":{"check_count":0}}"#, CheckResult::Denied, 0 },
        missing_fields = { r#"{}"#, CheckResult::Unspecified, 0 },
    )]
    fn test_check_response_from_json(body: &str, expected: CheckResult, check_count: i32) {
        let response: PermissionCheckResponse = serde_json::from_str(body).unwrap();
        assert_eq!(response.can, expected);
        assert_eq!(response.metadata.check_count, check_count);
    }

    #[parameterized(
        allowed = { CheckResult::Allowed, "ALLOWED" },
        denied = { CheckResult::Denied, "DENIED" },
        unspecified = { CheckResult::Unspecified, "UNKNOWN" },
    )]
    fn test_check_result_display(result: CheckResult, expected: &str) {
        assert_eq!(result.to_string(), expected);
    }

    #[test]
    fn test_check_response_display() {
        let response = PermissionCheckResponse {
            can: CheckResult::Allowed,
            metadata: CheckResponseMetadata { check_count: 2 },
        };
        assert!(response.is_allowed());
        assert_eq!(response.to_string(), "ALLOWED (check count: 2)");
    }

    #[test]
    fn test_error_response_uses_message() {
        let body = br#"{"code":5,"message":"ERROR_CODE_NOT_FOUND","details":[]}"#;
        assert_eq!(
            read_error_response(404, body),
            RequestError::Server {
                status: 404,
                message: "ERROR_CODE_NOT_FOUND".to_string()
            }
        );
    }

    #[test]
    fn test_error_response_body_fields() {
        let body = r#"{"status_code":404,"code":5,"message":"ERROR_CODE_NOT_FOUND","detail":[]}"#;
        let response: ErrorResponse = serde_json::from_str(body).unwrap();
        assert_eq!(response.status_code, 404);
        assert_eq!(response.code, 5);
        assert!(response.details.is_empty());
    }

    #[test]
    fn test_error_response_500_uses_raw_body() {
        assert_eq!(
            read_error_response(500, b"internal failure"),
            RequestError::Server {
                status: 500,
                message: "internal failure".to_string()
            }
        );
    }

    #[test]
    fn test_error_response_malformed_body() {
        assert!(matches!(
            read_error_response(400, b"not json"),
            RequestError::Serialization(_)
        ));
    }
}
