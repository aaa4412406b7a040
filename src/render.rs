use serde::Serialize;
use serde_json::ser::{PrettyFormatter, Serializer};

use crate::error::RequestError;

/// Render any response or request as tab-indented JSON for the terminal.
///
/// # Errors
///
/// [`RequestError::Serialization`] if `value` cannot be serialized.
pub fn pretty_json<T: Serialize + ?Sized>(value: &T) -> Result<String, RequestError> {
    let mut out = Vec::new();
    let mut serializer = Serializer::with_formatter(&mut out, PrettyFormatter::with_indent(b"\t"));
    value.serialize(&mut serializer)?;
    String::from_utf8(out).map_err(|e| RequestError::Serialization(e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Tuple;

    #[test]
    fn test_pretty_json_uses_tabs() {
        let tuple: Tuple = "document:1#owner@user:42".parse().unwrap();
        let rendered = pretty_json(&tuple).unwrap();
        assert_eq!(
            rendered,
            "{\n\t\"entity\": {\n\t\t\"type\": \"document\",\n\t\t\"id\": \"1\"\n\t},\n\t\"relation\": \"owner\",\n\t\"subject\": {\n\t\t\"type\": \"user\",\n\t\t\"id\": \"42\"\n\t}\n}"
        );
    }

    #[test]
    fn test_pretty_json_of_value() {
        let rendered = pretty_json(&serde_json::json!([])).unwrap();
        assert_eq!(rendered, "[]");
    }
}
