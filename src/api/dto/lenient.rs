//! Field deserializers that accept any JSON value where text is expected.
//!
//! Strings pass through unchanged, `null` counts as absent and every other
//! value is stored in its JSON text form (`42`, `true`, `["a"]`).

use serde::{Deserialize, Deserializer};
use serde_json::Value;

/// Text form of a JSON value; `null` yields `None`.
pub fn text_of(value: Value) -> Option<String> {
    match value {
        Value::Null => None,
        Value::String(s) => Some(s),
        other => Some(other.to_string()),
    }
}

/// For `Option<String>` fields.
pub fn optional_text<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(text_of(Value::deserialize(deserializer)?))
}

/// For `String` fields; `null` becomes the empty string.
pub fn text<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(optional_text(deserializer)?.unwrap_or_default())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_text_of_scalars() {
        assert_eq!(text_of(json!("/home")), Some("/home".to_string()));
        assert_eq!(text_of(json!(42)), Some("42".to_string()));
        assert_eq!(text_of(json!(1.5)), Some("1.5".to_string()));
        assert_eq!(text_of(json!(false)), Some("false".to_string()));
        assert_eq!(text_of(json!(null)), None);
    }

    #[test]
    fn test_text_of_compound_values() {
        assert_eq!(text_of(json!(["a", 1])), Some(r#"["a",1]"#.to_string()));
        assert_eq!(text_of(json!({ "k": "v" })), Some(r#"{"k":"v"}"#.to_string()));
    }
}
