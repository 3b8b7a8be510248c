//! JSON value helpers for optional display fields.
//!
//! `expected_value` and `actual_value` arrive as arbitrary JSON. Display
//! gating follows JavaScript truthiness to match the backend contract:
//! `null`, `false`, `0`, and `""` all suppress their row.

use serde_json::Value;

/// JavaScript-style truthiness for a JSON value.
pub fn is_truthy(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_f64().map(|f| f != 0.0).unwrap_or(true),
        Value::String(s) => !s.is_empty(),
        Value::Array(_) | Value::Object(_) => true,
    }
}

/// Render a JSON value for display: strings unquoted, everything else as
/// compact JSON text.
pub fn value_text(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_truthiness() {
        assert!(!is_truthy(&Value::Null));
        assert!(!is_truthy(&json!(false)));
        assert!(!is_truthy(&json!(0)));
        assert!(!is_truthy(&json!("")));
        assert!(is_truthy(&json!("t2.micro")));
        assert!(is_truthy(&json!(3)));
        assert!(is_truthy(&json!([])));
        assert!(is_truthy(&json!({})));
    }

    #[test]
    fn test_value_text() {
        assert_eq!(value_text(&json!("t2.micro")), "t2.micro");
        assert_eq!(value_text(&json!(3)), "3");
        assert_eq!(value_text(&json!(true)), "true");
        assert_eq!(value_text(&json!({"a": 1})), r#"{"a":1}"#);
    }
}
