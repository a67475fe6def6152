use chrono::{DateTime, NaiveDate, NaiveDateTime};
use serde_json::Value;

/// Render a backend value as display text.
///
/// `null`, `false` and blank strings have nothing to show and yield `None`.
/// Arrays and objects are rendered as compact JSON.
pub fn display_value(value: &Value) -> Option<String> {
    match value {
        Value::Null | Value::Bool(false) => None,
        Value::Bool(true) => Some("true".to_string()),
        Value::Number(n) => Some(n.to_string()),
        Value::String(s) if s.trim().is_empty() => None,
        Value::String(s) => Some(s.clone()),
        Value::Array(_) | Value::Object(_) => Some(value.to_string()),
    }
}

/// Render an ISO date or timestamp as `YYYY-MM-DD`, leaving anything
/// unparseable untouched.
pub fn format_date(raw: &str) -> String {
    if let Ok(ts) = DateTime::parse_from_rfc3339(raw) {
        return ts.date_naive().format("%Y-%m-%d").to_string();
    }
    if let Ok(ts) = NaiveDateTime::parse_from_str(raw, "%Y-%m-%dT%H:%M:%S%.f") {
        return ts.date().format("%Y-%m-%d").to_string();
    }
    match NaiveDate::parse_from_str(raw, "%Y-%m-%d") {
        Ok(date) => date.format("%Y-%m-%d").to_string(),
        Err(_) => raw.to_string(),
    }
}

/// Render an ISO timestamp as `YYYY-MM-DD HH:MM` (UTC offset dropped).
pub fn format_timestamp(raw: &str) -> String {
    if let Ok(ts) = DateTime::parse_from_rfc3339(raw) {
        return ts.naive_utc().format("%Y-%m-%d %H:%M").to_string();
    }
    match NaiveDateTime::parse_from_str(raw, "%Y-%m-%dT%H:%M:%S%.f") {
        Ok(ts) => ts.format("%Y-%m-%d %H:%M").to_string(),
        Err(_) => format_date(raw),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_falsy_values_are_not_displayable() {
        assert_eq!(display_value(&Value::Null), None);
        assert_eq!(display_value(&json!(false)), None);
        assert_eq!(display_value(&json!("   ")), None);
    }

    #[test]
    fn test_scalars_and_objects() {
        assert_eq!(display_value(&json!(42)), Some("42".to_string()));
        assert_eq!(display_value(&json!(0)), Some("0".to_string()));
        assert_eq!(display_value(&json!("O+")), Some("O+".to_string()));
        assert_eq!(
            display_value(&json!({"name": "Dr. Who"})),
            Some(r#"{"name":"Dr. Who"}"#.to_string())
        );
    }

    #[test]
    fn test_format_date() {
        assert_eq!(format_date("2024-03-05T10:15:00.000Z"), "2024-03-05");
        assert_eq!(format_date("2024-03-05"), "2024-03-05");
        assert_eq!(format_date("next tuesday"), "next tuesday");
    }

    #[test]
    fn test_format_timestamp() {
        assert_eq!(format_timestamp("2024-03-05T10:15:00Z"), "2024-03-05 10:15");
        assert_eq!(format_timestamp("2024-03-05"), "2024-03-05");
    }
}
