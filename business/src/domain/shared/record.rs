use serde_json::{Map, Value};

/// A raw catalog document as read from the remote store: a loosely-typed
/// field map. Raw shapes stop at the record mappers; nothing past them sees
/// this type.
pub type RawRecord = Map<String, Value>;

/// Reads a string field, treating `null` and non-string values as absent.
pub fn str_field(record: &RawRecord, key: &str) -> Option<String> {
    record.get(key).and_then(Value::as_str).map(str::to_string)
}

/// Reads a boolean field, treating `null` and non-boolean values as absent.
pub fn bool_field(record: &RawRecord, key: &str) -> Option<bool> {
    record.get(key).and_then(Value::as_bool)
}

/// Reads a numeric field as `f64`. Integer-typed values are widened.
pub fn f64_field(record: &RawRecord, key: &str) -> Option<f64> {
    record.get(key).and_then(Value::as_f64)
}

/// Reads a numeric field as `i64`. Backends are inconsistent about whether
/// counts arrive as integers or doubles, so doubles are truncated.
pub fn i64_field(record: &RawRecord, key: &str) -> Option<i64> {
    let value = record.get(key)?;
    value.as_i64().or_else(|| value.as_f64().map(|f| f as i64))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn record(value: Value) -> RawRecord {
        match value {
            Value::Object(map) => map,
            _ => panic!("test record must be an object"),
        }
    }

    #[test]
    fn should_read_present_fields() {
        let raw = record(json!({
            "name": "Suya Spot",
            "isOpen": false,
            "rating": 4.2,
            "reviews": 61,
        }));

        assert_eq!(str_field(&raw, "name"), Some("Suya Spot".to_string()));
        assert_eq!(bool_field(&raw, "isOpen"), Some(false));
        assert_eq!(f64_field(&raw, "rating"), Some(4.2));
        assert_eq!(i64_field(&raw, "reviews"), Some(61));
    }

    #[test]
    fn should_treat_missing_and_null_as_absent() {
        let raw = record(json!({ "name": null }));

        assert_eq!(str_field(&raw, "name"), None);
        assert_eq!(str_field(&raw, "category"), None);
        assert_eq!(bool_field(&raw, "isOpen"), None);
    }

    #[test]
    fn should_widen_integer_rating() {
        let raw = record(json!({ "rating": 5 }));
        assert_eq!(f64_field(&raw, "rating"), Some(5.0));
    }

    #[test]
    fn should_truncate_double_counts() {
        let raw = record(json!({ "reviews": 34.0 }));
        assert_eq!(i64_field(&raw, "reviews"), Some(34));
    }

    #[test]
    fn should_ignore_mistyped_fields() {
        let raw = record(json!({ "isOpen": "yes", "rating": "high" }));
        assert_eq!(bool_field(&raw, "isOpen"), None);
        assert_eq!(f64_field(&raw, "rating"), None);
    }
}
