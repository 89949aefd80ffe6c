//! Conversions between [`JsonValue`] and `serde_json::Value`.
//!
//! `serde_json` is built with `arbitrary_precision`, so number text passes
//! through unchanged in both directions.

use serde_json::{Map, Number, Value};

use crate::value::{JsonNumber, JsonObject, JsonValue};

impl From<&Value> for JsonValue {
    fn from(value: &Value) -> Self {
        match value {
            Value::Null => JsonValue::Null,
            Value::Bool(b) => JsonValue::Bool(*b),
            Value::Number(n) => JsonValue::Number(JsonNumber::from_token(&n.to_string())),
            Value::String(s) => JsonValue::String(s.clone()),
            Value::Array(arr) => JsonValue::Array(arr.iter().map(JsonValue::from).collect()),
            Value::Object(obj) => JsonValue::Object(
                obj.iter()
                    .map(|(k, v)| (k.clone(), JsonValue::from(v)))
                    .collect::<JsonObject>(),
            ),
        }
    }
}

impl From<Value> for JsonValue {
    fn from(value: Value) -> Self {
        JsonValue::from(&value)
    }
}

impl From<&JsonValue> for Value {
    fn from(value: &JsonValue) -> Self {
        match value {
            JsonValue::Null => Value::Null,
            JsonValue::Bool(b) => Value::Bool(*b),
            // Only tokens serde_json refuses to hold fall back to null.
            JsonValue::Number(n) => serde_json::from_str::<Number>(n.as_str())
                .map(Value::Number)
                .unwrap_or(Value::Null),
            JsonValue::String(s) => Value::String(s.clone()),
            JsonValue::Array(arr) => Value::Array(arr.iter().map(Value::from).collect()),
            JsonValue::Object(obj) => Value::Object(
                obj.iter()
                    .map(|(k, v)| (k.clone(), Value::from(v)))
                    .collect::<Map<String, Value>>(),
            ),
        }
    }
}

impl From<JsonValue> for Value {
    fn from(value: JsonValue) -> Self {
        Value::from(&value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::decoder::from_slice;
    use serde_json::json;

    #[test]
    fn serde_value_converts_in_order() {
        let value = JsonValue::from(json!({"foo": "bar", "baz": 123, "list": [true, null]}));
        assert_eq!(value.to_string(), r#"{"foo":"bar","baz":123,"list":[true,null]}"#);
    }

    #[test]
    fn big_numbers_survive_both_directions() {
        let parsed = from_slice(br#"{"bomb":10000000000000000000000000000000000000}"#).unwrap();
        let serde = Value::from(&parsed);
        assert_eq!(
            serde.to_string(),
            r#"{"bomb":10000000000000000000000000000000000000}"#
        );
        assert_eq!(JsonValue::from(serde), parsed);
    }
}
