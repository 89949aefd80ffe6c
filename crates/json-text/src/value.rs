//! `JsonValue`: the parsed JSON tree.

use std::fmt;

use indexmap::IndexMap;

use crate::decoder::scan_number;
use crate::encoder::JsonEncoder;
use crate::int64::parse_i64_number;

/// Object members in source order. Keys are unique; inserting an existing
/// key replaces its value in place.
pub type JsonObject = IndexMap<String, JsonValue>;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum JsonValue {
    Null,
    Bool(bool),
    Number(JsonNumber),
    String(String),
    Array(Vec<JsonValue>),
    Object(JsonObject),
}

/// Discriminant of a [`JsonValue`], used in diagnostics.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ValueKind {
    Null,
    Bool,
    Number,
    String,
    Array,
    Object,
}

impl ValueKind {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Null => "null",
            Self::Bool => "boolean",
            Self::Number => "number",
            Self::String => "string",
            Self::Array => "array",
            Self::Object => "object",
        }
    }
}

impl fmt::Display for ValueKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl JsonValue {
    pub fn kind(&self) -> ValueKind {
        match self {
            Self::Null => ValueKind::Null,
            Self::Bool(_) => ValueKind::Bool,
            Self::Number(_) => ValueKind::Number,
            Self::String(_) => ValueKind::String,
            Self::Array(_) => ValueKind::Array,
            Self::Object(_) => ValueKind::Object,
        }
    }

    pub fn is_null(&self) -> bool {
        matches!(self, Self::Null)
    }

    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Self::Bool(b) => Some(*b),
            _ => None,
        }
    }

    pub fn as_number(&self) -> Option<&JsonNumber> {
        match self {
            Self::Number(n) => Some(n),
            _ => None,
        }
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            Self::String(s) => Some(s),
            _ => None,
        }
    }

    pub fn as_array(&self) -> Option<&[JsonValue]> {
        match self {
            Self::Array(arr) => Some(arr),
            _ => None,
        }
    }

    pub fn as_object(&self) -> Option<&JsonObject> {
        match self {
            Self::Object(obj) => Some(obj),
            _ => None,
        }
    }

    /// Member lookup; `None` for missing keys and for non-objects.
    pub fn get(&self, key: &str) -> Option<&JsonValue> {
        self.as_object().and_then(|obj| obj.get(key))
    }

    /// Compact JSON text for this value.
    pub fn to_vec(&self) -> Vec<u8> {
        JsonEncoder::new().encode(self)
    }
}

impl fmt::Display for JsonValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // The encoder only ever writes UTF-8.
        f.write_str(&String::from_utf8_lossy(&self.to_vec()))
    }
}

impl From<bool> for JsonValue {
    fn from(b: bool) -> Self {
        Self::Bool(b)
    }
}

impl From<i64> for JsonValue {
    fn from(i: i64) -> Self {
        Self::Number(JsonNumber::from(i))
    }
}

impl From<&str> for JsonValue {
    fn from(s: &str) -> Self {
        Self::String(s.to_string())
    }
}

impl From<String> for JsonValue {
    fn from(s: String) -> Self {
        Self::String(s)
    }
}

impl From<JsonNumber> for JsonValue {
    fn from(n: JsonNumber) -> Self {
        Self::Number(n)
    }
}

impl From<JsonObject> for JsonValue {
    fn from(obj: JsonObject) -> Self {
        Self::Object(obj)
    }
}

impl From<Vec<JsonValue>> for JsonValue {
    fn from(arr: Vec<JsonValue>) -> Self {
        Self::Array(arr)
    }
}

/// A JSON number kept as its token text.
///
/// Nothing is converted until a consumer asks for a concrete width, so values
/// beyond `i64`/`f64` survive parsing and can be range-checked exactly.
/// Equality compares token text: `1` and `1.0` are different numbers.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct JsonNumber {
    text: String,
}

impl JsonNumber {
    /// Validate `text` against the JSON number grammar.
    ///
    /// # Example
    ///
    /// ```
    /// use json_text::JsonNumber;
    ///
    /// assert!(JsonNumber::parse("-12.5e3").is_some());
    /// assert!(JsonNumber::parse("012").is_none());
    /// assert!(JsonNumber::parse("1.").is_none());
    /// ```
    pub fn parse(text: &str) -> Option<Self> {
        match scan_number(text.as_bytes(), 0) {
            Ok((end, _)) if end == text.len() => Some(Self::from_token(text)),
            _ => None,
        }
    }

    /// Wrap text that is already known to be a valid number token.
    pub(crate) fn from_token(text: &str) -> Self {
        Self {
            text: text.to_string(),
        }
    }

    pub fn as_str(&self) -> &str {
        &self.text
    }

    /// True when the token has no fraction or exponent part.
    pub fn is_integer(&self) -> bool {
        !self.text.bytes().any(|b| matches!(b, b'.' | b'e' | b'E'))
    }

    /// Exact `i64` value of a whole number (`1E3` and `2.0` count), or `None`
    /// for real fractions and out-of-range values.
    pub fn as_i64(&self) -> Option<i64> {
        parse_i64_number(&self.text).ok()
    }

    /// Nearest finite `f64`, or `None` when the magnitude overflows.
    pub fn as_f64(&self) -> Option<f64> {
        self.text.parse::<f64>().ok().filter(|f| f.is_finite())
    }
}

impl fmt::Display for JsonNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.text)
    }
}

impl From<i64> for JsonNumber {
    fn from(i: i64) -> Self {
        Self { text: i.to_string() }
    }
}
