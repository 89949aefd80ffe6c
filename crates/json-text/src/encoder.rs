//! `JsonEncoder`: compact JSON text writer.
//!
//! Output has no insignificant whitespace, keeps object members in stored
//! order and writes numbers as their exact token text. The streaming
//! `write_*` methods let callers emit an object without building a
//! [`JsonValue`] first.

use crate::value::{JsonNumber, JsonObject, JsonValue};

#[derive(Debug, Default)]
pub struct JsonEncoder {
    buf: Vec<u8>,
}

impl JsonEncoder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            buf: Vec::with_capacity(capacity),
        }
    }

    /// Encode one value, leaving the encoder empty for reuse.
    pub fn encode(&mut self, value: &JsonValue) -> Vec<u8> {
        self.buf.clear();
        self.write_any(value);
        std::mem::take(&mut self.buf)
    }

    /// Bytes written so far by the streaming methods.
    pub fn finish(self) -> Vec<u8> {
        self.buf
    }

    pub fn write_any(&mut self, value: &JsonValue) {
        match value {
            JsonValue::Null => self.write_null(),
            JsonValue::Bool(b) => self.write_boolean(*b),
            JsonValue::Number(n) => self.write_number(n),
            JsonValue::String(s) => self.write_str(s),
            JsonValue::Array(arr) => self.write_arr(arr),
            JsonValue::Object(obj) => self.write_obj(obj),
        }
    }

    pub fn write_null(&mut self) {
        self.buf.extend_from_slice(b"null");
    }

    pub fn write_boolean(&mut self, b: bool) {
        self.buf
            .extend_from_slice(if b { b"true".as_slice() } else { b"false".as_slice() });
    }

    pub fn write_number(&mut self, num: &JsonNumber) {
        self.buf.extend_from_slice(num.as_str().as_bytes());
    }

    pub fn write_integer(&mut self, int: i64) {
        self.buf.extend_from_slice(int.to_string().as_bytes());
    }

    /// Write a JSON string with standard escaping.
    pub fn write_str(&mut self, s: &str) {
        let bytes = s.as_bytes();
        // Fast path: printable ASCII without quote or backslash.
        if bytes
            .iter()
            .all(|&b| (32..=126).contains(&b) && b != b'"' && b != b'\\')
        {
            self.buf.reserve(bytes.len() + 2);
            self.buf.push(b'"');
            self.buf.extend_from_slice(bytes);
            self.buf.push(b'"');
            return;
        }
        // Serializing a &str cannot fail.
        let quoted = serde_json::to_string(s).unwrap_or_else(|_| "\"\"".to_string());
        self.buf.extend_from_slice(quoted.as_bytes());
    }

    pub fn write_arr(&mut self, arr: &[JsonValue]) {
        self.buf.push(b'[');
        for (i, item) in arr.iter().enumerate() {
            if i > 0 {
                self.buf.push(b',');
            }
            self.write_any(item);
        }
        self.buf.push(b']');
    }

    pub fn write_obj(&mut self, obj: &JsonObject) {
        self.write_start_obj();
        for (i, (key, val)) in obj.iter().enumerate() {
            if i > 0 {
                self.write_obj_separator();
            }
            self.write_str(key);
            self.write_obj_key_separator();
            self.write_any(val);
        }
        self.write_end_obj();
    }

    // ---- Streaming ----

    pub fn write_start_obj(&mut self) {
        self.buf.push(b'{');
    }
    pub fn write_end_obj(&mut self) {
        self.buf.push(b'}');
    }
    pub fn write_obj_separator(&mut self) {
        self.buf.push(b',');
    }
    pub fn write_obj_key_separator(&mut self) {
        self.buf.push(b':');
    }
}
