//! `json-text`: strict JSON text layer for the typed-json workspace.
//!
//! Parses bytes into a [`JsonValue`] tree whose numbers keep their exact
//! token text, and writes trees back out as compact JSON. Integer tokens are
//! range-checked on their digits with [`parse_i64_number`] instead of being
//! forced through a fixed-width type during parsing.
//!
//! # Example
//!
//! ```
//! use json_text::{from_slice, JsonValue};
//!
//! let value = from_slice(br#"{"id": 10000000000000000000000000000000000000}"#).unwrap();
//! let id = value.get("id").and_then(JsonValue::as_number).unwrap();
//! assert_eq!(id.as_str(), "10000000000000000000000000000000000000");
//! assert_eq!(id.as_i64(), None);
//! ```

pub mod decoder;
pub mod encoder;
pub mod error;
pub mod int64;
mod serde_interop;
pub mod value;

pub use decoder::{from_slice, DecoderOptions, JsonDecoder, DEFAULT_MAX_DEPTH};
pub use encoder::JsonEncoder;
pub use error::JsonError;
pub use int64::{parse_i64_checked, parse_i64_number, IntError};
pub use value::{JsonNumber, JsonObject, JsonValue, ValueKind};
