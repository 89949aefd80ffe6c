//! `typed-json`: schema-driven JSON decoding for request and response bodies.
//!
//! A consuming type declares a static [`Schema`] and implements [`Model`].
//! Decoding parses the bytes with [`json_text`], checks every declared field
//! for presence and kind, range-checks integers on their decimal text, and
//! only then builds the value. Errors come back as [`DecodeError`] values
//! naming the field and reason; out-of-range integers are reported, never
//! truncated.
//!
//! Encoding writes the schema's fields in declaration order and leaves absent
//! optional values out, so `decode(encode(v)) == v`.
//!
//! Both directions are pure and hold no shared state; they can run
//! concurrently from any number of threads.

pub mod body;
pub mod codec;
pub mod error;
pub mod model;
pub mod options;
pub mod record;
pub mod schema;

pub use body::{Body, JsonResponse, JSON_CONTENT_TYPE};
pub use codec::{
    decode, decode_record, decode_value, decode_value_with, decode_with, encode, encode_record,
    encode_value, project, record_to_value,
};
pub use error::{DecodeError, DecodeErrorKind};
pub use model::Model;
pub use options::{DecodeOptions, ErrorMode};
pub use record::{FieldValue, Record};
pub use schema::{Field, FieldKind, Schema};

pub use json_text::{JsonNumber, JsonValue, ValueKind};
