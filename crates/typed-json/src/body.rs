//! Message bodies handed between a web layer and the codec.
//!
//! A body is either raw bytes as received, or a JSON tree some earlier layer
//! already parsed. Both decode the same way; tree bodies skip the text
//! parser.

use json_text::{JsonDecoder, JsonValue};
use tracing::debug;

use crate::codec;
use crate::error::DecodeError;
use crate::model::Model;
use crate::options::DecodeOptions;

pub const JSON_CONTENT_TYPE: &str = "application/json; charset=utf-8";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Body {
    Data(Vec<u8>),
    Json(JsonValue),
}

impl Default for Body {
    fn default() -> Self {
        Self::Data(Vec::new())
    }
}

impl Body {
    /// Encoded JSON bytes of `model`.
    pub fn encode_json<T: Model>(model: &T) -> Self {
        Self::Data(codec::encode(model))
    }

    pub fn decode_json<T: Model>(&self) -> Result<T, DecodeError> {
        self.decode_json_with(&DecodeOptions::default())
    }

    pub fn decode_json_with<T: Model>(&self, opts: &DecodeOptions) -> Result<T, DecodeError> {
        match self {
            Self::Data(bytes) => codec::decode_with(bytes, opts),
            Self::Json(value) => codec::decode_value_with(value, opts),
        }
    }

    /// The body as a JSON tree, parsing raw bytes if needed.
    pub fn json(&self) -> Result<JsonValue, DecodeError> {
        match self {
            Self::Data(bytes) => JsonDecoder::new().decode(bytes).map_err(|err| {
                debug!(error = %err, "body is not valid json");
                DecodeError::from(err)
            }),
            Self::Json(value) => Ok(value.clone()),
        }
    }

    /// The body as bytes, encoding a tree if needed.
    pub fn to_bytes(&self) -> Vec<u8> {
        match self {
            Self::Data(bytes) => bytes.clone(),
            Self::Json(value) => value.to_vec(),
        }
    }

    pub fn is_empty(&self) -> bool {
        matches!(self, Self::Data(bytes) if bytes.is_empty())
    }
}

impl From<Vec<u8>> for Body {
    fn from(bytes: Vec<u8>) -> Self {
        Self::Data(bytes)
    }
}

impl From<&[u8]> for Body {
    fn from(bytes: &[u8]) -> Self {
        Self::Data(bytes.to_vec())
    }
}

impl From<JsonValue> for Body {
    fn from(value: JsonValue) -> Self {
        Self::Json(value)
    }
}

impl From<serde_json::Value> for Body {
    fn from(value: serde_json::Value) -> Self {
        Self::Json(JsonValue::from(value))
    }
}

/// Status, content type and body of a JSON response.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct JsonResponse {
    pub status: u16,
    pub content_type: &'static str,
    pub body: Body,
}

impl JsonResponse {
    pub const OK: u16 = 200;

    pub fn ok<T: Model>(model: &T) -> Self {
        Self::with_status(Self::OK, model)
    }

    pub fn with_status<T: Model>(status: u16, model: &T) -> Self {
        Self {
            status,
            content_type: JSON_CONTENT_TYPE,
            body: Body::encode_json(model),
        }
    }

    pub fn json(&self) -> Result<JsonValue, DecodeError> {
        self.body.json()
    }
}
