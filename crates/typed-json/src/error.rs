use json_text::{JsonError, ValueKind};
use thiserror::Error;

use crate::schema::FieldKind;

/// Why a body could not be decoded into a typed value.
///
/// Every variant is an ordinary value returned to the caller; nothing in the
/// decode path panics on bad input.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DecodeError {
    #[error("malformed json input: {0}")]
    MalformedInput(#[from] JsonError),
    #[error("expected a json object at the root, found {found}")]
    SchemaMismatch { found: ValueKind },
    #[error("missing required field `{0}`")]
    MissingField(String),
    #[error("field `{field}` expected {expected}, found {found}")]
    TypeMismatch {
        field: String,
        expected: FieldKind,
        found: ValueKind,
    },
    #[error("field `{0}` does not fit in a 64-bit signed integer")]
    IntegerOverflow(String),
    /// Several field errors, in schema order. Only produced in
    /// [`ErrorMode::Accumulate`](crate::ErrorMode::Accumulate).
    #[error("{} fields failed to decode", .0.len())]
    Multiple(Vec<DecodeError>),
}

/// Reason code of a [`DecodeError`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DecodeErrorKind {
    MalformedInput,
    SchemaMismatch,
    MissingField,
    TypeMismatch,
    IntegerOverflow,
    Multiple,
}

impl DecodeErrorKind {
    /// Stable machine-readable code.
    pub fn code(self) -> &'static str {
        match self {
            Self::MalformedInput => "MALFORMED_INPUT",
            Self::SchemaMismatch => "SCHEMA_MISMATCH",
            Self::MissingField => "MISSING_FIELD",
            Self::TypeMismatch => "TYPE_MISMATCH",
            Self::IntegerOverflow => "INTEGER_OVERFLOW",
            Self::Multiple => "MULTIPLE",
        }
    }
}

impl DecodeError {
    pub fn kind(&self) -> DecodeErrorKind {
        match self {
            Self::MalformedInput(_) => DecodeErrorKind::MalformedInput,
            Self::SchemaMismatch { .. } => DecodeErrorKind::SchemaMismatch,
            Self::MissingField(_) => DecodeErrorKind::MissingField,
            Self::TypeMismatch { .. } => DecodeErrorKind::TypeMismatch,
            Self::IntegerOverflow(_) => DecodeErrorKind::IntegerOverflow,
            Self::Multiple(_) => DecodeErrorKind::Multiple,
        }
    }

    /// Name of the offending field, for field-level errors.
    pub fn field(&self) -> Option<&str> {
        match self {
            Self::MissingField(field)
            | Self::IntegerOverflow(field)
            | Self::TypeMismatch { field, .. } => Some(field.as_str()),
            Self::MalformedInput(_) | Self::SchemaMismatch { .. } | Self::Multiple(_) => None,
        }
    }

    /// The individual errors: the inner list for `Multiple`, otherwise just
    /// this error.
    pub fn errors(&self) -> &[DecodeError] {
        match self {
            Self::Multiple(errors) => errors.as_slice(),
            other => std::slice::from_ref(other),
        }
    }

    pub(crate) fn type_mismatch(field: &str, expected: FieldKind, found: ValueKind) -> Self {
        Self::TypeMismatch {
            field: field.to_string(),
            expected,
            found,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn messages_name_the_field() {
        assert_eq!(
            DecodeError::MissingField("baz".into()).to_string(),
            "missing required field `baz`"
        );
        assert_eq!(
            DecodeError::type_mismatch("foo", FieldKind::String, ValueKind::Number).to_string(),
            "field `foo` expected string, found number"
        );
        assert_eq!(
            DecodeError::from(JsonError::UnexpectedEnd).to_string(),
            "malformed json input: unexpected end of json input"
        );
    }

    #[test]
    fn errors_flattens_one_level() {
        let single = DecodeError::IntegerOverflow("bomb".into());
        assert_eq!(single.errors(), std::slice::from_ref(&single));
        assert_eq!(single.field(), Some("bomb"));
        assert_eq!(single.kind().code(), "INTEGER_OVERFLOW");

        let multiple = DecodeError::Multiple(vec![
            DecodeError::MissingField("foo".into()),
            DecodeError::IntegerOverflow("bomb".into()),
        ]);
        assert_eq!(multiple.to_string(), "2 fields failed to decode");
        assert_eq!(multiple.field(), None);
        let fields: Vec<_> = multiple.errors().iter().filter_map(DecodeError::field).collect();
        assert_eq!(fields, ["foo", "bomb"]);
    }
}
