//! Schema-driven decode and encode.
//!
//! Decoding is parse → project: the bytes become a [`JsonValue`] tree, then
//! each schema field is looked up, kind-checked and (for integers)
//! range-checked on its digits. Whole values in fraction or exponent form
//! (`1E3`, `2.0`) are integers; real fractions are type mismatches. A [`Record`] is only built once every
//! field passed, so callers never see a partially populated value.
//!
//! Encoding walks the schema in declaration order and writes each present
//! value straight to the JSON encoder; absent optional values are left out.

use json_text::{
    parse_i64_number, DecoderOptions, IntError, JsonDecoder, JsonEncoder, JsonObject, JsonValue,
};
use tracing::{debug, trace};

use crate::error::DecodeError;
use crate::model::Model;
use crate::options::{DecodeOptions, ErrorMode};
use crate::record::{FieldValue, Record};
use crate::schema::{Field, FieldKind, Schema};

/// Decode JSON bytes into `T` with default options (fail-fast).
///
/// # Example
///
/// ```
/// use typed_json::{decode, DecodeError, Field, Model, Record, Schema};
///
/// struct Id(i64);
///
/// const FIELDS: &[Field] = &[Field::int64("id")];
/// static SCHEMA: Schema = Schema::new(FIELDS);
///
/// impl Model for Id {
///     fn schema() -> &'static Schema { &SCHEMA }
///     fn from_record(mut r: Record) -> Result<Self, DecodeError> { Ok(Id(r.take_i64("id")?)) }
///     fn to_record(&self) -> Record { Record::new(&SCHEMA).with("id", self.0) }
/// }
///
/// assert_eq!(decode::<Id>(br#"{"id": 9223372036854775807}"#).unwrap().0, i64::MAX);
/// assert_eq!(
///     decode::<Id>(br#"{"id": 9223372036854775808}"#).err(),
///     Some(DecodeError::IntegerOverflow("id".into()))
/// );
/// ```
pub fn decode<T: Model>(bytes: &[u8]) -> Result<T, DecodeError> {
    decode_with(bytes, &DecodeOptions::default())
}

pub fn decode_with<T: Model>(bytes: &[u8], opts: &DecodeOptions) -> Result<T, DecodeError> {
    let record = decode_record(bytes, T::schema(), opts)?;
    T::from_record(record)
}

/// Decode from an already parsed tree, skipping the text parser.
pub fn decode_value<T: Model>(value: &JsonValue) -> Result<T, DecodeError> {
    decode_value_with(value, &DecodeOptions::default())
}

pub fn decode_value_with<T: Model>(
    value: &JsonValue,
    opts: &DecodeOptions,
) -> Result<T, DecodeError> {
    let record = project(value, T::schema(), opts)?;
    T::from_record(record)
}

/// Parse `bytes` and project them onto `schema`.
pub fn decode_record(
    bytes: &[u8],
    schema: &'static Schema,
    opts: &DecodeOptions,
) -> Result<Record, DecodeError> {
    let decoder = JsonDecoder::with_options(DecoderOptions {
        max_depth: opts.max_depth,
    });
    let value = decoder.decode(bytes).map_err(|err| {
        debug!(error = %err, len = bytes.len(), "json body rejected");
        DecodeError::from(err)
    })?;
    project(&value, schema, opts)
}

/// Project a parsed tree onto `schema`. Unknown members are ignored.
pub fn project(
    value: &JsonValue,
    schema: &'static Schema,
    opts: &DecodeOptions,
) -> Result<Record, DecodeError> {
    let obj = match value {
        JsonValue::Object(obj) => obj,
        other => {
            debug!(found = %other.kind(), "json root is not an object");
            return Err(DecodeError::SchemaMismatch {
                found: other.kind(),
            });
        }
    };

    let mut values = Vec::with_capacity(schema.len());
    let mut errors = Vec::new();
    for field in schema.fields() {
        match project_field(field, obj.get(field.name())) {
            Ok(value) => values.push(value),
            Err(err) => {
                debug!(field = field.name(), code = err.kind().code(), "field rejected");
                if opts.errors == ErrorMode::FailFast {
                    return Err(err);
                }
                errors.push(err);
            }
        }
    }

    match errors.len() {
        0 => Ok(Record::from_values(schema, values)),
        1 => Err(errors.remove(0)),
        _ => Err(DecodeError::Multiple(errors)),
    }
}

fn project_field(field: &Field, value: Option<&JsonValue>) -> Result<FieldValue, DecodeError> {
    let value = match value {
        None | Some(JsonValue::Null) if field.is_required() => {
            return Err(DecodeError::MissingField(field.name().to_string()));
        }
        None | Some(JsonValue::Null) => return Ok(FieldValue::Absent),
        Some(value) => value,
    };

    match (field.kind(), value) {
        (FieldKind::String | FieldKind::OptionalString, JsonValue::String(s)) => {
            Ok(FieldValue::String(s.clone()))
        }
        (FieldKind::Integer64 | FieldKind::OptionalInteger64, JsonValue::Number(n)) => {
            match parse_i64_number(n.as_str()) {
                Ok(i) => Ok(FieldValue::Integer64(i)),
                Err(IntError::OutOfRange) => {
                    Err(DecodeError::IntegerOverflow(field.name().to_string()))
                }
                Err(IntError::NotInteger) => Err(DecodeError::type_mismatch(
                    field.name(),
                    field.kind(),
                    value.kind(),
                )),
            }
        }
        (kind, other) => Err(DecodeError::type_mismatch(
            field.name(),
            kind,
            other.kind(),
        )),
    }
}

/// Encode `model` as a compact JSON object in schema order.
pub fn encode<T: Model>(model: &T) -> Vec<u8> {
    encode_record(&model.to_record())
}

/// Encode a record. Absent values are omitted rather than written as `null`.
pub fn encode_record(record: &Record) -> Vec<u8> {
    let mut encoder = JsonEncoder::with_capacity(16 * record.schema().len());
    encoder.write_start_obj();
    let mut first = true;
    for (field, value) in record.iter() {
        if value.is_absent() {
            continue;
        }
        if !first {
            encoder.write_obj_separator();
        }
        first = false;
        encoder.write_str(field.name());
        encoder.write_obj_key_separator();
        match value {
            FieldValue::String(s) => encoder.write_str(s),
            FieldValue::Integer64(i) => encoder.write_integer(*i),
            FieldValue::Absent => {}
        }
    }
    encoder.write_end_obj();
    let out = encoder.finish();
    trace!(len = out.len(), "encoded record");
    out
}

/// Encode `model` as a [`JsonValue`] object instead of text.
pub fn encode_value<T: Model>(model: &T) -> JsonValue {
    record_to_value(&model.to_record())
}

pub fn record_to_value(record: &Record) -> JsonValue {
    let obj: JsonObject = record
        .iter()
        .filter_map(|(field, value)| {
            let value = match value {
                FieldValue::String(s) => JsonValue::from(s.as_str()),
                FieldValue::Integer64(i) => JsonValue::from(*i),
                FieldValue::Absent => return None,
            };
            Some((field.name().to_string(), value))
        })
        .collect();
    JsonValue::Object(obj)
}

#[cfg(test)]
mod tests {
    use super::*;
    use json_text::{from_slice, ValueKind};

    const FIELDS: &[Field] = &[
        Field::string("foo"),
        Field::int64("baz"),
        Field::optional_string("opt"),
        Field::optional_int64("bomb"),
    ];
    static SCHEMA: Schema = Schema::new(FIELDS);

    fn record(input: &str) -> Result<Record, DecodeError> {
        decode_record(input.as_bytes(), &SCHEMA, &DecodeOptions::default())
    }

    #[test]
    fn root_must_be_object() {
        assert_eq!(
            record("[1]"),
            Err(DecodeError::SchemaMismatch {
                found: ValueKind::Array
            })
        );
        assert_eq!(
            record(r#""foo""#),
            Err(DecodeError::SchemaMismatch {
                found: ValueKind::String
            })
        );
    }

    #[test]
    fn malformed_input_is_wrapped() {
        assert!(matches!(
            record(r#"{"foo":"a","baz":1"#),
            Err(DecodeError::MalformedInput(_))
        ));
        assert!(matches!(
            record(r#"{"foo":"a","baz":1} {}"#),
            Err(DecodeError::MalformedInput(_))
        ));
    }

    #[test]
    fn explicit_null_handling() {
        let r = record(r#"{"foo":"a","baz":1,"opt":null,"bomb":null}"#).unwrap();
        assert_eq!(r.get("opt"), Some(&FieldValue::Absent));
        assert_eq!(r.get("bomb"), Some(&FieldValue::Absent));
        assert_eq!(
            record(r#"{"foo":null,"baz":1}"#),
            Err(DecodeError::MissingField("foo".into()))
        );
    }

    #[test]
    fn integer_kinds_reject_real_fractions_and_strings() {
        assert_eq!(
            record(r#"{"foo":"a","baz":1.25}"#),
            Err(DecodeError::TypeMismatch {
                field: "baz".into(),
                expected: FieldKind::Integer64,
                found: ValueKind::Number,
            })
        );
        assert_eq!(
            record(r#"{"foo":"a","baz":"1"}"#),
            Err(DecodeError::TypeMismatch {
                field: "baz".into(),
                expected: FieldKind::Integer64,
                found: ValueKind::String,
            })
        );
        assert_eq!(
            record(r#"{"foo":1,"baz":1}"#),
            Err(DecodeError::TypeMismatch {
                field: "foo".into(),
                expected: FieldKind::String,
                found: ValueKind::Number,
            })
        );
    }

    #[test]
    fn whole_numbers_in_exponent_or_fraction_form_are_integers() {
        let r = record(r#"{"foo":"a","baz":1E3,"bomb":4237846.0}"#).unwrap();
        assert_eq!(r.get("baz"), Some(&FieldValue::Integer64(1000)));
        assert_eq!(r.get("bomb"), Some(&FieldValue::Integer64(4237846)));
    }

    #[test]
    fn exponent_form_beyond_i64_overflows() {
        assert_eq!(
            record(r#"{"foo":"a","baz":1,"bomb":1e37}"#),
            Err(DecodeError::IntegerOverflow("bomb".into()))
        );
        assert_eq!(
            record(r#"{"foo":"a","baz":-1e19}"#),
            Err(DecodeError::IntegerOverflow("baz".into()))
        );
        assert_eq!(
            record(r#"{"foo":"a","baz":1e999999999}"#),
            Err(DecodeError::IntegerOverflow("baz".into()))
        );
    }

    #[test]
    fn fail_fast_reports_first_field_in_schema_order() {
        // Object order differs from schema order on purpose.
        let err = record(r#"{"bomb":1e400,"baz":true}"#).unwrap_err();
        assert_eq!(err, DecodeError::MissingField("foo".into()));
    }

    #[test]
    fn encode_skips_absent_and_keeps_order() {
        let r = Record::new(&SCHEMA)
            .with("bomb", -1i64)
            .with("foo", "x\"y");
        assert_eq!(encode_record(&r), br#"{"foo":"x\"y","bomb":-1}"#);
        assert_eq!(encode_record(&Record::new(&SCHEMA)), b"{}");
    }

    #[test]
    fn value_projection_matches_text_projection() {
        let text = r#"{"foo":"q","baz":7,"extra":[1,2]}"#;
        let tree = from_slice(text.as_bytes()).unwrap();
        let via_tree = project(&tree, &SCHEMA, &DecodeOptions::default()).unwrap();
        assert_eq!(via_tree, record(text).unwrap());
        assert_eq!(
            record_to_value(&via_tree).to_string(),
            r#"{"foo":"q","baz":7}"#
        );
    }
}
