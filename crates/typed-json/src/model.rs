use crate::body::JsonResponse;
use crate::codec;
use crate::error::DecodeError;
use crate::record::Record;
use crate::schema::Schema;

/// A type with a fixed JSON shape.
///
/// Implementors name their [`Schema`] and convert to and from a [`Record`];
/// the codec does the parsing, validation and serialization around that.
///
/// # Example
///
/// ```
/// use typed_json::{DecodeError, Field, Model, Record, Schema};
///
/// #[derive(Debug, PartialEq)]
/// struct Point {
///     x: i64,
///     label: Option<String>,
/// }
///
/// const POINT_FIELDS: &[Field] = &[Field::int64("x"), Field::optional_string("label")];
/// static POINT: Schema = Schema::new(POINT_FIELDS);
///
/// impl Model for Point {
///     fn schema() -> &'static Schema {
///         &POINT
///     }
///
///     fn from_record(mut record: Record) -> Result<Self, DecodeError> {
///         Ok(Self {
///             x: record.take_i64("x")?,
///             label: record.take_opt_string("label")?,
///         })
///     }
///
///     fn to_record(&self) -> Record {
///         Record::new(&POINT)
///             .with("x", self.x)
///             .with("label", self.label.clone())
///     }
/// }
///
/// let point = Point::decode(br#"{"x": -3}"#).unwrap();
/// assert_eq!(point, Point { x: -3, label: None });
/// assert_eq!(point.encode(), br#"{"x":-3}"#);
/// ```
pub trait Model: Sized {
    fn schema() -> &'static Schema;

    /// Build the value from a record that already passed schema validation.
    fn from_record(record: Record) -> Result<Self, DecodeError>;

    fn to_record(&self) -> Record;

    fn decode(bytes: &[u8]) -> Result<Self, DecodeError> {
        codec::decode(bytes)
    }

    fn encode(&self) -> Vec<u8> {
        codec::encode(self)
    }

    /// A 200 response carrying this value as a JSON body.
    fn make_response(&self) -> JsonResponse {
        JsonResponse::ok(self)
    }
}
