//! `Record`: the schema-shaped projection between JSON and a typed value.

use json_text::ValueKind;

use crate::error::DecodeError;
use crate::schema::{Field, FieldKind, Schema};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FieldValue {
    String(String),
    Integer64(i64),
    Absent,
}

impl FieldValue {
    pub fn is_absent(&self) -> bool {
        matches!(self, Self::Absent)
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            Self::String(s) => Some(s),
            _ => None,
        }
    }

    pub fn as_i64(&self) -> Option<i64> {
        match self {
            Self::Integer64(i) => Some(*i),
            _ => None,
        }
    }

    /// The JSON kind this value encodes to.
    pub fn json_kind(&self) -> ValueKind {
        match self {
            Self::String(_) => ValueKind::String,
            Self::Integer64(_) => ValueKind::Number,
            Self::Absent => ValueKind::Null,
        }
    }
}

impl From<String> for FieldValue {
    fn from(s: String) -> Self {
        Self::String(s)
    }
}

impl From<&str> for FieldValue {
    fn from(s: &str) -> Self {
        Self::String(s.to_string())
    }
}

impl From<i64> for FieldValue {
    fn from(i: i64) -> Self {
        Self::Integer64(i)
    }
}

impl<T: Into<FieldValue>> From<Option<T>> for FieldValue {
    fn from(value: Option<T>) -> Self {
        value.map_or(Self::Absent, Into::into)
    }
}

/// One value slot per schema field, in declaration order.
///
/// Records coming out of the decoder always conform to their schema. Records
/// built by hand through [`Record::with`] are taken as given by the encoder.
///
/// # Example
///
/// ```
/// use typed_json::{Field, FieldValue, Record, Schema};
///
/// const FIELDS: &[Field] = &[Field::string("foo"), Field::optional_int64("bomb")];
/// static SCHEMA: Schema = Schema::new(FIELDS);
///
/// let mut record = Record::new(&SCHEMA).with("foo", "bar");
/// assert_eq!(record.get("bomb"), Some(&FieldValue::Absent));
/// assert_eq!(record.take_string("foo").unwrap(), "bar");
/// assert_eq!(record.take_opt_i64("bomb").unwrap(), None);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Record {
    schema: &'static Schema,
    values: Vec<FieldValue>,
}

impl Record {
    /// A record with every slot absent.
    pub fn new(schema: &'static Schema) -> Self {
        Self {
            schema,
            values: vec![FieldValue::Absent; schema.len()],
        }
    }

    pub(crate) fn from_values(schema: &'static Schema, values: Vec<FieldValue>) -> Self {
        debug_assert_eq!(schema.len(), values.len());
        Self { schema, values }
    }

    pub fn schema(&self) -> &'static Schema {
        self.schema
    }

    pub fn get(&self, name: &str) -> Option<&FieldValue> {
        self.schema.index_of(name).map(|i| &self.values[i])
    }

    /// Set a slot. Returns `false` when the schema has no such field.
    pub fn set(&mut self, name: &str, value: impl Into<FieldValue>) -> bool {
        match self.schema.index_of(name) {
            Some(i) => {
                self.values[i] = value.into();
                true
            }
            None => false,
        }
    }

    /// Builder form of [`Record::set`]. Names outside the schema are ignored;
    /// use [`Record::set`] to detect them.
    pub fn with(mut self, name: &str, value: impl Into<FieldValue>) -> Self {
        self.set(name, value);
        self
    }

    /// Fields paired with their values, in schema order.
    pub fn iter(&self) -> impl Iterator<Item = (&'static Field, &FieldValue)> {
        self.schema.fields().iter().zip(self.values.iter())
    }

    /// True when every required slot is filled and every value matches its kind.
    pub fn conforms(&self) -> bool {
        self.iter().all(|(field, value)| match value {
            FieldValue::Absent => !field.is_required(),
            FieldValue::String(_) => !field.kind().is_integer(),
            FieldValue::Integer64(_) => field.kind().is_integer(),
        })
    }

    fn take(&mut self, name: &str) -> FieldValue {
        match self.schema.index_of(name) {
            Some(i) => std::mem::replace(&mut self.values[i], FieldValue::Absent),
            None => FieldValue::Absent,
        }
    }

    fn expected(&self, name: &str) -> FieldKind {
        self.schema.field(name).map_or(FieldKind::String, Field::kind)
    }

    pub fn take_string(&mut self, name: &str) -> Result<String, DecodeError> {
        match self.take_opt_string(name)? {
            Some(s) => Ok(s),
            None => Err(DecodeError::MissingField(name.to_string())),
        }
    }

    pub fn take_opt_string(&mut self, name: &str) -> Result<Option<String>, DecodeError> {
        match self.take(name) {
            FieldValue::String(s) => Ok(Some(s)),
            FieldValue::Absent => Ok(None),
            other => Err(DecodeError::type_mismatch(
                name,
                self.expected(name),
                other.json_kind(),
            )),
        }
    }

    pub fn take_i64(&mut self, name: &str) -> Result<i64, DecodeError> {
        match self.take_opt_i64(name)? {
            Some(i) => Ok(i),
            None => Err(DecodeError::MissingField(name.to_string())),
        }
    }

    pub fn take_opt_i64(&mut self, name: &str) -> Result<Option<i64>, DecodeError> {
        match self.take(name) {
            FieldValue::Integer64(i) => Ok(Some(i)),
            FieldValue::Absent => Ok(None),
            other => Err(DecodeError::type_mismatch(
                name,
                self.expected(name),
                other.json_kind(),
            )),
        }
    }
}
