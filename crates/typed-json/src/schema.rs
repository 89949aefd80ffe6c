//! Static description of a typed value's JSON shape.

use std::fmt;

/// Value kind of a schema field. The optional kinds accept an absent member
/// or an explicit `null`; the others require a present, non-null value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FieldKind {
    String,
    Integer64,
    OptionalString,
    OptionalInteger64,
}

impl FieldKind {
    pub const fn is_optional(self) -> bool {
        matches!(self, Self::OptionalString | Self::OptionalInteger64)
    }

    pub const fn is_integer(self) -> bool {
        matches!(self, Self::Integer64 | Self::OptionalInteger64)
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::String => "string",
            Self::Integer64 => "integer64",
            Self::OptionalString => "optionalString",
            Self::OptionalInteger64 => "optionalInteger64",
        }
    }
}

impl fmt::Display for FieldKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Field {
    name: &'static str,
    kind: FieldKind,
}

impl Field {
    pub const fn new(name: &'static str, kind: FieldKind) -> Self {
        Self { name, kind }
    }

    pub const fn string(name: &'static str) -> Self {
        Self::new(name, FieldKind::String)
    }

    pub const fn int64(name: &'static str) -> Self {
        Self::new(name, FieldKind::Integer64)
    }

    pub const fn optional_string(name: &'static str) -> Self {
        Self::new(name, FieldKind::OptionalString)
    }

    pub const fn optional_int64(name: &'static str) -> Self {
        Self::new(name, FieldKind::OptionalInteger64)
    }

    pub fn name(&self) -> &'static str {
        self.name
    }

    pub fn kind(&self) -> FieldKind {
        self.kind
    }

    pub fn is_required(&self) -> bool {
        !self.kind.is_optional()
    }
}

/// Ordered field list for one consuming type.
///
/// Schemas are meant to be declared as `const`/`static` items next to the
/// type they describe. Field names must be unique; decoding and encoding walk
/// the fields in declaration order.
///
/// # Example
///
/// ```
/// use typed_json::{Field, FieldKind, Schema};
///
/// const USER_FIELDS: &[Field] = &[
///     Field::string("name"),
///     Field::int64("id"),
///     Field::optional_string("nickname"),
/// ];
/// static USER: Schema = Schema::new(USER_FIELDS);
///
/// assert_eq!(USER.len(), 3);
/// assert_eq!(USER.field("id").map(|f| f.kind()), Some(FieldKind::Integer64));
/// assert_eq!(USER.index_of("nickname"), Some(2));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Schema {
    fields: &'static [Field],
}

impl Schema {
    pub const fn new(fields: &'static [Field]) -> Self {
        Self { fields }
    }

    pub fn fields(&self) -> &'static [Field] {
        self.fields
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    pub fn index_of(&self, name: &str) -> Option<usize> {
        self.fields.iter().position(|f| f.name == name)
    }

    pub fn field(&self, name: &str) -> Option<&'static Field> {
        let fields = self.fields;
        fields.iter().find(|f| f.name == name)
    }

    pub fn required_fields(&self) -> impl Iterator<Item = &'static Field> {
        let fields = self.fields;
        fields.iter().filter(|f| f.is_required())
    }
}
