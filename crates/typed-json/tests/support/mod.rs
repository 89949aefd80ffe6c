#![allow(dead_code)]

use typed_json::{DecodeError, Field, Model, Record, Schema};

const TEST_MODEL_FIELDS: &[Field] = &[
    Field::string("foo"),
    Field::int64("baz"),
    Field::optional_string("opt"),
    Field::optional_int64("bomb"),
];

pub static TEST_MODEL: Schema = Schema::new(TEST_MODEL_FIELDS);

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TestModel {
    pub foo: String,
    pub baz: i64,
    pub opt: Option<String>,
    pub bomb: Option<i64>,
}

impl TestModel {
    pub fn new(foo: &str, baz: i64) -> Self {
        Self {
            foo: foo.to_string(),
            baz,
            opt: None,
            bomb: None,
        }
    }
}

impl Model for TestModel {
    fn schema() -> &'static Schema {
        &TEST_MODEL
    }

    fn from_record(mut record: Record) -> Result<Self, DecodeError> {
        Ok(Self {
            foo: record.take_string("foo")?,
            baz: record.take_i64("baz")?,
            opt: record.take_opt_string("opt")?,
            bomb: record.take_opt_i64("bomb")?,
        })
    }

    fn to_record(&self) -> Record {
        Record::new(&TEST_MODEL)
            .with("foo", self.foo.as_str())
            .with("baz", self.baz)
            .with("opt", self.opt.clone())
            .with("bomb", self.bomb)
    }
}
