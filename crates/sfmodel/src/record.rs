use crate::Model;

use sfmodel_core::{
    schema::ID,
    stmt::{Attributes, Value},
};

use std::fmt;

/// One record of a [`Model`].
///
/// Holds one slot per schema field, in declaration order. Unset attributes
/// are `Null`.
#[derive(Clone)]
pub struct Record {
    model: Model,
    values: Vec<Value>,
}

impl Record {
    pub(crate) fn new(model: Model) -> Record {
        let values = vec![Value::Null; model.schema().len()];
        Record { model, values }
    }

    pub fn model(&self) -> &Model {
        &self.model
    }

    /// The value of attribute `name`, or `None` when the schema does not
    /// declare it.
    pub fn get(&self, name: &str) -> Option<&Value> {
        let index = self.model.schema().index_of(name)?;
        Some(&self.values[index])
    }

    /// The remote id, once the record has one.
    pub fn id(&self) -> Option<&str> {
        self.get(ID).and_then(Value::as_str)
    }

    /// Every declared attribute with its current value.
    pub fn attributes(&self) -> Attributes {
        self.model
            .schema()
            .fields()
            .zip(&self.values)
            .map(|(field, value)| (field.local_name().to_string(), value.clone()))
            .collect()
    }

    /// Writes `attributes` into their slots. Undeclared names are skipped.
    pub(crate) fn assign(&mut self, attributes: &Attributes) {
        let schema = self.model.schema();

        for (name, value) in attributes {
            match schema.index_of(name) {
                Some(index) => self.values[index] = value.clone(),
                None => log::trace!("{}: ignoring undeclared attribute `{name}`", schema.table()),
            }
        }
    }
}

impl PartialEq for Record {
    fn eq(&self, other: &Record) -> bool {
        self.model.ptr_eq(&other.model) && self.values == other.values
    }
}

impl fmt::Debug for Record {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut s = f.debug_struct(self.model.table());
        for (field, value) in self.model.schema().fields().zip(&self.values) {
            s.field(field.local_name(), value);
        }
        s.finish()
    }
}
