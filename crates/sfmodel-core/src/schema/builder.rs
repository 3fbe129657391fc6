use super::{Field, FieldOptions, FieldTy, Schema, ID};
use crate::{payload::PATH_SEPARATOR, Error, Result};

use indexmap::IndexMap;

/// Declares the fields of a model type.
///
/// Every builder starts with an `Id` field of type [`FieldTy::Id`].
/// Declaring a name twice replaces the earlier declaration in place.
#[derive(Debug, Clone)]
pub struct Builder {
    table: String,
    fields: IndexMap<String, Field>,
}

impl Builder {
    pub fn new(table: impl Into<String>) -> Self {
        let mut builder = Builder {
            table: table.into(),
            fields: IndexMap::new(),
        };
        builder.field_with(ID, FieldTy::Id);
        builder
    }

    /// Declares a plain field read from the remote field of the same name.
    pub fn field(&mut self, name: impl Into<String>) -> &mut Self {
        self.field_with(name, FieldOptions::new())
    }

    /// Declares several plain fields.
    pub fn fields<I>(&mut self, names: I) -> &mut Self
    where
        I: IntoIterator,
        I::Item: Into<String>,
    {
        for name in names {
            self.field(name);
        }
        self
    }

    /// Declares a field with options: a remote path and/or a value type.
    pub fn field_with(
        &mut self,
        name: impl Into<String>,
        opts: impl Into<FieldOptions>,
    ) -> &mut Self {
        let field = Field::new(name, opts.into());
        self.fields.insert(field.name.local.clone(), field);
        self
    }

    /// Validates the declaration and freezes it into a [`Schema`].
    pub fn build(&self) -> Result<Schema> {
        if self.table.is_empty() {
            return Err(Error::invalid_schema("table name is empty"));
        }

        for field in self.fields.values() {
            self.verify(field)
                .map_err(|err| err.context(format!("{}.{}", self.table, field.name.local)))?;
        }

        Ok(Schema {
            table: self.table.clone(),
            fields: self.fields.clone(),
        })
    }

    fn verify(&self, field: &Field) -> Result<()> {
        if field.name.local.is_empty() {
            return Err(Error::invalid_schema("field name is empty"));
        }

        if let Some(remote) = &field.name.remote {
            if remote.split(PATH_SEPARATOR).any(str::is_empty) {
                return Err(Error::invalid_schema(format!(
                    "remote path `{remote}` has an empty segment"
                )));
            }
        }

        Ok(())
    }
}
