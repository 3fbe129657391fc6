use super::{Model, Shared};

use sfmodel_core::{
    schema::{self, FieldOptions},
    Adapter, Error, Result,
};
use sfmodel_soql::{Flavor, Serializer};

use std::sync::Arc;

/// Declares a [`Model`].
///
/// Every model gets an `Id` field first. A table name and an adapter are
/// required.
pub struct Builder {
    /// Field declarations
    schema: schema::Builder,

    adapter: Option<Arc<dyn Adapter>>,

    flavor: Flavor,
}

impl Builder {
    pub(super) fn new(table: impl Into<String>) -> Self {
        Builder {
            schema: schema::Builder::new(table),
            adapter: None,
            flavor: Flavor::default(),
        }
    }

    /// Sets the adapter the model sends its queries and commands to.
    pub fn adapter(&mut self, adapter: Arc<dyn Adapter>) -> &mut Self {
        self.adapter = Some(adapter);
        self
    }

    /// Declares a plain field.
    pub fn field(&mut self, name: impl Into<String>) -> &mut Self {
        self.schema.field(name);
        self
    }

    /// Declares several plain fields.
    pub fn fields<I>(&mut self, names: I) -> &mut Self
    where
        I: IntoIterator,
        I::Item: Into<String>,
    {
        self.schema.fields(names);
        self
    }

    /// Declares a field read from a remote path and/or with a value type.
    pub fn field_with(
        &mut self,
        name: impl Into<String>,
        opts: impl Into<FieldOptions>,
    ) -> &mut Self {
        self.schema.field_with(name, opts);
        self
    }

    /// Sets how quoted literals are written in generated queries.
    pub fn flavor(&mut self, flavor: Flavor) -> &mut Self {
        self.flavor = flavor;
        self
    }

    pub fn build(&self) -> Result<Model> {
        let schema = self.schema.build()?;

        let Some(adapter) = self.adapter.clone() else {
            return Err(Error::invalid_schema("no adapter configured").context(schema.table()));
        };

        Ok(Model {
            shared: Arc::new(Shared {
                schema,
                adapter,
                serializer: Serializer::new(self.flavor),
            }),
        })
    }
}
