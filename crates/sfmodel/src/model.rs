mod builder;
pub use builder::Builder;

use crate::Record;

use sfmodel_core::{
    codec::{self, EncodePolicy},
    stmt::Attributes,
    Adapter, Payload, Result, Schema,
};
use sfmodel_soql::Serializer;

use std::{fmt, sync::Arc};

/// A declared model type: its schema, the adapter it talks to, and how it
/// writes queries.
///
/// Cloning is cheap; every clone (and every [`Record`] loaded through it)
/// shares the same frozen schema and adapter.
#[derive(Clone)]
pub struct Model {
    shared: Arc<Shared>,
}

struct Shared {
    schema: Schema,
    adapter: Arc<dyn Adapter>,
    serializer: Serializer,
}

impl Model {
    pub fn builder(table: impl Into<String>) -> Builder {
        Builder::new(table)
    }

    pub fn schema(&self) -> &Schema {
        &self.shared.schema
    }

    /// The remote table name.
    pub fn table(&self) -> &str {
        self.shared.schema.table()
    }

    pub fn adapter(&self) -> &Arc<dyn Adapter> {
        &self.shared.adapter
    }

    pub(crate) fn serializer(&self) -> &Serializer {
        &self.shared.serializer
    }

    /// A record with every attribute unset.
    pub fn new_record(&self) -> Record {
        Record::new(self.clone())
    }

    /// A record holding `attributes`. Names the schema does not declare are
    /// ignored.
    pub fn load(&self, attributes: &Attributes) -> Record {
        let mut record = self.new_record();
        record.assign(attributes);
        record
    }

    /// Decodes a remote payload into a record.
    pub fn from_payload(&self, payload: &Payload) -> Result<Record> {
        Ok(self.load(&self.decode(payload)?))
    }

    /// Decodes a remote payload into local attributes.
    pub fn decode(&self, payload: &Payload) -> Result<Attributes> {
        codec::decode(self.schema(), payload)
    }

    /// Encodes local attributes for the adapter. Alias and undeclared names
    /// are dropped.
    pub fn encode(&self, attributes: &Attributes) -> Result<Payload> {
        codec::encode(self.schema(), attributes, EncodePolicy::SkipUnknownAndAliases)
    }

    pub(crate) fn ptr_eq(&self, other: &Model) -> bool {
        Arc::ptr_eq(&self.shared, &other.shared)
    }
}

impl fmt::Debug for Model {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Model")
            .field("table", &self.table())
            .field("fields", &self.schema().len())
            .field("adapter", &self.shared.adapter)
            .field("flavor", &self.shared.serializer.flavor())
            .finish()
    }
}
