use crate::{Model, Record};

use sfmodel_core::{
    bail, err,
    schema::{ID, TYPE_ATTRIBUTE},
    stmt::Attributes,
    Result,
};

impl Model {
    /// Creates a record remotely and returns it with its new id.
    ///
    /// The returned record is decoded from what was sent plus the id, so
    /// field types and aliases apply as they do for fetched records.
    pub async fn try_create(&self, attributes: &Attributes) -> Result<Record> {
        let mut fields = self.encode(attributes)?;
        fields.insert(TYPE_ATTRIBUTE.to_string(), self.table().into());

        log::debug!("{}: create {fields:?}", self.table());

        let id = self
            .adapter()
            .create(self.table(), fields.clone())
            .await
            .map_err(|e| e.context(err!("{}.create()", self.table())))?;

        fields.insert(ID.to_string(), id.into());
        self.from_payload(&fields)
    }

    /// Like [`try_create`](Model::try_create), but reports any failure as
    /// `None`. The error is logged.
    pub async fn create(&self, attributes: &Attributes) -> Option<Record> {
        match self.try_create(attributes).await {
            Ok(record) => Some(record),
            Err(err) => {
                log::warn!("{err}");
                None
            }
        }
    }
}

impl Record {
    /// Pushes new attribute values remotely, then applies them locally.
    ///
    /// Returns `Ok(false)`, leaving the record untouched, when the adapter
    /// rejects the update (an [`update_failed`](crate::Error::update_failed)
    /// error or `false`). Other adapter errors are returned.
    pub async fn update_fields(&mut self, attributes: &Attributes) -> Result<bool> {
        let model = self.model().clone();
        let table = model.table();

        let Some(id) = self.id() else {
            bail!("{table}.update_fields(): record has no {ID}");
        };

        let mut fields = model.encode(attributes)?;
        fields.insert(ID.to_string(), id.into());
        fields.insert(TYPE_ATTRIBUTE.to_string(), table.into());

        log::debug!("{table}: update {fields:?}");

        match model.adapter().update(table, fields).await {
            Ok(true) => {
                self.assign(attributes);
                Ok(true)
            }
            Ok(false) => {
                log::warn!("{table}.update_fields(): adapter reported no update");
                Ok(false)
            }
            Err(e) if e.is_update_failed() => {
                log::warn!("{table}.update_fields(): {e}");
                Ok(false)
            }
            Err(e) => Err(e.context(err!("{table}.update_fields()"))),
        }
    }
}
