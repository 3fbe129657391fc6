use crate::{Model, Record};

use sfmodel_core::{err, schema::ID, Result};
use sfmodel_soql::{Filter, Select, Statement};

impl Model {
    /// Builds the select statement for `filter`.
    pub fn select(&self, filter: impl Into<Filter>) -> Select {
        Select::new(self.schema(), filter.into())
    }

    /// The SOQL string a finder sends for `filter`.
    pub fn query_string(&self, filter: impl Into<Filter>) -> String {
        let stmt = Statement::from(self.select(filter));
        self.serializer().serialize(&stmt)
    }

    /// Returns the record with the given remote id, if there is one.
    pub async fn find(&self, id: &str) -> Result<Option<Record>> {
        self.first(Filter::eq(ID, id)).await
    }

    /// Returns the first record matching `filter`.
    pub async fn first(&self, filter: impl Into<Filter>) -> Result<Option<Record>> {
        Ok(self.filter(filter).await?.into_iter().next())
    }

    /// Returns every record matching `filter`: either attribute equalities or
    /// a raw clause.
    pub async fn filter(&self, filter: impl Into<Filter>) -> Result<Vec<Record>> {
        let soql = self.query_string(filter);

        log::debug!("{}: query `{soql}`", self.table());

        let payloads = self.adapter().query(&soql).await?;

        payloads
            .iter()
            .map(|payload| {
                self.from_payload(payload)
                    .map_err(|e| e.context(err!("{}: decoding query result", self.table())))
            })
            .collect()
    }

    /// Returns every record of the table.
    pub async fn all(&self) -> Result<Vec<Record>> {
        self.filter(Filter::all()).await
    }
}
