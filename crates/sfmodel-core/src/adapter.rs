use crate::{async_trait, payload::Payload, Result};

use std::fmt::Debug;

/// The remote store's query/command interface.
///
/// Implementations own transport, authentication and retries. Each model
/// operation makes at most one call.
#[async_trait]
pub trait Adapter: Debug + Send + Sync + 'static {
    /// Runs a SOQL query. Returns an empty list when nothing matches.
    async fn query(&self, soql: &str) -> Result<Vec<Payload>>;

    /// Creates a record and returns its remote id.
    ///
    /// Rejections should be reported with [`Error::create_failed`](crate::Error::create_failed).
    async fn create(&self, table: &str, fields: Payload) -> Result<String>;

    /// Updates the record identified by the `Id` entry of `fields`.
    ///
    /// Rejections should be reported with
    /// [`Error::update_failed`](crate::Error::update_failed) or `Ok(false)`.
    async fn update(&self, table: &str, fields: Payload) -> Result<bool>;
}
