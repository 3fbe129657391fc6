//! Maps local records onto remote CRM tables.
//!
//! A [`Model`] is declared once with a table name, an [`Adapter`] and a set of
//! fields. It then finds records with generated SOQL, and creates and updates
//! them through the adapter.
//!
//! ```no_run
//! # async fn example(adapter: std::sync::Arc<dyn sfmodel::Adapter>) -> sfmodel::Result<()> {
//! use sfmodel::{schema::FieldOptions, schema::FieldTy, Model};
//!
//! let leads = Model::builder("Lead")
//!     .adapter(adapter)
//!     .fields(["ConvertedAccountId", "Street"])
//!     .field_with("owner_email", FieldOptions::new().remote("Owner.Email"))
//!     .field_with("Date_saisie_CB__c", FieldTy::Date)
//!     .build()?;
//!
//! if let Some(lead) = leads.find("00Q000000000001").await? {
//!     println!("{:?}", lead.get("owner_email"));
//! }
//! # Ok(())
//! # }
//! ```

mod finder;

pub mod model;
pub use model::Model;

mod persistence;

mod record;
pub use record::Record;

pub use sfmodel_core::{
    async_trait, attrs, codec, payload, schema, Adapter, EncodePolicy, Error, Payload, Result,
};
pub use sfmodel_core::stmt::{Attributes, Value};
pub use sfmodel_soql::{Filter, Flavor};
