#[macro_use]
mod macros;

pub mod adapter;
pub use adapter::Adapter;

pub mod codec;
pub use codec::EncodePolicy;

mod error;
pub use error::{Error, IntoError};

pub mod payload;
pub use payload::Payload;

pub mod schema;
pub use schema::Schema;

pub mod stmt;

/// A Result type alias that uses sfmodel's [`Error`] type.
pub type Result<T> = core::result::Result<T, Error>;

pub use async_trait::async_trait;
