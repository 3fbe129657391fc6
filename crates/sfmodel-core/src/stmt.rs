mod value;
pub use value::Value;

pub(crate) mod value_chrono;

use indexmap::IndexMap;

/// Local attribute mapping: local field name to parsed value, in insertion
/// order.
pub type Attributes = IndexMap<String, Value>;
