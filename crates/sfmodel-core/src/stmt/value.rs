use crate::{Error, Result};

use chrono::NaiveDate;

/// A local attribute value.
///
/// This is what field parsing produces from a remote payload and what the
/// codec encodes back into one.
#[derive(Debug, Default, Clone, PartialEq)]
pub enum Value {
    /// Boolean value
    Bool(bool),

    /// Calendar date, `YYYY-MM-DD` on the remote side
    Date(NaiveDate),

    /// Double precision float
    F64(f64),

    /// Signed 64-bit integer
    I64(i64),

    /// Mapping or list passed through a plain field untouched
    Nested(serde_json::Value),

    /// Null value
    #[default]
    Null,

    /// String value
    String(String),
}

impl Value {
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Self::String(v) => Some(&**v),
            _ => None,
        }
    }

    /// Converts a raw remote value without any type coercion.
    ///
    /// Integral numbers become `I64`, other numbers `F64`; mappings and lists
    /// are kept as `Nested`.
    pub fn from_json(raw: &serde_json::Value) -> Self {
        use serde_json::Value as Json;

        match raw {
            Json::Null => Self::Null,
            Json::Bool(v) => Self::Bool(*v),
            Json::Number(n) => match n.as_i64() {
                Some(v) => Self::I64(v),
                None => n.as_f64().map(Self::F64).unwrap_or(Self::Null),
            },
            Json::String(v) => Self::String(v.clone()),
            nested => Self::Nested(nested.clone()),
        }
    }

    /// Converts into the raw remote representation.
    ///
    /// Dates are formatted as `YYYY-MM-DD`. Non-finite floats have no remote
    /// representation and fail.
    pub fn to_json(&self) -> Result<serde_json::Value> {
        use serde_json::Value as Json;

        Ok(match self {
            Self::Null => Json::Null,
            Self::Bool(v) => Json::Bool(*v),
            Self::I64(v) => Json::from(*v),
            Self::F64(v) => match serde_json::Number::from_f64(*v) {
                Some(n) => Json::Number(n),
                None => return Err(Error::coercion(self, "a finite number")),
            },
            Self::String(v) => Json::String(v.clone()),
            Self::Date(v) => Json::String(super::value_chrono::format_date(v)),
            Self::Nested(v) => v.clone(),
        })
    }
}

impl From<bool> for Value {
    fn from(src: bool) -> Self {
        Self::Bool(src)
    }
}

impl From<i32> for Value {
    fn from(src: i32) -> Self {
        Self::I64(src.into())
    }
}

impl From<i64> for Value {
    fn from(src: i64) -> Self {
        Self::I64(src)
    }
}

impl From<f64> for Value {
    fn from(src: f64) -> Self {
        Self::F64(src)
    }
}

impl From<String> for Value {
    fn from(src: String) -> Self {
        Self::String(src)
    }
}

impl From<&String> for Value {
    fn from(src: &String) -> Self {
        Self::String(src.clone())
    }
}

impl From<&str> for Value {
    fn from(src: &str) -> Self {
        Self::String(src.to_string())
    }
}

impl<T> From<Option<T>> for Value
where
    Value: From<T>,
{
    fn from(value: Option<T>) -> Self {
        match value {
            Some(value) => Self::from(value),
            None => Self::Null,
        }
    }
}

impl core::fmt::Display for Value {
    /// Renders the value the way it appears inside a quoted query literal.
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        match self {
            Self::Bool(v) => write!(f, "{v}"),
            Self::Date(v) => f.write_str(&super::value_chrono::format_date(v)),
            Self::F64(v) => write!(f, "{v}"),
            Self::I64(v) => write!(f, "{v}"),
            Self::Nested(v) => write!(f, "{v}"),
            Self::Null => f.write_str("NULL"),
            Self::String(v) => f.write_str(v),
        }
    }
}
