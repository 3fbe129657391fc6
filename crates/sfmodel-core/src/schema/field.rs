mod coerce;

use super::{FieldOptions, FieldTy};
use crate::{
    payload::{self, Payload},
    stmt::{value_chrono, Value},
    Error, Result,
};

/// One model attribute: its local name, where it lives remotely, and how its
/// values are coerced.
#[derive(Debug, Clone, PartialEq)]
pub struct Field {
    /// The field name
    pub name: FieldName,

    /// Value coercion
    pub ty: FieldTy,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldName {
    /// Name of the attribute on local records.
    pub local: String,

    /// Remote name or dotted path, when it differs from `local`.
    pub remote: Option<String>,
}

impl FieldName {
    pub fn remote(&self) -> &str {
        self.remote.as_ref().unwrap_or(&self.local)
    }
}

impl Field {
    pub fn new(local: impl Into<String>, opts: FieldOptions) -> Self {
        let local = local.into();
        let remote = opts.from.filter(|from| *from != local);

        Field {
            name: FieldName { local, remote },
            ty: opts.ty,
        }
    }

    pub fn local_name(&self) -> &str {
        &self.name.local
    }

    pub fn remote_name(&self) -> &str {
        self.name.remote()
    }

    pub fn ty(&self) -> FieldTy {
        self.ty
    }

    /// True when the field is read from a remote name other than its local
    /// one. Alias fields are read-only projections and are never encoded.
    pub fn is_alias(&self) -> bool {
        self.name.remote.is_some()
    }

    /// Parses a raw remote value into its local representation.
    ///
    /// Dates are strict: anything but a `YYYY-MM-DD` string fails. Numbers are
    /// permissive: strings are read on their leading numeric prefix, so
    /// `"12 units"` is 12 and `"n/a"` is 0.
    pub fn parse(&self, raw: &serde_json::Value) -> Result<Value> {
        use serde_json::Value as Json;

        if raw.is_null() {
            return Ok(Value::Null);
        }

        match self.ty {
            FieldTy::Plain | FieldTy::Id => Ok(Value::from_json(raw)),
            FieldTy::Date => raw
                .as_str()
                .and_then(value_chrono::parse_date)
                .map(Value::Date)
                .ok_or_else(|| self.coercion_error(raw)),
            FieldTy::Float => match raw {
                Json::String(src) => Ok(Value::F64(coerce::float_prefix(src))),
                Json::Number(n) => Ok(Value::F64(n.as_f64().unwrap_or_default())),
                _ => Err(self.coercion_error(raw)),
            },
            FieldTy::Integer => match raw {
                Json::String(src) => coerce::integer_prefix(src)
                    .map(Value::I64)
                    .ok_or_else(|| self.coercion_error(raw)),
                Json::Number(n) => Ok(Value::I64(match n.as_i64() {
                    Some(v) => v,
                    None => n.as_f64().unwrap_or_default() as i64,
                })),
                _ => Err(self.coercion_error(raw)),
            },
        }
    }

    /// Encodes a local value into its raw remote representation.
    pub fn encode(&self, value: &Value) -> Result<serde_json::Value> {
        match (self.ty, value) {
            (FieldTy::Date, Value::Date(_) | Value::Null) => value.to_json(),
            (FieldTy::Date, _) => Err(Error::coercion(value, self.ty.name())),
            _ => value.to_json(),
        }
    }

    /// The value an alias path resolves to inside a nested payload.
    ///
    /// `None` unless the field is an alias with a dotted remote path that
    /// resolves to a non-null value.
    pub fn is_alias_of<'a>(&self, nested: &'a Payload) -> Option<&'a serde_json::Value> {
        let path = self.name.remote.as_deref()?;

        if !path.contains(payload::PATH_SEPARATOR) {
            return None;
        }

        payload::fetch_path(nested, path)
    }

    /// Finds and parses this field's value in a remote payload.
    ///
    /// The remote name is looked up as a literal key first (dotted keys
    /// included), then as a nested path.
    pub fn find_value_in(&self, payload: &Payload) -> Result<Option<Value>> {
        let remote = self.remote_name();

        payload
            .get(remote)
            .filter(|raw| !raw.is_null())
            .or_else(|| payload::fetch_path(payload, remote))
            .map(|raw| self.parse(raw))
            .transpose()
    }

    fn coercion_error(&self, raw: &serde_json::Value) -> Error {
        Error::coercion(raw, self.ty.name()).context(Error::from_args(format_args!(
            "field `{}`",
            self.name.local
        )))
    }
}
