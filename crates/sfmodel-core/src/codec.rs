//! Conversion between remote payloads and local attribute mappings.

use crate::{
    payload::Payload,
    schema::Schema,
    stmt::{Attributes, Value},
    Result,
};

/// What [`encode`] does with attributes it cannot write back.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub enum EncodePolicy {
    /// Drop names that are not declared on the schema, and alias fields.
    ///
    /// Alias fields are read-only projections of nested remote data, so they
    /// have no remote column to write to. Unknown names are dropped rather
    /// than rejected so callers may pass mappings carrying extra keys.
    #[default]
    SkipUnknownAndAliases,
}

/// Decodes a remote payload into local attributes.
///
/// Fields are visited in declaration order and each one pulls its own value
/// out of the payload, so the result is ordered like the schema. Fields
/// missing from the payload (or null there) are omitted; payload keys no
/// field claims are ignored.
pub fn decode(schema: &Schema, payload: &Payload) -> Result<Attributes> {
    let mut attributes = Attributes::with_capacity(schema.len());

    for field in schema.fields() {
        if let Some(value) = field.find_value_in(payload)? {
            attributes.insert(field.local_name().to_string(), value);
        }
    }

    Ok(attributes)
}

/// Encodes local attributes into a remote payload, following `policy`.
pub fn encode(schema: &Schema, attributes: &Attributes, policy: EncodePolicy) -> Result<Payload> {
    let mut payload = Payload::new();

    for (name, value) in attributes {
        if let Some((remote, raw)) = encode_attribute(schema, name, value, policy)? {
            payload.insert(remote.to_string(), raw);
        }
    }

    Ok(payload)
}

fn encode_attribute<'a>(
    schema: &'a Schema,
    name: &str,
    value: &Value,
    policy: EncodePolicy,
) -> Result<Option<(&'a str, serde_json::Value)>> {
    match policy {
        EncodePolicy::SkipUnknownAndAliases => {
            let Some(field) = schema.field(name) else {
                log::trace!("{}: dropping unknown attribute `{name}`", schema.table());
                return Ok(None);
            };

            if field.is_alias() {
                log::trace!(
                    "{}: dropping alias attribute `{name}` (from `{}`)",
                    schema.table(),
                    field.remote_name()
                );
                return Ok(None);
            }

            Ok(Some((field.remote_name(), field.encode(value)?)))
        }
    }
}
