//! Remote payloads: the raw records an adapter returns and accepts.

/// A raw remote record.
///
/// Keys are remote field names. A key may be a literal dotted name
/// (`"Owner.Email"`) or the value may hold a nested mapping
/// (`{"Owner": {"Email": ..}}`); both forms are resolved by
/// [`Field::find_value_in`](crate::schema::Field::find_value_in).
pub type Payload = serde_json::Map<String, serde_json::Value>;

/// Separator between segments of a nested remote path.
pub const PATH_SEPARATOR: char = '.';

/// Resolves a dotted `path` through nested mappings in `payload`.
///
/// Returns `None` when a segment is missing, when a non-mapping value is hit
/// before the last segment, or when the resolved value is null.
pub fn fetch_path<'a>(payload: &'a Payload, path: &str) -> Option<&'a serde_json::Value> {
    let mut segments = path.split(PATH_SEPARATOR);
    let mut value = payload.get(segments.next()?)?;

    for segment in segments {
        value = value.as_object()?.get(segment)?;
    }

    (!value.is_null()).then_some(value)
}
