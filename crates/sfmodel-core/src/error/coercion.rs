use super::Error;

/// Error when a value cannot be converted to a field's declared type.
#[derive(Debug)]
pub(super) struct CoercionError {
    value: Box<str>,
    to_type: &'static str,
}

impl std::error::Error for CoercionError {}

impl core::fmt::Display for CoercionError {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        write!(f, "cannot coerce {} to {}", self.value, self.to_type)
    }
}

impl Error {
    /// Creates a coercion error for `value`, which could not be turned into
    /// `to_type`.
    pub fn coercion(value: &impl core::fmt::Debug, to_type: &'static str) -> Error {
        Error::from(super::ErrorKind::Coercion(CoercionError {
            value: format!("{value:?}").into(),
            to_type,
        }))
    }

    /// Returns `true` if this error is a coercion error.
    pub fn is_coercion(&self) -> bool {
        self.any(|kind| matches!(kind, super::ErrorKind::Coercion(_)))
    }
}
