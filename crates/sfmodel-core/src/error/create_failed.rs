use super::Error;

/// Error when the adapter refuses to create a record.
#[derive(Debug)]
pub(super) struct CreateFailedError {
    message: Box<str>,
}

impl std::error::Error for CreateFailedError {}

impl core::fmt::Display for CreateFailedError {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        write!(f, "create failed: {}", self.message)
    }
}

impl Error {
    /// Creates a create failure error.
    pub fn create_failed(message: impl Into<String>) -> Error {
        Error::from(super::ErrorKind::CreateFailed(CreateFailedError {
            message: message.into().into(),
        }))
    }

    /// Returns `true` if this error is, or was caused by, a create failure.
    pub fn is_create_failed(&self) -> bool {
        self.any(|kind| matches!(kind, super::ErrorKind::CreateFailed(_)))
    }
}
