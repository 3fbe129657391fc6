use super::Error;

/// The adapter's named "failed update" condition.
///
/// Adapters return this when the remote store rejects an update (validation
/// rules, locked rows, missing permissions). `Record::update_fields` treats it
/// as a recoverable outcome and reports `false`.
#[derive(Debug)]
pub(super) struct UpdateFailedError {
    code: Box<str>,
    message: Box<str>,
}

impl std::error::Error for UpdateFailedError {}

impl core::fmt::Display for UpdateFailedError {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        write!(f, "update failed [{}]: {}", self.code, self.message)
    }
}

impl Error {
    /// Creates an update failure error with the remote error code.
    pub fn update_failed(code: impl Into<String>, message: impl Into<String>) -> Error {
        Error::from(super::ErrorKind::UpdateFailed(UpdateFailedError {
            code: code.into().into(),
            message: message.into().into(),
        }))
    }

    /// Returns `true` if this error is, or was caused by, an update failure.
    pub fn is_update_failed(&self) -> bool {
        self.any(|kind| matches!(kind, super::ErrorKind::UpdateFailed(_)))
    }

    /// The remote error code of an update failure, if this is one.
    pub fn update_failed_code(&self) -> Option<&str> {
        self.chain().find_map(|err| match err.kind() {
            super::ErrorKind::UpdateFailed(failed) => Some(&*failed.code),
            _ => None,
        })
    }
}
