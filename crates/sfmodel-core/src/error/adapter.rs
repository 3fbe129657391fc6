use super::Error;

/// Error raised by an adapter that is neither a recognised create nor update
/// failure: transport errors, authentication, malformed responses, ...
#[derive(Debug)]
pub(super) struct AdapterError {
    pub(super) inner: Box<dyn std::error::Error + Send + Sync>,
}

impl std::error::Error for AdapterError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        Some(self.inner.as_ref())
    }
}

impl core::fmt::Display for AdapterError {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        // Display the error and walk its source chain
        core::fmt::Display::fmt(&self.inner, f)?;
        let mut source = self.inner.source();
        while let Some(err) = source {
            write!(f, ": {}", err)?;
            source = err.source();
        }
        Ok(())
    }
}

impl Error {
    /// Creates an error from an adapter failure.
    ///
    /// This is the preferred way to convert transport-specific errors (HTTP
    /// clients, SOAP toolkits, ...) into sfmodel errors.
    pub fn adapter(err: impl std::error::Error + Send + Sync + 'static) -> Error {
        Error::from(super::ErrorKind::Adapter(AdapterError {
            inner: Box::new(err),
        }))
    }

    /// Returns `true` if this error is, or was caused by, an adapter error.
    pub fn is_adapter(&self) -> bool {
        self.any(|kind| matches!(kind, super::ErrorKind::Adapter(_)))
    }
}
