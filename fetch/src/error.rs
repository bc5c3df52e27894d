use std::fmt::Display;

/// A failed operation, carrying the cause's human-readable message.
///
/// This is the only error kind the controller knows about. Whether the cause
/// was the network, decoding, or an error payload is for the code that built
/// the operation to decide.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("{message}")]
pub struct FetchError {
    message: String,
}

impl FetchError {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }

    /// Capture any error by its `Display` output.
    pub fn from_error(e: impl Display) -> Self {
        Self::new(e.to_string())
    }

    pub fn message(&self) -> &str {
        &self.message
    }
}

impl From<String> for FetchError {
    fn from(message: String) -> Self {
        Self::new(message)
    }
}

impl From<&str> for FetchError {
    fn from(message: &str) -> Self {
        Self::new(message)
    }
}

impl From<payloads::ClientError> for FetchError {
    fn from(e: payloads::ClientError) -> Self {
        Self::from_error(e)
    }
}
