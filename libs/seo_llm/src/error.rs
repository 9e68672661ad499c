use thiserror::Error;

/// Failures of a single chat completion. Both kinds are recoverable: the
/// caller decides how to surface them.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum LlmError {
    /// Transport, authentication, quota or any other error reported by the provider.
    #[error("{0}")]
    Request(String),

    /// The provider answered, but the answer carried no usable text.
    #[error("{0}")]
    MalformedResponse(String),
}

impl LlmError {
    pub fn request(message: impl Into<String>) -> Self {
        Self::Request(message.into())
    }

    pub fn malformed(message: impl Into<String>) -> Self {
        Self::MalformedResponse(message.into())
    }
}
