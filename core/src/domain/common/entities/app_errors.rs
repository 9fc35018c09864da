use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CoreError {
    #[error("Invalid {field}: {message}")]
    Validation { field: String, message: String },

    #[error("Missing configuration: {0}")]
    MissingConfiguration(String),

    #[error("Upstream provider rejected the credentials")]
    UpstreamAuthError,

    #[error("Upstream provider rate limit exceeded")]
    UpstreamRateLimitError,

    #[error("Upstream provider timed out")]
    UpstreamTimeoutError,

    #[error("Malformed upstream response: {0}")]
    UpstreamFormatError(String),

    #[error("External service error: {0}")]
    ExternalServiceError(String),

    #[error("Internal server error")]
    InternalServerError,
}

impl CoreError {
    pub fn validation(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self::Validation {
            field: field.into(),
            message: message.into(),
        }
    }

    /// Errors worth another attempt against the same provider.
    pub fn is_transient(&self) -> bool {
        matches!(
            self,
            Self::UpstreamRateLimitError | Self::UpstreamTimeoutError
        )
    }

    /// Errors caused by the upstream provider rather than by the caller.
    pub fn is_upstream(&self) -> bool {
        matches!(
            self,
            Self::UpstreamAuthError
                | Self::UpstreamRateLimitError
                | Self::UpstreamTimeoutError
                | Self::UpstreamFormatError(_)
                | Self::ExternalServiceError(_)
        )
    }
}
