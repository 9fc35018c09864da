use reqwest::StatusCode;

use crate::domain::common::entities::app_errors::CoreError;

pub mod deadline;
pub mod fallback;
pub mod gemini_client;
pub mod llm7_client;
pub mod retry;

pub use deadline::DeadlineLLMClient;
pub use fallback::FallbackLLMClient;
pub use gemini_client::GeminiLLMClient;
pub use llm7_client::Llm7LLMClient;
pub use retry::RetryingLLMClient;

/// Map a non-2xx provider reply onto the upstream error taxonomy.
pub(crate) fn status_to_error(provider: &str, status: StatusCode, body: &str) -> CoreError {
    tracing::error!(provider, status = status.as_u16(), body, "Provider returned an error");

    match status {
        StatusCode::UNAUTHORIZED | StatusCode::FORBIDDEN => CoreError::UpstreamAuthError,
        StatusCode::TOO_MANY_REQUESTS => CoreError::UpstreamRateLimitError,
        StatusCode::REQUEST_TIMEOUT | StatusCode::GATEWAY_TIMEOUT => {
            CoreError::UpstreamTimeoutError
        }
        _ if mentions_any(body, &["quota"]) => CoreError::UpstreamRateLimitError,
        _ if mentions_any(body, &["api key not valid", "api_key_invalid"]) => {
            CoreError::UpstreamAuthError
        }
        _ => CoreError::ExternalServiceError(format!("{} returned {}", provider, status)),
    }
}

fn mentions_any(body: &str, needles: &[&str]) -> bool {
    let body = body.to_lowercase();
    needles.iter().any(|needle| body.contains(needle))
}

/// Map a transport failure (no HTTP reply) onto the upstream error taxonomy.
pub(crate) fn transport_error(provider: &str, error: reqwest::Error) -> CoreError {
    if error.is_timeout() {
        tracing::warn!(provider, "Provider request timed out");
        return CoreError::UpstreamTimeoutError;
    }

    tracing::error!(provider, "Provider request failed: {}", error);
    if error.is_decode() {
        CoreError::UpstreamFormatError(format!("{} sent an undecodable body", provider))
    } else {
        CoreError::ExternalServiceError(format!("{} is unreachable", provider))
    }
}
