use std::time::Duration;

use crate::domain::common::entities::app_errors::CoreError;

pub mod entities;
pub mod services;

pub const DEFAULT_LLM7_BASE_URL: &str = "https://api.llm7.io/v1";
pub const DEFAULT_LLM7_TEXT_MODEL: &str = "open-mixtral-8x22b";
pub const DEFAULT_LLM7_IMAGE_MODEL: &str = "gpt-4o-mini-2024-07-18";
pub const DEFAULT_GEMINI_BASE_URL: &str = "https://generativelanguage.googleapis.com/v1beta";
pub const DEFAULT_GEMINI_MODEL: &str = "gemini-1.5-flash";

/// Hosting platforms kill invocations after a minute.
pub const MAX_REQUEST_TIMEOUT_SECS: u64 = 60;
pub const MAX_ATTEMPTS_CEILING: u32 = 5;

#[derive(Clone, Debug)]
pub struct RecipeForgeConfig {
    pub llm: LLMConfig,
    pub retry: RetryConfig,
    pub gemini: Option<GeminiConfig>,
}

#[derive(Clone, Debug)]
pub struct LLMConfig {
    pub token: String,
    pub base_url: String,
    pub text_model: String,
    pub image_model: String,
    pub timeout: Duration,
}

#[derive(Clone, Debug)]
pub struct RetryConfig {
    pub max_attempts: u32,
    pub base_delay: Duration,
}

impl Default for RetryConfig {
    fn default() -> Self {
        Self {
            max_attempts: 2,
            base_delay: Duration::from_millis(500),
        }
    }
}

#[derive(Clone, Debug)]
pub struct GeminiConfig {
    pub api_key: String,
    pub model: String,
    pub base_url: String,
}

impl RecipeForgeConfig {
    pub fn validate(&self) -> Result<(), CoreError> {
        if self.llm.token.trim().is_empty() {
            return Err(CoreError::MissingConfiguration(
                "LLM7_TOKEN must be set".to_string(),
            ));
        }

        let timeout = self.llm.timeout.as_secs();
        if timeout == 0 || timeout > MAX_REQUEST_TIMEOUT_SECS {
            return Err(CoreError::MissingConfiguration(format!(
                "request timeout must be between 1 and {} seconds",
                MAX_REQUEST_TIMEOUT_SECS
            )));
        }

        if self.retry.max_attempts == 0 || self.retry.max_attempts > MAX_ATTEMPTS_CEILING {
            return Err(CoreError::MissingConfiguration(format!(
                "max attempts must be between 1 and {}",
                MAX_ATTEMPTS_CEILING
            )));
        }

        if let Some(gemini) = &self.gemini {
            if gemini.api_key.trim().is_empty() {
                return Err(CoreError::MissingConfiguration(
                    "GEMINI_API_KEY is set but empty".to_string(),
                ));
            }
        }

        Ok(())
    }
}
