use crate::{
    domain::common::{RecipeForgeConfig, entities::app_errors::CoreError, services::Service},
    infrastructure::llm::{
        DeadlineLLMClient, FallbackLLMClient, GeminiLLMClient, Llm7LLMClient, RetryingLLMClient,
    },
};

pub type RecipeForgeLLMClient = DeadlineLLMClient<
    FallbackLLMClient<RetryingLLMClient<Llm7LLMClient>, RetryingLLMClient<GeminiLLMClient>>,
>;

pub type RecipeForgeService = Service<RecipeForgeLLMClient>;

/// Validate the configuration and wire the provider clients into a service.
///
/// The request timeout is the budget for the whole chain: retries and the
/// Gemini fallback all have to finish inside it.
pub fn create_service(config: RecipeForgeConfig) -> Result<RecipeForgeService, CoreError> {
    config.validate()?;

    let budget = config.llm.timeout;
    let primary = RetryingLLMClient::new(Llm7LLMClient::new(&config.llm)?, config.retry.clone())
        .with_deadline(budget);

    let secondary = match &config.gemini {
        Some(gemini) => {
            tracing::info!(model = %gemini.model, "Gemini fallback enabled");
            Some(RetryingLLMClient::new(
                GeminiLLMClient::new(gemini, config.llm.timeout)?,
                config.retry.clone(),
            )
            .with_deadline(budget))
        }
        None => None,
    };

    Ok(Service::new(DeadlineLLMClient::new(
        FallbackLLMClient::new(primary, secondary),
        budget,
    )))
}

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use super::*;
    use crate::domain::common::{
        DEFAULT_GEMINI_BASE_URL, DEFAULT_GEMINI_MODEL, DEFAULT_LLM7_BASE_URL,
        DEFAULT_LLM7_IMAGE_MODEL, DEFAULT_LLM7_TEXT_MODEL, GeminiConfig, LLMConfig, RetryConfig,
    };

    fn config(token: &str) -> RecipeForgeConfig {
        RecipeForgeConfig {
            llm: LLMConfig {
                token: token.to_string(),
                base_url: DEFAULT_LLM7_BASE_URL.to_string(),
                text_model: DEFAULT_LLM7_TEXT_MODEL.to_string(),
                image_model: DEFAULT_LLM7_IMAGE_MODEL.to_string(),
                timeout: Duration::from_secs(30),
            },
            retry: RetryConfig::default(),
            gemini: None,
        }
    }

    #[test]
    fn test_create_service_requires_a_token() {
        assert!(matches!(
            create_service(config("")),
            Err(CoreError::MissingConfiguration(_))
        ));
    }

    #[test]
    fn test_create_service_with_fallback() {
        let mut config = config("token");
        config.gemini = Some(GeminiConfig {
            api_key: "key".to_string(),
            model: DEFAULT_GEMINI_MODEL.to_string(),
            base_url: DEFAULT_GEMINI_BASE_URL.to_string(),
        });
        assert!(create_service(config).is_ok());
    }
}
