use std::time::Duration;

use crate::domain::{
    common::entities::app_errors::CoreError, image::EncodedImage, recipe::ports::LLMClient,
};

/// Bounds the total time spent on one generation, retries and fallback
/// included. Expiry is reported as [`CoreError::UpstreamTimeoutError`].
#[derive(Debug, Clone)]
pub struct DeadlineLLMClient<C> {
    inner: C,
    budget: Duration,
}

impl<C> DeadlineLLMClient<C>
where
    C: LLMClient,
{
    pub fn new(inner: C, budget: Duration) -> Self {
        Self { inner, budget }
    }
}

impl<C> LLMClient for DeadlineLLMClient<C>
where
    C: LLMClient,
{
    async fn generate(
        &self,
        prompt: String,
        image: Option<EncodedImage>,
    ) -> Result<String, CoreError> {
        match tokio::time::timeout(self.budget, self.inner.generate(prompt, image)).await {
            Ok(result) => result,
            Err(_) => {
                tracing::warn!(
                    budget_secs = self.budget.as_secs(),
                    "Generation exceeded its time budget"
                );
                Err(CoreError::UpstreamTimeoutError)
            }
        }
    }
}
