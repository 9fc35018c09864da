use crate::domain::{
    common::entities::app_errors::CoreError, image::EncodedImage, recipe::ports::LLMClient,
};

/// Tries the primary provider and, when it fails with an upstream error,
/// the secondary one if configured. The primary error is returned when the
/// secondary fails too.
#[derive(Debug, Clone)]
pub struct FallbackLLMClient<P, S> {
    primary: P,
    secondary: Option<S>,
}

impl<P, S> FallbackLLMClient<P, S>
where
    P: LLMClient,
    S: LLMClient,
{
    pub fn new(primary: P, secondary: Option<S>) -> Self {
        Self { primary, secondary }
    }
}

impl<P, S> LLMClient for FallbackLLMClient<P, S>
where
    P: LLMClient,
    S: LLMClient,
{
    async fn generate(
        &self,
        prompt: String,
        image: Option<EncodedImage>,
    ) -> Result<String, CoreError> {
        let secondary = match &self.secondary {
            Some(secondary) => secondary,
            None => return self.primary.generate(prompt, image).await,
        };

        match self.primary.generate(prompt.clone(), image.clone()).await {
            Ok(reply) => Ok(reply),
            Err(primary_error) if primary_error.is_upstream() => {
                tracing::warn!("Primary provider failed, trying fallback: {}", primary_error);
                secondary.generate(prompt, image).await.map_err(|e| {
                    tracing::error!("Fallback provider failed too: {}", e);
                    primary_error
                })
            }
            Err(e) => Err(e),
        }
    }
}
