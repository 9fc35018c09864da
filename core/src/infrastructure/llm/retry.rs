use std::time::Duration;

use rand::Rng;
use tokio::time::Instant;

use crate::domain::{
    common::{RetryConfig, entities::app_errors::CoreError},
    image::EncodedImage,
    recipe::ports::LLMClient,
};

/// Retries transient provider failures (rate limits and timeouts) with
/// exponential backoff. Every other error is returned immediately.
///
/// With a deadline set, a retry whose backoff would end past the deadline is
/// skipped and the last error returned.
#[derive(Debug, Clone)]
pub struct RetryingLLMClient<C> {
    inner: C,
    config: RetryConfig,
    deadline: Option<Duration>,
}

impl<C> RetryingLLMClient<C>
where
    C: LLMClient,
{
    pub fn new(inner: C, config: RetryConfig) -> Self {
        Self {
            inner,
            config,
            deadline: None,
        }
    }

    pub fn with_deadline(mut self, deadline: Duration) -> Self {
        self.deadline = Some(deadline);
        self
    }

    fn fits_before_deadline(&self, started: Instant, delay: Duration) -> bool {
        self.deadline
            .is_none_or(|deadline| started.elapsed() + delay < deadline)
    }

    fn backoff(&self, attempt: u32) -> Duration {
        let base = self.config.base_delay.as_millis() as u64;
        let exponential = base.saturating_mul(1u64 << (attempt - 1).min(10));
        let jitter = if base == 0 {
            0
        } else {
            rand::thread_rng().gen_range(0..=base / 4)
        };
        Duration::from_millis(exponential.saturating_add(jitter))
    }
}

impl<C> LLMClient for RetryingLLMClient<C>
where
    C: LLMClient,
{
    async fn generate(
        &self,
        prompt: String,
        image: Option<EncodedImage>,
    ) -> Result<String, CoreError> {
        let max_attempts = self.config.max_attempts.max(1);
        let started = Instant::now();
        let mut attempt = 1;

        loop {
            match self.inner.generate(prompt.clone(), image.clone()).await {
                Ok(reply) => return Ok(reply),
                Err(e) if e.is_transient() && attempt < max_attempts => {
                    let delay = self.backoff(attempt);
                    if !self.fits_before_deadline(started, delay) {
                        tracing::warn!(
                            attempt,
                            "No time left to retry before the deadline: {}",
                            e
                        );
                        return Err(e);
                    }
                    tracing::warn!(
                        attempt,
                        max_attempts,
                        delay_ms = delay.as_millis() as u64,
                        "Transient provider error, retrying: {}",
                        e
                    );
                    tokio::time::sleep(delay).await;
                    attempt += 1;
                }
                Err(e) => return Err(e),
            }
        }
    }
}
