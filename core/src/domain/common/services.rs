use crate::domain::recipe::ports::LLMClient;

/// Application service. Every use case is implemented on this struct in the
/// `services` module of its domain.
#[derive(Clone)]
pub struct Service<LLM>
where
    LLM: LLMClient,
{
    pub(crate) llm_client: LLM,
}

impl<LLM> Service<LLM>
where
    LLM: LLMClient,
{
    pub fn new(llm_client: LLM) -> Self {
        Self { llm_client }
    }
}
