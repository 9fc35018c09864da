use reqwest::Client;
use serde::{Deserialize, Serialize};

use crate::{
    domain::{
        common::{LLMConfig, entities::app_errors::CoreError},
        image::EncodedImage,
        recipe::ports::LLMClient,
    },
    infrastructure::llm::{status_to_error, transport_error},
};

const PROVIDER: &str = "llm7";
const MAX_TOKENS: u32 = 1500;
const TEMPERATURE: f32 = 0.7;
const SYSTEM_PROMPT: &str = "You are a professional chef and recipe expert. Always respond with valid JSON in the exact format requested.";

/// Client for the LLM7 OpenAI compatible chat completions API.
#[derive(Debug, Clone)]
pub struct Llm7LLMClient {
    token: String,
    base_url: String,
    text_model: String,
    image_model: String,
    client: Client,
}

#[derive(Debug, Serialize)]
struct ChatRequest<'a> {
    model: &'a str,
    messages: Vec<Message>,
    max_tokens: u32,
    temperature: f32,
}

#[derive(Debug, Serialize)]
struct Message {
    role: &'static str,
    content: MessageContent,
}

#[derive(Debug, Serialize)]
#[serde(untagged)]
enum MessageContent {
    Text(String),
    Parts(Vec<ContentPart>),
}

#[derive(Debug, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
enum ContentPart {
    Text { text: String },
    ImageUrl { image_url: ImageUrl },
}

#[derive(Debug, Serialize)]
struct ImageUrl {
    url: String,
}

#[derive(Debug, Deserialize)]
struct ChatResponse {
    #[serde(default)]
    choices: Vec<Choice>,
}

#[derive(Debug, Deserialize)]
struct Choice {
    message: ChoiceMessage,
}

#[derive(Debug, Deserialize)]
struct ChoiceMessage {
    #[serde(default)]
    content: Option<String>,
}

impl Llm7LLMClient {
    pub fn new(config: &LLMConfig) -> Result<Self, CoreError> {
        let client = Client::builder()
            .timeout(config.timeout)
            .build()
            .map_err(|e| {
                tracing::error!("Failed to build LLM7 HTTP client: {}", e);
                CoreError::InternalServerError
            })?;

        Ok(Self {
            token: config.token.clone(),
            base_url: config.base_url.trim_end_matches('/').to_string(),
            text_model: config.text_model.clone(),
            image_model: config.image_model.clone(),
            client,
        })
    }

    fn build_request(&self, prompt: String, image: Option<EncodedImage>) -> ChatRequest<'_> {
        match image {
            None => ChatRequest {
                model: &self.text_model,
                messages: vec![
                    Message {
                        role: "system",
                        content: MessageContent::Text(SYSTEM_PROMPT.to_string()),
                    },
                    Message {
                        role: "user",
                        content: MessageContent::Text(prompt),
                    },
                ],
                max_tokens: MAX_TOKENS,
                temperature: TEMPERATURE,
            },
            Some(image) => ChatRequest {
                model: &self.image_model,
                messages: vec![Message {
                    role: "user",
                    content: MessageContent::Parts(vec![
                        ContentPart::Text { text: prompt },
                        ContentPart::ImageUrl {
                            image_url: ImageUrl {
                                url: image.data_url(),
                            },
                        },
                    ]),
                }],
                max_tokens: MAX_TOKENS,
                temperature: TEMPERATURE,
            },
        }
    }

    async fn call_chat_api(&self, request: ChatRequest<'_>) -> Result<String, CoreError> {
        let url = format!("{}/chat/completions", self.base_url);
        tracing::debug!(model = request.model, "Calling LLM7 chat completions");

        let response = self
            .client
            .post(&url)
            .bearer_auth(&self.token)
            .json(&request)
            .send()
            .await
            .map_err(|e| transport_error(PROVIDER, e))?;

        if !response.status().is_success() {
            let status = response.status();
            let error_text = response.text().await.unwrap_or_default();
            return Err(status_to_error(PROVIDER, status, &error_text));
        }

        let chat_response: ChatResponse = response.json().await.map_err(|e| {
            if e.is_timeout() {
                return CoreError::UpstreamTimeoutError;
            }
            tracing::error!("Failed to parse LLM7 response: {}", e);
            CoreError::UpstreamFormatError("LLM7 response is not valid JSON".to_string())
        })?;

        extract_content(chat_response)
    }
}

fn extract_content(response: ChatResponse) -> Result<String, CoreError> {
    let content = response
        .choices
        .into_iter()
        .next()
        .ok_or_else(|| CoreError::UpstreamFormatError("LLM7 returned no choices".to_string()))?
        .message
        .content
        .unwrap_or_default();

    if content.trim().is_empty() {
        return Err(CoreError::UpstreamFormatError(
            "LLM7 returned empty content".to_string(),
        ));
    }

    Ok(content)
}

impl LLMClient for Llm7LLMClient {
    async fn generate(
        &self,
        prompt: String,
        image: Option<EncodedImage>,
    ) -> Result<String, CoreError> {
        let request = self.build_request(prompt, image);
        self.call_chat_api(request).await
    }
}
