use std::time::Duration;

use reqwest::Client;
use serde::{Deserialize, Serialize};

use crate::{
    domain::{
        common::{GeminiConfig, entities::app_errors::CoreError},
        image::EncodedImage,
        recipe::{ports::LLMClient, schema::get_recipe_schema},
    },
    infrastructure::llm::{status_to_error, transport_error},
};

const PROVIDER: &str = "gemini";

/// Fallback provider: Google Gemini `generateContent` with a JSON response
/// schema.
#[derive(Debug, Clone)]
pub struct GeminiLLMClient {
    api_key: String,
    model_name: String,
    base_url: String,
    client: Client,
}

#[derive(Debug, Serialize)]
struct GeminiRequest {
    contents: Vec<Content>,
    #[serde(skip_serializing_if = "Option::is_none")]
    generation_config: Option<GenerationConfig>,
}

#[derive(Debug, Serialize)]
struct Content {
    parts: Vec<Part>,
}

#[derive(Debug, Serialize)]
#[serde(untagged)]
enum Part {
    Text { text: String },
    InlineData { inline_data: InlineData },
}

#[derive(Debug, Serialize)]
struct InlineData {
    mime_type: String,
    data: String,
}

#[derive(Debug, Serialize)]
struct GenerationConfig {
    response_mime_type: String,
    response_schema: serde_json::Value,
}

#[derive(Debug, Deserialize)]
struct GeminiResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
}

#[derive(Debug, Deserialize)]
struct Candidate {
    content: ContentResponse,
}

#[derive(Debug, Deserialize)]
struct ContentResponse {
    #[serde(default)]
    parts: Vec<PartResponse>,
}

#[derive(Debug, Deserialize)]
struct PartResponse {
    #[serde(default)]
    text: String,
}

impl GeminiLLMClient {
    pub fn new(config: &GeminiConfig, timeout: Duration) -> Result<Self, CoreError> {
        let client = Client::builder().timeout(timeout).build().map_err(|e| {
            tracing::error!("Failed to build Gemini HTTP client: {}", e);
            CoreError::InternalServerError
        })?;

        Ok(Self {
            api_key: config.api_key.clone(),
            model_name: config.model.clone(),
            base_url: config.base_url.trim_end_matches('/').to_string(),
            client,
        })
    }

    fn build_request(prompt: String, image: Option<EncodedImage>) -> GeminiRequest {
        let mut parts = vec![Part::Text { text: prompt }];
        if let Some(image) = image {
            parts.push(Part::InlineData {
                inline_data: InlineData {
                    mime_type: image.mime_type,
                    data: image.data,
                },
            });
        }

        GeminiRequest {
            contents: vec![Content { parts }],
            generation_config: Some(GenerationConfig {
                response_mime_type: "application/json".to_string(),
                response_schema: get_recipe_schema(),
            }),
        }
    }

    async fn call_gemini_api(&self, request: GeminiRequest) -> Result<String, CoreError> {
        let url = format!(
            "{}/models/{}:generateContent",
            self.base_url, self.model_name
        );
        tracing::debug!(model = %self.model_name, "Calling Gemini generateContent");

        let response = self
            .client
            .post(&url)
            .query(&[("key", self.api_key.as_str())])
            .json(&request)
            .send()
            .await
            .map_err(|e| transport_error(PROVIDER, e))?;

        if !response.status().is_success() {
            let status = response.status();
            let error_text = response.text().await.unwrap_or_default();
            return Err(status_to_error(PROVIDER, status, &error_text));
        }

        let gemini_response: GeminiResponse = response.json().await.map_err(|e| {
            if e.is_timeout() {
                return CoreError::UpstreamTimeoutError;
            }
            tracing::error!("Failed to parse Gemini response: {}", e);
            CoreError::UpstreamFormatError("Gemini response is not valid JSON".to_string())
        })?;

        gemini_response
            .candidates
            .first()
            .and_then(|c| c.content.parts.first())
            .map(|p| p.text.clone())
            .filter(|text| !text.trim().is_empty())
            .ok_or_else(|| CoreError::UpstreamFormatError("No response from Gemini".to_string()))
    }
}

impl LLMClient for GeminiLLMClient {
    async fn generate(
        &self,
        prompt: String,
        image: Option<EncodedImage>,
    ) -> Result<String, CoreError> {
        let request = Self::build_request(prompt, image);
        self.call_gemini_api(request).await
    }
}
