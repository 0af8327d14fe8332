use async_trait::async_trait;
use base64::Engine as _;
use base64::engine::general_purpose;
use reqwest::Client;
use serde::{Deserialize, Serialize};

use crate::application::ports::{ImageInput, LlmClient, LlmClientError};

pub const DEFAULT_GEMINI_BASE_URL: &str = "https://generativelanguage.googleapis.com/v1beta";
pub const DEFAULT_GEMINI_MODEL: &str = "gemini-1.5-flash";

/// Google Gemini `generateContent` client.
pub struct GeminiClient {
    client: Client,
    base_url: String,
    api_key: String,
    model: String,
    max_output_tokens: Option<u32>,
    temperature: Option<f32>,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct GenerateContentRequest<'a> {
    contents: Vec<Content<'a>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    generation_config: Option<GenerationConfig>,
}

#[derive(Serialize)]
struct Content<'a> {
    role: &'static str,
    parts: Vec<RequestPart<'a>>,
}

#[derive(Serialize)]
#[serde(untagged)]
enum RequestPart<'a> {
    Text { text: &'a str },
    InlineData { inline_data: InlineData<'a> },
}

#[derive(Serialize)]
struct InlineData<'a> {
    mime_type: &'a str,
    data: String,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct GenerationConfig {
    #[serde(skip_serializing_if = "Option::is_none")]
    max_output_tokens: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    temperature: Option<f32>,
}

#[derive(Deserialize)]
struct GenerateContentResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
}

#[derive(Deserialize)]
struct Candidate {
    content: Option<CandidateContent>,
}

#[derive(Deserialize)]
struct CandidateContent {
    #[serde(default)]
    parts: Vec<ResponsePart>,
}

#[derive(Deserialize)]
struct ResponsePart {
    text: Option<String>,
}

impl GeminiClient {
    pub fn new(api_key: String, model: Option<String>, base_url: Option<String>) -> Self {
        Self {
            client: Client::new(),
            base_url: base_url
                .unwrap_or_else(|| DEFAULT_GEMINI_BASE_URL.to_string())
                .trim_end_matches('/')
                .to_string(),
            api_key,
            model: model.unwrap_or_else(|| DEFAULT_GEMINI_MODEL.to_string()),
            max_output_tokens: None,
            temperature: None,
        }
    }

    pub fn with_generation_config(
        mut self,
        max_output_tokens: Option<u32>,
        temperature: Option<f32>,
    ) -> Self {
        self.max_output_tokens = max_output_tokens;
        self.temperature = temperature;
        self
    }

    fn generation_config(&self) -> Option<GenerationConfig> {
        if self.max_output_tokens.is_none() && self.temperature.is_none() {
            return None;
        }
        Some(GenerationConfig {
            max_output_tokens: self.max_output_tokens,
            temperature: self.temperature,
        })
    }

    async fn generate(&self, parts: Vec<RequestPart<'_>>) -> Result<String, LlmClientError> {
        let url = format!("{}/models/{}:generateContent", self.base_url, self.model);
        let request_body = GenerateContentRequest {
            contents: vec![Content {
                role: "user",
                parts,
            }],
            generation_config: self.generation_config(),
        };

        tracing::debug!(model = %self.model, "Sending prompt to Gemini");

        let response = self
            .client
            .post(&url)
            .header("x-goog-api-key", &self.api_key)
            .json(&request_body)
            .send()
            .await
            .map_err(|e| LlmClientError::ApiRequestFailed(e.to_string()))?;

        if response.status() == reqwest::StatusCode::TOO_MANY_REQUESTS {
            return Err(LlmClientError::RateLimited);
        }

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            return Err(LlmClientError::ApiRequestFailed(format!(
                "HTTP {}: {}",
                status, body
            )));
        }

        let body: GenerateContentResponse = response
            .json()
            .await
            .map_err(|e| LlmClientError::InvalidResponse(e.to_string()))?;

        let text = body
            .candidates
            .into_iter()
            .next()
            .and_then(|candidate| candidate.content)
            .map(|content| {
                content
                    .parts
                    .into_iter()
                    .filter_map(|part| part.text)
                    .collect::<String>()
            })
            .ok_or_else(|| LlmClientError::InvalidResponse("no candidates".to_string()))?;

        if text.trim().is_empty() {
            return Err(LlmClientError::InvalidResponse(
                "no text in candidate".to_string(),
            ));
        }

        tracing::info!(chars = text.len(), "Gemini generation completed");
        Ok(text)
    }
}

#[async_trait]
impl LlmClient for GeminiClient {
    async fn complete(&self, prompt: &str) -> Result<String, LlmClientError> {
        self.generate(vec![RequestPart::Text { text: prompt }]).await
    }

    async fn describe_image(
        &self,
        image: ImageInput<'_>,
        prompt: &str,
    ) -> Result<String, LlmClientError> {
        let encoded = general_purpose::STANDARD.encode(image.data);
        self.generate(vec![
            RequestPart::Text { text: prompt },
            RequestPart::InlineData {
                inline_data: InlineData {
                    mime_type: image.mime_type,
                    data: encoded,
                },
            },
        ])
        .await
    }
}
