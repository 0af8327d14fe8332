use async_trait::async_trait;
use base64::Engine as _;
use base64::engine::general_purpose;
use reqwest::Client;
use serde::{Deserialize, Serialize};

use crate::application::ports::{ImageInput, LlmClient, LlmClientError};

/// Client for OpenAI-compatible `/chat/completions` endpoints
/// (OpenAI, Azure OpenAI deployments, LM Studio).
pub struct OpenAiChatClient {
    client: Client,
    auth: ChatAuth,
    base_url: String,
    api_key: String,
    model: String,
    api_version: Option<String>,
    max_tokens: Option<u32>,
    temperature: Option<f32>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChatAuth {
    Bearer,
    AzureApiKey,
}

#[derive(Serialize)]
struct ChatCompletionRequest<'a> {
    model: &'a str,
    messages: Vec<ChatMessage<'a>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    max_tokens: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    temperature: Option<f32>,
}

#[derive(Serialize)]
struct ChatMessage<'a> {
    role: &'static str,
    content: MessageContent<'a>,
}

#[derive(Serialize)]
#[serde(untagged)]
enum MessageContent<'a> {
    Text(&'a str),
    Parts(Vec<ContentPart<'a>>),
}

#[derive(Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
enum ContentPart<'a> {
    Text { text: &'a str },
    ImageUrl { image_url: ImageUrl },
}

#[derive(Serialize)]
struct ImageUrl {
    url: String,
}

#[derive(Deserialize)]
struct ChatCompletionResponse {
    #[serde(default)]
    choices: Vec<ChatChoice>,
}

#[derive(Deserialize)]
struct ChatChoice {
    message: ResponseMessage,
}

#[derive(Deserialize)]
struct ResponseMessage {
    content: Option<String>,
}

impl OpenAiChatClient {
    pub fn new(base_url: &str, api_key: String, model: String, auth: ChatAuth) -> Self {
        Self {
            client: Client::new(),
            auth,
            base_url: base_url.trim_end_matches('/').to_string(),
            api_key,
            model,
            api_version: None,
            max_tokens: None,
            temperature: None,
        }
    }

    pub fn with_generation_config(
        mut self,
        max_tokens: Option<u32>,
        temperature: Option<f32>,
    ) -> Self {
        self.max_tokens = max_tokens;
        self.temperature = temperature;
        self
    }

    pub fn with_api_version(mut self, api_version: impl Into<String>) -> Self {
        self.api_version = Some(api_version.into());
        self
    }

    fn apply_auth(&self, request: reqwest::RequestBuilder) -> reqwest::RequestBuilder {
        match self.auth {
            ChatAuth::AzureApiKey => request.header("api-key", &self.api_key),
            ChatAuth::Bearer => request.bearer_auth(&self.api_key),
        }
    }

    async fn send(&self, content: MessageContent<'_>) -> Result<String, LlmClientError> {
        let request_body = ChatCompletionRequest {
            model: &self.model,
            messages: vec![ChatMessage {
                role: "user",
                content,
            }],
            max_tokens: self.max_tokens,
            temperature: self.temperature,
        };

        let mut request = self
            .client
            .post(format!("{}/chat/completions", self.base_url))
            .json(&request_body);
        if let Some(api_version) = &self.api_version {
            request = request.query(&[("api-version", api_version)]);
        }
        let response = self
            .apply_auth(request)
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

        let completion_response: ChatCompletionResponse = response
            .json()
            .await
            .map_err(|e| LlmClientError::InvalidResponse(e.to_string()))?;

        completion_response
            .choices
            .into_iter()
            .next()
            .and_then(|choice| choice.message.content)
            .ok_or_else(|| LlmClientError::InvalidResponse("empty choices".to_string()))
    }
}

#[async_trait]
impl LlmClient for OpenAiChatClient {
    async fn complete(&self, prompt: &str) -> Result<String, LlmClientError> {
        self.send(MessageContent::Text(prompt)).await
    }

    async fn describe_image(
        &self,
        image: ImageInput<'_>,
        prompt: &str,
    ) -> Result<String, LlmClientError> {
        let data_url = format!(
            "data:{};base64,{}",
            image.mime_type,
            general_purpose::STANDARD.encode(image.data)
        );
        self.send(MessageContent::Parts(vec![
            ContentPart::Text { text: prompt },
            ContentPart::ImageUrl {
                image_url: ImageUrl { url: data_url },
            },
        ]))
        .await
    }
}
