use std::sync::Arc;

use crate::application::ports::{LlmClient, LlmClientError};
use crate::presentation::config::{LlmProvider, LlmSettings};

use super::gemini_client::GeminiClient;
use super::openai_chat_client::{ChatAuth, OpenAiChatClient};

pub const DEFAULT_OPENAI_CHAT_URL: &str = "https://api.openai.com/v1";
pub const DEFAULT_OPENAI_CHAT_MODEL: &str = "gpt-4o-mini";
pub const DEFAULT_AZURE_CHAT_API_VERSION: &str = "2024-06-01";

pub fn create_llm_client(settings: &LlmSettings) -> Result<Arc<dyn LlmClient>, LlmClientError> {
    let api_key = settings.api_key.trim();
    if api_key.is_empty() {
        return Err(LlmClientError::Configuration(format!(
            "api_key required for {:?} provider",
            settings.provider
        )));
    }

    match settings.provider {
        LlmProvider::Gemini => {
            tracing::info!(model = ?settings.model, "Using Gemini generation client");
            Ok(Arc::new(
                GeminiClient::new(
                    api_key.to_string(),
                    settings.model.clone(),
                    settings.base_url.clone(),
                )
                .with_generation_config(settings.max_tokens, settings.temperature),
            ))
        }
        LlmProvider::OpenAi => {
            let base_url = settings
                .base_url
                .as_deref()
                .unwrap_or(DEFAULT_OPENAI_CHAT_URL);
            let model = settings
                .model
                .clone()
                .unwrap_or_else(|| DEFAULT_OPENAI_CHAT_MODEL.to_string());
            tracing::info!(model = %model, base_url, "Using OpenAI-compatible chat client");
            Ok(Arc::new(
                OpenAiChatClient::new(base_url, api_key.to_string(), model, ChatAuth::Bearer)
                    .with_generation_config(settings.max_tokens, settings.temperature),
            ))
        }
        LlmProvider::Azure => {
            let endpoint = settings.base_url.as_deref().ok_or_else(|| {
                LlmClientError::Configuration(
                    "base_url required for azure provider".to_string(),
                )
            })?;
            let deployment = settings.model.as_deref().ok_or_else(|| {
                LlmClientError::Configuration(
                    "model (deployment name) required for azure provider".to_string(),
                )
            })?;
            let base_url = format!(
                "{}/openai/deployments/{}",
                endpoint.trim_end_matches('/'),
                deployment
            );
            let api_version = settings
                .api_version
                .clone()
                .unwrap_or_else(|| DEFAULT_AZURE_CHAT_API_VERSION.to_string());
            tracing::info!(deployment, "Using Azure OpenAI chat client");
            Ok(Arc::new(
                OpenAiChatClient::new(
                    &base_url,
                    api_key.to_string(),
                    deployment.to_string(),
                    ChatAuth::AzureApiKey,
                )
                .with_api_version(api_version)
                .with_generation_config(settings.max_tokens, settings.temperature),
            ))
        }
    }
}
