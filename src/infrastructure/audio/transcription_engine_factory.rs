use std::sync::Arc;

use crate::application::ports::{TranscriptionEngine, TranscriptionError};
use crate::presentation::config::{TranscriptionProviderSetting, TranscriptionSettings};

use super::azure_whisper_engine::{AzureWhisperEngine, DEFAULT_AZURE_API_VERSION};
use super::openai_whisper_engine::OpenAiWhisperEngine;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TranscriptionProvider {
    OpenAi,
    Azure,
}

impl From<TranscriptionProviderSetting> for TranscriptionProvider {
    fn from(setting: TranscriptionProviderSetting) -> Self {
        match setting {
            TranscriptionProviderSetting::OpenAi => Self::OpenAi,
            TranscriptionProviderSetting::Azure => Self::Azure,
        }
    }
}

/// Connection details for the speech-to-text service.
#[derive(Debug, Clone, Default)]
pub struct TranscriptionEngineOptions {
    pub api_key: Option<String>,
    pub model: Option<String>,
    pub base_url: Option<String>,
    pub azure_deployment: Option<String>,
    pub azure_api_version: Option<String>,
}

pub struct TranscriptionEngineFactory;

impl TranscriptionEngineFactory {
    pub fn from_settings(
        settings: &TranscriptionSettings,
    ) -> Result<Arc<dyn TranscriptionEngine>, TranscriptionError> {
        tracing::info!(provider = ?settings.provider, "Creating transcription engine");
        Self::create(
            settings.provider.into(),
            TranscriptionEngineOptions {
                api_key: Some(settings.api_key.clone()),
                model: settings.model.clone(),
                base_url: settings.base_url.clone(),
                azure_deployment: settings.azure_deployment.clone(),
                azure_api_version: settings.azure_api_version.clone(),
            },
        )
    }

    pub fn create(
        provider: TranscriptionProvider,
        options: TranscriptionEngineOptions,
    ) -> Result<Arc<dyn TranscriptionEngine>, TranscriptionError> {
        let api_key = options.api_key.filter(|k| !k.trim().is_empty());

        match provider {
            TranscriptionProvider::OpenAi => {
                let key = api_key.ok_or_else(|| {
                    TranscriptionError::Configuration(
                        "API key required for OpenAI Whisper".to_string(),
                    )
                })?;
                Ok(Arc::new(OpenAiWhisperEngine::new(
                    key,
                    options.base_url,
                    options.model,
                )))
            }
            TranscriptionProvider::Azure => {
                let key = api_key.ok_or_else(|| {
                    TranscriptionError::Configuration(
                        "API key required for Azure Whisper".to_string(),
                    )
                })?;
                let base_url = options.base_url.ok_or_else(|| {
                    TranscriptionError::Configuration(
                        "base_url required for Azure Whisper".to_string(),
                    )
                })?;
                let deployment = options
                    .azure_deployment
                    .or(options.model)
                    .ok_or_else(|| {
                        TranscriptionError::Configuration(
                            "azure_deployment required for Azure Whisper".to_string(),
                        )
                    })?;
                let api_version = options
                    .azure_api_version
                    .unwrap_or_else(|| DEFAULT_AZURE_API_VERSION.to_string());
                Ok(Arc::new(AzureWhisperEngine::new(
                    &base_url,
                    &deployment,
                    &key,
                    &api_version,
                )))
            }
        }
    }
}
