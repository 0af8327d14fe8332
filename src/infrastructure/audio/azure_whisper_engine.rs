use async_trait::async_trait;

use crate::application::ports::{TranscriptionEngine, TranscriptionError};
use crate::domain::Transcript;

use super::whisper_request::{send_transcription, transcription_form};

pub const DEFAULT_AZURE_API_VERSION: &str = "2024-06-01";

/// Whisper deployment hosted on Azure OpenAI, authenticated with `api-key`.
pub struct AzureWhisperEngine {
    client: reqwest::Client,
    transcriptions_url: String,
    api_key: String,
}

impl AzureWhisperEngine {
    pub fn new(base_url: &str, deployment: &str, api_key: &str, api_version: &str) -> Self {
        Self {
            client: reqwest::Client::new(),
            transcriptions_url: format!(
                "{}/openai/deployments/{deployment}/audio/transcriptions?api-version={api_version}",
                base_url.trim_end_matches('/'),
            ),
            api_key: api_key.to_string(),
        }
    }
}

#[async_trait]
impl TranscriptionEngine for AzureWhisperEngine {
    #[tracing::instrument(skip(self, audio_data), fields(bytes = audio_data.len()))]
    async fn transcribe(&self, audio_data: &[u8]) -> Result<Transcript, TranscriptionError> {
        let request = self
            .client
            .post(&self.transcriptions_url)
            .header("api-key", &self.api_key)
            .multipart(transcription_form(audio_data)?);

        send_transcription(request, "azure").await
    }
}
