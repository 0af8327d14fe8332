use async_trait::async_trait;

use crate::application::ports::{TranscriptionEngine, TranscriptionError};
use crate::domain::Transcript;

use super::whisper_request::{send_transcription, transcription_form};

pub const DEFAULT_OPENAI_BASE_URL: &str = "https://api.openai.com/v1";
pub const DEFAULT_WHISPER_MODEL: &str = "whisper-1";

pub struct OpenAiWhisperEngine {
    client: reqwest::Client,
    api_key: String,
    base_url: String,
    model: String,
}

impl OpenAiWhisperEngine {
    pub fn new(api_key: String, base_url: Option<String>, model: Option<String>) -> Self {
        let base_url = base_url.as_deref().unwrap_or(DEFAULT_OPENAI_BASE_URL);
        Self {
            client: reqwest::Client::new(),
            api_key,
            base_url: base_url.trim_end_matches('/').to_string(),
            model: model.unwrap_or_else(|| DEFAULT_WHISPER_MODEL.to_string()),
        }
    }
}

#[async_trait]
impl TranscriptionEngine for OpenAiWhisperEngine {
    #[tracing::instrument(skip(self, audio_data), fields(model = %self.model, bytes = audio_data.len()))]
    async fn transcribe(&self, audio_data: &[u8]) -> Result<Transcript, TranscriptionError> {
        let form = transcription_form(audio_data)?.text("model", self.model.clone());

        let request = self
            .client
            .post(format!("{}/audio/transcriptions", self.base_url))
            .bearer_auth(&self.api_key)
            .multipart(form);

        send_transcription(request, "openai").await
    }
}
