use std::sync::Arc;

use crate::application::ports::{LlmClient, TranscriptionEngine};
use crate::domain::{PromptSubject, Transcript, build_prompt};

use super::processing_error::ProcessingError;

pub struct AudioService {
    transcription_engine: Arc<dyn TranscriptionEngine>,
    llm_client: Arc<dyn LlmClient>,
}

impl AudioService {
    pub fn new(
        transcription_engine: Arc<dyn TranscriptionEngine>,
        llm_client: Arc<dyn LlmClient>,
    ) -> Self {
        Self {
            transcription_engine,
            llm_client,
        }
    }

    #[tracing::instrument(skip(self, audio_data, instruction), fields(bytes = audio_data.len()))]
    pub async fn process(
        &self,
        audio_data: &[u8],
        instruction: Option<&str>,
    ) -> Result<String, ProcessingError> {
        let transcript = self.transcribe(audio_data).await?;

        if !transcript.has_speech() {
            tracing::warn!("Transcription returned empty text");
            return Err(ProcessingError::TranscriptionFailed);
        }

        tracing::info!(chars = transcript.text.len(), "Audio transcribed");

        let prompt = build_prompt(PromptSubject::Audio, &transcript.text, instruction);
        let response = self.llm_client.complete(&prompt).await?;
        Ok(response)
    }

    /// Raw speech-to-text without generation.
    pub async fn transcribe(&self, audio_data: &[u8]) -> Result<Transcript, ProcessingError> {
        if audio_data.is_empty() {
            return Err(ProcessingError::InvalidRequest(
                "Uploaded audio is empty.".to_string(),
            ));
        }
        Ok(self.transcription_engine.transcribe(audio_data).await?)
    }
}
