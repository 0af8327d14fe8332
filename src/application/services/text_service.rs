use std::sync::Arc;

use crate::application::ports::LlmClient;

use super::processing_error::ProcessingError;

pub struct TextService {
    llm_client: Arc<dyn LlmClient>,
}

impl TextService {
    pub fn new(llm_client: Arc<dyn LlmClient>) -> Self {
        Self { llm_client }
    }

    #[tracing::instrument(skip_all, fields(chars = text.len()))]
    pub async fn process(&self, text: &str) -> Result<String, ProcessingError> {
        if text.trim().is_empty() {
            return Err(ProcessingError::InvalidRequest(
                "Text must not be empty.".to_string(),
            ));
        }

        let response = self.llm_client.complete(text).await?;
        tracing::info!(chars = response.len(), "Text processed");
        Ok(response)
    }
}
