use async_trait::async_trait;

use super::llm_client::LlmClientError;

#[async_trait]
pub trait Translator: Send + Sync {
    async fn translate(&self, text: &str, target_language: &str)
    -> Result<String, TranslationError>;
}

#[derive(Debug, thiserror::Error)]
pub enum TranslationError {
    #[error("translation request failed: {0}")]
    Upstream(#[from] LlmClientError),
    #[error("translation returned empty text")]
    EmptyTranslation,
}
