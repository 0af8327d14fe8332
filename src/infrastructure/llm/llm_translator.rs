use std::sync::Arc;

use async_trait::async_trait;

use crate::application::ports::{LlmClient, TranslationError, Translator};

/// Translates by prompting a generation model.
pub struct LlmTranslator {
    llm_client: Arc<dyn LlmClient>,
}

impl LlmTranslator {
    pub fn new(llm_client: Arc<dyn LlmClient>) -> Self {
        Self { llm_client }
    }
}

#[async_trait]
impl Translator for LlmTranslator {
    #[tracing::instrument(skip(self, text), fields(chars = text.len()))]
    async fn translate(
        &self,
        text: &str,
        target_language: &str,
    ) -> Result<String, TranslationError> {
        if text.trim().is_empty() {
            return Ok(String::new());
        }

        let prompt = format!(
            "Translate the following text to {}. Output ONLY the translation. Text:\n\n{}",
            language_name(target_language),
            text
        );

        let translated = self.llm_client.complete(&prompt).await?;
        let translated = translated.trim();

        if translated.is_empty() {
            return Err(TranslationError::EmptyTranslation);
        }

        Ok(translated.to_string())
    }
}

/// Maps common ISO 639-1 codes to English names; other input passes through.
pub fn language_name(code: &str) -> &str {
    match code.trim().to_ascii_lowercase().as_str() {
        "en" => "English",
        "es" => "Spanish",
        "fr" => "French",
        "de" => "German",
        "it" => "Italian",
        "pt" => "Portuguese",
        "nl" => "Dutch",
        "sv" => "Swedish",
        "no" | "nb" => "Norwegian",
        "da" => "Danish",
        "fi" => "Finnish",
        "pl" => "Polish",
        "ru" => "Russian",
        "uk" => "Ukrainian",
        "tr" => "Turkish",
        "ar" => "Arabic",
        "hi" => "Hindi",
        "bn" => "Bengali",
        "ta" => "Tamil",
        "te" => "Telugu",
        "ur" => "Urdu",
        "zh" => "Chinese",
        "ja" => "Japanese",
        "ko" => "Korean",
        "vi" => "Vietnamese",
        "th" => "Thai",
        "id" => "Indonesian",
        _ => code.trim(),
    }
}
