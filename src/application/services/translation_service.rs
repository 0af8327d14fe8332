use std::sync::Arc;

use crate::application::ports::Translator;
use crate::domain::TargetLanguage;

use super::processing_error::ProcessingError;

/// Applies the translator to pipeline output.
pub struct TranslationService {
    translator: Arc<dyn Translator>,
    default_language: String,
}

impl TranslationService {
    pub fn new(translator: Arc<dyn Translator>, default_language: impl Into<String>) -> Self {
        Self {
            translator,
            default_language: default_language.into(),
        }
    }

    pub fn default_language(&self) -> &str {
        &self.default_language
    }

    /// Resolves a requested language code against the configured default.
    pub fn target_language(&self, raw: Option<&str>) -> TargetLanguage {
        TargetLanguage::parse_or(raw, &self.default_language)
    }

    #[tracing::instrument(skip(self, text), fields(chars = text.len()))]
    pub async fn translate(
        &self,
        text: &str,
        target: &TargetLanguage,
    ) -> Result<String, ProcessingError> {
        let translated = self.translator.translate(text, target.as_str()).await?;
        tracing::debug!(chars = translated.len(), "Translation completed");
        Ok(translated)
    }

    /// Translates `text` unless `target` is the default response language.
    pub async fn localize(
        &self,
        text: String,
        target: &TargetLanguage,
    ) -> Result<String, ProcessingError> {
        if target.is_default_for(&self.default_language) {
            return Ok(text);
        }
        self.translate(&text, target).await
    }
}
