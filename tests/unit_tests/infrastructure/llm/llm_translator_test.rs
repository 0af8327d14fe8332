use std::sync::Arc;

use tolka::application::ports::{TranslationError, Translator};
use tolka::infrastructure::llm::LlmTranslator;

use crate::support::{FailingLlmClient, RecordingLlmClient};

#[tokio::test]
async fn given_text_when_translating_then_prompt_names_target_language() {
    let llm = Arc::new(RecordingLlmClient::new("  Bonjour le monde \n"));
    let translator = LlmTranslator::new(llm.clone());

    let translated = translator.translate("Hello world", "fr").await.unwrap();

    assert_eq!(translated, "Bonjour le monde");
    assert_eq!(
        llm.prompts()[0],
        "Translate the following text to French. Output ONLY the translation. Text:\n\nHello world"
    );
}

#[tokio::test]
async fn given_blank_text_when_translating_then_generator_is_not_called() {
    let llm = Arc::new(RecordingLlmClient::new("unused"));
    let translator = LlmTranslator::new(llm.clone());

    let translated = translator.translate("  ", "de").await.unwrap();

    assert_eq!(translated, "");
    assert!(llm.prompts().is_empty());
}

#[tokio::test]
async fn given_generator_returns_whitespace_when_translating_then_returns_empty_translation() {
    let translator = LlmTranslator::new(Arc::new(RecordingLlmClient::new("   ")));

    let result = translator.translate("Hello", "es").await;

    assert!(matches!(result, Err(TranslationError::EmptyTranslation)));
}

#[tokio::test]
async fn given_generator_failure_when_translating_then_returns_upstream_error() {
    let translator = LlmTranslator::new(Arc::new(FailingLlmClient));

    let result = translator.translate("Hello", "es").await;

    assert!(matches!(result, Err(TranslationError::Upstream(_))));
}
