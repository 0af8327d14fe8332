use std::sync::Arc;

use tolka::application::services::TranslationService;
use tolka::domain::TargetLanguage;

use crate::support::{IdentityTranslator, UppercaseTranslator};

#[tokio::test]
async fn given_non_default_target_when_localizing_then_translator_changes_response() {
    let service = TranslationService::new(Arc::new(UppercaseTranslator), "en");
    let target = service.target_language(Some("fr"));

    let result = service.localize("bonjour".to_string(), &target).await;

    assert_eq!(result.unwrap(), "BONJOUR");
}

#[tokio::test]
async fn given_default_target_in_any_case_when_localizing_then_text_is_unchanged() {
    let service = TranslationService::new(Arc::new(UppercaseTranslator), "en");

    for raw in [None, Some(""), Some("EN"), Some(" en ")] {
        let target = service.target_language(raw);
        let result = service.localize("hello".to_string(), &target).await;
        assert_eq!(result.unwrap(), "hello");
    }
}

#[tokio::test]
async fn given_identity_translator_when_translating_there_and_back_then_original_returns() {
    let service = TranslationService::new(Arc::new(IdentityTranslator), "en");
    let original = "The quick brown fox";

    let there = service
        .translate(original, &TargetLanguage::parse(Some("de")))
        .await
        .unwrap();
    let back = service
        .translate(&there, &TargetLanguage::parse(Some("en")))
        .await
        .unwrap();

    assert_eq!(back, original);
}

#[test]
fn given_configured_default_when_target_is_blank_then_falls_back_to_it() {
    let service = TranslationService::new(Arc::new(IdentityTranslator), "sv");

    assert_eq!(service.target_language(Some(" ")).as_str(), "sv");
    assert_eq!(service.default_language(), "sv");
}
