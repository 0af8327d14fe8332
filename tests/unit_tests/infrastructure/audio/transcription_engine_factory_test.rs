use tolka::application::ports::TranscriptionError;
use tolka::infrastructure::audio::{
    TranscriptionEngineFactory, TranscriptionEngineOptions, TranscriptionProvider,
};
use tolka::presentation::config::{TranscriptionProviderSetting, TranscriptionSettings};

#[test]
fn given_openai_provider_with_key_when_creating_then_succeeds() {
    let result = TranscriptionEngineFactory::create(
        TranscriptionProvider::OpenAi,
        TranscriptionEngineOptions {
            api_key: Some("sk-test".to_string()),
            ..Default::default()
        },
    );

    assert!(result.is_ok());
}

#[test]
fn given_blank_api_key_when_creating_then_returns_configuration_error() {
    let result = TranscriptionEngineFactory::create(
        TranscriptionProvider::OpenAi,
        TranscriptionEngineOptions {
            api_key: Some("   ".to_string()),
            ..Default::default()
        },
    );

    assert!(matches!(result, Err(TranscriptionError::Configuration(_))));
}

#[test]
fn given_azure_without_base_url_when_creating_then_returns_configuration_error() {
    let result = TranscriptionEngineFactory::create(
        TranscriptionProvider::Azure,
        TranscriptionEngineOptions {
            api_key: Some("key".to_string()),
            azure_deployment: Some("whisper".to_string()),
            ..Default::default()
        },
    );

    assert!(matches!(result, Err(TranscriptionError::Configuration(_))));
}

#[test]
fn given_azure_settings_when_creating_from_settings_then_succeeds() {
    let settings = TranscriptionSettings {
        provider: TranscriptionProviderSetting::Azure,
        api_key: "key".to_string(),
        base_url: Some("https://example.openai.azure.com".to_string()),
        azure_deployment: Some("whisper".to_string()),
        ..Default::default()
    };

    assert!(TranscriptionEngineFactory::from_settings(&settings).is_ok());
}
