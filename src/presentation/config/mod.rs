mod environment;
mod settings;

pub use environment::{ENVIRONMENT_VAR, Environment, UnknownEnvironment};
pub use settings::{
    LlmProvider, LlmSettings, LoggingSettings, ServerSettings, Settings, TranscriptionProviderSetting,
    TranscriptionSettings, TranslationSettings, VideoSettings,
};
