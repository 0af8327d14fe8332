use std::path::PathBuf;
use std::time::Duration;

use config::{Config, ConfigError, Environment as EnvironmentSource, File};
use serde::Deserialize;

use crate::application::services::{
    DEFAULT_CHUNK_SIZE_BYTES, DEFAULT_DEMUX_TIMEOUT, VideoPipelineConfig,
};
use crate::domain::DEFAULT_LANGUAGE;

use super::Environment;

/// Process-wide configuration, loaded once at start-up and never mutated.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub server: ServerSettings,
    pub llm: LlmSettings,
    pub transcription: TranscriptionSettings,
    pub translation: TranslationSettings,
    pub video: VideoSettings,
    pub logging: LoggingSettings,
}

impl Settings {
    /// Reads `appsettings.{environment}.toml` (optional), then `APP_*`
    /// environment variables using `__` between nested keys, e.g.
    /// `APP_LLM__API_KEY`.
    pub fn load(environment: Environment) -> Result<Self, ConfigError> {
        let configuration = Config::builder()
            .add_source(
                File::with_name(&format!(
                    "appsettings.{}",
                    environment.as_str().to_lowercase()
                ))
                .required(false),
            )
            .add_source(
                EnvironmentSource::with_prefix("APP")
                    .prefix_separator("_")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?;

        let mut settings: Settings = configuration.try_deserialize()?;
        settings.apply_api_key_fallbacks();
        Ok(settings)
    }

    /// Falls back to the vendor's conventional environment variable when no
    /// key was configured.
    fn apply_api_key_fallbacks(&mut self) {
        if self.llm.api_key.is_empty() {
            let var = match self.llm.provider {
                LlmProvider::Gemini => "GEMINI_API_KEY",
                LlmProvider::OpenAi => "OPENAI_API_KEY",
                LlmProvider::Azure => "AZURE_OPENAI_API_KEY",
            };
            self.llm.api_key = std::env::var(var).unwrap_or_default();
        }

        if self.transcription.api_key.is_empty() {
            let var = match self.transcription.provider {
                TranscriptionProviderSetting::OpenAi => "OPENAI_API_KEY",
                TranscriptionProviderSetting::Azure => "AZURE_OPENAI_API_KEY",
            };
            self.transcription.api_key = std::env::var(var).unwrap_or_default();
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ServerSettings {
    pub host: String,
    pub port: u16,
    pub max_body_bytes: usize,
}

impl Default for ServerSettings {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 8000,
            max_body_bytes: 512 * 1024 * 1024,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LlmProvider {
    #[default]
    Gemini,
    #[serde(rename = "openai")]
    OpenAi,
    Azure,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct LlmSettings {
    pub provider: LlmProvider,
    pub api_key: String,
    pub model: Option<String>,
    pub base_url: Option<String>,
    pub api_version: Option<String>,
    pub max_tokens: Option<u32>,
    pub temperature: Option<f32>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TranscriptionProviderSetting {
    #[default]
    #[serde(rename = "openai")]
    OpenAi,
    Azure,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct TranscriptionSettings {
    pub provider: TranscriptionProviderSetting,
    pub api_key: String,
    pub model: Option<String>,
    pub base_url: Option<String>,
    pub azure_deployment: Option<String>,
    pub azure_api_version: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct TranslationSettings {
    pub default_language: String,
}

impl Default for TranslationSettings {
    fn default() -> Self {
        Self {
            default_language: DEFAULT_LANGUAGE.to_string(),
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct VideoSettings {
    pub chunk_size_bytes: usize,
    pub max_upload_bytes: Option<u64>,
    pub demux_timeout_secs: u64,
    pub ffmpeg_path: String,
    pub ffprobe_path: String,
    pub temp_dir: Option<PathBuf>,
}

impl Default for VideoSettings {
    fn default() -> Self {
        Self {
            chunk_size_bytes: DEFAULT_CHUNK_SIZE_BYTES,
            max_upload_bytes: None,
            demux_timeout_secs: DEFAULT_DEMUX_TIMEOUT.as_secs(),
            ffmpeg_path: "ffmpeg".to_string(),
            ffprobe_path: "ffprobe".to_string(),
            temp_dir: None,
        }
    }
}

impl VideoSettings {
    pub fn pipeline_config(&self) -> VideoPipelineConfig {
        VideoPipelineConfig {
            chunk_size_bytes: self.chunk_size_bytes,
            max_upload_bytes: self.max_upload_bytes,
            demux_timeout: Duration::from_secs(self.demux_timeout_secs),
            temp_dir: self.temp_dir.clone(),
        }
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct LoggingSettings {
    pub level: Option<String>,
    pub json: bool,
}
