mod audio_demuxer;
mod file_loader;
mod llm_client;
mod transcription_engine;
mod translator;

pub use audio_demuxer::{AudioDemuxer, DemuxError};
pub use file_loader::{FileLoader, FileLoaderError};
pub use llm_client::{ImageInput, LlmClient, LlmClientError};
pub use transcription_engine::{TranscriptionEngine, TranscriptionError};
pub use translator::{TranslationError, Translator};
