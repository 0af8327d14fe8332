mod azure_whisper_engine;
mod ffmpeg_demuxer;
mod openai_whisper_engine;
mod transcription_engine_factory;
mod whisper_request;

pub use azure_whisper_engine::AzureWhisperEngine;
pub use ffmpeg_demuxer::FfmpegDemuxer;
pub use openai_whisper_engine::OpenAiWhisperEngine;
pub use transcription_engine_factory::{
    TranscriptionEngineFactory, TranscriptionEngineOptions, TranscriptionProvider,
};
