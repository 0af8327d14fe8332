use std::path::{Path, PathBuf};
use std::sync::Arc;
use std::time::Duration;

use bytes::Bytes;
use futures::{Stream, StreamExt};
use tokio::io::{AsyncWriteExt, BufWriter};

use crate::application::ports::{AudioDemuxer, DemuxError, LlmClient, TranscriptionEngine};
use crate::domain::{PromptSubject, VideoFormat, build_prompt};

use super::processing_error::ProcessingError;
use super::scoped_temp_file::ScopedTempFile;

pub const DEFAULT_CHUNK_SIZE_BYTES: usize = 1024 * 1024;
pub const DEFAULT_DEMUX_TIMEOUT: Duration = Duration::from_secs(300);

#[derive(Debug, Clone)]
pub struct VideoPipelineConfig {
    pub chunk_size_bytes: usize,
    pub max_upload_bytes: Option<u64>,
    pub demux_timeout: Duration,
    pub temp_dir: Option<PathBuf>,
}

impl Default for VideoPipelineConfig {
    fn default() -> Self {
        Self {
            chunk_size_bytes: DEFAULT_CHUNK_SIZE_BYTES,
            max_upload_bytes: None,
            demux_timeout: DEFAULT_DEMUX_TIMEOUT,
            temp_dir: None,
        }
    }
}

/// A video upload persisted to a temporary file owned by this value.
#[derive(Debug)]
pub struct StagedVideo {
    file: ScopedTempFile,
    bytes: u64,
}

impl StagedVideo {
    pub fn path(&self) -> &Path {
        self.file.path()
    }

    pub fn size_bytes(&self) -> u64 {
        self.bytes
    }
}

/// Stages a video upload on disk, pulls out its audio track, transcribes it
/// and hands the transcript to the generator.
///
/// Both staging files are owned by [`ScopedTempFile`] guards, so they are
/// removed on every exit path of [`VideoService::process`].
pub struct VideoService {
    transcription_engine: Arc<dyn TranscriptionEngine>,
    llm_client: Arc<dyn LlmClient>,
    demuxer: Arc<dyn AudioDemuxer>,
    config: VideoPipelineConfig,
}

impl VideoService {
    pub fn new(
        transcription_engine: Arc<dyn TranscriptionEngine>,
        llm_client: Arc<dyn LlmClient>,
        demuxer: Arc<dyn AudioDemuxer>,
        config: VideoPipelineConfig,
    ) -> Self {
        Self {
            transcription_engine,
            llm_client,
            demuxer,
            config,
        }
    }

    /// Stages the upload and runs the full pipeline.
    #[tracing::instrument(skip(self, upload, instruction), fields(format = ?format))]
    pub async fn process<S, E>(
        &self,
        upload: S,
        format: VideoFormat,
        instruction: Option<&str>,
    ) -> Result<String, ProcessingError>
    where
        S: Stream<Item = Result<Bytes, E>> + Send,
        E: std::fmt::Display,
    {
        let staged = self.stage(upload, format).await?;
        self.process_staged(staged, instruction).await
    }

    /// Streams the upload into a temporary file, never holding more than one
    /// write buffer of it in memory.
    pub async fn stage<S, E>(
        &self,
        upload: S,
        format: VideoFormat,
    ) -> Result<StagedVideo, ProcessingError>
    where
        S: Stream<Item = Result<Bytes, E>> + Send,
        E: std::fmt::Display,
    {
        let result = self.stage_inner(upload, format).await;
        log_failure(result)
    }

    /// Extracts, transcribes and generates from a staged upload. The staged
    /// file and the extracted audio are deleted before this returns.
    pub async fn process_staged(
        &self,
        staged: StagedVideo,
        instruction: Option<&str>,
    ) -> Result<String, ProcessingError> {
        let result = self.run(staged, instruction).await;
        log_failure(result)
    }

    async fn stage_inner<S, E>(
        &self,
        upload: S,
        format: VideoFormat,
    ) -> Result<StagedVideo, ProcessingError>
    where
        S: Stream<Item = Result<Bytes, E>> + Send,
        E: std::fmt::Display,
    {
        let file = ScopedTempFile::acquire(self.config.temp_dir.as_deref(), format.as_suffix())?;
        let bytes = self.persist_upload(upload, file.path()).await?;
        tracing::info!(bytes, path = %file.path().display(), "Video upload staged");
        Ok(StagedVideo { file, bytes })
    }

    async fn run(
        &self,
        staged: StagedVideo,
        instruction: Option<&str>,
    ) -> Result<String, ProcessingError> {
        let audio_file = self.extract_audio_track(&staged.file).await?;

        let audio_data = tokio::fs::read(audio_file.path()).await?;
        tracing::debug!(bytes = audio_data.len(), "Extracted audio loaded");

        let transcript = self.transcription_engine.transcribe(&audio_data).await?;

        if !transcript.has_speech() {
            return Err(ProcessingError::NoSpeechDetected);
        }

        tracing::info!(chars = transcript.text.len(), "Video speech transcribed");

        let prompt = build_prompt(PromptSubject::Video, &transcript.text, instruction);
        let response = self.llm_client.complete(&prompt).await?;

        Ok(response)
    }

    async fn persist_upload<S, E>(&self, upload: S, dest: &Path) -> Result<u64, ProcessingError>
    where
        S: Stream<Item = Result<Bytes, E>> + Send,
        E: std::fmt::Display,
    {
        let mut upload = std::pin::pin!(upload);
        let file = tokio::fs::File::create(dest).await?;
        let mut writer = BufWriter::with_capacity(self.config.chunk_size_bytes.max(1), file);
        let mut total: u64 = 0;

        while let Some(chunk) = upload.next().await {
            let chunk = chunk.map_err(|e| {
                ProcessingError::InvalidRequest(format!("Failed to read upload: {e}"))
            })?;

            total += chunk.len() as u64;
            if let Some(limit) = self.config.max_upload_bytes {
                if total > limit {
                    return Err(ProcessingError::PayloadTooLarge { limit });
                }
            }

            writer.write_all(&chunk).await?;
        }

        writer.flush().await?;

        if total == 0 {
            return Err(ProcessingError::InvalidRequest(
                "Uploaded video is empty.".to_string(),
            ));
        }

        Ok(total)
    }

    /// Probes and demuxes within `demux_timeout`. On timeout the demux future
    /// is dropped first, which stops the decoder, then the audio guard.
    async fn extract_audio_track(
        &self,
        video_file: &ScopedTempFile,
    ) -> Result<ScopedTempFile, ProcessingError> {
        let audio_file = ScopedTempFile::acquire(self.config.temp_dir.as_deref(), ".wav")?;

        let demux = self.demux(video_file.path(), audio_file.path());
        let has_audio = tokio::time::timeout(self.config.demux_timeout, demux)
            .await
            .map_err(|_| {
                tracing::warn!(
                    timeout_secs = self.config.demux_timeout.as_secs_f64(),
                    "Audio extraction timed out"
                );
                ProcessingError::MediaProcessing("audio extraction timed out".to_string())
            })??;

        if !has_audio {
            return Err(ProcessingError::NoAudioTrack);
        }

        tracing::debug!(path = %audio_file.path().display(), "Audio track extracted");
        Ok(audio_file)
    }

    async fn demux(&self, media: &Path, audio_out: &Path) -> Result<bool, DemuxError> {
        if !self.demuxer.has_audio_track(media).await? {
            return Ok(false);
        }
        self.demuxer.extract_audio(media, audio_out).await?;
        Ok(true)
    }
}

fn log_failure<T>(result: Result<T, ProcessingError>) -> Result<T, ProcessingError> {
    if let Err(e) = &result {
        tracing::warn!(error = %e, "Video processing failed");
    }
    result
}
