use crate::application::ports::{
    DemuxError, FileLoaderError, LlmClientError, TranscriptionError, TranslationError,
};

/// Terminal failure of a modality pipeline, rendered to clients as `{error}`.
#[derive(Debug, thiserror::Error)]
pub enum ProcessingError {
    #[error("Unsupported file type. Please upload PDF, DOCX, or TXT.")]
    UnsupportedFileType,
    #[error("No readable text found in the document.")]
    NoReadableText,
    #[error("No audio track found in the video.")]
    NoAudioTrack,
    #[error("No speech detected in the video.")]
    NoSpeechDetected,
    #[error("Transcription failed or returned empty text.")]
    TranscriptionFailed,
    #[error("Upstream service error: {0}")]
    UpstreamServiceError(String),
    #[error("Invalid response from upstream service: {0}")]
    InvalidResponseShape(String),
    #[error("Unsupported video format: {0}. Please upload MP4, MKV, WEBM, or AVI.")]
    UnsupportedMediaType(String),
    #[error("Upload exceeds the limit of {limit} bytes.")]
    PayloadTooLarge { limit: u64 },
    #[error("Error processing document: {0}")]
    ExtractionFailed(String),
    #[error("Error processing media: {0}")]
    MediaProcessing(String),
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
    #[error("{0}")]
    InvalidRequest(String),
}

impl From<FileLoaderError> for ProcessingError {
    fn from(err: FileLoaderError) -> Self {
        match err {
            FileLoaderError::UnsupportedFileType(_) => Self::UnsupportedFileType,
            FileLoaderError::NoTextFound(_) => Self::NoReadableText,
            FileLoaderError::ExtractionFailed(msg) => Self::ExtractionFailed(msg),
        }
    }
}

impl From<LlmClientError> for ProcessingError {
    fn from(err: LlmClientError) -> Self {
        match err {
            LlmClientError::InvalidResponse(msg) => Self::InvalidResponseShape(msg),
            other => Self::UpstreamServiceError(other.to_string()),
        }
    }
}

impl From<TranslationError> for ProcessingError {
    fn from(err: TranslationError) -> Self {
        match err {
            TranslationError::Upstream(inner) => inner.into(),
            TranslationError::EmptyTranslation => {
                Self::InvalidResponseShape("translation returned empty text".to_string())
            }
        }
    }
}

impl From<TranscriptionError> for ProcessingError {
    fn from(err: TranscriptionError) -> Self {
        tracing::warn!(error = %err, "Transcription service reported an error");
        Self::TranscriptionFailed
    }
}

impl From<DemuxError> for ProcessingError {
    fn from(err: DemuxError) -> Self {
        Self::MediaProcessing(err.to_string())
    }
}
