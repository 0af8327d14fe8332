use std::path::Path;

use async_trait::async_trait;

/// Media probing and demuxing. Implementations run the decoding work outside
/// the async runtime and stop it when the returned future is dropped.
#[async_trait]
pub trait AudioDemuxer: Send + Sync {
    async fn has_audio_track(&self, media: &Path) -> Result<bool, DemuxError>;

    /// Writes the first audio track of `media` to `audio_out` as WAV.
    async fn extract_audio(&self, media: &Path, audio_out: &Path) -> Result<(), DemuxError>;
}

#[derive(Debug, thiserror::Error)]
pub enum DemuxError {
    #[error("failed to launch {tool}: {source}")]
    Spawn {
        tool: String,
        #[source]
        source: std::io::Error,
    },
    #[error("{tool} exited with {status}: {stderr}")]
    ToolFailed {
        tool: String,
        status: String,
        stderr: String,
    },
    #[error("unreadable media container: {0}")]
    InvalidContainer(String),
}
