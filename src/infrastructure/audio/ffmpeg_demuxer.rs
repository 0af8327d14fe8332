use std::path::{Path, PathBuf};
use std::process::{Output, Stdio};

use async_trait::async_trait;
use tokio::process::Command;

use crate::application::ports::{AudioDemuxer, DemuxError};

const TARGET_SAMPLE_RATE: &str = "16000";

/// Demuxes audio through the `ffprobe` and `ffmpeg` binaries.
///
/// Children are spawned with `kill_on_drop`, so a caller that gives up on
/// the future (a timeout, a dropped request) kills the decoder instead of
/// leaving it running.
#[derive(Debug, Clone)]
pub struct FfmpegDemuxer {
    ffmpeg: PathBuf,
    ffprobe: PathBuf,
}

impl Default for FfmpegDemuxer {
    fn default() -> Self {
        Self::new("ffmpeg", "ffprobe")
    }
}

impl FfmpegDemuxer {
    pub fn new(ffmpeg: impl Into<PathBuf>, ffprobe: impl Into<PathBuf>) -> Self {
        Self {
            ffmpeg: ffmpeg.into(),
            ffprobe: ffprobe.into(),
        }
    }

    /// Returns an error naming the first binary that cannot be executed.
    pub async fn check_binaries(&self) -> Result<(), DemuxError> {
        for binary in [&self.ffmpeg, &self.ffprobe] {
            let output = run(Command::new(binary).arg("-version"), binary).await?;
            ensure_success(binary, &output)?;
        }
        Ok(())
    }
}

#[async_trait]
impl AudioDemuxer for FfmpegDemuxer {
    async fn has_audio_track(&self, media: &Path) -> Result<bool, DemuxError> {
        let output = run(
            Command::new(&self.ffprobe)
                .args(["-v", "error", "-select_streams", "a"])
                .args(["-show_entries", "stream=index", "-of", "csv=p=0"])
                .arg(media),
            &self.ffprobe,
        )
        .await?;

        if !output.status.success() {
            return Err(DemuxError::InvalidContainer(
                String::from_utf8_lossy(&output.stderr).trim().to_string(),
            ));
        }

        let streams = String::from_utf8_lossy(&output.stdout);
        let audio_streams = streams.lines().filter(|l| !l.trim().is_empty()).count();
        tracing::debug!(audio_streams, media = %media.display(), "Probed media container");

        Ok(audio_streams > 0)
    }

    async fn extract_audio(&self, media: &Path, audio_out: &Path) -> Result<(), DemuxError> {
        let output = run(
            Command::new(&self.ffmpeg)
                .args(["-nostdin", "-hide_banner", "-loglevel", "error", "-y", "-i"])
                .arg(media)
                .args(["-vn", "-map", "0:a:0", "-acodec", "pcm_s16le"])
                .args(["-ar", TARGET_SAMPLE_RATE, "-ac", "1", "-f", "wav"])
                .arg(audio_out),
            &self.ffmpeg,
        )
        .await?;

        ensure_success(&self.ffmpeg, &output)?;
        tracing::debug!(audio_out = %audio_out.display(), "Audio track written");
        Ok(())
    }
}

async fn run(command: &mut Command, binary: &Path) -> Result<Output, DemuxError> {
    command
        .stdin(Stdio::null())
        .kill_on_drop(true)
        .output()
        .await
        .map_err(|source| DemuxError::Spawn {
            tool: binary.display().to_string(),
            source,
        })
}

fn ensure_success(binary: &Path, output: &Output) -> Result<(), DemuxError> {
    if output.status.success() {
        return Ok(());
    }
    Err(DemuxError::ToolFailed {
        tool: binary.display().to_string(),
        status: output.status.to_string(),
        stderr: String::from_utf8_lossy(&output.stderr).trim().to_string(),
    })
}
