use reqwest::RequestBuilder;
use reqwest::multipart::{Form, Part};
use serde::Deserialize;

use crate::application::ports::TranscriptionError;
use crate::domain::Transcript;

/// Whisper `verbose_json` payload; only the fields the pipelines read.
#[derive(Deserialize)]
struct VerboseTranscription {
    text: String,
    #[serde(default)]
    language: Option<String>,
}

/// Guesses the upload's container from its leading bytes so the service
/// decodes it with the right demuxer. Unknown data is labelled as WAV.
pub(super) fn audio_file_name(audio: &[u8]) -> (&'static str, &'static str) {
    match audio {
        [b'R', b'I', b'F', b'F', ..] => ("audio.wav", "audio/wav"),
        [b'I', b'D', b'3', ..] | [0xFF, 0xE0..=0xFF, ..] => ("audio.mp3", "audio/mpeg"),
        [b'O', b'g', b'g', b'S', ..] => ("audio.ogg", "audio/ogg"),
        [b'f', b'L', b'a', b'C', ..] => ("audio.flac", "audio/flac"),
        [0x1A, 0x45, 0xDF, 0xA3, ..] => ("audio.webm", "audio/webm"),
        [_, _, _, _, b'f', b't', b'y', b'p', ..] => ("audio.m4a", "audio/mp4"),
        _ => ("audio.wav", "audio/wav"),
    }
}

/// Multipart body shared by the OpenAI and Azure transcription endpoints.
pub(super) fn transcription_form(audio: &[u8]) -> Result<Form, TranscriptionError> {
    let (file_name, mime) = audio_file_name(audio);
    let file_part = Part::bytes(audio.to_vec())
        .file_name(file_name)
        .mime_str(mime)
        .map_err(|e| TranscriptionError::ApiRequestFailed(format!("mime: {e}")))?;

    Ok(Form::new()
        .text("response_format", "verbose_json")
        .part("file", file_part))
}

/// Sends a prepared transcription request and parses the transcript.
pub(super) async fn send_transcription(
    request: RequestBuilder,
    provider: &'static str,
) -> Result<Transcript, TranscriptionError> {
    let response = request
        .send()
        .await
        .map_err(|e| TranscriptionError::ApiRequestFailed(format!("request: {e}")))?;

    let status = response.status();
    if !status.is_success() {
        let body = response
            .text()
            .await
            .unwrap_or_else(|_| "unknown error".to_string());
        tracing::warn!(provider, %status, "Transcription request rejected");
        return Err(TranscriptionError::ApiRequestFailed(format!(
            "status {status}: {body}"
        )));
    }

    let payload: VerboseTranscription = response
        .json()
        .await
        .map_err(|e| TranscriptionError::InvalidResponse(format!("parse response: {e}")))?;

    let transcript = Transcript::new(payload.text.trim(), payload.language);
    tracing::info!(
        provider,
        chars = transcript.text.len(),
        language = transcript.language.as_deref().unwrap_or("unknown"),
        "Transcription completed"
    );

    Ok(transcript)
}
