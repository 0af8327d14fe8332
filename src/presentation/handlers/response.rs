use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::Serialize;

use crate::application::services::ProcessingError;

#[derive(Debug, Serialize)]
pub struct ApiResponse {
    pub response: String,
}

impl ApiResponse {
    pub fn new(response: impl Into<String>) -> Self {
        Self {
            response: response.into(),
        }
    }
}

#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
}

pub fn status_for(err: &ProcessingError) -> StatusCode {
    match err {
        ProcessingError::UnsupportedFileType
        | ProcessingError::NoReadableText
        | ProcessingError::NoAudioTrack
        | ProcessingError::NoSpeechDetected
        | ProcessingError::ExtractionFailed(_)
        | ProcessingError::MediaProcessing(_) => StatusCode::UNPROCESSABLE_ENTITY,
        ProcessingError::TranscriptionFailed
        | ProcessingError::UpstreamServiceError(_)
        | ProcessingError::InvalidResponseShape(_) => StatusCode::BAD_GATEWAY,
        ProcessingError::UnsupportedMediaType(_) => StatusCode::UNSUPPORTED_MEDIA_TYPE,
        ProcessingError::PayloadTooLarge { .. } => StatusCode::PAYLOAD_TOO_LARGE,
        ProcessingError::InvalidRequest(_) => StatusCode::BAD_REQUEST,
        ProcessingError::Io(_) => StatusCode::INTERNAL_SERVER_ERROR,
    }
}

impl IntoResponse for ProcessingError {
    fn into_response(self) -> Response {
        let status = status_for(&self);
        if status.is_server_error() {
            tracing::error!(error = %self, status = status.as_u16(), "Request failed");
        } else {
            tracing::warn!(error = %self, status = status.as_u16(), "Request rejected");
        }

        (
            status,
            Json(ErrorResponse {
                error: self.to_string(),
            }),
        )
            .into_response()
    }
}
