use axum::Json;
use axum::extract::{Multipart, State};

use crate::application::services::{ProcessingError, StagedVideo};
use crate::domain::VideoFormat;
use crate::presentation::handlers::form::{FormFields, log_instruction, multipart_error};
use crate::presentation::handlers::response::ApiResponse;
use crate::presentation::state::AppState;

/// The `file` part is streamed straight to disk as it is read; the other
/// fields may come before or after it.
#[tracing::instrument(skip(state, multipart))]
pub async fn process_video_handler(
    State(state): State<AppState>,
    mut multipart: Multipart,
) -> Result<Json<ApiResponse>, ProcessingError> {
    let mut fields = FormFields::default();
    let mut staged: Option<StagedVideo> = None;

    while let Some(field) = multipart.next_field().await.map_err(multipart_error)? {
        let Some(name) = field.name().map(str::to_string) else {
            continue;
        };

        if name != "file" {
            if field.file_name().is_none() {
                let value = field.text().await.map_err(multipart_error)?;
                fields.insert(name, value);
            }
            continue;
        }

        let content_type = field.content_type().unwrap_or_default().to_string();
        let filename = field.file_name().unwrap_or_default().to_string();

        let format = VideoFormat::detect(&content_type, &filename).ok_or_else(|| {
            let declared = if content_type.is_empty() {
                filename.clone()
            } else {
                content_type.clone()
            };
            ProcessingError::UnsupportedMediaType(declared)
        })?;

        tracing::debug!(
            filename = %filename,
            content_type = %content_type,
            format = ?format,
            "Streaming video upload"
        );

        staged = Some(state.video_service.stage(field, format).await?);
    }

    let staged =
        staged.ok_or_else(|| ProcessingError::InvalidRequest("No file uploaded".to_string()))?;
    let instruction = fields.get("prompt");
    let target = state
        .translation_service
        .target_language(fields.get("target_language"));

    log_instruction(instruction);

    let response = state
        .video_service
        .process_staged(staged, instruction)
        .await?;
    let response = state.translation_service.localize(response, &target).await?;

    Ok(Json(ApiResponse::new(response)))
}
