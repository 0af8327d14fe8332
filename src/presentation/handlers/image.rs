use axum::Json;
use axum::extract::{Multipart, State};

use crate::application::services::{ImageLanguages, ProcessingError};
use crate::presentation::handlers::form::{UploadForm, log_instruction};
use crate::presentation::handlers::response::ApiResponse;
use crate::presentation::state::AppState;

const IMAGE_FIELDS: &[&str] = &["image", "file"];

/// The generator answers in the requested language directly, so the result
/// is returned without a translation pass.
#[tracing::instrument(skip(state, multipart))]
pub async fn process_image_handler(
    State(state): State<AppState>,
    mut multipart: Multipart,
) -> Result<Json<ApiResponse>, ProcessingError> {
    let mut form = UploadForm::read(&mut multipart, IMAGE_FIELDS).await?;
    let image = form.take_file(IMAGE_FIELDS)?;
    let fields = form.fields();
    let instruction = fields.get("prompt");
    let languages = ImageLanguages {
        source: fields.get("source_lang"),
        target: fields.get("target_lang"),
    };

    log_instruction(instruction);

    let response = state
        .image_service
        .process(&image, instruction, languages)
        .await?;

    Ok(Json(ApiResponse::new(response)))
}
