use axum::Json;
use axum::extract::{Multipart, State};

use crate::application::services::ProcessingError;
use crate::presentation::handlers::form::{UploadForm, log_instruction};
use crate::presentation::handlers::response::ApiResponse;
use crate::presentation::state::AppState;

#[tracing::instrument(skip(state, multipart))]
pub async fn process_document_handler(
    State(state): State<AppState>,
    mut multipart: Multipart,
) -> Result<Json<ApiResponse>, ProcessingError> {
    let mut form = UploadForm::read(&mut multipart, &["file"]).await?;
    let document = form.take_file(&["file"])?;
    let fields = form.fields();
    let instruction = fields.get("prompt");
    let target = state
        .translation_service
        .target_language(fields.get("target_language"));

    log_instruction(instruction);

    let response = state.document_service.process(&document, instruction).await?;
    let response = state.translation_service.localize(response, &target).await?;

    Ok(Json(ApiResponse::new(response)))
}
