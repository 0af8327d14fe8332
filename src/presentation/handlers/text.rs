use axum::Json;
use axum::extract::State;

use crate::application::services::ProcessingError;
use crate::presentation::handlers::form::FormFields;
use crate::presentation::handlers::response::ApiResponse;
use crate::presentation::state::AppState;

#[tracing::instrument(skip(state, form))]
pub async fn process_text_handler(
    State(state): State<AppState>,
    form: FormFields,
) -> Result<Json<ApiResponse>, ProcessingError> {
    let text = form.require("text")?;
    let target = state
        .translation_service
        .target_language(form.get("target_language"));

    tracing::debug!(chars = text.len(), target = %target, "Processing text request");

    let response = state.text_service.process(text).await?;
    let response = state.translation_service.localize(response, &target).await?;

    Ok(Json(ApiResponse::new(response)))
}
