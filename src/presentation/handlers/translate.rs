use axum::Json;
use axum::extract::State;

use crate::application::services::ProcessingError;
use crate::presentation::handlers::form::FormFields;
use crate::presentation::handlers::response::ApiResponse;
use crate::presentation::state::AppState;

/// Translates caller-supplied text, accepting the fields from the query
/// string, the form body, or both.
#[tracing::instrument(skip(state, form))]
pub async fn translate_response_handler(
    State(state): State<AppState>,
    form: FormFields,
) -> Result<Json<ApiResponse>, ProcessingError> {
    let text = form.require("text")?;
    let target = state
        .translation_service
        .target_language(form.get("target_language"));

    let translated = state.translation_service.translate(text, &target).await?;

    Ok(Json(ApiResponse::new(translated)))
}
