use axum::Json;
use axum::extract::{Multipart, State};

use crate::application::services::ProcessingError;
use crate::domain::Transcript;
use crate::presentation::handlers::form::UploadForm;
use crate::presentation::state::AppState;

#[tracing::instrument(skip(state, multipart))]
pub async fn stt_handler(
    State(state): State<AppState>,
    mut multipart: Multipart,
) -> Result<Json<Transcript>, ProcessingError> {
    let mut form = UploadForm::read(&mut multipart, &["file"]).await?;
    let audio = form.take_file(&["file"])?;

    let transcript = state.audio_service.transcribe(&audio.data).await?;

    Ok(Json(transcript))
}
