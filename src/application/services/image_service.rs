use std::sync::Arc;

use crate::application::ports::{ImageInput, LlmClient};
use crate::domain::{UploadedAsset, build_image_prompt};

use super::processing_error::ProcessingError;

pub struct ImageService {
    llm_client: Arc<dyn LlmClient>,
}

/// Language hints accompanying an image request.
#[derive(Debug, Clone, Copy, Default)]
pub struct ImageLanguages<'a> {
    pub source: Option<&'a str>,
    pub target: Option<&'a str>,
}

impl ImageService {
    pub fn new(llm_client: Arc<dyn LlmClient>) -> Self {
        Self { llm_client }
    }

    #[tracing::instrument(
        skip(self, image, instruction),
        fields(filename = %image.filename, bytes = image.size_bytes())
    )]
    pub async fn process(
        &self,
        image: &UploadedAsset,
        instruction: Option<&str>,
        languages: ImageLanguages<'_>,
    ) -> Result<String, ProcessingError> {
        if image.is_empty() {
            return Err(ProcessingError::InvalidRequest(
                "Uploaded image is empty.".to_string(),
            ));
        }

        let mime_type = image_mime_type(image).ok_or_else(|| {
            ProcessingError::InvalidRequest(format!(
                "Unsupported image type: {}",
                image.content_type
            ))
        })?;

        let prompt = build_image_prompt(instruction, languages.source, languages.target);
        let input = ImageInput {
            data: &image.data,
            mime_type,
        };

        Ok(self.llm_client.describe_image(input, &prompt).await?)
    }
}

fn image_mime_type(image: &UploadedAsset) -> Option<&str> {
    let declared = image.content_type.split(';').next().unwrap_or_default().trim();
    if declared.starts_with("image/") {
        return Some(declared);
    }

    match image.extension()?.as_str() {
        "png" => Some("image/png"),
        "jpg" | "jpeg" => Some("image/jpeg"),
        "webp" => Some("image/webp"),
        "gif" => Some("image/gif"),
        "heic" => Some("image/heic"),
        _ => None,
    }
}
