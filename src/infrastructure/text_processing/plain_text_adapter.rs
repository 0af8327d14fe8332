use async_trait::async_trait;

use crate::application::ports::{FileLoader, FileLoaderError};
use crate::domain::UploadedAsset;

pub struct PlainTextAdapter;

#[async_trait]
impl FileLoader for PlainTextAdapter {
    async fn extract_text(&self, asset: &UploadedAsset) -> Result<String, FileLoaderError> {
        let text = std::str::from_utf8(&asset.data)
            .map_err(|e| FileLoaderError::ExtractionFailed(e.to_string()))?
            .trim();

        if text.is_empty() {
            return Err(FileLoaderError::NoTextFound(asset.filename.clone()));
        }

        Ok(text.to_string())
    }
}
