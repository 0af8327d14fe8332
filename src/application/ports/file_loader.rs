use async_trait::async_trait;

use crate::domain::UploadedAsset;

#[async_trait]
pub trait FileLoader: Send + Sync {
    async fn extract_text(&self, asset: &UploadedAsset) -> Result<String, FileLoaderError>;
}

#[derive(Debug, thiserror::Error)]
pub enum FileLoaderError {
    #[error("unsupported file type: {0}")]
    UnsupportedFileType(String),
    #[error("extraction failed: {0}")]
    ExtractionFailed(String),
    #[error("no text found in {0}")]
    NoTextFound(String),
}
