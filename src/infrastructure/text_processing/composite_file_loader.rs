use std::collections::HashMap;
use std::sync::Arc;

use async_trait::async_trait;

use crate::application::ports::{FileLoader, FileLoaderError};
use crate::domain::{DocumentFormat, UploadedAsset};

use super::docx_adapter::DocxAdapter;
use super::pdf_adapter::PdfAdapter;
use super::plain_text_adapter::PlainTextAdapter;

/// Routes an upload to the adapter registered for its file extension.
pub struct CompositeFileLoader {
    adapters: HashMap<DocumentFormat, Arc<dyn FileLoader>>,
}

impl CompositeFileLoader {
    pub fn new(adapters: Vec<(DocumentFormat, Arc<dyn FileLoader>)>) -> Self {
        Self {
            adapters: adapters.into_iter().collect(),
        }
    }

    /// PDF, DOCX and plain-text adapters.
    pub fn with_default_adapters() -> Self {
        let pdf: Arc<dyn FileLoader> = Arc::new(PdfAdapter::new());
        let docx: Arc<dyn FileLoader> = Arc::new(DocxAdapter::new());
        let txt: Arc<dyn FileLoader> = Arc::new(PlainTextAdapter);

        Self::new(vec![
            (DocumentFormat::Pdf, pdf),
            (DocumentFormat::Docx, docx),
            (DocumentFormat::Txt, txt),
        ])
    }
}

#[async_trait]
impl FileLoader for CompositeFileLoader {
    async fn extract_text(&self, asset: &UploadedAsset) -> Result<String, FileLoaderError> {
        let extension = asset.extension().unwrap_or_default();

        let adapter = DocumentFormat::from_extension(&extension)
            .and_then(|format| self.adapters.get(&format))
            .ok_or_else(|| FileLoaderError::UnsupportedFileType(extension.clone()))?;

        if asset.is_empty() {
            return Err(FileLoaderError::NoTextFound(asset.filename.clone()));
        }

        tracing::debug!(
            extension = %extension,
            bytes = asset.size_bytes(),
            "Dispatching document extraction"
        );

        adapter.extract_text(asset).await
    }
}
