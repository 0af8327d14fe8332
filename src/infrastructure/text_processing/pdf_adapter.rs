use std::io::Write;
use std::path::Path;
use std::time::Duration;

use async_trait::async_trait;
use bytes::Bytes;
use pdf_oxide::PdfDocument;

use crate::application::ports::{FileLoader, FileLoaderError};
use crate::domain::UploadedAsset;

use super::text_sanitizer::sanitize_extracted_text;

const EXTRACTION_TIMEOUT: Duration = Duration::from_secs(30);

/// Text layer extraction with `pdf_oxide`. Scanned pages without a text
/// layer are skipped rather than failing the document.
#[derive(Default)]
pub struct PdfAdapter;

struct ExtractedPages {
    pages: Vec<String>,
    page_count: usize,
}

impl PdfAdapter {
    pub fn new() -> Self {
        Self
    }

    fn extract(data: &Bytes) -> Result<ExtractedPages, FileLoaderError> {
        let mut staged = tempfile::Builder::new()
            .prefix("tolka-")
            .suffix(".pdf")
            .tempfile()
            .map_err(|e| FileLoaderError::ExtractionFailed(format!("failed to stage PDF: {e}")))?;
        staged.write_all(data).map_err(|e| {
            FileLoaderError::ExtractionFailed(format!("failed to stage PDF: {e}"))
        })?;

        Self::read_pages(staged.path())
    }

    fn read_pages(path: &Path) -> Result<ExtractedPages, FileLoaderError> {
        let document = PdfDocument::open(path)
            .map_err(|e| FileLoaderError::ExtractionFailed(format!("failed to parse PDF: {e}")))?;
        let page_count = document.page_count().map_err(|e| {
            FileLoaderError::ExtractionFailed(format!("failed to read page count: {e}"))
        })?;

        let pages = (0..page_count)
            .filter_map(|index| match document.extract_text(index) {
                Ok(raw) => Some(sanitize_extracted_text(&raw)),
                Err(e) => {
                    tracing::debug!(page = index, error = %e, "Skipping unreadable PDF page");
                    None
                }
            })
            .filter(|text| !text.is_empty())
            .collect();

        Ok(ExtractedPages { pages, page_count })
    }
}

#[async_trait]
impl FileLoader for PdfAdapter {
    #[tracing::instrument(skip(self, asset), fields(filename = %asset.filename))]
    async fn extract_text(&self, asset: &UploadedAsset) -> Result<String, FileLoaderError> {
        let data = asset.data.clone();
        let task = tokio::task::spawn_blocking(move || Self::extract(&data));

        let extracted = tokio::time::timeout(EXTRACTION_TIMEOUT, task)
            .await
            .map_err(|_| FileLoaderError::ExtractionFailed("PDF extraction timed out".to_string()))?
            .map_err(|e| FileLoaderError::ExtractionFailed(format!("task join error: {e}")))??;

        tracing::info!(
            page_count = extracted.page_count,
            pages_with_text = extracted.pages.len(),
            "PDF text extraction complete"
        );

        if extracted.pages.is_empty() {
            return Err(FileLoaderError::NoTextFound(asset.filename.clone()));
        }

        Ok(extracted.pages.join("\n\n"))
    }
}
