use std::sync::Arc;

use crate::application::ports::{FileLoader, LlmClient};
use crate::domain::{PromptSubject, UploadedAsset, build_prompt};

use super::processing_error::ProcessingError;

pub struct DocumentService {
    file_loader: Arc<dyn FileLoader>,
    llm_client: Arc<dyn LlmClient>,
}

impl DocumentService {
    pub fn new(file_loader: Arc<dyn FileLoader>, llm_client: Arc<dyn LlmClient>) -> Self {
        Self {
            file_loader,
            llm_client,
        }
    }

    #[tracing::instrument(
        skip(self, asset, instruction),
        fields(filename = %asset.filename, bytes = asset.size_bytes())
    )]
    pub async fn process(
        &self,
        asset: &UploadedAsset,
        instruction: Option<&str>,
    ) -> Result<String, ProcessingError> {
        let extracted = self.file_loader.extract_text(asset).await?;

        if extracted.trim().is_empty() {
            return Err(ProcessingError::NoReadableText);
        }

        tracing::info!(chars = extracted.len(), "Document text extracted");

        let prompt = build_prompt(PromptSubject::Document, &extracted, instruction);
        let response = self.llm_client.complete(&prompt).await?;
        Ok(response)
    }
}
