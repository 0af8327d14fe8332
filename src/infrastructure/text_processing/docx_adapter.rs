use std::io::{Cursor, Read};
use std::sync::LazyLock;

use async_trait::async_trait;
use regex::Regex;
use zip::ZipArchive;

use crate::application::ports::{FileLoader, FileLoaderError};
use crate::domain::UploadedAsset;

const DOCUMENT_PART: &str = "word/document.xml";
const MAX_DOCUMENT_PART_BYTES: u64 = 64 * 1024 * 1024;

static BODY_TOKEN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r#"(?s)<w:p(?:\s[^>]*?)?(?P<empty>/)?>|(?P<close></w:p>)|<w:t(?:\s[^>]*)?>(?P<text>.*?)</w:t>|(?P<tab><w:tab/>)|<w:br/>"#,
    )
    .unwrap()
});

/// Extracts paragraph text from Office Open XML word documents.
#[derive(Default)]
pub struct DocxAdapter;

impl DocxAdapter {
    pub fn new() -> Self {
        Self
    }

    fn read_document_part(data: &[u8]) -> Result<String, FileLoaderError> {
        let mut archive = ZipArchive::new(Cursor::new(data)).map_err(|e| {
            FileLoaderError::ExtractionFailed(format!("failed to open DOCX archive: {e}"))
        })?;

        let entry = archive.by_name(DOCUMENT_PART).map_err(|e| {
            FileLoaderError::ExtractionFailed(format!("missing {DOCUMENT_PART}: {e}"))
        })?;

        let mut xml = String::new();
        entry
            .take(MAX_DOCUMENT_PART_BYTES)
            .read_to_string(&mut xml)
            .map_err(|e| {
                FileLoaderError::ExtractionFailed(format!("failed to read {DOCUMENT_PART}: {e}"))
            })?;

        Ok(xml)
    }
}

/// Joins the runs of every `<w:p>` paragraph, one entry per paragraph in
/// document order. Paragraphs nested inside another (text boxes) get their
/// own entry after their parent and do not cut the parent short.
pub fn paragraphs_from_document_xml(xml: &str) -> Vec<String> {
    let mut paragraphs: Vec<String> = Vec::new();
    let mut open: Vec<usize> = Vec::new();

    for token in BODY_TOKEN.captures_iter(xml) {
        if token.name("close").is_some() {
            open.pop();
            continue;
        }

        if let Some(text) = token.name("text") {
            if let Some(&current) = open.last() {
                paragraphs[current].push_str(&decode_xml_entities(text.as_str()));
            }
            continue;
        }

        if token[0].starts_with("<w:p") {
            paragraphs.push(String::new());
            if token.name("empty").is_none() {
                open.push(paragraphs.len() - 1);
            }
            continue;
        }

        if let Some(&current) = open.last() {
            let separator = if token.name("tab").is_some() { '\t' } else { '\n' };
            paragraphs[current].push(separator);
        }
    }

    paragraphs
}

fn decode_xml_entities(text: &str) -> String {
    if !text.contains('&') {
        return text.to_string();
    }
    text.replace("&lt;", "<")
        .replace("&gt;", ">")
        .replace("&quot;", "\"")
        .replace("&apos;", "'")
        .replace("&amp;", "&")
}

#[async_trait]
impl FileLoader for DocxAdapter {
    #[tracing::instrument(skip(self, asset), fields(filename = %asset.filename))]
    async fn extract_text(&self, asset: &UploadedAsset) -> Result<String, FileLoaderError> {
        let data = asset.data.clone();
        let xml = tokio::task::spawn_blocking(move || Self::read_document_part(&data))
            .await
            .map_err(|e| FileLoaderError::ExtractionFailed(format!("task join error: {e}")))??;

        let paragraphs = paragraphs_from_document_xml(&xml);
        tracing::info!(paragraphs = paragraphs.len(), "DOCX text extraction complete");

        let text = paragraphs.join("\n");
        if text.trim().is_empty() {
            return Err(FileLoaderError::NoTextFound(asset.filename.clone()));
        }

        Ok(text)
    }
}
