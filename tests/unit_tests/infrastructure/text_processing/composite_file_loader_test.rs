use std::sync::Arc;

use bytes::Bytes;

use tolka::application::ports::{FileLoader, FileLoaderError};
use tolka::domain::{DocumentFormat, UploadedAsset};
use tolka::infrastructure::text_processing::{CompositeFileLoader, PlainTextAdapter};

use super::fixtures::{docx_with_paragraphs, pdf_with_lines};

fn asset(filename: &str, data: Vec<u8>) -> UploadedAsset {
    UploadedAsset::new(filename, "application/octet-stream", Bytes::from(data))
}

#[tokio::test]
async fn given_txt_with_three_lines_when_loading_then_returns_all_lines() {
    let loader = CompositeFileLoader::with_default_adapters();

    let text = loader
        .extract_text(&asset("notes.TXT", b"alpha\nbeta\ngamma\n".to_vec()))
        .await
        .unwrap();

    assert_eq!(text.lines().count(), 3);
}

#[tokio::test]
async fn given_docx_when_loading_then_delegates_to_docx_adapter() {
    let loader = CompositeFileLoader::with_default_adapters();

    let text = loader
        .extract_text(&asset(
            "report.docx",
            docx_with_paragraphs(&["Quarterly report", "Revenue grew"]),
        ))
        .await
        .unwrap();

    assert_eq!(text, "Quarterly report\nRevenue grew");
}

#[tokio::test]
async fn given_pdf_when_loading_then_delegates_to_pdf_adapter() {
    let loader = CompositeFileLoader::with_default_adapters();

    let text = loader
        .extract_text(&asset("slides.pdf", pdf_with_lines(&["Hello PDF"])))
        .await
        .unwrap();

    assert!(text.contains("Hello"));
}

#[tokio::test]
async fn given_unknown_extension_when_loading_then_returns_unsupported_file_type() {
    let loader = CompositeFileLoader::with_default_adapters();

    let result = loader
        .extract_text(&asset("archive.xyz", b"data".to_vec()))
        .await;

    assert!(matches!(
        result,
        Err(FileLoaderError::UnsupportedFileType(ext)) if ext == "xyz"
    ));
}

#[tokio::test]
async fn given_filename_without_extension_when_loading_then_returns_unsupported_file_type() {
    let loader = CompositeFileLoader::with_default_adapters();

    let result = loader.extract_text(&asset("README", b"data".to_vec())).await;

    assert!(matches!(result, Err(FileLoaderError::UnsupportedFileType(_))));
}

#[tokio::test]
async fn given_zero_bytes_when_loading_then_returns_no_text_found() {
    let loader = CompositeFileLoader::with_default_adapters();

    let result = loader.extract_text(&asset("empty.pdf", Vec::new())).await;

    assert!(matches!(result, Err(FileLoaderError::NoTextFound(_))));
}

#[tokio::test]
async fn given_unregistered_format_when_loading_then_returns_unsupported_file_type() {
    let text_adapter: Arc<dyn FileLoader> = Arc::new(PlainTextAdapter);
    let loader = CompositeFileLoader::new(vec![(DocumentFormat::Txt, text_adapter)]);

    let result = loader
        .extract_text(&asset("scan.pdf", pdf_with_lines(&["x"])))
        .await;

    assert!(matches!(result, Err(FileLoaderError::UnsupportedFileType(_))));
}
