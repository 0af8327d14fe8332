use bytes::Bytes;

use tolka::application::ports::{FileLoader, FileLoaderError};
use tolka::domain::UploadedAsset;
use tolka::infrastructure::text_processing::PlainTextAdapter;

fn txt(data: &'static [u8]) -> UploadedAsset {
    UploadedAsset::new("readme.txt", "text/plain", Bytes::from_static(data))
}

#[tokio::test]
async fn given_padded_utf8_when_extracting_then_returns_trimmed_string() {
    let text = PlainTextAdapter
        .extract_text(&txt("\n  Grüße aus Tromsø  \n".as_bytes()))
        .await
        .unwrap();

    assert_eq!(text, "Grüße aus Tromsø");
}

#[tokio::test]
async fn given_invalid_utf8_bytes_when_extracting_then_returns_extraction_failed() {
    let result = PlainTextAdapter.extract_text(&txt(&[0xFF, 0xFE, 0xFD])).await;

    assert!(matches!(result, Err(FileLoaderError::ExtractionFailed(_))));
}

#[tokio::test]
async fn given_whitespace_only_file_when_extracting_then_returns_no_text_found() {
    let result = PlainTextAdapter.extract_text(&txt(b" \r\n\t ")).await;

    assert!(matches!(result, Err(FileLoaderError::NoTextFound(_))));
}
