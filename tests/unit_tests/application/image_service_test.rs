use std::sync::Arc;

use bytes::Bytes;

use tolka::application::services::{ImageLanguages, ImageService, ProcessingError};
use tolka::domain::UploadedAsset;

use crate::support::RecordingLlmClient;

#[tokio::test]
async fn given_image_with_language_hints_when_processing_then_prompt_carries_hints() {
    let llm = Arc::new(RecordingLlmClient::new("A red stop sign"));
    let service = ImageService::new(llm.clone());
    let image = UploadedAsset::new("sign.jpg", "image/jpeg", Bytes::from_static(b"\xff\xd8"));

    let result = service
        .process(
            &image,
            None,
            ImageLanguages {
                source: Some("de"),
                target: Some("en"),
            },
        )
        .await;

    assert_eq!(result.unwrap(), "A red stop sign");
    let prompt = &llm.prompts()[0];
    assert!(prompt.starts_with("[image/jpeg] Describe this image."));
    assert!(prompt.contains("written in de"));
    assert!(prompt.ends_with("Respond in en."));
}

#[tokio::test]
async fn given_octet_stream_png_when_processing_then_mime_comes_from_extension() {
    let llm = Arc::new(RecordingLlmClient::new("ok"));
    let service = ImageService::new(llm.clone());
    let image = UploadedAsset::new(
        "scan.PNG",
        "application/octet-stream",
        Bytes::from_static(b"\x89PNG"),
    );

    service
        .process(&image, Some("Read it"), ImageLanguages::default())
        .await
        .unwrap();

    assert!(llm.prompts()[0].starts_with("[image/png] Read it"));
}

#[tokio::test]
async fn given_non_image_upload_when_processing_then_returns_invalid_request() {
    let service = ImageService::new(Arc::new(RecordingLlmClient::new("unused")));
    let upload = UploadedAsset::new("notes.txt", "text/plain", Bytes::from_static(b"hi"));

    let result = service
        .process(&upload, None, ImageLanguages::default())
        .await;

    assert!(matches!(result, Err(ProcessingError::InvalidRequest(_))));
}
