use tolka::application::ports::{
    DemuxError, FileLoaderError, LlmClientError, TranscriptionError, TranslationError,
};
use tolka::application::services::ProcessingError;

#[test]
fn given_loader_errors_when_converting_then_map_to_document_errors() {
    assert!(matches!(
        ProcessingError::from(FileLoaderError::UnsupportedFileType("xyz".into())),
        ProcessingError::UnsupportedFileType
    ));
    assert!(matches!(
        ProcessingError::from(FileLoaderError::NoTextFound("a.txt".into())),
        ProcessingError::NoReadableText
    ));
    assert_eq!(
        ProcessingError::from(FileLoaderError::ExtractionFailed("bad xref".into())).to_string(),
        "Error processing document: bad xref"
    );
}

#[test]
fn given_malformed_upstream_payload_when_converting_then_maps_to_invalid_response_shape() {
    assert!(matches!(
        ProcessingError::from(LlmClientError::InvalidResponse("no candidates".into())),
        ProcessingError::InvalidResponseShape(_)
    ));
    assert!(matches!(
        ProcessingError::from(TranslationError::EmptyTranslation),
        ProcessingError::InvalidResponseShape(_)
    ));
}

#[test]
fn given_upstream_failures_when_converting_then_map_to_upstream_service_error() {
    assert!(matches!(
        ProcessingError::from(LlmClientError::RateLimited),
        ProcessingError::UpstreamServiceError(_)
    ));
    assert!(matches!(
        ProcessingError::from(TranslationError::Upstream(LlmClientError::ApiRequestFailed(
            "HTTP 500".into()
        ))),
        ProcessingError::UpstreamServiceError(_)
    ));
}

#[test]
fn given_media_errors_when_converting_then_map_to_pipeline_errors() {
    assert!(matches!(
        ProcessingError::from(TranscriptionError::InvalidResponse("x".into())),
        ProcessingError::TranscriptionFailed
    ));
    assert!(matches!(
        ProcessingError::from(DemuxError::InvalidContainer("moov atom not found".into())),
        ProcessingError::MediaProcessing(_)
    ));
}
