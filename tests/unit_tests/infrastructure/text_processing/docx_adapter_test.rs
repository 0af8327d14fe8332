use bytes::Bytes;

use tolka::application::ports::{FileLoader, FileLoaderError};
use tolka::domain::UploadedAsset;
use tolka::infrastructure::text_processing::{DocxAdapter, paragraphs_from_document_xml};

use super::fixtures::docx_with_paragraphs;

fn docx(data: Vec<u8>) -> UploadedAsset {
    UploadedAsset::new(
        "letter.docx",
        "application/vnd.openxmlformats-officedocument.wordprocessingml.document",
        Bytes::from(data),
    )
}

#[tokio::test]
async fn given_docx_with_escaped_text_when_extracting_then_entities_are_decoded() {
    let adapter = DocxAdapter::new();

    let text = adapter
        .extract_text(&docx(docx_with_paragraphs(&[
            "Terms &amp; conditions",
            "1 &lt; 2",
        ])))
        .await
        .unwrap();

    assert_eq!(text, "Terms & conditions\n1 < 2");
}

#[tokio::test]
async fn given_docx_with_empty_paragraphs_only_when_extracting_then_returns_no_text_found() {
    let adapter = DocxAdapter::new();

    let result = adapter
        .extract_text(&docx(docx_with_paragraphs(&["", "  "])))
        .await;

    assert!(matches!(result, Err(FileLoaderError::NoTextFound(_))));
}

#[tokio::test]
async fn given_bytes_that_are_not_a_zip_when_extracting_then_returns_extraction_failed() {
    let adapter = DocxAdapter::new();

    let result = adapter.extract_text(&docx(b"plain bytes".to_vec())).await;

    assert!(matches!(result, Err(FileLoaderError::ExtractionFailed(_))));
}

#[test]
fn given_tabs_and_breaks_when_parsing_paragraphs_then_they_become_whitespace() {
    let xml = "<w:p><w:r><w:t>a</w:t><w:tab/><w:t>b</w:t><w:br/><w:t>c</w:t></w:r></w:p>";

    assert_eq!(paragraphs_from_document_xml(xml), vec!["a\tb\nc"]);
}

#[test]
fn given_paragraph_with_text_box_when_parsing_then_text_after_box_is_kept() {
    let document = "<w:document><w:body><w:p><w:r><w:t>Before</w:t></w:r><w:r>\
        <w:txbxContent><w:p><w:r><w:t>Boxed</w:t></w:r></w:p></w:txbxContent></w:r>\
        <w:r><w:t>After</w:t></w:r></w:p></w:body></w:document>";

    assert_eq!(
        paragraphs_from_document_xml(document),
        vec!["BeforeAfter", "Boxed"]
    );
}
