use tolka::domain::{PromptSubject, build_prompt};

#[test]
fn given_video_transcript_with_request_when_building_then_strict_branch_is_used() {
    let prompt = build_prompt(
        PromptSubject::Video,
        "we ship on friday",
        Some("When do we ship?"),
    );

    assert_eq!(
        prompt,
        "You are analyzing a transcribed video speech.\n\n\
         **Task:**\n\
         - Follow the user's request **strictly**.\n\
         - Do **NOT** add any extra information.\n\
         - Keep responses **concise and relevant**.\n\n\
         **User Request:** When do we ship?\n\n\
         **Transcription:**\nwe ship on friday\n\n\
         Respond **only** based on the transcription and user request."
    );
}

#[test]
fn given_audio_transcript_without_request_when_building_then_summary_branch_is_used() {
    let prompt = build_prompt(PromptSubject::Audio, "hello", None);

    assert_eq!(
        prompt,
        "The following is a transcription of an audio recording. \
         Extract and summarize the most relevant details.\n\n\
         **Transcription:**\nhello\n\n\
         Keep your response concise."
    );
}

#[test]
fn given_document_with_request_when_building_then_refers_to_document_content() {
    let prompt = build_prompt(PromptSubject::Document, "body", Some("  Summarize  "));

    assert!(prompt.starts_with("You are analyzing a document."));
    assert!(prompt.contains("**User Request:** Summarize\n"));
    assert!(prompt.ends_with("Respond **only** based on the document content and user request."));
}
