/// What kind of content a prompt wraps.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PromptSubject {
    Video,
    Audio,
    Document,
}

impl PromptSubject {
    fn strict_description(&self) -> &'static str {
        match self {
            Self::Video => "a transcribed video speech",
            Self::Audio => "a transcribed audio recording",
            Self::Document => "a document",
        }
    }

    fn summary_description(&self) -> &'static str {
        match self {
            Self::Video => "a transcription of a video",
            Self::Audio => "a transcription of an audio recording",
            Self::Document => "a document",
        }
    }

    fn content_label(&self) -> &'static str {
        match self {
            Self::Video | Self::Audio => "Transcription",
            Self::Document => "Document Content",
        }
    }

    fn content_reference(&self) -> &'static str {
        match self {
            Self::Video | Self::Audio => "the transcription",
            Self::Document => "the document content",
        }
    }
}

/// Builds the generation prompt for extracted content.
///
/// A non-blank instruction yields the strict branch, which tells the
/// generator to answer only from the content. Otherwise a concise summary is
/// requested.
pub fn build_prompt(subject: PromptSubject, content: &str, instruction: Option<&str>) -> String {
    let label = subject.content_label();

    match instruction.map(str::trim).filter(|i| !i.is_empty()) {
        Some(request) => format!(
            "You are analyzing {description}.\n\n\
             **Task:**\n\
             - Follow the user's request **strictly**.\n\
             - Do **NOT** add any extra information.\n\
             - Keep responses **concise and relevant**.\n\n\
             **User Request:** {request}\n\n\
             **{label}:**\n{content}\n\n\
             Respond **only** based on {reference} and user request.",
            description = subject.strict_description(),
            reference = subject.content_reference(),
        ),
        None => format!(
            "The following is {description}. Extract and summarize the most relevant details.\n\n\
             **{label}:**\n{content}\n\n\
             Keep your response concise.",
            description = subject.summary_description(),
        ),
    }
}

pub const DEFAULT_IMAGE_INSTRUCTION: &str = "Describe this image.";

/// Builds the instruction sent alongside an image, with optional language hints.
pub fn build_image_prompt(
    instruction: Option<&str>,
    source_language: Option<&str>,
    target_language: Option<&str>,
) -> String {
    let mut prompt = instruction
        .map(str::trim)
        .filter(|i| !i.is_empty())
        .unwrap_or(DEFAULT_IMAGE_INSTRUCTION)
        .to_string();

    if let Some(source) = source_language.map(str::trim).filter(|s| !s.is_empty()) {
        prompt.push_str(&format!("\n\nAny text in the image is written in {source}."));
    }
    if let Some(target) = target_language.map(str::trim).filter(|t| !t.is_empty()) {
        prompt.push_str(&format!("\n\nRespond in {target}."));
    }

    prompt
}
