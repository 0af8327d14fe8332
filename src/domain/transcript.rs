use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Transcript {
    pub text: String,
    pub language: Option<String>,
}

impl Transcript {
    pub fn new(text: impl Into<String>, language: Option<String>) -> Self {
        Self {
            text: text.into(),
            language,
        }
    }

    pub fn has_speech(&self) -> bool {
        !self.text.trim().is_empty()
    }
}
