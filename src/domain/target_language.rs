use std::fmt;

pub const DEFAULT_LANGUAGE: &str = "en";

/// Language requested for the final response text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TargetLanguage(String);

impl TargetLanguage {
    /// Blank input falls back to the default language.
    pub fn parse(raw: Option<&str>) -> Self {
        match raw.map(str::trim) {
            Some(code) if !code.is_empty() => Self(code.to_string()),
            _ => Self::default(),
        }
    }

    /// Like [`TargetLanguage::parse`], with a configured fallback.
    pub fn parse_or(raw: Option<&str>, default_language: &str) -> Self {
        match raw.map(str::trim) {
            Some(code) if !code.is_empty() => Self(code.to_string()),
            _ => Self(default_language.trim().to_string()),
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn is_default_for(&self, default_language: &str) -> bool {
        self.0.eq_ignore_ascii_case(default_language.trim())
    }
}

impl Default for TargetLanguage {
    fn default() -> Self {
        Self(DEFAULT_LANGUAGE.to_string())
    }
}

impl fmt::Display for TargetLanguage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
