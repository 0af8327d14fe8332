use std::sync::LazyLock;

use regex::Regex;

const MAX_LOGGED_CHARS: usize = 100;

static CREDENTIAL: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"(?i)(?P<key>\bbearer\s+|\b(?:api[_-]?key|password|secret|token)=)[^\s&"']+"#)
        .unwrap()
});

/// Renders a user instruction for a single log line: credentials are masked,
/// whitespace is flattened and long text is cut to its first characters.
pub fn sanitize_prompt(prompt: &str) -> String {
    let masked = CREDENTIAL.replace_all(prompt, "${key}[REDACTED]");
    let flattened = masked.split_whitespace().collect::<Vec<_>>().join(" ");

    if flattened.is_empty() {
        return "[EMPTY]".to_string();
    }

    let total_chars = flattened.chars().count();
    if total_chars <= MAX_LOGGED_CHARS {
        return flattened;
    }

    let head: String = flattened.chars().take(MAX_LOGGED_CHARS).collect();
    format!("{head}... ({total_chars} chars total)")
}
