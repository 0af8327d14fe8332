use tolka::domain::{DEFAULT_LANGUAGE, TargetLanguage};

#[test]
fn given_code_with_whitespace_when_parsing_then_it_is_trimmed() {
    assert_eq!(TargetLanguage::parse(Some("  fr ")).as_str(), "fr");
}

#[test]
fn given_missing_code_when_parsing_then_default_language_is_used() {
    assert_eq!(TargetLanguage::parse(None).as_str(), DEFAULT_LANGUAGE);
}

#[test]
fn given_configured_default_when_parsing_blank_then_configured_default_is_used() {
    let target = TargetLanguage::parse_or(Some(""), "de");

    assert_eq!(target.as_str(), "de");
    assert!(target.is_default_for("DE"));
}
