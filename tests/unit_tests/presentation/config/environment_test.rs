use tolka::presentation::Environment;
use tolka::presentation::config::UnknownEnvironment;

#[test]
fn given_aliases_when_parsing_environment_then_maps_to_canonical_variant() {
    assert_eq!("dev".parse(), Ok(Environment::Local));
    assert_eq!(" Test ".parse(), Ok(Environment::Test));
    assert_eq!("PRODUCTION".parse(), Ok(Environment::Prod));
}

#[test]
fn given_unknown_name_when_parsing_environment_then_error_names_the_input() {
    let error = "Staging".parse::<Environment>().unwrap_err();

    assert_eq!(error, UnknownEnvironment("staging".to_string()));
    assert!(error.to_string().contains("local, test, or prod"));
}

#[test]
fn given_environment_when_displaying_then_matches_settings_file_suffix() {
    assert_eq!(Environment::Prod.to_string(), "Prod");
    assert_eq!(Environment::default(), Environment::Local);
    assert!(Environment::Prod.is_production());
    assert!(!Environment::Test.is_production());
}
