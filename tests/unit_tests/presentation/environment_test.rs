use syllabus_tutor::presentation::config::{Environment, UploadSettings};

#[test]
fn given_known_names_when_parsing_environment_then_maps_variants() {
    assert_eq!(
        Environment::try_from("local".to_string()),
        Ok(Environment::Local)
    );
    assert_eq!(
        Environment::try_from("TEST".to_string()),
        Ok(Environment::Test)
    );
    assert_eq!(
        Environment::try_from("production".to_string()),
        Ok(Environment::Prod)
    );
}

#[test]
fn given_unknown_name_when_parsing_environment_then_returns_error() {
    let result = Environment::try_from("staging".to_string());
    assert!(result.unwrap_err().contains("staging"));
}

#[test]
fn given_environment_when_resolving_settings_file_then_uses_lowercase_name() {
    assert_eq!(Environment::Prod.settings_file(), "appsettings.prod");
    assert_eq!(Environment::default(), Environment::Local);
}

#[test]
fn given_megabyte_limit_when_converting_then_returns_bytes() {
    let upload = UploadSettings {
        max_file_size_mb: 20,
    };
    assert_eq!(upload.max_file_size_bytes(), 20 * 1024 * 1024);
}

#[test]
fn given_no_settings_file_when_loading_then_built_in_defaults_apply() {
    let settings = syllabus_tutor::presentation::Settings::load(Environment::Test).unwrap();

    assert_eq!(settings.session.question_limit, 5);
    assert_eq!(settings.gemini.chat_model, "gemini-2.0-flash-lite");
    assert_eq!(settings.gemini.poll_interval().as_secs(), 5);
    assert_eq!(settings.session.idle_ttl().as_secs(), 3600);
    assert_eq!(settings.session.sweep_interval().as_secs(), 60);
    assert!(!settings.logging.enable_json);
}
