use syllabus_tutor::infrastructure::observability::TracingConfig;
use syllabus_tutor::presentation::config::{Environment, LoggingSettings};

#[test]
fn given_default_config_when_created_then_environment_is_set() {
    let config = TracingConfig::default();
    assert!(!config.environment.is_empty());
    assert!(config.default_filter.contains("syllabus_tutor"));
}

#[test]
fn given_logging_settings_when_building_config_then_level_and_format_follow_settings() {
    let logging = LoggingSettings {
        level: "warn".to_string(),
        enable_json: true,
    };

    let config = TracingConfig::from_settings(&logging, Environment::Prod);

    assert!(config.json_format);
    assert_eq!(config.environment, "prod");
    assert!(config.default_filter.starts_with("warn,syllabus_tutor=warn"));
}
