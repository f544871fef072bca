use api_base::AdapterError;
use api_base::core::config::{AppConfig, LogFormat};

#[test]
fn test_defaults_when_unset() {
    let config = AppConfig::from_vars(None, None).unwrap();

    assert_eq!(config.log_level, "info");
    assert_eq!(config.log_format, LogFormat::Json);
}

#[test]
fn test_blank_values_fall_back_to_defaults() {
    let config = AppConfig::from_vars(Some("  ".to_string()), Some(String::new())).unwrap();

    assert_eq!(config.log_level, "info");
    assert_eq!(config.log_format, LogFormat::Json);
}

#[test]
fn test_explicit_values() {
    let config =
        AppConfig::from_vars(Some("api_base=debug".to_string()), Some("TEXT".to_string())).unwrap();

    assert_eq!(config.log_level, "api_base=debug");
    assert_eq!(config.log_format, LogFormat::Text);
}

#[test]
fn test_unknown_log_format_is_rejected() {
    let err = AppConfig::from_vars(None, Some("xml".to_string())).unwrap_err();

    match err {
        AdapterError::Config(msg) => assert!(msg.contains("xml")),
        other => panic!("Unexpected error type: {other}"),
    }
}
