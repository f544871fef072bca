use api_base::core::config::{AppConfig, LogFormat};
use api_base::setup_logging;

#[test]
fn test_logging_setup() {
    // This test verifies that the logging setup function doesn't panic
    let result = std::panic::catch_unwind(|| {
        setup_logging(&AppConfig::default());
    });

    assert!(result.is_ok(), "setup_logging function should not panic");
}

#[test]
fn test_logging_setup_twice_is_harmless() {
    let text = AppConfig {
        log_level: "not a valid = filter ((".to_string(),
        log_format: LogFormat::Text,
    };

    let result = std::panic::catch_unwind(|| {
        setup_logging(&text);
        setup_logging(&AppConfig::default());
    });

    assert!(result.is_ok(), "repeated setup_logging calls should not panic");
}
