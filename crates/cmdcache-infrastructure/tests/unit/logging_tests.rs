//! Logging Tests

use cmdcache_infrastructure::config::LoggingConfig;
use cmdcache_infrastructure::logging::{init_logging, parse_log_level};
use tempfile::TempDir;
use tracing::Level;

#[test]
fn test_parse_log_level() {
    assert_eq!(parse_log_level("trace").unwrap(), Level::TRACE);
    assert_eq!(parse_log_level("debug").unwrap(), Level::DEBUG);
    assert_eq!(parse_log_level("INFO").unwrap(), Level::INFO);
    assert_eq!(parse_log_level("warning").unwrap(), Level::WARN);
    assert_eq!(parse_log_level("error").unwrap(), Level::ERROR);
}

#[test]
fn test_parse_invalid_log_level() {
    let err = parse_log_level("verbose").unwrap_err();
    assert!(err.to_string().contains("Invalid log level: verbose"));
}

#[test]
fn test_init_logging_rejects_bad_level() {
    let config = LoggingConfig {
        level: "loud".to_string(),
        ..LoggingConfig::default()
    };
    assert!(init_logging(&config).is_err());
}

// The global subscriber can only be installed once per process, so both the
// first install and the refused second one live in this test.
#[test]
fn test_init_logging_once_with_file_output() {
    let temp_dir = TempDir::new().unwrap();
    let config = LoggingConfig {
        level: "debug".to_string(),
        json_format: true,
        file_output: Some(temp_dir.path().join("cmdcache.log")),
    };

    init_logging(&config).unwrap();
    tracing::info!("written to the rolling file");

    let err = init_logging(&LoggingConfig::default()).unwrap_err();
    assert!(err.to_string().contains("tracing subscriber"));
}
