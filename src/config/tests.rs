//! Configuration tests
//!
//! The round-trip test guards the TOML template: when a field is added to
//! Config it fails until to_toml() and FileConfig agree again.

use super::*;

#[test]
fn test_config_roundtrip_default() {
    let config = Config::default();
    let toml_str = config.to_toml();

    let parsed: Result<FileConfig, _> = toml::from_str(&toml_str);
    assert!(
        parsed.is_ok(),
        "Default config should round-trip.\nTOML:\n{}\nError: {:?}",
        toml_str,
        parsed.err()
    );

    let file = parsed.unwrap();
    assert_eq!(file.api_url.as_deref(), Some(DEFAULT_API_URL));
    assert_eq!(file.page_size, Some(DEFAULT_PAGE_SIZE));
    assert_eq!(file.theme.as_deref(), Some("gallery"));
}

#[test]
fn test_logging_section_roundtrip() {
    let mut config = Config::default();
    config.logging.file_enabled = true;
    config.logging.file_rotation = LogRotation::Hourly;

    let parsed: FileConfig = toml::from_str(&config.to_toml()).unwrap();
    let logging = parsed.logging.expect("logging section present");
    assert_eq!(logging.file_enabled, Some(true));
    assert_eq!(logging.file_rotation.as_deref(), Some("hourly"));
}

#[test]
fn test_rotation_parse_is_lenient() {
    assert_eq!(LogRotation::parse("hourly"), LogRotation::Hourly);
    assert_eq!(LogRotation::parse("NEVER"), LogRotation::Never);
    assert_eq!(LogRotation::parse("weekly"), LogRotation::Daily);
}

#[test]
fn test_defaults() {
    let config = Config::default();
    assert_eq!(config.page_size, 12);
    assert!(!config.demo_mode);
    assert_eq!(config.logging.level, "info");
}
