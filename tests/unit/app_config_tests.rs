/*!
 * Tests for application configuration
 */

use kalike::app_config::{Config, LogLevel};

#[test]
fn test_default_shouldTargetKannadaFromMalayalam() {
    let config = Config::default();

    assert_eq!(config.source_language, "ml");
    assert_eq!(config.target_language, "kn");
    assert_eq!(config.phonetic_scheme, "ITRANS");
    assert_eq!(config.log_level, LogLevel::Info);
    assert!(config.validate().is_ok());
}

#[test]
fn test_default_shouldCarryEndpointsForAllThreeServices() {
    let config = Config::default();

    assert!(config.services.translation.endpoint.starts_with("https://"));
    assert!(config.services.transliteration.endpoint.starts_with("https://"));
    assert!(config.services.speech.endpoint.starts_with("https://"));
    assert!(config.services.translation.timeout_secs > 0);
}

#[test]
fn test_validate_withUnknownLanguage_shouldFail() {
    let mut config = Config::default();
    config.source_language = "qq".to_string();

    assert!(config.validate().is_err());
}

#[test]
fn test_validate_withNonIndicLanguage_shouldFailOnScript() {
    // English is a valid ISO code but has no script the transliteration
    // service can render
    let mut config = Config::default();
    config.target_language = "en".to_string();

    assert!(config.validate().is_err());
}

#[test]
fn test_validate_withUnsupportedScheme_shouldFail() {
    let mut config = Config::default();
    config.phonetic_scheme = "Klingon".to_string();

    assert!(config.validate().is_err());
}

#[test]
fn test_validate_withBadEndpoint_shouldFail() {
    let mut config = Config::default();
    config.services.speech.endpoint = "not a url".to_string();

    assert!(config.validate().is_err());
}

#[test]
fn test_serde_roundTrip_shouldPreserveAllFields() {
    let config = Config::default();
    let json = serde_json::to_string_pretty(&config).unwrap();
    let parsed: Config = serde_json::from_str(&json).unwrap();

    assert_eq!(parsed.source_language, config.source_language);
    assert_eq!(parsed.target_language, config.target_language);
    assert_eq!(parsed.phonetic_scheme, config.phonetic_scheme);
    assert_eq!(parsed.services.translation.endpoint, config.services.translation.endpoint);
    assert_eq!(parsed.log_level, config.log_level);
}

#[test]
fn test_deserialize_withMinimalJson_shouldApplyDefaults() {
    let json = r#"{ "source_language": "ml", "target_language": "kn" }"#;
    let config: Config = serde_json::from_str(json).unwrap();

    assert_eq!(config.phonetic_scheme, "ITRANS");
    assert!(!config.services.transliteration.endpoint.is_empty());
    assert_eq!(config.log_level, LogLevel::Info);
}
