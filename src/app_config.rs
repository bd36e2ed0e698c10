use anyhow::{Result, anyhow};
use serde::{Deserialize, Serialize};
use std::default::Default;

/// Application configuration module
/// This module handles the application configuration including loading,
/// validating and saving configuration settings.
/// Represents the application configuration
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct Config {
    /// Source language code (ISO), the language the user types in
    pub source_language: String,

    /// Target language code (ISO), the language being learned
    pub target_language: String,

    /// Romanization scheme for phonetic transcription
    #[serde(default = "default_phonetic_scheme")]
    pub phonetic_scheme: String,

    /// External service configuration
    #[serde(default)]
    pub services: ServicesConfig,

    /// Log level
    #[serde(default)]
    pub log_level: LogLevel,
}

/// Endpoints and timeouts for the external language services
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct ServicesConfig {
    /// Translation service settings
    #[serde(default = "default_translation_service")]
    pub translation: ServiceConfig,

    /// Transliteration service settings (script rendering and phonetics)
    #[serde(default = "default_transliteration_service")]
    pub transliteration: ServiceConfig,

    /// Speech synthesis service settings
    #[serde(default = "default_speech_service")]
    pub speech: ServiceConfig,
}

impl Default for ServicesConfig {
    fn default() -> Self {
        Self {
            translation: default_translation_service(),
            transliteration: default_transliteration_service(),
            speech: default_speech_service(),
        }
    }
}

/// Settings for one external service
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct ServiceConfig {
    /// Service endpoint URL
    pub endpoint: String,

    /// Request timeout in seconds
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

/// Log verbosity level
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Default)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    Error,
    Warn,
    #[default]
    Info,
    Debug,
    Trace,
}

fn default_timeout_secs() -> u64 {
    30
}

fn default_phonetic_scheme() -> String {
    "ITRANS".to_string()
}

fn default_translation_service() -> ServiceConfig {
    ServiceConfig {
        endpoint: "https://translate.googleapis.com".to_string(),
        timeout_secs: default_timeout_secs(),
    }
}

fn default_transliteration_service() -> ServiceConfig {
    ServiceConfig {
        endpoint: "https://aksharamukha-plugin.appspot.com".to_string(),
        timeout_secs: default_timeout_secs(),
    }
}

fn default_speech_service() -> ServiceConfig {
    ServiceConfig {
        // The unauthenticated TTS endpoint lives on the main translate host
        endpoint: "https://translate.google.com".to_string(),
        timeout_secs: default_timeout_secs(),
    }
}

impl Config {
    /// Validate the configuration for consistency and required values
    pub fn validate(&self) -> Result<()> {
        // Both languages must be real ISO codes the services accept
        let _source_name = crate::language_utils::get_language_name(&self.source_language)?;
        let _target_name = crate::language_utils::get_language_name(&self.target_language)?;

        // Both languages must map to a script the transliteration service knows
        let _source_script = crate::language_utils::script_name(&self.source_language)?;
        let _target_script = crate::language_utils::script_name(&self.target_language)?;

        if !crate::language_utils::is_supported_scheme(&self.phonetic_scheme) {
            return Err(anyhow!(
                "Unsupported phonetic scheme '{}' (supported: {})",
                self.phonetic_scheme,
                crate::language_utils::SUPPORTED_SCHEMES.join(", ")
            ));
        }

        for (name, service) in [
            ("translation", &self.services.translation),
            ("transliteration", &self.services.transliteration),
            ("speech", &self.services.speech),
        ] {
            if service.endpoint.trim().is_empty() {
                return Err(anyhow!("Endpoint for {} service cannot be empty", name));
            }
            url::Url::parse(&service.endpoint)
                .map_err(|e| anyhow!("Invalid {} endpoint '{}': {}", name, service.endpoint, e))?;
        }

        Ok(())
    }
}

/// Default implementation for Config
impl Default for Config {
    fn default() -> Self {
        Config {
            source_language: "ml".to_string(),
            target_language: "kn".to_string(),
            phonetic_scheme: default_phonetic_scheme(),
            services: ServicesConfig::default(),
            log_level: LogLevel::default(),
        }
    }
}
