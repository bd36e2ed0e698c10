use std::time::Duration;
use async_trait::async_trait;
use log::{debug, error};
use reqwest::Client;

use crate::errors::ProviderError;
use crate::providers::{PhoneticTransliterator, Transliterator};

/// Client for the Aksharamukha script conversion API
///
/// Aksharamukha converts between named Indic scripts and treats romanization
/// schemes (ITRANS, IAST, ...) as just another target script, so one client
/// serves both the script transliteration and the phonetic transcription
/// stages of the pipeline.
#[derive(Debug)]
pub struct Aksharamukha {
    /// HTTP client for API requests
    client: Client,
    /// API endpoint URL
    endpoint: String,
}

impl Aksharamukha {
    /// Create a new transliteration client
    pub fn new(endpoint: impl Into<String>, timeout_secs: u64) -> Self {
        Self {
            client: Client::builder()
                .timeout(Duration::from_secs(timeout_secs))
                .build()
                .unwrap_or_default(),
            endpoint: endpoint.into(),
        }
    }

    fn api_url(&self) -> String {
        format!("{}/api/public", self.endpoint.trim_end_matches('/'))
    }

    /// Convert `text` from one named scheme to another
    ///
    /// The public API takes `source`, `target` and `text` query parameters
    /// and responds with the converted text as a plain string.
    async fn process(
        &self,
        source: &str,
        target: &str,
        text: &str,
    ) -> Result<String, ProviderError> {
        debug!("Converting {} -> {} ({} chars)", source, target, text.chars().count());

        let response = self
            .client
            .get(self.api_url())
            .query(&[("source", source), ("target", target), ("text", text)])
            .send()
            .await
            .map_err(|e| {
                if e.is_connect() {
                    ProviderError::ConnectionError(e.to_string())
                } else {
                    ProviderError::RequestFailed(e.to_string())
                }
            })?;

        let status = response.status();
        if !status.is_success() {
            let message = response
                .text()
                .await
                .unwrap_or_else(|_| "Failed to get error response text".to_string());
            error!("Transliteration API error ({}): {}", status, message);
            return Err(ProviderError::ApiError {
                status_code: status.as_u16(),
                message,
            });
        }

        let body = response
            .text()
            .await
            .map_err(|e| ProviderError::ParseError(e.to_string()))?;

        // The endpoint occasionally wraps the result in JSON string quotes
        let converted = body.trim();
        let converted = converted
            .strip_prefix('"')
            .and_then(|s| s.strip_suffix('"'))
            .unwrap_or(converted);

        Ok(converted.to_string())
    }

    /// Test the connection to the transliteration service
    pub async fn test_connection(&self) -> Result<(), ProviderError> {
        self.process("Kannada", "Malayalam", "ನಮಸ್ಕಾರ").await.map(|_| ())
    }
}

#[async_trait]
impl Transliterator for Aksharamukha {
    async fn transliterate(
        &self,
        source_script: &str,
        target_script: &str,
        text: &str,
    ) -> Result<String, ProviderError> {
        self.process(source_script, target_script, text).await
    }
}

#[async_trait]
impl PhoneticTransliterator for Aksharamukha {
    async fn romanize(
        &self,
        source_script: &str,
        scheme: &str,
        text: &str,
    ) -> Result<String, ProviderError> {
        self.process(source_script, scheme, text).await
    }
}
