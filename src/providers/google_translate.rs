use std::time::Duration;
use async_trait::async_trait;
use log::{debug, error};
use reqwest::Client;
use serde_json::Value;

use crate::errors::ProviderError;
use crate::providers::Translator;

/// Client for the unauthenticated Google Translate web API
///
/// Uses the `translate_a/single` endpoint with `client=gtx`, which needs no
/// API key. The response is an untyped nested JSON array; the first element
/// holds the translated segments.
#[derive(Debug)]
pub struct GoogleTranslate {
    /// HTTP client for API requests
    client: Client,
    /// API endpoint URL
    endpoint: String,
}

impl GoogleTranslate {
    /// Create a new translation client
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
        format!("{}/translate_a/single", self.endpoint.trim_end_matches('/'))
    }

    /// Extract the translated text from a `translate_a/single` response
    ///
    /// The payload looks like `[[["seg1","src1",...],["seg2","src2",...]],...]`;
    /// long inputs come back split into several segments that have to be
    /// concatenated in order.
    pub fn parse_translation(value: &Value) -> Result<String, ProviderError> {
        let segments = value
            .get(0)
            .and_then(Value::as_array)
            .ok_or_else(|| {
                ProviderError::ParseError("missing segment array in translate response".to_string())
            })?;

        let mut translated = String::new();
        for segment in segments {
            if let Some(text) = segment.get(0).and_then(Value::as_str) {
                translated.push_str(text);
            }
        }

        if translated.is_empty() {
            return Err(ProviderError::ParseError(
                "translate response contained no text segments".to_string(),
            ));
        }

        Ok(translated)
    }

    /// Test the connection to the translation service
    pub async fn test_connection(&self) -> Result<(), ProviderError> {
        self.translate("ml", "kn", "നന്ദി").await.map(|_| ())
    }
}

#[async_trait]
impl Translator for GoogleTranslate {
    async fn translate(
        &self,
        source: &str,
        target: &str,
        text: &str,
    ) -> Result<String, ProviderError> {
        debug!("Translating {} chars from {} to {}", text.chars().count(), source, target);

        let response = self
            .client
            .get(self.api_url())
            .query(&[
                ("client", "gtx"),
                ("sl", source),
                ("tl", target),
                ("dt", "t"),
                ("q", text),
            ])
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
        if status.as_u16() == 429 {
            return Err(ProviderError::RateLimitExceeded(
                "Too many requests to the translation service".to_string(),
            ));
        }
        if !status.is_success() {
            let message = response
                .text()
                .await
                .unwrap_or_else(|_| "Failed to get error response text".to_string());
            error!("Translation API error ({}): {}", status, message);
            return Err(ProviderError::ApiError {
                status_code: status.as_u16(),
                message,
            });
        }

        let body = response
            .json::<Value>()
            .await
            .map_err(|e| ProviderError::ParseError(e.to_string()))?;

        Self::parse_translation(&body)
    }
}
