use std::time::Duration;
use async_trait::async_trait;
use bytes::{Bytes, BytesMut};
use log::{debug, error};
use reqwest::Client;

use crate::errors::ProviderError;
use crate::providers::SpeechSynthesizer;

/// Maximum characters the TTS endpoint accepts per request
pub const MAX_CHARS_PER_REQUEST: usize = 100;

/// Browser-like User-Agent the endpoint expects; requests without it are rejected
const USER_AGENT: &str = "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/91.0.4472.124 Safari/537.36";

/// Client for the unauthenticated Google Translate TTS endpoint
///
/// Uses `translate_tts` with `client=tw-ob`, which returns MP3 audio with no
/// API key. Text over the per-request limit is split at whitespace and the
/// MP3 payloads concatenated; players treat back-to-back MP3 streams as one.
#[derive(Debug)]
pub struct GoogleTts {
    /// HTTP client for API requests
    client: Client,
    /// API endpoint URL
    endpoint: String,
}

impl GoogleTts {
    /// Create a new speech synthesis client
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
        format!("{}/translate_tts", self.endpoint.trim_end_matches('/'))
    }

    /// Split text into chunks the endpoint will accept
    ///
    /// Splits at whitespace only, so a chunk never breaks inside a word. A
    /// single word longer than the limit is sent as its own chunk and left
    /// to the service to reject.
    pub fn chunk_text(text: &str) -> Vec<String> {
        let text = text.trim();
        if text.chars().count() <= MAX_CHARS_PER_REQUEST {
            return vec![text.to_string()];
        }

        let mut chunks = Vec::new();
        let mut current = String::new();
        let mut current_chars = 0usize;

        for word in text.split_whitespace() {
            let word_chars = word.chars().count();
            if current_chars > 0 && current_chars + 1 + word_chars > MAX_CHARS_PER_REQUEST {
                chunks.push(std::mem::take(&mut current));
                current_chars = 0;
            }
            if current_chars > 0 {
                current.push(' ');
                current_chars += 1;
            }
            current.push_str(word);
            current_chars += word_chars;
        }

        if !current.is_empty() {
            chunks.push(current);
        }

        chunks
    }

    async fn synthesize_chunk(&self, language: &str, text: &str) -> Result<Bytes, ProviderError> {
        let response = self
            .client
            .get(self.api_url())
            .query(&[
                ("ie", "UTF-8"),
                ("client", "tw-ob"),
                ("tl", language),
                ("q", text),
            ])
            .header("User-Agent", USER_AGENT)
            .header("Referer", "https://translate.google.com/")
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
                "Too many requests to the speech service".to_string(),
            ));
        }
        if !status.is_success() {
            error!("Speech API error ({}) for {} chars", status, text.chars().count());
            return Err(ProviderError::ApiError {
                status_code: status.as_u16(),
                message: format!("speech synthesis rejected with status {}", status),
            });
        }

        response
            .bytes()
            .await
            .map_err(|e| ProviderError::RequestFailed(e.to_string()))
    }

    /// Test the connection to the speech service
    pub async fn test_connection(&self) -> Result<(), ProviderError> {
        self.synthesize_chunk("kn", "ನಮಸ್ಕಾರ").await.map(|_| ())
    }
}

#[async_trait]
impl SpeechSynthesizer for GoogleTts {
    async fn synthesize(&self, language: &str, text: &str) -> Result<Bytes, ProviderError> {
        let chunks = Self::chunk_text(text);
        debug!("Synthesizing {} chunk(s) in {}", chunks.len(), language);

        let mut audio = BytesMut::new();
        for chunk in &chunks {
            let part = self.synthesize_chunk(language, chunk).await?;
            audio.extend_from_slice(&part);
        }

        Ok(audio.freeze())
    }
}
