/*!
 * Error types for the kalike application.
 *
 * This module contains custom error types for different parts of the application,
 * using the thiserror crate for ergonomic error definitions.
 */

// Allow dead code - error types are for library consumers
#![allow(dead_code)]

use thiserror::Error;

/// Errors that can occur when talking to an external language service
#[derive(Error, Debug)]
pub enum ProviderError {
    /// Error when making an API request fails
    #[error("API request failed: {0}")]
    RequestFailed(String),

    /// Error when parsing an API response fails
    #[error("Failed to parse API response: {0}")]
    ParseError(String),

    /// Error returned by the API itself
    #[error("API responded with error: {status_code} - {message}")]
    ApiError {
        /// HTTP status code
        status_code: u16,
        /// Error message from the API
        message: String,
    },

    /// Error establishing or maintaining a connection
    #[error("Connection error: {0}")]
    ConnectionError(String),

    /// Error related to rate limiting
    #[error("Rate limit exceeded: {0}")]
    RateLimitExceeded(String),
}

/// Errors that can occur during a pipeline run
///
/// Each collaborator stage gets its own variant so callers can tell an
/// invalid input apart from an unavailable service, and name the stage
/// that failed in the user-visible message.
#[derive(Error, Debug)]
pub enum PipelineError {
    /// Input was empty or whitespace-only; no collaborator was called
    #[error("No text to translate")]
    EmptyInput,

    /// The translation service failed
    #[error("Translation failed: {0}")]
    Translation(#[source] ProviderError),

    /// The script transliteration service failed
    #[error("Transliteration failed: {0}")]
    Transliteration(#[source] ProviderError),

    /// The phonetic transcription service failed
    #[error("Phonetic transcription failed: {0}")]
    Phonetics(#[source] ProviderError),

    /// The speech synthesis service failed
    #[error("Speech synthesis failed: {0}")]
    Speech(#[source] ProviderError),
}

impl PipelineError {
    /// Whether this error is a user-input problem rather than a service failure
    pub fn is_input_error(&self) -> bool {
        matches!(self, PipelineError::EmptyInput)
    }

    /// Name of the pipeline stage that produced the error
    pub fn stage(&self) -> &'static str {
        match self {
            PipelineError::EmptyInput => "input",
            PipelineError::Translation(_) => "translation",
            PipelineError::Transliteration(_) => "transliteration",
            PipelineError::Phonetics(_) => "phonetics",
            PipelineError::Speech(_) => "speech",
        }
    }
}

/// Main application error type that wraps all other errors
#[derive(Error, Debug)]
pub enum AppError {
    /// Error from a file operation
    #[error("File error: {0}")]
    File(String),

    /// Error from a language service
    #[error("Provider error: {0}")]
    Provider(#[from] ProviderError),

    /// Error from a pipeline run
    #[error("Pipeline error: {0}")]
    Pipeline(#[from] PipelineError),

    /// Any other error
    #[error("Unknown error: {0}")]
    Unknown(String),
}

// Utility functions for error conversion
impl From<anyhow::Error> for AppError {
    fn from(error: anyhow::Error) -> Self {
        Self::Unknown(error.to_string())
    }
}

impl From<std::io::Error> for AppError {
    fn from(error: std::io::Error) -> Self {
        Self::File(error.to_string())
    }
}
