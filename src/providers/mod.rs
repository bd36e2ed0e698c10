/*!
 * Client implementations for the external language services.
 *
 * This module contains clients for the collaborators the application
 * delegates to:
 * - GoogleTranslate: sentence translation between languages
 * - Aksharamukha: script transliteration and phonetic romanization
 * - GoogleTts: speech synthesis returning MP3 bytes
 *
 * Every substantive language operation happens in one of these services;
 * the traits below are the seams the pipeline is tested through.
 */

use async_trait::async_trait;
use bytes::Bytes;
use std::fmt::Debug;

use crate::errors::ProviderError;

/// Translation between two languages, keyed by ISO 639-1 codes
#[async_trait]
pub trait Translator: Send + Sync + Debug {
    /// Translate `text` from `source` to `target`
    async fn translate(
        &self,
        source: &str,
        target: &str,
        text: &str,
    ) -> Result<String, ProviderError>;
}

/// Rendering text from one script into another, keyed by named scripts
#[async_trait]
pub trait Transliterator: Send + Sync + Debug {
    /// Transliterate `text` from `source_script` into `target_script`
    async fn transliterate(
        &self,
        source_script: &str,
        target_script: &str,
        text: &str,
    ) -> Result<String, ProviderError>;
}

/// Latin-alphabet phonetic rendering, keyed by a named romanization scheme
#[async_trait]
pub trait PhoneticTransliterator: Send + Sync + Debug {
    /// Romanize `text` written in `source_script` using `scheme` (e.g. ITRANS)
    async fn romanize(
        &self,
        source_script: &str,
        scheme: &str,
        text: &str,
    ) -> Result<String, ProviderError>;
}

/// Speech synthesis keyed by an ISO 639-1 language code, returning MP3 bytes
#[async_trait]
pub trait SpeechSynthesizer: Send + Sync + Debug {
    /// Synthesize spoken audio for `text` in `language`
    async fn synthesize(&self, language: &str, text: &str) -> Result<Bytes, ProviderError>;
}

pub mod aksharamukha;
pub mod google_translate;
pub mod google_tts;
pub mod mock;
