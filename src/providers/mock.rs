/*!
 * Mock collaborator implementations for testing.
 *
 * One `MockCollaborators` instance stands in for all four external services
 * and counts every call per stage, so tests can assert not only on results
 * but on which collaborators were (or were not) invoked.
 */

use async_trait::async_trait;
use bytes::Bytes;
use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};

use crate::errors::ProviderError;
use crate::providers::{PhoneticTransliterator, SpeechSynthesizer, Translator, Transliterator};

/// Which stage a mock should fail at
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum MockFailure {
    /// All stages succeed
    None,
    /// Translation fails
    Translation,
    /// Script transliteration fails
    Transliteration,
    /// Phonetic romanization fails
    Phonetics,
    /// Speech synthesis fails
    Speech,
}

/// Per-stage call counters, shared between the mock and the test
#[derive(Debug, Default)]
pub struct CallCounts {
    /// Calls to the translator
    pub translate: AtomicUsize,
    /// Calls to the transliterator
    pub transliterate: AtomicUsize,
    /// Calls to the romanizer
    pub romanize: AtomicUsize,
    /// Calls to the synthesizer
    pub synthesize: AtomicUsize,
}

impl CallCounts {
    /// Total calls made to any collaborator
    pub fn total(&self) -> usize {
        self.translate.load(Ordering::SeqCst)
            + self.transliterate.load(Ordering::SeqCst)
            + self.romanize.load(Ordering::SeqCst)
            + self.synthesize.load(Ordering::SeqCst)
    }
}

/// Mock implementation of all four collaborator traits
#[derive(Debug, Clone)]
pub struct MockCollaborators {
    /// Which stage, if any, should fail
    failure: MockFailure,
    /// Shared call counters
    counts: Arc<CallCounts>,
}

impl MockCollaborators {
    /// Create a mock where every stage succeeds
    pub fn working() -> Self {
        Self::with_failure(MockFailure::None)
    }

    /// Create a mock that fails at the given stage
    pub fn with_failure(failure: MockFailure) -> Self {
        Self {
            failure,
            counts: Arc::new(CallCounts::default()),
        }
    }

    /// Get a handle to the call counters
    pub fn counts(&self) -> Arc<CallCounts> {
        self.counts.clone()
    }

    fn fail(&self, stage: MockFailure) -> Result<(), ProviderError> {
        if self.failure == stage {
            return Err(ProviderError::RequestFailed(format!(
                "simulated {:?} failure",
                stage
            )));
        }
        Ok(())
    }
}

#[async_trait]
impl Translator for MockCollaborators {
    async fn translate(
        &self,
        _source: &str,
        _target: &str,
        text: &str,
    ) -> Result<String, ProviderError> {
        self.counts.translate.fetch_add(1, Ordering::SeqCst);
        self.fail(MockFailure::Translation)?;
        Ok(format!("[kn]{}", text))
    }
}

#[async_trait]
impl Transliterator for MockCollaborators {
    async fn transliterate(
        &self,
        _source_script: &str,
        _target_script: &str,
        text: &str,
    ) -> Result<String, ProviderError> {
        self.counts.transliterate.fetch_add(1, Ordering::SeqCst);
        self.fail(MockFailure::Transliteration)?;
        Ok(format!("[ml-script]{}", text))
    }
}

#[async_trait]
impl PhoneticTransliterator for MockCollaborators {
    async fn romanize(
        &self,
        _source_script: &str,
        _scheme: &str,
        text: &str,
    ) -> Result<String, ProviderError> {
        self.counts.romanize.fetch_add(1, Ordering::SeqCst);
        self.fail(MockFailure::Phonetics)?;
        Ok(format!("[itrans]{}", text))
    }
}

#[async_trait]
impl SpeechSynthesizer for MockCollaborators {
    async fn synthesize(&self, _language: &str, text: &str) -> Result<Bytes, ProviderError> {
        self.counts.synthesize.fetch_add(1, Ordering::SeqCst);
        self.fail(MockFailure::Speech)?;
        Ok(Bytes::from(format!("MP3:{}", text)))
    }
}
