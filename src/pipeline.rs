/*!
 * The translation pipeline.
 *
 * Orchestrates the four external collaborators: translate first, then fan
 * out the three derived steps (script rendering, phonetics, audio) over the
 * translated text. The derived steps depend only on the translation, not on
 * each other, so they run concurrently. Any collaborator failure aborts the
 * run with a stage-typed error and nothing is persisted; appending to the
 * flashcard deck is a separate, explicit user action.
 */

use bytes::Bytes;
use log::{debug, info};
use std::sync::Arc;

use crate::errors::PipelineError;
use crate::flashcards::FlashcardRecord;
use crate::providers::{PhoneticTransliterator, SpeechSynthesizer, Translator, Transliterator};

/// Languages, scripts and scheme a pipeline operates on, derived from config
#[derive(Debug, Clone)]
pub struct PipelineSettings {
    /// Source language code (ISO 639-1)
    pub source_language: String,
    /// Target language code (ISO 639-1)
    pub target_language: String,
    /// Named script of the source language
    pub source_script: String,
    /// Named script of the target language
    pub target_script: String,
    /// Romanization scheme for phonetics
    pub phonetic_scheme: String,
}

/// Everything the pipeline produced for one input
#[derive(Debug, Clone)]
pub struct TranslationOutcome {
    /// Original input text
    pub source_text: String,
    /// Translated text in the target language
    pub translated_text: String,
    /// Translated text re-rendered in the source script
    pub translated_in_source_script: String,
    /// Latin-alphabet phonetic rendering of the translated text
    pub phonetic_transcription: String,
    /// MP3 audio of the translated text
    pub audio: Bytes,
}

impl TranslationOutcome {
    /// Convert this outcome into a flashcard record
    pub fn to_flashcard(&self) -> FlashcardRecord {
        FlashcardRecord {
            malayalam_input: self.source_text.clone(),
            kannada: self.translated_text.clone(),
            kannada_in_malayalam: self.translated_in_source_script.clone(),
            phonetics: self.phonetic_transcription.clone(),
            audio: self.audio.clone(),
        }
    }
}

/// Orchestrates the external collaborators for one translation request
pub struct TranslationPipeline {
    translator: Arc<dyn Translator>,
    transliterator: Arc<dyn Transliterator>,
    romanizer: Arc<dyn PhoneticTransliterator>,
    synthesizer: Arc<dyn SpeechSynthesizer>,
    settings: PipelineSettings,
}

impl TranslationPipeline {
    /// Create a pipeline over the given collaborators
    pub fn new(
        translator: Arc<dyn Translator>,
        transliterator: Arc<dyn Transliterator>,
        romanizer: Arc<dyn PhoneticTransliterator>,
        synthesizer: Arc<dyn SpeechSynthesizer>,
        settings: PipelineSettings,
    ) -> Self {
        Self {
            translator,
            transliterator,
            romanizer,
            synthesizer,
            settings,
        }
    }

    /// Settings this pipeline was built with
    pub fn settings(&self) -> &PipelineSettings {
        &self.settings
    }

    /// Run the full pipeline for one input text
    ///
    /// Empty or whitespace-only input fails with `EmptyInput` before any
    /// collaborator is called. A translation failure aborts before the
    /// derived steps; a derived-step failure aborts the whole run. No
    /// partial results are returned.
    pub async fn run(&self, text: &str) -> Result<TranslationOutcome, PipelineError> {
        let text = text.trim();
        if text.is_empty() {
            return Err(PipelineError::EmptyInput);
        }

        info!(
            "Translating from {} to {}",
            self.settings.source_language, self.settings.target_language
        );

        let translated = self
            .translator
            .translate(&self.settings.source_language, &self.settings.target_language, text)
            .await
            .map_err(PipelineError::Translation)?;

        self.derive(text.to_string(), translated).await
    }

    /// Run the three derived steps over an already-translated text
    async fn derive(
        &self,
        source_text: String,
        translated: String,
    ) -> Result<TranslationOutcome, PipelineError> {
        let in_source_script = async {
            self.transliterator
                .transliterate(&self.settings.target_script, &self.settings.source_script, &translated)
                .await
                .map_err(PipelineError::Transliteration)
        };

        let phonetics = async {
            self.romanizer
                .romanize(&self.settings.target_script, &self.settings.phonetic_scheme, &translated)
                .await
                .map_err(PipelineError::Phonetics)
        };

        let audio = async {
            self.synthesizer
                .synthesize(&self.settings.target_language, &translated)
                .await
                .map_err(PipelineError::Speech)
        };

        let (translated_in_source_script, phonetic_transcription, audio) =
            tokio::try_join!(in_source_script, phonetics, audio)?;

        Ok(TranslationOutcome {
            source_text,
            translated_text: translated,
            translated_in_source_script,
            phonetic_transcription,
            audio,
        })
    }

    /// Pair source and translated words for the word-by-word breakdown
    ///
    /// Both texts are split on whitespace. The translator may merge or split
    /// words, so pairing stops at the shorter token count and trailing
    /// unmatched tokens are dropped. That truncation is deliberate policy,
    /// not an error.
    pub fn word_pairs<'a>(source: &'a str, translated: &'a str) -> Vec<(&'a str, &'a str)> {
        let source_words: Vec<&str> = source.split_whitespace().collect();
        let translated_words: Vec<&str> = translated.split_whitespace().collect();

        if source_words.len() != translated_words.len() {
            debug!(
                "Word count mismatch ({} source, {} translated); pairing up to the shorter",
                source_words.len(),
                translated_words.len()
            );
        }

        source_words.into_iter().zip(translated_words).collect()
    }

    /// Produce per-word outcomes for a sentence outcome
    ///
    /// Each word pair gets its own script rendering, phonetics and audio.
    /// The first collaborator failure aborts the whole breakdown.
    pub async fn breakdown(
        &self,
        outcome: &TranslationOutcome,
    ) -> Result<Vec<TranslationOutcome>, PipelineError> {
        let pairs = Self::word_pairs(&outcome.source_text, &outcome.translated_text);
        let mut words = Vec::with_capacity(pairs.len());

        for (source_word, translated_word) in pairs {
            let word_outcome = self
                .derive(source_word.to_string(), translated_word.to_string())
                .await?;
            words.push(word_outcome);
        }

        Ok(words)
    }
}
