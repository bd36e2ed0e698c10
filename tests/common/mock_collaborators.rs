/*!
 * Scripted collaborator implementations for integration tests
 *
 * Unlike the tag-based mock in `kalike::providers::mock`, these return
 * realistic fixed renderings for a small phrasebook, so workflow tests can
 * assert on real-looking Malayalam/Kannada output without any network calls.
 */

use async_trait::async_trait;
use bytes::Bytes;
use std::sync::Arc;

use kalike::Config;
use kalike::app_controller::Controller;
use kalike::errors::ProviderError;
use kalike::providers::mock::{MockCollaborators, MockFailure};
use kalike::providers::{PhoneticTransliterator, SpeechSynthesizer, Translator, Transliterator};

/// Fixed MP3-ish payload used by the scripted synthesizer
pub const FAKE_MP3: &[u8] = b"\xff\xfb\x90\x00fake-mp3-frame";

/// Scripted collaborator answering from a fixed phrasebook
#[derive(Debug)]
pub struct ScriptedCollaborators;

/// (malayalam, kannada, kannada in malayalam script, ITRANS phonetics)
const PHRASEBOOK: &[(&str, &str, &str, &str)] = &[
    ("നന്ദി", "ಧನ್ಯವಾದ", "ധന്യവാദ", "dhanyavAda"),
    ("വെള്ളം", "ನೀರು", "നീരു", "nIru"),
    ("നമസ്കാരം", "ನಮಸ್ಕಾರ", "നമസ്കാര", "namaskAra"),
];

fn lookup(text: &str) -> Option<&'static (&'static str, &'static str, &'static str, &'static str)> {
    PHRASEBOOK.iter().find(|entry| entry.0 == text || entry.1 == text)
}

#[async_trait]
impl Translator for ScriptedCollaborators {
    async fn translate(
        &self,
        _source: &str,
        _target: &str,
        text: &str,
    ) -> Result<String, ProviderError> {
        // Translate word by word so breakdown tests get aligned tokens
        let translated: Vec<&str> = text
            .split_whitespace()
            .map(|word| lookup(word).map(|entry| entry.1).unwrap_or("?"))
            .collect();
        Ok(translated.join(" "))
    }
}

#[async_trait]
impl Transliterator for ScriptedCollaborators {
    async fn transliterate(
        &self,
        _source_script: &str,
        _target_script: &str,
        text: &str,
    ) -> Result<String, ProviderError> {
        let rendered: Vec<&str> = text
            .split_whitespace()
            .map(|word| lookup(word).map(|entry| entry.2).unwrap_or("?"))
            .collect();
        Ok(rendered.join(" "))
    }
}

#[async_trait]
impl PhoneticTransliterator for ScriptedCollaborators {
    async fn romanize(
        &self,
        _source_script: &str,
        _scheme: &str,
        text: &str,
    ) -> Result<String, ProviderError> {
        let rendered: Vec<&str> = text
            .split_whitespace()
            .map(|word| lookup(word).map(|entry| entry.3).unwrap_or("?"))
            .collect();
        Ok(rendered.join(" "))
    }
}

#[async_trait]
impl SpeechSynthesizer for ScriptedCollaborators {
    async fn synthesize(&self, _language: &str, _text: &str) -> Result<Bytes, ProviderError> {
        Ok(Bytes::from_static(FAKE_MP3))
    }
}

/// Build a controller over the scripted phrasebook collaborators
pub fn scripted_controller() -> Controller {
    let scripted = Arc::new(ScriptedCollaborators);
    Controller::with_collaborators(
        Config::default(),
        scripted.clone(),
        scripted.clone(),
        scripted.clone(),
        scripted,
    )
    .expect("default config should build a controller")
}

/// Build a controller over counting mocks, returning the mock for inspection
pub fn mock_controller(failure: MockFailure) -> (Controller, MockCollaborators) {
    let mock = MockCollaborators::with_failure(failure);
    let shared = Arc::new(mock.clone());
    let controller = Controller::with_collaborators(
        Config::default(),
        shared.clone(),
        shared.clone(),
        shared.clone(),
        shared,
    )
    .expect("default config should build a controller");

    (controller, mock)
}
