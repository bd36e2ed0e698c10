/*!
 * End-to-end session workflow tests over scripted collaborators
 *
 * These exercise the controller the way a session does: translate, add to
 * the deck, export, and save audio, all without touching the network.
 */

use std::fs;
use std::sync::atomic::Ordering;

use kalike::flashcards::CSV_HEADER;
use kalike::providers::mock::MockFailure;

use crate::common;
use crate::common::mock_collaborators::{FAKE_MP3, mock_controller, scripted_controller};

#[tokio::test]
async fn test_workflow_translateAddExport_shouldWriteReadableCsv() {
    let temp_dir = common::create_temp_dir().unwrap();
    let export_path = temp_dir.path().join("deck.csv");

    let mut controller = scripted_controller();

    controller.translate("നന്ദി").await.unwrap();
    controller.add_sentence().unwrap();

    controller.translate("വെള്ളം").await.unwrap();
    controller.add_sentence().unwrap();

    let exported = controller.export_deck(&export_path).unwrap();
    assert_eq!(exported, 2);

    let csv = fs::read_to_string(&export_path).unwrap();
    let lines: Vec<&str> = csv.lines().collect();

    assert_eq!(lines[0], CSV_HEADER);
    assert_eq!(lines.len(), 3);
    assert_eq!(lines[1], "നന്ദി,ಧನ್ಯವಾದ,ധന്യവാദ,dhanyavAda");
    assert_eq!(lines[2], "വെള്ളം,ನೀರು,നീരു,nIru");
}

#[tokio::test]
async fn test_workflow_exportAudio_shouldWriteCardMp3() {
    let temp_dir = common::create_temp_dir().unwrap();
    let audio_path = temp_dir.path().join("card_1.mp3");

    let mut controller = scripted_controller();
    controller.translate("നമസ്കാരം").await.unwrap();
    controller.add_sentence().unwrap();

    controller.export_audio(1, &audio_path).unwrap();

    let written = fs::read(&audio_path).unwrap();
    assert_eq!(written, FAKE_MP3);
}

#[tokio::test]
async fn test_workflow_exportAudio_withBadCardNumber_shouldFail() {
    let temp_dir = common::create_temp_dir().unwrap();
    let audio_path = temp_dir.path().join("missing.mp3");

    let controller = scripted_controller();

    assert!(controller.export_audio(1, &audio_path).is_err());
    assert!(!audio_path.exists());
}

#[tokio::test]
async fn test_workflow_exportAudio_withCardZero_shouldFailNotPanic() {
    let temp_dir = common::create_temp_dir().unwrap();
    let audio_path = temp_dir.path().join("zero.mp3");

    let mut controller = scripted_controller();
    controller.translate("നന്ദി").await.unwrap();
    controller.add_sentence().unwrap();

    // Card numbers are 1-based; 0 must be rejected even with cards present
    let result = controller.export_audio(0, &audio_path);

    assert!(result.is_err());
    assert!(!audio_path.exists());
}

#[tokio::test]
async fn test_workflow_addWords_shouldAppendOneCardPerWordPair() {
    let mut controller = scripted_controller();

    controller.translate("നന്ദി വെള്ളം").await.unwrap();
    let count = controller.add_words().await.unwrap();

    assert_eq!(count, 2);
    let cards = controller.deck().cards();
    assert_eq!(cards[0].malayalam_input, "നന്ദി");
    assert_eq!(cards[0].kannada, "ಧನ್ಯವಾದ");
    assert_eq!(cards[1].malayalam_input, "വെള്ളം");
    assert_eq!(cards[1].kannada, "ನೀರು");
}

#[tokio::test]
async fn test_workflow_addWithoutTranslation_shouldFailAndLeaveDeckEmpty() {
    let mut controller = scripted_controller();

    assert!(controller.add_sentence().is_err());
    assert!(controller.add_words().await.is_err());
    assert!(controller.deck().is_empty());
}

#[tokio::test]
async fn test_workflow_translationFailure_shouldNotTouchDeck() {
    let (mut controller, mock) = mock_controller(MockFailure::Translation);
    let counts = mock.counts();

    let result = controller.translate("നന്ദി").await;

    assert!(result.is_err());
    assert!(controller.deck().is_empty());
    // The failing translator is called once; no derived step runs after it
    assert_eq!(counts.translate.load(Ordering::SeqCst), 1);
    assert_eq!(counts.transliterate.load(Ordering::SeqCst), 0);
    assert_eq!(counts.romanize.load(Ordering::SeqCst), 0);
    assert_eq!(counts.synthesize.load(Ordering::SeqCst), 0);
}

#[tokio::test]
async fn test_workflow_emptyInput_shouldWarnWithoutCallingAnyService() {
    let (mut controller, mock) = mock_controller(MockFailure::None);
    let counts = mock.counts();

    // Empty input is reported to the user, not returned as an error
    controller.translate("   ").await.unwrap();

    assert_eq!(counts.total(), 0);
    assert!(controller.deck().is_empty());
}

#[tokio::test]
async fn test_workflow_clearDeck_shouldBeIdempotent() {
    let mut controller = scripted_controller();

    controller.translate("നന്ദി").await.unwrap();
    controller.add_sentence().unwrap();
    assert_eq!(controller.deck().len(), 1);

    controller.clear_deck();
    assert!(controller.deck().is_empty());

    controller.clear_deck();
    assert!(controller.deck().is_empty());
}
