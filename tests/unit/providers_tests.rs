/*!
 * Tests for provider client helpers that run without a network
 */

use kalike::errors::ProviderError;
use kalike::providers::google_translate::GoogleTranslate;
use kalike::providers::google_tts::{GoogleTts, MAX_CHARS_PER_REQUEST};
use serde_json::json;

#[test]
fn test_parseTranslation_withSingleSegment_shouldExtractText() {
    let body = json!([[["ಧನ್ಯವಾದ", "നന്ദി", null, null, 10]], null, "ml"]);

    let translated = GoogleTranslate::parse_translation(&body).unwrap();
    assert_eq!(translated, "ಧನ್ಯವಾದ");
}

#[test]
fn test_parseTranslation_withMultipleSegments_shouldConcatenateInOrder() {
    let body = json!([
        [
            ["ಮೊದಲ ಭಾಗ ", "ആദ്യ ഭാഗം", null, null],
            ["ಎರಡನೇ ಭಾಗ", "രണ്ടാം ഭാഗം", null, null]
        ],
        null,
        "ml"
    ]);

    let translated = GoogleTranslate::parse_translation(&body).unwrap();
    assert_eq!(translated, "ಮೊದಲ ಭಾಗ ಎರಡನೇ ಭಾಗ");
}

#[test]
fn test_parseTranslation_withMalformedPayload_shouldReturnParseError() {
    for body in [json!({}), json!([]), json!([[]]), json!([[[42]]])] {
        let result = GoogleTranslate::parse_translation(&body);
        assert!(matches!(result, Err(ProviderError::ParseError(_))), "payload: {}", body);
    }
}

#[test]
fn test_chunkText_withShortText_shouldReturnSingleChunk() {
    let chunks = GoogleTts::chunk_text("ನಮಸ್ಕಾರ");
    assert_eq!(chunks, vec!["ನಮಸ್ಕಾರ".to_string()]);
}

#[test]
fn test_chunkText_withLongText_shouldRespectLimitAndWordBoundaries() {
    let word = "ಪದ";
    let text = vec![word; 120].join(" ");

    let chunks = GoogleTts::chunk_text(&text);

    assert!(chunks.len() > 1);
    for chunk in &chunks {
        assert!(chunk.chars().count() <= MAX_CHARS_PER_REQUEST);
        for piece in chunk.split_whitespace() {
            assert_eq!(piece, word, "chunking must not split inside a word");
        }
    }

    // Nothing is lost in the split
    let rejoined = chunks.join(" ");
    assert_eq!(rejoined, text);
}

#[test]
fn test_chunkText_withOversizedSingleWord_shouldPassItThrough() {
    let word: String = "ಅ".repeat(MAX_CHARS_PER_REQUEST + 20);
    let chunks = GoogleTts::chunk_text(&word);

    assert_eq!(chunks, vec![word]);
}
