/*!
 * The in-memory flashcard deck.
 *
 * The deck is the only state this application owns: an ordered, session-
 * scoped collection of saved translation results. Records are immutable once
 * appended; only the membership of the deck changes. The CSV export carries
 * every field except the binary audio payload.
 */

use bytes::Bytes;

/// CSV header row for deck exports; field order is stable across calls
pub const CSV_HEADER: &str = "malayalam_input,kannada,kannada_in_malayalam,phonetics";

/// One saved translation unit
///
/// Duplicates are permitted and no field is validated; a record with empty
/// strings is accepted.
#[derive(Debug, Clone, PartialEq)]
pub struct FlashcardRecord {
    /// Original input text (source language)
    pub malayalam_input: String,
    /// Translated text (target language)
    pub kannada: String,
    /// Translated text re-rendered in the source script
    pub kannada_in_malayalam: String,
    /// Latin-alphabet phonetic rendering
    pub phonetics: String,
    /// MP3 audio payload; may be empty, excluded from CSV export
    pub audio: Bytes,
}

/// Ordered collection of flashcard records for one session
///
/// Created empty at session start, grown via [`append`](Self::append), reset
/// via [`clear`](Self::clear), and dropped with the session. Display order
/// equals insertion order equals card number.
#[derive(Debug, Default)]
pub struct FlashcardDeck {
    cards: Vec<FlashcardRecord>,
}

impl FlashcardDeck {
    /// Create an empty deck
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a record as the new last element
    pub fn append(&mut self, record: FlashcardRecord) {
        self.cards.push(record);
    }

    /// Remove all records; clearing an empty deck is a no-op
    pub fn clear(&mut self) {
        self.cards.clear();
    }

    /// Number of records in the deck
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    /// Whether the deck holds no records
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// All records in insertion order
    pub fn cards(&self) -> &[FlashcardRecord] {
        &self.cards
    }

    /// Record at `index`, if present
    pub fn get(&self, index: usize) -> Option<&FlashcardRecord> {
        self.cards.get(index)
    }

    /// Export the deck as UTF-8 CSV bytes, audio excluded
    ///
    /// Header row first, then one row per record in insertion order. Fields
    /// containing a comma, quote or line break are quoted per RFC 4180.
    pub fn export_csv(&self) -> Vec<u8> {
        let mut out = String::from(CSV_HEADER);
        out.push('\n');

        for card in &self.cards {
            let row = [
                csv_field(&card.malayalam_input),
                csv_field(&card.kannada),
                csv_field(&card.kannada_in_malayalam),
                csv_field(&card.phonetics),
            ]
            .join(",");
            out.push_str(&row);
            out.push('\n');
        }

        out.into_bytes()
    }
}

/// Quote a CSV field when it contains a separator, quote or line break
fn csv_field(value: &str) -> String {
    if value.contains(',') || value.contains('"') || value.contains('\n') || value.contains('\r') {
        format!("\"{}\"", value.replace('"', "\"\""))
    } else {
        value.to_string()
    }
}
