/*!
 * # kalike - Learn Kannada through Malayalam
 *
 * A Rust library and CLI for studying Kannada using Malayalam script:
 * translation, script transliteration, ITRANS phonetics, spoken audio and
 * an exportable flashcard deck.
 *
 * ## Features
 *
 * - Translate Malayalam text to Kannada via the Google Translate web API
 * - Re-render the Kannada result in Malayalam script via Aksharamukha
 * - Produce Latin (ITRANS-style) phonetics for the Kannada result
 * - Synthesize Kannada MP3 audio via the Google Translate TTS endpoint
 * - Collect confirmed results into a session flashcard deck
 * - Export the deck as CSV for spreadsheet and flashcard tools
 *
 * ## Architecture
 *
 * The library is organized in these main modules:
 * - `app_config`: Configuration management
 * - `providers`: Clients for the external language services:
 *   - `providers::google_translate`: translation client
 *   - `providers::aksharamukha`: transliteration and romanization client
 *   - `providers::google_tts`: speech synthesis client
 *   - `providers::mock`: mock collaborators for tests
 * - `pipeline`: Orchestration of one translation request
 * - `flashcards`: The in-memory flashcard deck and CSV export
 * - `app_controller`: Session controller and command handling
 * - `language_utils`: ISO language code and script name utilities
 * - `file_utils`: File system operations for exports
 * - `errors`: Custom error types for the application
 *
 * ## License
 *
 * This project is licensed under the MIT License
 */

// Global lints configuration
// These lints will be allowed but not auto-fixed
#![allow(clippy::uninlined_format_args)]
#![allow(clippy::redundant_closure_for_method_calls)]

// Public modules
pub mod app_config;
pub mod app_controller;
pub mod errors;
pub mod file_utils;
pub mod flashcards;
pub mod language_utils;
pub mod pipeline;
pub mod providers;

// Re-export main types for easier usage
pub use app_config::Config;
pub use app_controller::{Controller, SessionCommand, parse_command};
pub use errors::{AppError, PipelineError, ProviderError};
pub use flashcards::{FlashcardDeck, FlashcardRecord};
pub use language_utils::{get_language_name, language_codes_match, normalize_to_part1, script_name};
pub use pipeline::{PipelineSettings, TranslationOutcome, TranslationPipeline};
