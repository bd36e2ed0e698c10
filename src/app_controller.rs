/*!
 * Application controller for translation sessions.
 *
 * The controller owns the flashcard deck for exactly one session: created
 * empty when the controller is built, dropped with it. Pipeline results are
 * held as "last result" until the user explicitly adds them to the deck, so
 * a failed pipeline run can never leave partial state behind.
 */

use anyhow::{Context, Result, anyhow};
use log::{error, info, warn};
use std::io::{BufRead, Write};
use std::path::{Path, PathBuf};
use std::sync::Arc;

use crate::app_config::Config;
use crate::file_utils::FileManager;
use crate::flashcards::FlashcardDeck;
use crate::language_utils;
use crate::pipeline::{PipelineSettings, TranslationOutcome, TranslationPipeline};
use crate::providers::aksharamukha::Aksharamukha;
use crate::providers::google_translate::GoogleTranslate;
use crate::providers::google_tts::GoogleTts;
use crate::providers::{PhoneticTransliterator, SpeechSynthesizer, Translator, Transliterator};

/// Default filename for deck CSV exports
const DEFAULT_EXPORT_PATH: &str = "flashcards.csv";

/// A command entered at the session prompt
#[derive(Debug, Clone, PartialEq)]
pub enum SessionCommand {
    /// Plain text: run the pipeline on it
    Translate(String),
    /// `:add` - append the last sentence result to the deck
    AddSentence,
    /// `:add words` - append the word-by-word cards of the last result
    AddWords,
    /// `:words` - show the word breakdown of the last result
    ShowWords,
    /// `:list` - show the deck
    List,
    /// `:clear` - clear the deck
    Clear,
    /// `:export [path]` - write the deck CSV
    Export(Option<PathBuf>),
    /// `:audio <n> [path]` - write card n's MP3
    Audio {
        /// 1-based card number
        card: usize,
        /// Output path; defaults to card_<n>.mp3
        path: Option<PathBuf>,
    },
    /// `:help`
    Help,
    /// `:quit`
    Quit,
    /// Blank line
    Empty,
    /// Unrecognized `:` command
    Unknown(String),
}

/// Parse one line of session input into a command
pub fn parse_command(line: &str) -> SessionCommand {
    let trimmed = line.trim();
    if trimmed.is_empty() {
        return SessionCommand::Empty;
    }
    if !trimmed.starts_with(':') {
        return SessionCommand::Translate(trimmed.to_string());
    }

    let mut parts = trimmed.split_whitespace();
    let keyword = parts.next().unwrap_or_default();

    match keyword {
        ":add" => match parts.next() {
            None => SessionCommand::AddSentence,
            Some("words") => SessionCommand::AddWords,
            Some(_) => SessionCommand::Unknown(trimmed.to_string()),
        },
        ":words" => SessionCommand::ShowWords,
        ":list" => SessionCommand::List,
        ":clear" => SessionCommand::Clear,
        ":export" => SessionCommand::Export(parts.next().map(PathBuf::from)),
        ":audio" => match parts.next().and_then(|n| n.parse::<usize>().ok()) {
            Some(card) if card > 0 => SessionCommand::Audio {
                card,
                path: parts.next().map(PathBuf::from),
            },
            _ => SessionCommand::Unknown(trimmed.to_string()),
        },
        ":help" => SessionCommand::Help,
        ":quit" | ":q" | ":exit" => SessionCommand::Quit,
        _ => SessionCommand::Unknown(trimmed.to_string()),
    }
}

/// The last successful pipeline run, kept until replaced or added to the deck
struct SessionResult {
    /// The full-sentence outcome
    sentence: TranslationOutcome,
    /// Word-by-word outcomes, computed on first use
    words: Option<Vec<TranslationOutcome>>,
}

/// Main application controller
pub struct Controller {
    /// Application configuration
    config: Config,
    /// The collaborator pipeline
    pipeline: TranslationPipeline,
    /// The session's flashcard deck
    deck: FlashcardDeck,
    /// Last successful result, if any
    last_result: Option<SessionResult>,
}

impl Controller {
    /// Create a controller with real collaborator clients built from config
    pub fn with_config(config: Config) -> Result<Controller> {
        let services = &config.services;

        let translator = Arc::new(GoogleTranslate::new(
            services.translation.endpoint.clone(),
            services.translation.timeout_secs,
        ));
        let transliterator = Arc::new(Aksharamukha::new(
            services.transliteration.endpoint.clone(),
            services.transliteration.timeout_secs,
        ));
        let synthesizer = Arc::new(GoogleTts::new(
            services.speech.endpoint.clone(),
            services.speech.timeout_secs,
        ));

        Self::with_collaborators(config, translator, transliterator.clone(), transliterator, synthesizer)
    }

    /// Create a controller over injected collaborators (used by tests)
    pub fn with_collaborators(
        config: Config,
        translator: Arc<dyn Translator>,
        transliterator: Arc<dyn Transliterator>,
        romanizer: Arc<dyn PhoneticTransliterator>,
        synthesizer: Arc<dyn SpeechSynthesizer>,
    ) -> Result<Controller> {
        let settings = Self::build_settings(&config)?;
        let pipeline =
            TranslationPipeline::new(translator, transliterator, romanizer, synthesizer, settings);

        Ok(Controller {
            config,
            pipeline,
            deck: FlashcardDeck::new(),
            last_result: None,
        })
    }

    /// Derive pipeline settings from the configured language pair
    fn build_settings(config: &Config) -> Result<PipelineSettings> {
        let source_language = language_utils::normalize_to_part1(&config.source_language)?;
        let target_language = language_utils::normalize_to_part1(&config.target_language)?;
        let source_script = language_utils::script_name(&config.source_language)?;
        let target_script = language_utils::script_name(&config.target_language)?;

        Ok(PipelineSettings {
            source_language,
            target_language,
            source_script: source_script.to_string(),
            target_script: target_script.to_string(),
            phonetic_scheme: config.phonetic_scheme.to_uppercase(),
        })
    }

    /// The session's flashcard deck
    pub fn deck(&self) -> &FlashcardDeck {
        &self.deck
    }

    /// Clear the session's flashcard deck
    pub fn clear_deck(&mut self) {
        self.deck.clear();
    }

    /// Run the pipeline once and print the result, optionally saving audio
    pub async fn translate_once(
        &mut self,
        text: &str,
        audio_out: Option<&Path>,
        with_words: bool,
    ) -> Result<()> {
        self.translate(text).await?;

        if with_words {
            self.show_words().await?;
        }

        if let Some(path) = audio_out {
            let audio = self
                .last_result
                .as_ref()
                .map(|r| r.sentence.audio.clone())
                .ok_or_else(|| anyhow!("No translation result to take audio from"))?;
            FileManager::write_bytes(path, &audio)?;
            info!("Wrote sentence audio to {:?}", path);
        }

        Ok(())
    }

    /// Run the interactive flashcard session
    ///
    /// Reads commands from stdin until `:quit` or end of input. Collaborator
    /// failures are reported and the session continues; the deck is only
    /// ever mutated by explicit `:add` and `:clear` commands.
    pub async fn run_session(&mut self) -> Result<()> {
        let source_name = language_utils::get_language_name(&self.config.source_language)?;
        let target_name = language_utils::get_language_name(&self.config.target_language)?;

        println!("Learn {} using {} script", target_name, source_name);
        println!("Type {} text to translate, or :help for commands.", source_name);

        let stdin = std::io::stdin();
        let mut line = String::new();

        loop {
            print!("> ");
            std::io::stdout().flush()?;

            line.clear();
            if stdin.lock().read_line(&mut line)? == 0 {
                break;
            }

            match parse_command(&line) {
                SessionCommand::Empty => {}
                SessionCommand::Quit => break,
                SessionCommand::Help => Self::print_help(),
                SessionCommand::Translate(text) => {
                    if let Err(e) = self.translate(&text).await {
                        error!("{}", e);
                    }
                }
                SessionCommand::ShowWords => {
                    if let Err(e) = self.show_words().await {
                        error!("{}", e);
                    }
                }
                SessionCommand::AddSentence => match self.add_sentence() {
                    Ok(count) => println!("Deck now holds {} card(s).", count),
                    Err(e) => warn!("{}", e),
                },
                SessionCommand::AddWords => match self.add_words().await {
                    Ok(count) => println!("Deck now holds {} card(s).", count),
                    Err(e) => warn!("{}", e),
                },
                SessionCommand::List => self.list_deck(),
                SessionCommand::Clear => {
                    self.clear_deck();
                    println!("Flashcards cleared.");
                }
                SessionCommand::Export(path) => {
                    let path = path.unwrap_or_else(|| PathBuf::from(DEFAULT_EXPORT_PATH));
                    match self.export_deck(&path) {
                        Ok(count) => println!("Exported {} card(s) to {:?}.", count, path),
                        Err(e) => error!("{}", e),
                    }
                }
                SessionCommand::Audio { card, path } => {
                    let path =
                        path.unwrap_or_else(|| PathBuf::from(format!("card_{}.mp3", card)));
                    match self.export_audio(card, &path) {
                        Ok(()) => println!("Wrote card {} audio to {:?}.", card, path),
                        Err(e) => error!("{}", e),
                    }
                }
                SessionCommand::Unknown(cmd) => {
                    warn!("Unknown command: {} (try :help)", cmd);
                }
            }
        }

        info!("Session ended with {} card(s) in the deck", self.deck.len());
        Ok(())
    }

    /// Run the pipeline and remember the outcome as the last result
    ///
    /// Empty input is reported as a single warning and leaves the last
    /// result untouched; any collaborator failure is returned as an error
    /// without mutating session state.
    pub async fn translate(&mut self, text: &str) -> Result<()> {
        let source_name = language_utils::get_language_name(&self.config.source_language)
            .unwrap_or_else(|_| self.config.source_language.clone());

        let outcome = match self.pipeline.run(text).await {
            Ok(outcome) => outcome,
            Err(e) if e.is_input_error() => {
                warn!("Please enter {} text.", source_name);
                return Ok(());
            }
            Err(e) => return Err(anyhow::Error::new(e)),
        };

        Self::print_outcome(&outcome, "Translation Results");
        self.last_result = Some(SessionResult {
            sentence: outcome,
            words: None,
        });

        Ok(())
    }

    /// Compute (once) and print the word-by-word breakdown of the last result
    async fn show_words(&mut self) -> Result<()> {
        let words = self.ensure_words().await?;

        if words.is_empty() {
            println!("No word pairs to show.");
            return Ok(());
        }

        println!("Flashcards (word-by-word):");
        for (i, word) in words.iter().enumerate() {
            println!("-- Word {}: {} --", i + 1, word.source_text);
            Self::print_outcome(word, "");
        }

        Ok(())
    }

    /// Append the last sentence result to the deck; returns the new deck size
    pub fn add_sentence(&mut self) -> Result<usize> {
        let result = self
            .last_result
            .as_ref()
            .ok_or_else(|| anyhow!("Nothing to add - translate something first"))?;

        self.deck.append(result.sentence.to_flashcard());
        Ok(self.deck.len())
    }

    /// Append the word-by-word cards of the last result; returns the new deck size
    pub async fn add_words(&mut self) -> Result<usize> {
        let words = self.ensure_words().await?.to_vec();
        if words.is_empty() {
            return Err(anyhow!("The last result has no word pairs"));
        }

        for word in &words {
            self.deck.append(word.to_flashcard());
        }
        Ok(self.deck.len())
    }

    /// Make sure the word breakdown of the last result has been computed
    async fn ensure_words(&mut self) -> Result<&[TranslationOutcome]> {
        let result = self
            .last_result
            .as_mut()
            .ok_or_else(|| anyhow!("Nothing to break down - translate something first"))?;

        if result.words.is_none() {
            let words = self.pipeline.breakdown(&result.sentence).await?;
            result.words = Some(words);
        }

        Ok(result.words.as_deref().unwrap_or_default())
    }

    /// Write the deck CSV to `path`; returns the number of cards exported
    pub fn export_deck(&self, path: &Path) -> Result<usize> {
        FileManager::write_bytes(path, &self.deck.export_csv())
            .with_context(|| format!("Failed to export deck to {:?}", path))?;
        Ok(self.deck.len())
    }

    /// Write one card's MP3 audio to `path` (`card` is 1-based)
    pub fn export_audio(&self, card: usize, path: &Path) -> Result<()> {
        let record = card
            .checked_sub(1)
            .and_then(|index| self.deck.get(index))
            .ok_or_else(|| anyhow!("No card {} in a deck of {}", card, self.deck.len()))?;

        if record.audio.is_empty() {
            return Err(anyhow!("Card {} has no audio", card));
        }

        FileManager::write_bytes(path, &record.audio)
            .with_context(|| format!("Failed to write audio to {:?}", path))
    }

    fn list_deck(&self) {
        if self.deck.is_empty() {
            println!("The deck is empty.");
            return;
        }

        for (i, card) in self.deck.cards().iter().enumerate() {
            println!(
                "{:3}. {} -> {} [{}] ({})",
                i + 1,
                card.malayalam_input,
                card.kannada,
                card.kannada_in_malayalam,
                card.phonetics
            );
        }
    }

    fn print_outcome(outcome: &TranslationOutcome, heading: &str) {
        if !heading.is_empty() {
            println!("== {} ==", heading);
        }
        println!("Input:           {}", outcome.source_text);
        println!("Translation:     {}", outcome.translated_text);
        println!("In your script:  {}", outcome.translated_in_source_script);
        println!("Phonetics:       {}", outcome.phonetic_transcription);
        println!("Audio:           {} bytes of MP3", outcome.audio.len());
    }

    fn print_help() {
        println!("Commands:");
        println!("  <text>            translate text and show all renderings");
        println!("  :add              add the last result to the flashcard deck");
        println!("  :add words        add the word-by-word cards of the last result");
        println!("  :words            show the word-by-word breakdown");
        println!("  :list             list the deck");
        println!("  :clear            clear the deck");
        println!("  :export [path]    write the deck as CSV (default {})", DEFAULT_EXPORT_PATH);
        println!("  :audio <n> [path] write card n's MP3 audio");
        println!("  :quit             end the session");
    }
}
