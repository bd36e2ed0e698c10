// Module-specific lints configuration
#![allow(clippy::uninlined_format_args)]

use anyhow::{Context, Result};
use clap::{CommandFactory, Parser, Subcommand, ValueEnum};
use clap_complete::{Shell, generate};
use log::{Level, LevelFilter, Log, Metadata, Record, SetLoggerError, warn};
use std::fs::File;
use std::io::{BufReader, Write};
use std::path::{Path, PathBuf};

use crate::app_config::Config;
use app_controller::Controller;

mod app_config;
mod app_controller;
mod errors;
mod file_utils;
mod flashcards;
mod language_utils;
mod pipeline;
mod providers;

/// CLI Wrapper for LogLevel to implement ValueEnum
#[derive(Debug, Clone, ValueEnum)]
enum CliLogLevel {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

impl From<CliLogLevel> for app_config::LogLevel {
    fn from(cli_level: CliLogLevel) -> Self {
        match cli_level {
            CliLogLevel::Error => app_config::LogLevel::Error,
            CliLogLevel::Warn => app_config::LogLevel::Warn,
            CliLogLevel::Info => app_config::LogLevel::Info,
            CliLogLevel::Debug => app_config::LogLevel::Debug,
            CliLogLevel::Trace => app_config::LogLevel::Trace,
        }
    }
}

impl From<&app_config::LogLevel> for LevelFilter {
    fn from(level: &app_config::LogLevel) -> Self {
        match level {
            app_config::LogLevel::Error => LevelFilter::Error,
            app_config::LogLevel::Warn => LevelFilter::Warn,
            app_config::LogLevel::Info => LevelFilter::Info,
            app_config::LogLevel::Debug => LevelFilter::Debug,
            app_config::LogLevel::Trace => LevelFilter::Trace,
        }
    }
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Start an interactive flashcard session (default command)
    Session(SessionArgs),

    /// Translate one text and print every rendering
    Translate(TranslateArgs),

    /// Generate shell completions for kalike
    Completions {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: Shell,
    },
}

#[derive(Parser, Debug)]
struct SessionArgs {
    /// Source language code (e.g. 'ml')
    #[arg(short, long)]
    source_language: Option<String>,

    /// Target language code (e.g. 'kn')
    #[arg(short, long)]
    target_language: Option<String>,

    /// Configuration file path
    #[arg(short, long, default_value = "conf.json")]
    config_path: String,

    /// Set logging level
    #[arg(short, long, value_enum)]
    log_level: Option<CliLogLevel>,
}

#[derive(Parser, Debug)]
struct TranslateArgs {
    /// Text to translate
    #[arg(value_name = "TEXT")]
    text: String,

    /// Write the sentence MP3 audio to this path
    #[arg(short, long)]
    audio_out: Option<PathBuf>,

    /// Also print the word-by-word breakdown
    #[arg(short, long)]
    words: bool,

    /// Source language code (e.g. 'ml')
    #[arg(short, long)]
    source_language: Option<String>,

    /// Target language code (e.g. 'kn')
    #[arg(short, long)]
    target_language: Option<String>,

    /// Configuration file path
    #[arg(short, long, default_value = "conf.json")]
    config_path: String,

    /// Set logging level
    #[arg(short, long, value_enum)]
    log_level: Option<CliLogLevel>,
}

/// kalike - Learn Kannada through Malayalam
///
/// Translates Malayalam text to Kannada, renders the result in Malayalam
/// script and Latin phonetics, speaks it as MP3 audio, and collects results
/// into a flashcard deck exportable as CSV.
#[derive(Parser, Debug)]
#[command(name = "kalike")]
#[command(version = "0.3.0")]
#[command(about = "Kannada learning tool for Malayalam speakers")]
#[command(long_about = "kalike runs a Malayalam-to-Kannada learning session in the terminal.

EXAMPLES:
    kalike                                   # Interactive flashcard session
    kalike translate \"നന്ദി\"                  # One-shot translation
    kalike translate -w -a out.mp3 \"നന്ദി\"    # With word breakdown and audio
    kalike -s ml -t kn                       # Explicit language pair
    kalike completions bash > kalike.bash    # Generate bash completions

CONFIGURATION:
    Configuration is stored in conf.json by default. You can specify a
    different config file with --config-path. If the config file doesn't
    exist, a default one will be created automatically.

SESSION COMMANDS:
    :add, :add words, :words, :list, :clear, :export, :audio, :help, :quit")]
struct CommandLineOptions {
    #[command(subcommand)]
    command: Option<Commands>,

    #[command(flatten)]
    session: SessionArgs,
}

// @struct: Custom logger implementation
struct CustomLogger {
    level: LevelFilter,
}

impl CustomLogger {
    // @creates: New logger with specified level
    fn new(level: LevelFilter) -> Self {
        CustomLogger { level }
    }

    // @initializes: Global logger
    fn init(level: LevelFilter) -> Result<(), SetLoggerError> {
        let logger = Box::new(CustomLogger::new(level));
        log::set_boxed_logger(logger)?;
        log::set_max_level(level);
        Ok(())
    }

    // @returns: ANSI color code for log level
    fn color_for_level(level: Level) -> &'static str {
        match level {
            Level::Error => "\x1B[1;31m",
            Level::Warn => "\x1B[1;33m",
            Level::Info => "\x1B[1;32m",
            Level::Debug => "\x1B[1;36m",
            Level::Trace => "\x1B[1;35m",
        }
    }
}

impl Log for CustomLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= self.level
    }

    fn log(&self, record: &Record) {
        if self.enabled(record.metadata()) {
            let now = chrono::Local::now().format("%H:%M:%S%.3f");
            let color = Self::color_for_level(record.level());

            let mut stderr = std::io::stderr();
            let _ = writeln!(
                stderr,
                "{}{} {:5} {}\x1B[0m",
                color,
                now,
                record.level(),
                record.args()
            );
        }
    }

    fn flush(&self) {
        let _ = std::io::stderr().flush();
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize the logger once with info level by default
    // We'll update the level after loading the config if needed
    CustomLogger::init(LevelFilter::Info)?;

    // Parse command line arguments using clap
    let cli = CommandLineOptions::parse();

    match cli.command {
        Some(Commands::Completions { shell }) => {
            let mut cmd = CommandLineOptions::command();
            generate(shell, &mut cmd, "kalike", &mut std::io::stdout());
            Ok(())
        }
        Some(Commands::Translate(args)) => run_translate(args).await,
        Some(Commands::Session(args)) => run_session(args).await,
        // Default behavior - top-level flags start an interactive session
        None => run_session(cli.session).await,
    }
}

/// Load config from disk (creating a default file when missing) and apply
/// command-line overrides
fn load_config(
    config_path: &str,
    source_language: Option<&str>,
    target_language: Option<&str>,
    log_level: Option<&CliLogLevel>,
) -> Result<Config> {
    let mut config = if Path::new(config_path).exists() {
        let file = File::open(config_path)
            .context(format!("Failed to open config file: {}", config_path))?;

        let reader = BufReader::new(file);
        serde_json::from_reader(reader)
            .context(format!("Failed to parse config file: {}", config_path))?
    } else {
        // Create default configuration if not exists
        warn!("Config file not found at '{}', creating default config.", config_path);

        let config = Config::default();
        let config_json = serde_json::to_string_pretty(&config)
            .context("Failed to serialize default config to JSON")?;

        std::fs::write(config_path, config_json)
            .context(format!("Failed to write default config to file: {}", config_path))?;

        config
    };

    if let Some(source_lang) = source_language {
        config.source_language = source_lang.to_string();
    }
    if let Some(target_lang) = target_language {
        config.target_language = target_lang.to_string();
    }
    if let Some(level) = log_level {
        config.log_level = level.clone().into();
    }

    // Validate the configuration after loading and overriding
    config.validate().context("Configuration validation failed")?;

    log::set_max_level((&config.log_level).into());

    Ok(config)
}

async fn run_session(args: SessionArgs) -> Result<()> {
    let config = load_config(
        &args.config_path,
        args.source_language.as_deref(),
        args.target_language.as_deref(),
        args.log_level.as_ref(),
    )?;

    let mut controller = Controller::with_config(config)?;
    controller.run_session().await
}

async fn run_translate(args: TranslateArgs) -> Result<()> {
    let config = load_config(
        &args.config_path,
        args.source_language.as_deref(),
        args.target_language.as_deref(),
        args.log_level.as_ref(),
    )?;

    let mut controller = Controller::with_config(config)?;
    controller
        .translate_once(&args.text, args.audio_out.as_deref(), args.words)
        .await
}
