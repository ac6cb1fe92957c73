//! Word Scramble - CLI
//!
//! Find words hidden in a root word, in a TUI or a plain line-based mode.

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use rand::SeedableRng;
use rand::rngs::StdRng;
use std::path::PathBuf;
use std::process::ExitCode;
use word_scramble::{
    commands::{CheckConfig, check_word, find_solutions, run_simple},
    core::{Session, WordValidator},
    dictionary::{DEFAULT_LANGUAGE, WordListDictionary},
    logging::{self, LogTarget},
    output::{print_check_result, print_solutions_result},
    wordlists::WordListSource,
};

#[derive(Parser)]
#[command(
    name = "word_scramble",
    about = "Make as many words as you can from a single root word",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Root words: 'builtin' (default) or path to a newline-delimited file
    #[arg(long, global = true, env = "WORD_SCRAMBLE_START_WORDS", default_value = "builtin")]
    start_words: WordListSource,

    /// Dictionary: 'builtin' (default) or path to a newline-delimited file
    #[arg(short = 'd', long, global = true, env = "WORD_SCRAMBLE_DICTIONARY", default_value = "builtin")]
    dictionary: WordListSource,

    /// Language tag used for word recognition
    #[arg(short, long, global = true, env = "WORD_SCRAMBLE_LANGUAGE", default_value = DEFAULT_LANGUAGE)]
    language: String,

    /// Seed for root word selection (random if omitted)
    #[arg(long, global = true, env = "WORD_SCRAMBLE_SEED")]
    seed: Option<u64>,

    /// Log filter, e.g. 'debug' or 'word_scramble=trace' (overrides RUST_LOG)
    #[arg(long, global = true, env = "WORD_SCRAMBLE_LOG")]
    log_level: Option<String>,

    /// Write logs to this file (the TUI logs nowhere otherwise)
    #[arg(long, global = true, env = "WORD_SCRAMBLE_LOG_FILE")]
    log_file: Option<PathBuf>,
}

#[derive(Subcommand)]
enum Commands {
    /// Interactive TUI mode (default)
    Play,

    /// Simple line-based mode (no TUI)
    Simple,

    /// Check one word against a root word
    Check {
        /// The root word
        root: String,

        /// The word to check
        word: String,

        /// Words already found (comma-separated)
        #[arg(short, long, value_delimiter = ',')]
        used: Vec<String>,
    },

    /// List every acceptable word for a root word
    Solutions {
        /// The root word
        root: String,

        /// Only print the first N words
        #[arg(short = 'n', long)]
        limit: Option<usize>,
    },
}

fn main() -> Result<ExitCode> {
    let cli = Cli::parse();

    // Default to Play mode if no command given
    let command = cli.command.unwrap_or(Commands::Play);

    let target = match (&cli.log_file, &command) {
        (Some(path), _) => LogTarget::File(path),
        (None, Commands::Play) => LogTarget::Disabled,
        (None, _) => LogTarget::Stderr,
    };
    logging::init(cli.log_level.as_deref(), target)?;

    let dictionary = load_dictionary(&cli.dictionary, &cli.language)?;

    match command {
        Commands::Play => {
            let session = start_session(&cli.start_words, &dictionary, &cli.language, cli.seed)?;
            run_play_command(session)?;
            Ok(ExitCode::SUCCESS)
        }
        Commands::Simple => {
            let mut session =
                start_session(&cli.start_words, &dictionary, &cli.language, cli.seed)?;
            run_simple(&mut session)?;
            Ok(ExitCode::SUCCESS)
        }
        Commands::Check { root, word, used } => {
            let validator = WordValidator::new(&dictionary, cli.language.as_str());
            let result = check_word(
                CheckConfig {
                    root,
                    word,
                    used_words: used,
                },
                &validator,
            );
            print_check_result(&result);
            Ok(if result.outcome.is_accepted() {
                ExitCode::SUCCESS
            } else {
                ExitCode::FAILURE
            })
        }
        Commands::Solutions { root, limit } => {
            let validator = WordValidator::new(&dictionary, cli.language.as_str());
            let result = find_solutions(&root, &dictionary, &validator, true);
            print_solutions_result(&result, limit);
            Ok(ExitCode::SUCCESS)
        }
    }
}

/// Load the dictionary selected by the -d flag
fn load_dictionary(source: &WordListSource, language: &str) -> Result<WordListDictionary> {
    match source {
        WordListSource::Builtin => {
            let dict = WordListDictionary::builtin();
            if language != dict.language() {
                tracing::warn!(
                    requested = language,
                    available = dict.language(),
                    "builtin dictionary does not cover the requested language"
                );
            }
            Ok(dict)
        }
        WordListSource::File(path) => WordListDictionary::load(path, language)
            .with_context(|| format!("failed to load dictionary from {}", path.display())),
    }
}

/// Pick the first root word; a missing word list ends the program
fn start_session<'a>(
    source: &WordListSource,
    dictionary: &'a WordListDictionary,
    language: &str,
    seed: Option<u64>,
) -> Result<Session<&'a WordListDictionary, StdRng>> {
    let root_words = source
        .load_root_word_candidates()
        .with_context(|| format!("could not load root words from {source}"))?;

    let rng = seed.map_or_else(StdRng::from_os_rng, StdRng::seed_from_u64);
    let validator = WordValidator::new(dictionary, language);

    Session::start(root_words, validator, rng).context("no root word available")
}

fn run_play_command(session: Session<&WordListDictionary, StdRng>) -> Result<()> {
    use word_scramble::interactive::{App, run_tui};

    let app = App::new(session);
    run_tui(app)
}
