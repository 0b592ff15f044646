//! Word Scramble - CLI
//!
//! Word-building game with TUI and CLI modes.

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;
use word_scramble::{
    commands::{CheckConfig, check_words, run_simple},
    config::{GameConfig, WordSource},
    dictionary::{Language, WordListDictionary},
    game::GameState,
    output::print_check_result,
};

#[derive(Parser)]
#[command(
    name = "word_scramble",
    about = "Make as many words as you can from the letters of a root word",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Language dictionary lookups are made in
    #[arg(short, long, global = true, default_value = "en")]
    language: Language,

    /// Root word list: newline-delimited file (default: embedded list)
    #[arg(short = 'r', long, global = true)]
    root_words: Option<PathBuf>,

    /// Dictionary: newline-delimited file (default: embedded English list)
    #[arg(short = 'd', long, global = true)]
    dictionary: Option<PathBuf>,
}

#[derive(Subcommand)]
enum Commands {
    /// Interactive TUI mode (default)
    Play,

    /// Simple CLI mode (line-based, without TUI)
    Simple,

    /// Check a list of words against a fixed root word
    Check {
        /// The root word to play against
        #[arg(long)]
        root: String,

        /// Words to submit, in order
        words: Vec<String>,
    },
}

impl Cli {
    fn config(&self) -> GameConfig {
        GameConfig {
            language: self.language.clone(),
            root_words: WordSource::from_path(self.root_words.clone()),
            dictionary: WordSource::from_path(self.dictionary.clone()),
        }
    }
}

fn main() -> Result<()> {
    // Logs go to stderr so they never mix with the game screen
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let config = cli.config();

    let dictionary = config
        .load_dictionary()
        .context("Could not load dictionary")?;

    // Default to Play mode if no command given
    let command = cli.command.unwrap_or(Commands::Play);

    match command {
        Commands::Play => run_play_command(&config, dictionary),
        Commands::Simple => run_simple_command(&config, dictionary),
        Commands::Check { root, words } => {
            run_check_command(root, words, dictionary, config.language)
        }
    }
}

fn start_game(
    config: &GameConfig,
    dictionary: WordListDictionary,
) -> Result<GameState<WordListDictionary>> {
    let root_words = config
        .load_root_words()
        .context("Could not load root words")?;

    let game = GameState::start(
        root_words,
        dictionary,
        config.language.clone(),
        &mut rand::rng(),
    )?;
    Ok(game)
}

fn run_play_command(config: &GameConfig, dictionary: WordListDictionary) -> Result<()> {
    use word_scramble::interactive::{App, run_tui};

    let game = start_game(config, dictionary)?;
    run_tui(App::new(game))
}

fn run_simple_command(config: &GameConfig, dictionary: WordListDictionary) -> Result<()> {
    let mut game = start_game(config, dictionary)?;
    run_simple(&mut game)?;
    Ok(())
}

fn run_check_command(
    root: String,
    words: Vec<String>,
    dictionary: WordListDictionary,
    language: Language,
) -> Result<()> {
    let result = check_words(CheckConfig::new(root, words), dictionary, language)
        .context("Invalid root word")?;

    print_check_result(&result);
    Ok(())
}
