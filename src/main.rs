//! Word Scramble - CLI
//!
//! Word scramble game with TUI and CLI modes.

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use log::info;
use rand::SeedableRng;
use rand::rngs::StdRng;
use word_scramble::{
    commands::{check_word, parse_used, run_simple},
    dictionary::WordSet,
    output::print_check_result,
    wordlists::{
        START_WORDS, choose_root,
        loader::{load_from_file, words_from_slice},
    },
};

#[derive(Parser)]
#[command(
    name = "word_scramble",
    about = "Build as many words as you can from the letters of a random root word",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Root word list: 'embedded' (default) or path to a newline-delimited file
    #[arg(short = 'w', long, global = true, default_value = "embedded")]
    words: String,

    /// Dictionary: 'embedded' (default) or path to a newline-delimited file
    #[arg(short = 'd', long, global = true, default_value = "embedded")]
    dictionary: String,

    /// Seed for choosing root words (random if omitted)
    #[arg(short, long, global = true)]
    seed: Option<u64>,
}

#[derive(Subcommand)]
enum Commands {
    /// Interactive TUI mode (default)
    Play,

    /// Simple CLI mode (line-by-line, no TUI)
    Simple,

    /// Check a single word against a root word
    Check {
        /// The root word to build from
        root: String,

        /// The candidate word
        word: String,

        /// Comma-separated words already accepted
        #[arg(short, long, default_value = "")]
        used: String,
    },

    /// Print a randomly chosen root word
    Root,
}

/// Load the root word list based on the -w flag
fn load_words(mode: &str) -> Result<Vec<String>> {
    match mode {
        "embedded" => Ok(words_from_slice(START_WORDS)),
        path => load_from_file(path).with_context(|| format!("Could not load word list from {path}")),
    }
}

/// Load the dictionary based on the -d flag
fn load_dictionary(mode: &str) -> Result<WordSet> {
    match mode {
        "embedded" => Ok(WordSet::embedded()),
        path => {
            WordSet::from_file(path).with_context(|| format!("Could not load dictionary from {path}"))
        }
    }
}

fn make_rng(seed: Option<u64>) -> StdRng {
    seed.map_or_else(|| StdRng::from_rng(&mut rand::rng()), StdRng::seed_from_u64)
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Logging would corrupt the TUI, so it stays off there unless asked for
    let tui = matches!(cli.command, None | Some(Commands::Play));
    if !tui || std::env::var_os("RUST_LOG").is_some() {
        env_logger::init();
    }

    run(cli)
}

/// Dispatch a parsed command line, loading only the resources it needs
fn run(cli: Cli) -> Result<()> {
    // Default to Play mode if no command given
    let command = cli.command.unwrap_or(Commands::Play);
    let mut rng = make_rng(cli.seed);

    match command {
        Commands::Play => {
            let words = load_words(&cli.words)?;
            let dictionary = load_dictionary(&cli.dictionary)?;
            info!(
                "loaded {} root words and {} dictionary words",
                words.len(),
                dictionary.len()
            );
            run_play_command(&words, &dictionary, rng)
        }
        Commands::Simple => {
            let words = load_words(&cli.words)?;
            let dictionary = load_dictionary(&cli.dictionary)?;
            info!(
                "loaded {} root words and {} dictionary words",
                words.len(),
                dictionary.len()
            );
            run_simple(&words, &dictionary, &mut rng).map_err(Into::into)
        }
        Commands::Check { root, word, used } => {
            let dictionary = load_dictionary(&cli.dictionary)?;
            let used = parse_used(&used);
            let result = check_word(&word, &root, &used, &dictionary);
            print_check_result(&result);
            Ok(())
        }
        Commands::Root => {
            let words = load_words(&cli.words)?;
            println!("{}", choose_root(&words, &mut rng));
            Ok(())
        }
    }
}

fn run_play_command(words: &[String], dictionary: &WordSet, rng: StdRng) -> Result<()> {
    use word_scramble::interactive::{App, run_tui};

    let app = App::new(words, dictionary, rng);
    run_tui(app)
}
