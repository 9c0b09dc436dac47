//! Simple interactive CLI mode
//!
//! Text-based game loop without the TUI

use crate::dictionary::DictionaryProvider;
use crate::output::{print_used_words, print_verdict};
use crate::session::Session;
use colored::Colorize;
use rand::Rng;
use std::io::{self, Write};

/// Run the simple interactive CLI mode
///
/// # Errors
///
/// Returns an error if there's an I/O error reading user input or writing to
/// the terminal.
pub fn run_simple<S, D, R>(words: &[S], dictionary: &D, rng: &mut R) -> io::Result<()>
where
    S: AsRef<str>,
    D: DictionaryProvider + ?Sized,
    R: Rng + ?Sized,
{
    println!("\n╔══════════════════════════════════════════════════════════════╗");
    println!("║                 Word Scramble - Simple Mode                  ║");
    println!("╚══════════════════════════════════════════════════════════════╝\n");

    println!("Make as many words as you can from the letters of the root word.");
    println!("Commands: 'quit' to exit, 'new' for a new root word, 'list' to show your words\n");

    let mut session = Session::start(words, rng);
    print_root(&session);

    loop {
        let Some(input) = get_user_input("Word")? else {
            // stdin closed
            println!();
            return Ok(());
        };

        match input.trim().to_lowercase().as_str() {
            ":q" | "quit" | "exit" => {
                println!("\n👋 Thanks for playing!\n");
                return Ok(());
            }
            "new" => {
                session.restart(words, rng);
                println!("\n🔄 New game started!\n");
                print_root(&session);
            }
            "list" => print_used_words(session.used()),
            _ => {
                let verdict = session.submit(&input, dictionary);
                print_verdict(verdict, input.trim(), session.root());
            }
        }
    }
}

fn print_root(session: &Session) {
    println!(
        "Root word: {}  ({} letters)\n",
        session.root().to_uppercase().bright_yellow().bold(),
        session.letters().len()
    );
}

/// Get user input with a prompt
///
/// Returns `None` once stdin reaches end of file.
fn get_user_input(prompt: &str) -> io::Result<Option<String>> {
    print!("{prompt}: ");
    io::stdout().flush()?;

    let mut input = String::new();
    if io::stdin().read_line(&mut input)? == 0 {
        return Ok(None);
    }

    Ok(Some(input.trim_end_matches(['\r', '\n']).to_string()))
}
