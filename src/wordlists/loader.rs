//! Word list loading utilities
//!
//! Provides functions to load word lists from files or use embedded constants,
//! and to pick a session's root word from a list.

use crate::core::normalize;
use log::{debug, warn};
use rand::Rng;
use rand::prelude::IndexedRandom;
use std::fs;
use std::io;
use std::path::Path;

/// Root word used when the word list has nothing to offer
pub const DEFAULT_ROOT: &str = "silkworm";

/// Load words from a newline-delimited file
///
/// Entries are trimmed and lowercased; empty lines are skipped.
///
/// # Errors
///
/// Returns an I/O error if the file cannot be read or opened.
///
/// # Examples
/// ```no_run
/// use word_scramble::wordlists::loader::load_from_file;
///
/// let words = load_from_file("data/start.txt").unwrap();
/// println!("Loaded {} words", words.len());
/// ```
pub fn load_from_file<P: AsRef<Path>>(path: P) -> io::Result<Vec<String>> {
    let path = path.as_ref();
    let content = fs::read_to_string(path)?;
    let words = words_from_lines(content.lines());

    debug!("loaded {} words from {}", words.len(), path.display());
    Ok(words)
}

/// Convert embedded string slice to an owned word list
///
/// # Examples
/// ```
/// use word_scramble::wordlists::loader::words_from_slice;
/// use word_scramble::wordlists::START_WORDS;
///
/// let words = words_from_slice(START_WORDS);
/// assert_eq!(words.len(), START_WORDS.len());
/// ```
#[must_use]
pub fn words_from_slice(slice: &[&str]) -> Vec<String> {
    words_from_lines(slice.iter().copied())
}

fn words_from_lines<'a>(lines: impl Iterator<Item = &'a str>) -> Vec<String> {
    lines
        .map(normalize)
        .filter(|word| !word.is_empty())
        .collect()
}

/// Pick a root word uniformly at random
///
/// Blank entries are ignored. Falls back to [`DEFAULT_ROOT`] when no usable
/// entry remains.
#[must_use]
pub fn choose_root<S, R>(words: &[S], rng: &mut R) -> String
where
    S: AsRef<str>,
    R: Rng + ?Sized,
{
    let pool: Vec<&str> = words
        .iter()
        .map(|word| word.as_ref().trim())
        .filter(|word| !word.is_empty())
        .collect();

    if let Some(root) = pool.choose(rng) {
        normalize(root)
    } else {
        warn!("word list is empty, falling back to '{DEFAULT_ROOT}'");
        DEFAULT_ROOT.to_string()
    }
}
