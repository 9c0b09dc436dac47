//! Candidate word validation
//!
//! Checks run in a fixed order and the first failure decides the verdict:
//! empty input, duplicate, letters not available in the root, unknown word.

use super::letters::LetterPool;
use super::verdict::Verdict;
use crate::dictionary::DictionaryProvider;
use log::debug;

/// Trim surrounding whitespace and newlines, then lowercase
///
/// # Examples
/// ```
/// use word_scramble::core::normalize;
///
/// assert_eq!(normalize("  Silk\n"), "silk");
/// ```
#[must_use]
pub fn normalize(input: &str) -> String {
    input.trim().to_lowercase()
}

/// Whether `word` has not been accepted before
///
/// Entries of `used` are compared after normalization, so earlier words stored
/// with their original casing still match.
#[must_use]
pub fn is_original<S: AsRef<str>>(word: &str, used: &[S]) -> bool {
    let word = normalize(word);
    !used.iter().any(|entry| normalize(entry.as_ref()) == word)
}

/// Whether every letter of `word` can be drawn from `root` without reuse
#[must_use]
pub fn is_possible(word: &str, root: &str) -> bool {
    LetterPool::new(&normalize(root)).covers(&normalize(word))
}

/// Decide whether `candidate` is acceptable for this root and used list
///
/// Pure apart from the dictionary lookup; the caller records accepted words.
///
/// # Examples
/// ```
/// use word_scramble::core::{Verdict, validate};
/// use word_scramble::dictionary::WordSet;
///
/// let dictionary = WordSet::from_words(["silk", "worm"]);
/// let used: Vec<String> = Vec::new();
///
/// assert_eq!(validate("Silk", "silkworm", &used, &dictionary), Verdict::Accepted);
/// assert_eq!(validate("xyz", "silkworm", &used, &dictionary), Verdict::RejectedNotSubsequence);
/// ```
#[must_use]
pub fn validate<S, D>(candidate: &str, root: &str, used: &[S], dictionary: &D) -> Verdict
where
    S: AsRef<str>,
    D: DictionaryProvider + ?Sized,
{
    let word = normalize(candidate);

    let verdict = if word.is_empty() {
        Verdict::RejectedEmpty
    } else if !is_original(&word, used) {
        Verdict::RejectedDuplicate
    } else if !is_possible(&word, root) {
        Verdict::RejectedNotSubsequence
    } else if !dictionary.is_real_word(&word) {
        Verdict::RejectedNotAWord
    } else {
        Verdict::Accepted
    };

    debug!("validate '{word}' against '{root}': {verdict:?}");
    verdict
}
