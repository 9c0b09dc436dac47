//! Word check command
//!
//! Validates a single candidate against a root word without starting a game.

use crate::core::{LetterPool, Verdict, normalize, validate};
use crate::dictionary::DictionaryProvider;

/// Result of checking one word
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CheckResult {
    pub word: String,
    pub root: String,
    pub verdict: Verdict,
    /// Root letters left over after building the word (only when possible)
    pub leftover: Option<String>,
}

/// Check `word` against `root`, treating `used` as already accepted
///
/// Unlike an interactive session, a rejection here is still a successful
/// check: the verdict carries the outcome.
#[must_use]
pub fn check_word<S, D>(word: &str, root: &str, used: &[S], dictionary: &D) -> CheckResult
where
    S: AsRef<str>,
    D: DictionaryProvider + ?Sized,
{
    let normalized_word = normalize(word);
    let root = normalize(root);
    let verdict = validate(word, &root, used, dictionary);

    let leftover = match verdict {
        Verdict::Accepted | Verdict::RejectedNotAWord | Verdict::RejectedDuplicate => {
            leftover_letters(&normalized_word, &root)
        }
        Verdict::RejectedEmpty | Verdict::RejectedNotSubsequence => None,
    };

    CheckResult {
        word: normalized_word,
        root,
        verdict,
        leftover,
    }
}

fn leftover_letters(word: &str, root: &str) -> Option<String> {
    let mut pool = LetterPool::new(root);
    word.chars()
        .all(|ch| pool.take(ch))
        .then(|| pool.to_string())
}

/// Split a comma-separated list of used words
#[must_use]
pub fn parse_used(list: &str) -> Vec<String> {
    list.split(',')
        .map(str::trim)
        .filter(|word| !word.is_empty())
        .map(str::to_string)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dictionary::WordSet;

    fn dictionary() -> WordSet {
        WordSet::from_words(["silk", "worm", "silkworm"])
    }

    const NONE: &[&str] = &[];

    #[test]
    fn check_accepted_word() {
        let result = check_word("Silk", "silkworm", NONE, &dictionary());

        assert_eq!(result.word, "silk");
        assert_eq!(result.root, "silkworm");
        assert_eq!(result.verdict, Verdict::Accepted);
        assert_eq!(result.leftover.as_deref(), Some("morw"));
    }

    #[test]
    fn check_impossible_word_has_no_leftover() {
        let result = check_word("silkworms", "silkworm", NONE, &dictionary());
        assert_eq!(result.verdict, Verdict::RejectedNotSubsequence);
        assert!(result.leftover.is_none());
    }

    #[test]
    fn check_honors_used_list() {
        let used = parse_used("worm, silk");
        let result = check_word("WORM", "silkworm", &used, &dictionary());
        assert_eq!(result.verdict, Verdict::RejectedDuplicate);
    }

    #[test]
    fn check_root_itself_leaves_nothing() {
        let result = check_word("silkworm", "silkworm", NONE, &dictionary());
        assert_eq!(result.verdict, Verdict::Accepted);
        assert_eq!(result.leftover.as_deref(), Some(""));
    }

    #[test]
    fn parse_used_skips_blanks() {
        assert_eq!(parse_used("silk,, worm ,"), vec!["silk", "worm"]);
        assert!(parse_used("").is_empty());
    }
}
