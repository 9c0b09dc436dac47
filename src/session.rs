//! Game session state
//!
//! A session owns the root word and the words accepted so far. UI layers hold a
//! `Session` and feed raw input to [`Session::submit`].

use crate::core::{LetterPool, Verdict, validate};
use crate::dictionary::DictionaryProvider;
use crate::wordlists::choose_root;
use log::info;
use rand::Rng;

/// One game: a root word and the words built from it
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Session {
    root: String,
    used: Vec<String>,
}

impl Session {
    /// Start a session with a known root word
    #[must_use]
    pub fn new(root: impl Into<String>) -> Self {
        let root = root.into().trim().to_lowercase();
        info!("new session with root '{root}'");
        Self {
            root,
            used: Vec::new(),
        }
    }

    /// Start a session with a root chosen at random from `words`
    pub fn start<S, R>(words: &[S], rng: &mut R) -> Self
    where
        S: AsRef<str>,
        R: Rng + ?Sized,
    {
        Self::new(choose_root(words, rng))
    }

    /// Validate `input` and record it if accepted
    ///
    /// Accepted words are stored trimmed with their original casing, newest
    /// first. Rejections leave the session untouched.
    ///
    /// # Examples
    /// ```
    /// use word_scramble::core::Verdict;
    /// use word_scramble::dictionary::WordSet;
    /// use word_scramble::session::Session;
    ///
    /// let dictionary = WordSet::from_words(["silk", "worm"]);
    /// let mut session = Session::new("silkworm");
    ///
    /// assert_eq!(session.submit("Silk", &dictionary), Verdict::Accepted);
    /// assert_eq!(session.submit("silk", &dictionary), Verdict::RejectedDuplicate);
    /// assert_eq!(session.used(), ["Silk"]);
    /// ```
    pub fn submit<D>(&mut self, input: &str, dictionary: &D) -> Verdict
    where
        D: DictionaryProvider + ?Sized,
    {
        let verdict = validate(input, &self.root, &self.used, dictionary);
        if verdict.is_accepted() {
            self.used.insert(0, input.trim().to_string());
        }
        verdict
    }

    /// Throw away this game and start over with a fresh root
    pub fn restart<S, R>(&mut self, words: &[S], rng: &mut R)
    where
        S: AsRef<str>,
        R: Rng + ?Sized,
    {
        *self = Self::start(words, rng);
    }

    #[inline]
    #[must_use]
    pub fn root(&self) -> &str {
        &self.root
    }

    /// Accepted words, most recent first
    #[inline]
    #[must_use]
    pub fn used(&self) -> &[String] {
        &self.used
    }

    /// Letters available to build words from
    #[must_use]
    pub fn letters(&self) -> LetterPool {
        LetterPool::new(&self.root)
    }

    /// Combined letter count of every accepted word
    #[must_use]
    pub fn letter_total(&self) -> usize {
        self.used.iter().map(|word| word.chars().count()).sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{is_original, is_possible, normalize};
    use crate::dictionary::WordSet;
    use crate::wordlists::DEFAULT_ROOT;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    fn dictionary() -> WordSet {
        WordSet::from_words(["silk", "worm", "milk", "slim", "work", "silkworm"])
    }

    #[test]
    fn new_normalizes_root() {
        let session = Session::new("  SilkWorm\n");
        assert_eq!(session.root(), "silkworm");
        assert!(session.used().is_empty());
    }

    #[test]
    fn accepted_words_are_prepended() {
        let dict = dictionary();
        let mut session = Session::new("silkworm");

        assert_eq!(session.submit("silk", &dict), Verdict::Accepted);
        assert_eq!(session.submit("worm", &dict), Verdict::Accepted);
        assert_eq!(session.submit("milk", &dict), Verdict::Accepted);

        assert_eq!(session.used(), ["milk", "worm", "silk"]);
    }

    #[test]
    fn accepted_words_keep_casing_but_lose_whitespace() {
        let dict = dictionary();
        let mut session = Session::new("silkworm");

        assert_eq!(session.submit("  Silk\n", &dict), Verdict::Accepted);
        assert_eq!(session.used(), ["Silk"]);
    }

    #[test]
    fn rejections_leave_state_alone() {
        let dict = dictionary();
        let mut session = Session::new("silkworm");
        session.submit("silk", &dict);
        let before = session.clone();

        for input in ["", "SILK", "silkworms", "xyz", "klis"] {
            assert!(!session.submit(input, &dict).is_accepted());
        }
        assert_eq!(session, before);
    }

    #[test]
    fn resubmitting_in_any_casing_is_duplicate() {
        let dict = dictionary();
        let mut session = Session::new("silkworm");
        session.submit("Worm", &dict);

        for input in ["worm", "WORM", "wOrM", " worm "] {
            assert_eq!(session.submit(input, &dict), Verdict::RejectedDuplicate);
        }
    }

    #[test]
    fn used_words_satisfied_every_check_when_added() {
        let dict = dictionary();
        let mut session = Session::new("silkworm");
        let inputs = ["silk", "Silk", "worm", "klis", "work", "silkworms", "slim", "milk"];

        for input in inputs {
            let before: Vec<String> = session.used().to_vec();
            if session.submit(input, &dict).is_accepted() {
                let word = normalize(input);
                assert!(is_original(&word, &before));
                assert!(is_possible(&word, session.root()));
                assert!(dict.contains(&word));
                assert_eq!(session.used().len(), before.len() + 1);
            }
        }
        assert_eq!(session.used().len(), 5);
    }

    #[test]
    fn letter_total_sums_accepted_words() {
        let dict = dictionary();
        let mut session = Session::new("silkworm");
        session.submit("silk", &dict);
        session.submit("silkworm", &dict);
        assert_eq!(session.letter_total(), 12);
    }

    #[test]
    fn letters_come_from_root() {
        let session = Session::new("silkworm");
        assert_eq!(session.letters().len(), 8);
    }

    #[test]
    fn start_from_empty_list_uses_default_root() {
        let empty: &[&str] = &[];
        let session = Session::start(empty, &mut StdRng::seed_from_u64(3));
        assert_eq!(session.root(), DEFAULT_ROOT);
    }

    #[test]
    fn restart_clears_used_words() {
        let dict = dictionary();
        let mut session = Session::new("silkworm");
        session.submit("silk", &dict);

        session.restart(&["balloons"], &mut StdRng::seed_from_u64(9));
        assert_eq!(session.root(), "balloons");
        assert!(session.used().is_empty());
    }
}
