//! In-memory dictionary backed by a hash set

use super::DictionaryProvider;
use crate::core::normalize;
use crate::wordlists::DICTIONARY;
use crate::wordlists::loader::load_from_file;
use rustc_hash::FxHashSet;
use std::io;
use std::path::Path;

/// A fixed set of known words
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct WordSet {
    words: FxHashSet<String>,
}

impl WordSet {
    /// Build a set from any list of words
    ///
    /// Entries are normalized; blank entries are skipped.
    ///
    /// # Examples
    /// ```
    /// use word_scramble::dictionary::WordSet;
    ///
    /// let set = WordSet::from_words(["Silk ", "worm", ""]);
    /// assert_eq!(set.len(), 2);
    /// assert!(set.contains("silk"));
    /// ```
    pub fn from_words<I, S>(words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let words = words
            .into_iter()
            .map(|word| normalize(word.as_ref()))
            .filter(|word| !word.is_empty())
            .collect();
        Self { words }
    }

    /// The English word list compiled into the binary
    #[must_use]
    pub fn embedded() -> Self {
        Self::from_words(DICTIONARY)
    }

    /// Load a newline-delimited word list
    ///
    /// # Errors
    ///
    /// Returns an I/O error if the file cannot be opened or read.
    pub fn from_file<P: AsRef<Path>>(path: P) -> io::Result<Self> {
        Ok(Self::from_words(load_from_file(path)?))
    }

    #[inline]
    #[must_use]
    pub fn contains(&self, word: &str) -> bool {
        self.words.contains(word)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.words.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }
}

impl DictionaryProvider for WordSet {
    #[inline]
    fn is_real_word(&self, word: &str) -> bool {
        self.contains(word)
    }
}

impl<S: AsRef<str>> FromIterator<S> for WordSet {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        Self::from_words(iter)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn from_words_normalizes_entries() {
        let set = WordSet::from_words(["  SILK", "Worm\n"]);
        assert!(set.contains("silk"));
        assert!(set.contains("worm"));
        assert!(!set.contains("SILK"));
    }

    #[test]
    fn duplicates_collapse() {
        let set: WordSet = ["silk", "Silk", "SILK"].into_iter().collect();
        assert_eq!(set.len(), 1);
    }

    #[test]
    fn empty_set_knows_nothing() {
        let set = WordSet::default();
        assert!(set.is_empty());
        assert!(!set.is_real_word("silk"));
    }

    #[test]
    fn embedded_dictionary_knows_common_words() {
        let set = WordSet::embedded();
        assert!(!set.is_empty());
        for word in ["silk", "worm", "milk", "silkworm"] {
            assert!(set.is_real_word(word), "missing '{word}'");
        }
        assert!(!set.is_real_word("klis"));
    }

    #[test]
    fn from_file_reads_lines() {
        let mut file = NamedTempFile::new().unwrap();
        write!(file, "silk\n\nWORM\n").unwrap();

        let set = WordSet::from_file(file.path()).unwrap();

        assert_eq!(set.len(), 2);
        assert!(set.is_real_word("worm"));
    }

    #[test]
    fn from_file_missing_is_error() {
        assert!(WordSet::from_file("/nonexistent/word_scramble/dictionary.txt").is_err());
    }
}
