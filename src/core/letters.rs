//! Letter multiset for the root word
//!
//! A `LetterPool` counts how many times each letter is available, so a
//! candidate can draw letters from it without reuse beyond availability.

use rustc_hash::FxHashMap;
use std::fmt;

/// Multiset of letters drawn from a word
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct LetterPool {
    counts: FxHashMap<char, usize>,
}

impl LetterPool {
    /// Build a pool holding every letter of `word` once per occurrence
    ///
    /// # Examples
    /// ```
    /// use word_scramble::core::LetterPool;
    ///
    /// let pool = LetterPool::new("silkworm");
    /// assert_eq!(pool.count('s'), 1);
    /// assert_eq!(pool.count('z'), 0);
    /// ```
    #[must_use]
    pub fn new(word: &str) -> Self {
        let mut counts = FxHashMap::default();
        for ch in word.chars() {
            *counts.entry(ch).or_insert(0) += 1;
        }
        Self { counts }
    }

    /// Remaining occurrences of a letter
    #[inline]
    #[must_use]
    pub fn count(&self, letter: char) -> usize {
        self.counts.get(&letter).copied().unwrap_or(0)
    }

    /// Total letters left in the pool
    #[must_use]
    pub fn len(&self) -> usize {
        self.counts.values().sum()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Remove one occurrence of `letter`
    ///
    /// Returns `false` (leaving the pool untouched) when the letter is used up.
    pub fn take(&mut self, letter: char) -> bool {
        match self.counts.get_mut(&letter) {
            Some(count) if *count > 0 => {
                *count -= 1;
                true
            }
            _ => false,
        }
    }

    /// Draw every letter of `word` from a copy of this pool
    ///
    /// Succeeds only if each letter of `word` can be matched to a distinct
    /// occurrence in the pool.
    #[must_use]
    pub fn covers(&self, word: &str) -> bool {
        let mut remaining = self.clone();
        word.chars().all(|ch| remaining.take(ch))
    }
}

impl fmt::Display for LetterPool {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut letters: Vec<(char, usize)> = self
            .counts
            .iter()
            .filter(|&(_, &count)| count > 0)
            .map(|(&ch, &count)| (ch, count))
            .collect();
        letters.sort_unstable();

        for (ch, count) in letters {
            for _ in 0..count {
                write!(f, "{ch}")?;
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn counts_repeated_letters() {
        let pool = LetterPool::new("balloons");
        assert_eq!(pool.count('l'), 2);
        assert_eq!(pool.count('o'), 2);
        assert_eq!(pool.count('b'), 1);
        assert_eq!(pool.len(), 8);
    }

    #[test]
    fn take_exhausts_letter() {
        let mut pool = LetterPool::new("silkworm");
        assert!(pool.take('s'));
        assert!(!pool.take('s'));
        assert_eq!(pool.len(), 7);
    }

    #[test]
    fn take_missing_letter_leaves_pool_unchanged() {
        let mut pool = LetterPool::new("cat");
        assert!(!pool.take('z'));
        assert_eq!(pool, LetterPool::new("cat"));
    }

    #[test]
    fn covers_respects_multiplicity() {
        let pool = LetterPool::new("silkworm");
        assert!(pool.covers("silk"));
        assert!(pool.covers("worm"));
        assert!(pool.covers("silkworm"));
        assert!(!pool.covers("silkworms"));
        assert!(!pool.covers("mill"));
    }

    #[test]
    fn covers_does_not_consume_pool() {
        let pool = LetterPool::new("silkworm");
        assert!(pool.covers("silk"));
        assert!(pool.covers("silk"));
        assert_eq!(pool.len(), 8);
    }

    #[test]
    fn empty_word_is_always_covered() {
        assert!(LetterPool::new("").covers(""));
        assert!(LetterPool::new("").is_empty());
    }

    #[test]
    fn display_sorts_letters() {
        let pool = LetterPool::new("balloons");
        assert_eq!(format!("{pool}"), "abllnoos");
    }
}
