//! Dictionary lookup
//!
//! The validator never decides on its own what counts as a real word. It asks
//! a `DictionaryProvider`, so hosts can plug in any spell checker and tests can
//! use a fixed in-memory set.

mod word_set;

pub use word_set::WordSet;

/// Answers "is this string a real word"
///
/// Words are passed already normalized (trimmed, lowercase).
pub trait DictionaryProvider {
    fn is_real_word(&self, word: &str) -> bool;
}

impl<F> DictionaryProvider for F
where
    F: Fn(&str) -> bool,
{
    #[inline]
    fn is_real_word(&self, word: &str) -> bool {
        self(word)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn closures_are_providers() {
        let only_silk = |word: &str| word == "silk";
        assert!(only_silk.is_real_word("silk"));
        assert!(!only_silk.is_real_word("worm"));
    }

    #[test]
    fn trait_objects_work() {
        let set = WordSet::from_words(["worm"]);
        let provider: &dyn DictionaryProvider = &set;
        assert!(provider.is_real_word("worm"));
        assert!(!provider.is_real_word("silk"));
    }
}
