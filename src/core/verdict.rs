//! Validation outcome
//!
//! Every result of checking a candidate is a `Verdict`. Rejections carry no
//! error type: the UI maps each one to a (title, message) pair.

use std::fmt;

/// Outcome of validating a candidate word
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Verdict {
    Accepted,
    RejectedEmpty,
    RejectedDuplicate,
    RejectedNotSubsequence,
    RejectedNotAWord,
}

impl Verdict {
    #[inline]
    #[must_use]
    pub const fn is_accepted(self) -> bool {
        matches!(self, Self::Accepted)
    }

    /// Short heading shown to the player
    #[must_use]
    pub const fn title(self) -> &'static str {
        match self {
            Self::Accepted => "Nice one",
            Self::RejectedEmpty => "Nothing entered",
            Self::RejectedDuplicate => "Word used already",
            Self::RejectedNotSubsequence => "Word not possible",
            Self::RejectedNotAWord => "Word not recognized",
        }
    }

    /// Explanation shown under the title
    ///
    /// # Examples
    /// ```
    /// use word_scramble::core::Verdict;
    ///
    /// let message = Verdict::RejectedNotSubsequence.message("xyz", "silkworm");
    /// assert!(message.contains("silkworm"));
    /// ```
    #[must_use]
    pub fn message(self, word: &str, root: &str) -> String {
        match self {
            Self::Accepted => format!("'{word}' added to your list"),
            Self::RejectedEmpty => format!("Type a word made from the letters of '{root}'"),
            Self::RejectedDuplicate => format!("'{word}' is already on your list. Be more original!"),
            Self::RejectedNotSubsequence => {
                format!("You can't spell '{word}' from the letters of '{root}'!")
            }
            Self::RejectedNotAWord => format!("'{word}' isn't a real word. You can't just make them up!"),
        }
    }
}

impl fmt::Display for Verdict {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.title())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const ALL: [Verdict; 5] = [
        Verdict::RejectedEmpty,
        Verdict::RejectedDuplicate,
        Verdict::RejectedNotSubsequence,
        Verdict::RejectedNotAWord,
        Verdict::Accepted,
    ];

    #[test]
    fn only_accepted_is_accepted() {
        let accepted: Vec<_> = ALL.iter().filter(|v| v.is_accepted()).collect();
        assert_eq!(accepted, vec![&Verdict::Accepted]);
    }

    #[test]
    fn titles_are_distinct() {
        let titles: std::collections::HashSet<_> = ALL.iter().map(|v| v.title()).collect();
        assert_eq!(titles.len(), ALL.len());
    }

    #[test]
    fn messages_mention_word() {
        let message = Verdict::RejectedDuplicate.message("silk", "silkworm");
        assert!(message.contains("silk"));

        let message = Verdict::RejectedNotAWord.message("klis", "silkworm");
        assert!(message.contains("klis"));
    }

    #[test]
    fn empty_message_mentions_root() {
        let message = Verdict::RejectedEmpty.message("", "silkworm");
        assert!(message.contains("silkworm"));
    }

    #[test]
    fn display_uses_title() {
        assert_eq!(format!("{}", Verdict::RejectedDuplicate), "Word used already");
    }
}
