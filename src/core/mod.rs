//! Core domain types for the word scramble game
//!
//! Word validation lives here. Everything is pure: the only outside input is
//! the injected dictionary lookup.

mod letters;
mod validator;
mod verdict;

pub use letters::LetterPool;
pub use validator::{is_original, is_possible, normalize, validate};
pub use verdict::Verdict;
