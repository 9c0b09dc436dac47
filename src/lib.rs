//! Word Scramble
//!
//! A word game: build as many words as you can from the letters of a random
//! root word.
//!
//! # Quick Start
//!
//! ```rust
//! use word_scramble::core::Verdict;
//! use word_scramble::dictionary::WordSet;
//! use word_scramble::session::Session;
//!
//! let dictionary = WordSet::embedded();
//! let mut session = Session::new("silkworm");
//!
//! assert_eq!(session.submit("silk", &dictionary), Verdict::Accepted);
//! assert_eq!(session.submit("silkworms", &dictionary), Verdict::RejectedNotSubsequence);
//! ```

// Core domain types
pub mod core;

// Real-word lookup
pub mod dictionary;

// Game state
pub mod session;

// Word lists
pub mod wordlists;

// Command implementations
pub mod commands;

// Terminal output formatting
pub mod output;

// Interactive TUI interface
pub mod interactive;
