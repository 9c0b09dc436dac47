//! Command implementations

pub mod check;
pub mod simple;

pub use check::{CheckResult, check_word, parse_used};
pub use simple::run_simple;
