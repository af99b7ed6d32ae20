//! Core domain types for Wordle
//!
//! Words, verdicts and guess evaluation. All types here are pure and have no
//! knowledge of sessions, storage or presentation.

mod evaluation;
mod verdict;
mod word;

pub use evaluation::Evaluation;
pub use verdict::Verdict;
pub use word::{WORD_LENGTH, Word, WordError};
