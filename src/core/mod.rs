//! Core domain types for Word Scramble
//!
//! This module contains the fundamental domain types with no I/O.
//! Everything here is pure and testable on its own.

mod rejection;
mod score;
mod word;

pub use rejection::{Decision, Rejection};
pub use score::{BONUS_FREE_LENGTH, POINTS_PER_WORD, total_score, word_score};
pub use word::{LetterPool, RootWord, WordError, normalize_candidate};
