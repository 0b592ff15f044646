//! Game sessions
//!
//! `GameState` owns one game in progress and runs every submission through the
//! validation pipeline.

mod state;

pub use state::{GameError, GameState, MIN_WORD_LENGTH};
