//! Word Scramble
//!
//! A word-building game: make as many words as possible from the letters of a
//! root word. Each accepted word scores 10 points plus one per letter past the third.
//!
//! # Quick Start
//!
//! ```rust
//! use word_scramble::core::{Decision, Rejection, RootWord};
//! use word_scramble::dictionary::{Language, WordListDictionary};
//! use word_scramble::game::GameState;
//!
//! let root = RootWord::new("silkworm").unwrap();
//! let mut game = GameState::with_root(root, WordListDictionary::embedded(), Language::english());
//!
//! assert_eq!(game.submit("silk"), Some(Decision::Accepted("silk".to_string())));
//! assert_eq!(game.submit("silkworm"), Some(Decision::Rejected(Rejection::EqualsRoot)));
//! assert_eq!(game.score(), 11);
//! ```

// Core domain types
pub mod core;

// Dictionary oracle
pub mod dictionary;

// Game sessions
pub mod game;

// Word lists
pub mod wordlists;

// Configuration
pub mod config;

// Command implementations
pub mod commands;

// Terminal output formatting
pub mod output;

// Interactive TUI interface
pub mod interactive;
