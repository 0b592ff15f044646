//! Batch check command
//!
//! Plays a list of words against a fixed root word and records every decision.

use crate::core::{Decision, RootWord, WordError};
use crate::dictionary::{DictionaryOracle, Language};
use crate::game::GameState;

/// Configuration for a batch check
pub struct CheckConfig {
    pub root: String,
    pub words: Vec<String>,
}

impl CheckConfig {
    #[must_use]
    pub const fn new(root: String, words: Vec<String>) -> Self {
        Self { root, words }
    }
}

/// Result of a batch check
pub struct CheckResult {
    pub root: RootWord,
    pub steps: Vec<CheckStep>,
    pub used_words: Vec<String>,
    pub score: usize,
}

impl CheckResult {
    /// Number of accepted submissions
    #[must_use]
    pub fn accepted_count(&self) -> usize {
        self.steps
            .iter()
            .filter(|step| step.decision.as_ref().is_some_and(Decision::is_accepted))
            .count()
    }
}

/// One submitted word and what happened to it
pub struct CheckStep {
    pub input: String,
    /// `None` for blank input
    pub decision: Option<Decision>,
    pub score_after: usize,
}

/// Submit every word in `config` against its root word
///
/// # Errors
///
/// Returns an error if the root word is blank or contains whitespace.
pub fn check_words<D: DictionaryOracle>(
    config: CheckConfig,
    dictionary: D,
    language: Language,
) -> Result<CheckResult, WordError> {
    let root = RootWord::new(&config.root)?;
    let mut game = GameState::with_root(root, dictionary, language);

    let steps = config
        .words
        .into_iter()
        .map(|input| {
            let decision = game.submit(&input);
            CheckStep {
                input,
                decision,
                score_after: game.score(),
            }
        })
        .collect();

    Ok(CheckResult {
        root: game.root_word().clone(),
        steps,
        used_words: game.used_words().to_vec(),
        score: game.score(),
    })
}
