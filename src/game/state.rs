//! Game state and the word validation pipeline

use crate::core::{Decision, Rejection, RootWord, normalize_candidate, total_score};
use crate::dictionary::{DictionaryOracle, Language};
use rand::Rng;
use rand::prelude::IndexedRandom;

/// Minimum number of letters an accepted word must have
pub const MIN_WORD_LENGTH: usize = 3;

/// Error type for games that cannot start
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum GameError {
    #[error("No root words available to start a game")]
    NoRootWords,
}

/// A game in progress
///
/// Holds the root word, the words accepted so far (most recent first) and the
/// dictionary used to check candidates. A `GameState` only exists once a root
/// word has been chosen, so every method operates on an active game.
#[derive(Debug)]
pub struct GameState<D: DictionaryOracle> {
    dictionary: D,
    language: Language,
    root_words: Vec<RootWord>,
    root_word: RootWord,
    used_words: Vec<String>,
}

impl<D: DictionaryOracle> GameState<D> {
    /// Start a game with a root word picked at random from `root_words`
    ///
    /// # Errors
    ///
    /// Returns `GameError::NoRootWords` if `root_words` is empty.
    pub fn start<R: Rng + ?Sized>(
        root_words: Vec<RootWord>,
        dictionary: D,
        language: Language,
        rng: &mut R,
    ) -> Result<Self, GameError> {
        let root_word = root_words.choose(rng).cloned().ok_or(GameError::NoRootWords)?;

        tracing::info!(root = %root_word, choices = root_words.len(), "game started");

        Ok(Self {
            dictionary,
            language,
            root_words,
            root_word,
            used_words: Vec::new(),
        })
    }

    /// Start a game with a fixed root word
    ///
    /// # Examples
    /// ```
    /// use word_scramble::core::{Decision, RootWord};
    /// use word_scramble::dictionary::{Language, WordListDictionary};
    /// use word_scramble::game::GameState;
    ///
    /// let dict = WordListDictionary::new(Language::english(), ["silk", "silkworm"]);
    /// let root = RootWord::new("silkworm").unwrap();
    /// let mut game = GameState::with_root(root, dict, Language::english());
    ///
    /// assert_eq!(game.submit("Silk"), Some(Decision::Accepted("silk".to_string())));
    /// assert_eq!(game.score(), 11);
    /// ```
    pub fn with_root(root_word: RootWord, dictionary: D, language: Language) -> Self {
        Self {
            dictionary,
            language,
            root_words: vec![root_word.clone()],
            root_word,
            used_words: Vec::new(),
        }
    }

    /// Start a new game: pick another root word and clear the used words
    pub fn start_game<R: Rng + ?Sized>(&mut self, rng: &mut R) -> &RootWord {
        if let Some(root) = self.root_words.choose(rng) {
            self.root_word = root.clone();
        }
        self.used_words.clear();

        tracing::info!(root = %self.root_word, "new game");
        &self.root_word
    }

    /// Submit raw player input
    ///
    /// Returns `None` when the input is blank after normalization; otherwise
    /// exactly one decision. Accepted words are inserted at the front of the
    /// used words.
    pub fn submit(&mut self, raw: &str) -> Option<Decision> {
        let result = self.check(raw);
        if matches!(result, Err(Rejection::Empty)) {
            return None;
        }

        let decision = Decision::from(result);
        if let Decision::Accepted(word) = &decision {
            self.used_words.insert(0, word.clone());
        }

        tracing::debug!(root = %self.root_word, input = raw, ?decision, "submission");
        Some(decision)
    }

    /// Run the validation pipeline without changing the game
    ///
    /// Checks run in a fixed order and stop at the first failure:
    /// originality, spellability, realness, minimum length, not the root word.
    ///
    /// # Errors
    ///
    /// Returns the `Rejection` of the first failed check, or
    /// `Rejection::Empty` for blank input.
    pub fn check(&self, raw: &str) -> Result<String, Rejection> {
        let word = normalize_candidate(raw).ok_or(Rejection::Empty)?;

        if !self.is_original(&word) {
            return Err(Rejection::Duplicate);
        }

        if !self.is_possible(&word) {
            return Err(Rejection::NotSpellableFromRoot);
        }

        if !self.dictionary.is_real_word(&word, &self.language) {
            return Err(Rejection::NotARealWord);
        }

        if !is_long_enough(&word) {
            return Err(Rejection::TooShort);
        }

        if word == self.root_word.text() {
            return Err(Rejection::EqualsRoot);
        }

        Ok(word)
    }

    fn is_original(&self, word: &str) -> bool {
        !self.used_words.iter().any(|used| used == word)
    }

    fn is_possible(&self, word: &str) -> bool {
        self.root_word.letters().can_spell(word)
    }

    /// Current score, recomputed from the used words
    #[must_use]
    pub fn score(&self) -> usize {
        total_score(&self.used_words)
    }

    /// Accepted words, most recent first
    #[inline]
    #[must_use]
    pub fn used_words(&self) -> &[String] {
        &self.used_words
    }

    #[inline]
    #[must_use]
    pub const fn root_word(&self) -> &RootWord {
        &self.root_word
    }

    #[inline]
    #[must_use]
    pub const fn language(&self) -> &Language {
        &self.language
    }

    /// Root words new games are drawn from
    #[inline]
    #[must_use]
    pub fn root_words(&self) -> &[RootWord] {
        &self.root_words
    }
}

fn is_long_enough(word: &str) -> bool {
    word.chars().count() >= MIN_WORD_LENGTH
}
