//! Root words, candidate normalization and letter pools
//!
//! A `RootWord` is the word a game is played against. Candidates are raw player
//! input that is normalized before validation, and a `LetterPool` answers whether
//! a candidate can be spelled from the root word's letters.

use rustc_hash::FxHashMap;
use std::fmt;

/// The word whose letters are available for building candidate words
///
/// Always non-empty, trimmed and lowercase.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RootWord {
    text: String,
    letters: LetterPool,
}

/// Error type for invalid root words
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum WordError {
    #[error("Root word must not be empty")]
    Empty,
    #[error("Root word must be a single word, got '{0}'")]
    ContainsWhitespace(String),
}

impl RootWord {
    /// Create a new root word from a string
    ///
    /// The text is trimmed and lowercased first.
    ///
    /// # Errors
    /// Returns `WordError` if:
    /// - The trimmed text is empty
    /// - The text contains inner whitespace
    ///
    /// # Examples
    /// ```
    /// use word_scramble::core::RootWord;
    ///
    /// let root = RootWord::new(" Silkworm\n").unwrap();
    /// assert_eq!(root.text(), "silkworm");
    ///
    /// assert!(RootWord::new("   ").is_err());
    /// assert!(RootWord::new("silk worm").is_err());
    /// ```
    pub fn new(text: impl AsRef<str>) -> Result<Self, WordError> {
        let text = text.as_ref().trim().to_lowercase();

        if text.is_empty() {
            return Err(WordError::Empty);
        }

        if text.chars().any(char::is_whitespace) {
            return Err(WordError::ContainsWhitespace(text));
        }

        let letters = LetterPool::from_word(&text);
        Ok(Self { text, letters })
    }

    /// Get the root word as a string slice
    #[inline]
    #[must_use]
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Letters available for spelling candidates
    #[inline]
    #[must_use]
    pub const fn letters(&self) -> &LetterPool {
        &self.letters
    }

    /// Number of letters in the root word
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.letters.len()
    }

    /// Always false; root words are validated non-empty
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.letters.is_empty()
    }
}

impl fmt::Display for RootWord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.text)
    }
}

/// Normalize raw player input into a candidate word
///
/// Lowercases and trims leading/trailing whitespace (including newlines).
/// Returns `None` when nothing is left.
///
/// # Examples
/// ```
/// use word_scramble::core::normalize_candidate;
///
/// assert_eq!(normalize_candidate("  Silk\n"), Some("silk".to_string()));
/// assert_eq!(normalize_candidate(" \t\n"), None);
/// ```
#[must_use]
pub fn normalize_candidate(raw: &str) -> Option<String> {
    let normalized = raw.to_lowercase();
    let trimmed = normalized.trim();

    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_string())
    }
}

/// Multiset of the letters in a word
///
/// Used to check that a candidate takes each letter from a distinct
/// occurrence in the root word.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct LetterPool {
    counts: FxHashMap<char, u32>,
    len: usize,
}

impl LetterPool {
    /// Build the pool of letters in `word`
    #[must_use]
    pub fn from_word(word: &str) -> Self {
        let mut counts: FxHashMap<char, u32> = FxHashMap::default();
        let mut len = 0;
        for ch in word.chars() {
            *counts.entry(ch).or_insert(0) += 1;
            len += 1;
        }
        Self { counts, len }
    }

    /// How many times `letter` occurs in the pool
    #[inline]
    #[must_use]
    pub fn count_of(&self, letter: char) -> u32 {
        self.counts.get(&letter).copied().unwrap_or(0)
    }

    /// Total number of letters, counting repeats
    #[inline]
    #[must_use]
    pub const fn len(&self) -> usize {
        self.len
    }

    #[inline]
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Check whether `word` can be spelled from this pool
    ///
    /// Each letter of `word` consumes one matching occurrence from a working
    /// copy of the pool; a letter with no occurrence left fails the check.
    ///
    /// # Examples
    /// ```
    /// use word_scramble::core::LetterPool;
    ///
    /// let pool = LetterPool::from_word("cat");
    /// assert!(pool.can_spell("act"));
    /// assert!(!pool.can_spell("catt")); // only one 't'
    /// ```
    #[must_use]
    pub fn can_spell(&self, word: &str) -> bool {
        if word.chars().count() > self.len {
            return false;
        }

        let mut available = self.counts.clone();
        for letter in word.chars() {
            match available.get_mut(&letter) {
                Some(count) if *count > 0 => *count -= 1,
                _ => return false,
            }
        }

        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn root_word_normalized() {
        let root = RootWord::new("SILKWORM").unwrap();
        assert_eq!(root.text(), "silkworm");

        let root = RootWord::new("\tMarigold \n").unwrap();
        assert_eq!(root.text(), "marigold");
        assert_eq!(root.len(), 8);
    }

    #[test]
    fn root_word_invalid() {
        assert_eq!(RootWord::new(""), Err(WordError::Empty));
        assert_eq!(RootWord::new(" \n "), Err(WordError::Empty));
        assert!(matches!(
            RootWord::new("silk worm"),
            Err(WordError::ContainsWhitespace(_))
        ));
    }

    #[test]
    fn root_word_display() {
        let root = RootWord::new("notebook").unwrap();
        assert_eq!(format!("{root}"), "notebook");
    }

    #[test]
    fn normalize_trims_and_lowercases() {
        assert_eq!(normalize_candidate("Silk"), Some("silk".to_string()));
        assert_eq!(normalize_candidate("  WORM  "), Some("worm".to_string()));
        assert_eq!(normalize_candidate("milk\r\n"), Some("milk".to_string()));
    }

    #[test]
    fn normalize_blank_is_none() {
        assert_eq!(normalize_candidate(""), None);
        assert_eq!(normalize_candidate("   "), None);
        assert_eq!(normalize_candidate("\n\t "), None);
    }

    #[test]
    fn normalize_keeps_inner_whitespace() {
        assert_eq!(normalize_candidate(" si lk "), Some("si lk".to_string()));
    }

    #[test]
    fn letter_pool_counts() {
        let pool = LetterPool::from_word("treasure");
        assert_eq!(pool.count_of('e'), 2);
        assert_eq!(pool.count_of('r'), 2);
        assert_eq!(pool.count_of('t'), 1);
        assert_eq!(pool.count_of('z'), 0);
        assert_eq!(pool.len(), 8);
    }

    #[test]
    fn can_spell_subsets() {
        let pool = LetterPool::from_word("silkworm");
        assert!(pool.can_spell("silk"));
        assert!(pool.can_spell("worm"));
        assert!(pool.can_spell("milk"));
        assert!(pool.can_spell("silkworm"));
        assert!(pool.can_spell(""));
    }

    #[test]
    fn can_spell_respects_multiplicity() {
        let pool = LetterPool::from_word("cat");
        assert!(!pool.can_spell("catt"));

        let pool = LetterPool::from_word("elephant");
        assert!(pool.can_spell("peel")); // two e's available
        assert!(!pool.can_spell("epee")); // three e's needed
    }

    #[test]
    fn can_spell_rejects_foreign_letters() {
        let pool = LetterPool::from_word("silkworm");
        assert!(!pool.can_spell("silky"));
        assert!(!pool.can_spell("Silk")); // case-sensitive, callers normalize first
    }

    #[test]
    fn can_spell_does_not_consume_pool() {
        let pool = LetterPool::from_word("cat");
        assert!(pool.can_spell("cat"));
        assert!(pool.can_spell("cat"));
        assert_eq!(pool.count_of('t'), 1);
    }
}
