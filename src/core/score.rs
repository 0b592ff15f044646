//! Score calculation
//!
//! Every accepted word is worth a flat 10 points plus one bonus point for each
//! letter beyond the third.

/// Flat points for any accepted word
pub const POINTS_PER_WORD: usize = 10;

/// Words up to this length earn no length bonus
pub const BONUS_FREE_LENGTH: usize = 3;

/// Points contributed by a single accepted word
///
/// # Examples
/// ```
/// use word_scramble::core::word_score;
///
/// assert_eq!(word_score("cat"), 10);
/// assert_eq!(word_score("silk"), 11);
/// assert_eq!(word_score("silkworm"), 15);
/// ```
#[inline]
#[must_use]
pub fn word_score(word: &str) -> usize {
    POINTS_PER_WORD + word.chars().count().saturating_sub(BONUS_FREE_LENGTH)
}

/// Total score for a set of accepted words
#[must_use]
pub fn total_score<S: AsRef<str>>(words: &[S]) -> usize {
    words.iter().map(|w| word_score(w.as_ref())).sum()
}
