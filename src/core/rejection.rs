//! Submission decisions and rejection reasons

use super::RootWord;
use std::fmt;

/// Why a candidate word was not accepted
///
/// Variants are listed in the order the checks run, after the blank check.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Rejection {
    /// Nothing left after normalization
    Empty,
    /// Already accepted this game
    Duplicate,
    /// Uses a letter the root word cannot supply
    NotSpellableFromRoot,
    /// Not recognized by the dictionary
    NotARealWord,
    /// Fewer than three letters
    TooShort,
    /// Identical to the root word
    EqualsRoot,
}

impl Rejection {
    /// Short alert title shown to the player
    #[must_use]
    pub const fn title(self) -> &'static str {
        match self {
            Self::Empty => "No word entered",
            Self::Duplicate => "Word used already",
            Self::NotSpellableFromRoot => "Word not possible",
            Self::NotARealWord => "Word not recognized",
            Self::TooShort => "Word is too short",
            Self::EqualsRoot => "Word is same as given word",
        }
    }

    /// Explanatory message shown under the title
    #[must_use]
    pub fn message(self, root: &RootWord) -> String {
        match self {
            Self::Empty => "Type a word before submitting".to_string(),
            Self::Duplicate => "Be more original!".to_string(),
            Self::NotSpellableFromRoot => format!("You can't spell that word from '{root}'!"),
            Self::NotARealWord => "You can't just make them up, you know!".to_string(),
            Self::TooShort => "You can't make words shorter than three letters".to_string(),
            Self::EqualsRoot => "Try to make a word with its letters".to_string(),
        }
    }
}

impl fmt::Display for Rejection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.title())
    }
}

/// Outcome of a non-blank submission
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Decision {
    /// The normalized word was added to the used words
    Accepted(String),
    /// The word was refused; game state is unchanged
    Rejected(Rejection),
}

impl Decision {
    #[inline]
    #[must_use]
    pub const fn is_accepted(&self) -> bool {
        matches!(self, Self::Accepted(_))
    }

    /// The rejection reason, if any
    #[inline]
    #[must_use]
    pub const fn rejection(&self) -> Option<Rejection> {
        match self {
            Self::Accepted(_) => None,
            Self::Rejected(reason) => Some(*reason),
        }
    }
}

impl From<Result<String, Rejection>> for Decision {
    fn from(result: Result<String, Rejection>) -> Self {
        match result {
            Ok(word) => Self::Accepted(word),
            Err(reason) => Self::Rejected(reason),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn not_spellable_message_names_root() {
        let root = RootWord::new("silkworm").unwrap();
        let message = Rejection::NotSpellableFromRoot.message(&root);
        assert_eq!(message, "You can't spell that word from 'silkworm'!");
    }

    #[test]
    fn titles_are_distinct() {
        let all = [
            Rejection::Empty,
            Rejection::Duplicate,
            Rejection::NotSpellableFromRoot,
            Rejection::NotARealWord,
            Rejection::TooShort,
            Rejection::EqualsRoot,
        ];
        let titles: std::collections::HashSet<_> = all.iter().map(|r| r.title()).collect();
        assert_eq!(titles.len(), all.len());
    }

    #[test]
    fn display_uses_title() {
        assert_eq!(Rejection::Duplicate.to_string(), "Word used already");
    }

    #[test]
    fn decision_from_result() {
        let accepted = Decision::from(Ok::<_, Rejection>("silk".to_string()));
        assert!(accepted.is_accepted());
        assert_eq!(accepted.rejection(), None);

        let rejected = Decision::from(Err::<String, _>(Rejection::TooShort));
        assert!(!rejected.is_accepted());
        assert_eq!(rejected.rejection(), Some(Rejection::TooShort));
    }
}
