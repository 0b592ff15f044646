//! Dictionary oracle trait
//!
//! The game never decides on its own whether a word is real. It asks an oracle
//! supplied by the host: an embedded word list, a file, a spell-check service.

use std::fmt;

/// Language tag a dictionary lookup is made in, e.g. `"en"`
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Language(String);

impl Language {
    /// Create a language tag; stored lowercase and trimmed
    #[must_use]
    pub fn new(tag: impl AsRef<str>) -> Self {
        Self(tag.as_ref().trim().to_lowercase())
    }

    /// English, the language of the embedded dictionary
    #[must_use]
    pub fn english() -> Self {
        Self::new("en")
    }

    #[inline]
    #[must_use]
    pub fn tag(&self) -> &str {
        &self.0
    }
}

impl Default for Language {
    fn default() -> Self {
        Self::english()
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl std::str::FromStr for Language {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.trim().is_empty() {
            return Err("Language tag must not be empty".to_string());
        }
        Ok(Self::new(s))
    }
}

/// Answers whether a word is correctly spelled in a language
pub trait DictionaryOracle {
    /// Returns true if `word` is a real word in `language`
    ///
    /// `word` is already normalized (lowercase, trimmed).
    fn is_real_word(&self, word: &str, language: &Language) -> bool;
}

impl<T: DictionaryOracle + ?Sized> DictionaryOracle for &T {
    fn is_real_word(&self, word: &str, language: &Language) -> bool {
        (**self).is_real_word(word, language)
    }
}

impl<T: DictionaryOracle + ?Sized> DictionaryOracle for Box<T> {
    fn is_real_word(&self, word: &str, language: &Language) -> bool {
        (**self).is_real_word(word, language)
    }
}
