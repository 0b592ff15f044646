//! Game configuration
//!
//! Chooses where root words and dictionary words come from and which language
//! dictionary lookups are made in.

use crate::core::RootWord;
use crate::dictionary::{Language, WordListDictionary};
use crate::wordlists::loader::{
    WordListError, embedded_root_words, load_from_file, root_words_from,
};
use std::path::PathBuf;

/// Where a word list is read from
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum WordSource {
    /// Compiled into the binary
    #[default]
    Embedded,
    /// Newline-delimited file on disk
    File(PathBuf),
}

impl WordSource {
    /// `Embedded` for `None`, otherwise the given file
    #[must_use]
    pub fn from_path(path: Option<PathBuf>) -> Self {
        path.map_or(Self::Embedded, Self::File)
    }

    fn name(&self) -> String {
        match self {
            Self::Embedded => "embedded list".to_string(),
            Self::File(path) => path.display().to_string(),
        }
    }
}

/// Settings needed to start a game
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct GameConfig {
    pub language: Language,
    pub root_words: WordSource,
    pub dictionary: WordSource,
}

impl GameConfig {
    /// Resolve the root-word source
    ///
    /// # Errors
    ///
    /// Returns `WordListError` if the file cannot be read or holds no usable
    /// root words.
    pub fn load_root_words(&self) -> Result<Vec<RootWord>, WordListError> {
        match &self.root_words {
            WordSource::Embedded => {
                let roots = embedded_root_words();
                if roots.is_empty() {
                    return Err(WordListError::Empty {
                        source_name: self.root_words.name(),
                    });
                }
                Ok(roots)
            }
            WordSource::File(path) => {
                let words = load_from_file(path)?;
                root_words_from(&words, &self.root_words.name())
            }
        }
    }

    /// Resolve the dictionary source
    ///
    /// The embedded dictionary is English; pairing it with another language
    /// yields a dictionary that recognizes nothing, so a warning is logged.
    ///
    /// # Errors
    ///
    /// Returns `WordListError` if the dictionary file cannot be read or is empty.
    pub fn load_dictionary(&self) -> Result<WordListDictionary, WordListError> {
        match &self.dictionary {
            WordSource::Embedded => {
                let dictionary = WordListDictionary::embedded();
                if dictionary.language() != &self.language {
                    tracing::warn!(
                        language = %self.language,
                        "embedded dictionary is English only; no word will be recognized"
                    );
                }
                Ok(dictionary)
            }
            WordSource::File(path) => WordListDictionary::from_file(self.language.clone(), path),
        }
    }
}
