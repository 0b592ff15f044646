//! Word-list backed dictionary

use super::{DictionaryOracle, Language};
use crate::wordlists::DICTIONARY;
use crate::wordlists::loader::{WordListError, load_from_file};
use rustc_hash::FxHashSet;
use std::path::Path;

/// Dictionary oracle backed by a fixed set of words in one language
///
/// Lookups in any other language report the word as not real.
#[derive(Debug, Clone)]
pub struct WordListDictionary {
    language: Language,
    words: FxHashSet<String>,
}

impl WordListDictionary {
    /// Build a dictionary from any collection of words
    ///
    /// Words are trimmed and lowercased; blank entries are ignored.
    ///
    /// # Examples
    /// ```
    /// use word_scramble::dictionary::{DictionaryOracle, Language, WordListDictionary};
    ///
    /// let dict = WordListDictionary::new(Language::english(), ["Silk", "worm"]);
    /// assert!(dict.is_real_word("silk", &Language::english()));
    /// assert!(!dict.is_real_word("slik", &Language::english()));
    /// ```
    pub fn new<I, S>(language: Language, words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let words = words
            .into_iter()
            .map(|w| w.as_ref().trim().to_lowercase())
            .filter(|w| !w.is_empty())
            .collect();

        Self { language, words }
    }

    /// The English dictionary compiled into the binary
    #[must_use]
    pub fn embedded() -> Self {
        Self::new(Language::english(), DICTIONARY)
    }

    /// Load a newline-delimited dictionary file for `language`
    ///
    /// # Errors
    ///
    /// Returns `WordListError::Unreadable` if the file cannot be read and
    /// `WordListError::Empty` if it holds no words.
    pub fn from_file<P: AsRef<Path>>(language: Language, path: P) -> Result<Self, WordListError> {
        let words = load_from_file(path.as_ref())?;
        if words.is_empty() {
            return Err(WordListError::Empty {
                source_name: path.as_ref().display().to_string(),
            });
        }
        Ok(Self::new(language, words))
    }

    #[inline]
    #[must_use]
    pub const fn language(&self) -> &Language {
        &self.language
    }

    /// Number of distinct words known
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.words.len()
    }

    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }
}

impl DictionaryOracle for WordListDictionary {
    fn is_real_word(&self, word: &str, language: &Language) -> bool {
        *language == self.language && self.words.contains(word)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn lookup_in_own_language() {
        let dict = WordListDictionary::new(Language::english(), ["silk", "worm", "milk"]);
        let en = Language::english();

        assert!(dict.is_real_word("silk", &en));
        assert!(dict.is_real_word("milk", &en));
        assert!(!dict.is_real_word("slik", &en));
        assert_eq!(dict.len(), 3);
    }

    #[test]
    fn other_language_never_matches() {
        let dict = WordListDictionary::new(Language::english(), ["silk"]);
        assert!(!dict.is_real_word("silk", &Language::new("fr")));
    }

    #[test]
    fn entries_are_normalized() {
        let dict = WordListDictionary::new(Language::english(), ["  Silk ", "", "WORM\r"]);
        let en = Language::english();

        assert!(dict.is_real_word("silk", &en));
        assert!(dict.is_real_word("worm", &en));
        assert_eq!(dict.len(), 2);
    }

    #[test]
    fn embedded_knows_root_words() {
        use crate::wordlists::ROOT_WORDS;

        let dict = WordListDictionary::embedded();
        let en = Language::english();
        for &root in ROOT_WORDS {
            assert!(dict.is_real_word(root, &en), "Root word '{root}' not in dictionary");
        }
    }

    #[test]
    fn embedded_knows_common_words() {
        use crate::core::RootWord;

        let dict = WordListDictionary::embedded();
        let en = Language::english();
        let pairs = [
            ("treasure", "art"),
            ("absolute", "able"),
            ("dinosaur", "sound"),
            ("silkworm", "worm"),
            ("hospital", "spot"),
            ("keyboard", "bread"),
            ("blackout", "lock"),
        ];

        for (root, word) in pairs {
            let root = RootWord::new(root).unwrap();
            assert!(root.letters().can_spell(word), "'{word}' not spellable from '{root}'");
            assert!(dict.is_real_word(word, &en), "Common word '{word}' not in dictionary");
        }
    }

    #[test]
    fn from_file_reads_words() {
        let path = std::env::temp_dir().join(format!(
            "word_scramble_dict_{}.txt",
            std::process::id()
        ));
        let mut file = std::fs::File::create(&path).unwrap();
        writeln!(file, "bonjour\nchat\n\n").unwrap();
        drop(file);

        let fr = Language::new("fr");
        let dict = WordListDictionary::from_file(fr.clone(), &path).unwrap();
        std::fs::remove_file(&path).unwrap();

        assert!(dict.is_real_word("chat", &fr));
        assert_eq!(dict.len(), 2);
        assert_eq!(dict.language(), &fr);
    }

    #[test]
    fn from_missing_file_fails() {
        let result = WordListDictionary::from_file(
            Language::english(),
            "/definitely/not/a/real/dictionary.txt",
        );
        assert!(matches!(result, Err(WordListError::Unreadable { .. })));
    }
}
