//! Word list loading utilities
//!
//! Provides functions to load word lists from files or use embedded constants.

use crate::core::RootWord;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

/// Error type for word lists that cannot be used
#[derive(Debug, thiserror::Error)]
pub enum WordListError {
    #[error("Could not read word list {path}")]
    Unreadable {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("Word list {source_name} contains no usable words")]
    Empty { source_name: String },
}

/// Split newline-delimited text into normalized words
///
/// Each line is trimmed and lowercased; blank lines are skipped.
///
/// # Examples
/// ```
/// use word_scramble::wordlists::loader::parse_word_list;
///
/// let words = parse_word_list("Silkworm\r\n\nnotebook\n");
/// assert_eq!(words, vec!["silkworm", "notebook"]);
/// ```
#[must_use]
pub fn parse_word_list(content: &str) -> Vec<String> {
    content
        .lines()
        .filter_map(|line| {
            let trimmed = line.trim();
            if trimmed.is_empty() {
                None
            } else {
                Some(trimmed.to_lowercase())
            }
        })
        .collect()
}

/// Load words from a file
///
/// # Errors
///
/// Returns `WordListError::Unreadable` if the file cannot be read or opened.
///
/// # Examples
/// ```no_run
/// use word_scramble::wordlists::loader::load_from_file;
///
/// let words = load_from_file("data/start.txt").unwrap();
/// println!("Loaded {} words", words.len());
/// ```
pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Vec<String>, WordListError> {
    let path = path.as_ref();
    let content = fs::read_to_string(path).map_err(|source| WordListError::Unreadable {
        path: path.to_path_buf(),
        source,
    })?;

    Ok(parse_word_list(&content))
}

/// Convert a word list into validated root words
///
/// Invalid entries are skipped with a warning.
///
/// # Errors
///
/// Returns `WordListError::Empty` if no valid root word remains.
pub fn root_words_from<S: AsRef<str>>(
    words: &[S],
    source_name: &str,
) -> Result<Vec<RootWord>, WordListError> {
    let roots: Vec<RootWord> = words
        .iter()
        .filter_map(|word| match RootWord::new(word) {
            Ok(root) => Some(root),
            Err(e) => {
                tracing::warn!(source = source_name, word = word.as_ref(), "skipping root word: {e}");
                None
            }
        })
        .collect();

    if roots.is_empty() {
        return Err(WordListError::Empty {
            source_name: source_name.to_string(),
        });
    }

    Ok(roots)
}

/// Root words compiled into the binary
///
/// # Examples
/// ```
/// use word_scramble::wordlists::loader::embedded_root_words;
/// use word_scramble::wordlists::ROOT_WORDS;
///
/// let roots = embedded_root_words();
/// assert_eq!(roots.len(), ROOT_WORDS.len());
/// ```
#[must_use]
pub fn embedded_root_words() -> Vec<RootWord> {
    super::ROOT_WORDS
        .iter()
        .filter_map(|&s| RootWord::new(s).ok())
        .collect()
}
