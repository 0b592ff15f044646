//! Dictionary lookups
//!
//! The `DictionaryOracle` trait is the seam between the game and whatever
//! decides whether a word is real. `WordListDictionary` is the implementation
//! shipped with the binary.

mod oracle;
mod word_list;

pub use oracle::{DictionaryOracle, Language};
pub use word_list::WordListDictionary;
