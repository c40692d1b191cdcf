//! Word lists and word sources
//!
//! The embedded list is compiled into the binary; a custom list can be loaded
//! from a file. Either way the game receives a [`WordList`]: the ordered pool
//! the daily word is picked from, plus a membership index for validating
//! guesses.

mod embedded;
pub mod loader;

pub use embedded::{WORDS, WORDS_COUNT};

use crate::core::Word;
use rustc_hash::FxHashSet;
use std::path::PathBuf;
use thiserror::Error;
use tracing::debug;

/// Errors raised while fetching a word list
#[derive(Debug, Error)]
pub enum WordListError {
    #[error("Failed to read word list {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("Word list contains no valid five-letter words")]
    Empty,
}

/// Immutable pool of valid words
#[derive(Debug, Clone, Default)]
pub struct WordList {
    words: Vec<Word>,
    index: FxHashSet<String>,
}

impl WordList {
    /// Build a list, dropping repeated words (first occurrence wins)
    #[must_use]
    pub fn new(words: Vec<Word>) -> Self {
        let mut index = FxHashSet::default();
        let words: Vec<Word> = words
            .into_iter()
            .filter(|word| index.insert(word.text().to_string()))
            .collect();

        Self { words, index }
    }

    /// Check whether `word` is an accepted guess
    #[must_use]
    pub fn contains(&self, word: &str) -> bool {
        self.index.contains(word)
    }

    #[must_use]
    pub fn get(&self, position: usize) -> Option<&Word> {
        self.words.get(position)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.words.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Word> {
        self.words.iter()
    }
}

impl FromIterator<Word> for WordList {
    fn from_iter<T: IntoIterator<Item = Word>>(iter: T) -> Self {
        Self::new(iter.into_iter().collect())
    }
}

/// Supplier of the valid-word list
///
/// Fetched once per run. An empty result is reported as
/// [`WordListError::Empty`]; the game stays waiting in that case.
pub trait WordSource {
    /// Produce the word list
    ///
    /// # Errors
    ///
    /// Returns an error if the words cannot be read or none are valid.
    fn fetch(&self) -> Result<WordList, WordListError>;

    /// Short description for logs
    fn describe(&self) -> String;
}

/// Word list compiled into the binary
#[derive(Debug, Clone, Copy, Default)]
pub struct EmbeddedWords;

impl WordSource for EmbeddedWords {
    fn fetch(&self) -> Result<WordList, WordListError> {
        non_empty(WordList::new(loader::words_from_slice(WORDS)))
    }

    fn describe(&self) -> String {
        format!("embedded ({WORDS_COUNT} words)")
    }
}

/// Word list read from a file, one word per line
#[derive(Debug, Clone)]
pub struct FileWords {
    path: PathBuf,
}

impl FileWords {
    #[must_use]
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

impl WordSource for FileWords {
    fn fetch(&self) -> Result<WordList, WordListError> {
        let words = loader::load_from_file(&self.path).map_err(|source| WordListError::Io {
            path: self.path.clone(),
            source,
        })?;
        debug!(path = %self.path.display(), count = words.len(), "loaded word list");
        non_empty(WordList::new(words))
    }

    fn describe(&self) -> String {
        self.path.display().to_string()
    }
}

fn non_empty(list: WordList) -> Result<WordList, WordListError> {
    if list.is_empty() {
        Err(WordListError::Empty)
    } else {
        Ok(list)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn words_count_matches_const() {
        assert_eq!(WORDS.len(), WORDS_COUNT);
    }

    #[test]
    fn embedded_words_are_valid() {
        for &word in WORDS {
            assert_eq!(word.len(), 5, "Word '{word}' is not 5 letters");
            assert!(
                word.chars().all(|c| c.is_ascii_lowercase()),
                "Word '{word}' contains non-lowercase chars"
            );
        }
    }

    #[test]
    fn embedded_source_has_no_duplicates() {
        let list = EmbeddedWords.fetch().unwrap();
        assert_eq!(list.len(), WORDS_COUNT);
        assert!(list.contains("crane"));
        assert!(list.contains("genie"));
    }

    #[test]
    fn word_list_dedups_keeping_order() {
        let list = WordList::new(loader::words_from_slice(&["crane", "slate", "crane"]));
        assert_eq!(list.len(), 2);
        assert_eq!(list.get(0).map(Word::text), Some("crane"));
        assert_eq!(list.get(1).map(Word::text), Some("slate"));
        assert!(!list.contains("irate"));
    }

    #[test]
    fn file_source_reports_empty_list() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "# nothing usable\nabc").unwrap();

        let result = FileWords::new(file.path()).fetch();
        assert!(matches!(result, Err(WordListError::Empty)));
    }

    #[test]
    fn file_source_reports_missing_file() {
        let result = FileWords::new("/no/such/list.txt").fetch();
        assert!(matches!(result, Err(WordListError::Io { .. })));
    }
}
