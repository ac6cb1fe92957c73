//! Word lists for Word Scramble
//!
//! Root words and the bundled dictionary are embedded into the binary; either can
//! be swapped for a file at runtime.

mod embedded;
pub mod loader;

pub use embedded::{DICTIONARY, DICTIONARY_COUNT, START_WORDS, START_WORDS_COUNT};

use rand::Rng;
use rand::seq::IndexedRandom;
use std::fmt;
use std::io;
use std::path::PathBuf;
use std::str::FromStr;
use thiserror::Error;

/// Failure to obtain a usable word list
///
/// Without root words a game cannot start, so callers treat this as fatal.
#[derive(Debug, Error)]
pub enum WordListError {
    #[error("could not read word list {}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("word list {origin} contains no words")]
    Empty { origin: String },
}

/// Where a word list comes from
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum WordListSource {
    /// The list compiled into the binary
    #[default]
    Builtin,
    /// A newline-delimited file on disk
    File(PathBuf),
}

impl WordListSource {
    /// Load root word candidates from this source
    ///
    /// # Errors
    ///
    /// Returns [`WordListError`] if the list cannot be read or is empty.
    pub fn load_root_word_candidates(&self) -> Result<Vec<String>, WordListError> {
        let words = match self {
            Self::Builtin => loader::words_from_slice(START_WORDS),
            Self::File(path) => loader::load_from_file(path)?,
        };

        if words.is_empty() {
            return Err(WordListError::Empty {
                origin: self.to_string(),
            });
        }

        tracing::info!(source = %self, words = words.len(), "loaded root words");
        Ok(words)
    }
}

impl fmt::Display for WordListSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Builtin => write!(f, "builtin"),
            Self::File(path) => write!(f, "{}", path.display()),
        }
    }
}

impl FromStr for WordListSource {
    type Err = std::convert::Infallible;

    /// `builtin` selects the embedded list; anything else is a file path
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(match s {
            "builtin" => Self::Builtin,
            path => Self::File(PathBuf::from(path)),
        })
    }
}

/// Pick a root word uniformly at random
///
/// Returns `None` only when `candidates` is empty.
pub fn pick_root_word<'a, R: Rng + ?Sized>(candidates: &'a [String], rng: &mut R) -> Option<&'a str> {
    candidates.choose(rng).map(String::as_str)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    #[test]
    fn start_words_count_matches_const() {
        assert_eq!(START_WORDS.len(), START_WORDS_COUNT);
    }

    #[test]
    fn dictionary_count_matches_const() {
        assert_eq!(DICTIONARY.len(), DICTIONARY_COUNT);
    }

    #[test]
    fn start_words_are_lowercase_letters() {
        for &word in START_WORDS {
            assert!(
                word.chars().all(|c| c.is_ascii_lowercase()),
                "Word '{word}' contains non-lowercase chars"
            );
        }
    }

    #[test]
    fn start_words_are_in_dictionary() {
        let dictionary: std::collections::HashSet<_> = DICTIONARY.iter().collect();

        for word in START_WORDS {
            assert!(
                dictionary.contains(word),
                "Root word '{word}' not in dictionary"
            );
        }
    }

    #[test]
    fn builtin_source_loads_start_words() {
        let words = WordListSource::Builtin.load_root_word_candidates().unwrap();
        assert_eq!(words.len(), START_WORDS_COUNT);
    }

    #[test]
    fn missing_file_source_fails() {
        let source = WordListSource::File(PathBuf::from("/missing/start.txt"));
        assert!(matches!(
            source.load_root_word_candidates(),
            Err(WordListError::Io { .. })
        ));
    }

    #[test]
    fn source_from_str() {
        assert_eq!("builtin".parse::<WordListSource>(), Ok(WordListSource::Builtin));
        assert_eq!(
            "words.txt".parse::<WordListSource>(),
            Ok(WordListSource::File(PathBuf::from("words.txt")))
        );
    }

    #[test]
    fn pick_root_word_from_empty_is_none() {
        let mut rng = StdRng::seed_from_u64(7);
        assert!(pick_root_word(&[], &mut rng).is_none());
    }

    #[test]
    fn pick_root_word_is_deterministic_for_a_seed() {
        let words = loader::words_from_slice(START_WORDS);
        let first = pick_root_word(&words, &mut StdRng::seed_from_u64(42)).map(str::to_owned);
        let second = pick_root_word(&words, &mut StdRng::seed_from_u64(42)).map(str::to_owned);
        assert!(first.is_some());
        assert_eq!(first, second);
        assert!(words.contains(&first.unwrap()));
    }
}
