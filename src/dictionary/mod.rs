//! Dictionary oracle
//!
//! Decides whether a string is a real word in a given language. The game only
//! talks to the [`Dictionary`] trait, so a bundled list, a word file or any other
//! lookup can stand behind it.

use crate::wordlists::{DICTIONARY, WordListError, loader};
use rustc_hash::FxHashSet;
use std::path::Path;

/// Language tag of the bundled dictionary
pub const DEFAULT_LANGUAGE: &str = "en";

/// Recognizes real words
pub trait Dictionary {
    /// Whether `word` is a recognized word in `language`
    fn is_real_word(&self, word: &str, language: &str) -> bool;
}

impl<D: Dictionary + ?Sized> Dictionary for &D {
    fn is_real_word(&self, word: &str, language: &str) -> bool {
        (**self).is_real_word(word, language)
    }
}

impl<D: Dictionary + ?Sized> Dictionary for Box<D> {
    fn is_real_word(&self, word: &str, language: &str) -> bool {
        (**self).is_real_word(word, language)
    }
}

/// A dictionary backed by an in-memory word list for a single language
#[derive(Debug, Clone)]
pub struct WordListDictionary {
    language: String,
    words: FxHashSet<String>,
}

impl WordListDictionary {
    /// Build a dictionary from any list of words
    ///
    /// Words are trimmed and lowercased; blank entries are dropped.
    pub fn from_words<I, S>(language: impl Into<String>, words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let words = words
            .into_iter()
            .filter_map(|w| loader::normalize_entry(w.as_ref()))
            .collect();

        Self {
            language: language.into(),
            words,
        }
    }

    /// The English dictionary compiled into the binary
    ///
    /// # Examples
    /// ```
    /// use word_scramble::dictionary::{Dictionary, WordListDictionary};
    ///
    /// let dict = WordListDictionary::builtin();
    /// assert!(dict.is_real_word("silent", "en"));
    /// assert!(!dict.is_real_word("zzzz", "en"));
    /// ```
    #[must_use]
    pub fn builtin() -> Self {
        Self::from_words(DEFAULT_LANGUAGE, DICTIONARY)
    }

    /// Load a newline-delimited word file
    ///
    /// # Errors
    ///
    /// Returns [`WordListError`] if the file cannot be read or holds no words.
    pub fn load<P: AsRef<Path>>(path: P, language: impl Into<String>) -> Result<Self, WordListError> {
        let words = loader::load_from_file(path)?;
        let dict = Self::from_words(language, words);
        tracing::info!(
            language = %dict.language,
            words = dict.len(),
            "loaded dictionary"
        );
        Ok(dict)
    }

    #[must_use]
    pub fn language(&self) -> &str {
        &self.language
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.words.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    /// Iterate over every known word, in no particular order
    pub fn words(&self) -> impl Iterator<Item = &str> {
        self.words.iter().map(String::as_str)
    }
}

impl Dictionary for WordListDictionary {
    fn is_real_word(&self, word: &str, language: &str) -> bool {
        language_matches(&self.language, language) && self.words.contains(&word.to_lowercase())
    }
}

/// Compare the primary subtags of two language tags (`en` matches `en-GB`)
fn language_matches(ours: &str, requested: &str) -> bool {
    fn primary(tag: &str) -> &str {
        tag.split(['-', '_']).next().unwrap_or(tag)
    }
    primary(ours).eq_ignore_ascii_case(primary(requested))
}
