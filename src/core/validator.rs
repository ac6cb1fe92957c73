//! Word validation rules
//!
//! Checks run in a fixed order and the first failure wins:
//! originality, composability, dictionary recognition, minimum length.

use super::candidate::Candidate;
use super::letters::is_composable;
use super::rejection::Rejection;
use crate::dictionary::Dictionary;

/// Shortest word that can score
pub const MIN_WORD_LEN: usize = 3;

/// A candidate that passed every rule
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Accepted {
    pub word: String,
    pub points: u32,
}

/// Decides whether a candidate is acceptable for a root word
#[derive(Debug, Clone)]
pub struct WordValidator<D> {
    dictionary: D,
    language: String,
}

impl<D: Dictionary> WordValidator<D> {
    /// Create a validator that consults `dictionary` in `language`
    pub fn new(dictionary: D, language: impl Into<String>) -> Self {
        Self {
            dictionary,
            language: language.into(),
        }
    }

    #[must_use]
    pub fn language(&self) -> &str {
        &self.language
    }

    #[must_use]
    pub const fn dictionary(&self) -> &D {
        &self.dictionary
    }

    /// Validate `candidate` against `root` given the words already accepted
    ///
    /// # Errors
    ///
    /// Returns the first [`Rejection`] that applies.
    ///
    /// # Examples
    /// ```
    /// use word_scramble::core::{Candidate, Rejection, WordValidator};
    /// use word_scramble::dictionary::WordListDictionary;
    ///
    /// let validator = WordValidator::new(WordListDictionary::builtin(), "en");
    /// let silent = Candidate::parse("silent").unwrap();
    ///
    /// let accepted = validator.validate(&silent, "listen", &[]).unwrap();
    /// assert_eq!(accepted.points, 6);
    ///
    /// let used = vec!["silent".to_string()];
    /// assert_eq!(validator.validate(&silent, "listen", &used), Err(Rejection::AlreadyUsed));
    /// ```
    pub fn validate(
        &self,
        candidate: &Candidate,
        root: &str,
        used_words: &[String],
    ) -> Result<Accepted, Rejection> {
        let word = candidate.text();

        if !is_original(word, used_words) {
            return Err(Rejection::AlreadyUsed);
        }

        if !is_composable(word, root) {
            return Err(Rejection::NotComposable {
                root: root.to_string(),
            });
        }

        if !self.dictionary.is_real_word(word, &self.language) {
            return Err(Rejection::NotARealWord);
        }

        let letters = candidate.letter_count();
        if letters < MIN_WORD_LEN {
            return Err(Rejection::TooShort);
        }

        Ok(Accepted {
            word: word.to_string(),
            points: u32::try_from(letters).unwrap_or(u32::MAX),
        })
    }
}

fn is_original(word: &str, used_words: &[String]) -> bool {
    !used_words.iter().any(|used| used.to_lowercase() == word)
}
