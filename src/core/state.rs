//! Game state and the submission reducer

use super::candidate::Candidate;
use super::rejection::Rejection;
use super::validator::{Accepted, WordValidator};
use crate::dictionary::Dictionary;

/// What happened to a submission
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    /// Blank input; nothing to do
    Ignored,
    /// The word was added to the used list
    Accepted { word: String, points: u32 },
    /// The word broke a rule; state is unchanged
    Rejected(Rejection),
}

impl Outcome {
    #[must_use]
    pub const fn is_accepted(&self) -> bool {
        matches!(self, Self::Accepted { .. })
    }
}

/// One round of play: a root word, the words found so far and the score
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameState {
    root_word: String,
    used_words: Vec<String>,
    score: u32,
}

impl GameState {
    /// Fresh state for `root_word` with no words found
    #[must_use]
    pub fn new(root_word: &str) -> Self {
        Self {
            root_word: root_word.trim().to_lowercase(),
            used_words: Vec::new(),
            score: 0,
        }
    }

    /// Rebuild a state from previously found words, most recent first
    ///
    /// Each word is replayed through `validator`, oldest first, so the result
    /// holds only words the game would have accepted. Words that fail a rule are
    /// returned alongside the state with the reason; blank entries are dropped.
    ///
    /// # Examples
    /// ```
    /// use word_scramble::core::{GameState, Rejection, WordValidator};
    /// use word_scramble::dictionary::WordListDictionary;
    ///
    /// let validator = WordValidator::new(WordListDictionary::builtin(), "en");
    /// let (state, skipped) = GameState::resume("listen", ["tin", "tin"], &validator);
    ///
    /// assert_eq!(state.used_words(), ["tin"]);
    /// assert_eq!(state.score(), 3);
    /// assert_eq!(skipped, [("tin".to_string(), Rejection::AlreadyUsed)]);
    /// ```
    #[must_use]
    pub fn resume<D, I, S>(
        root_word: &str,
        used_words: I,
        validator: &WordValidator<D>,
    ) -> (Self, Vec<(String, Rejection)>)
    where
        D: Dictionary,
        I: IntoIterator<Item = S>,
        I::IntoIter: DoubleEndedIterator,
        S: AsRef<str>,
    {
        let mut state = Self::new(root_word);
        let mut skipped = Vec::new();

        for word in used_words.into_iter().rev() {
            let (next, outcome) = state.submit(word.as_ref(), validator);
            if let Outcome::Rejected(rejection) = outcome {
                skipped.push((word.as_ref().trim().to_lowercase(), rejection));
            }
            state = next;
        }

        // Report in the order the words were given
        skipped.reverse();
        (state, skipped)
    }

    #[must_use]
    pub fn root_word(&self) -> &str {
        &self.root_word
    }

    /// Accepted words, most recent first
    #[must_use]
    pub fn used_words(&self) -> &[String] {
        &self.used_words
    }

    #[must_use]
    pub const fn score(&self) -> u32 {
        self.score
    }

    /// Apply one submission, returning the next state and what happened
    ///
    /// Only an accepted word produces a different state.
    ///
    /// # Examples
    /// ```
    /// use word_scramble::core::{GameState, Outcome, WordValidator};
    /// use word_scramble::dictionary::WordListDictionary;
    ///
    /// let validator = WordValidator::new(WordListDictionary::builtin(), "en");
    /// let state = GameState::new("listen");
    ///
    /// let (state, outcome) = state.submit("Silent ", &validator);
    /// assert!(outcome.is_accepted());
    /// assert_eq!(state.score(), 6);
    /// assert_eq!(state.used_words(), ["silent"]);
    /// ```
    #[must_use]
    pub fn submit<D: Dictionary>(&self, raw: &str, validator: &WordValidator<D>) -> (Self, Outcome) {
        let Some(candidate) = Candidate::parse(raw) else {
            return (self.clone(), Outcome::Ignored);
        };

        match validator.validate(&candidate, &self.root_word, &self.used_words) {
            Ok(accepted) => {
                let outcome = Outcome::Accepted {
                    word: accepted.word.clone(),
                    points: accepted.points,
                };
                (self.accept(accepted), outcome)
            }
            Err(rejection) => (self.clone(), Outcome::Rejected(rejection)),
        }
    }

    fn accept(&self, accepted: Accepted) -> Self {
        let mut used_words = Vec::with_capacity(self.used_words.len() + 1);
        used_words.push(accepted.word);
        used_words.extend(self.used_words.iter().cloned());

        Self {
            root_word: self.root_word.clone(),
            used_words,
            score: self.score.saturating_add(accepted.points),
        }
    }
}
