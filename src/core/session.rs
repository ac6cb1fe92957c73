//! An interactive play session
//!
//! Owns the current [`GameState`] together with everything needed to advance it:
//! the validator, the pool of root words and the random source used on restart.

use super::state::{GameState, Outcome};
use super::validator::WordValidator;
use crate::dictionary::Dictionary;
use crate::wordlists::{WordListError, pick_root_word};
use rand::Rng;

pub struct Session<D, R> {
    state: GameState,
    validator: WordValidator<D>,
    root_words: Vec<String>,
    rng: R,
}

impl<D: Dictionary, R: Rng> Session<D, R> {
    /// Start a session on a randomly chosen root word
    ///
    /// # Errors
    ///
    /// Returns [`WordListError::Empty`] if `root_words` is empty.
    ///
    /// # Examples
    /// ```
    /// use rand::SeedableRng;
    /// use rand::rngs::StdRng;
    /// use word_scramble::core::{Session, WordValidator};
    /// use word_scramble::dictionary::WordListDictionary;
    ///
    /// let validator = WordValidator::new(WordListDictionary::builtin(), "en");
    /// let roots = vec!["listen".to_string()];
    /// let mut session = Session::start(roots, validator, StdRng::seed_from_u64(1)).unwrap();
    ///
    /// session.submit("silent");
    /// assert_eq!(session.state().score(), 6);
    /// ```
    pub fn start(
        root_words: Vec<String>,
        validator: WordValidator<D>,
        mut rng: R,
    ) -> Result<Self, WordListError> {
        let root = pick_root_word(&root_words, &mut rng)
            .ok_or_else(|| WordListError::Empty {
                origin: "root word candidates".to_string(),
            })?
            .to_string();

        tracing::info!(root = %root, "new game");

        Ok(Self {
            state: GameState::new(&root),
            validator,
            root_words,
            rng,
        })
    }

    #[must_use]
    pub const fn state(&self) -> &GameState {
        &self.state
    }

    #[must_use]
    pub const fn validator(&self) -> &WordValidator<D> {
        &self.validator
    }

    /// Submit raw player input
    pub fn submit(&mut self, raw: &str) -> Outcome {
        let (next, outcome) = self.state.submit(raw, &self.validator);

        match &outcome {
            Outcome::Accepted { word, points } => {
                tracing::info!(word = %word, points, score = next.score(), "word accepted");
            }
            Outcome::Rejected(rejection) => {
                tracing::debug!(input = raw.trim(), reason = rejection.title(), "word rejected");
            }
            Outcome::Ignored => {}
        }

        self.state = next;
        outcome
    }

    /// Replace the game with a fresh one on a new random root word
    pub fn restart(&mut self) {
        // root_words is never empty once start() succeeded
        if let Some(root) = pick_root_word(&self.root_words, &mut self.rng) {
            tracing::info!(root = %root, previous_score = self.state.score(), "restart");
            self.state = GameState::new(root);
        }
    }
}
