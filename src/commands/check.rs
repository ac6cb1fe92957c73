//! One-shot word check
//!
//! Validates a single word against a root word without starting a session.

use crate::core::{GameState, Outcome, Rejection, WordValidator};
use crate::dictionary::Dictionary;

/// What to check
pub struct CheckConfig {
    pub root: String,
    pub word: String,
    pub used_words: Vec<String>,
}

/// Result of a one-shot check
pub struct CheckResult {
    pub root: String,
    pub word: String,
    pub outcome: Outcome,
    /// Entries of `used_words` the game would not have accepted, with the reason
    pub skipped_used: Vec<(String, Rejection)>,
    pub score_before: u32,
    pub score_after: u32,
}

/// Run the validation rules once
///
/// `used_words` count as already found, so repeating one is rejected. Each is
/// validated first; invalid or duplicate entries add nothing to the score.
pub fn check_word<D: Dictionary>(config: CheckConfig, validator: &WordValidator<D>) -> CheckResult {
    let (state, skipped_used) = GameState::resume(&config.root, &config.used_words, validator);
    for (word, rejection) in &skipped_used {
        tracing::warn!(word = %word, reason = rejection.title(), "ignoring used word");
    }
    let (next, outcome) = state.submit(&config.word, validator);

    CheckResult {
        root: state.root_word().to_string(),
        word: config.word.trim().to_lowercase(),
        outcome,
        skipped_used,
        score_before: state.score(),
        score_after: next.score(),
    }
}
