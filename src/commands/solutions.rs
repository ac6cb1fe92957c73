//! Solutions analysis
//!
//! Lists every dictionary word that would be accepted for a root word on an
//! empty board, along with the best possible score.

use crate::core::{Candidate, GameState, WordValidator};
use crate::dictionary::{Dictionary, WordListDictionary};
use indicatif::{ProgressBar, ProgressStyle};
use rayon::prelude::*;
use std::time::{Duration, Instant};

/// Dictionaries smaller than this are scanned without a progress bar
const PROGRESS_THRESHOLD: usize = 10_000;

/// Result of a solutions scan
pub struct SolutionsResult {
    pub root: String,
    /// Longest first, then alphabetical
    pub words: Vec<String>,
    pub max_score: u32,
    pub scanned: usize,
    pub duration: Duration,
}

/// Find all words acceptable for `root`
///
/// Candidates are drawn from `dictionary`; acceptance is decided by `validator`,
/// so the language and length rules match real play.
pub fn find_solutions<D: Dictionary + Sync>(
    root: &str,
    dictionary: &WordListDictionary,
    validator: &WordValidator<D>,
    show_progress: bool,
) -> SolutionsResult {
    let start = Instant::now();
    let state = GameState::new(root);
    let pool: Vec<&str> = dictionary.words().collect();

    let pb = if wants_progress(pool.len(), show_progress) {
        let pb = ProgressBar::new(pool.len() as u64);
        pb.set_style(
            ProgressStyle::default_bar()
                .template("{spinner:.green} [{bar:40.cyan/blue}] {pos}/{len} ({percent}%)")
                .unwrap_or_else(|_| ProgressStyle::default_bar())
                .progress_chars("█▓▒░"),
        );
        pb
    } else {
        ProgressBar::hidden()
    };

    let mut words: Vec<String> = pool
        .par_iter()
        .filter_map(|&word| {
            pb.inc(1);
            let candidate = Candidate::parse(word)?;
            validator
                .validate(&candidate, state.root_word(), state.used_words())
                .ok()
                .map(|accepted| accepted.word)
        })
        .collect();

    pb.finish_and_clear();

    words.sort_unstable_by(|a, b| {
        b.chars()
            .count()
            .cmp(&a.chars().count())
            .then_with(|| a.cmp(b))
    });

    let max_score = words
        .iter()
        .map(|w| u32::try_from(w.chars().count()).unwrap_or(u32::MAX))
        .sum();

    tracing::debug!(
        root = state.root_word(),
        found = words.len(),
        max_score,
        "solutions scan complete"
    );

    SolutionsResult {
        root: state.root_word().to_string(),
        words,
        max_score,
        scanned: pool.len(),
        duration: start.elapsed(),
    }
}

const fn wants_progress(pool_len: usize, show_progress: bool) -> bool {
    show_progress && pool_len >= PROGRESS_THRESHOLD
}

#[cfg(test)]
mod tests {
    use super::*;

    fn scan(root: &str, words: &[&str]) -> SolutionsResult {
        let dictionary = WordListDictionary::from_words("en", words);
        let validator = WordValidator::new(&dictionary, "en");
        find_solutions(root, &dictionary, &validator, false)
    }

    #[test]
    fn finds_composable_real_words() {
        let result = scan(
            "listen",
            &["silent", "tin", "lens", "it", "elephant", "teen", "enlist"],
        );
        assert_eq!(result.words, ["enlist", "silent", "lens", "tin"]);
        assert_eq!(result.max_score, 6 + 6 + 4 + 3);
        assert_eq!(result.scanned, 7);
    }

    #[test]
    fn root_is_normalized() {
        let result = scan("  LISTEN ", &["silent"]);
        assert_eq!(result.root, "listen");
        assert_eq!(result.words, ["silent"]);
    }

    #[test]
    fn nothing_found_scores_zero() {
        let result = scan("zzz", &["silent", "tin"]);
        assert!(result.words.is_empty());
        assert_eq!(result.max_score, 0);
    }

    #[test]
    fn builtin_dictionary_covers_listen_anagrams() {
        let dictionary = WordListDictionary::builtin();
        let validator = WordValidator::new(&dictionary, "en");
        let result = find_solutions("listen", &dictionary, &validator, false);

        for word in ["listen", "silent", "enlist", "tinsel", "inlets"] {
            assert!(result.words.iter().any(|w| w == word), "missing {word}");
        }
        assert!(result.words.iter().all(|w| w.len() >= 3));
    }

    #[test]
    fn builtin_dictionary_scan_shows_progress() {
        assert!(wants_progress(WordListDictionary::builtin().len(), true));
        assert!(!wants_progress(WordListDictionary::builtin().len(), false));
        assert!(!wants_progress(7, true));
    }
}
