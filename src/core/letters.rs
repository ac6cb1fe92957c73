//! Letter multiset arithmetic
//!
//! A candidate is composable from a root word when every one of its letters can be
//! matched to a distinct letter occurrence in the root (multiset subset).

use rustc_hash::FxHashMap;

/// Remaining letters of a root word, counted per (lowercased) character
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct LetterPool {
    counts: FxHashMap<char, usize>,
}

impl LetterPool {
    /// Build a pool from every character of `word`, case-insensitively
    ///
    /// # Examples
    /// ```
    /// use word_scramble::core::LetterPool;
    ///
    /// let pool = LetterPool::new("Listen");
    /// assert_eq!(pool.count('l'), 1);
    /// assert_eq!(pool.len(), 6);
    /// ```
    #[must_use]
    pub fn new(word: &str) -> Self {
        let mut counts: FxHashMap<char, usize> = FxHashMap::default();
        for ch in word.chars().flat_map(char::to_lowercase) {
            *counts.entry(ch).or_insert(0) += 1;
        }
        Self { counts }
    }

    /// Number of occurrences of `letter` still available
    #[inline]
    #[must_use]
    pub fn count(&self, letter: char) -> usize {
        self.counts.get(&letter).copied().unwrap_or(0)
    }

    /// Total number of letters in the pool
    #[must_use]
    pub fn len(&self) -> usize {
        self.counts.values().sum()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.counts.values().all(|&n| n == 0)
    }

    /// Remove one occurrence of `letter`, returning `false` if none is left
    pub fn take(&mut self, letter: char) -> bool {
        match self.counts.get_mut(&letter) {
            Some(n) if *n > 0 => {
                *n -= 1;
                true
            }
            _ => false,
        }
    }

    /// Check whether `word` can be spelled from this pool without reusing letters
    ///
    /// The pool itself is left untouched.
    #[must_use]
    pub fn can_spell(&self, word: &str) -> bool {
        let mut remaining = self.clone();
        word.chars()
            .flat_map(char::to_lowercase)
            .all(|ch| remaining.take(ch))
    }
}

/// Check whether `candidate` is composable from the letters of `root`
///
/// # Examples
/// ```
/// use word_scramble::core::is_composable;
///
/// assert!(is_composable("silent", "listen"));
/// assert!(!is_composable("elephant", "listen"));
/// ```
#[must_use]
pub fn is_composable(candidate: &str, root: &str) -> bool {
    LetterPool::new(root).can_spell(candidate)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn anagram_is_composable() {
        assert!(is_composable("silent", "listen"));
        assert!(is_composable("enlist", "listen"));
        assert!(is_composable("listen", "listen"));
    }

    #[test]
    fn subset_is_composable() {
        assert!(is_composable("lens", "listen"));
        assert!(is_composable("it", "listen"));
        assert!(is_composable("", "listen"));
    }

    #[test]
    fn letter_reuse_is_rejected() {
        // Only one 'e' and one 'l' in LISTEN
        assert!(!is_composable("lisle", "listen"));
        assert!(!is_composable("teen", "listen"));
    }

    #[test]
    fn missing_letter_is_rejected() {
        assert!(!is_composable("elephant", "listen"));
        assert!(!is_composable("zzzz", "listen"));
    }

    #[test]
    fn comparison_ignores_case() {
        assert!(is_composable("SILENT", "listen"));
        assert!(is_composable("silent", "LISTEN"));
    }

    #[test]
    fn repeated_letters_in_root_can_each_be_used_once() {
        // SILKWORM has a single 'o'
        assert!(!is_composable("moor", "silkworm"));
        assert!(is_composable("worm", "silkworm"));
        assert!(is_composable("moon", "moonbeam"));
        assert!(!is_composable("mooon", "moonbeam"));
    }

    #[test]
    fn take_consumes_one_occurrence() {
        let mut pool = LetterPool::new("moon");
        assert_eq!(pool.count('o'), 2);
        assert!(pool.take('o'));
        assert!(pool.take('o'));
        assert!(!pool.take('o'));
        assert_eq!(pool.len(), 2);
        assert!(!pool.is_empty());
    }

    #[test]
    fn can_spell_does_not_mutate_pool() {
        let pool = LetterPool::new("listen");
        assert!(pool.can_spell("silent"));
        assert!(pool.can_spell("silent"));
        assert_eq!(pool.len(), 6);
    }
}
