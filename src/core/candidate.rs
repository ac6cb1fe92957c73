//! Player submissions

use std::fmt;

/// A normalized player submission: trimmed, lowercased and never empty
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Candidate {
    text: String,
}

impl Candidate {
    /// Normalize raw input into a candidate
    ///
    /// Returns `None` for input that is empty after trimming; such submissions
    /// are ignored rather than rejected.
    ///
    /// # Examples
    /// ```
    /// use word_scramble::core::Candidate;
    ///
    /// let candidate = Candidate::parse("  Silent\n").unwrap();
    /// assert_eq!(candidate.text(), "silent");
    ///
    /// assert!(Candidate::parse("   ").is_none());
    /// ```
    #[must_use]
    pub fn parse(raw: &str) -> Option<Self> {
        let text = raw.trim().to_lowercase();
        if text.is_empty() {
            None
        } else {
            Some(Self { text })
        }
    }

    #[inline]
    #[must_use]
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Number of characters, which is also the score the word is worth
    #[inline]
    #[must_use]
    pub fn letter_count(&self) -> usize {
        self.text.chars().count()
    }

    #[must_use]
    pub fn into_string(self) -> String {
        self.text
    }
}

impl fmt::Display for Candidate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_trims_and_lowercases() {
        let candidate = Candidate::parse("\t LiStEn ").unwrap();
        assert_eq!(candidate.text(), "listen");
        assert_eq!(candidate.to_string(), "listen");
    }

    #[test]
    fn parse_empty_is_none() {
        assert!(Candidate::parse("").is_none());
        assert!(Candidate::parse(" \n\t").is_none());
    }

    #[test]
    fn letter_count_counts_chars_not_bytes() {
        assert_eq!(Candidate::parse("silent").unwrap().letter_count(), 6);
        assert_eq!(Candidate::parse("café").unwrap().letter_count(), 4);
    }

    #[test]
    fn into_string_returns_normalized_text() {
        assert_eq!(Candidate::parse(" Tin ").unwrap().into_string(), "tin");
    }
}
