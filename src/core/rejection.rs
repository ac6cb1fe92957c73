//! Reasons a candidate word is turned down
//!
//! Every rejection is recoverable: the player simply tries another word.

use thiserror::Error;

/// Why a submitted word was not accepted
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Rejection {
    /// The word is already in the list of used words
    #[error("Word used already: Be more original")]
    AlreadyUsed,
    /// The word cannot be spelled from the root word's letters
    #[error("Word not possible: You can't spell that word from '{root}'!")]
    NotComposable { root: String },
    /// The dictionary does not recognize the word
    #[error("Word not recognized: You can't just make them up, you know!")]
    NotARealWord,
    /// The word has fewer than three letters
    #[error("Word is not enough: Try at least 3 letters!")]
    TooShort,
}

impl Rejection {
    /// Short headline for an error popup
    #[must_use]
    pub const fn title(&self) -> &'static str {
        match self {
            Self::AlreadyUsed => "Word used already",
            Self::NotComposable { .. } => "Word not possible",
            Self::NotARealWord => "Word not recognized",
            Self::TooShort => "Word is not enough",
        }
    }

    /// Body text for an error popup
    #[must_use]
    pub fn message(&self) -> String {
        match self {
            Self::AlreadyUsed => "Be more original".to_string(),
            Self::NotComposable { root } => format!("You can't spell that word from '{root}'!"),
            Self::NotARealWord => "You can't just make them up, you know!".to_string(),
            Self::TooShort => "Try at least 3 letters!".to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_joins_title_and_message() {
        for rejection in [
            Rejection::AlreadyUsed,
            Rejection::NotComposable {
                root: "listen".to_string(),
            },
            Rejection::NotARealWord,
            Rejection::TooShort,
        ] {
            assert_eq!(
                rejection.to_string(),
                format!("{}: {}", rejection.title(), rejection.message())
            );
        }
    }

    #[test]
    fn not_composable_names_the_root() {
        let rejection = Rejection::NotComposable {
            root: "silkworm".to_string(),
        };
        assert!(rejection.message().contains("'silkworm'"));
    }

    #[test]
    fn too_short_wording() {
        assert_eq!(Rejection::TooShort.title(), "Word is not enough");
        assert_eq!(Rejection::TooShort.message(), "Try at least 3 letters!");
        assert_eq!(
            Rejection::TooShort.to_string(),
            "Word is not enough: Try at least 3 letters!"
        );
    }
}
