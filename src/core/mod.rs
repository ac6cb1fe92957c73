//! Core game rules for Word Scramble
//!
//! Everything here is pure apart from the random root selection in [`Session`]:
//! no terminal, no files. A submission flows through [`Candidate::parse`], then
//! [`WordValidator::validate`], and finally [`GameState::submit`] folds the result
//! into a new state.

mod candidate;
mod letters;
mod rejection;
mod session;
mod state;
mod validator;

pub use candidate::Candidate;
pub use letters::{LetterPool, is_composable};
pub use rejection::Rejection;
pub use session::Session;
pub use state::{GameState, Outcome};
pub use validator::{Accepted, MIN_WORD_LEN, WordValidator};
