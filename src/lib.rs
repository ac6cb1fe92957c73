//! Word Scramble
//!
//! A word game: given a root word, find as many real words as possible using its
//! letters, each letter at most once. Every accepted word scores its letter count.
//!
//! # Quick Start
//!
//! ```rust
//! use word_scramble::core::{GameState, Outcome, Rejection, WordValidator};
//! use word_scramble::dictionary::WordListDictionary;
//!
//! let validator = WordValidator::new(WordListDictionary::builtin(), "en");
//! let state = GameState::new("listen");
//!
//! let (state, outcome) = state.submit("silent", &validator);
//! assert!(outcome.is_accepted());
//! assert_eq!(state.score(), 6);
//!
//! let (_, outcome) = state.submit("it", &validator);
//! assert_eq!(outcome, Outcome::Rejected(Rejection::TooShort));
//! ```

// Core game rules
pub mod core;

// Real-word recognition
pub mod dictionary;

// Word lists
pub mod wordlists;

// Command implementations
pub mod commands;

// Terminal output formatting
pub mod output;

// Interactive TUI interface
pub mod interactive;

// Tracing subscriber setup
pub mod logging;
