//! Simple interactive CLI mode
//!
//! Line-based play without the TUI

use crate::core::{Outcome, Session};
use crate::dictionary::Dictionary;
use crate::output::formatters::{letter_badge, points_label};
use anyhow::{Context, Result};
use colored::Colorize;
use rand::Rng;
use std::io::{BufRead, Write};

/// Run the simple interactive CLI mode on stdin/stdout
///
/// # Errors
///
/// Returns an error if reading input or writing output fails.
pub fn run_simple<D: Dictionary, R: Rng>(session: &mut Session<D, R>) -> Result<()> {
    let stdin = std::io::stdin();
    let stdout = std::io::stdout();
    play(session, stdin.lock(), stdout.lock())
}

/// Drive a session from any line source
///
/// Returns when the player quits or the input ends.
///
/// # Errors
///
/// Returns an error if reading input or writing output fails.
pub fn play<D, R, I, W>(session: &mut Session<D, R>, input: I, mut out: W) -> Result<()>
where
    D: Dictionary,
    R: Rng,
    I: BufRead,
    W: Write,
{
    writeln!(out, "\n╔══════════════════════════════════════════════════════════════╗")?;
    writeln!(out, "║                 Word Scramble - Simple Mode                  ║")?;
    writeln!(out, "╚══════════════════════════════════════════════════════════════╝\n")?;
    writeln!(out, "Make as many words as you can from the root word.")?;
    writeln!(out, "Each accepted word scores one point per letter.\n")?;
    writeln!(out, "Commands: ':restart' for a new word, ':words' to list your words, ':quit' to exit\n")?;

    print_board(session, &mut out)?;
    prompt(&mut out)?;

    for line in input.lines() {
        let line = line.context("failed to read input")?;

        match line.trim() {
            ":quit" | ":q" => {
                writeln!(out, "\n👋 Thanks for playing! Final score: {}\n", session.state().score())?;
                return Ok(());
            }
            ":restart" | ":r" => {
                session.restart();
                writeln!(out, "\n🔄 New game started!\n")?;
                print_board(session, &mut out)?;
            }
            ":words" | ":w" => print_words(session, &mut out)?,
            raw => match session.submit(raw) {
                Outcome::Ignored => {}
                Outcome::Accepted { word, points } => {
                    writeln!(
                        out,
                        "{} {} {}  Score: {}",
                        "✓".green().bold(),
                        word.bright_white().bold(),
                        points_label(points).green(),
                        session.state().score().to_string().bright_cyan().bold()
                    )?;
                }
                Outcome::Rejected(rejection) => {
                    writeln!(out, "{} {}", "✗".red().bold(), rejection.title().red().bold())?;
                    writeln!(out, "  {}", rejection.message())?;
                }
            },
        }

        prompt(&mut out)?;
    }

    writeln!(out)?;
    Ok(())
}

fn print_board<D: Dictionary, R: Rng, W: Write>(session: &Session<D, R>, out: &mut W) -> Result<()> {
    let state = session.state();
    writeln!(out, "{}", "─".repeat(60).cyan())?;
    writeln!(
        out,
        "Root word: {}    Score: {}",
        state.root_word().to_uppercase().bright_yellow().bold(),
        state.score()
    )?;
    writeln!(out, "{}", "─".repeat(60).cyan())?;
    Ok(())
}

fn print_words<D: Dictionary, R: Rng, W: Write>(session: &Session<D, R>, out: &mut W) -> Result<()> {
    let state = session.state();
    if state.used_words().is_empty() {
        writeln!(out, "No words yet.")?;
        return Ok(());
    }

    for word in state.used_words() {
        writeln!(out, "  {} {}", letter_badge(word), word)?;
    }
    writeln!(out, "  Score: {}", state.score())?;
    Ok(())
}

fn prompt<W: Write>(out: &mut W) -> Result<()> {
    write!(out, "> ")?;
    out.flush()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::WordValidator;
    use crate::dictionary::WordListDictionary;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    fn run(lines: &str) -> (String, Session<WordListDictionary, StdRng>) {
        let validator = WordValidator::new(WordListDictionary::builtin(), "en");
        let mut session = Session::start(
            vec!["listen".to_string()],
            validator,
            StdRng::seed_from_u64(3),
        )
        .unwrap();

        let mut out = Vec::new();
        play(&mut session, lines.as_bytes(), &mut out).unwrap();
        (String::from_utf8(out).unwrap(), session)
    }

    #[test]
    fn shows_root_word() {
        let (out, _) = run("");
        assert!(out.contains("LISTEN"));
    }

    #[test]
    fn accepted_words_update_score() {
        let (_, session) = run("silent\ntin\n");
        assert_eq!(session.state().score(), 9);
        assert_eq!(session.state().used_words(), ["tin", "silent"]);
    }

    #[test]
    fn rejections_print_title_and_message() {
        let (out, session) = run("elephant\n");
        assert!(out.contains("Word not possible"));
        assert!(out.contains("You can't spell that word from 'listen'!"));
        assert_eq!(session.state().score(), 0);
    }

    #[test]
    fn quit_stops_reading() {
        let (out, session) = run(":quit\nsilent\n");
        assert!(out.contains("Thanks for playing"));
        assert_eq!(session.state().score(), 0);
    }

    #[test]
    fn restart_clears_words() {
        let (_, session) = run("silent\n:restart\n");
        assert_eq!(session.state().score(), 0);
        assert!(session.state().used_words().is_empty());
    }

    #[test]
    fn words_lists_letter_counts() {
        let (out, _) = run("silent\n:words\n");
        assert!(out.contains(&letter_badge("silent")));
    }
}
