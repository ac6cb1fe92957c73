//! TUI application state and logic

use crate::core::{Outcome, Session};
use crate::dictionary::Dictionary;
use crate::output::formatters::points_label;
use anyhow::Result;
use crossterm::{
    event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use rand::Rng;
use ratatui::{Terminal, backend::CrosstermBackend};
use std::io;

/// Longest input the answer field accepts
const MAX_INPUT_LEN: usize = 32;

/// Application state
pub struct App<D, R> {
    pub session: Session<D, R>,
    pub input_buffer: String,
    pub alert: Option<Alert>,
    pub messages: Vec<Message>,
    pub should_quit: bool,
}

/// Modal error shown after a rejected word
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Alert {
    pub title: String,
    pub message: String,
}

#[derive(Debug, Clone)]
pub struct Message {
    pub text: String,
    pub style: MessageStyle,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MessageStyle {
    Info,
    Success,
    Error,
}

impl<D: Dictionary, R: Rng> App<D, R> {
    #[must_use]
    pub fn new(session: Session<D, R>) -> Self {
        Self {
            session,
            input_buffer: String::new(),
            alert: None,
            messages: vec![Message {
                text: "Make words from the letters of the root word.".to_string(),
                style: MessageStyle::Info,
            }],
            should_quit: false,
        }
    }

    /// Submit whatever is in the answer field
    pub fn submit_input(&mut self) {
        let input = std::mem::take(&mut self.input_buffer);

        match self.session.submit(&input) {
            Outcome::Ignored => {}
            Outcome::Accepted { word, points } => {
                self.add_message(
                    &format!("{} {}", word.to_uppercase(), points_label(points)),
                    MessageStyle::Success,
                );
            }
            Outcome::Rejected(rejection) => {
                self.add_message(rejection.title(), MessageStyle::Error);
                self.alert = Some(Alert {
                    title: rejection.title().to_string(),
                    message: rejection.message(),
                });
            }
        }
    }

    pub fn restart(&mut self) {
        self.session.restart();
        self.input_buffer.clear();
        self.alert = None;
        self.messages.clear();
        self.add_message(
            &format!(
                "New game! Root word: {}",
                self.session.state().root_word().to_uppercase()
            ),
            MessageStyle::Info,
        );
    }

    pub fn add_message(&mut self, text: &str, style: MessageStyle) {
        self.messages.push(Message {
            text: text.to_string(),
            style,
        });

        // Keep only last 5 messages
        if self.messages.len() > 5 {
            self.messages.remove(0);
        }
    }

    /// Apply one key press
    pub fn handle_key(&mut self, key: KeyEvent) {
        if key.kind != KeyEventKind::Press {
            return;
        }

        let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);

        if ctrl && key.code == KeyCode::Char('c') {
            self.should_quit = true;
            return;
        }

        if self.alert.is_some() {
            // The popup swallows everything until dismissed
            if matches!(key.code, KeyCode::Enter | KeyCode::Esc) {
                self.alert = None;
            }
            return;
        }

        match key.code {
            KeyCode::Char('r') if ctrl => self.restart(),
            KeyCode::Esc => self.should_quit = true,
            KeyCode::Enter => self.submit_input(),
            KeyCode::Backspace => {
                self.input_buffer.pop();
            }
            KeyCode::Char(c) if !ctrl && !c.is_control() => {
                if self.input_buffer.chars().count() < MAX_INPUT_LEN {
                    self.input_buffer.push(c);
                }
            }
            _ => {}
        }
    }
}

/// Run the TUI application
///
/// # Errors
///
/// Returns an error if terminal setup/cleanup fails or if there's an I/O error
/// during rendering or event handling.
pub fn run_tui<D: Dictionary, R: Rng>(app: App<D, R>) -> Result<()> {
    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Run app
    let res = run_app(&mut terminal, app);

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    res
}

fn run_app<B, D, R>(terminal: &mut Terminal<B>, mut app: App<D, R>) -> Result<()>
where
    B: ratatui::backend::Backend,
    D: Dictionary,
    R: Rng,
{
    loop {
        terminal.draw(|f| super::rendering::ui(f, &app))?;

        if let Event::Key(key) = event::read()? {
            app.handle_key(key);
        }

        if app.should_quit {
            tracing::info!(score = app.session.state().score(), "quit");
            break;
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::WordValidator;
    use crate::dictionary::WordListDictionary;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    fn app() -> App<WordListDictionary, StdRng> {
        let validator = WordValidator::new(WordListDictionary::builtin(), "en");
        let session = Session::start(
            vec!["listen".to_string()],
            validator,
            StdRng::seed_from_u64(5),
        )
        .unwrap();
        App::new(session)
    }

    fn press(app: &mut App<WordListDictionary, StdRng>, code: KeyCode) {
        app.handle_key(KeyEvent::new(code, KeyModifiers::NONE));
    }

    fn ctrl(app: &mut App<WordListDictionary, StdRng>, c: char) {
        app.handle_key(KeyEvent::new(KeyCode::Char(c), KeyModifiers::CONTROL));
    }

    fn type_word(app: &mut App<WordListDictionary, StdRng>, word: &str) {
        for c in word.chars() {
            press(app, KeyCode::Char(c));
        }
        press(app, KeyCode::Enter);
    }

    #[test]
    fn typing_and_enter_submits_word() {
        let mut app = app();
        type_word(&mut app, "silent");

        assert_eq!(app.session.state().score(), 6);
        assert!(app.input_buffer.is_empty());
        assert!(app.alert.is_none());
        assert_eq!(app.messages.last().unwrap().style, MessageStyle::Success);
    }

    #[test]
    fn rejection_opens_alert_until_dismissed() {
        let mut app = app();
        type_word(&mut app, "zzzz");

        let alert = app.alert.clone().unwrap();
        assert_eq!(alert.title, "Word not possible");
        assert_eq!(alert.message, "You can't spell that word from 'listen'!");

        // Typing is swallowed while the popup is open
        press(&mut app, KeyCode::Char('t'));
        assert!(app.input_buffer.is_empty());

        press(&mut app, KeyCode::Enter);
        assert!(app.alert.is_none());
        assert!(!app.should_quit);
    }

    #[test]
    fn empty_enter_is_ignored() {
        let mut app = app();
        let before = app.messages.len();
        press(&mut app, KeyCode::Enter);
        assert!(app.alert.is_none());
        assert_eq!(app.messages.len(), before);
    }

    #[test]
    fn backspace_edits_input() {
        let mut app = app();
        press(&mut app, KeyCode::Char('t'));
        press(&mut app, KeyCode::Char('x'));
        press(&mut app, KeyCode::Backspace);
        assert_eq!(app.input_buffer, "t");
    }

    #[test]
    fn ctrl_r_restarts() {
        let mut app = app();
        type_word(&mut app, "silent");
        ctrl(&mut app, 'r');

        assert_eq!(app.session.state().score(), 0);
        assert!(app.session.state().used_words().is_empty());
        assert!(app.input_buffer.is_empty());
    }

    #[test]
    fn esc_and_ctrl_c_quit() {
        let mut app = app();
        press(&mut app, KeyCode::Esc);
        assert!(app.should_quit);

        let mut app = self::app();
        type_word(&mut app, "it");
        assert!(app.alert.is_some());
        ctrl(&mut app, 'c');
        assert!(app.should_quit);
    }

    #[test]
    fn messages_are_capped() {
        let mut app = app();
        for i in 0..10 {
            app.add_message(&format!("m{i}"), MessageStyle::Info);
        }
        assert_eq!(app.messages.len(), 5);
        assert_eq!(app.messages[0].text, "m5");
    }
}
