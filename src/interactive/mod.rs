//! Interactive TUI interface

mod app;
mod rendering;

pub use app::{Alert, App, Message, MessageStyle, run_tui};
