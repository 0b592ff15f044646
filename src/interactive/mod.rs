//! Interactive TUI interface

mod app;
mod rendering;

pub use app::{Alert, App, MAX_MESSAGES, Message, MessageStyle, Statistics, run_tui};
