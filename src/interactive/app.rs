//! TUI application state and logic

use crate::core::{Decision, Rejection};
use crate::dictionary::DictionaryOracle;
use crate::game::GameState;
use anyhow::Result;
use crossterm::{
    event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::CrosstermBackend};
use std::io;

/// Most messages kept in the message pane
pub const MAX_MESSAGES: usize = 5;

/// Application state
pub struct App<D: DictionaryOracle> {
    pub game: GameState<D>,
    pub input_buffer: String,
    pub alert: Option<Alert>,
    pub messages: Vec<Message>,
    pub stats: Statistics,
    pub should_quit: bool,
}

/// Rejection shown to the player until dismissed
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

#[derive(Debug, Clone)]
pub enum MessageStyle {
    Info,
    Success,
    Error,
}

/// Session statistics, kept in memory only
#[derive(Debug, Default, Clone)]
pub struct Statistics {
    pub games_started: usize,
    pub best_score: usize,
}

impl<D: DictionaryOracle> App<D> {
    #[must_use]
    pub fn new(game: GameState<D>) -> Self {
        Self {
            game,
            input_buffer: String::new(),
            alert: None,
            messages: vec![
                Message {
                    text: "Welcome! Make words from the letters of the root word.".to_string(),
                    style: MessageStyle::Info,
                },
                Message {
                    text: "Type a word and press Enter. Ctrl-N starts a new game.".to_string(),
                    style: MessageStyle::Info,
                },
            ],
            stats: Statistics {
                games_started: 1,
                best_score: 0,
            },
            should_quit: false,
        }
    }

    /// Submit the input buffer as a candidate word
    ///
    /// Accepted words clear the buffer; rejections raise an alert and leave
    /// the buffer for correction. Blank input does nothing.
    pub fn submit_input(&mut self) {
        let input = self.input_buffer.clone();

        match self.game.submit(&input) {
            None => {}
            Some(Decision::Accepted(word)) => {
                self.stats.best_score = self.stats.best_score.max(self.game.score());
                self.add_message(
                    &format!("{word} +{}", crate::core::word_score(&word)),
                    MessageStyle::Success,
                );
                self.input_buffer.clear();
            }
            Some(Decision::Rejected(rejection)) => self.raise_alert(rejection),
        }
    }

    fn raise_alert(&mut self, rejection: Rejection) {
        let alert = Alert {
            title: rejection.title().to_string(),
            message: rejection.message(self.game.root_word()),
        };
        self.add_message(&alert.title, MessageStyle::Error);
        self.alert = Some(alert);
    }

    pub fn dismiss_alert(&mut self) {
        self.alert = None;
    }

    pub fn new_game(&mut self) {
        self.game.start_game(&mut rand::rng());
        self.input_buffer.clear();
        self.alert = None;
        self.messages.clear();
        self.stats.games_started += 1;
        self.add_message(
            &format!(
                "New game started! Root word: {}",
                self.game.root_word().text().to_uppercase()
            ),
            MessageStyle::Info,
        );
    }

    pub fn add_message(&mut self, text: &str, style: MessageStyle) {
        self.messages.push(Message {
            text: text.to_string(),
            style,
        });

        if self.messages.len() > MAX_MESSAGES {
            self.messages.remove(0);
        }
    }

    /// Apply one key press
    pub fn handle_key(&mut self, key: KeyEvent) {
        // Any key acknowledges an open alert
        if self.alert.is_some() {
            self.dismiss_alert();
            return;
        }

        match key.code {
            KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                self.should_quit = true;
            }
            KeyCode::Char('n') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                self.new_game();
            }
            KeyCode::Esc => {
                self.should_quit = true;
            }
            KeyCode::Char(c)
                if !key
                    .modifiers
                    .intersects(KeyModifiers::CONTROL | KeyModifiers::ALT) =>
            {
                self.input_buffer.push(c);
            }
            KeyCode::Backspace => {
                self.input_buffer.pop();
            }
            KeyCode::Enter => {
                self.submit_input();
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
pub fn run_tui<D: DictionaryOracle>(app: App<D>) -> Result<()> {
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

fn run_app<B: ratatui::backend::Backend, D: DictionaryOracle>(
    terminal: &mut Terminal<B>,
    mut app: App<D>,
) -> Result<()> {
    loop {
        terminal.draw(|f| super::rendering::ui(f, &app))?;

        if let Event::Key(key) = event::read()? {
            // Only process key press events (fixes Windows double-input bug)
            if key.kind != KeyEventKind::Press {
                continue;
            }

            app.handle_key(key);
        }

        if app.should_quit {
            tracing::info!(
                games = app.stats.games_started,
                best_score = app.stats.best_score,
                "session ended"
            );
            break;
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::RootWord;
    use crate::dictionary::{Language, WordListDictionary};

    fn app() -> App<WordListDictionary> {
        let game = GameState::with_root(
            RootWord::new("silkworm").unwrap(),
            WordListDictionary::embedded(),
            Language::english(),
        );
        App::new(game)
    }

    fn type_word(app: &mut App<WordListDictionary>, word: &str) {
        for c in word.chars() {
            app.handle_key(KeyEvent::new(KeyCode::Char(c), KeyModifiers::NONE));
        }
        app.handle_key(KeyEvent::new(KeyCode::Enter, KeyModifiers::NONE));
    }

    #[test]
    fn accepted_word_clears_input() {
        let mut app = app();
        type_word(&mut app, "silk");

        assert_eq!(app.game.used_words(), ["silk"]);
        assert!(app.input_buffer.is_empty());
        assert!(app.alert.is_none());
        assert_eq!(app.stats.best_score, 11);
    }

    #[test]
    fn rejection_raises_alert_and_keeps_input() {
        let mut app = app();
        type_word(&mut app, "zebra");

        assert_eq!(
            app.alert,
            Some(Alert {
                title: "Word not possible".to_string(),
                message: "You can't spell that word from 'silkworm'!".to_string(),
            })
        );
        assert_eq!(app.input_buffer, "zebra");
    }

    #[test]
    fn any_key_dismisses_alert() {
        let mut app = app();
        type_word(&mut app, "or");
        assert!(app.alert.is_some());

        app.handle_key(KeyEvent::new(KeyCode::Char('x'), KeyModifiers::NONE));
        assert!(app.alert.is_none());
        // the dismissing key is not typed
        assert_eq!(app.input_buffer, "or");
    }

    #[test]
    fn blank_enter_does_nothing() {
        let mut app = app();
        type_word(&mut app, "   ");

        assert!(app.alert.is_none());
        assert!(app.game.used_words().is_empty());
    }

    #[test]
    fn ctrl_n_starts_new_game() {
        let mut app = app();
        type_word(&mut app, "silk");
        app.input_buffer.push_str("wor");

        app.handle_key(KeyEvent::new(KeyCode::Char('n'), KeyModifiers::CONTROL));

        assert!(app.game.used_words().is_empty());
        assert!(app.input_buffer.is_empty());
        assert_eq!(app.stats.games_started, 2);
        assert_eq!(app.stats.best_score, 11);
    }

    #[test]
    fn escape_quits() {
        let mut app = app();
        app.handle_key(KeyEvent::new(KeyCode::Esc, KeyModifiers::NONE));
        assert!(app.should_quit);
    }

    #[test]
    fn messages_are_capped() {
        let mut app = app();
        for word in ["silk", "worm", "milk", "owl", "slow", "works"] {
            type_word(&mut app, word);
        }
        assert_eq!(app.messages.len(), MAX_MESSAGES);
        assert_eq!(app.game.used_words().len(), 6);
    }

    #[test]
    fn modified_chars_are_not_typed() {
        let mut app = app();
        app.handle_key(KeyEvent::new(KeyCode::Char('a'), KeyModifiers::CONTROL));
        app.handle_key(KeyEvent::new(KeyCode::Char('b'), KeyModifiers::ALT));
        assert!(app.input_buffer.is_empty());

        app.handle_key(KeyEvent::new(KeyCode::Char('S'), KeyModifiers::SHIFT));
        assert_eq!(app.input_buffer, "S");
    }
}
