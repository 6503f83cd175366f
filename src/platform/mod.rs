//! Platform abstraction layer
//!
//! Handles the terminal side of the game:
//! - Piped-versus-interactive stdin detection
//! - Key event to command mapping
//! - Raw-mode screen output (see `terminal`)

pub mod terminal;

pub use terminal::{TerminalEvents, TerminalScreen};

use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use crossterm::tty::IsTty;

use crate::sim::Command;

/// True when stdin is a terminal, i.e. nothing was piped in
pub fn is_interactive() -> bool {
    std::io::stdin().is_tty()
}

/// Translate a key press into a game command. Unknown keys map to `None`.
pub fn map_key(key: KeyEvent) -> Option<Command> {
    if key.kind != KeyEventKind::Press {
        return None;
    }

    if key.modifiers.contains(KeyModifiers::ALT) {
        return None;
    }
    if key.modifiers.contains(KeyModifiers::CONTROL) {
        return match key.code {
            KeyCode::Char('c') | KeyCode::Char('C') => Some(Command::Quit),
            _ => None,
        };
    }

    match key.code {
        KeyCode::Left => Some(Command::MoveLeft),
        KeyCode::Right => Some(Command::MoveRight),
        KeyCode::Char(c) => match c.to_ascii_lowercase() {
            'h' | 'a' => Some(Command::MoveLeft),
            'l' | 'd' => Some(Command::MoveRight),
            ' ' => Some(Command::Fire),
            'p' => Some(Command::TogglePierce),
            'q' => Some(Command::Quit),
            _ => None,
        },
        _ => None,
    }
}
