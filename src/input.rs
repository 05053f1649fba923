//! Key mapping from terminal events to session commands.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use crate::geometry::Direction::*;
use crate::session::Command;

pub fn command_for(key: KeyEvent) -> Option<Command> {
    if is_ctrl_c(&key) {
        return Some(Command::Quit);
    }

    match key.code {
        KeyCode::Up => Some(Command::Turn(Up)),
        KeyCode::Down => Some(Command::Turn(Down)),
        KeyCode::Left => Some(Command::Turn(Left)),
        KeyCode::Right => Some(Command::Turn(Right)),
        KeyCode::Char('p') | KeyCode::Char('P') => Some(Command::TogglePause),
        KeyCode::Char(' ') => Some(Command::Restart),
        KeyCode::Esc => Some(Command::Quit),
        _ => None,
    }
}

fn is_ctrl_c(ev: &KeyEvent) -> bool {
    ev.code == KeyCode::Char('c') && ev.modifiers.contains(KeyModifiers::CONTROL)
}
