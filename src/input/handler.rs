use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use crate::game::Heading;

/// What a key press asks the game to do.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyAction {
    Turn(Heading),
    Quit,
    None,
}

pub struct InputHandler;

impl InputHandler {
    pub fn new() -> Self {
        Self
    }

    pub fn handle_key_event(&self, key: KeyEvent) -> KeyAction {
        // Handle Ctrl+C
        if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
            return KeyAction::Quit;
        }

        match key.code {
            // Movement - Arrow keys
            KeyCode::Up => KeyAction::Turn(Heading::Up),
            KeyCode::Down => KeyAction::Turn(Heading::Down),
            KeyCode::Left => KeyAction::Turn(Heading::Left),
            KeyCode::Right => KeyAction::Turn(Heading::Right),

            // Movement - WASD
            KeyCode::Char('w') | KeyCode::Char('W') => KeyAction::Turn(Heading::Up),
            KeyCode::Char('s') | KeyCode::Char('S') => KeyAction::Turn(Heading::Down),
            KeyCode::Char('a') | KeyCode::Char('A') => KeyAction::Turn(Heading::Left),
            KeyCode::Char('d') | KeyCode::Char('D') => KeyAction::Turn(Heading::Right),

            // Controls
            KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc => KeyAction::Quit,

            _ => KeyAction::None,
        }
    }
}

impl Default for InputHandler {
    fn default() -> Self {
        Self::new()
    }
}
