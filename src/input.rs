use std::time::Duration;

use anyhow::{Context, Result};
use crossterm::event::{poll, read, Event, KeyCode, KeyEvent, KeyModifiers};

use crate::snake::Direction;

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum InputEvent {
    Move(Direction),
    Exit,
}

/// A non-blocking source of player commands.
pub trait InputSource {
    /// Returns the next queued event, or `None` right away if there is none.
    fn poll_event(&mut self) -> Result<Option<InputEvent>>;
}

/// Translates a key press. Keys with no meaning map to `None`.
pub fn map_key(key: &KeyEvent) -> Option<InputEvent> {
    if is_ctrl_c(key) {
        return Some(InputEvent::Exit);
    }

    let event = match key.code {
        KeyCode::Up => InputEvent::Move(Direction::North),
        KeyCode::Right => InputEvent::Move(Direction::East),
        KeyCode::Down => InputEvent::Move(Direction::South),
        KeyCode::Left => InputEvent::Move(Direction::West),
        KeyCode::Esc | KeyCode::F(1) => InputEvent::Exit,
        KeyCode::Char(c) => match c.to_ascii_lowercase() {
            'w' => InputEvent::Move(Direction::North),
            'd' => InputEvent::Move(Direction::East),
            's' => InputEvent::Move(Direction::South),
            'a' => InputEvent::Move(Direction::West),
            'q' => InputEvent::Exit,
            _ => return None,
        },
        _ => return None,
    };

    Some(event)
}

fn is_ctrl_c(key: &KeyEvent) -> bool {
    matches!(key, KeyEvent { code: KeyCode::Char('c'), modifiers } if modifiers.contains(KeyModifiers::CONTROL))
}

/// Reads the keyboard through crossterm. Requires raw mode to be on.
pub struct KeyboardInput;

impl KeyboardInput {
    pub fn new() -> Self {
        KeyboardInput
    }
}

impl Default for KeyboardInput {
    fn default() -> Self {
        Self::new()
    }
}

impl InputSource for KeyboardInput {
    fn poll_event(&mut self) -> Result<Option<InputEvent>> {
        // Skip over resizes, mouse events and unmapped keys until a command
        // turns up or the queue is drained.
        while poll(Duration::from_millis(0)).context("Failed to poll terminal events")? {
            if let Event::Key(key) = read().context("Failed to read terminal event")? {
                if let Some(event) = map_key(&key) {
                    return Ok(Some(event));
                }
            }
        }

        Ok(None)
    }
}
