//! Keyboard input mapping.
//!
//! Arrow keys steer the player paddle while held, Space restarts. Auto-repeat
//! events are dropped so holding a key sends one command.

use crate::reducer::Command;
use pong_shared::GameConfig;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Key {
    ArrowUp,
    ArrowDown,
    Space,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyEdge {
    Pressed,
    Released,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct KeyEvent {
    pub key: Key,
    pub edge: KeyEdge,
    /// Set by the platform for auto-repeated key-downs
    pub repeat: bool,
}

impl KeyEvent {
    pub fn pressed(key: Key) -> Self {
        Self {
            key,
            edge: KeyEdge::Pressed,
            repeat: false,
        }
    }

    pub fn released(key: Key) -> Self {
        Self {
            key,
            edge: KeyEdge::Released,
            repeat: false,
        }
    }
}

pub fn command_for(event: &KeyEvent, config: &GameConfig) -> Option<Command> {
    if event.repeat {
        return None;
    }
    match (event.key, event.edge) {
        (Key::ArrowUp, KeyEdge::Pressed) => Some(Command::Move(-config.player_move_speed)),
        (Key::ArrowDown, KeyEdge::Pressed) => Some(Command::Move(config.player_move_speed)),
        (Key::ArrowUp | Key::ArrowDown, KeyEdge::Released) => Some(Command::Move(0.0)),
        (Key::Space, KeyEdge::Pressed) => Some(Command::Restart),
        (Key::Space, KeyEdge::Released) => None,
    }
}

/// Parse one line of driver input into key events.
///
/// Words: `up`, `down`, `restart` (or `space`) press a key; a `-` prefix
/// releases it and a `+` prefix presses it explicitly. `stop` releases
/// both arrows. Unknown words give an error.
pub fn parse_key_line(line: &str) -> Result<Vec<KeyEvent>, String> {
    let word = line.trim().to_ascii_lowercase();
    if word == "stop" {
        return Ok(vec![
            KeyEvent::released(Key::ArrowUp),
            KeyEvent::released(Key::ArrowDown),
        ]);
    }

    let (edge, name) = if let Some(rest) = word.strip_prefix('-') {
        (KeyEdge::Released, rest)
    } else if let Some(rest) = word.strip_prefix('+') {
        (KeyEdge::Pressed, rest)
    } else {
        (KeyEdge::Pressed, word.as_str())
    };

    let key = match name {
        "up" | "arrowup" => Key::ArrowUp,
        "down" | "arrowdown" => Key::ArrowDown,
        "restart" | "space" => Key::Space,
        _ => return Err(format!("unknown key: {:?}", line.trim())),
    };

    Ok(vec![KeyEvent {
        key,
        edge,
        repeat: false,
    }])
}
