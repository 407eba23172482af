//! Key identifiers to simulation intents.
//!
//! Event callbacks never touch simulation state: they translate a key into an
//! [`InputIntent`] and hand it to the scheduler, which queues a move or stops.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// Screen direction for queued moves (y grows downward on the surface)
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MoveDirection {
    Up,
    Down,
    Left,
    Right,
}

impl MoveDirection {
    /// Surface delta for a move of `n` pixels
    pub fn delta(self, n: f64) -> (f64, f64) {
        match self {
            MoveDirection::Up => (0.0, -n),
            MoveDirection::Down => (0.0, n),
            MoveDirection::Left => (-n, 0.0),
            MoveDirection::Right => (n, 0.0),
        }
    }
}

/// What a bound key does
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum KeyAction {
    Up,
    Down,
    Left,
    Right,
    Quit,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum InputIntent {
    Move { direction: MoveDirection, distance: f64 },
    Quit,
}

/// Key identifier (DOM `KeyboardEvent.key`) to action table
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct KeyBindings {
    pub keys: BTreeMap<String, KeyAction>,
    /// Distance of one keyboard move, in pixels
    pub step: f64,
}

impl Default for KeyBindings {
    fn default() -> Self {
        let keys = [
            ("ArrowLeft", KeyAction::Left),
            ("ArrowRight", KeyAction::Right),
            ("ArrowDown", KeyAction::Down),
            ("ArrowUp", KeyAction::Up),
            ("Q", KeyAction::Quit),
        ]
        .into_iter()
        .map(|(k, a)| (k.to_string(), a))
        .collect();
        Self { keys, step: 5.0 }
    }
}

impl KeyBindings {
    /// `None` for unbound keys. Matching is exact: `"q"` is not `"Q"`.
    pub fn translate(&self, key: &str) -> Option<InputIntent> {
        let action = self.keys.get(key)?;
        let direction = match action {
            KeyAction::Quit => return Some(InputIntent::Quit),
            KeyAction::Up => MoveDirection::Up,
            KeyAction::Down => MoveDirection::Down,
            KeyAction::Left => MoveDirection::Left,
            KeyAction::Right => MoveDirection::Right,
        };
        Some(InputIntent::Move { direction, distance: self.step })
    }
}
