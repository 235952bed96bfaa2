//! Keyboard input capture
//!
//! Event handlers mutate a `Keys` tracker as keydown/keyup events arrive;
//! the game loop freezes it into an [`InputSnapshot`] exactly once per tick,
//! so the simulation never observes a key change mid-step.

use crate::sim::InputSnapshot;

/// Direction keys the game consults. Everything else is ignored.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameKey {
    Up,
    Down,
}

impl GameKey {
    /// Map a DOM `KeyboardEvent.key` name to a game key
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "ArrowUp" => Some(GameKey::Up),
            "ArrowDown" => Some(GameKey::Down),
            _ => None,
        }
    }
}

/// Current pressed-state of the direction keys
#[derive(Debug, Clone, Copy, Default)]
pub struct Keys {
    up: bool,
    down: bool,
}

impl Keys {
    pub fn set_pressed(&mut self, key: GameKey, pressed: bool) {
        match key {
            GameKey::Up => self.up = pressed,
            GameKey::Down => self.down = pressed,
        }
    }

    /// Freeze the current state for one simulation tick
    pub fn snapshot(&self) -> InputSnapshot {
        InputSnapshot {
            up: self.up,
            down: self.down,
        }
    }
}
