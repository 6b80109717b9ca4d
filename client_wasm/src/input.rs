//! Keyboard input handling

use game_core::{Key, KeyState};
use std::cell::Cell;

/// Map a `KeyboardEvent.key` value to a paddle key
pub fn key_from_name(key: &str) -> Option<Key> {
    match key {
        "ArrowUp" | "w" | "W" => Some(Key::Up),
        "ArrowDown" | "s" | "S" => Some(Key::Down),
        _ => None,
    }
}

/// Held keys, written by DOM listeners and read once per tick
#[derive(Debug, Default)]
pub struct KeyboardState {
    up: Cell<bool>,
    down: Cell<bool>,
}

impl KeyboardState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Handle key down event; returns true if the key is one we consume
    pub fn handle_key_down(&self, key: &str) -> bool {
        self.set(key, true)
    }

    /// Handle key up event
    pub fn handle_key_up(&self, key: &str) -> bool {
        self.set(key, false)
    }

    /// Forget everything held, e.g. when the page loses focus
    pub fn release_all(&self) {
        self.up.set(false);
        self.down.set(false);
    }

    fn set(&self, key: &str, held: bool) -> bool {
        match key_from_name(key) {
            Some(Key::Up) => self.up.set(held),
            Some(Key::Down) => self.down.set(held),
            None => return false,
        }
        true
    }
}

impl KeyState for KeyboardState {
    fn is_pressed(&self, key: Key) -> bool {
        match key {
            Key::Up => self.up.get(),
            Key::Down => self.down.get(),
        }
    }
}
