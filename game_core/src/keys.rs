//! Keyboard abstraction
//!
//! The game only ever asks whether one of two directional keys is held.
//! Front ends implement [`KeyState`] on top of whatever the platform offers.

/// Directional keys polled by the player paddle
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Key {
    Up,
    Down,
}

/// Key-state query used once per tick
pub trait KeyState {
    fn is_pressed(&self, key: Key) -> bool;
}

/// Snapshot of held keys
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct HeldKeys {
    pub up: bool,
    pub down: bool,
}

impl HeldKeys {
    pub fn none() -> Self {
        Self::default()
    }

    pub fn up() -> Self {
        Self {
            up: true,
            down: false,
        }
    }

    pub fn down() -> Self {
        Self {
            up: false,
            down: true,
        }
    }
}

impl KeyState for HeldKeys {
    fn is_pressed(&self, key: Key) -> bool {
        match key {
            Key::Up => self.up,
            Key::Down => self.down,
        }
    }
}

impl<K: KeyState + ?Sized> KeyState for &K {
    fn is_pressed(&self, key: Key) -> bool {
        (**self).is_pressed(key)
    }
}
