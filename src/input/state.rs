//! Input state management
//!
//! Level-triggered latches: a key-down event sets the action held, the
//! matching key-up clears it. Nothing is queued and key repeat is ignored.

use macroquad::prelude::*;
use super::Action;

/// Latched movement input, read once per tick
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct InputState {
    left: bool,
    right: bool,
}

impl InputState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Latch the action bound to `key` (unbound keys are ignored)
    pub fn key_down(&mut self, key: KeyCode) {
        if let Some(action) = Action::from_key(key) {
            self.set(action, true);
        }
    }

    /// Release the action bound to `key`
    pub fn key_up(&mut self, key: KeyCode) {
        if let Some(action) = Action::from_key(key) {
            self.set(action, false);
        }
    }

    fn set(&mut self, action: Action, held: bool) {
        match action {
            Action::MoveLeft => self.left = held,
            Action::MoveRight => self.right = held,
        }
    }

    /// Check if action is currently held down
    pub fn action_down(&self, action: Action) -> bool {
        match action {
            Action::MoveLeft => self.left,
            Action::MoveRight => self.right,
        }
    }

    /// Feed this frame's key edges from macroquad into the latches.
    /// Call once per frame before the tick.
    pub fn poll(&mut self) {
        for &action in Action::ALL {
            let key = action.key();
            if is_key_pressed(key) {
                self.key_down(key);
            }
            if is_key_released(key) {
                self.key_up(key);
            }
        }
    }
}
