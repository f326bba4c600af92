//! Game action definitions

use macroquad::prelude::KeyCode;

/// Everything the player can ask the game to do
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Action {
    MoveLeft,
    MoveRight,
}

impl Action {
    pub const ALL: &'static [Action] = &[Action::MoveLeft, Action::MoveRight];

    /// Keyboard binding for this action
    pub fn key(self) -> KeyCode {
        match self {
            Action::MoveLeft => KeyCode::A,
            Action::MoveRight => KeyCode::D,
        }
    }

    /// Reverse lookup used when translating raw key events
    pub fn from_key(key: KeyCode) -> Option<Action> {
        Action::ALL.iter().copied().find(|action| action.key() == key)
    }
}
