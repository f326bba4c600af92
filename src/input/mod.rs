//! Input handling
//!
//! Keyboard events are latched into an [`InputState`] value owned by the
//! game loop and read once per tick.

mod actions;
mod state;

pub use actions::*;
pub use state::*;
