//! Sprite assets
//!
//! Static images decoded from disk at startup and uploaded as macroquad
//! textures. Loading never fails hard: a missing or broken file is logged and
//! its sprite is simply not drawn.

mod sprite;

pub use sprite::{SpriteKind, Sprites};
