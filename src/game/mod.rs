//! Game Module
//!
//! Single-screen platformer: the player falls, bounces off scrolling tiles
//! and scores a point for every tile that scrolls off the bottom.
//!
//! Key concepts:
//! - Entities: one player, one background, a fixed pool of tiles
//! - World: owns the entities and the score, advanced one tick at a time
//! - Renderer: turns the world into ordered draw commands
//! - Runtime: per-frame input, tick, paint and pacing

pub mod bounds;
pub mod entity;
pub mod collision;
pub mod world;
pub mod renderer;
pub mod runtime;

pub use world::{SCREEN_WIDTH, SCREEN_HEIGHT};
pub use runtime::GameRuntime;
