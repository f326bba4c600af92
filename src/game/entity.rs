//! Game entities
//!
//! The entity set is fixed: one player, one background and a pool of tiles.
//! All of them are created once and mutated in place every tick.

use crate::config::{PlayerSettings, TileSettings};
use crate::input::{Action, InputState};
use super::bounds::Bounds;

/// Which way the player last moved (selects the sprite)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Facing {
    #[default]
    Left,
    Right,
}

/// The falling, bouncing player
#[derive(Debug, Clone, PartialEq)]
pub struct Player {
    pub bounds: Bounds,
    /// Vertical velocity, positive = moving down
    pub fall_speed: f64,
    pub facing: Facing,
    move_speed: i32,
    jump_force: f64,
    gravity: f64,
}

impl Player {
    pub fn new(settings: &PlayerSettings) -> Self {
        Self {
            bounds: Bounds::new(settings.start_x, settings.start_y, settings.width, settings.height),
            fall_speed: 0.0,
            facing: Facing::Left,
            move_speed: settings.move_speed,
            jump_force: settings.jump_force,
            gravity: settings.gravity,
        }
    }

    /// Advance one tick: wrap, fall, then steer from input
    pub fn update(&mut self, input: &InputState, screen_width: i32) {
        self.wrap_horizontal(screen_width);
        self.apply_gravity();

        if input.action_down(Action::MoveLeft) {
            self.facing = Facing::Left;
            self.bounds.x -= self.move_speed;
        }
        if input.action_down(Action::MoveRight) {
            self.facing = Facing::Right;
            self.bounds.x += self.move_speed;
        }
    }

    /// Snap to the opposite edge once fully past one side
    fn wrap_horizontal(&mut self, screen_width: i32) {
        if self.bounds.x < 0 {
            self.bounds.x = screen_width;
        }
        if self.bounds.x > screen_width {
            self.bounds.x = 0;
        }
    }

    fn apply_gravity(&mut self) {
        self.fall_speed += self.gravity;
        // Truncates toward zero, so sub-pixel speeds leave y unchanged
        self.bounds.y = (self.bounds.y as f64 + self.fall_speed) as i32;
    }

    /// Bounce upward. Only takes effect while falling.
    pub fn jump(&mut self) {
        if self.fall_speed > 0.0 {
            self.fall_speed = -self.jump_force;
        }
    }
}

/// A platform scrolling down the screen
#[derive(Debug, Clone, PartialEq)]
pub struct Tile {
    pub bounds: Bounds,
    pub fall_speed: f64,
}

impl Tile {
    pub fn new(x: i32, y: i32, settings: &TileSettings) -> Self {
        Self {
            bounds: Bounds::new(x, y, settings.width, settings.height),
            fall_speed: settings.fall_speed,
        }
    }

    pub fn update(&mut self) {
        self.bounds.y = (self.bounds.y as f64 + self.fall_speed) as i32;
    }

    /// Move back to the top at a new column, keeping size and speed
    pub fn respawn(&mut self, x: i32) {
        self.bounds.x = x;
        self.bounds.y = 0;
    }
}

/// Static full-screen backdrop
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Background {
    pub bounds: Bounds,
}

impl Background {
    pub fn new(screen_width: i32, screen_height: i32) -> Self {
        Self { bounds: Bounds::screen(screen_width, screen_height) }
    }
}
