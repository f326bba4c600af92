//! Game World
//!
//! Owns every entity plus the score and advances them one tick at a time.
//! Tiles live in a fixed pool and are reset in place when they scroll off the
//! bottom, so iteration never has to deal with elements being replaced.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use crate::config::{GameConfig, TileSettings};
use crate::input::InputState;
use super::collision::overlaps;
use super::entity::{Background, Player, Tile};

/// Fixed window size in pixels
pub const SCREEN_WIDTH: i32 = 500;
pub const SCREEN_HEIGHT: i32 = 800;

/// What happened during one tick
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TickReport {
    /// Tiles that bounced the player
    pub bounces: u32,
    /// Tiles that scrolled off and came back at the top
    pub respawns: u32,
    /// Player fell past the bottom and restarted at the top
    pub fell_off: bool,
}

/// The whole game: entities, score and the RNG used for tile placement
pub struct GameState {
    pub player: Player,
    pub background: Background,
    pub tiles: Vec<Tile>,
    pub score: u32,
    tile_settings: TileSettings,
    rng: StdRng,
}

impl GameState {
    /// Start a new game with `config.tile_count` randomly placed tiles
    pub fn new(config: &GameConfig, seed: u64) -> Self {
        let mut state = Self::with_tiles(config, Vec::new(), seed);
        let settings = config.tile;
        for _ in 0..config.tile_count {
            let x = random_between(&mut state.rng, settings.width, SCREEN_WIDTH - settings.width);
            let y = random_between(&mut state.rng, settings.height, SCREEN_HEIGHT - settings.height);
            state.tiles.push(Tile::new(x, y, &settings));
        }
        state
    }

    /// Start a new game with a fixed tile layout
    pub fn with_tiles(config: &GameConfig, tiles: Vec<Tile>, seed: u64) -> Self {
        Self {
            player: Player::new(&config.player),
            background: Background::new(SCREEN_WIDTH, SCREEN_HEIGHT),
            tiles,
            score: 0,
            tile_settings: config.tile,
            rng: StdRng::seed_from_u64(seed),
        }
    }

    /// Advance the game by one tick
    pub fn tick(&mut self, input: &InputState) -> TickReport {
        let mut report = self.update_tiles();
        report.fell_off = self.update_player(input);
        report
    }

    /// Scroll every tile, bounce the player off overlapping ones and recycle
    /// tiles that left the screen
    pub fn update_tiles(&mut self) -> TickReport {
        let mut report = TickReport::default();
        let (min_x, max_x) = (self.tile_settings.width, SCREEN_WIDTH - self.tile_settings.width);

        for i in 0..self.tiles.len() {
            self.tiles[i].update();

            if overlaps(&self.player.bounds, &self.tiles[i].bounds) {
                let before = self.player.fall_speed;
                self.player.jump();
                if self.player.fall_speed != before {
                    report.bounces += 1;
                }
            }

            if self.tiles[i].bounds.y > SCREEN_HEIGHT {
                let x = random_between(&mut self.rng, min_x, max_x);
                self.tiles[i].respawn(x);
                self.score += 1;
                report.respawns += 1;
            }
        }
        report
    }

    /// Move the player; returns true if it fell off the bottom this tick
    pub fn update_player(&mut self, input: &InputState) -> bool {
        self.player.update(input, SCREEN_WIDTH);

        if self.player.bounds.y > SCREEN_HEIGHT {
            log::debug!("Player fell off at score {}", self.score);
            self.player.bounds.y = 0;
            self.score = 0;
            return true;
        }
        false
    }
}

/// Uniform in `[min, max)`, or `min` when the range is empty
fn random_between(rng: &mut StdRng, min: i32, max: i32) -> i32 {
    if max > min {
        rng.gen_range(min..max)
    } else {
        min
    }
}
