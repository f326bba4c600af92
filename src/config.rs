//! Game configuration
//!
//! Tunables for the player, tiles, sprites and score overlay, stored as RON.
//! Every struct uses `#[serde(default)]` so a config file only needs the
//! fields it wants to change.

use std::fs;
use std::path::Path;
use serde::{Serialize, Deserialize};

/// Error type for config loading
#[derive(Debug)]
pub enum ConfigError {
    IoError(std::io::Error),
    ParseError(ron::error::SpannedError),
}

impl From<std::io::Error> for ConfigError {
    fn from(e: std::io::Error) -> Self {
        ConfigError::IoError(e)
    }
}

impl From<ron::error::SpannedError> for ConfigError {
    fn from(e: ron::error::SpannedError) -> Self {
        ConfigError::ParseError(e)
    }
}

impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ConfigError::IoError(e) => write!(f, "IO error: {}", e),
            ConfigError::ParseError(e) => write!(f, "Parse error: {}", e),
        }
    }
}

impl std::error::Error for ConfigError {}

/// Player movement parameters
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PlayerSettings {
    /// Spawn position (top-left corner)
    pub start_x: i32,
    pub start_y: i32,
    pub width: i32,
    pub height: i32,
    /// Horizontal pixels per tick while a move key is held
    pub move_speed: i32,
    /// Upward fall speed applied on a tile bounce
    pub jump_force: f64,
    /// Fall speed added every tick
    pub gravity: f64,
}

impl Default for PlayerSettings {
    fn default() -> Self {
        Self {
            start_x: 200,
            start_y: 200,
            width: 40,
            height: 40,
            move_speed: 7,
            jump_force: 7.0,
            gravity: 0.13,
        }
    }
}

/// Tile size and scroll speed
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TileSettings {
    pub width: i32,
    pub height: i32,
    /// Downward pixels per tick
    pub fall_speed: f64,
}

impl Default for TileSettings {
    fn default() -> Self {
        Self {
            width: 40,
            height: 10,
            fall_speed: 2.0,
        }
    }
}

/// Sprite file locations, relative to the asset directory
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SpritePaths {
    pub player_left: String,
    pub player_right: String,
    pub tile: String,
    pub background: String,
}

impl Default for SpritePaths {
    fn default() -> Self {
        Self {
            player_left: "sprites/left.png".to_string(),
            player_right: "sprites/right.png".to_string(),
            tile: "sprites/tile.png".to_string(),
            background: "sprites/background.png".to_string(),
        }
    }
}

/// Score overlay placement and color
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ScoreStyle {
    /// Text baseline position
    pub x: f32,
    pub y: f32,
    pub font_size: f32,
    /// RGB
    pub color: [u8; 3],
}

impl Default for ScoreStyle {
    fn default() -> Self {
        Self {
            x: 10.0,
            y: 30.0,
            font_size: 20.0,
            color: [255, 255, 100],
        }
    }
}

/// Top-level game configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    /// Simulation ticks per second
    pub tick_rate: u32,
    /// Number of tiles alive at once
    pub tile_count: usize,
    pub player: PlayerSettings,
    pub tile: TileSettings,
    pub sprites: SpritePaths,
    pub score: ScoreStyle,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            tick_rate: 60,
            tile_count: 25,
            player: PlayerSettings::default(),
            tile: TileSettings::default(),
            sprites: SpritePaths::default(),
            score: ScoreStyle::default(),
        }
    }
}

impl GameConfig {
    /// Parse a config from RON text
    pub fn from_ron(text: &str) -> Result<Self, ConfigError> {
        Ok(ron::from_str(text)?)
    }

    /// Load a config file
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let text = fs::read_to_string(path)?;
        Self::from_ron(&text)
    }

    /// Load a config file, falling back to defaults when it is missing or invalid
    pub fn load_or_default(path: &Path) -> Self {
        if !path.exists() {
            log::info!("No config at {}, using defaults", path.display());
            return Self::default();
        }
        match Self::load(path) {
            Ok(config) => {
                log::info!("Loaded config from {}", path.display());
                config
            }
            Err(e) => {
                log::warn!("Ignoring config {}: {}", path.display(), e);
                Self::default()
            }
        }
    }

    /// Seconds per tick (0 tick rate is treated as 1)
    pub fn tick_duration(&self) -> f64 {
        1.0 / self.tick_rate.max(1) as f64
    }
}
