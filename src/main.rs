//! Skyhop: a single-screen falling-tile platformer
//!
//! Steer with A/D, bounce off the tiles scrolling down the screen and score a
//! point for every tile that drops off the bottom. Falling off resets the
//! score.

/// Version from Cargo.toml
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

mod config;
mod game;
mod input;
mod texture;

use std::path::PathBuf;
use clap::Parser;
use macroquad::prelude::*;
use config::GameConfig;
use game::{GameRuntime, SCREEN_HEIGHT, SCREEN_WIDTH};
use texture::Sprites;

#[derive(Parser, Debug)]
#[command(name = "skyhop", version = VERSION)]
#[command(about = "Bounce off falling tiles for as long as you can")]
struct Cli {
    /// RON config file (defaults are used if it does not exist)
    #[arg(long, default_value = "assets/skyhop.ron")]
    config: PathBuf,

    /// Directory sprite paths are resolved against
    #[arg(long, default_value = ".")]
    assets: PathBuf,

    /// Seed for tile placement (random if omitted)
    #[arg(long)]
    seed: Option<u64>,
}

fn window_conf() -> Conf {
    Conf {
        window_title: "Skyhop".to_string(),
        window_width: SCREEN_WIDTH,
        window_height: SCREEN_HEIGHT,
        window_resizable: false,
        high_dpi: false,
        ..Default::default()
    }
}

/// Seed from the wall clock (works on WASM, unlike SystemTime)
fn clock_seed() -> u64 {
    (macroquad::miniquad::date::now() * 1000.0) as u64
}

#[macroquad::main(window_conf)]
async fn main() {
    // Initialize crash logging FIRST (before any other code)
    #[cfg(not(target_arch = "wasm32"))]
    crashlog::setup!(crashlog::cargo_metadata!().capitalized(), false);

    #[cfg(not(target_arch = "wasm32"))]
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let cli = Cli::parse();
    let config = GameConfig::load_or_default(&cli.config);

    let sprites = Sprites::load(&config.sprites, &cli.assets);
    log::info!("Loaded {}/4 sprites from {}", sprites.loaded_count(), cli.assets.display());

    let seed = cli.seed.unwrap_or_else(clock_seed);
    log::info!("=== SKYHOP v{} === seed {}", VERSION, seed);

    let mut runtime = GameRuntime::new(&config, sprites, seed);

    loop {
        runtime.frame();
        next_frame().await;
    }
}
