//! Game Runtime
//!
//! Drives one frame at a time: poll input, tick the world, paint, then wait
//! out the rest of the frame so the simulation runs at the configured rate.

use macroquad::prelude::get_time;
use crate::config::{GameConfig, ScoreStyle};
use crate::input::InputState;
use crate::texture::Sprites;
use super::renderer::{draw_frame, frame_commands};
use super::world::GameState;

/// Sleep-based frame pacing
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FrameLimiter {
    /// Target frame time in seconds
    frame_time: f64,
}

impl FrameLimiter {
    /// Stop sleeping this close to the deadline and spin instead
    const SPIN_MARGIN: f64 = 0.002;

    pub fn new(config: &GameConfig) -> Self {
        Self { frame_time: config.tick_duration() }
    }

    pub fn frame_time(&self) -> f64 {
        self.frame_time
    }

    /// Time still owed after `elapsed` seconds of work, None if the frame overran
    pub fn remaining(&self, elapsed: f64) -> Option<f64> {
        let remaining = self.frame_time - elapsed;
        (remaining > 0.0).then_some(remaining)
    }

    /// Block until `frame_start + frame_time`
    pub fn wait(&self, frame_start: f64) {
        if self.remaining(get_time() - frame_start).is_none() {
            return;
        }

        // Native: use sleep for bulk, then spin-wait for precision
        #[cfg(not(target_arch = "wasm32"))]
        {
            while get_time() - frame_start + Self::SPIN_MARGIN < self.frame_time() {
                std::thread::sleep(std::time::Duration::from_millis(1));
            }
            while get_time() - frame_start < self.frame_time {
                std::hint::spin_loop();
            }
        }
        // WASM: no thread::sleep, the browser paces frames
        #[cfg(target_arch = "wasm32")]
        {
            while get_time() - frame_start < self.frame_time {}
        }
    }
}

/// Everything the main loop needs between frames
pub struct GameRuntime {
    pub state: GameState,
    pub input: InputState,
    sprites: Sprites,
    score_style: ScoreStyle,
    limiter: FrameLimiter,
}

impl GameRuntime {
    pub fn new(config: &GameConfig, sprites: Sprites, seed: u64) -> Self {
        Self {
            state: GameState::new(config, seed),
            input: InputState::new(),
            sprites,
            score_style: config.score,
            limiter: FrameLimiter::new(config),
        }
    }

    /// Run one tick and paint it. Call once per macroquad frame.
    pub fn frame(&mut self) {
        let frame_start = get_time();

        self.input.poll();
        let report = self.state.tick(&self.input);
        if report.bounces > 0 {
            log::trace!("Bounced at y={}", self.state.player.bounds.y);
        }
        if report.respawns > 0 {
            log::debug!("{} tile(s) recycled, score {}", report.respawns, self.state.score);
        }
        if report.fell_off {
            log::info!("Fell off the bottom, score reset");
        }

        draw_frame(&frame_commands(&self.state), &self.sprites, &self.score_style);

        self.limiter.wait(frame_start);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sixty_hz_frame_time() {
        let limiter = FrameLimiter::new(&GameConfig::default());
        assert!((limiter.frame_time() - 1.0 / 60.0).abs() < 1e-12);
    }

    #[test]
    fn test_remaining_time() {
        let limiter = FrameLimiter::new(&GameConfig::default());
        let remaining = limiter.remaining(0.006).unwrap();
        assert!((remaining - (1.0 / 60.0 - 0.006)).abs() < 1e-12);
    }

    #[test]
    fn test_overrun_owes_nothing() {
        let limiter = FrameLimiter::new(&GameConfig::default());
        assert_eq!(limiter.remaining(0.02), None);
        assert_eq!(limiter.remaining(1.0 / 60.0), None);
    }

    #[test]
    fn test_zero_tick_rate_clamped() {
        let config = GameConfig { tick_rate: 0, ..GameConfig::default() };
        assert_eq!(FrameLimiter::new(&config).frame_time(), 1.0);
    }
}
