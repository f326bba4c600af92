//! Game Renderer
//!
//! A frame is first described as an ordered list of draw commands built from
//! the game state, then executed against macroquad. Keeping the first step
//! pure lets the paint order be checked without a window.

use macroquad::prelude::*;
use crate::config::ScoreStyle;
use crate::texture::{SpriteKind, Sprites};
use super::bounds::Bounds;
use super::entity::Facing;
use super::world::GameState;

/// One thing to paint, in back-to-front order
#[derive(Debug, Clone, PartialEq)]
pub enum DrawCommand {
    /// Image stretched to fill `bounds`
    Sprite { kind: SpriteKind, bounds: Bounds },
    /// Score overlay
    Score(String),
}

/// Overlay text for a score
pub fn score_text(score: u32) -> String {
    format!("Score : {}", score)
}

/// Background, then tiles, then the player, then the score
pub fn frame_commands(state: &GameState) -> Vec<DrawCommand> {
    let mut commands = Vec::with_capacity(state.tiles.len() + 3);

    commands.push(DrawCommand::Sprite {
        kind: SpriteKind::Background,
        bounds: state.background.bounds,
    });

    commands.extend(state.tiles.iter().map(|tile| DrawCommand::Sprite {
        kind: SpriteKind::Tile,
        bounds: tile.bounds,
    }));

    let player_sprite = match state.player.facing {
        Facing::Left => SpriteKind::PlayerLeft,
        Facing::Right => SpriteKind::PlayerRight,
    };
    commands.push(DrawCommand::Sprite {
        kind: player_sprite,
        bounds: state.player.bounds,
    });

    commands.push(DrawCommand::Score(score_text(state.score)));
    commands
}

/// Paint a frame. Sprites that failed to load are skipped.
pub fn draw_frame(commands: &[DrawCommand], sprites: &Sprites, style: &ScoreStyle) {
    clear_background(BLACK);

    for command in commands {
        match command {
            DrawCommand::Sprite { kind, bounds } => {
                let Some(texture) = sprites.get(*kind) else { continue };
                draw_texture_ex(
                    texture,
                    bounds.x as f32,
                    bounds.y as f32,
                    WHITE,
                    DrawTextureParams {
                        dest_size: Some(vec2(bounds.w as f32, bounds.h as f32)),
                        ..Default::default()
                    },
                );
            }
            DrawCommand::Score(text) => {
                let [r, g, b] = style.color;
                draw_text(text, style.x, style.y, style.font_size, Color::from_rgba(r, g, b, 255));
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{GameConfig, TileSettings};
    use crate::game::entity::Tile;

    fn state_with_two_tiles() -> GameState {
        let settings = TileSettings::default();
        let tiles = vec![Tile::new(50, 100, &settings), Tile::new(300, 600, &settings)];
        GameState::with_tiles(&GameConfig::default(), tiles, 0)
    }

    #[test]
    fn test_paint_order() {
        let state = state_with_two_tiles();
        let commands = frame_commands(&state);

        assert_eq!(commands.len(), 5);
        assert_eq!(
            commands[0],
            DrawCommand::Sprite { kind: SpriteKind::Background, bounds: Bounds::new(0, 0, 500, 800) }
        );
        assert_eq!(
            commands[1],
            DrawCommand::Sprite { kind: SpriteKind::Tile, bounds: Bounds::new(50, 100, 40, 10) }
        );
        assert_eq!(
            commands[2],
            DrawCommand::Sprite { kind: SpriteKind::Tile, bounds: Bounds::new(300, 600, 40, 10) }
        );
        assert_eq!(
            commands[3],
            DrawCommand::Sprite { kind: SpriteKind::PlayerLeft, bounds: Bounds::new(200, 200, 40, 40) }
        );
        assert_eq!(commands[4], DrawCommand::Score("Score : 0".to_string()));
    }

    #[test]
    fn test_player_sprite_follows_facing() {
        let mut state = state_with_two_tiles();
        state.player.facing = Facing::Right;
        state.score = 17;
        let commands = frame_commands(&state);

        assert!(matches!(commands[3], DrawCommand::Sprite { kind: SpriteKind::PlayerRight, .. }));
        assert_eq!(commands[4], DrawCommand::Score("Score : 17".to_string()));
    }

    #[test]
    fn test_score_text_format() {
        assert_eq!(score_text(0), "Score : 0");
        assert_eq!(score_text(1234), "Score : 1234");
    }
}
