//! Sprite loading
//!
//! Decoding goes through the `image` crate so it can be exercised without a
//! GPU context; only [`Sprites::load`] touches macroquad.

use std::path::Path;
use image::RgbaImage;
use macroquad::prelude::*;
use crate::config::SpritePaths;

/// Error type for sprite decoding
#[derive(Debug)]
pub enum SpriteError {
    /// File missing or unreadable
    Io(std::io::Error),
    /// Not a supported image
    Decode(image::ImageError),
    /// Larger than a texture can hold
    TooLarge { width: u32, height: u32 },
}

impl From<std::io::Error> for SpriteError {
    fn from(e: std::io::Error) -> Self {
        SpriteError::Io(e)
    }
}

impl From<image::ImageError> for SpriteError {
    fn from(e: image::ImageError) -> Self {
        match e {
            image::ImageError::IoError(io) => SpriteError::Io(io),
            other => SpriteError::Decode(other),
        }
    }
}

impl std::fmt::Display for SpriteError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SpriteError::Io(e) => write!(f, "I/O error: {}", e),
            SpriteError::Decode(e) => write!(f, "decode error: {}", e),
            SpriteError::TooLarge { width, height } => {
                write!(f, "image too large ({}x{}, max {}x{})", width, height, u16::MAX, u16::MAX)
            }
        }
    }
}

impl std::error::Error for SpriteError {}

/// Decode an image file to RGBA8
pub fn decode_image(path: &Path) -> Result<RgbaImage, SpriteError> {
    let bytes = std::fs::read(path)?;
    let rgba = image::load_from_memory(&bytes)?.to_rgba8();

    let (width, height) = rgba.dimensions();
    if width > u16::MAX as u32 || height > u16::MAX as u32 {
        return Err(SpriteError::TooLarge { width, height });
    }
    Ok(rgba)
}

/// Decode an image file, logging and returning `None` on failure
pub fn load_image(path: &Path) -> Option<RgbaImage> {
    match decode_image(path) {
        Ok(rgba) => {
            log::debug!("Loaded sprite {} ({}x{})", path.display(), rgba.width(), rgba.height());
            Some(rgba)
        }
        Err(e) => {
            log::warn!("Could not load sprite {}: {}", path.display(), e);
            None
        }
    }
}

/// Which image an entity is drawn with
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SpriteKind {
    Background,
    Tile,
    PlayerLeft,
    PlayerRight,
}

/// Uploaded textures, one optional slot per [`SpriteKind`]
#[derive(Default)]
pub struct Sprites {
    background: Option<Texture2D>,
    tile: Option<Texture2D>,
    player_left: Option<Texture2D>,
    player_right: Option<Texture2D>,
}

impl Sprites {
    /// Load every sprite relative to `base_dir`. Needs a live macroquad context.
    pub fn load(paths: &SpritePaths, base_dir: &Path) -> Self {
        let upload = |relative: &str| {
            load_image(&base_dir.join(relative)).map(|rgba| {
                let texture = Texture2D::from_rgba8(rgba.width() as u16, rgba.height() as u16, rgba.as_raw());
                texture.set_filter(FilterMode::Nearest);
                texture
            })
        };

        Self {
            background: upload(&paths.background),
            tile: upload(&paths.tile),
            player_left: upload(&paths.player_left),
            player_right: upload(&paths.player_right),
        }
    }

    pub fn get(&self, kind: SpriteKind) -> Option<&Texture2D> {
        match kind {
            SpriteKind::Background => self.background.as_ref(),
            SpriteKind::Tile => self.tile.as_ref(),
            SpriteKind::PlayerLeft => self.player_left.as_ref(),
            SpriteKind::PlayerRight => self.player_right.as_ref(),
        }
    }

    /// Number of sprites that loaded
    pub fn loaded_count(&self) -> usize {
        [&self.background, &self.tile, &self.player_left, &self.player_right]
            .iter()
            .filter(|slot| slot.is_some())
            .count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_file_is_none() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("sprites/left.png");
        assert!(matches!(decode_image(&path), Err(SpriteError::Io(_))));
        assert!(load_image(&path).is_none());
    }

    #[test]
    fn test_garbage_file_is_decode_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("tile.png");
        std::fs::write(&path, b"definitely not a png").unwrap();
        assert!(matches!(decode_image(&path), Err(SpriteError::Decode(_))));
        assert!(load_image(&path).is_none());
    }

    #[test]
    fn test_valid_png_decodes() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("tile.png");
        let mut img = RgbaImage::new(4, 2);
        img.put_pixel(3, 1, image::Rgba([10, 20, 30, 255]));
        img.save(&path).unwrap();

        let rgba = load_image(&path).unwrap();
        assert_eq!(rgba.dimensions(), (4, 2));
        assert_eq!(rgba.get_pixel(3, 1).0, [10, 20, 30, 255]);
    }

    #[test]
    fn test_shipped_sprites_decode() {
        let dir = Path::new(env!("CARGO_MANIFEST_DIR"));
        for path in ["sprites/left.png", "sprites/right.png", "sprites/tile.png", "sprites/background.png"] {
            assert!(load_image(&dir.join(path)).is_some(), "{} failed to load", path);
        }
    }

    #[test]
    fn test_error_message_names_cause() {
        let err = SpriteError::TooLarge { width: 70000, height: 1 };
        assert!(err.to_string().contains("70000x1"));
    }

    #[test]
    fn test_empty_sprites_draw_nothing() {
        let sprites = Sprites::default();
        assert_eq!(sprites.loaded_count(), 0);
        assert!(sprites.get(SpriteKind::Tile).is_none());
    }
}
