//! Collision System
//!
//! Axis-aligned bounding-box overlap between the player and a tile.

use super::bounds::Bounds;

/// True when the two rectangles share at least one pixel.
///
/// Strict on every side: rectangles that only touch along an edge do not
/// overlap.
pub fn overlaps(a: &Bounds, b: &Bounds) -> bool {
    a.x < b.right() && a.right() > b.x && a.y < b.bottom() && a.bottom() > b.y
}

#[cfg(test)]
mod tests {
    use super::*;

    const PLAYER: Bounds = Bounds::new(200, 200, 40, 40);

    #[test]
    fn test_one_pixel_overlap_on_each_side() {
        // Tile just under the player's feet
        assert!(overlaps(&PLAYER, &Bounds::new(200, 239, 40, 10)));
        // Tile just above the player's head
        assert!(overlaps(&PLAYER, &Bounds::new(200, 191, 40, 10)));
        // Tile clipping the left edge
        assert!(overlaps(&PLAYER, &Bounds::new(161, 210, 40, 10)));
        // Tile clipping the right edge
        assert!(overlaps(&PLAYER, &Bounds::new(239, 210, 40, 10)));
    }

    #[test]
    fn test_touching_edges_do_not_overlap() {
        assert!(!overlaps(&PLAYER, &Bounds::new(200, 240, 40, 10)));
        assert!(!overlaps(&PLAYER, &Bounds::new(200, 190, 40, 10)));
        assert!(!overlaps(&PLAYER, &Bounds::new(160, 210, 40, 10)));
        assert!(!overlaps(&PLAYER, &Bounds::new(240, 210, 40, 10)));
    }

    #[test]
    fn test_needs_overlap_on_both_axes() {
        // Overlaps horizontally only
        assert!(!overlaps(&PLAYER, &Bounds::new(210, 400, 40, 10)));
        // Overlaps vertically only
        assert!(!overlaps(&PLAYER, &Bounds::new(400, 210, 40, 10)));
    }

    #[test]
    fn test_symmetric_and_contained() {
        let tile = Bounds::new(210, 215, 10, 5);
        assert!(overlaps(&PLAYER, &tile));
        assert!(overlaps(&tile, &PLAYER));
    }
}
