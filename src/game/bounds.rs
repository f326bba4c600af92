//! Integer bounds shared by every entity

/// An axis-aligned rectangle in screen pixels (y grows downward)
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Bounds {
    pub x: i32,
    pub y: i32,
    pub w: i32,
    pub h: i32,
}

impl Bounds {
    pub const fn new(x: i32, y: i32, w: i32, h: i32) -> Self {
        Self { x, y, w, h }
    }

    /// Create from screen dimensions
    pub const fn screen(width: i32, height: i32) -> Self {
        Self::new(0, 0, width, height)
    }

    /// Right edge
    pub fn right(&self) -> i32 {
        self.x + self.w
    }

    /// Bottom edge
    pub fn bottom(&self) -> i32 {
        self.y + self.h
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_edges() {
        let b = Bounds::new(10, 20, 40, 10);
        assert_eq!(b.right(), 50);
        assert_eq!(b.bottom(), 30);
    }

    #[test]
    fn test_screen() {
        assert_eq!(Bounds::screen(500, 800), Bounds::new(0, 0, 500, 800));
    }
}
