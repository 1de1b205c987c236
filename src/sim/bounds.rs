//! Axis-aligned rectangles in field space
//!
//! Field space has its origin at the top-left corner of the play field,
//! `x` grows rightward and `y` grows downward.

use glam::Vec2;
use serde::{Deserialize, Serialize};

/// An axis-aligned bounding box
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Bounds {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

impl Bounds {
    pub fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// Build from a top-left corner and a size
    #[inline]
    pub fn from_pos_size(pos: Vec2, size: Vec2) -> Self {
        Self::new(pos.x, pos.y, size.x, size.y)
    }

    /// Top-left corner
    #[inline]
    pub fn min(&self) -> Vec2 {
        Vec2::new(self.x, self.y)
    }

    /// Bottom-right corner
    #[inline]
    pub fn max(&self) -> Vec2 {
        Vec2::new(self.x + self.width, self.y + self.height)
    }

    #[inline]
    pub fn right(&self) -> f32 {
        self.x + self.width
    }

    #[inline]
    pub fn bottom(&self) -> f32 {
        self.y + self.height
    }

    pub fn center(&self) -> Vec2 {
        (self.min() + self.max()) * 0.5
    }

    /// Shrink by `padding` on all four sides
    ///
    /// Returns `None` when the remaining box has no area, so that callers
    /// cannot mistake a collapsed hitbox for a real one.
    pub fn shrink(&self, padding: f32) -> Option<Bounds> {
        let width = self.width - padding * 2.0;
        let height = self.height - padding * 2.0;
        if width <= 0.0 || height <= 0.0 {
            return None;
        }
        Some(Bounds::new(self.x + padding, self.y + padding, width, height))
    }

    /// Strict overlap test: shared edges do not count
    #[inline]
    pub fn overlaps(&self, other: &Bounds) -> bool {
        self.x < other.right()
            && self.right() > other.x
            && self.y < other.bottom()
            && self.bottom() > other.y
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_shrink() {
        let b = Bounds::new(0.0, 0.0, 200.0, 200.0);
        assert_eq!(b.shrink(40.0), Some(Bounds::new(40.0, 40.0, 120.0, 120.0)));
    }

    #[test]
    fn test_shrink_degenerate() {
        let b = Bounds::new(10.0, 10.0, 80.0, 300.0);
        assert_eq!(b.shrink(40.0), None);
        assert_eq!(b.shrink(50.0), None);
        assert!(b.shrink(39.0).is_some());
    }

    #[test]
    fn test_touching_edges_do_not_overlap() {
        let a = Bounds::new(0.0, 0.0, 100.0, 100.0);
        let right = Bounds::new(100.0, 0.0, 100.0, 100.0);
        let below = Bounds::new(0.0, 100.0, 100.0, 100.0);
        assert!(!a.overlaps(&right));
        assert!(!a.overlaps(&below));
        assert!(a.overlaps(&Bounds::new(99.5, 99.5, 10.0, 10.0)));
    }

    #[test]
    fn test_center() {
        let b = Bounds::new(10.0, 20.0, 100.0, 50.0);
        assert_eq!(b.center(), Vec2::new(60.0, 45.0));
        assert_eq!(b.max(), Vec2::new(110.0, 70.0));
    }
}
