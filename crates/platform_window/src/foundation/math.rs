//! Screen-space math types
//!
//! Window geometry and cursor coordinates are integer pixel values.

use serde::{Deserialize, Serialize};

pub use nalgebra::{Point2, Vector2};

/// Integer point in screen or client coordinates
pub type Point = Point2<i32>;

/// Integer displacement between two points
pub type Offset = Vector2<i32>;

/// Width and height in pixels
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Hash, Serialize, Deserialize)]
pub struct Size {
    /// Width in pixels
    pub width: i32,
    /// Height in pixels
    pub height: i32,
}

impl Size {
    /// Create a new size
    pub const fn new(width: i32, height: i32) -> Self {
        Self { width, height }
    }

    /// True if either dimension is zero or negative
    pub const fn is_empty(&self) -> bool {
        self.width <= 0 || self.height <= 0
    }
}

/// Position and size of a window
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rect {
    /// Top-left corner
    pub position: Point,
    /// Extent
    pub size: Size,
}

impl Rect {
    /// Create a rect from a position and a size
    pub const fn new(position: Point, size: Size) -> Self {
        Self { position, size }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_size_empty() {
        assert!(Size::new(0, 10).is_empty());
        assert!(Size::new(10, -1).is_empty());
        assert!(!Size::new(32, 32).is_empty());
    }

    #[test]
    fn test_point_difference_is_offset() {
        let a = Point::new(10, 20);
        let b = Point::new(4, 25);
        let delta: Offset = a - b;
        assert_eq!(delta, Offset::new(6, -5));
    }
}
