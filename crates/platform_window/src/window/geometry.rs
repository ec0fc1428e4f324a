//! Window geometry tracking
//!
//! Keeps the current position and size reported by the backend, plus the
//! last geometry seen while the window was in plain windowed mode. The
//! latter is what the window returns to when leaving maximized or
//! fullscreen state.

use crate::foundation::math::{Point, Rect, Size};

/// Current and unmaximized window geometry
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GeometryTracker {
    position: Point,
    size: Size,
    maximized: bool,
    fullscreen: bool,
    unmaximized_position: Point,
    unmaximized_size: Size,
}

impl GeometryTracker {
    /// Tracker for a window currently at `current`
    ///
    /// A window that starts maximized or fullscreen has never been seen in
    /// windowed mode, so the snapshot is seeded from `windowed` instead of
    /// the current extent.
    pub const fn new(current: Rect, windowed: Rect, maximized: bool, fullscreen: bool) -> Self {
        let snapshot = if maximized || fullscreen { windowed } else { current };
        Self {
            position: current.position,
            size: current.size,
            maximized,
            fullscreen,
            unmaximized_position: snapshot.position,
            unmaximized_size: snapshot.size,
        }
    }

    /// Tracker for a window that starts windowed
    pub const fn windowed(position: Point, size: Size) -> Self {
        let rect = Rect::new(position, size);
        Self::new(rect, rect, false, false)
    }

    /// Record a new window position
    pub fn set_position(&mut self, position: Point) {
        self.position = position;
    }

    /// Record a new window size
    pub fn set_size(&mut self, size: Size) {
        self.size = size;
    }

    /// Record the maximized flag
    pub fn set_maximized(&mut self, maximized: bool) {
        self.maximized = maximized;
    }

    /// Record the fullscreen flag
    pub fn set_fullscreen(&mut self, fullscreen: bool) {
        self.fullscreen = fullscreen;
    }

    /// Copy the current geometry into the unmaximized snapshot, unless the
    /// window is maximized or fullscreen
    pub fn update_unmaximized_coords(&mut self) {
        if !self.maximized && !self.fullscreen {
            self.unmaximized_position = self.position;
            self.unmaximized_size = self.size;
        }
    }

    /// Current position
    pub const fn position(&self) -> Point {
        self.position
    }

    /// Current size
    pub const fn size(&self) -> Size {
        self.size
    }

    /// Whether the window is maximized
    pub const fn is_maximized(&self) -> bool {
        self.maximized
    }

    /// Whether the window is fullscreen
    pub const fn is_fullscreen(&self) -> bool {
        self.fullscreen
    }

    /// Position last seen in windowed mode
    pub const fn unmaximized_position(&self) -> Point {
        self.unmaximized_position
    }

    /// Size last seen in windowed mode
    pub const fn unmaximized_size(&self) -> Size {
        self.unmaximized_size
    }

    /// Geometry to restore when returning to windowed mode
    pub const fn unmaximized_rect(&self) -> Rect {
        Rect::new(self.unmaximized_position, self.unmaximized_size)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_windowed_updates_follow_latest() {
        let mut tracker = GeometryTracker::windowed(Point::new(0, 0), Size::new(800, 600));
        tracker.set_position(Point::new(40, 50));
        tracker.update_unmaximized_coords();
        tracker.set_size(Size::new(1024, 768));
        tracker.update_unmaximized_coords();

        assert_eq!(tracker.unmaximized_position(), Point::new(40, 50));
        assert_eq!(tracker.unmaximized_size(), Size::new(1024, 768));
    }

    #[test]
    fn test_maximized_keeps_previous_snapshot() {
        let mut tracker = GeometryTracker::windowed(Point::new(100, 100), Size::new(640, 480));
        tracker.set_maximized(true);
        tracker.set_position(Point::new(0, 0));
        tracker.set_size(Size::new(1920, 1080));
        tracker.update_unmaximized_coords();

        assert_eq!(tracker.size(), Size::new(1920, 1080));
        assert_eq!(
            tracker.unmaximized_rect(),
            Rect::new(Point::new(100, 100), Size::new(640, 480))
        );
    }

    #[test]
    fn test_fullscreen_keeps_previous_snapshot() {
        let mut tracker = GeometryTracker::windowed(Point::new(10, 20), Size::new(300, 200));
        tracker.set_fullscreen(true);
        tracker.set_size(Size::new(2560, 1440));
        tracker.update_unmaximized_coords();
        assert_eq!(tracker.unmaximized_size(), Size::new(300, 200));

        tracker.set_fullscreen(false);
        tracker.update_unmaximized_coords();
        assert_eq!(tracker.unmaximized_size(), Size::new(2560, 1440));
    }

    #[test]
    fn test_starting_maximized_seeds_from_windowed_geometry() {
        let display = Rect::new(Point::new(0, 0), Size::new(1920, 1080));
        let windowed = Rect::new(Point::new(0, 0), Size::new(640, 480));
        let mut tracker = GeometryTracker::new(display, windowed, true, false);

        assert_eq!(tracker.size(), Size::new(1920, 1080));
        assert_eq!(tracker.unmaximized_rect(), windowed);

        tracker.update_unmaximized_coords();
        assert_eq!(tracker.unmaximized_rect(), windowed);
    }

    #[test]
    fn test_starting_windowed_ignores_windowed_hint() {
        let current = Rect::new(Point::new(30, 40), Size::new(800, 600));
        let hint = Rect::new(Point::new(0, 0), Size::new(1, 1));
        let tracker = GeometryTracker::new(current, hint, false, false);
        assert_eq!(tracker.unmaximized_rect(), current);
    }
}
