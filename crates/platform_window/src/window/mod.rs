//! Window abstraction
//!
//! [`PlatformWindow`] is what applications hold. It drives one
//! [`WindowBackend`] and owns the geometry tracker and cursor registry.

pub mod backend;
pub mod cursor;
pub mod geometry;
pub mod platform_window;

pub use backend::{PlatformEvent, WindowBackend, WindowError, WindowResult};
pub use cursor::{CursorError, CursorId, FormatViolation, CURSOR_CHANNELS, CURSOR_SIZE};
pub use geometry::GeometryTracker;
pub use platform_window::{CloseHandler, PlatformWindow, ResizeHandler};
