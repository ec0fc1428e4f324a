//! Backend-agnostic window management trait
//!
//! This module defines the contract every platform backend implements. The
//! backend owns the native window and its event pump; it translates native
//! input into [`PlatformEvent`] values and leaves all keyboard state,
//! modifier tracking and auto-repeat to the shared input processor.
//!
//! The backend is a type parameter of [`PlatformWindow`](super::PlatformWindow),
//! not a trait object. Exactly one backend is active per build target, chosen
//! in [`crate::platform`].

use thiserror::Error;

use crate::assets::ImageData;
use crate::config::WindowConfig;
use crate::foundation::math::{Point, Rect, Size};
use crate::input::{Key, MouseButton, WheelDirection};

/// Window management errors
#[derive(Error, Debug)]
pub enum WindowError {
    /// Platform windowing library failed to start
    #[error("Window system initialization failed: {0}")]
    InitializationFailed(String),

    /// Native window could not be created
    #[error("Window creation failed: {0}")]
    CreationFailed(String),

    /// Native cursor could not be created
    #[error("Cursor creation failed: {0}")]
    CursorCreationFailed(String),

    /// The backend cannot do this on the current platform
    #[error("Operation not supported by this backend: {0}")]
    Unsupported(&'static str),
}

/// Result alias for window operations
pub type WindowResult<T> = Result<T, WindowError>;

/// Native event after translation to shared key and button codes
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PlatformEvent {
    /// Key went down (OS auto-repeat included)
    KeyDown(Key),
    /// Key went up
    KeyUp(Key),
    /// Committed text
    Text(String),
    /// Mouse button changed state
    MouseButton {
        /// Which button
        button: MouseButton,
        /// Down or up
        pressed: bool,
    },
    /// Cursor moved, client coordinates
    MouseMoved(Point),
    /// Wheel scrolled
    MouseWheel(WheelDirection),
    /// Window moved, screen coordinates
    Moved(Point),
    /// Client area resized
    Resized(Size),
    /// Window was maximized or restored by the window manager
    MaximizeChanged(bool),
    /// Window entered or left fullscreen
    FullscreenChanged(bool),
    /// Window gained or lost input focus
    FocusChanged(bool),
    /// User asked to close the window
    CloseRequested,
}

/// Capability set of a native window
///
/// Every platform backend implements this trait. [`PlatformWindow`](super::PlatformWindow)
/// drives it once per frame and layers the shared input and geometry logic on
/// top, so a backend only has to translate and report.
///
/// # Design Philosophy
/// - **Report, don't interpret**: native input is translated into
///   [`PlatformEvent`]s and delivered through [`WindowBackend::poll_events`].
///   Backends never touch key state, modifiers or auto-repeat.
/// - **Events in native order**: state changes (maximize, fullscreen) are
///   queued in the same stream as the geometry events they cause, so the
///   consumer can tell which moves happened while the window was windowed.
/// - **Live queries**: geometry and state getters return the current native
///   state, which may be ahead of the events not yet polled.
/// - **Static dispatch**: the backend is a type parameter, never a trait
///   object.
///
/// # Thread Safety
/// Backends are not `Send`. Most native window APIs must be driven from the
/// thread that created the window.
pub trait WindowBackend: Sized {
    /// Native cursor object created by [`WindowBackend::create_cursor`]
    type Cursor;

    /// Create the native window and rendering surface
    ///
    /// Honors the size, title, vsync, maximized and fullscreen settings of
    /// `config`. State changes made during creation may already be queued as
    /// events for the first poll.
    fn create(config: &WindowConfig) -> WindowResult<Self>;

    /// Destroy the native window and rendering surface
    fn destroy(self);

    /// Pump the native event queue, appending translated events to `events`
    ///
    /// Events are appended in the order the platform produced them. Native
    /// codes with no shared equivalent are reported as [`Key::Unknown`] or
    /// dropped. This should be called once per frame; it never blocks.
    fn poll_events(&mut self, events: &mut Vec<PlatformEvent>);

    /// Whether closing was requested by the user or the application
    fn should_close(&self) -> bool;

    /// Request or cancel closing
    fn set_should_close(&mut self, should_close: bool);

    /// Window position on screen
    fn position(&self) -> Point;

    /// Client area size
    fn size(&self) -> Size;

    /// Geometry the window was created with in windowed mode
    ///
    /// A window created maximized or fullscreen has no windowed position or
    /// size of its own yet. This is where leaving that state should take it
    /// until the window has been seen windowed.
    fn windowed_geometry(&self) -> Rect;

    /// Move the window
    fn move_to(&mut self, position: Point);

    /// Resize the client area
    fn resize(&mut self, size: Size);

    /// Whether the window is maximized
    fn is_maximized(&self) -> bool;

    /// Maximize the window
    ///
    /// The change is reported as [`PlatformEvent::MaximizeChanged`] ahead of
    /// the geometry events it causes.
    fn maximize(&mut self);

    /// Leave maximized state and return to `windowed`
    fn restore(&mut self, windowed: Rect);

    /// Whether the window covers a whole display
    fn is_fullscreen(&self) -> bool;

    /// Enter fullscreen, or leave it returning to `windowed`
    ///
    /// The change is reported as [`PlatformEvent::FullscreenChanged`] ahead
    /// of the geometry events it causes. Platforms without fullscreen control
    /// ignore the request.
    fn set_fullscreen(&mut self, fullscreen: bool, windowed: Rect);

    /// Whether the window is shown
    fn is_visible(&self) -> bool;

    /// Show the window
    fn show(&mut self);

    /// Hide the window
    fn hide(&mut self);

    /// Whether the window has keyboard focus
    fn has_focus(&self) -> bool;

    /// Set the title bar text
    fn set_title(&mut self, title: &str);

    /// Show or hide the mouse cursor over the window
    fn set_cursor_visible(&mut self, visible: bool);

    /// Create a native cursor from a validated 32x32 RGBA image
    ///
    /// The image has already passed the channel and dimension checks, so
    /// backends only convert pixels. `hot_spot` is relative to the image's
    /// top-left corner. Platforms without custom cursors return
    /// [`WindowError::Unsupported`].
    fn create_cursor(&mut self, image: &ImageData, hot_spot: Point) -> WindowResult<Self::Cursor>;

    /// Use `cursor` over the window, or the system default for `None`
    fn set_cursor(&mut self, cursor: Option<&Self::Cursor>);

    /// Present the back buffer
    fn swap_buffers(&mut self);

    /// Turn vertical sync on or off
    fn set_vertical_sync(&mut self, enabled: bool);

    /// Current clipboard text, empty when unavailable
    fn clipboard_text(&self) -> String;

    /// Replace the clipboard text
    fn set_clipboard_text(&mut self, text: &str);
}
