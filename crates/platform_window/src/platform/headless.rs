//! Window backend without a native window
//!
//! Keeps window state in memory and echoes every geometry change back as
//! events, the way a window manager would. Tests push native input with
//! [`HeadlessBackend::push_event`].

use std::collections::VecDeque;

use crate::assets::ImageData;
use crate::config::WindowConfig;
use crate::foundation::math::{Point, Rect, Size};
use crate::window::{PlatformEvent, WindowBackend, WindowError, WindowResult};

/// Cursor created by the headless backend
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HeadlessCursor {
    /// Image width
    pub width: u32,
    /// Image height
    pub height: u32,
    /// Hot spot inside the image
    pub hot_spot: Point,
}

/// In-memory window
#[derive(Debug)]
pub struct HeadlessBackend {
    queue: VecDeque<PlatformEvent>,
    display: Size,
    position: Point,
    size: Size,
    windowed: Rect,
    maximized: bool,
    fullscreen: bool,
    visible: bool,
    focused: bool,
    should_close: bool,
    cursor_visible: bool,
    vsync: bool,
    title: String,
    clipboard: String,
    active_cursor: Option<HeadlessCursor>,
    frames_presented: u64,
    reject_cursors: bool,
}

impl HeadlessBackend {
    /// Windowed, focused window at `position` with `size` on a 1920x1080 display
    pub fn new(position: Point, size: Size) -> Self {
        Self {
            queue: VecDeque::new(),
            display: Size::new(1920, 1080),
            position,
            size,
            windowed: Rect::new(position, size),
            maximized: false,
            fullscreen: false,
            visible: true,
            focused: true,
            should_close: false,
            cursor_visible: true,
            vsync: true,
            title: String::new(),
            clipboard: String::new(),
            active_cursor: None,
            frames_presented: 0,
            reject_cursors: false,
        }
    }

    /// Queue a native event for the next poll
    pub fn push_event(&mut self, event: PlatformEvent) {
        self.queue.push_back(event);
    }

    /// Window manager moved the window
    pub fn simulate_move(&mut self, position: Point) {
        self.position = position;
        self.queue.push_back(PlatformEvent::Moved(position));
    }

    /// Window manager resized the window
    pub fn simulate_resize(&mut self, size: Size) {
        self.size = size;
        self.queue.push_back(PlatformEvent::Resized(size));
    }

    /// Window gained or lost focus
    pub fn simulate_focus(&mut self, focused: bool) {
        self.focused = focused;
        self.queue.push_back(PlatformEvent::FocusChanged(focused));
    }

    /// Make [`WindowBackend::create_cursor`] fail
    pub fn reject_cursors(&mut self, reject: bool) {
        self.reject_cursors = reject;
    }

    /// Current title
    pub fn title(&self) -> &str {
        &self.title
    }

    /// Cursor in use, `None` for the system default
    pub const fn active_cursor(&self) -> Option<&HeadlessCursor> {
        self.active_cursor.as_ref()
    }

    /// Whether the cursor is shown
    pub const fn cursor_visible(&self) -> bool {
        self.cursor_visible
    }

    /// Whether vertical sync is on
    pub const fn vsync(&self) -> bool {
        self.vsync
    }

    /// Number of [`WindowBackend::swap_buffers`] calls
    pub const fn frames_presented(&self) -> u64 {
        self.frames_presented
    }

    fn apply_geometry(&mut self, rect: Rect) {
        if rect.position != self.position {
            self.position = rect.position;
            self.queue.push_back(PlatformEvent::Moved(rect.position));
        }
        if rect.size != self.size {
            self.size = rect.size;
            self.queue.push_back(PlatformEvent::Resized(rect.size));
        }
    }

    fn display_rect(&self) -> Rect {
        Rect::new(Point::origin(), self.display)
    }
}

impl WindowBackend for HeadlessBackend {
    type Cursor = HeadlessCursor;

    fn create(config: &WindowConfig) -> WindowResult<Self> {
        let width = i32::try_from(config.width)
            .map_err(|_| WindowError::CreationFailed(format!("width {} out of range", config.width)))?;
        let height = i32::try_from(config.height)
            .map_err(|_| WindowError::CreationFailed(format!("height {} out of range", config.height)))?;

        let mut backend = Self::new(Point::origin(), Size::new(width, height));
        backend.title.clone_from(&config.title);
        backend.vsync = config.vsync;
        if config.maximized {
            backend.maximize();
        }
        if config.fullscreen {
            backend.set_fullscreen(true, Rect::new(Point::origin(), Size::new(width, height)));
        }
        Ok(backend)
    }

    fn destroy(self) {
        log::debug!("Headless window '{}' destroyed", self.title);
    }

    fn poll_events(&mut self, events: &mut Vec<PlatformEvent>) {
        events.extend(self.queue.drain(..));
    }

    fn should_close(&self) -> bool {
        self.should_close
    }

    fn set_should_close(&mut self, should_close: bool) {
        self.should_close = should_close;
    }

    fn position(&self) -> Point {
        self.position
    }

    fn size(&self) -> Size {
        self.size
    }

    fn windowed_geometry(&self) -> Rect {
        self.windowed
    }

    fn move_to(&mut self, position: Point) {
        self.apply_geometry(Rect::new(position, self.size));
    }

    fn resize(&mut self, size: Size) {
        self.apply_geometry(Rect::new(self.position, size));
    }

    fn is_maximized(&self) -> bool {
        self.maximized
    }

    fn maximize(&mut self) {
        if self.maximized {
            return;
        }
        self.maximized = true;
        self.queue.push_back(PlatformEvent::MaximizeChanged(true));
        let display = self.display_rect();
        self.apply_geometry(display);
    }

    fn restore(&mut self, windowed: Rect) {
        if self.maximized {
            self.maximized = false;
            self.queue.push_back(PlatformEvent::MaximizeChanged(false));
        }
        self.apply_geometry(windowed);
    }

    fn is_fullscreen(&self) -> bool {
        self.fullscreen
    }

    fn set_fullscreen(&mut self, fullscreen: bool, windowed: Rect) {
        if self.fullscreen != fullscreen {
            self.fullscreen = fullscreen;
            self.queue.push_back(PlatformEvent::FullscreenChanged(fullscreen));
        }
        let target = if fullscreen { self.display_rect() } else { windowed };
        self.apply_geometry(target);
    }

    fn is_visible(&self) -> bool {
        self.visible
    }

    fn show(&mut self) {
        self.visible = true;
    }

    fn hide(&mut self) {
        self.visible = false;
    }

    fn has_focus(&self) -> bool {
        self.focused
    }

    fn set_title(&mut self, title: &str) {
        title.clone_into(&mut self.title);
    }

    fn set_cursor_visible(&mut self, visible: bool) {
        self.cursor_visible = visible;
    }

    fn create_cursor(&mut self, image: &ImageData, hot_spot: Point) -> WindowResult<Self::Cursor> {
        if self.reject_cursors {
            return Err(WindowError::CursorCreationFailed("cursor creation disabled".to_string()));
        }
        Ok(HeadlessCursor {
            width: image.width,
            height: image.height,
            hot_spot,
        })
    }

    fn set_cursor(&mut self, cursor: Option<&Self::Cursor>) {
        self.active_cursor = cursor.cloned();
    }

    fn swap_buffers(&mut self) {
        self.frames_presented += 1;
    }

    fn set_vertical_sync(&mut self, enabled: bool) {
        self.vsync = enabled;
    }

    fn clipboard_text(&self) -> String {
        self.clipboard.clone()
    }

    fn set_clipboard_text(&mut self, text: &str) {
        text.clone_into(&mut self.clipboard);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_create_from_config() {
        let config = WindowConfig {
            title: "Headless".to_string(),
            width: 320,
            height: 240,
            maximized: true,
            ..WindowConfig::default()
        };
        let mut backend = HeadlessBackend::create(&config).unwrap();
        assert_eq!(backend.title(), "Headless");
        assert!(backend.is_maximized());
        assert_eq!(backend.size(), Size::new(1920, 1080));
        assert_eq!(
            backend.windowed_geometry(),
            Rect::new(Point::origin(), Size::new(320, 240))
        );

        let mut events = Vec::new();
        backend.poll_events(&mut events);
        assert_eq!(events[0], PlatformEvent::MaximizeChanged(true));
    }

    #[test]
    fn test_geometry_changes_are_echoed() {
        let mut backend = HeadlessBackend::new(Point::new(0, 0), Size::new(100, 100));
        backend.move_to(Point::new(5, 5));
        backend.resize(Size::new(100, 100));

        let mut events = Vec::new();
        backend.poll_events(&mut events);
        assert_eq!(events, vec![PlatformEvent::Moved(Point::new(5, 5))]);
    }

    #[test]
    fn test_fullscreen_change_precedes_geometry() {
        let mut backend = HeadlessBackend::new(Point::new(10, 10), Size::new(100, 100));
        let windowed = Rect::new(Point::new(10, 10), Size::new(100, 100));
        backend.set_fullscreen(true, windowed);
        backend.set_fullscreen(true, windowed);

        let mut events = Vec::new();
        backend.poll_events(&mut events);
        assert_eq!(
            events,
            vec![
                PlatformEvent::FullscreenChanged(true),
                PlatformEvent::Moved(Point::origin()),
                PlatformEvent::Resized(Size::new(1920, 1080)),
            ]
        );
    }
}
