//! The application-facing window
//!
//! [`PlatformWindow`] ties one native backend to the shared input processor,
//! the geometry tracker and the cursor registry. The application calls
//! [`PlatformWindow::poll`] once per frame; everything else happens
//! synchronously inside that call on the calling thread.

use std::path::Path;

use slotmap::SlotMap;

use super::backend::{PlatformEvent, WindowBackend, WindowResult};
use super::cursor::{self, CursorError, CursorId};
use super::geometry::GeometryTracker;
use crate::assets::{FileImageLoader, ImageLoader};
use crate::config::{InputConfig, WindowConfig};
use crate::foundation::math::{Point, Rect, Size};
use crate::foundation::time::{Clock, SystemClock, Ticks};
use crate::input::{InputEvent, InputProcessor, Key, KeyboardModifiers, MouseButton, MouseButtons};
use crate::platform::ActiveBackend;

/// Callback run after the client area is resized
pub type ResizeHandler = Box<dyn FnMut(Size)>;

/// Callback run when the user asks to close the window
pub type CloseHandler = Box<dyn FnMut()>;

/// Native window plus normalized input handling
pub struct PlatformWindow<B: WindowBackend = ActiveBackend> {
    backend: B,
    input: InputProcessor,
    geometry: GeometryTracker,
    cursors: SlotMap<CursorId, B::Cursor>,
    cursor_stack: Vec<CursorId>,
    image_loader: Box<dyn ImageLoader>,
    on_resize: Option<ResizeHandler>,
    on_close: Option<CloseHandler>,
    pending: Vec<PlatformEvent>,
    release_keys_on_focus_loss: bool,
}

impl<B: WindowBackend> PlatformWindow<B> {
    /// Create the native window described by `config`
    pub fn new(config: &WindowConfig) -> WindowResult<Self> {
        let backend = B::create(config)?;
        log::info!(
            "Created window '{}' ({}x{})",
            config.title,
            config.width,
            config.height
        );
        Ok(Self::with_backend(backend, &config.input, Box::new(SystemClock::new())))
    }

    /// Wrap an existing backend, reading time from `clock`
    pub fn with_backend(backend: B, input: &InputConfig, clock: Box<dyn Clock>) -> Self {
        let geometry = GeometryTracker::new(
            Rect::new(backend.position(), backend.size()),
            backend.windowed_geometry(),
            backend.is_maximized(),
            backend.is_fullscreen(),
        );

        Self {
            backend,
            input: InputProcessor::new(input, clock),
            geometry,
            cursors: SlotMap::with_key(),
            cursor_stack: Vec::new(),
            image_loader: Box::new(FileImageLoader),
            on_resize: None,
            on_close: None,
            pending: Vec::new(),
            release_keys_on_focus_loss: input.release_keys_on_focus_loss,
        }
    }

    /// Destroy the native window
    pub fn destroy(self) {
        log::info!("Destroying window");
        self.backend.destroy();
    }

    /// Replace the image service used by [`PlatformWindow::load_mouse_cursor`]
    pub fn set_image_loader(&mut self, loader: Box<dyn ImageLoader>) {
        self.image_loader = loader;
    }

    /// Backend access, for platform glue that feeds native events
    pub const fn backend(&self) -> &B {
        &self.backend
    }

    /// Mutable backend access
    pub fn backend_mut(&mut self) -> &mut B {
        &mut self.backend
    }

    // ----- event pump -----

    /// Process all pending native events, then run the auto-repeat engine
    pub fn poll(&mut self) {
        self.pump_events();
        self.input.fire_keys_press();
    }

    fn pump_events(&mut self) {
        let mut events = std::mem::take(&mut self.pending);
        self.backend.poll_events(&mut events);
        for event in events.drain(..) {
            self.handle_platform_event(event);
        }
        self.pending = events;
    }

    fn handle_platform_event(&mut self, event: PlatformEvent) {
        match event {
            PlatformEvent::KeyDown(key) => self.input.process_key_down(key),
            PlatformEvent::KeyUp(key) => self.input.process_key_up(key),
            PlatformEvent::Text(text) => self.input.process_text_input(&text),
            PlatformEvent::MouseButton { button, pressed } => {
                self.input.process_mouse_button(button, pressed);
            }
            PlatformEvent::MouseMoved(pos) => self.input.process_mouse_move(pos),
            PlatformEvent::MouseWheel(direction) => self.input.process_mouse_wheel(direction),
            PlatformEvent::Moved(position) => {
                self.geometry.set_position(position);
                self.geometry.update_unmaximized_coords();
            }
            PlatformEvent::Resized(size) => {
                self.geometry.set_size(size);
                self.geometry.update_unmaximized_coords();
                if let Some(on_resize) = self.on_resize.as_mut() {
                    on_resize(size);
                }
            }
            PlatformEvent::MaximizeChanged(maximized) => {
                log::debug!("Window maximized: {}", maximized);
                self.geometry.set_maximized(maximized);
            }
            PlatformEvent::FullscreenChanged(fullscreen) => {
                log::debug!("Window fullscreen: {}", fullscreen);
                self.geometry.set_fullscreen(fullscreen);
            }
            PlatformEvent::FocusChanged(focused) => {
                log::debug!("Window focus: {}", focused);
                if !focused && self.release_keys_on_focus_loss {
                    self.input.release_all_keys();
                }
            }
            PlatformEvent::CloseRequested => {
                if let Some(on_close) = self.on_close.as_mut() {
                    on_close();
                }
            }
        }
    }

    // ----- callbacks -----

    /// Install the application input handler, replacing any previous one
    pub fn set_input_handler(&mut self, handler: impl FnMut(&InputEvent) + 'static) {
        self.input.set_input_handler(handler);
    }

    /// Remove the application input handler
    pub fn clear_input_handler(&mut self) {
        self.input.clear_input_handler();
    }

    /// Run `handler` after every resize
    pub fn set_on_resize(&mut self, handler: impl FnMut(Size) + 'static) {
        self.on_resize = Some(Box::new(handler));
    }

    /// Run `handler` when the user asks to close the window
    pub fn set_on_close(&mut self, handler: impl FnMut() + 'static) {
        self.on_close = Some(Box::new(handler));
    }

    // ----- input -----

    /// Shared input state machine
    pub const fn input(&self) -> &InputProcessor {
        &self.input
    }

    /// Mutable input state machine, for glue that injects input directly
    pub fn input_mut(&mut self) -> &mut InputProcessor {
        &mut self.input
    }

    /// Set the auto-repeat delay of one key
    pub fn set_key_delay(&mut self, key: Key, delay: Ticks) {
        self.input.set_key_delay(key, delay);
    }

    /// Whether `key` is held
    pub const fn is_key_pressed(&self, key: Key) -> bool {
        self.input.is_key_pressed(key)
    }

    /// Whether `button` is held
    pub const fn is_mouse_button_pressed(&self, button: MouseButton) -> bool {
        self.input.is_mouse_button_pressed(button)
    }

    /// Modifiers currently held
    pub const fn keyboard_modifiers(&self) -> KeyboardModifiers {
        self.input.keyboard_modifiers()
    }

    /// Mouse buttons currently held
    pub const fn mouse_buttons(&self) -> MouseButtons {
        self.input.mouse_buttons()
    }

    /// Last reported cursor position
    pub const fn mouse_position(&self) -> Point {
        self.input.mouse_position()
    }

    /// Release every held key and mouse button
    pub fn release_all_keys(&mut self) {
        self.input.release_all_keys();
    }

    // ----- geometry -----

    /// Window position
    pub const fn position(&self) -> Point {
        self.geometry.position()
    }

    /// Client area size
    pub const fn size(&self) -> Size {
        self.geometry.size()
    }

    /// Position last seen in windowed mode
    pub const fn unmaximized_position(&self) -> Point {
        self.geometry.unmaximized_position()
    }

    /// Size last seen in windowed mode
    pub const fn unmaximized_size(&self) -> Size {
        self.geometry.unmaximized_size()
    }

    /// Whether the window is maximized
    pub fn is_maximized(&self) -> bool {
        self.backend.is_maximized()
    }

    /// Whether the window is fullscreen
    pub fn is_fullscreen(&self) -> bool {
        self.backend.is_fullscreen()
    }

    /// Move the window
    pub fn move_to(&mut self, position: Point) {
        self.backend.move_to(position);
    }

    /// Resize the client area
    pub fn resize(&mut self, size: Size) {
        self.backend.resize(size);
    }

    /// Maximize the window
    ///
    /// The geometry tracker follows once the backend reports the change.
    pub fn maximize(&mut self) {
        self.backend.maximize();
    }

    /// Leave maximized state, returning to the last windowed geometry
    ///
    /// Native events still queued are processed first so that moves made
    /// before maximizing are part of the restored geometry.
    pub fn restore(&mut self) {
        self.pump_events();
        self.backend.restore(self.geometry.unmaximized_rect());
    }

    /// Enter or leave fullscreen; leaving returns to the last windowed geometry
    pub fn set_fullscreen(&mut self, fullscreen: bool) {
        if self.backend.is_fullscreen() == fullscreen {
            return;
        }
        if !fullscreen {
            self.pump_events();
        }
        self.backend
            .set_fullscreen(fullscreen, self.geometry.unmaximized_rect());
    }

    // ----- presentation -----

    /// Whether the window is shown
    pub fn is_visible(&self) -> bool {
        self.backend.is_visible()
    }

    /// Show the window
    pub fn show(&mut self) {
        self.backend.show();
    }

    /// Hide the window
    pub fn hide(&mut self) {
        self.backend.hide();
    }

    /// Whether the window has keyboard focus
    pub fn has_focus(&self) -> bool {
        self.backend.has_focus()
    }

    /// Set the title bar text
    pub fn set_title(&mut self, title: &str) {
        self.backend.set_title(title);
    }

    /// Present the back buffer
    pub fn swap_buffers(&mut self) {
        self.backend.swap_buffers();
    }

    /// Turn vertical sync on or off
    pub fn set_vertical_sync(&mut self, enabled: bool) {
        self.backend.set_vertical_sync(enabled);
    }

    /// Current clipboard text
    pub fn clipboard_text(&self) -> String {
        self.backend.clipboard_text()
    }

    /// Replace the clipboard text
    pub fn set_clipboard_text(&mut self, text: &str) {
        self.backend.set_clipboard_text(text);
    }

    /// Whether closing was requested
    pub fn should_close(&self) -> bool {
        self.backend.should_close()
    }

    /// Request or cancel closing
    pub fn set_should_close(&mut self, should_close: bool) {
        self.backend.set_should_close(should_close);
    }

    // ----- cursors -----

    /// Load a 32x32 RGBA image as a cursor
    ///
    /// On failure nothing native is created and the active cursor is left
    /// as it was.
    pub fn load_mouse_cursor(
        &mut self,
        file: impl AsRef<Path>,
        hot_spot: Point,
    ) -> Result<CursorId, CursorError> {
        let path = file.as_ref();
        let image = cursor::load_cursor_image(self.image_loader.as_ref(), path)?;

        let native = self
            .backend
            .create_cursor(&image, hot_spot)
            .map_err(|source| {
                let err = CursorError::Platform {
                    path: path.to_path_buf(),
                    source,
                };
                log::error!("{}", err);
                err
            })?;

        Ok(self.cursors.insert(native))
    }

    /// Number of cursors loaded
    pub fn cursor_count(&self) -> usize {
        self.cursors.len()
    }

    /// Make a loaded cursor active, remembering the previous one
    ///
    /// Returns `false` for an unknown id.
    pub fn set_mouse_cursor(&mut self, id: CursorId) -> bool {
        let Some(native) = self.cursors.get(id) else {
            log::warn!("Unknown cursor id {:?}", id);
            return false;
        };
        self.backend.set_cursor(Some(native));
        self.cursor_stack.push(id);
        true
    }

    /// Go back to the cursor active before the last
    /// [`PlatformWindow::set_mouse_cursor`]
    pub fn restore_mouse_cursor(&mut self) {
        if self.cursor_stack.pop().is_none() {
            return;
        }
        let previous = self
            .cursor_stack
            .last()
            .and_then(|id| self.cursors.get(*id));
        self.backend.set_cursor(previous);
    }

    /// Show the mouse cursor
    pub fn show_mouse(&mut self) {
        self.backend.set_cursor_visible(true);
    }

    /// Hide the mouse cursor
    pub fn hide_mouse(&mut self) {
        self.backend.set_cursor_visible(false);
    }
}

impl<B: WindowBackend + std::fmt::Debug> std::fmt::Debug for PlatformWindow<B> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PlatformWindow")
            .field("backend", &self.backend)
            .field("input", &self.input)
            .field("geometry", &self.geometry)
            .field("cursors", &self.cursors.len())
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::assets::{AssetError, ImageData};
    use crate::config::AltModifierKey;
    use crate::foundation::time::ManualClock;
    use crate::input::{InputEventType, WheelDirection};
    use crate::platform::headless::HeadlessBackend;
    use std::cell::{Cell, RefCell};
    use std::collections::HashMap;
    use std::path::PathBuf;
    use std::rc::Rc;

    type Log = Rc<RefCell<Vec<InputEvent>>>;

    struct MemoryLoader(HashMap<PathBuf, ImageData>);

    impl ImageLoader for MemoryLoader {
        fn load(&self, path: &Path) -> Result<ImageData, AssetError> {
            self.0
                .get(path)
                .cloned()
                .ok_or_else(|| AssetError::LoadFailed(path.display().to_string()))
        }
    }

    fn cursor_images() -> MemoryLoader {
        let mut images = HashMap::new();
        images.insert(PathBuf::from("arrow.png"), ImageData::solid_color(32, 32, &[255, 255, 255, 255]));
        images.insert(PathBuf::from("hand.png"), ImageData::solid_color(32, 32, &[0, 0, 0, 255]));
        images.insert(PathBuf::from("small.png"), ImageData::solid_color(16, 16, &[0, 0, 0, 255]));
        images.insert(PathBuf::from("rgb.png"), ImageData::solid_color(32, 32, &[0, 0, 0]));
        MemoryLoader(images)
    }

    fn window() -> (PlatformWindow<HeadlessBackend>, ManualClock, Log) {
        let clock = ManualClock::new(1_000);
        let config = InputConfig {
            alt_modifier_key: AltModifierKey::Alt,
            ..InputConfig::default()
        };
        let backend = HeadlessBackend::new(Point::new(100, 100), Size::new(800, 600));
        let mut window = PlatformWindow::with_backend(backend, &config, Box::new(clock.clone()));
        window.set_image_loader(Box::new(cursor_images()));

        let log: Log = Rc::default();
        let sink = log.clone();
        window.set_input_handler(move |event| sink.borrow_mut().push(event.clone()));
        (window, clock, log)
    }

    fn kinds(log: &Log) -> Vec<InputEventType> {
        log.borrow().iter().map(|e| e.kind).collect()
    }

    #[test]
    fn test_poll_delivers_events_in_order() {
        let (mut window, _, log) = window();
        let backend = window.backend_mut();
        backend.push_event(PlatformEvent::KeyDown(Key::A));
        backend.push_event(PlatformEvent::MouseMoved(Point::new(10, 20)));
        backend.push_event(PlatformEvent::MouseWheel(WheelDirection::Down));
        backend.push_event(PlatformEvent::Text("a".to_string()));
        backend.push_event(PlatformEvent::KeyUp(Key::A));
        window.poll();

        assert_eq!(
            kinds(&log),
            vec![
                InputEventType::KeyDown,
                InputEventType::KeyPress,
                InputEventType::MouseMove,
                InputEventType::MouseWheel,
                InputEventType::KeyText,
                InputEventType::KeyUp,
            ]
        );
        assert_eq!(log.borrow()[4].key_text, "a");
        assert_eq!(window.mouse_position(), Point::new(10, 20));
    }

    #[test]
    fn test_repeat_fires_from_poll() {
        let (mut window, clock, log) = window();
        window.backend_mut().push_event(PlatformEvent::KeyDown(Key::Space));
        window.poll();
        assert_eq!(log.borrow().len(), 2);

        clock.advance(20);
        window.poll();
        assert_eq!(log.borrow().len(), 2);

        clock.advance(10);
        window.poll();
        let events = log.borrow();
        assert_eq!(events.len(), 3);
        assert_eq!(events[2].kind, InputEventType::KeyPress);
        assert_eq!(events[2].key_code, Key::Space);
        assert_eq!(events[2].auto_repeat_ticks, 30);
    }

    #[test]
    fn test_key_delay_applies_to_repeat() {
        let (mut window, clock, log) = window();
        window.set_key_delay(Key::Up, 100);
        window.backend_mut().push_event(PlatformEvent::KeyDown(Key::Up));
        window.poll();

        clock.advance(50);
        window.poll();
        assert_eq!(log.borrow().len(), 2);

        clock.advance(50);
        window.poll();
        assert_eq!(log.borrow().len(), 3);
    }

    #[test]
    fn test_focus_loss_releases_everything() {
        let (mut window, _, log) = window();
        let backend = window.backend_mut();
        backend.push_event(PlatformEvent::KeyDown(Key::Shift));
        backend.push_event(PlatformEvent::KeyDown(Key::D));
        backend.push_event(PlatformEvent::MouseButton {
            button: MouseButton::Left,
            pressed: true,
        });
        window.poll();
        assert!(window.keyboard_modifiers().contains(KeyboardModifiers::SHIFT));
        assert!(window.is_mouse_button_pressed(MouseButton::Left));

        log.borrow_mut().clear();
        window.backend_mut().simulate_focus(false);
        window.poll();

        assert_eq!(kinds(&log), vec![InputEventType::KeyUp]);
        assert_eq!(log.borrow()[0].key_code, Key::D);
        assert!(!window.is_key_pressed(Key::D));
        assert!(window.keyboard_modifiers().is_empty());
        assert!(window.mouse_buttons().is_empty());
    }

    #[test]
    fn test_focus_loss_can_keep_keys() {
        let clock = ManualClock::new(0);
        let config = InputConfig {
            release_keys_on_focus_loss: false,
            ..InputConfig::default()
        };
        let backend = HeadlessBackend::new(Point::origin(), Size::new(640, 480));
        let mut window = PlatformWindow::with_backend(backend, &config, Box::new(clock));
        window.backend_mut().push_event(PlatformEvent::KeyDown(Key::D));
        window.backend_mut().simulate_focus(false);
        window.poll();
        assert!(window.is_key_pressed(Key::D));
    }

    #[test]
    fn test_windowed_moves_update_snapshot() {
        let (mut window, _, _) = window();
        window.backend_mut().simulate_move(Point::new(50, 60));
        window.backend_mut().simulate_resize(Size::new(1024, 768));
        window.poll();

        assert_eq!(window.position(), Point::new(50, 60));
        assert_eq!(window.unmaximized_position(), Point::new(50, 60));
        assert_eq!(window.unmaximized_size(), Size::new(1024, 768));
    }

    #[test]
    fn test_maximize_keeps_snapshot_and_restore_uses_it() {
        let (mut window, _, _) = window();
        window.maximize();
        window.poll();

        assert!(window.is_maximized());
        assert_eq!(window.size(), Size::new(1920, 1080));
        assert_eq!(window.unmaximized_position(), Point::new(100, 100));
        assert_eq!(window.unmaximized_size(), Size::new(800, 600));

        window.restore();
        window.poll();

        assert!(!window.is_maximized());
        assert_eq!(window.position(), Point::new(100, 100));
        assert_eq!(window.size(), Size::new(800, 600));
    }

    #[test]
    fn test_created_maximized_restores_to_configured_size() {
        let config = WindowConfig {
            width: 640,
            height: 480,
            maximized: true,
            ..WindowConfig::default()
        };
        let backend = HeadlessBackend::create(&config).unwrap();
        let mut window =
            PlatformWindow::with_backend(backend, &config.input, Box::new(ManualClock::new(0)));
        window.poll();

        assert!(window.is_maximized());
        assert_eq!(window.size(), Size::new(1920, 1080));
        assert_eq!(window.unmaximized_size(), Size::new(640, 480));

        window.restore();
        window.poll();

        assert!(!window.is_maximized());
        assert_eq!(window.size(), Size::new(640, 480));
        assert_eq!(window.unmaximized_position(), Point::origin());
    }

    #[test]
    fn test_created_fullscreen_leaves_to_configured_size() {
        let config = WindowConfig {
            width: 1024,
            height: 768,
            fullscreen: true,
            ..WindowConfig::default()
        };
        let backend = HeadlessBackend::create(&config).unwrap();
        let mut window =
            PlatformWindow::with_backend(backend, &config.input, Box::new(ManualClock::new(0)));
        window.poll();
        assert_eq!(window.unmaximized_size(), Size::new(1024, 768));

        window.set_fullscreen(false);
        window.poll();
        assert_eq!(window.size(), Size::new(1024, 768));
    }

    #[test]
    fn test_move_before_maximize_in_same_poll_is_kept() {
        let (mut window, _, _) = window();
        window.backend_mut().simulate_move(Point::new(50, 60));
        window.maximize();
        window.poll();

        assert!(window.is_maximized());
        assert_eq!(window.position(), Point::origin());
        assert_eq!(window.unmaximized_position(), Point::new(50, 60));

        window.restore();
        window.poll();
        assert_eq!(window.position(), Point::new(50, 60));
        assert_eq!(window.size(), Size::new(800, 600));
    }

    #[test]
    fn test_restore_picks_up_unpolled_moves() {
        let (mut window, _, _) = window();
        window.backend_mut().simulate_resize(Size::new(500, 400));
        window.maximize();
        window.restore();
        window.poll();

        assert!(!window.is_maximized());
        assert_eq!(window.size(), Size::new(500, 400));
        assert_eq!(window.unmaximized_size(), Size::new(500, 400));
    }

    #[test]
    fn test_move_before_fullscreen_in_same_poll_is_kept() {
        let (mut window, _, _) = window();
        window.backend_mut().simulate_move(Point::new(70, 80));
        window.set_fullscreen(true);
        window.poll();
        assert_eq!(window.unmaximized_position(), Point::new(70, 80));

        window.set_fullscreen(false);
        window.poll();
        assert_eq!(window.position(), Point::new(70, 80));
    }

    #[test]
    fn test_fullscreen_round_trip() {
        let (mut window, _, _) = window();
        window.set_fullscreen(true);
        window.poll();
        assert!(window.is_fullscreen());
        assert_eq!(window.size(), Size::new(1920, 1080));
        assert_eq!(window.unmaximized_size(), Size::new(800, 600));

        window.set_fullscreen(false);
        window.poll();
        assert!(!window.is_fullscreen());
        assert_eq!(window.position(), Point::new(100, 100));
        assert_eq!(window.size(), Size::new(800, 600));
    }

    #[test]
    fn test_resize_and_close_callbacks() {
        let (mut window, _, _) = window();
        let resized = Rc::new(Cell::new(Size::default()));
        let closed = Rc::new(Cell::new(false));
        let resized_sink = resized.clone();
        let closed_sink = closed.clone();
        window.set_on_resize(move |size| resized_sink.set(size));
        window.set_on_close(move || closed_sink.set(true));

        window.backend_mut().simulate_resize(Size::new(300, 200));
        window.backend_mut().push_event(PlatformEvent::CloseRequested);
        window.poll();

        assert_eq!(resized.get(), Size::new(300, 200));
        assert!(closed.get());
    }

    #[test]
    fn test_cursor_with_wrong_dimensions_is_rejected() {
        let (mut window, _, _) = window();
        let err = window
            .load_mouse_cursor("small.png", Point::origin())
            .unwrap_err();
        assert!(matches!(
            err,
            CursorError::Format {
                violation: cursor::FormatViolation::Dimensions { width: 16, height: 16 },
                ..
            }
        ));
        assert_eq!(window.cursor_count(), 0);
        assert!(window.backend().active_cursor().is_none());
    }

    #[test]
    fn test_cursor_without_alpha_is_rejected() {
        let (mut window, _, _) = window();
        let err = window.load_mouse_cursor("rgb.png", Point::origin()).unwrap_err();
        assert!(matches!(
            err,
            CursorError::Format {
                violation: cursor::FormatViolation::Channels { found: 3 },
                ..
            }
        ));
        assert_eq!(window.cursor_count(), 0);
    }

    #[test]
    fn test_missing_cursor_file() {
        let (mut window, _, _) = window();
        let err = window.load_mouse_cursor("nope.png", Point::origin()).unwrap_err();
        assert!(matches!(err, CursorError::Load { .. }));
        assert_eq!(window.cursor_count(), 0);
    }

    #[test]
    fn test_native_cursor_failure() {
        let (mut window, _, _) = window();
        window.backend_mut().reject_cursors(true);
        let err = window.load_mouse_cursor("arrow.png", Point::origin()).unwrap_err();
        assert!(matches!(err, CursorError::Platform { .. }));
        assert_eq!(window.cursor_count(), 0);
    }

    #[test]
    fn test_cursor_stack() {
        let (mut window, _, _) = window();
        let arrow = window.load_mouse_cursor("arrow.png", Point::new(0, 0)).unwrap();
        let hand = window.load_mouse_cursor("hand.png", Point::new(8, 2)).unwrap();
        assert_eq!(window.cursor_count(), 2);

        assert!(window.set_mouse_cursor(arrow));
        assert!(window.set_mouse_cursor(hand));
        assert_eq!(window.backend().active_cursor().map(|c| c.hot_spot), Some(Point::new(8, 2)));

        window.restore_mouse_cursor();
        assert_eq!(window.backend().active_cursor().map(|c| c.hot_spot), Some(Point::new(0, 0)));

        window.restore_mouse_cursor();
        assert!(window.backend().active_cursor().is_none());

        // Nothing left to restore
        window.restore_mouse_cursor();
        assert!(window.backend().active_cursor().is_none());
    }

    #[test]
    fn test_unknown_cursor_id() {
        let (mut window, _, _) = window();
        assert!(!window.set_mouse_cursor(CursorId::default()));
        assert!(window.backend().active_cursor().is_none());
    }

    #[test]
    fn test_mouse_visibility() {
        let (mut window, _, _) = window();
        window.hide_mouse();
        assert!(!window.backend().cursor_visible());
        window.show_mouse();
        assert!(window.backend().cursor_visible());
    }

    #[test]
    fn test_presentation_delegates() {
        let (mut window, _, _) = window();
        window.set_title("Inventory");
        window.set_vertical_sync(false);
        window.set_clipboard_text("copied");
        window.swap_buffers();
        window.swap_buffers();

        assert_eq!(window.backend().title(), "Inventory");
        assert!(!window.backend().vsync());
        assert_eq!(window.clipboard_text(), "copied");
        assert_eq!(window.backend().frames_presented(), 2);
    }
}
