//! Android window backend
//!
//! The activity glue owns the native surface and forwards `KeyEvent` and
//! `MotionEvent` data here. The window always fills the screen; touches are
//! reported as the left mouse button.

use std::collections::VecDeque;

use crate::assets::ImageData;
use crate::config::WindowConfig;
use crate::foundation::math::{Point, Rect, Size};
use crate::input::{Key, MouseButton};
use crate::window::{PlatformEvent, WindowBackend, WindowError, WindowResult};

/// `KeyEvent.ACTION_DOWN`
pub const ACTION_KEY_DOWN: i32 = 0;
/// `KeyEvent.ACTION_UP`
pub const ACTION_KEY_UP: i32 = 1;

/// `MotionEvent.ACTION_DOWN`
pub const ACTION_MOTION_DOWN: i32 = 0;
/// `MotionEvent.ACTION_UP`
pub const ACTION_MOTION_UP: i32 = 1;
/// `MotionEvent.ACTION_MOVE`
pub const ACTION_MOTION_MOVE: i32 = 2;
/// `MotionEvent.ACTION_CANCEL`
pub const ACTION_MOTION_CANCEL: i32 = 3;

/// Window backed by an Android native surface
#[derive(Debug)]
pub struct AndroidBackend {
    queue: VecDeque<PlatformEvent>,
    size: Size,
    focused: bool,
    visible: bool,
    should_close: bool,
    vsync: bool,
    title: String,
    clipboard: String,
    frames_requested: u64,
}

impl AndroidBackend {
    /// Forward a `KeyEvent` with its `AKEYCODE_*` value
    pub fn on_key_event(&mut self, key_code: i32, action: i32) {
        let key = translate_keycode(key_code);
        match action {
            ACTION_KEY_DOWN => self.queue.push_back(PlatformEvent::KeyDown(key)),
            ACTION_KEY_UP => self.queue.push_back(PlatformEvent::KeyUp(key)),
            _ => {}
        }
    }

    /// Forward committed text from the soft keyboard
    pub fn on_text(&mut self, text: &str) {
        self.queue.push_back(PlatformEvent::Text(text.to_string()));
    }

    /// Forward a single-pointer `MotionEvent`
    pub fn on_motion_event(&mut self, action: i32, x: f32, y: f32) {
        let pos = Point::new(x as i32, y as i32);
        match action {
            ACTION_MOTION_DOWN => {
                self.queue.push_back(PlatformEvent::MouseMoved(pos));
                self.queue.push_back(PlatformEvent::MouseButton {
                    button: MouseButton::Left,
                    pressed: true,
                });
            }
            ACTION_MOTION_UP | ACTION_MOTION_CANCEL => {
                self.queue.push_back(PlatformEvent::MouseMoved(pos));
                self.queue.push_back(PlatformEvent::MouseButton {
                    button: MouseButton::Left,
                    pressed: false,
                });
            }
            ACTION_MOTION_MOVE => self.queue.push_back(PlatformEvent::MouseMoved(pos)),
            _ => {}
        }
    }

    /// Surface was created or changed size
    pub fn on_surface_changed(&mut self, width: i32, height: i32) {
        let size = Size::new(width, height);
        if size != self.size {
            self.size = size;
            self.queue.push_back(PlatformEvent::Resized(size));
        }
    }

    /// Activity gained or lost window focus
    pub fn on_focus_changed(&mut self, focused: bool) {
        self.focused = focused;
        self.queue.push_back(PlatformEvent::FocusChanged(focused));
    }

    /// Activity is finishing
    pub fn on_destroy_requested(&mut self) {
        self.should_close = true;
        self.queue.push_back(PlatformEvent::CloseRequested);
    }

    /// Frames presented since the last call; the glue swaps the EGL surface
    pub fn take_frame_requests(&mut self) -> u64 {
        std::mem::take(&mut self.frames_requested)
    }

    /// Title requested by the application
    pub fn title(&self) -> &str {
        &self.title
    }

    /// Whether vertical sync is requested
    pub const fn vsync(&self) -> bool {
        self.vsync
    }
}

impl WindowBackend for AndroidBackend {
    type Cursor = ();

    fn create(config: &WindowConfig) -> WindowResult<Self> {
        Ok(Self {
            queue: VecDeque::new(),
            size: Size::default(),
            focused: false,
            visible: true,
            should_close: false,
            vsync: config.vsync,
            title: config.title.clone(),
            clipboard: String::new(),
            frames_requested: 0,
        })
    }

    fn destroy(self) {
        log::debug!("Android window released");
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
        Point::origin()
    }

    fn size(&self) -> Size {
        self.size
    }

    fn windowed_geometry(&self) -> Rect {
        Rect::new(Point::origin(), self.size)
    }

    fn move_to(&mut self, _position: Point) {}

    fn resize(&mut self, _size: Size) {}

    fn is_maximized(&self) -> bool {
        true
    }

    fn maximize(&mut self) {}

    fn restore(&mut self, _windowed: Rect) {}

    fn is_fullscreen(&self) -> bool {
        true
    }

    fn set_fullscreen(&mut self, _fullscreen: bool, _windowed: Rect) {}

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

    fn set_cursor_visible(&mut self, _visible: bool) {}

    fn create_cursor(&mut self, _image: &ImageData, _hot_spot: Point) -> WindowResult<Self::Cursor> {
        Err(WindowError::Unsupported("mouse cursors on Android"))
    }

    fn set_cursor(&mut self, _cursor: Option<&Self::Cursor>) {}

    fn swap_buffers(&mut self) {
        self.frames_requested += 1;
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

/// Map an `AKEYCODE_*` value to a shared key code
pub const fn translate_keycode(key_code: i32) -> Key {
    match key_code {
        4 | 111 => Key::Escape, // BACK, ESCAPE
        7 => Key::Key0,
        8 => Key::Key1,
        9 => Key::Key2,
        10 => Key::Key3,
        11 => Key::Key4,
        12 => Key::Key5,
        13 => Key::Key6,
        14 => Key::Key7,
        15 => Key::Key8,
        16 => Key::Key9,
        19 => Key::Up,
        20 => Key::Down,
        21 => Key::Left,
        22 => Key::Right,
        29 => Key::A,
        30 => Key::B,
        31 => Key::C,
        32 => Key::D,
        33 => Key::E,
        34 => Key::F,
        35 => Key::G,
        36 => Key::H,
        37 => Key::I,
        38 => Key::J,
        39 => Key::K,
        40 => Key::L,
        41 => Key::M,
        42 => Key::N,
        43 => Key::O,
        44 => Key::P,
        45 => Key::Q,
        46 => Key::R,
        47 => Key::S,
        48 => Key::T,
        49 => Key::U,
        50 => Key::V,
        51 => Key::W,
        52 => Key::X,
        53 => Key::Y,
        54 => Key::Z,
        55 => Key::Comma,
        56 => Key::Period,
        57 | 58 => Key::Alt,
        59 | 60 => Key::Shift,
        61 => Key::Tab,
        62 => Key::Space,
        66 => Key::Enter,
        67 => Key::Backspace,
        68 => Key::Grave,
        69 => Key::Minus,
        70 => Key::Equal,
        71 => Key::LeftBracket,
        72 => Key::RightBracket,
        73 => Key::Backslash,
        74 => Key::Semicolon,
        75 => Key::Apostrophe,
        76 => Key::Slash,
        82 => Key::Menu,
        92 => Key::PageUp,
        93 => Key::PageDown,
        112 => Key::Delete,
        113 | 114 => Key::Ctrl,
        115 => Key::CapsLock,
        116 => Key::ScrollLock,
        117 | 118 => Key::Meta,
        120 => Key::PrintScreen,
        121 => Key::Pause,
        122 => Key::Home,
        123 => Key::End,
        124 => Key::Insert,
        131 => Key::F1,
        132 => Key::F2,
        133 => Key::F3,
        134 => Key::F4,
        135 => Key::F5,
        136 => Key::F6,
        137 => Key::F7,
        138 => Key::F8,
        139 => Key::F9,
        140 => Key::F10,
        141 => Key::F11,
        142 => Key::F12,
        143 => Key::NumLock,
        144 => Key::Numpad0,
        145 => Key::Numpad1,
        146 => Key::Numpad2,
        147 => Key::Numpad3,
        148 => Key::Numpad4,
        149 => Key::Numpad5,
        150 => Key::Numpad6,
        151 => Key::Numpad7,
        152 => Key::Numpad8,
        153 => Key::Numpad9,
        154 => Key::NumpadDivide,
        155 => Key::NumpadMultiply,
        156 => Key::NumpadSubtract,
        157 => Key::NumpadAdd,
        158 => Key::NumpadDecimal,
        160 => Key::NumpadEnter,
        161 => Key::NumpadEqual,
        _ => Key::Unknown,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn drain(backend: &mut AndroidBackend) -> Vec<PlatformEvent> {
        let mut events = Vec::new();
        backend.poll_events(&mut events);
        events
    }

    #[test]
    fn test_keycodes() {
        assert_eq!(translate_keycode(29), Key::A);
        assert_eq!(translate_keycode(144), Key::Numpad0);
        assert_eq!(translate_keycode(143), Key::NumLock);
        assert_eq!(translate_keycode(4), Key::Escape);
        assert_eq!(translate_keycode(9999), Key::Unknown);
    }

    #[test]
    fn test_key_and_touch_events() {
        let mut backend = AndroidBackend::create(&WindowConfig::default()).unwrap();
        backend.on_key_event(54, ACTION_KEY_DOWN);
        backend.on_key_event(54, 2);
        backend.on_key_event(54, ACTION_KEY_UP);
        backend.on_motion_event(ACTION_MOTION_DOWN, 10.5, 20.0);

        assert_eq!(
            drain(&mut backend),
            vec![
                PlatformEvent::KeyDown(Key::Z),
                PlatformEvent::KeyUp(Key::Z),
                PlatformEvent::MouseMoved(Point::new(10, 20)),
                PlatformEvent::MouseButton {
                    button: MouseButton::Left,
                    pressed: true
                },
            ]
        );
    }

    #[test]
    fn test_always_fullscreen_and_no_cursors() {
        let mut backend = AndroidBackend::create(&WindowConfig::default()).unwrap();
        assert!(backend.is_fullscreen());
        let image = ImageData::solid_color(32, 32, &[0, 0, 0, 255]);
        assert!(matches!(
            backend.create_cursor(&image, Point::origin()),
            Err(WindowError::Unsupported(_))
        ));
    }

    #[test]
    fn test_surface_size_and_frames() {
        let mut backend = AndroidBackend::create(&WindowConfig::default()).unwrap();
        backend.on_surface_changed(1080, 2340);
        backend.on_surface_changed(1080, 2340);
        backend.swap_buffers();
        backend.swap_buffers();

        assert_eq!(drain(&mut backend), vec![PlatformEvent::Resized(Size::new(1080, 2340))]);
        assert_eq!(backend.take_frame_requests(), 2);
        assert_eq!(backend.take_frame_requests(), 0);
    }
}
