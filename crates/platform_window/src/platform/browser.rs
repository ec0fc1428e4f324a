//! Browser canvas backend
//!
//! The page's JS glue registers DOM listeners and forwards them here. Things
//! only the page can do (title, fullscreen, cursor style, clipboard) are
//! queued as [`BrowserRequest`]s for the glue to apply. Presentation is
//! driven by the browser compositor, so swapping buffers does nothing.

use std::collections::VecDeque;

use crate::assets::ImageData;
use crate::config::WindowConfig;
use crate::foundation::math::{Point, Rect, Size};
use crate::input::{Key, MouseButton, WheelDirection};
use crate::window::{PlatformEvent, WindowBackend, WindowError, WindowResult};

/// Cursor image for a CSS `cursor: url(...)` rule
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BrowserCursor {
    /// RGBA pixels, row-major
    pub rgba: Vec<u8>,
    /// Width in pixels
    pub width: u32,
    /// Height in pixels
    pub height: u32,
    /// Hot spot inside the image
    pub hot_spot: Point,
}

/// Page-side action the JS glue must perform
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BrowserRequest {
    /// Set `document.title`
    SetTitle(String),
    /// Call `requestFullscreen` or `exitFullscreen`
    Fullscreen(bool),
    /// Resize the canvas element
    ResizeCanvas(Size),
    /// Set the canvas cursor style, `None` for `default`
    SetCursor(Option<BrowserCursor>),
    /// Toggle `cursor: none`
    CursorVisible(bool),
    /// Write to `navigator.clipboard`
    WriteClipboard(String),
}

/// Window backed by an HTML canvas
#[derive(Debug)]
pub struct BrowserBackend {
    queue: VecDeque<PlatformEvent>,
    requests: Vec<BrowserRequest>,
    size: Size,
    windowed: Size,
    fullscreen: bool,
    focused: bool,
    visible: bool,
    should_close: bool,
    clipboard: String,
}

impl BrowserBackend {
    /// Forward a `keydown`/`keyup` event by its `KeyboardEvent.code`
    pub fn on_keyboard_event(&mut self, code: &str, down: bool) {
        let key = translate_code(code);
        let event = if down {
            PlatformEvent::KeyDown(key)
        } else {
            PlatformEvent::KeyUp(key)
        };
        self.queue.push_back(event);
    }

    /// Forward committed text (`input` / `keypress` data)
    pub fn on_text(&mut self, text: &str) {
        self.queue.push_back(PlatformEvent::Text(text.to_string()));
    }

    /// Forward `mousedown`/`mouseup` with `MouseEvent.button`
    pub fn on_mouse_button(&mut self, button: i16, down: bool) {
        if let Some(button) = translate_mouse_button(button) {
            self.queue.push_back(PlatformEvent::MouseButton {
                button,
                pressed: down,
            });
        }
    }

    /// Forward `mousemove` with canvas-relative coordinates
    pub fn on_mouse_move(&mut self, x: f64, y: f64) {
        self.queue
            .push_back(PlatformEvent::MouseMoved(Point::new(x as i32, y as i32)));
    }

    /// Forward `wheel` with `WheelEvent.deltaY`
    pub fn on_wheel(&mut self, delta_y: f64) {
        // DOM deltaY is positive when scrolling down
        if delta_y < 0.0 {
            self.queue.push_back(PlatformEvent::MouseWheel(WheelDirection::Up));
        } else if delta_y > 0.0 {
            self.queue.push_back(PlatformEvent::MouseWheel(WheelDirection::Down));
        }
    }

    /// Canvas size changed
    pub fn on_resize(&mut self, width: i32, height: i32) {
        let size = Size::new(width, height);
        if size != self.size {
            self.size = size;
            self.queue.push_back(PlatformEvent::Resized(size));
        }
    }

    /// `fullscreenchange` fired
    pub fn on_fullscreen_change(&mut self, fullscreen: bool) {
        if self.fullscreen != fullscreen {
            self.fullscreen = fullscreen;
            self.queue.push_back(PlatformEvent::FullscreenChanged(fullscreen));
        }
    }

    /// Canvas gained or lost focus (`focus`/`blur`)
    pub fn on_focus_changed(&mut self, focused: bool) {
        self.focused = focused;
        self.queue.push_back(PlatformEvent::FocusChanged(focused));
    }

    /// `beforeunload` fired
    pub fn on_unload(&mut self) {
        self.should_close = true;
        self.queue.push_back(PlatformEvent::CloseRequested);
    }

    /// Clipboard text read by the glue on `paste`
    pub fn on_clipboard_text(&mut self, text: &str) {
        text.clone_into(&mut self.clipboard);
    }

    /// Actions for the glue to apply, oldest first
    pub fn take_requests(&mut self) -> Vec<BrowserRequest> {
        std::mem::take(&mut self.requests)
    }
}

impl WindowBackend for BrowserBackend {
    type Cursor = BrowserCursor;

    fn create(config: &WindowConfig) -> WindowResult<Self> {
        let width = i32::try_from(config.width)
            .map_err(|_| WindowError::CreationFailed(format!("width {} out of range", config.width)))?;
        let height = i32::try_from(config.height)
            .map_err(|_| WindowError::CreationFailed(format!("height {} out of range", config.height)))?;
        let size = Size::new(width, height);

        let mut requests = vec![
            BrowserRequest::SetTitle(config.title.clone()),
            BrowserRequest::ResizeCanvas(size),
        ];
        if config.fullscreen {
            requests.push(BrowserRequest::Fullscreen(true));
        }

        Ok(Self {
            queue: VecDeque::new(),
            requests,
            size,
            windowed: size,
            fullscreen: false,
            focused: false,
            visible: true,
            should_close: false,
            clipboard: String::new(),
        })
    }

    fn destroy(self) {
        log::debug!("Browser canvas detached");
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
        Rect::new(Point::origin(), self.windowed)
    }

    fn move_to(&mut self, _position: Point) {}

    fn resize(&mut self, size: Size) {
        self.requests.push(BrowserRequest::ResizeCanvas(size));
    }

    fn is_maximized(&self) -> bool {
        false
    }

    fn maximize(&mut self) {}

    fn restore(&mut self, windowed: Rect) {
        self.resize(windowed.size);
    }

    fn is_fullscreen(&self) -> bool {
        self.fullscreen
    }

    fn set_fullscreen(&mut self, fullscreen: bool, windowed: Rect) {
        self.requests.push(BrowserRequest::Fullscreen(fullscreen));
        if !fullscreen {
            self.resize(windowed.size);
        }
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
        self.requests.push(BrowserRequest::SetTitle(title.to_string()));
    }

    fn set_cursor_visible(&mut self, visible: bool) {
        self.requests.push(BrowserRequest::CursorVisible(visible));
    }

    fn create_cursor(&mut self, image: &ImageData, hot_spot: Point) -> WindowResult<Self::Cursor> {
        if image.channels != 4 {
            return Err(WindowError::CursorCreationFailed(format!(
                "expected RGBA, got {} channels",
                image.channels
            )));
        }
        Ok(BrowserCursor {
            rgba: image.data.clone(),
            width: image.width,
            height: image.height,
            hot_spot,
        })
    }

    fn set_cursor(&mut self, cursor: Option<&Self::Cursor>) {
        self.requests.push(BrowserRequest::SetCursor(cursor.cloned()));
    }

    fn swap_buffers(&mut self) {}

    fn set_vertical_sync(&mut self, _enabled: bool) {}

    fn clipboard_text(&self) -> String {
        self.clipboard.clone()
    }

    fn set_clipboard_text(&mut self, text: &str) {
        text.clone_into(&mut self.clipboard);
        self.requests.push(BrowserRequest::WriteClipboard(text.to_string()));
    }
}

/// Map a DOM `MouseEvent.button` value
pub const fn translate_mouse_button(button: i16) -> Option<MouseButton> {
    match button {
        0 => Some(MouseButton::Left),
        1 => Some(MouseButton::Middle),
        2 => Some(MouseButton::Right),
        _ => None,
    }
}

/// Map a DOM `KeyboardEvent.code` to a shared key code
pub fn translate_code(code: &str) -> Key {
    if let Some(letter) = code.strip_prefix("Key") {
        let mut chars = letter.chars();
        if let (Some(c), None) = (chars.next(), chars.next()) {
            return Key::from_ascii_letter(c).unwrap_or(Key::Unknown);
        }
    }
    if let Some(digit) = code.strip_prefix("Digit") {
        return digit
            .parse()
            .ok()
            .and_then(|d: u32| char::from_digit(d, 10))
            .and_then(Key::from_ascii_digit)
            .unwrap_or(Key::Unknown);
    }
    if let Some(number) = code.strip_prefix('F') {
        if let Ok(number) = number.parse() {
            return Key::function_key(number).unwrap_or(Key::Unknown);
        }
    }
    if let Some(digit) = code.strip_prefix("Numpad") {
        if let Ok(digit) = digit.parse() {
            return Key::numpad_digit(digit).unwrap_or(Key::Unknown);
        }
    }

    match code {
        "Escape" => Key::Escape,
        "Tab" => Key::Tab,
        "Backspace" => Key::Backspace,
        "Enter" => Key::Enter,
        "Insert" => Key::Insert,
        "Delete" => Key::Delete,
        "Pause" => Key::Pause,
        "PrintScreen" => Key::PrintScreen,
        "Home" => Key::Home,
        "End" => Key::End,
        "PageUp" => Key::PageUp,
        "PageDown" => Key::PageDown,
        "ArrowUp" => Key::Up,
        "ArrowDown" => Key::Down,
        "ArrowLeft" => Key::Left,
        "ArrowRight" => Key::Right,
        "NumLock" => Key::NumLock,
        "ScrollLock" => Key::ScrollLock,
        "CapsLock" => Key::CapsLock,
        "ControlLeft" | "ControlRight" => Key::Ctrl,
        "ShiftLeft" | "ShiftRight" => Key::Shift,
        "AltLeft" | "AltRight" => Key::Alt,
        "MetaLeft" | "MetaRight" | "OSLeft" | "OSRight" => Key::Meta,
        "ContextMenu" => Key::Menu,
        "Space" => Key::Space,
        "Quote" => Key::Apostrophe,
        "Comma" => Key::Comma,
        "Minus" => Key::Minus,
        "Period" => Key::Period,
        "Slash" => Key::Slash,
        "Semicolon" => Key::Semicolon,
        "Equal" => Key::Equal,
        "BracketLeft" => Key::LeftBracket,
        "Backslash" => Key::Backslash,
        "BracketRight" => Key::RightBracket,
        "Backquote" => Key::Grave,
        "NumpadDecimal" => Key::NumpadDecimal,
        "NumpadDivide" => Key::NumpadDivide,
        "NumpadMultiply" => Key::NumpadMultiply,
        "NumpadSubtract" => Key::NumpadSubtract,
        "NumpadAdd" => Key::NumpadAdd,
        "NumpadEnter" => Key::NumpadEnter,
        "NumpadEqual" => Key::NumpadEqual,
        _ => Key::Unknown,
    }
}
