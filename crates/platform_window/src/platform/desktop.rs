//! Desktop window backend using GLFW
//!
//! Provides native window creation, an OpenGL swap chain and event handling
//! on Windows, X11 and macOS.

use glfw::{Action, Context, WindowEvent, WindowMode};

use crate::assets::ImageData;
use crate::config::WindowConfig;
use crate::foundation::math::{Point, Rect, Size};
use crate::input::{Key, MouseButton, WheelDirection};
use crate::window::{PlatformEvent, WindowBackend, WindowError, WindowResult};

/// Index of a cursor owned by a [`GlfwBackend`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GlfwCursor(usize);

/// GLFW window wrapper with proper resource management
pub struct GlfwBackend {
    glfw: glfw::Glfw,
    window: glfw::PWindow,
    events: glfw::GlfwReceiver<(f64, WindowEvent)>,
    // Translated events waiting for the next poll, ahead of newer native ones
    pending: Vec<PlatformEvent>,
    windowed: Rect,
    // GLFW takes ownership of the active cursor; its slot is empty while in use
    cursors: Vec<Option<glfw::Cursor>>,
    active_cursor: Option<usize>,
}

impl GlfwBackend {
    /// Move already delivered native events into the pending queue
    fn drain_native(&mut self) {
        for (_, event) in glfw::flush_messages(&self.events) {
            if let Some(event) = translate_event(event) {
                self.pending.push(event);
            }
        }
    }

    fn swap_interval(enabled: bool) -> glfw::SwapInterval {
        if enabled {
            glfw::SwapInterval::Sync(1)
        } else {
            glfw::SwapInterval::None
        }
    }
}

impl WindowBackend for GlfwBackend {
    type Cursor = GlfwCursor;

    fn create(config: &WindowConfig) -> WindowResult<Self> {
        let mut glfw = glfw::init(glfw::log_errors)
            .map_err(|e| WindowError::InitializationFailed(format!("{:?}", e)))?;

        glfw.window_hint(glfw::WindowHint::Resizable(config.resizable));
        glfw.window_hint(glfw::WindowHint::Maximized(config.maximized));

        let created = if config.fullscreen {
            glfw.with_primary_monitor(|glfw, monitor| {
                let mode = monitor.map_or(WindowMode::Windowed, |m| WindowMode::FullScreen(m));
                glfw.create_window(config.width, config.height, &config.title, mode)
            })
        } else {
            glfw.create_window(config.width, config.height, &config.title, WindowMode::Windowed)
        };
        let (mut window, events) =
            created.ok_or_else(|| WindowError::CreationFailed(config.title.clone()))?;

        window.set_all_polling(true);
        window.make_current();
        glfw.set_swap_interval(Self::swap_interval(config.vsync));

        let (x, y) = window.get_pos();
        let windowed = Rect::new(
            Point::new(x, y),
            Size::new(
                i32::try_from(config.width).unwrap_or(i32::MAX),
                i32::try_from(config.height).unwrap_or(i32::MAX),
            ),
        );

        log::debug!("GLFW window created: {}x{}", config.width, config.height);

        Ok(Self {
            glfw,
            window,
            events,
            pending: Vec::new(),
            windowed,
            cursors: Vec::new(),
            active_cursor: None,
        })
    }

    fn destroy(self) {
        log::debug!("Closing GLFW window");
        drop(self);
    }

    fn poll_events(&mut self, events: &mut Vec<PlatformEvent>) {
        self.glfw.poll_events();
        self.drain_native();
        events.append(&mut self.pending);
    }

    fn should_close(&self) -> bool {
        self.window.should_close()
    }

    fn set_should_close(&mut self, should_close: bool) {
        self.window.set_should_close(should_close);
    }

    fn position(&self) -> Point {
        let (x, y) = self.window.get_pos();
        Point::new(x, y)
    }

    fn size(&self) -> Size {
        let (width, height) = self.window.get_size();
        Size::new(width, height)
    }

    fn windowed_geometry(&self) -> Rect {
        self.windowed
    }

    fn move_to(&mut self, position: Point) {
        self.window.set_pos(position.x, position.y);
    }

    fn resize(&mut self, size: Size) {
        self.window.set_size(size.width, size.height);
    }

    fn is_maximized(&self) -> bool {
        self.window.is_maximized()
    }

    fn maximize(&mut self) {
        self.window.maximize();
    }

    fn restore(&mut self, windowed: Rect) {
        self.window.restore();
        self.window.set_pos(windowed.position.x, windowed.position.y);
        self.window.set_size(windowed.size.width, windowed.size.height);
    }

    fn is_fullscreen(&self) -> bool {
        self.window
            .with_window_mode(|mode| matches!(mode, WindowMode::FullScreen(_)))
    }

    fn set_fullscreen(&mut self, fullscreen: bool, windowed: Rect) {
        if fullscreen == self.is_fullscreen() {
            return;
        }
        // GLFW has no fullscreen event; queue one after what is already delivered
        self.drain_native();

        if fullscreen {
            let window = &mut self.window;
            let switched = self.glfw.with_primary_monitor(|_, monitor| {
                let Some(monitor) = monitor else {
                    log::warn!("No primary monitor, staying windowed");
                    return false;
                };
                let Some(mode) = monitor.get_video_mode() else {
                    log::warn!("Primary monitor has no video mode, staying windowed");
                    return false;
                };
                window.set_monitor(
                    WindowMode::FullScreen(monitor),
                    0,
                    0,
                    mode.width,
                    mode.height,
                    Some(mode.refresh_rate),
                );
                true
            });
            if switched {
                self.pending.push(PlatformEvent::FullscreenChanged(true));
            }
        } else {
            let width = u32::try_from(windowed.size.width).unwrap_or(1);
            let height = u32::try_from(windowed.size.height).unwrap_or(1);
            self.pending.push(PlatformEvent::FullscreenChanged(false));
            self.window.set_monitor(
                WindowMode::Windowed,
                windowed.position.x,
                windowed.position.y,
                width,
                height,
                None,
            );
        }
    }

    fn is_visible(&self) -> bool {
        self.window.is_visible()
    }

    fn show(&mut self) {
        self.window.show();
    }

    fn hide(&mut self) {
        self.window.hide();
    }

    fn has_focus(&self) -> bool {
        self.window.is_focused()
    }

    fn set_title(&mut self, title: &str) {
        self.window.set_title(title);
    }

    fn set_cursor_visible(&mut self, visible: bool) {
        let mode = if visible {
            glfw::CursorMode::Normal
        } else {
            glfw::CursorMode::Hidden
        };
        self.window.set_cursor_mode(mode);
    }

    fn create_cursor(&mut self, image: &ImageData, hot_spot: Point) -> WindowResult<Self::Cursor> {
        let pixels: Vec<u32> = image
            .rgba_pixels()
            .ok_or_else(|| {
                WindowError::CursorCreationFailed(format!("expected RGBA, got {} channels", image.channels))
            })?
            .map(u32::from_ne_bytes)
            .collect();

        let cursor = glfw::Cursor::create_from_pixels(
            glfw::PixelImage {
                width: image.width,
                height: image.height,
                pixels,
            },
            u32::try_from(hot_spot.x).unwrap_or(0),
            u32::try_from(hot_spot.y).unwrap_or(0),
        );

        self.cursors.push(Some(cursor));
        Ok(GlfwCursor(self.cursors.len() - 1))
    }

    fn set_cursor(&mut self, cursor: Option<&Self::Cursor>) {
        let requested = cursor.map(|c| c.0);
        if requested == self.active_cursor {
            return;
        }

        let next = requested
            .and_then(|slot| self.cursors.get_mut(slot))
            .and_then(Option::take);
        let previous = self.window.set_cursor(next);

        if let (Some(previous), Some(slot)) = (previous, self.active_cursor) {
            if let Some(entry) = self.cursors.get_mut(slot) {
                *entry = Some(previous);
            }
        }
        self.active_cursor = requested;
    }

    fn swap_buffers(&mut self) {
        self.window.swap_buffers();
    }

    fn set_vertical_sync(&mut self, enabled: bool) {
        self.glfw.set_swap_interval(Self::swap_interval(enabled));
    }

    fn clipboard_text(&self) -> String {
        self.window.get_clipboard_string().unwrap_or_default()
    }

    fn set_clipboard_text(&mut self, text: &str) {
        self.window.set_clipboard_string(text);
    }
}

impl std::fmt::Debug for GlfwBackend {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("GlfwBackend")
            .field("cursors", &self.cursors.len())
            .field("active_cursor", &self.active_cursor)
            .finish_non_exhaustive()
    }
}

/// Convert a GLFW window event into a platform event
pub fn translate_event(event: WindowEvent) -> Option<PlatformEvent> {
    let event = match event {
        // GLFW reports OS key repeat as Repeat; it is just another down edge
        WindowEvent::Key(key, _, Action::Press | Action::Repeat, _) => {
            PlatformEvent::KeyDown(translate_key(key))
        }
        WindowEvent::Key(key, _, Action::Release, _) => PlatformEvent::KeyUp(translate_key(key)),
        WindowEvent::Char(c) => PlatformEvent::Text(c.to_string()),
        WindowEvent::MouseButton(button, action, _) => PlatformEvent::MouseButton {
            button: translate_mouse_button(button)?,
            pressed: action != Action::Release,
        },
        WindowEvent::CursorPos(x, y) => PlatformEvent::MouseMoved(Point::new(x as i32, y as i32)),
        WindowEvent::Scroll(_, dy) if dy > 0.0 => PlatformEvent::MouseWheel(WheelDirection::Up),
        WindowEvent::Scroll(_, dy) if dy < 0.0 => PlatformEvent::MouseWheel(WheelDirection::Down),
        WindowEvent::Pos(x, y) => PlatformEvent::Moved(Point::new(x, y)),
        WindowEvent::Size(width, height) => PlatformEvent::Resized(Size::new(width, height)),
        WindowEvent::Maximize(maximized) => PlatformEvent::MaximizeChanged(maximized),
        WindowEvent::Focus(focused) => PlatformEvent::FocusChanged(focused),
        WindowEvent::Close => PlatformEvent::CloseRequested,
        _ => return None,
    };
    Some(event)
}

/// Map a GLFW mouse button; extra buttons are not tracked
pub const fn translate_mouse_button(button: glfw::MouseButton) -> Option<MouseButton> {
    match button {
        glfw::MouseButton::Button1 => Some(MouseButton::Left),
        glfw::MouseButton::Button2 => Some(MouseButton::Right),
        glfw::MouseButton::Button3 => Some(MouseButton::Middle),
        _ => None,
    }
}

/// Map a GLFW key to a shared key code
pub const fn translate_key(key: glfw::Key) -> Key {
    use glfw::Key as G;

    match key {
        G::Escape => Key::Escape,
        G::Tab => Key::Tab,
        G::Backspace => Key::Backspace,
        G::Enter => Key::Enter,
        G::Insert => Key::Insert,
        G::Delete => Key::Delete,
        G::Pause => Key::Pause,
        G::PrintScreen => Key::PrintScreen,
        G::Home => Key::Home,
        G::End => Key::End,
        G::PageUp => Key::PageUp,
        G::PageDown => Key::PageDown,
        G::Up => Key::Up,
        G::Down => Key::Down,
        G::Left => Key::Left,
        G::Right => Key::Right,
        G::NumLock => Key::NumLock,
        G::ScrollLock => Key::ScrollLock,
        G::CapsLock => Key::CapsLock,
        G::LeftControl | G::RightControl => Key::Ctrl,
        G::LeftShift | G::RightShift => Key::Shift,
        G::LeftAlt | G::RightAlt => Key::Alt,
        G::LeftSuper | G::RightSuper => Key::Meta,
        G::Menu => Key::Menu,
        G::Space => Key::Space,
        G::Apostrophe => Key::Apostrophe,
        G::Comma => Key::Comma,
        G::Minus => Key::Minus,
        G::Period => Key::Period,
        G::Slash => Key::Slash,
        G::Semicolon => Key::Semicolon,
        G::Equal => Key::Equal,
        G::LeftBracket => Key::LeftBracket,
        G::Backslash => Key::Backslash,
        G::RightBracket => Key::RightBracket,
        G::GraveAccent => Key::Grave,
        G::Num0 => Key::Key0,
        G::Num1 => Key::Key1,
        G::Num2 => Key::Key2,
        G::Num3 => Key::Key3,
        G::Num4 => Key::Key4,
        G::Num5 => Key::Key5,
        G::Num6 => Key::Key6,
        G::Num7 => Key::Key7,
        G::Num8 => Key::Key8,
        G::Num9 => Key::Key9,
        G::A => Key::A,
        G::B => Key::B,
        G::C => Key::C,
        G::D => Key::D,
        G::E => Key::E,
        G::F => Key::F,
        G::G => Key::G,
        G::H => Key::H,
        G::I => Key::I,
        G::J => Key::J,
        G::K => Key::K,
        G::L => Key::L,
        G::M => Key::M,
        G::N => Key::N,
        G::O => Key::O,
        G::P => Key::P,
        G::Q => Key::Q,
        G::R => Key::R,
        G::S => Key::S,
        G::T => Key::T,
        G::U => Key::U,
        G::V => Key::V,
        G::W => Key::W,
        G::X => Key::X,
        G::Y => Key::Y,
        G::Z => Key::Z,
        G::F1 => Key::F1,
        G::F2 => Key::F2,
        G::F3 => Key::F3,
        G::F4 => Key::F4,
        G::F5 => Key::F5,
        G::F6 => Key::F6,
        G::F7 => Key::F7,
        G::F8 => Key::F8,
        G::F9 => Key::F9,
        G::F10 => Key::F10,
        G::F11 => Key::F11,
        G::F12 => Key::F12,
        G::Kp0 => Key::Numpad0,
        G::Kp1 => Key::Numpad1,
        G::Kp2 => Key::Numpad2,
        G::Kp3 => Key::Numpad3,
        G::Kp4 => Key::Numpad4,
        G::Kp5 => Key::Numpad5,
        G::Kp6 => Key::Numpad6,
        G::Kp7 => Key::Numpad7,
        G::Kp8 => Key::Numpad8,
        G::Kp9 => Key::Numpad9,
        G::KpDecimal => Key::NumpadDecimal,
        G::KpDivide => Key::NumpadDivide,
        G::KpMultiply => Key::NumpadMultiply,
        G::KpSubtract => Key::NumpadSubtract,
        G::KpAdd => Key::NumpadAdd,
        G::KpEnter => Key::NumpadEnter,
        G::KpEqual => Key::NumpadEqual,
        _ => Key::Unknown,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_translate_keys() {
        assert_eq!(translate_key(glfw::Key::A), Key::A);
        assert_eq!(translate_key(glfw::Key::Kp7), Key::Numpad7);
        assert_eq!(translate_key(glfw::Key::RightControl), Key::Ctrl);
        assert_eq!(translate_key(glfw::Key::LeftSuper), Key::Meta);
        assert_eq!(translate_key(glfw::Key::F25), Key::Unknown);
    }

    #[test]
    fn test_repeat_action_is_key_down() {
        let event = WindowEvent::Key(glfw::Key::W, 17, Action::Repeat, glfw::Modifiers::empty());
        assert_eq!(translate_event(event), Some(PlatformEvent::KeyDown(Key::W)));
    }

    #[test]
    fn test_translate_mouse_and_window_events() {
        assert_eq!(
            translate_event(WindowEvent::MouseButton(
                glfw::MouseButton::Button2,
                Action::Press,
                glfw::Modifiers::empty()
            )),
            Some(PlatformEvent::MouseButton {
                button: MouseButton::Right,
                pressed: true
            })
        );
        assert_eq!(
            translate_event(WindowEvent::Scroll(0.0, -1.0)),
            Some(PlatformEvent::MouseWheel(WheelDirection::Down))
        );
        assert_eq!(translate_event(WindowEvent::Scroll(0.0, 0.0)), None);
        assert_eq!(
            translate_event(WindowEvent::Size(640, 480)),
            Some(PlatformEvent::Resized(Size::new(640, 480)))
        );
        assert_eq!(translate_event(WindowEvent::Close), Some(PlatformEvent::CloseRequested));
    }
}
