//! Normalized input event record
//!
//! One [`InputEvent`] is owned by the input processor and reused for every
//! dispatch. Handlers receive it by reference and must copy out anything they
//! want to keep.

use bitflags::bitflags;

use super::keys::Key;
use crate::foundation::math::{Offset, Point};
use crate::foundation::time::Ticks;

/// Kind of input event
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum InputEventType {
    /// Empty record
    #[default]
    NoInput,
    /// Text produced by the keyboard or an input method
    KeyText,
    /// A key went down
    KeyDown,
    /// A key press, fired once on the down edge and then on every auto-repeat
    KeyPress,
    /// A key went up
    KeyUp,
    /// A mouse button went down
    MousePress,
    /// A mouse button went up
    MouseRelease,
    /// The cursor moved
    MouseMove,
    /// The wheel scrolled
    MouseWheel,
}

bitflags! {
    /// Keyboard modifiers held while an event was dispatched
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
    pub struct KeyboardModifiers: u8 {
        /// Control
        const CTRL = 1 << 0;
        /// Alt, or Command on Apple keyboards
        const ALT = 1 << 1;
        /// Shift
        const SHIFT = 1 << 2;
    }
}

bitflags! {
    /// Set of mouse buttons currently held down
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
    pub struct MouseButtons: u8 {
        /// Left button
        const LEFT = 1 << 0;
        /// Right button
        const RIGHT = 1 << 1;
        /// Middle button
        const MIDDLE = 1 << 2;
    }
}

/// Mouse buttons
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MouseButton {
    /// Left mouse button
    Left,
    /// Right mouse button
    Right,
    /// Middle mouse button
    Middle,
}

impl MouseButton {
    /// The bit this button occupies in a [`MouseButtons`] mask
    pub const fn mask(self) -> MouseButtons {
        match self {
            Self::Left => MouseButtons::LEFT,
            Self::Right => MouseButtons::RIGHT,
            Self::Middle => MouseButtons::MIDDLE,
        }
    }
}

/// Scroll direction of a wheel event
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum WheelDirection {
    /// Away from the user
    Up,
    /// Towards the user
    Down,
}

/// Input event handed to the application callback
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InputEvent {
    /// What happened
    pub kind: InputEventType,
    /// Key for keyboard events, [`Key::Unknown`] otherwise
    pub key_code: Key,
    /// Text for [`InputEventType::KeyText`]
    pub key_text: String,
    /// Modifiers held at dispatch time
    pub modifiers: KeyboardModifiers,
    /// Button for press/release events
    pub mouse_button: Option<MouseButton>,
    /// Current cursor position in client coordinates
    pub mouse_pos: Point,
    /// Cursor displacement for [`InputEventType::MouseMove`]
    pub mouse_moved: Offset,
    /// Direction for [`InputEventType::MouseWheel`]
    pub wheel_direction: Option<WheelDirection>,
    /// Milliseconds since the key first went down, for repeated key presses
    pub auto_repeat_ticks: Ticks,
}

impl InputEvent {
    /// Create an empty event
    pub fn new() -> Self {
        Self {
            kind: InputEventType::NoInput,
            key_code: Key::Unknown,
            key_text: String::new(),
            modifiers: KeyboardModifiers::empty(),
            mouse_button: None,
            mouse_pos: Point::origin(),
            mouse_moved: Offset::zeros(),
            wheel_direction: None,
            auto_repeat_ticks: 0,
        }
    }

    /// Clear every per-dispatch field and set the event type
    ///
    /// `mouse_pos` is kept: it is the live cursor position, not part of the
    /// previous event. The text buffer keeps its allocation.
    pub fn reset(&mut self, kind: InputEventType) {
        self.kind = kind;
        self.key_code = Key::Unknown;
        self.key_text.clear();
        self.modifiers = KeyboardModifiers::empty();
        self.mouse_button = None;
        self.mouse_moved = Offset::zeros();
        self.wheel_direction = None;
        self.auto_repeat_ticks = 0;
    }
}

impl Default for InputEvent {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reset_clears_previous_dispatch() {
        let mut event = InputEvent::new();
        event.reset(InputEventType::KeyPress);
        event.key_code = Key::A;
        event.key_text.push('a');
        event.modifiers = KeyboardModifiers::CTRL;
        event.auto_repeat_ticks = 250;
        event.mouse_pos = Point::new(3, 4);
        event.mouse_moved = Offset::new(1, 1);
        event.mouse_button = Some(MouseButton::Left);
        event.wheel_direction = Some(WheelDirection::Up);

        event.reset(InputEventType::KeyUp);

        assert_eq!(event.kind, InputEventType::KeyUp);
        assert_eq!(event.key_code, Key::Unknown);
        assert!(event.key_text.is_empty());
        assert!(event.modifiers.is_empty());
        assert_eq!(event.auto_repeat_ticks, 0);
        assert_eq!(event.mouse_button, None);
        assert_eq!(event.wheel_direction, None);
        assert_eq!(event.mouse_moved, Offset::zeros());
        assert_eq!(event.mouse_pos, Point::new(3, 4));
    }

    #[test]
    fn test_mouse_button_masks_are_distinct() {
        let all = MouseButton::Left.mask() | MouseButton::Right.mask() | MouseButton::Middle.mask();
        assert_eq!(all, MouseButtons::all());
    }
}
