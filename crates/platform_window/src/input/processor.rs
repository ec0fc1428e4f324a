//! Shared keyboard and mouse processing
//!
//! Every backend funnels translated native events into [`InputProcessor`].
//! It keeps the key state table and modifier mask current, fills the reusable
//! [`InputEvent`] and hands it to the registered handler.
//!
//! For any key the handler observes
//! `KeyDown -> KeyPress -> KeyPress(repeat)* -> KeyUp`. Modifier keys only
//! update the modifier mask and never produce key events of their own.

use super::dispatcher::EventDispatcher;
use super::event::{
    InputEvent, InputEventType, KeyboardModifiers, MouseButton, MouseButtons, WheelDirection,
};
use super::key_table::KeyTable;
use super::keys::Key;
use super::repeat::AutoRepeat;
use crate::config::{AltModifierKey, InputConfig};
use crate::foundation::math::Point;
use crate::foundation::time::{Clock, Ticks, UNSET_TICKS};

/// Keyboard and mouse state machine
pub struct InputProcessor {
    keys: KeyTable,
    modifiers: KeyboardModifiers,
    mouse_buttons: MouseButtons,
    event: InputEvent,
    dispatcher: EventDispatcher,
    repeat: AutoRepeat,
    alt_modifier_key: AltModifierKey,
    clock: Box<dyn Clock>,
}

impl InputProcessor {
    /// Create a processor with every key released
    pub fn new(config: &InputConfig, clock: Box<dyn Clock>) -> Self {
        let now = clock.millis();
        Self {
            keys: KeyTable::new(config.default_key_delay_ms),
            modifiers: KeyboardModifiers::empty(),
            mouse_buttons: MouseButtons::empty(),
            event: InputEvent::new(),
            dispatcher: EventDispatcher::new(),
            repeat: AutoRepeat::new(config.repeat_poll_interval_ms, now),
            alt_modifier_key: config.alt_modifier_key,
            clock,
        }
    }

    /// Install the application input handler, replacing any previous one
    pub fn set_input_handler(&mut self, handler: impl FnMut(&InputEvent) + 'static) {
        self.dispatcher.set_handler(handler);
    }

    /// Remove the application input handler
    pub fn clear_input_handler(&mut self) {
        self.dispatcher.clear_handler();
    }

    /// Set the auto-repeat delay of one key
    pub fn set_key_delay(&mut self, key: Key, delay: Ticks) {
        self.keys.set_delay(key, delay);
    }

    /// Current time of the processor's clock
    pub fn now(&self) -> Ticks {
        self.clock.millis()
    }

    /// Whether `key` is held
    pub const fn is_key_pressed(&self, key: Key) -> bool {
        self.keys.is_pressed(key)
    }

    /// Read-only view of the key state table
    pub const fn key_table(&self) -> &KeyTable {
        &self.keys
    }

    /// Modifiers currently held
    pub const fn keyboard_modifiers(&self) -> KeyboardModifiers {
        self.modifiers
    }

    /// Mouse buttons currently held
    pub const fn mouse_buttons(&self) -> MouseButtons {
        self.mouse_buttons
    }

    /// Whether `button` is held
    pub const fn is_mouse_button_pressed(&self, button: MouseButton) -> bool {
        self.mouse_buttons.contains(button.mask())
    }

    /// Last reported cursor position
    pub const fn mouse_position(&self) -> Point {
        self.event.mouse_pos
    }

    /// Modifier bit driven by `key`, if it is a modifier key
    fn modifier_for(&self, key: Key) -> Option<KeyboardModifiers> {
        match (key, self.alt_modifier_key) {
            (Key::Ctrl, _) => Some(KeyboardModifiers::CTRL),
            (Key::Shift, _) => Some(KeyboardModifiers::SHIFT),
            (Key::Alt, AltModifierKey::Alt) | (Key::Meta, AltModifierKey::Meta) => {
                Some(KeyboardModifiers::ALT)
            }
            _ => None,
        }
    }

    /// Handle a key going down
    pub fn process_key_down(&mut self, key: Key) {
        if key == Key::Unknown {
            return;
        }
        if let Some(modifier) = self.modifier_for(key) {
            self.modifiers.insert(modifier);
            return;
        }

        let record = self.keys.get_mut(key);
        // OS auto-repeat arrives as repeated down events
        if record.pressed {
            return;
        }
        record.pressed = true;
        record.first_press = UNSET_TICKS;
        record.last_fire = UNSET_TICKS;

        self.event.reset(InputEventType::KeyDown);
        self.event.key_code = key;
        self.dispatch();

        let now = self.clock.millis();
        let record = self.keys.get_mut(key);
        record.first_press = now;
        record.last_fire = now;

        self.event.reset(InputEventType::KeyPress);
        self.event.key_code = key;
        self.dispatch();
    }

    /// Handle a key going up
    pub fn process_key_up(&mut self, key: Key) {
        if key == Key::Unknown {
            return;
        }
        if let Some(modifier) = self.modifier_for(key) {
            self.modifiers.remove(modifier);
            return;
        }
        if key == Key::NumLock {
            for &digit in Key::numpad_digits() {
                if self.keys.is_pressed(digit) {
                    self.process_key_up(digit);
                }
            }
        }

        let record = self.keys.get_mut(key);
        if !record.pressed {
            return;
        }
        record.pressed = false;

        self.event.reset(InputEventType::KeyUp);
        self.event.key_code = key;
        self.dispatch();
    }

    /// Release every held key, then clear the modifier and mouse button masks
    ///
    /// Used when the window loses focus so nothing stays logically held.
    pub fn release_all_keys(&mut self) {
        let held: Vec<Key> = self.keys.pressed_keys().collect();
        // NumLock may already have released some of these
        for key in held {
            self.process_key_up(key);
        }

        self.modifiers = KeyboardModifiers::empty();
        self.mouse_buttons = MouseButtons::empty();
    }

    /// Fire repeated key presses for held keys whose delay has elapsed
    ///
    /// Meant to run once per frame; internally throttled.
    pub fn fire_keys_press(&mut self) {
        let now = self.clock.millis();
        let event = &mut self.event;
        let dispatcher = &mut self.dispatcher;
        let modifiers = self.modifiers;

        self.repeat.poll(now, &mut self.keys, |key, elapsed| {
            event.reset(InputEventType::KeyPress);
            event.key_code = key;
            event.auto_repeat_ticks = elapsed;
            event.modifiers = modifiers;
            dispatcher.dispatch(event);
        });
    }

    /// Handle a mouse button changing state
    pub fn process_mouse_button(&mut self, button: MouseButton, pressed: bool) {
        let mask = button.mask();
        if self.mouse_buttons.contains(mask) == pressed {
            return;
        }
        self.mouse_buttons.set(mask, pressed);

        let kind = if pressed {
            InputEventType::MousePress
        } else {
            InputEventType::MouseRelease
        };
        self.event.reset(kind);
        self.event.mouse_button = Some(button);
        self.dispatch();
    }

    /// Handle the cursor moving to `pos`
    pub fn process_mouse_move(&mut self, pos: Point) {
        let delta = pos - self.event.mouse_pos;
        self.event.reset(InputEventType::MouseMove);
        self.event.mouse_pos = pos;
        self.event.mouse_moved = delta;
        self.dispatch();
    }

    /// Handle a wheel scroll
    pub fn process_mouse_wheel(&mut self, direction: WheelDirection) {
        self.event.reset(InputEventType::MouseWheel);
        self.event.wheel_direction = Some(direction);
        self.dispatch();
    }

    /// Handle committed text from the keyboard or an input method
    pub fn process_text_input(&mut self, text: &str) {
        if text.is_empty() {
            return;
        }
        self.event.reset(InputEventType::KeyText);
        self.event.key_text.push_str(text);
        self.dispatch();
    }

    fn dispatch(&mut self) {
        self.event.modifiers = self.modifiers;
        self.dispatcher.dispatch(&self.event);
    }
}

impl std::fmt::Debug for InputProcessor {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("InputProcessor")
            .field("pressed_keys", &self.keys.pressed_count())
            .field("modifiers", &self.modifiers)
            .field("mouse_buttons", &self.mouse_buttons)
            .field("dispatcher", &self.dispatcher)
            .finish_non_exhaustive()
    }
}
