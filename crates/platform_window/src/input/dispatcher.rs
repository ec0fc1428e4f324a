//! Single-handler event dispatch
//!
//! Exactly one handler receives input events. Registering a new handler
//! replaces the previous one; there is no fan-out.

use super::event::InputEvent;

/// Application input callback
pub type InputHandler = Box<dyn FnMut(&InputEvent)>;

/// Holds the application's input callback
#[derive(Default)]
pub struct EventDispatcher {
    handler: Option<InputHandler>,
}

impl EventDispatcher {
    /// Dispatcher without a handler
    pub fn new() -> Self {
        Self { handler: None }
    }

    /// Install `handler`, dropping any previous one
    pub fn set_handler(&mut self, handler: impl FnMut(&InputEvent) + 'static) {
        self.handler = Some(Box::new(handler));
    }

    /// Remove the handler
    pub fn clear_handler(&mut self) {
        self.handler = None;
    }

    /// Whether a handler is installed
    pub const fn has_handler(&self) -> bool {
        self.handler.is_some()
    }

    /// Run the handler on `event`; does nothing without one
    pub fn dispatch(&mut self, event: &InputEvent) {
        if let Some(handler) = self.handler.as_mut() {
            handler(event);
        }
    }
}

impl std::fmt::Debug for EventDispatcher {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("EventDispatcher")
            .field("has_handler", &self.has_handler())
            .finish()
    }
}
