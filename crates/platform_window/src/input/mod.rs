//! Input management system
//!
//! - [`keys`]: normalized key codes shared by every backend
//! - [`event`]: the reusable input event record and its flag types
//! - [`key_table`]: per-key press state and repeat timing
//! - [`dispatcher`]: the single application input callback
//! - [`repeat`]: throttled key auto-repeat
//! - [`processor`]: the state machine backends feed native input into

pub mod keys;
pub mod event;
pub mod key_table;
pub mod dispatcher;
pub mod repeat;
pub mod processor;

pub use dispatcher::{EventDispatcher, InputHandler};
pub use event::{
    InputEvent, InputEventType, KeyboardModifiers, MouseButton, MouseButtons, WheelDirection,
};
pub use key_table::{KeyRecord, KeyTable};
pub use keys::Key;
pub use processor::InputProcessor;
pub use repeat::AutoRepeat;
