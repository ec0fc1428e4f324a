//! # Platform Window
//!
//! Cross-platform window and input handling with keyboard auto-repeat.
//!
//! ## Features
//!
//! - **Normalized input**: one key code set and one event record for every backend
//! - **Auto-repeat**: per-key repeat delays driven from the frame loop
//! - **Geometry tracking**: windowed position and size survive maximize and fullscreen
//! - **Validated cursors**: 32x32 RGBA cursor images loaded from files
//! - **Backends**: GLFW on desktop, glue-fed Android and browser backends, and a headless one
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use platform_window::prelude::*;
//!
//! fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     platform_window::foundation::logging::init();
//!
//!     let config = WindowConfig::default();
//!     let mut window: PlatformWindow = PlatformWindow::new(&config)?;
//!     window.set_input_handler(|event| {
//!         if event.kind == InputEventType::KeyPress {
//!             log::info!("{:?} pressed", event.key_code);
//!         }
//!     });
//!
//!     while !window.should_close() {
//!         window.poll();
//!         window.swap_buffers();
//!     }
//!     window.destroy();
//!     Ok(())
//! }
//! ```

#![warn(missing_docs)]
#![warn(clippy::all, clippy::pedantic, clippy::nursery)]
#![allow(clippy::module_name_repetitions, clippy::similar_names, clippy::too_many_arguments)]

pub mod foundation;
pub mod config;
pub mod assets;
pub mod input;
pub mod window;
pub mod platform;

/// Common imports for window users
pub mod prelude {
    pub use crate::{
        assets::{AssetError, ImageData, ImageLoader},
        config::{AltModifierKey, Config, InputConfig, WindowConfig},
        foundation::{
            math::{Point, Rect, Size},
            time::{Clock, ManualClock, SystemClock, Ticks},
        },
        input::{
            InputEvent, InputEventType, Key, KeyboardModifiers, MouseButton, MouseButtons,
            WheelDirection,
        },
        platform::ActiveBackend,
        window::{CursorError, CursorId, PlatformEvent, PlatformWindow, WindowBackend, WindowError},
    };
}
