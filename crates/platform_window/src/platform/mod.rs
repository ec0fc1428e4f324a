//! Platform backends
//!
//! One backend is compiled in as [`ActiveBackend`] for each build target:
//!
//! | Target                   | Backend                          |
//! |--------------------------|----------------------------------|
//! | Windows, X11, macOS      | [`desktop::GlfwBackend`]         |
//! | Android                  | [`android::AndroidBackend`]      |
//! | `wasm32` (browser)       | [`browser::BrowserBackend`]      |
//!
//! GLFW picks the Win32, X11 or Cocoa layer when it is built, so the desktop
//! backend covers all three. The Android and browser backends are fed by the
//! host glue (activity callbacks, JS event listeners) and have no native
//! dependencies, so they also build on desktop for testing.
//! [`headless::HeadlessBackend`] simulates a window manager for tests and
//! tooling.

#[cfg(not(any(target_os = "android", target_arch = "wasm32")))]
pub mod desktop;
pub mod android;
pub mod browser;
pub mod headless;

/// Backend used by `PlatformWindow` on this target
#[cfg(not(any(target_os = "android", target_arch = "wasm32")))]
pub type ActiveBackend = desktop::GlfwBackend;

/// Backend used by `PlatformWindow` on this target
#[cfg(target_os = "android")]
pub type ActiveBackend = android::AndroidBackend;

/// Backend used by `PlatformWindow` on this target
#[cfg(target_arch = "wasm32")]
pub type ActiveBackend = browser::BrowserBackend;
