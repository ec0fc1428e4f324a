//! Window and input configuration

use serde::{Deserialize, Serialize};

use super::Config;
use crate::foundation::time::Ticks;

/// Physical key that drives the Alt keyboard modifier
///
/// Apple keyboards report the Command key as Meta and applications expect it
/// to act as Alt; everywhere else the Alt key does.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum AltModifierKey {
    /// The Alt key sets the Alt modifier
    Alt,
    /// The Meta (Command/Super) key sets the Alt modifier
    Meta,
}

impl Default for AltModifierKey {
    fn default() -> Self {
        if cfg!(target_os = "macos") {
            Self::Meta
        } else {
            Self::Alt
        }
    }
}

/// Keyboard timing and modifier settings
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct InputConfig {
    /// Minimum interval between auto-repeated key presses, for every key
    /// that has no delay of its own
    pub default_key_delay_ms: Ticks,
    /// The repeat engine skips polls closer together than this
    pub repeat_poll_interval_ms: Ticks,
    /// Which key is treated as the Alt modifier
    pub alt_modifier_key: AltModifierKey,
    /// Release every pressed key and mouse button when the window loses focus
    pub release_keys_on_focus_loss: bool,
}

impl Default for InputConfig {
    fn default() -> Self {
        Self {
            default_key_delay_ms: 30,
            repeat_poll_interval_ms: 10,
            alt_modifier_key: AltModifierKey::default(),
            release_keys_on_focus_loss: true,
        }
    }
}

impl Config for InputConfig {}

/// Native window creation settings
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct WindowConfig {
    /// Title bar text
    pub title: String,
    /// Initial client width in pixels
    pub width: u32,
    /// Initial client height in pixels
    pub height: u32,
    /// Whether the user may resize the window
    pub resizable: bool,
    /// Synchronize buffer swaps with the display refresh
    pub vsync: bool,
    /// Start in fullscreen mode
    pub fullscreen: bool,
    /// Start maximized
    pub maximized: bool,
    /// Keyboard settings
    pub input: InputConfig,
}

impl Default for WindowConfig {
    fn default() -> Self {
        Self {
            title: "Platform Window".to_string(),
            width: 800,
            height: 600,
            resizable: true,
            vsync: true,
            fullscreen: false,
            maximized: false,
            input: InputConfig::default(),
        }
    }
}

impl Config for WindowConfig {}
