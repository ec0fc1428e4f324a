//! Foundation module - Core utilities and types
//!
//! This module provides fundamental utilities used throughout the crate:
//! - Integer screen-space math types
//! - Millisecond clocks and timers
//! - Logging utilities

pub mod math;
pub mod time;
pub mod logging;
