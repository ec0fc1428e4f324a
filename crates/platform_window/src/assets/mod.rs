//! Image service used by the cursor loader
//!
//! The window core never decodes files itself; it asks an [`ImageLoader`] for
//! pixels and validates what comes back.

pub mod image_loader;

use std::path::Path;

use thiserror::Error;

pub use image_loader::{FileImageLoader, ImageData};

/// Asset loading errors
#[derive(Error, Debug)]
pub enum AssetError {
    /// File could not be read or decoded
    #[error("Failed to load asset: {0}")]
    LoadFailed(String),
}

/// Decodes image files into pixel buffers
pub trait ImageLoader {
    /// Load and decode the image at `path`
    fn load(&self, path: &Path) -> Result<ImageData, AssetError>;
}
