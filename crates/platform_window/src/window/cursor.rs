//! Mouse cursor image validation
//!
//! Cursor images must be 32x32 RGBA on every platform, regardless of what
//! the native cursor API would accept. Images are checked here before any
//! native resource is created.

use std::path::{Path, PathBuf};

use slotmap::new_key_type;
use thiserror::Error;

use super::backend::WindowError;
use crate::assets::{AssetError, ImageData, ImageLoader};

/// Required cursor width and height in pixels
pub const CURSOR_SIZE: u32 = 32;

/// Required cursor channel count (RGBA)
pub const CURSOR_CHANNELS: u8 = 4;

new_key_type! {
    /// Handle to a cursor loaded into a window
    pub struct CursorId;
}

/// Cursor constraint an image failed
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormatViolation {
    /// Image does not have 4 channels
    Channels {
        /// Channels found
        found: u8,
    },
    /// Image is not 32x32
    Dimensions {
        /// Width found
        width: u32,
        /// Height found
        height: u32,
    },
}

impl std::fmt::Display for FormatViolation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Channels { found } => write!(
                f,
                "the cursor image must have {} channels, found {}",
                CURSOR_CHANNELS, found
            ),
            Self::Dimensions { width, height } => write!(
                f,
                "the cursor image must have {}x{} dimension, found {}x{}",
                CURSOR_SIZE, CURSOR_SIZE, width, height
            ),
        }
    }
}

/// Cursor loading errors
#[derive(Error, Debug)]
pub enum CursorError {
    /// Image could not be decoded
    #[error("unable to load cursor image file {path}: {source}")]
    Load {
        /// Offending file
        path: PathBuf,
        /// Decoder failure
        source: AssetError,
    },

    /// Image decoded but does not fit the cursor format
    #[error("invalid cursor image {path}: {violation}")]
    Format {
        /// Offending file
        path: PathBuf,
        /// Constraint that failed
        violation: FormatViolation,
    },

    /// The backend refused to create the cursor
    #[error("unable to create cursor from {path}: {source}")]
    Platform {
        /// Offending file
        path: PathBuf,
        /// Backend failure
        source: WindowError,
    },
}

/// Check `image` against the cursor format
pub fn validate_cursor_image(image: &ImageData) -> Result<(), FormatViolation> {
    if image.channels != CURSOR_CHANNELS {
        return Err(FormatViolation::Channels { found: image.channels });
    }
    if image.width != CURSOR_SIZE || image.height != CURSOR_SIZE {
        return Err(FormatViolation::Dimensions {
            width: image.width,
            height: image.height,
        });
    }
    Ok(())
}

/// Decode `path` with `loader` and validate it as a cursor image
///
/// Failures are logged with the file path and the violated constraint.
pub fn load_cursor_image(loader: &dyn ImageLoader, path: &Path) -> Result<ImageData, CursorError> {
    let image = loader.load(path).map_err(|source| CursorError::Load {
        path: path.to_path_buf(),
        source,
    });
    let image = match image {
        Ok(image) => image,
        Err(err) => {
            log::error!("{}", err);
            return Err(err);
        }
    };

    if let Err(violation) = validate_cursor_image(&image) {
        let err = CursorError::Format {
            path: path.to_path_buf(),
            violation,
        };
        log::error!("{}", err);
        return Err(err);
    }

    Ok(image)
}

#[cfg(test)]
mod tests {
    use super::*;

    struct FixedLoader(Option<ImageData>);

    impl ImageLoader for FixedLoader {
        fn load(&self, path: &Path) -> Result<ImageData, AssetError> {
            self.0
                .clone()
                .ok_or_else(|| AssetError::LoadFailed(path.display().to_string()))
        }
    }

    #[test]
    fn test_valid_cursor() {
        let loader = FixedLoader(Some(ImageData::solid_color(32, 32, &[0, 0, 0, 255])));
        let image = load_cursor_image(&loader, Path::new("cursor.png")).unwrap();
        assert_eq!(image.width, 32);
    }

    #[test]
    fn test_wrong_size() {
        let loader = FixedLoader(Some(ImageData::solid_color(16, 16, &[0, 0, 0, 255])));
        let err = load_cursor_image(&loader, Path::new("small.png")).unwrap_err();
        assert!(matches!(
            err,
            CursorError::Format {
                violation: FormatViolation::Dimensions { width: 16, height: 16 },
                ..
            }
        ));
        assert!(err.to_string().contains("small.png"));
        assert!(err.to_string().contains("32x32"));
    }

    #[test]
    fn test_wrong_channels_checked_first() {
        let loader = FixedLoader(Some(ImageData::solid_color(16, 8, &[0, 0, 0])));
        let err = load_cursor_image(&loader, Path::new("rgb.png")).unwrap_err();
        assert!(matches!(
            err,
            CursorError::Format {
                violation: FormatViolation::Channels { found: 3 },
                ..
            }
        ));
    }

    #[test]
    fn test_decode_failure() {
        let err = load_cursor_image(&FixedLoader(None), Path::new("missing.png")).unwrap_err();
        assert!(matches!(err, CursorError::Load { .. }));
        assert!(err.to_string().contains("missing.png"));
    }
}
