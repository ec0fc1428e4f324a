//! Image loading utilities
//!
//! Decodes PNG files keeping their native channel count, so callers can check
//! the layout they were given instead of silently receiving converted data.

use std::path::Path;

use image::DynamicImage;

use super::{AssetError, ImageLoader};

/// Decoded image pixels
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImageData {
    /// Raw interleaved pixel data, `channels` bytes per pixel
    pub data: Vec<u8>,
    /// Image width in pixels
    pub width: u32,
    /// Image height in pixels
    pub height: u32,
    /// Number of 8-bit color channels (4 for RGBA)
    pub channels: u8,
}

impl ImageData {
    /// Load an image from a file path
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, AssetError> {
        let path_ref = path.as_ref();

        log::debug!("Loading image from: {:?}", path_ref);

        let img = image::open(path_ref)
            .map_err(|e| AssetError::LoadFailed(format!("{}: {}", path_ref.display(), e)))?;

        Ok(Self::from_dynamic(img))
    }

    /// Create a solid color image (useful for testing and defaults)
    ///
    /// The channel count is the length of `color`.
    pub fn solid_color(width: u32, height: u32, color: &[u8]) -> Self {
        let pixel_count = (width * height) as usize;
        let mut data = Vec::with_capacity(pixel_count * color.len());

        for _ in 0..pixel_count {
            data.extend_from_slice(color);
        }

        Self {
            data,
            width,
            height,
            channels: u8::try_from(color.len()).unwrap_or(u8::MAX),
        }
    }

    /// Bits per pixel, `channels * 8`
    pub const fn bits_per_pixel(&self) -> u32 {
        self.channels as u32 * 8
    }

    /// Get the size of the image data in bytes
    pub fn size_bytes(&self) -> usize {
        self.data.len()
    }

    /// Iterate over pixels as `[r, g, b, a]` when the image is RGBA
    pub fn rgba_pixels(&self) -> Option<impl Iterator<Item = [u8; 4]> + '_> {
        (self.channels == 4).then(|| {
            self.data
                .chunks_exact(4)
                .map(|px| [px[0], px[1], px[2], px[3]])
        })
    }

    fn from_dynamic(img: DynamicImage) -> Self {
        let (width, height) = (img.width(), img.height());
        let channels = img.color().channel_count();
        let data = match channels {
            1 => img.to_luma8().into_raw(),
            2 => img.to_luma_alpha8().into_raw(),
            3 => img.to_rgb8().into_raw(),
            _ => img.to_rgba8().into_raw(),
        };

        log::debug!("Decoded image {}x{} with {} channels", width, height, channels);

        Self {
            data,
            width,
            height,
            channels: channels.min(4),
        }
    }
}

/// [`ImageLoader`] reading files from disk with the `image` crate
#[derive(Debug, Clone, Copy, Default)]
pub struct FileImageLoader;

impl ImageLoader for FileImageLoader {
    fn load(&self, path: &Path) -> Result<ImageData, AssetError> {
        ImageData::from_file(path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_solid_color_image() {
        let img = ImageData::solid_color(4, 4, &[255, 0, 0, 255]);
        assert_eq!(img.width, 4);
        assert_eq!(img.height, 4);
        assert_eq!(img.channels, 4);
        assert_eq!(img.bits_per_pixel(), 32);
        assert_eq!(img.size_bytes(), 4 * 4 * 4);

        // Check first pixel is red
        assert_eq!(&img.data[0..4], &[255, 0, 0, 255]);
    }

    #[test]
    fn test_rgba_pixels_only_for_four_channels() {
        let rgb = ImageData::solid_color(2, 2, &[1, 2, 3]);
        assert!(rgb.rgba_pixels().is_none());

        let rgba = ImageData::solid_color(2, 1, &[1, 2, 3, 4]);
        let pixels: Vec<_> = rgba.rgba_pixels().unwrap().collect();
        assert_eq!(pixels, vec![[1, 2, 3, 4], [1, 2, 3, 4]]);
    }

    #[test]
    fn test_png_keeps_native_channel_count() {
        let dir = std::env::temp_dir();
        let rgb_path = dir.join(format!("platform_window_rgb_{}.png", std::process::id()));
        image::RgbImage::new(8, 8).save(&rgb_path).unwrap();

        let loaded = FileImageLoader.load(&rgb_path).unwrap();
        let _ = std::fs::remove_file(&rgb_path);

        assert_eq!(loaded.channels, 3);
        assert_eq!(loaded.size_bytes(), 8 * 8 * 3);
    }

    #[test]
    fn test_missing_file_fails() {
        let result = FileImageLoader.load(Path::new("does/not/exist.png"));
        assert!(matches!(result, Err(AssetError::LoadFailed(_))));
    }
}
