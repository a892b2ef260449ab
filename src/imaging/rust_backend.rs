//! Resize primitive backed by the `image` crate.
//!
//! | Operation | Crate / function |
//! |---|---|
//! | Resize | `image::DynamicImage::resize_exact` |
//! | Filter | [`Resampling`] → `image::imageops::FilterType` |
//!
//! The source's pixel layout is preserved; format conversion happens in the
//! makers. Targets whose buffer would exceed the byte limit are rejected
//! before anything is allocated.

use super::backend::{MAX_TARGET_BYTES, ResizeError, Resizer, check_target_size};
use super::params::Resampling;
use image::DynamicImage;

/// Pure Rust resizer using the `image` crate.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ImageResizer {
    resampling: Resampling,
    max_bytes: u64,
}

impl ImageResizer {
    pub fn new(resampling: Resampling) -> Self {
        Self {
            resampling,
            max_bytes: MAX_TARGET_BYTES,
        }
    }

    /// Override the largest target buffer this resizer will allocate.
    pub fn with_max_bytes(mut self, max_bytes: u64) -> Self {
        self.max_bytes = max_bytes;
        self
    }

    pub fn resampling(&self) -> Resampling {
        self.resampling
    }
}

impl Default for ImageResizer {
    fn default() -> Self {
        Self::new(Resampling::default())
    }
}

impl Resizer for ImageResizer {
    fn resize(
        &self,
        source: &DynamicImage,
        width: u32,
        height: u32,
    ) -> Result<DynamicImage, ResizeError> {
        if width == 0 || height == 0 {
            return Err(ResizeError::ZeroDimension { width, height });
        }
        if source.width() == 0 || source.height() == 0 {
            return Err(ResizeError::EmptySource {
                width: source.width(),
                height: source.height(),
            });
        }
        check_target_size(
            width,
            height,
            source.color().bytes_per_pixel(),
            self.max_bytes,
        )?;
        Ok(source.resize_exact(width, height, self.resampling.filter_type()))
    }
}
