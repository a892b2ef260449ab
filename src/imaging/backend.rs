//! Resize primitive trait and shared error type.
//!
//! The [`Resizer`] trait is the one pixel operation the makers need: produce
//! a copy of a source image at an exact width and height. The production
//! implementation is [`ImageResizer`](super::rust_backend::ImageResizer),
//! built on the `image` crate. Makers take `&impl Resizer` so tests can swap
//! in a recording mock without touching pixel data.

use image::DynamicImage;
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ResizeError {
    #[error("Target dimensions must be non-zero, got {width}x{height}")]
    ZeroDimension { width: u32, height: u32 },
    #[error("Source image is empty ({width}x{height})")]
    EmptySource { width: u32, height: u32 },
    #[error("Target {width}x{height} needs {bytes} bytes, limit is {limit}")]
    TooLarge {
        width: u32,
        height: u32,
        bytes: u64,
        limit: u64,
    },
}

/// Largest pixel buffer a maker or [`ImageResizer`](super::ImageResizer)
/// allocates by default (512 MiB, the `image` crate's default `max_alloc`).
pub const MAX_TARGET_BYTES: u64 = 512 * 1024 * 1024;

/// Reject a `width` x `height` buffer of `bytes_per_pixel` above `limit`.
pub fn check_target_size(
    width: u32,
    height: u32,
    bytes_per_pixel: u8,
    limit: u64,
) -> Result<(), ResizeError> {
    let bytes = width as u64 * height as u64 * bytes_per_pixel as u64;
    if bytes > limit {
        return Err(ResizeError::TooLarge {
            width,
            height,
            bytes,
            limit,
        });
    }
    Ok(())
}

/// Trait for resize primitives.
pub trait Resizer: Sync {
    /// Resize `source` to exactly `width` x `height`, ignoring aspect ratio.
    ///
    /// The returned image may use any pixel layout; makers convert it to the
    /// configured [`PixelFormat`](super::PixelFormat) afterwards.
    fn resize(
        &self,
        source: &DynamicImage,
        width: u32,
        height: u32,
    ) -> Result<DynamicImage, ResizeError>;
}
