//! Pieces shared by every thumbnail maker: the error type and the final
//! resize-and-convert step.

use super::backend::{MAX_TARGET_BYTES, ResizeError, Resizer, check_target_size};
use super::params::PixelFormat;
use image::DynamicImage;
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum MakerError {
    #[error("Invalid state: {0}")]
    InvalidState(String),
    #[error("Scaled dimensions out of range: {0}")]
    DimensionOverflow(String),
    #[error("Resize failed: {0}")]
    Resize(#[from] ResizeError),
}

/// Result type for maker operations.
pub type Result<T> = std::result::Result<T, MakerError>;

/// Error for a set-once parameter that was already set.
pub(crate) fn already_set(param: &str) -> MakerError {
    log::debug!("rejecting second assignment of `{param}`");
    MakerError::InvalidState(format!("{param} has already been set"))
}

/// Error for a required parameter that was never set.
pub(crate) fn not_set(param: &str) -> MakerError {
    MakerError::InvalidState(format!("{param} has not been set"))
}

/// Resize `source` to `target` and convert the result to `format`.
pub(crate) fn render(
    resizer: &impl Resizer,
    source: &DynamicImage,
    target: (u32, u32),
    format: PixelFormat,
) -> Result<DynamicImage> {
    let (width, height) = target;
    log::debug!(
        "making {}x{} {:?} thumbnail from {}x{} source",
        width,
        height,
        format,
        source.width(),
        source.height()
    );
    check_target_size(
        width,
        height,
        format.color_type().bytes_per_pixel(),
        MAX_TARGET_BYTES,
    )?;
    let resized = resizer.resize(source, width, height)?;
    Ok(format.convert(resized))
}
