//! Thumbnail makers and the resize seam they sit on.
//!
//! | Maker | Target size |
//! |---|---|
//! | [`ScaledThumbnailMaker`] | source size × factor (uniform or per-axis) |
//! | [`FixedSizeThumbnailMaker`] | explicit width × height, optionally aspect-preserving |
//!
//! The module is split into:
//! - **Calculations**: Pure functions for dimension math (unit testable)
//! - **Parameters**: Scale spec, pixel format, resampling filter
//! - **Backend**: [`Resizer`] trait + [`ImageResizer`]
//! - **Makers**: Set-once builders that resolve dimensions and call the backend

pub mod backend;
mod calculations;
pub mod fixed_size;
mod maker;
mod params;
pub mod rust_backend;
pub mod scaled;

pub use backend::{MAX_TARGET_BYTES, ResizeError, Resizer, check_target_size};
pub use calculations::{calculate_fill_dimensions, calculate_fit_dimensions, scaled_dimensions};
pub use fixed_size::FixedSizeThumbnailMaker;
pub use maker::{MakerError, Result};
pub use params::{MakerSettings, PixelFormat, Resampling, ScaleSpec};
pub use rust_backend::ImageResizer;
pub use scaled::ScaledThumbnailMaker;
