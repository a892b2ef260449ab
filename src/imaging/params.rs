//! Parameter types for thumbnail makers.
//!
//! These types describe *what* a maker should produce, not *how* the pixels
//! get there. The makers in [`scaled`](super::scaled) and
//! [`fixed_size`](super::fixed_size) resolve them into target dimensions, and
//! a [`Resizer`](super::backend::Resizer) does the actual pixel work.
//!
//! ## Types
//!
//! - [`ScaleSpec`] — Unset, uniform, or per-axis scale factors.
//! - [`PixelFormat`] — Pixel layout of the produced thumbnail (default RGBA8).
//! - [`Resampling`] — Filter handed to the resize primitive (default bilinear).
//! - [`MakerSettings`] — Format + filter pair shared by every maker.

use image::imageops::FilterType;
use image::{ColorType, DynamicImage};
use serde::{Deserialize, Serialize};

/// How a scaled thumbnail's dimensions relate to its source.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum ScaleSpec {
    /// No scale specified yet.
    #[default]
    Unset,
    /// Same factor on both axes.
    Uniform(f64),
    /// Independent horizontal and vertical factors.
    Dual(f64, f64),
}

impl ScaleSpec {
    pub fn is_set(self) -> bool {
        !matches!(self, ScaleSpec::Unset)
    }

    /// Resolved `(x, y)` factors, or `None` while unset.
    pub fn factors(self) -> Option<(f64, f64)> {
        match self {
            ScaleSpec::Unset => None,
            ScaleSpec::Uniform(f) => Some((f, f)),
            ScaleSpec::Dual(fx, fy) => Some((fx, fy)),
        }
    }
}

/// Pixel layout of a produced thumbnail.
///
/// Every maker converts its output into this format, whatever layout the
/// source image or the resizer used.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PixelFormat {
    /// 8-bit RGBA.
    #[default]
    Rgba8,
    Rgb8,
    Luma8,
    LumaA8,
    Rgba16,
    Rgb16,
    #[serde(rename = "rgba32f")]
    Rgba32F,
}

impl PixelFormat {
    /// The `image` crate color type this format corresponds to.
    pub fn color_type(self) -> ColorType {
        match self {
            PixelFormat::Rgba8 => ColorType::Rgba8,
            PixelFormat::Rgb8 => ColorType::Rgb8,
            PixelFormat::Luma8 => ColorType::L8,
            PixelFormat::LumaA8 => ColorType::La8,
            PixelFormat::Rgba16 => ColorType::Rgba16,
            PixelFormat::Rgb16 => ColorType::Rgb16,
            PixelFormat::Rgba32F => ColorType::Rgba32F,
        }
    }

    /// Convert `image` into this format. Already-matching images pass through.
    pub fn convert(self, image: DynamicImage) -> DynamicImage {
        if image.color() == self.color_type() {
            return image;
        }
        match self {
            PixelFormat::Rgba8 => DynamicImage::ImageRgba8(image.to_rgba8()),
            PixelFormat::Rgb8 => DynamicImage::ImageRgb8(image.to_rgb8()),
            PixelFormat::Luma8 => DynamicImage::ImageLuma8(image.to_luma8()),
            PixelFormat::LumaA8 => DynamicImage::ImageLumaA8(image.to_luma_alpha8()),
            PixelFormat::Rgba16 => DynamicImage::ImageRgba16(image.to_rgba16()),
            PixelFormat::Rgb16 => DynamicImage::ImageRgb16(image.to_rgb16()),
            PixelFormat::Rgba32F => DynamicImage::ImageRgba32F(image.to_rgba32f()),
        }
    }
}

/// Resampling filter used by the resize primitive.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Resampling {
    Nearest,
    /// Bilinear.
    #[default]
    Triangle,
    CatmullRom,
    Gaussian,
    Lanczos3,
}

impl Resampling {
    pub fn filter_type(self) -> FilterType {
        match self {
            Resampling::Nearest => FilterType::Nearest,
            Resampling::Triangle => FilterType::Triangle,
            Resampling::CatmullRom => FilterType::CatmullRom,
            Resampling::Gaussian => FilterType::Gaussian,
            Resampling::Lanczos3 => FilterType::Lanczos3,
        }
    }
}

/// Output settings shared by all makers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct MakerSettings {
    pub format: PixelFormat,
    pub resampling: Resampling,
}
