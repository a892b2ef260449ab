//! Thumbnails scaled from their source by a fixed ratio.
//!
//! A [`ScaledThumbnailMaker`] holds a [`ScaleSpec`] that may be given once,
//! either at construction or through [`scale`](ScaledThumbnailMaker::scale) /
//! [`scale_xy`](ScaledThumbnailMaker::scale_xy). A second assignment, by any
//! route, is an [`InvalidState`](super::MakerError::InvalidState) error, as is
//! making a thumbnail before any scale was given.
//!
//! ```
//! # use thumbmaker::imaging::ScaledThumbnailMaker;
//! # use image::DynamicImage;
//! let source = DynamicImage::new_rgb8(200, 200);
//!
//! let thumb = ScaledThumbnailMaker::new()
//!     .scale_xy(0.6, 0.4)?
//!     .make(&source)?;
//! assert_eq!((thumb.width(), thumb.height()), (120, 80));
//!
//! // The scale was already given to the constructor.
//! assert!(ScaledThumbnailMaker::with_factor(0.5).scale(0.5).is_err());
//! # Ok::<(), thumbmaker::imaging::MakerError>(())
//! ```

use super::backend::Resizer;
use super::calculations::scaled_dimensions;
use super::maker::{MakerError, Result, already_set, not_set, render};
use super::params::{MakerSettings, PixelFormat, Resampling, ScaleSpec};
use super::rust_backend::ImageResizer;
use image::DynamicImage;

/// Single-use builder for ratio-scaled thumbnails.
///
/// [`make`](Self::make) takes the maker by value, so each maker produces at
/// most one thumbnail:
///
/// ```compile_fail
/// # use thumbmaker::imaging::ScaledThumbnailMaker;
/// # use image::DynamicImage;
/// let source = DynamicImage::new_rgb8(200, 200);
/// let maker = ScaledThumbnailMaker::with_factor(0.5);
/// let _first = maker.make(&source);
/// let _second = maker.make(&source); // use of moved value
/// ```
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ScaledThumbnailMaker {
    spec: ScaleSpec,
    settings: MakerSettings,
}

impl ScaledThumbnailMaker {
    /// A maker with no scale; one must be given before [`make`](Self::make).
    pub fn new() -> Self {
        Self::default()
    }

    /// A maker that scales both axes by `factor`.
    pub fn with_factor(factor: f64) -> Self {
        Self {
            spec: ScaleSpec::Uniform(factor),
            ..Self::default()
        }
    }

    /// A maker that scales width by `x` and height by `y`.
    pub fn with_factors(x: f64, y: f64) -> Self {
        Self {
            spec: ScaleSpec::Dual(x, y),
            ..Self::default()
        }
    }

    /// Scale both axes by `factor`.
    ///
    /// Fails if a scale was already given.
    pub fn scale(self, factor: f64) -> Result<Self> {
        self.set_spec(ScaleSpec::Uniform(factor))
    }

    /// Scale width by `x` and height by `y`.
    ///
    /// Fails if a scale was already given.
    pub fn scale_xy(self, x: f64, y: f64) -> Result<Self> {
        self.set_spec(ScaleSpec::Dual(x, y))
    }

    fn set_spec(mut self, spec: ScaleSpec) -> Result<Self> {
        if self.spec.is_set() {
            return Err(already_set("scale"));
        }
        self.spec = spec;
        Ok(self)
    }

    /// Pixel format of the produced thumbnail (default RGBA8).
    pub fn format(mut self, format: PixelFormat) -> Self {
        self.settings.format = format;
        self
    }

    /// Filter used by the default resizer in [`make`](Self::make).
    pub fn resampling(mut self, resampling: Resampling) -> Self {
        self.settings.resampling = resampling;
        self
    }

    /// Replace format and filter together.
    pub fn settings(mut self, settings: MakerSettings) -> Self {
        self.settings = settings;
        self
    }

    /// The scale given so far.
    pub fn spec(&self) -> ScaleSpec {
        self.spec
    }

    /// Thumbnail dimensions for a source of the given size, without resizing.
    ///
    /// Fails if no scale was given, or if a scaled edge is not a valid
    /// pixel count.
    pub fn target_dimensions(&self, source: (u32, u32)) -> Result<(u32, u32)> {
        let factors = self.spec.factors().ok_or_else(|| not_set("scale"))?;
        scaled_dimensions(source, factors).ok_or_else(|| {
            MakerError::DimensionOverflow(format!(
                "{}x{} scaled by {}x{}",
                source.0, source.1, factors.0, factors.1
            ))
        })
    }

    /// Make the thumbnail with the `image` crate resizer.
    pub fn make(self, source: &DynamicImage) -> Result<DynamicImage> {
        let resizer = ImageResizer::new(self.settings.resampling);
        self.make_with(&resizer, source)
    }

    /// Make the thumbnail with a caller-supplied resizer.
    pub fn make_with(self, resizer: &impl Resizer, source: &DynamicImage) -> Result<DynamicImage> {
        let target = self.target_dimensions((source.width(), source.height()))?;
        render(resizer, source, target, self.settings.format)
    }
}
