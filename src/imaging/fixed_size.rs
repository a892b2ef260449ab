//! Thumbnails sized to explicit target dimensions.
//!
//! Every parameter of a [`FixedSizeThumbnailMaker`] may be given at most
//! once. The size and the keep-aspect-ratio switch are required; fitting
//! within the target defaults to `true`.
//!
//! | `keep_aspect_ratio` | `fit_within_dimensions` | Result |
//! |---|---|---|
//! | `false` | any | exactly `width` x `height` |
//! | `true` | `true` | largest source-shaped size inside the target |
//! | `true` | `false` | smallest source-shaped size covering the target |

use super::backend::Resizer;
use super::calculations::{calculate_fill_dimensions, calculate_fit_dimensions};
use super::maker::{Result, already_set, not_set, render};
use super::params::{MakerSettings, PixelFormat, Resampling};
use super::rust_backend::ImageResizer;
use image::DynamicImage;

/// Single-use builder for fixed-size thumbnails.
///
/// Like [`ScaledThumbnailMaker`](super::ScaledThumbnailMaker), it is consumed
/// by [`make`](Self::make).
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct FixedSizeThumbnailMaker {
    size: Option<(u32, u32)>,
    keep_aspect_ratio: Option<bool>,
    fit_within: Option<bool>,
    settings: MakerSettings,
}

impl FixedSizeThumbnailMaker {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_size(width: u32, height: u32) -> Self {
        Self {
            size: Some((width, height)),
            ..Self::default()
        }
    }

    pub fn size(mut self, width: u32, height: u32) -> Result<Self> {
        if self.size.is_some() {
            return Err(already_set("size"));
        }
        self.size = Some((width, height));
        Ok(self)
    }

    pub fn keep_aspect_ratio(mut self, keep: bool) -> Result<Self> {
        if self.keep_aspect_ratio.is_some() {
            return Err(already_set("keep_aspect_ratio"));
        }
        self.keep_aspect_ratio = Some(keep);
        Ok(self)
    }

    /// Whether an aspect-preserving thumbnail fits inside the target (`true`)
    /// or covers it (`false`). Ignored when the aspect ratio is not kept.
    pub fn fit_within_dimensions(mut self, fit: bool) -> Result<Self> {
        if self.fit_within.is_some() {
            return Err(already_set("fit_within_dimensions"));
        }
        self.fit_within = Some(fit);
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

    /// Thumbnail dimensions for a source of the given size, without resizing.
    pub fn target_dimensions(&self, source: (u32, u32)) -> Result<(u32, u32)> {
        let target = self.size.ok_or_else(|| not_set("size"))?;
        let keep = self
            .keep_aspect_ratio
            .ok_or_else(|| not_set("keep_aspect_ratio"))?;

        if !keep {
            return Ok(target);
        }
        if self.fit_within.unwrap_or(true) {
            Ok(calculate_fit_dimensions(source, target))
        } else {
            Ok(calculate_fill_dimensions(source, target))
        }
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
