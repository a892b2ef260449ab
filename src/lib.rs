//! # thumbmaker
//!
//! Single-use thumbnail makers. A maker is configured once, produces one
//! thumbnail from a source image, and is consumed in the process.
//!
//! ```
//! use thumbmaker::imaging::ScaledThumbnailMaker;
//! # use image::DynamicImage;
//! # let source = DynamicImage::new_rgb8(200, 200);
//!
//! let thumb = ScaledThumbnailMaker::with_factor(0.5).make(&source)?;
//! assert_eq!((thumb.width(), thumb.height()), (100, 100));
//! # Ok::<(), thumbmaker::imaging::MakerError>(())
//! ```
//!
//! # Module Map
//!
//! | Module | Role |
//! |--------|------|
//! | [`imaging`] | Scaled and fixed-size makers, dimension math, the [`Resizer`](imaging::Resizer) seam |
//! | [`config`] | `thumbmaker.toml` loading and validation |
//!
//! # Design Decisions
//!
//! ## Set-Once Parameters
//!
//! Every maker parameter that decides the output size may be given exactly
//! once, whether through a constructor or a builder call. A second assignment
//! is an [`InvalidState`](imaging::MakerError::InvalidState) error returned
//! from the setter itself, so a conflicting chain fails before any pixels
//! are touched. Finishing a maker whose size was never decided fails the same
//! way.
//!
//! ## Resizing Behind a Trait
//!
//! Makers only compute dimensions; the pixel work goes through
//! [`Resizer`](imaging::Resizer). [`ImageResizer`](imaging::ImageResizer)
//! wraps the `image` crate for production use, and tests pass a recording
//! mock to check the dimensions a maker asks for.
//!
//! ## Output Format
//!
//! Thumbnails come out as 8-bit RGBA unless a different
//! [`PixelFormat`](imaging::PixelFormat) is configured, regardless of the
//! source's own layout.

pub mod config;
pub mod imaging;
