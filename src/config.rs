//! Maker configuration module.
//!
//! Loads default maker settings from a `thumbmaker.toml` file. Every key is
//! optional; a missing file means stock defaults.
//!
//! ## Configuration Options
//!
//! ```toml
//! # All options are optional - defaults shown below
//!
//! format = "rgba8"         # rgba8 | rgb8 | luma8 | luma_a8 | rgba16 | rgb16 | rgba32f
//! resampling = "triangle"  # nearest | triangle | catmull_rom | gaussian | lanczos3
//!
//! [scale]
//! factor = 0.5             # Uniform factor, or:
//! # factors = [0.6, 0.4]   # Per-axis factors (width, height)
//! ```
//!
//! With no `[scale]` table the makers built from the config start unscaled and
//! the caller supplies the scale. Unknown keys are rejected to catch typos early.

use crate::imaging::{MakerSettings, PixelFormat, Resampling, ScaleSpec, ScaledThumbnailMaker};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use thiserror::Error;

/// File name looked up by [`load_config`].
pub const CONFIG_FILE_NAME: &str = "thumbmaker.toml";

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("TOML parse error: {0}")]
    Toml(#[from] toml::de::Error),
    #[error("Config validation error: {0}")]
    Validation(String),
}

/// Maker configuration loaded from `thumbmaker.toml`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ThumbnailConfig {
    /// Pixel format of produced thumbnails.
    pub format: PixelFormat,
    /// Resampling filter for the resize step.
    pub resampling: Resampling,
    /// Optional default scale.
    pub scale: ScaleConfig,
}

/// Default scale for scaled makers. At most one of the two keys may be set.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ScaleConfig {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub factor: Option<f64>,
    /// `[width, height]` factors.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub factors: Option<[f64; 2]>,
}

impl ScaleConfig {
    pub fn spec(&self) -> ScaleSpec {
        match (self.factor, self.factors) {
            (Some(f), _) => ScaleSpec::Uniform(f),
            (None, Some([x, y])) => ScaleSpec::Dual(x, y),
            (None, None) => ScaleSpec::Unset,
        }
    }
}

fn check_factor(key: &str, value: f64) -> Result<(), ConfigError> {
    if !value.is_finite() || value <= 0.0 {
        return Err(ConfigError::Validation(format!(
            "{key} must be a positive number, got {value}"
        )));
    }
    Ok(())
}

impl ThumbnailConfig {
    /// Validate config values are within acceptable ranges.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.scale.factor.is_some() && self.scale.factors.is_some() {
            return Err(ConfigError::Validation(
                "scale.factor and scale.factors are mutually exclusive".into(),
            ));
        }
        if let Some(f) = self.scale.factor {
            check_factor("scale.factor", f)?;
        }
        if let Some([x, y]) = self.scale.factors {
            check_factor("scale.factors[0]", x)?;
            check_factor("scale.factors[1]", y)?;
        }
        Ok(())
    }

    pub fn settings(&self) -> MakerSettings {
        MakerSettings {
            format: self.format,
            resampling: self.resampling,
        }
    }

    /// A scaled maker carrying these settings and, if configured, the scale.
    ///
    /// When the scale comes from config, the maker rejects a later
    /// [`scale`](ScaledThumbnailMaker::scale) call like any other maker built
    /// with a factor.
    pub fn scaled_maker(&self) -> ScaledThumbnailMaker {
        let maker = match self.scale.spec() {
            ScaleSpec::Unset => ScaledThumbnailMaker::new(),
            ScaleSpec::Uniform(f) => ScaledThumbnailMaker::with_factor(f),
            ScaleSpec::Dual(x, y) => ScaledThumbnailMaker::with_factors(x, y),
        };
        maker.settings(self.settings())
    }
}

/// Parse and validate a config from TOML text.
pub fn parse_config(content: &str) -> Result<ThumbnailConfig, ConfigError> {
    let config: ThumbnailConfig = toml::from_str(content)?;
    config.validate()?;
    Ok(config)
}

/// Load config from `thumbmaker.toml` in the given directory.
///
/// Returns stock defaults if the file does not exist.
pub fn load_config(dir: &Path) -> Result<ThumbnailConfig, ConfigError> {
    let config_path = dir.join(CONFIG_FILE_NAME);
    if !config_path.exists() {
        log::debug!("no {} found, using defaults", config_path.display());
        return Ok(ThumbnailConfig::default());
    }
    let content = fs::read_to_string(&config_path)?;
    parse_config(&content)
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::{ColorType, DynamicImage};
    use tempfile::TempDir;

    #[test]
    fn default_config() {
        let config = ThumbnailConfig::default();
        assert_eq!(config.format, PixelFormat::Rgba8);
        assert_eq!(config.resampling, Resampling::Triangle);
        assert_eq!(config.scale.spec(), ScaleSpec::Unset);
    }

    #[test]
    fn parse_empty_config_is_default() {
        let config = parse_config("").unwrap();
        assert_eq!(config, ThumbnailConfig::default());
    }

    #[test]
    fn parse_partial_config() {
        let config = parse_config(r#"resampling = "lanczos3""#).unwrap();
        assert_eq!(config.resampling, Resampling::Lanczos3);
        // Default preserved
        assert_eq!(config.format, PixelFormat::Rgba8);
    }

    #[test]
    fn parse_formats() {
        let cases = [
            ("rgb8", PixelFormat::Rgb8),
            ("luma_a8", PixelFormat::LumaA8),
            ("rgba32f", PixelFormat::Rgba32F),
        ];
        for (name, expected) in cases {
            let config = parse_config(&format!("format = \"{name}\"")).unwrap();
            assert_eq!(config.format, expected);
        }
    }

    #[test]
    fn parse_uniform_scale() {
        let config = parse_config("[scale]\nfactor = 0.5\n").unwrap();
        assert_eq!(config.scale.spec(), ScaleSpec::Uniform(0.5));
    }

    #[test]
    fn parse_dual_scale() {
        let config = parse_config("[scale]\nfactors = [0.6, 0.4]\n").unwrap();
        assert_eq!(config.scale.spec(), ScaleSpec::Dual(0.6, 0.4));
    }

    #[test]
    fn both_scale_keys_rejected() {
        let result = parse_config("[scale]\nfactor = 0.5\nfactors = [0.6, 0.4]\n");
        assert!(matches!(result, Err(ConfigError::Validation(_))));
    }

    #[test]
    fn non_positive_factor_rejected() {
        let result = parse_config("[scale]\nfactor = 0.0\n");
        assert!(matches!(result, Err(ConfigError::Validation(_))));

        let result = parse_config("[scale]\nfactors = [0.5, -1.0]\n");
        assert!(matches!(result, Err(ConfigError::Validation(_))));
    }

    #[test]
    fn non_finite_factor_rejected() {
        let result = parse_config("[scale]\nfactor = nan\n");
        assert!(matches!(result, Err(ConfigError::Validation(_))));
    }

    #[test]
    fn unknown_key_rejected() {
        let result = parse_config("quality = 90\n");
        assert!(matches!(result, Err(ConfigError::Toml(_))));

        let result = parse_config("[scale]\nfactr = 0.5\n");
        assert!(matches!(result, Err(ConfigError::Toml(_))));
    }

    #[test]
    fn unknown_format_rejected() {
        let result = parse_config(r#"format = "cmyk""#);
        assert!(matches!(result, Err(ConfigError::Toml(_))));
    }

    #[test]
    fn load_config_returns_default_when_no_file() {
        let tmp = TempDir::new().unwrap();
        let config = load_config(tmp.path()).unwrap();
        assert_eq!(config, ThumbnailConfig::default());
    }

    #[test]
    fn load_config_reads_file() {
        let tmp = TempDir::new().unwrap();
        fs::write(
            tmp.path().join(CONFIG_FILE_NAME),
            r#"
format = "rgb8"
resampling = "nearest"

[scale]
factors = [0.6, 0.4]
"#,
        )
        .unwrap();

        let config = load_config(tmp.path()).unwrap();
        assert_eq!(config.format, PixelFormat::Rgb8);
        assert_eq!(config.resampling, Resampling::Nearest);
        assert_eq!(config.scale.spec(), ScaleSpec::Dual(0.6, 0.4));
    }

    #[test]
    fn load_config_invalid_toml_is_error() {
        let tmp = TempDir::new().unwrap();
        fs::write(tmp.path().join(CONFIG_FILE_NAME), "this is not valid toml [[[").unwrap();

        let result = load_config(tmp.path());
        assert!(matches!(result, Err(ConfigError::Toml(_))));
    }

    #[test]
    fn config_round_trips_through_toml() {
        let config = ThumbnailConfig {
            format: PixelFormat::Luma8,
            resampling: Resampling::CatmullRom,
            scale: ScaleConfig {
                factor: Some(0.25),
                factors: None,
            },
        };
        let text = toml::to_string(&config).unwrap();
        assert_eq!(parse_config(&text).unwrap(), config);
    }

    // =========================================================================
    // Maker construction
    // =========================================================================

    #[test]
    fn scaled_maker_without_scale_is_unset() {
        let maker = ThumbnailConfig::default().scaled_maker();
        assert_eq!(maker.spec(), ScaleSpec::Unset);

        let thumb = maker
            .scale(0.5)
            .unwrap()
            .make(&DynamicImage::new_rgb8(200, 200))
            .unwrap();
        assert_eq!((thumb.width(), thumb.height()), (100, 100));
    }

    #[test]
    fn scaled_maker_with_configured_scale() {
        let config = parse_config("format = \"rgb8\"\n[scale]\nfactors = [0.6, 0.4]\n").unwrap();

        let thumb = config
            .scaled_maker()
            .make(&DynamicImage::new_rgba8(200, 200))
            .unwrap();
        assert_eq!((thumb.width(), thumb.height()), (120, 80));
        assert_eq!(thumb.color(), ColorType::Rgb8);
    }

    #[test]
    fn configured_scale_cannot_be_overridden() {
        let config = parse_config("[scale]\nfactor = 0.5\n").unwrap();
        assert!(config.scaled_maker().scale(0.25).is_err());
    }
}
