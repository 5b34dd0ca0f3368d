//! Optional JSON configuration
//!
//! Every field falls back to the value in `constants`, so a partial file only
//! overrides what it names.

use crate::constants;
use crate::error::{ExplorerError, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Scroll-spy band settings
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SpyConfig {
    pub threshold: f32,
    pub top_margin: f32,
    pub bottom_margin: f32,
}

impl Default for SpyConfig {
    fn default() -> Self {
        Self {
            threshold: constants::spy::THRESHOLD,
            top_margin: constants::spy::TOP_MARGIN,
            bottom_margin: constants::spy::BOTTOM_MARGIN,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ExplorerConfig {
    /// Root of the asset tree (charts/ and img/ live below it)
    pub assets_dir: PathBuf,
    /// Width below which the page switches to the mobile layout
    pub breakpoint: f32,
    pub dark_mode: bool,
    pub spy: SpyConfig,
}

impl Default for ExplorerConfig {
    fn default() -> Self {
        Self {
            assets_dir: PathBuf::from(constants::assets::DEFAULT_DIR),
            breakpoint: constants::responsive::MOBILE_BREAKPOINT,
            dark_mode: false,
            spy: SpyConfig::default(),
        }
    }
}

impl ExplorerConfig {
    /// Load configuration from `path`. A missing file yields the defaults.
    pub fn load(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }
        let text = std::fs::read_to_string(path)?;
        let config: Self = serde_json::from_str(&text)?;
        config.validate()?;
        Ok(config)
    }

    /// Reject values the controller cannot work with
    pub fn validate(&self) -> Result<()> {
        if !(self.breakpoint.is_finite() && self.breakpoint > 0.0) {
            return Err(ExplorerError::Config(format!(
                "breakpoint must be a positive number, got {}",
                self.breakpoint
            )));
        }
        if !(0.0..=1.0).contains(&self.spy.threshold) {
            return Err(ExplorerError::Config(format!(
                "spy.threshold must be within 0..=1, got {}",
                self.spy.threshold
            )));
        }
        let margins = self.spy.top_margin + self.spy.bottom_margin;
        if self.spy.top_margin < 0.0 || self.spy.bottom_margin < 0.0 || margins >= 1.0 {
            return Err(ExplorerError::Config(
                "spy margins must be non-negative and leave part of the viewport".to_string(),
            ));
        }
        Ok(())
    }

    pub fn charts_dir(&self) -> PathBuf {
        self.assets_dir.join(constants::assets::CHARTS_SUBDIR)
    }

    pub fn images_dir(&self) -> PathBuf {
        self.assets_dir.join(constants::assets::IMAGES_SUBDIR)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use std::io::Write;
    use tempfile::Builder;

    #[test]
    fn test_missing_file_gives_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let config = ExplorerConfig::load(&dir.path().join("absent.json")).unwrap();
        assert_eq!(config, ExplorerConfig::default());
    }

    #[test]
    fn test_partial_file_overrides_named_fields() {
        let mut file = Builder::new().suffix(".json").tempfile().unwrap();
        writeln!(file, r#"{{ "breakpoint": 600, "spy": {{ "threshold": 0.5 }} }}"#).unwrap();
        file.flush().unwrap();

        let config = ExplorerConfig::load(file.path()).unwrap();
        assert_eq!(config.breakpoint, 600.0);
        assert_eq!(config.spy.threshold, 0.5);
        assert_eq!(config.spy.top_margin, constants::spy::TOP_MARGIN);
        assert_eq!(config.assets_dir, PathBuf::from("assets"));
    }

    #[test]
    fn test_invalid_values_rejected() {
        let mut file = Builder::new().suffix(".json").tempfile().unwrap();
        writeln!(file, r#"{{ "breakpoint": -1 }}"#).unwrap();
        file.flush().unwrap();

        let err = ExplorerConfig::load(file.path()).unwrap_err();
        assert!(matches!(err, ExplorerError::Config(_)));

        let config = ExplorerConfig {
            spy: SpyConfig {
                threshold: 0.3,
                top_margin: 0.6,
                bottom_margin: 0.5,
            },
            ..ExplorerConfig::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_malformed_json_is_json_error() {
        let mut file = Builder::new().suffix(".json").tempfile().unwrap();
        writeln!(file, "{{ not json").unwrap();
        file.flush().unwrap();

        let err = ExplorerConfig::load(file.path()).unwrap_err();
        assert!(matches!(err, ExplorerError::Json(_)));
    }

    #[test]
    fn test_asset_subdirectories() {
        let config = ExplorerConfig {
            assets_dir: PathBuf::from("/srv/npk"),
            ..ExplorerConfig::default()
        };
        assert_eq!(config.charts_dir(), PathBuf::from("/srv/npk/charts"));
        assert_eq!(config.images_dir(), PathBuf::from("/srv/npk/img"));
    }
}
