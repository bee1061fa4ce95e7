//! Bridge configuration.
//!
//! Defaults reproduce the fixed deployment (immersive surface dimensions, the
//! `update` stream, the bundled script list). A TOML file can override any of
//! them; the sequencing contract does not change.

use std::path::{Path, PathBuf};

use serde::Deserialize;

use crate::error::ConfigError;
use crate::script::{ScriptUri, DEFAULT_SCRIPTS};

/// Build flavour that decides the default surface dimensions.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum BuildTarget {
    Device,
    Simulator,
}

impl BuildTarget {
    /// Target selected at compile time (`simulator` feature).
    pub const fn current() -> Self {
        if cfg!(feature = "simulator") {
            Self::Simulator
        } else {
            Self::Device
        }
    }
}

/// Render surface dimensions in pixels.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Deserialize)]
pub struct SurfaceSize {
    pub width: u32,
    pub height: u32,
}

impl SurfaceSize {
    pub const fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }

    pub const fn device_default() -> Self {
        Self::new(1920, 1824)
    }

    pub const fn simulator_default() -> Self {
        Self::new(2732, 2048)
    }

    pub const fn for_target(target: BuildTarget) -> Self {
        match target {
            BuildTarget::Device => Self::device_default(),
            BuildTarget::Simulator => Self::simulator_default(),
        }
    }
}

impl Default for SurfaceSize {
    fn default() -> Self {
        Self::for_target(BuildTarget::current())
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct BridgeConfig {
    pub surface: SurfaceSize,

    /// Name of the frame-update stream requested from the device.
    pub update_stream: String,

    /// Scripts loaded after capability registration, in this order.
    pub scripts: Vec<ScriptUri>,

    /// Directory that `app:///` resources resolve against.
    pub asset_root: PathBuf,
}

impl BridgeConfig {
    pub fn for_target(target: BuildTarget) -> Self {
        Self {
            surface: SurfaceSize::for_target(target),
            update_stream: "update".to_string(),
            scripts: default_scripts(),
            asset_root: PathBuf::from("."),
        }
    }

    pub fn from_toml_str(raw: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(raw).map_err(ConfigError::Parse)?;
        config.validate()?;
        Ok(config)
    }

    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let raw = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_toml_str(&raw)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        let SurfaceSize { width, height } = self.surface;
        if width == 0 || height == 0 {
            return Err(ConfigError::ZeroSurface { width, height });
        }
        if self.update_stream.trim().is_empty() {
            return Err(ConfigError::EmptyStreamName);
        }
        Ok(())
    }
}

impl Default for BridgeConfig {
    fn default() -> Self {
        Self::for_target(BuildTarget::current())
    }
}

fn default_scripts() -> Vec<ScriptUri> {
    DEFAULT_SCRIPTS
        .iter()
        .filter_map(|raw| ScriptUri::parse(raw).ok())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn device_surface_matches_immersive_layer() {
        let c = BridgeConfig::for_target(BuildTarget::Device);
        assert_eq!(c.surface, SurfaceSize::new(1920, 1824));
    }

    #[test]
    fn simulator_surface_is_larger() {
        let c = BridgeConfig::for_target(BuildTarget::Simulator);
        assert_eq!(c.surface, SurfaceSize::new(2732, 2048));
    }

    #[test]
    fn defaults_carry_all_bundled_scripts() {
        let c = BridgeConfig::default();
        assert_eq!(c.update_stream, "update");
        let names: Vec<&str> = c.scripts.iter().map(ScriptUri::as_str).collect();
        assert_eq!(names, DEFAULT_SCRIPTS.to_vec());
    }

    #[test]
    fn empty_file_yields_defaults() {
        assert_eq!(BridgeConfig::from_toml_str("").unwrap(), BridgeConfig::default());
    }

    #[test]
    fn overrides_scripts_and_surface() {
        let c = BridgeConfig::from_toml_str(
            r#"
            scripts = ["app:///Scripts/core.js", "app:///Scripts/app.js"]
            asset_root = "/bundle"

            [surface]
            width = 800
            height = 600
            "#,
        )
        .unwrap();

        assert_eq!(c.surface, SurfaceSize::new(800, 600));
        assert_eq!(c.scripts.len(), 2);
        assert_eq!(c.scripts[1].as_str(), "app:///Scripts/app.js");
        assert_eq!(c.asset_root, PathBuf::from("/bundle"));
        assert_eq!(c.update_stream, "update");
    }

    #[test]
    fn rejects_malformed_script_uri() {
        let err = BridgeConfig::from_toml_str(r#"scripts = ["Scripts/core.js"]"#).unwrap_err();
        assert!(matches!(err, ConfigError::Parse(_)));
    }

    #[test]
    fn rejects_zero_surface() {
        let err = BridgeConfig::from_toml_str("[surface]\nwidth = 0\nheight = 10\n").unwrap_err();
        assert!(matches!(err, ConfigError::ZeroSurface { width: 0, height: 10 }));
    }

    #[test]
    fn rejects_blank_stream_name() {
        let err = BridgeConfig::from_toml_str(r#"update_stream = "  ""#).unwrap_err();
        assert!(matches!(err, ConfigError::EmptyStreamName));
    }

    #[test]
    fn unreadable_file_reports_path() {
        let err = BridgeConfig::load("/nonexistent/halo.toml").unwrap_err();
        assert!(matches!(err, ConfigError::Read { .. }));
    }
}
