//! Configuration management.

use anyhow::{Context as _, Result};
use directories::ProjectDirs;
use notikit::{CodecConfig, PlatformConfig};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::output::OutputFormat;

/// CLI configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    /// Default output format.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub output_format: Option<OutputFormat>,

    /// Target platform.
    #[serde(default)]
    pub platform: PlatformConfig,
}

impl Config {
    /// Get the default config file path.
    pub fn default_path() -> Result<PathBuf> {
        let dirs = ProjectDirs::from("dev", "notikit", "notikit")
            .ok_or_else(|| anyhow::anyhow!("Could not determine config directory"))?;

        Ok(dirs.config_dir().join("config.toml"))
    }

    /// Load configuration from `path`, falling back to defaults if absent.
    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }

        let content = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read {}", path.display()))?;
        let config: Self = toml::from_str(&content)
            .with_context(|| format!("invalid config file {}", path.display()))?;

        Ok(config)
    }

    /// Save configuration to `path`.
    pub fn save_to(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let content = toml::to_string_pretty(self)?;
        std::fs::write(path, content)?;

        Ok(())
    }

    /// Codec configuration, with an optional OS version override.
    #[must_use]
    pub fn codec_config(&self, os_version: Option<u32>) -> CodecConfig {
        let mut platform = self.platform.clone();
        if let Some(version) = os_version {
            platform.os_version = version;
        }
        CodecConfig { platform }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_file_gives_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let config = Config::load_from(&dir.path().join("none.toml")).unwrap();
        assert_eq!(config, Config::default());
        assert_eq!(config.platform.os_version, 15);
    }

    #[test]
    fn test_save_and_load() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("config.toml");

        let config = Config {
            output_format: Some(OutputFormat::Yaml),
            platform: PlatformConfig { os_version: 14 },
        };
        config.save_to(&path).unwrap();

        assert_eq!(Config::load_from(&path).unwrap(), config);
    }

    #[test]
    fn test_partial_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "output_format = \"json\"\n").unwrap();

        let config = Config::load_from(&path).unwrap();
        assert_eq!(config.output_format, Some(OutputFormat::Json));
        assert_eq!(config.platform, PlatformConfig::default());
    }

    #[test]
    fn test_os_version_override() {
        let config = Config::default();
        assert_eq!(config.codec_config(None).platform.os_version, 15);
        assert_eq!(config.codec_config(Some(12)).platform.os_version, 12);
    }
}
