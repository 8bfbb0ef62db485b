//! Codec configuration and platform capabilities.

use serde::{Deserialize, Serialize};

/// First OS major version with interruption levels
pub const INTERRUPTION_LEVEL_MIN_OS: u32 = 15;

/// Configuration the codec is built from.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CodecConfig {
    /// Target platform.
    #[serde(default)]
    pub platform: PlatformConfig,
}

/// Target platform description.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlatformConfig {
    /// OS major version notifications are built for (default: 15).
    #[serde(default = "default_os_version")]
    pub os_version: u32,
}

impl Default for PlatformConfig {
    fn default() -> Self {
        Self {
            os_version: default_os_version(),
        }
    }
}

impl CodecConfig {
    /// Resolve the capability set for the configured platform.
    #[must_use]
    pub const fn capabilities(&self) -> PlatformCapabilities {
        PlatformCapabilities::for_os_version(self.platform.os_version)
    }
}

const fn default_os_version() -> u32 {
    INTERRUPTION_LEVEL_MIN_OS
}

/// API surface generation of the target platform
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PlatformProfile {
    /// Request API without interruption levels
    Baseline,
    /// Request API with interruption levels
    Modern,
}

impl std::fmt::Display for PlatformProfile {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Baseline => write!(f, "baseline"),
            Self::Modern => write!(f, "modern"),
        }
    }
}

/// Capabilities resolved once, when the codec is built
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PlatformCapabilities {
    os_version: u32,
}

impl PlatformCapabilities {
    /// Capabilities of the given OS major version
    #[must_use]
    pub const fn for_os_version(os_version: u32) -> Self {
        Self { os_version }
    }

    /// Capabilities of the newest supported platform
    #[must_use]
    pub const fn modern() -> Self {
        Self::for_os_version(INTERRUPTION_LEVEL_MIN_OS)
    }

    /// OS major version
    #[must_use]
    pub const fn os_version(&self) -> u32 {
        self.os_version
    }

    /// Profile the codec runs with
    #[must_use]
    pub const fn profile(&self) -> PlatformProfile {
        if self.os_version >= INTERRUPTION_LEVEL_MIN_OS {
            PlatformProfile::Modern
        } else {
            PlatformProfile::Baseline
        }
    }

    /// Returns true if requests carry an interruption level
    #[must_use]
    pub const fn supports_interruption_levels(&self) -> bool {
        matches!(self.profile(), PlatformProfile::Modern)
    }
}

impl Default for PlatformCapabilities {
    fn default() -> Self {
        Self::modern()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = CodecConfig::default();
        assert_eq!(config.platform.os_version, 15);
        assert_eq!(config.capabilities().profile(), PlatformProfile::Modern);
    }

    #[test]
    fn test_profiles_by_version() {
        assert_eq!(
            PlatformCapabilities::for_os_version(14).profile(),
            PlatformProfile::Baseline
        );
        assert!(!PlatformCapabilities::for_os_version(10).supports_interruption_levels());
        assert!(PlatformCapabilities::for_os_version(17).supports_interruption_levels());
    }

    #[test]
    fn test_config_serialization() {
        let parsed: CodecConfig = serde_json::from_str(r#"{"platform": {}}"#).unwrap();
        assert_eq!(parsed, CodecConfig::default());

        let parsed: CodecConfig = serde_json::from_str(r#"{"platform": {"os_version": 13}}"#).unwrap();
        assert_eq!(parsed.capabilities().profile(), PlatformProfile::Baseline);
    }
}
