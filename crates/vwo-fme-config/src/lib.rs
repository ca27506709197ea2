//! ---
//! fme_section: "03-configuration"
//! fme_subsection: "module"
//! fme_type: "source"
//! fme_scope: "code"
//! fme_description: "Configuration loading for SDK identity overrides and logging."
//! fme_version: "v1.2.0"
//! fme_owner: "sdk-platform"
//! ---
//! TOML configuration for VWO FME tooling.
//!
//! ```toml
//! [sdk]
//! name = "vwo-fme-react-native-sdk"
//! version = "2.3.1"
//!
//! [logging]
//! directory = "target/logs"
//! format = "pretty"
//! ```
use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{anyhow, Context, Result};
use serde::{Deserialize, Serialize};
use tracing::debug;
use vwo_fme_logging::LoggingConfig;
use vwo_fme_version::{SdkMeta, SdkMetaOverrides};

/// Default candidate locations, in lookup order.
pub const DEFAULT_CANDIDATES: [&str; 2] = ["vwo-fme.toml", "configs/vwo-fme.toml"];

/// Primary configuration object.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct FmeConfig {
    #[serde(default)]
    pub sdk: SdkConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
}

/// SDK identity overrides; both fields fall back to the builtin identity.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SdkConfig {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub version: Option<String>,
}

impl SdkConfig {
    pub fn overrides(&self) -> SdkMetaOverrides {
        SdkMetaOverrides {
            name: self.name.clone(),
            version: self.version.clone(),
        }
    }
}

/// Metadata describing where an [`FmeConfig`] was loaded from.
#[derive(Debug, Clone)]
pub struct LoadedFmeConfig {
    pub config: FmeConfig,
    pub source: PathBuf,
}

impl FmeConfig {
    pub const ENV_CONFIG_PATH: &'static str = "VWO_FME_CONFIG";

    /// Load configuration from disk, respecting the `VWO_FME_CONFIG` override.
    pub fn load<P: AsRef<Path>>(candidates: &[P]) -> Result<Self> {
        Ok(Self::load_with_source(candidates)?.config)
    }

    /// Load configuration from disk together with the effective source path.
    pub fn load_with_source<P: AsRef<Path>>(candidates: &[P]) -> Result<LoadedFmeConfig> {
        if let Ok(env_path) = std::env::var(Self::ENV_CONFIG_PATH) {
            if !env_path.trim().is_empty() {
                let path = PathBuf::from(env_path);
                let config = Self::from_path(&path)?;
                return Ok(LoadedFmeConfig {
                    config,
                    source: path,
                });
            }
        }

        for candidate in candidates {
            let path = candidate.as_ref();
            if path.exists() {
                let config = Self::from_path(path)?;
                return Ok(LoadedFmeConfig {
                    config,
                    source: path.to_path_buf(),
                });
            }
        }

        Err(anyhow!(
            "no configuration files found. inspected: {}",
            candidates
                .iter()
                .map(|p| p.as_ref().display().to_string())
                .collect::<Vec<_>>()
                .join(", ")
        ))
    }

    /// Load a single file.
    pub fn from_path(path: &Path) -> Result<Self> {
        debug!(config_path = %path.display(), "loading configuration");
        let contents = fs::read_to_string(path)
            .with_context(|| format!("unable to read config file {}", path.display()))?;
        contents
            .parse()
            .with_context(|| format!("invalid config file {}", path.display()))
    }

    /// Validate structural invariants.
    pub fn validate(&self) -> Result<()> {
        self.sdk_meta().map(|_| ())
    }

    /// Effective SDK identity: builtin values with the configured overrides.
    pub fn sdk_meta(&self) -> Result<SdkMeta> {
        SdkMeta::with_overrides(&self.sdk.overrides())
            .with_context(|| "invalid [sdk] section")
    }
}

impl std::str::FromStr for FmeConfig {
    type Err = anyhow::Error;

    fn from_str(content: &str) -> std::result::Result<Self, Self::Err> {
        let config: FmeConfig =
            toml::from_str(content).with_context(|| "failed to parse configuration")?;
        config.validate()?;
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use vwo_fme_logging::LogFormat;
    use vwo_fme_version::VERSION_STRING;

    #[test]
    fn empty_document_uses_defaults() {
        let config: FmeConfig = "".parse().expect("empty config is valid");
        assert_eq!(config, FmeConfig::default());
        assert_eq!(config.sdk_meta().expect("builtin"), SdkMeta::builtin());
    }

    #[test]
    fn parses_overrides_and_logging() {
        let config: FmeConfig = r#"
            [sdk]
            name = "vwo-fme-react-native-sdk"
            version = "2.3.1"

            [logging]
            directory = "/tmp/fme-logs"
            format = "pretty"
        "#
        .parse()
        .expect("valid config");
        let meta = config.sdk_meta().expect("valid identity");
        assert_eq!(meta.name, "vwo-fme-react-native-sdk");
        assert_eq!(meta.version, "2.3.1");
        assert_eq!(config.logging.format, LogFormat::Pretty);
        assert_eq!(config.logging.directory, PathBuf::from("/tmp/fme-logs"));
    }

    #[test]
    fn name_only_override_keeps_module_version() {
        let config: FmeConfig = "[sdk]\nname = \"wrapper\"\n".parse().expect("valid");
        assert_eq!(config.sdk_meta().expect("identity").version, VERSION_STRING);
    }

    #[test]
    fn rejects_bad_overrides() {
        let err = "[sdk]\nversion = \"latest\"\n"
            .parse::<FmeConfig>()
            .expect_err("unparseable version");
        assert!(format!("{err:#}").contains("sdk version override is invalid"));

        assert!("[sdk]\nname = \"  \"\n".parse::<FmeConfig>().is_err());
        assert!("[logging]\nformat = \"xml\"\n".parse::<FmeConfig>().is_err());
    }
}
