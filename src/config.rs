use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

use crate::paths;

/// intflabel configuration, loaded from `config.toml`
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Config {
    #[serde(default)]
    pub device: DeviceConfig,

    #[serde(default)]
    pub fex: FexConfig,
}

/// How commands reach the device
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct DeviceConfig {
    /// Program and leading arguments used to run one CLI line
    #[serde(default = "default_exec")]
    pub exec: Vec<String>,

    /// Directory of captured command output used instead of the device
    #[serde(default)]
    pub fixtures: Option<String>,
}

fn default_exec() -> Vec<String> {
    labelkit::source::shell::DEFAULT_EXEC
        .iter()
        .map(ToString::to_string)
        .collect()
}

impl Default for DeviceConfig {
    fn default() -> Self {
        Self {
            exec: default_exec(),
            fixtures: None,
        }
    }
}

impl DeviceConfig {
    /// Fixture directory with `~` and variables expanded
    pub fn fixtures_path(&self) -> Option<PathBuf> {
        self.fixtures.as_deref().map(paths::expand)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct FexConfig {
    #[serde(default)]
    pub support: FexSupport,
}

/// Whether to collect fabric extender facts
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FexSupport {
    /// Ask the device
    #[default]
    Auto,
    Enabled,
    Disabled,
}

impl Config {
    /// Load the config file, or defaults if it does not exist
    pub fn load() -> Result<Self> {
        Self::load_from(&paths::config_file()?)
    }

    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            log::debug!("No config at {}, using defaults", path.display());
            return Ok(Self::default());
        }

        let content = fs::read_to_string(path)
            .with_context(|| format!("Could not read config file: {}", path.display()))?;
        let config: Self = toml::from_str(&content)
            .with_context(|| format!("Invalid TOML format in {}", path.display()))?;
        config.validate()?;
        Ok(config)
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<()> {
        if self.device.exec.is_empty() || self.device.exec[0].trim().is_empty() {
            anyhow::bail!("device.exec must name a program");
        }
        Ok(())
    }

    pub fn to_toml(&self) -> Result<String> {
        toml::to_string_pretty(self).context("Failed to serialize config")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_missing_file_gives_defaults() {
        let temp = TempDir::new().unwrap();
        let config = Config::load_from(&temp.path().join("config.toml")).unwrap();
        assert_eq!(config, Config::default());
        assert_eq!(config.device.exec, vec!["vsh", "-c"]);
        assert_eq!(config.fex.support, FexSupport::Auto);
    }

    #[test]
    fn test_load_full_config() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("config.toml");
        fs::write(
            &path,
            r#"
[device]
exec = ["ssh", "-T", "admin@leaf1"]
fixtures = "/srv/captures/leaf1"

[fex]
support = "disabled"
"#,
        )
        .unwrap();

        let config = Config::load_from(&path).unwrap();
        assert_eq!(config.device.exec, vec!["ssh", "-T", "admin@leaf1"]);
        assert_eq!(
            config.device.fixtures_path(),
            Some(PathBuf::from("/srv/captures/leaf1"))
        );
        assert_eq!(config.fex.support, FexSupport::Disabled);
    }

    #[test]
    fn test_empty_exec_is_rejected() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("config.toml");
        fs::write(&path, "[device]\nexec = []\n").unwrap();
        assert!(Config::load_from(&path).is_err());
    }

    #[test]
    fn test_unknown_key_is_rejected() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("config.toml");
        fs::write(&path, "[fex]\nsupport = \"auto\"\ntimeout = 5\n").unwrap();
        assert!(Config::load_from(&path).is_err());
    }

    #[test]
    fn test_round_trips_through_toml() {
        let config = Config::default();
        let parsed: Config = toml::from_str(&config.to_toml().unwrap()).unwrap();
        assert_eq!(parsed, config);
    }
}
