//! Path resolution for intflabel
//!
//! # Environment Variables
//!
//! - `INTFLABEL_CONFIG_DIR` - Override config directory
//!
//! # Path Resolution Priority
//!
//! For config_dir():
//! 1. `INTFLABEL_CONFIG_DIR` environment variable
//! 2. `XDG_CONFIG_HOME/intflabel` (if set)
//! 3. `~/.config/intflabel`

use anyhow::{Context, Result};
use std::path::{Path, PathBuf};

/// Environment variable for config directory override
pub const ENV_CONFIG_DIR: &str = "INTFLABEL_CONFIG_DIR";

const APP_DIR: &str = "intflabel";

/// Config file name inside the config directory
pub const CONFIG_FILE: &str = "config.toml";

/// Get the intflabel config directory path
pub fn config_dir() -> Result<PathBuf> {
    resolve_config_dir(
        std::env::var(ENV_CONFIG_DIR).ok(),
        std::env::var("XDG_CONFIG_HOME").ok(),
        dirs::home_dir(),
    )
}

/// Get the config file path
pub fn config_file() -> Result<PathBuf> {
    Ok(config_dir()?.join(CONFIG_FILE))
}

fn resolve_config_dir(
    override_dir: Option<String>,
    xdg_config: Option<String>,
    home: Option<PathBuf>,
) -> Result<PathBuf> {
    if let Some(dir) = override_dir.filter(|d| !d.is_empty()) {
        let path = expand(&dir);
        log::debug!("Using config dir from {}: {}", ENV_CONFIG_DIR, path.display());
        return Ok(path);
    }

    if let Some(xdg) = xdg_config.filter(|d| !d.is_empty()) {
        let path = Path::new(&xdg).join(APP_DIR);
        log::debug!("Using XDG_CONFIG_HOME: {}", path.display());
        return Ok(path);
    }

    let home = home.context("Could not determine home directory")?;
    let path = home.join(".config").join(APP_DIR);
    log::debug!("Using default config dir: {}", path.display());
    Ok(path)
}

/// Expand ~ and environment variables in a path string.
pub fn expand(path: &str) -> PathBuf {
    let expanded = shellexpand::full(path).unwrap_or(std::borrow::Cow::Borrowed(path));
    PathBuf::from(expanded.as_ref())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_override_wins() {
        let dir = resolve_config_dir(
            Some("/etc/intflabel".into()),
            Some("/xdg".into()),
            Some(PathBuf::from("/home/op")),
        )
        .unwrap();
        assert_eq!(dir, PathBuf::from("/etc/intflabel"));
    }

    #[test]
    fn test_xdg_before_home() {
        let dir = resolve_config_dir(None, Some("/xdg".into()), Some(PathBuf::from("/home/op")))
            .unwrap();
        assert_eq!(dir, PathBuf::from("/xdg/intflabel"));
    }

    #[test]
    fn test_home_default() {
        let dir = resolve_config_dir(Some(String::new()), None, Some(PathBuf::from("/home/op")))
            .unwrap();
        assert_eq!(dir, PathBuf::from("/home/op/.config/intflabel"));
    }

    #[test]
    fn test_no_home_is_error() {
        assert!(resolve_config_dir(None, None, None).is_err());
    }

    #[test]
    fn test_expand_plain_path() {
        assert_eq!(expand("/var/captures"), PathBuf::from("/var/captures"));
    }
}
