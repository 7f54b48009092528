//! Directory path management for kitreg

use anyhow::{Context, Result};
use std::path::PathBuf;

/// Get the base kitreg directory (~/.config/kitreg/)
pub fn get_kitreg_dir() -> Result<PathBuf> {
    Ok(dirs::config_dir()
        .context("Failed to get config directory")?
        .join("kitreg"))
}

/// Get the config file path (~/.config/kitreg/config.toml)
pub fn get_config_path() -> Result<PathBuf> {
    Ok(get_kitreg_dir()?.join("config.toml"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_kitreg_dir_is_under_config() {
        let dir = get_kitreg_dir().unwrap();
        assert!(dir.ends_with("kitreg"));
        assert_eq!(dir.parent().unwrap(), dirs::config_dir().unwrap());
    }

    #[test]
    fn test_config_path() {
        assert_eq!(
            get_config_path().unwrap(),
            get_kitreg_dir().unwrap().join("config.toml")
        );
    }
}
