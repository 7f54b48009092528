//! Configuration file loading and environment overrides

use super::paths::get_config_path;
use super::schema::KitregConfig;
use anyhow::{Context, Result};
use std::fs;
use std::path::Path;

/// Environment variable overriding the listen port
pub const PORT_ENV: &str = "PORT";

/// Environment variable overriding the server URL used by client commands
pub const SERVER_ENV: &str = "KITREG_SERVER";

/// Load configuration from the default location
///
/// Returns a default config if the file doesn't exist.
pub fn load_config() -> Result<KitregConfig> {
    load_config_from(&get_config_path()?)
}

/// Load configuration from `path`, validating it after parsing
pub fn load_config_from(path: &Path) -> Result<KitregConfig> {
    if !path.exists() {
        return Ok(KitregConfig::default());
    }

    let content =
        fs::read_to_string(path).context(format!("Failed to read config: {}", path.display()))?;

    let config: KitregConfig =
        toml::from_str(&content).context(format!("Failed to parse config: {}", path.display()))?;

    if let Err(errors) = config.validate() {
        anyhow::bail!(
            "Config validation failed in {}:\n  {}",
            path.display(),
            errors.join("\n  ")
        );
    }

    Ok(config)
}

/// Port precedence: flag > `PORT` > config file > default
pub fn resolve_port(flag: Option<u16>, config: &KitregConfig) -> Result<u16> {
    let env = std::env::var(PORT_ENV).ok();
    pick_port(flag, env.as_deref(), config)
}

/// Server URL precedence: flag > `KITREG_SERVER` > config file > default
pub fn resolve_server_url(flag: Option<String>, config: &KitregConfig) -> String {
    flag.or_else(|| std::env::var(SERVER_ENV).ok())
        .unwrap_or_else(|| config.client.server_url.clone())
}

fn pick_port(flag: Option<u16>, env: Option<&str>, config: &KitregConfig) -> Result<u16> {
    if let Some(port) = flag {
        return Ok(port);
    }
    match env.map(str::trim).filter(|v| !v.is_empty()) {
        Some(value) => value
            .parse()
            .with_context(|| format!("Invalid {} value: '{}'", PORT_ENV, value)),
        None => Ok(config.server.port),
    }
}
