//! Configuration schema for kitreg
//!
//! Every section and field has a default, so a missing or partial file is
//! always a valid configuration.

use std::time::Duration;

use kitreg_core::kits::shadcn;
use kitreg_core::registry::BuiltinKits;
use serde::{Deserialize, Serialize};

pub const DEFAULT_HOST: &str = "127.0.0.1";
pub const DEFAULT_PORT: u16 = 3001;
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Main configuration structure for kitreg
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
pub struct KitregConfig {
    #[serde(default)]
    pub server: ServerConfig,

    #[serde(default)]
    pub sources: SourcesConfig,

    #[serde(default)]
    pub client: ClientConfig,
}

/// Where the query service listens
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: DEFAULT_HOST.to_string(),
            port: DEFAULT_PORT,
        }
    }
}

/// Upstream sources for remote kits
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
#[serde(default)]
pub struct SourcesConfig {
    pub shadcn: RemoteSourceConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct RemoteSourceConfig {
    /// Base URL the kit's component files are served under
    pub base_url: String,

    /// Per-file fetch timeout
    pub timeout_secs: u64,
}

impl Default for RemoteSourceConfig {
    fn default() -> Self {
        Self {
            base_url: shadcn::DEFAULT_BASE_URL.to_string(),
            timeout_secs: DEFAULT_TIMEOUT_SECS,
        }
    }
}

/// Settings for the `list` and `get` commands
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct ClientConfig {
    pub server_url: String,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            server_url: format!("http://localhost:{}", DEFAULT_PORT),
        }
    }
}

impl KitregConfig {
    /// Validate the configuration for common errors
    ///
    /// Returns Ok(()) if valid, or Err with a list of error messages
    pub fn validate(&self) -> Result<(), Vec<String>> {
        let mut errors = Vec::new();

        if self.server.port == 0 {
            errors.push("server.port must not be 0".to_string());
        }
        if self.server.host.trim().is_empty() {
            errors.push("server.host must not be empty".to_string());
        }
        if !is_http_url(&self.sources.shadcn.base_url) {
            errors.push(format!(
                "sources.shadcn.base_url must be an http(s) URL, got '{}'",
                self.sources.shadcn.base_url
            ));
        }
        if self.sources.shadcn.timeout_secs == 0 {
            errors.push("sources.shadcn.timeout_secs must be greater than 0".to_string());
        }
        if !is_http_url(&self.client.server_url) {
            errors.push(format!(
                "client.server_url must be an http(s) URL, got '{}'",
                self.client.server_url
            ));
        }

        if errors.is_empty() {
            Ok(())
        } else {
            Err(errors)
        }
    }

    /// Settings for the built-in kits
    pub fn builtin_kits(&self) -> BuiltinKits {
        BuiltinKits {
            shadcn_base_url: self.sources.shadcn.base_url.clone(),
            fetch_timeout: Duration::from_secs(self.sources.shadcn.timeout_secs),
        }
    }
}

fn is_http_url(value: &str) -> bool {
    value.starts_with("http://") || value.starts_with("https://")
}
