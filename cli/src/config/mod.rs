//! Configuration management for kitreg
//!
//! - `schema` - Configuration data structures
//! - `io` - Reading the config file and applying environment overrides
//! - `paths` - Directory path management
//!
//! ## Usage
//!
//! ```rust,no_run
//! use kitreg::config;
//!
//! # fn example() -> anyhow::Result<()> {
//! // Load config (returns default if file doesn't exist)
//! let config = config::load_config()?;
//! let port = config::resolve_port(None, &config)?;
//! # Ok(())
//! # }
//! ```

pub mod io;
pub mod paths;
pub mod schema;

pub use io::{load_config, load_config_from, resolve_port, resolve_server_url};
pub use paths::{get_config_path, get_kitreg_dir};
pub use schema::{ClientConfig, KitregConfig, RemoteSourceConfig, ServerConfig, SourcesConfig};
