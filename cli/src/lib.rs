pub mod client;
pub mod commands;
pub mod config;
pub mod logging;
pub mod server;

pub use client::KitClient;
pub use config::KitregConfig;

/// Version of the kitreg CLI and server
pub const KITREG_VERSION: &str = env!("CARGO_PKG_VERSION");
