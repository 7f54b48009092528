//! Subcommand implementations

pub mod get;
pub mod kits;
pub mod list;
pub mod serve;
