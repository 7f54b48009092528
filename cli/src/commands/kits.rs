use anyhow::Result;
use kitreg_core::ProviderRegistry;

use crate::config::KitregConfig;

/// Print the kits a server started with `config` would expose.
/// Nothing is fetched.
pub fn kits(config: &KitregConfig) -> Result<()> {
    let registry = ProviderRegistry::with_builtin_kits(&config.builtin_kits())?;
    for kit in registry.kits() {
        println!("{}", kit);
    }
    Ok(())
}
