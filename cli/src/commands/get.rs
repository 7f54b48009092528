use anyhow::{Context, Result};
use std::path::Path;

use crate::client::KitClient;

/// Print a component's `.tsx` source, or write it to `out`
pub async fn get(client: &KitClient, kit: &str, name: &str, out: Option<&Path>) -> Result<()> {
    let component = client.get_component(kit, name).await?;

    match out {
        Some(path) => {
            if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
                tokio::fs::create_dir_all(parent)
                    .await
                    .with_context(|| format!("Failed to create directory: {}", parent.display()))?;
            }
            tokio::fs::write(path, &component.code.tsx)
                .await
                .with_context(|| format!("Failed to write {}", path.display()))?;
            println!("✅ Saved to {}", path.display());
        }
        None => {
            println!("🧩 {}.tsx", name);
            println!("{}", component.code.tsx);
        }
    }

    Ok(())
}
