use anyhow::Result;
use kitreg_core::ComponentMeta;

use crate::client::KitClient;

/// Print `name  -  version` for every component of `kit`
pub async fn list(client: &KitClient, kit: &str) -> Result<()> {
    let components = client.list_components(kit).await?;
    if components.is_empty() {
        println!("No components available in kit '{}'", kit);
        return Ok(());
    }
    for line in render(&components) {
        println!("{}", line);
    }
    Ok(())
}

pub fn render(components: &[ComponentMeta]) -> Vec<String> {
    components
        .iter()
        .map(|c| format!("{}  -  {}", c.name, c.version))
        .collect()
}
