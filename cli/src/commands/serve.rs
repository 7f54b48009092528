use anyhow::{Context, Result};
use kitreg_core::ProviderRegistry;

use crate::config::KitregConfig;

pub async fn start_server(config: &KitregConfig, host: &str, port: u16, verbose: bool) -> Result<()> {
    crate::logging::init(verbose)?;

    if verbose {
        tracing::info!("Verbose logging enabled");
    }

    let registry = ProviderRegistry::with_builtin_kits(&config.builtin_kits())
        .context("Failed to build provider registry")?;

    tracing::info!(
        "Registered {} kits: {}",
        registry.kits().len(),
        registry.kits().join(", ")
    );

    let listener = tokio::net::TcpListener::bind((host, port))
        .await
        .with_context(|| format!("Failed to bind {}:{}", host, port))?;
    let addr = listener.local_addr()?;

    tracing::info!("kitreg server listening on http://{}", addr);
    eprintln!("🚀 kitreg server running at http://{}", addr);

    axum::serve(listener, crate::server::router(registry))
        .with_graceful_shutdown(async {
            tokio::signal::ctrl_c().await.ok();
            eprintln!("Received shutdown signal...");
        })
        .await?;

    tracing::info!("kitreg server stopped");
    Ok(())
}
