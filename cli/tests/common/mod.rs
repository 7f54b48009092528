//! Shared helpers for kitreg integration tests

#![allow(dead_code)]

use std::collections::HashSet;
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use std::time::Duration;

use async_trait::async_trait;
use kitreg_core::{ProviderRegistry, RegistryError, SourceFetcher};

pub const UPSTREAM: &str = "https://upstream.test/ui";

/// Upstream stand-in serving `// <file>` for every file unless it is
/// switched off or the file is listed as missing
#[derive(Default)]
pub struct FakeUpstream {
    pub calls: AtomicUsize,
    pub down: AtomicBool,
    pub missing: HashSet<String>,
    pub delay: Duration,
}

impl FakeUpstream {
    pub fn healthy() -> Arc<Self> {
        Arc::new(Self::default())
    }

    pub fn slow(delay: Duration) -> Arc<Self> {
        Arc::new(Self {
            delay,
            ..Self::default()
        })
    }

    pub fn down() -> Arc<Self> {
        let upstream = Self::default();
        upstream.down.store(true, Ordering::SeqCst);
        Arc::new(upstream)
    }

    pub fn missing(files: &[&str]) -> Arc<Self> {
        Arc::new(Self {
            missing: files.iter().map(|f| f.to_string()).collect(),
            ..Self::default()
        })
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    pub fn recover(&self) {
        self.down.store(false, Ordering::SeqCst);
    }
}

#[async_trait]
impl SourceFetcher for FakeUpstream {
    async fn get(&self, url: &str) -> kitreg_core::Result<String> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        if !self.delay.is_zero() {
            tokio::time::sleep(self.delay).await;
        }
        let file = url.rsplit('/').next().unwrap_or_default();
        if self.down.load(Ordering::SeqCst) || self.missing.contains(file) {
            return Err(RegistryError::Fetch {
                url: url.to_string(),
                reason: "connection refused".into(),
            });
        }
        Ok(format!("// {}\nexport {{}}", file))
    }
}

/// Serve the built-in kits, fetching through `upstream`, on an ephemeral
/// port. Returns the server's base URL.
pub async fn spawn_server(upstream: Arc<FakeUpstream>) -> String {
    let registry = ProviderRegistry::with_builtin_kits_using(UPSTREAM, upstream);
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
        .await
        .expect("Failed to bind test listener");
    let addr = listener.local_addr().expect("Listener has no address");

    tokio::spawn(async move {
        axum::serve(listener, kitreg::server::router(registry))
            .await
            .expect("Test server failed");
    });

    format!("http://{}", addr)
}
