//! Outbound fetching of raw component sources

use std::time::Duration;

use async_trait::async_trait;
use tracing::{debug, error, instrument};

use crate::error::{RegistryError, Result};

/// Default bound on a single outbound fetch
pub const DEFAULT_FETCH_TIMEOUT: Duration = Duration::from_secs(30);

/// Abstraction over the transport remote kits use to pull sources.
/// Implementations must be Send + Sync for use across async boundaries.
#[async_trait]
pub trait SourceFetcher: Send + Sync {
    /// Perform a GET request and return the body as text.
    /// Non-success statuses are errors.
    async fn get(&self, url: &str) -> Result<String>;
}

/// [`SourceFetcher`] backed by a shared `reqwest` client
#[derive(Clone)]
pub struct HttpSourceFetcher {
    client: reqwest::Client,
}

impl HttpSourceFetcher {
    /// Build a fetcher whose every request is bounded by `timeout`
    pub fn new(timeout: Duration) -> Result<Self> {
        let client = reqwest::Client::builder()
            .timeout(timeout)
            .user_agent(concat!("kitreg/", env!("CARGO_PKG_VERSION")))
            .build()
            .map_err(|e| RegistryError::Internal(format!("Failed to create HTTP client: {}", e)))?;

        Ok(Self { client })
    }
}

#[async_trait]
impl SourceFetcher for HttpSourceFetcher {
    #[instrument(skip(self))]
    async fn get(&self, url: &str) -> Result<String> {
        debug!("Sending HTTP GET request");
        let response = self.client.get(url).send().await.map_err(|e| {
            error!("HTTP request failed: {}", e);
            RegistryError::Fetch {
                url: url.to_string(),
                reason: e.to_string(),
            }
        })?;

        let status = response.status();
        debug!("Received HTTP response with status: {}", status);

        if !status.is_success() {
            return Err(RegistryError::Fetch {
                url: url.to_string(),
                reason: format!("upstream returned status {}", status),
            });
        }

        response.text().await.map_err(|e| {
            error!("Failed to read response body: {}", e);
            RegistryError::Fetch {
                url: url.to_string(),
                reason: format!("failed to read response: {}", e),
            }
        })
    }
}
