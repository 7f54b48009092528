//! HTTP client for the query service
//!
//! The strict calls (`list_components`, `get_component`) back the CLI and
//! report server errors. The lenient calls mirror what a web front-end needs:
//! any failure degrades to an empty list or an absent component.

use anyhow::{Context, Result};
use kitreg_core::{ComponentData, ComponentMeta};
use reqwest::{StatusCode, Url};
use serde::de::DeserializeOwned;
use std::time::Duration;
use tracing::warn;

use crate::server::ApiError;

#[derive(Clone)]
pub struct KitClient {
    http: reqwest::Client,
    base_url: Url,
}

impl KitClient {
    pub fn new(base_url: &str) -> Result<Self> {
        let base_url =
            Url::parse(base_url).with_context(|| format!("Invalid server URL: {}", base_url))?;
        if base_url.cannot_be_a_base() {
            anyhow::bail!("Invalid server URL: {}", base_url);
        }

        let http = reqwest::Client::builder()
            .timeout(Duration::from_secs(30))
            .build()
            .map_err(|e| anyhow::anyhow!("Failed to create HTTP client: {}", e))?;

        Ok(Self { http, base_url })
    }

    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    /// `{base}/{kit}/components[/{name}]` with each segment escaped
    pub fn components_url(&self, kit: &str, name: Option<&str>) -> Url {
        let mut url = self.base_url.clone();
        if let Ok(mut segments) = url.path_segments_mut() {
            segments.pop_if_empty().push(kit).push("components");
            if let Some(name) = name {
                segments.push(name);
            }
        }
        url
    }

    pub async fn list_components(&self, kit: &str) -> Result<Vec<ComponentMeta>> {
        self.fetch_json(self.components_url(kit, None)).await
    }

    pub async fn get_component(&self, kit: &str, name: &str) -> Result<ComponentData> {
        self.fetch_json(self.components_url(kit, Some(name))).await
    }

    /// Component list, or empty on any transport or server failure
    pub async fn components_or_empty(&self, kit: &str) -> Vec<ComponentMeta> {
        self.list_components(kit).await.unwrap_or_else(|e| {
            warn!("Error fetching components: {:#}", e);
            Vec::new()
        })
    }

    /// Component, or `None` on any transport or server failure
    pub async fn component_or_none(&self, kit: &str, name: &str) -> Option<ComponentData> {
        self.get_component(kit, name)
            .await
            .map_err(|e| warn!("Error fetching component: {:#}", e))
            .ok()
    }

    async fn fetch_json<T: DeserializeOwned>(&self, url: Url) -> Result<T> {
        let response = self
            .http
            .get(url.clone())
            .send()
            .await
            .with_context(|| format!("Failed to reach kitreg server at {}", self.base_url))?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            anyhow::bail!("{}", describe_failure(status, &body));
        }

        response
            .json()
            .await
            .with_context(|| format!("Invalid response from {}", url))
    }
}

/// The server's `error` message when it sent one, else the status line
fn describe_failure(status: StatusCode, body: &str) -> String {
    match serde_json::from_str::<ApiError>(body) {
        Ok(api_error) => api_error.error,
        Err(_) => format!("Server returned status {}", status),
    }
}
