//! Kits populated from a closed manifest of files on a remote HTTP source

use std::sync::Arc;

use async_trait::async_trait;
use futures_util::future;
use tracing::{error, info, instrument};

use crate::error::{RegistryError, Result};
use crate::runtime::{ComponentTable, RegistryLoader, SourceFetcher, TableSource};
use crate::traits::KitProvider;
use crate::types::{ComponentData, ComponentMeta};

/// Fixed list of component files served under one base URL
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RemoteManifest {
    pub base_url: String,
    pub files: Vec<String>,
}

impl RemoteManifest {
    pub fn new<I, S>(base_url: impl Into<String>, files: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            base_url: base_url.into(),
            files: files.into_iter().map(Into::into).collect(),
        }
    }

    /// `{base_url}/{file}`
    pub fn url_for(&self, file: &str) -> String {
        format!("{}/{}", self.base_url.trim_end_matches('/'), file)
    }
}

/// Component name for a manifest file: the file name without its extension
pub fn component_name(file: &str) -> &str {
    file.rsplit_once('.').map_or(file, |(stem, _)| stem)
}

/// One file that could not be fetched
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FetchFailure {
    pub file: String,
    pub reason: String,
}

/// Outcome of one fan-out fetch over a manifest
#[derive(Debug, Clone, Default)]
pub struct FetchBatch {
    /// Successfully fetched records, in manifest order
    pub fetched: Vec<ComponentData>,
    pub failed: Vec<FetchFailure>,
}

/// Fetch every manifest file concurrently. A failing file is logged and
/// recorded in [`FetchBatch::failed`]; it never aborts the batch.
#[instrument(skip_all, fields(base_url = %manifest.base_url, files = manifest.files.len()))]
pub async fn fetch_batch(fetcher: &dyn SourceFetcher, manifest: &RemoteManifest) -> FetchBatch {
    let fetches = manifest.files.iter().map(|file| async move {
        let name = component_name(file);
        let url = manifest.url_for(file);
        match fetcher.get(&url).await {
            Ok(tsx) => Ok(ComponentData::from_source(name, tsx)),
            Err(e) => {
                error!("Failed to fetch {}: {}", name, e);
                Err(FetchFailure {
                    file: file.clone(),
                    reason: e.to_string(),
                })
            }
        }
    });

    let mut batch = FetchBatch::default();
    for outcome in future::join_all(fetches).await {
        match outcome {
            Ok(record) => batch.fetched.push(record),
            Err(failure) => batch.failed.push(failure),
        }
    }
    batch
}

struct RemoteSource {
    kit: String,
    manifest: RemoteManifest,
    fetcher: Arc<dyn SourceFetcher>,
}

#[async_trait]
impl TableSource for RemoteSource {
    async fn populate(&self) -> Result<ComponentTable> {
        let batch = fetch_batch(self.fetcher.as_ref(), &self.manifest).await;

        // Nothing fetched out of a non-empty manifest means the source is down,
        // not that the kit is empty.
        if batch.fetched.is_empty() && !self.manifest.files.is_empty() {
            let reason = match batch.failed.first() {
                Some(first) => format!(
                    "all {} fetches failed (first: {}: {})",
                    batch.failed.len(),
                    first.file,
                    first.reason
                ),
                None => "no components fetched".to_string(),
            };
            return Err(RegistryError::PopulationFailed {
                kit: self.kit.clone(),
                reason,
            });
        }

        info!(
            kit = %self.kit,
            fetched = batch.fetched.len(),
            failed = batch.failed.len(),
            "Remote population finished"
        );
        Ok(ComponentTable::from_records(batch.fetched))
    }
}

/// Kit whose table is fetched from a remote source on first access
#[derive(Clone)]
pub struct RemoteProvider {
    manifest: RemoteManifest,
    loader: RegistryLoader,
}

impl RemoteProvider {
    pub fn new(
        kit: impl Into<String>,
        manifest: RemoteManifest,
        fetcher: Arc<dyn SourceFetcher>,
    ) -> Self {
        let kit = kit.into();
        let source = RemoteSource {
            kit: kit.clone(),
            manifest: manifest.clone(),
            fetcher,
        };
        Self {
            manifest,
            loader: RegistryLoader::new(kit, Arc::new(source)),
        }
    }

    pub fn manifest(&self) -> &RemoteManifest {
        &self.manifest
    }

    pub fn loader(&self) -> &RegistryLoader {
        &self.loader
    }
}

#[async_trait]
impl KitProvider for RemoteProvider {
    async fn list_components(&self) -> Result<Vec<ComponentMeta>> {
        Ok(self.loader.load().await?.metas())
    }

    async fn get_component(&self, name: &str) -> Result<Option<ComponentData>> {
        Ok(self.loader.load().await?.get(name).cloned())
    }
}
