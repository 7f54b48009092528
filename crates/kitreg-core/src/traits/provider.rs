use async_trait::async_trait;

use crate::error::Result;
use crate::types::{ComponentData, ComponentMeta};

/// Defines the contract every kit backend implements.
///
/// An unknown component name inside a known kit is not an error: it is
/// reported as `Ok(None)`. Errors are reserved for the backing source being
/// entirely unavailable.
#[async_trait]
pub trait KitProvider: Send + Sync {
    /// List the metadata of every component in the kit, in kit order.
    /// An empty kit yields an empty list.
    async fn list_components(&self) -> Result<Vec<ComponentMeta>>;

    /// Fetch one component by name.
    async fn get_component(&self, name: &str) -> Result<Option<ComponentData>>;
}
