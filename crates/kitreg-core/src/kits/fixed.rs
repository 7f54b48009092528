use std::sync::Arc;

use async_trait::async_trait;

use crate::error::Result;
use crate::runtime::{ComponentTable, RegistryLoader, TableSource};
use crate::traits::KitProvider;
use crate::types::{ComponentData, ComponentMeta};

struct FixedTable(Vec<ComponentData>);

#[async_trait]
impl TableSource for FixedTable {
    async fn populate(&self) -> Result<ComponentTable> {
        Ok(ComponentTable::from_records(self.0.iter().cloned()))
    }
}

/// Kit backed by a hand-authored table. Never fails.
#[derive(Clone)]
pub struct StaticProvider {
    loader: RegistryLoader,
}

impl StaticProvider {
    pub fn new(kit: impl Into<String>, components: Vec<ComponentData>) -> Self {
        Self {
            loader: RegistryLoader::new(kit, Arc::new(FixedTable(components))),
        }
    }
}

#[async_trait]
impl KitProvider for StaticProvider {
    async fn list_components(&self) -> Result<Vec<ComponentMeta>> {
        Ok(self.loader.load().await?.metas())
    }

    async fn get_component(&self, name: &str) -> Result<Option<ComponentData>> {
        Ok(self.loader.load().await?.get(name).cloned())
    }
}
