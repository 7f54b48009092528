//! Kit name → provider routing

use std::collections::HashMap;
use std::sync::Arc;
use std::time::Duration;

use tracing::debug;

use crate::error::{RegistryError, Result};
use crate::kits::{demo, shadcn};
use crate::runtime::{HttpSourceFetcher, SourceFetcher};
use crate::traits::KitProvider;
use crate::types::{ComponentData, ComponentMeta};

/// Settings for the built-in kits
#[derive(Debug, Clone)]
pub struct BuiltinKits {
    pub shadcn_base_url: String,
    pub fetch_timeout: Duration,
}

impl Default for BuiltinKits {
    fn default() -> Self {
        Self {
            shadcn_base_url: shadcn::DEFAULT_BASE_URL.to_string(),
            fetch_timeout: crate::runtime::http::DEFAULT_FETCH_TIMEOUT,
        }
    }
}

/// Fixed mapping from kit name to provider, built once at startup.
///
/// The registry keeps no cache of its own; each provider memoizes its table.
#[derive(Clone, Default)]
pub struct ProviderRegistry {
    providers: HashMap<String, Arc<dyn KitProvider>>,
}

impl ProviderRegistry {
    pub fn builder() -> ProviderRegistryBuilder {
        ProviderRegistryBuilder::default()
    }

    /// Registry with every built-in kit, fetching over HTTP
    pub fn with_builtin_kits(settings: &BuiltinKits) -> Result<Self> {
        let fetcher = HttpSourceFetcher::new(settings.fetch_timeout)?;
        Ok(Self::with_builtin_kits_using(
            &settings.shadcn_base_url,
            Arc::new(fetcher),
        ))
    }

    /// Registry with every built-in kit, fetching remote sources through `fetcher`
    pub fn with_builtin_kits_using(shadcn_base_url: &str, fetcher: Arc<dyn SourceFetcher>) -> Self {
        Self::builder()
            .register(shadcn::KIT_NAME, shadcn::provider(shadcn_base_url, fetcher))
            .register(demo::KIT_NAME, demo::provider())
            .build()
    }

    pub fn resolve(&self, kit: &str) -> Result<Arc<dyn KitProvider>> {
        self.providers
            .get(kit)
            .cloned()
            .ok_or_else(|| RegistryError::KitNotFound(kit.to_string()))
    }

    pub fn contains(&self, kit: &str) -> bool {
        self.providers.contains_key(kit)
    }

    /// Known kit names, sorted
    pub fn kits(&self) -> Vec<&str> {
        let mut kits: Vec<_> = self.providers.keys().map(String::as_str).collect();
        kits.sort_unstable();
        kits
    }

    pub async fn list_components(&self, kit: &str) -> Result<Vec<ComponentMeta>> {
        let provider = self.resolve(kit)?;
        debug!(kit, "Listing components");
        provider.list_components().await
    }

    /// Like [`KitProvider::get_component`] but a missing component is an error
    pub async fn get_component(&self, kit: &str, name: &str) -> Result<ComponentData> {
        let provider = self.resolve(kit)?;
        debug!(kit, name, "Fetching component");
        provider
            .get_component(name)
            .await?
            .ok_or_else(|| RegistryError::ComponentNotFound {
                kit: kit.to_string(),
                name: name.to_string(),
            })
    }
}

#[derive(Default)]
pub struct ProviderRegistryBuilder {
    providers: HashMap<String, Arc<dyn KitProvider>>,
}

impl ProviderRegistryBuilder {
    /// Register a provider; a later registration under the same name replaces it
    pub fn register<P>(mut self, kit: impl Into<String>, provider: P) -> Self
    where
        P: KitProvider + 'static,
    {
        self.providers.insert(kit.into(), Arc::new(provider));
        self
    }

    pub fn register_arc(mut self, kit: impl Into<String>, provider: Arc<dyn KitProvider>) -> Self {
        self.providers.insert(kit.into(), provider);
        self
    }

    pub fn build(self) -> ProviderRegistry {
        ProviderRegistry {
            providers: self.providers,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::kits::StaticProvider;

    fn registry() -> ProviderRegistry {
        ProviderRegistry::builder()
            .register(demo::KIT_NAME, demo::provider())
            .register("empty", StaticProvider::new("empty", vec![]))
            .build()
    }

    #[tokio::test]
    async fn test_unknown_kit_for_every_query() {
        let registry = registry();

        assert_eq!(
            registry.list_components("unknownkit").await.unwrap_err(),
            RegistryError::KitNotFound("unknownkit".into())
        );
        assert_eq!(
            registry
                .get_component("unknownkit", "button")
                .await
                .unwrap_err(),
            RegistryError::KitNotFound("unknownkit".into())
        );
    }

    #[tokio::test]
    async fn test_missing_component_in_known_kit() {
        let err = registry()
            .get_component("demo", "not-a-real-name")
            .await
            .unwrap_err();
        assert!(matches!(err, RegistryError::ComponentNotFound { .. }));
    }

    #[tokio::test]
    async fn test_demo_button() {
        let button = registry().get_component("demo", "button").await.unwrap();
        assert_eq!(button.metadata.name, "button");
        assert_eq!(
            button.metadata.tags,
            Some(vec!["action".to_string(), "form".to_string()])
        );
        assert!(button.code.css.unwrap().contains("#1d4ed8"));
        assert!(button.preview_url.is_some());
    }

    #[tokio::test]
    async fn test_empty_known_kit_lists_nothing() {
        assert!(registry().list_components("empty").await.unwrap().is_empty());
    }

    #[test]
    fn test_builtin_kits() {
        let registry = ProviderRegistry::with_builtin_kits(&BuiltinKits::default()).unwrap();
        assert_eq!(registry.kits(), vec!["demo", "shadcn"]);
        assert!(registry.contains("shadcn"));
        assert!(!registry.contains("material"));
    }
}
