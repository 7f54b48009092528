//! Core of the kitreg component registry.
//!
//! A kit is a named collection of UI component definitions served by one
//! [`KitProvider`]. Providers build their component table lazily through a
//! [`RegistryLoader`] and are looked up by kit name in a [`ProviderRegistry`].

pub mod error;
pub mod kits;
pub mod registry;
pub mod runtime;
pub mod traits;
pub mod types;

pub use error::{RegistryError, Result};
pub use kits::{RemoteProvider, StaticProvider};
pub use registry::ProviderRegistry;
pub use runtime::{ComponentTable, HttpSourceFetcher, RegistryLoader, SourceFetcher, TableSource};
pub use traits::KitProvider;
pub use types::{ComponentCode, ComponentData, ComponentMeta};
