pub mod cache;
pub mod http;

pub use cache::{ComponentTable, RegistryLoader, TableSource};
pub use http::{HttpSourceFetcher, SourceFetcher};
