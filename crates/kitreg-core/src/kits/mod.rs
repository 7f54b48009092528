//! Built-in kit backends

pub mod demo;
pub mod fixed;
pub mod remote;
pub mod shadcn;

pub use fixed::StaticProvider;
pub use remote::{FetchBatch, FetchFailure, RemoteManifest, RemoteProvider};
