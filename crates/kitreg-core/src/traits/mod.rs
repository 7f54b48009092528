pub mod provider;

pub use provider::KitProvider;
