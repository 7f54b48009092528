use thiserror::Error;

/// Errors raised while resolving kits and components.
///
/// The type is `Clone` because a single population run hands its outcome
/// to every caller that was waiting on it.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RegistryError {
    #[error("Kit not found: {0}")]
    KitNotFound(String),

    #[error("Component not found: {kit}/{name}")]
    ComponentNotFound { kit: String, name: String },

    #[error("Population of kit '{kit}' failed: {reason}")]
    PopulationFailed { kit: String, reason: String },

    #[error("Fetch of {url} failed: {reason}")]
    Fetch { url: String, reason: String },

    #[error("Internal error: {0}")]
    Internal(String),
}

impl RegistryError {
    /// True for errors that a later request may not hit again.
    pub fn is_transient(&self) -> bool {
        matches!(self, Self::PopulationFailed { .. } | Self::Fetch { .. })
    }
}

pub type Result<T> = std::result::Result<T, RegistryError>;
