//! Component records shared by every provider.

use serde::{Deserialize, Serialize};

/// Version stamped on records built from raw upstream sources
pub const DEFAULT_COMPONENT_VERSION: &str = "0.1.0";

/// Theme stamped on records built from raw upstream sources
pub const DEFAULT_THEME: &str = "default";

/// Descriptive metadata for one component
///
/// `name` is unique within a kit and is the only lookup key.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ComponentMeta {
    pub name: String,
    pub version: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tags: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub themes: Option<Vec<String>>,
}

impl ComponentMeta {
    pub fn new(name: impl Into<String>, version: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            version: version.into(),
            tags: None,
            themes: None,
        }
    }

    pub fn with_tags<I, S>(mut self, tags: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.tags = Some(tags.into_iter().map(Into::into).collect());
        self
    }

    pub fn with_themes<I, S>(mut self, themes: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.themes = Some(themes.into_iter().map(Into::into).collect());
        self
    }
}

/// Source payload of a component
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ComponentCode {
    pub tsx: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub css: Option<String>,
}

/// Full component record: metadata plus payload
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ComponentData {
    pub metadata: ComponentMeta,
    pub code: ComponentCode,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub preview_url: Option<String>,
}

impl ComponentData {
    /// Wrap a raw upstream `.tsx` payload the way remote kits publish it:
    /// empty css, default version, no tags and the default theme.
    pub fn from_source(name: impl Into<String>, tsx: impl Into<String>) -> Self {
        Self {
            metadata: ComponentMeta::new(name, DEFAULT_COMPONENT_VERSION)
                .with_tags(Vec::<String>::new())
                .with_themes([DEFAULT_THEME]),
            code: ComponentCode {
                tsx: tsx.into(),
                css: Some(String::new()),
            },
            preview_url: None,
        }
    }

    pub fn name(&self) -> &str {
        &self.metadata.name
    }
}
