//! Hand-authored sample kit

use crate::kits::StaticProvider;
use crate::types::{ComponentCode, ComponentData, ComponentMeta};

pub const KIT_NAME: &str = "demo";

pub fn components() -> Vec<ComponentData> {
    vec![ComponentData {
        metadata: ComponentMeta::new("button", "0.1.0")
            .with_tags(["action", "form"])
            .with_themes(["default"]),
        code: ComponentCode {
            tsx: r#"<button className="bg-primary text-white py-2 px-4 rounded">Click me</button>"#
                .to_string(),
            css: Some(".bg-primary { background-color: #1d4ed8; }".to_string()),
        },
        preview_url: Some("https://dummycdn.com/previews/button.png".to_string()),
    }]
}

pub fn provider() -> StaticProvider {
    StaticProvider::new(KIT_NAME, components())
}
