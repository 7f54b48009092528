//! shadcn/ui kit, populated from the upstream registry sources

use std::sync::Arc;

use crate::kits::{RemoteManifest, RemoteProvider};
use crate::runtime::SourceFetcher;

pub const KIT_NAME: &str = "shadcn";

pub const DEFAULT_BASE_URL: &str =
    "https://raw.githubusercontent.com/shadcn-ui/ui/main/apps/www/registry/default/ui";

/// Component files published by the kit
pub const COMPONENT_FILES: &[&str] = &[
    "accordion.tsx",
    "alert.tsx",
    "alert-dialog.tsx",
    "aspect-ratio.tsx",
    "avatar.tsx",
    "badge.tsx",
    "breadcrumb.tsx",
    "button.tsx",
    "calendar.tsx",
    "card.tsx",
    "carousel.tsx",
    "chart.tsx",
    "checkbox.tsx",
    "collapsible.tsx",
    "command.tsx",
    "context-menu.tsx",
    "dialog.tsx",
    "drawer.tsx",
    "dropdown-menu.tsx",
    "form.tsx",
    "hover-card.tsx",
    "input.tsx",
    "input-otp.tsx",
    "label.tsx",
    "menubar.tsx",
    "navigation-menu.tsx",
    "pagination.tsx",
    "popover.tsx",
    "progress.tsx",
    "radio-group.tsx",
    "resizable.tsx",
    "scroll-area.tsx",
    "select.tsx",
    "separator.tsx",
    "sheet.tsx",
    "sidebar.tsx",
    "skeleton.tsx",
    "slider.tsx",
    "sonner.tsx",
    "switch.tsx",
    "table.tsx",
    "tabs.tsx",
    "textarea.tsx",
    "toast.tsx",
    "toaster.tsx",
    "toggle.tsx",
    "toggle-group.tsx",
    "tooltip.tsx",
];

pub fn manifest(base_url: impl Into<String>) -> RemoteManifest {
    RemoteManifest::new(base_url, COMPONENT_FILES.iter().copied())
}

pub fn provider(base_url: impl Into<String>, fetcher: Arc<dyn SourceFetcher>) -> RemoteProvider {
    RemoteProvider::new(KIT_NAME, manifest(base_url), fetcher)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_manifest_names_are_unique() {
        let names: HashSet<_> = COMPONENT_FILES
            .iter()
            .map(|f| crate::kits::remote::component_name(f))
            .collect();
        assert_eq!(names.len(), COMPONENT_FILES.len());
        assert!(names.contains("button"));
    }

    #[test]
    fn test_manifest_points_at_base_url() {
        let manifest = manifest(DEFAULT_BASE_URL);
        assert_eq!(manifest.files.len(), 48);
        assert_eq!(
            manifest.url_for("button.tsx"),
            format!("{}/button.tsx", DEFAULT_BASE_URL)
        );
    }
}
