//! Icon reference resolution
//!
//! Consumers point at an icon three ways: a built-in `name`, an
//! explicit `src` URL, or the loose `icon` input that may carry either.
//! Resolution turns those into at most one fetchable URL plus an
//! accessible label.

use gricons_core::naming;

/// Declarative inputs naming which icon to show.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct IconHandle {
    /// Name of a packaged icon, e.g. `airplane-outline`.
    pub name: Option<String>,
    /// URL of an external SVG, wins over everything else.
    pub src: Option<String>,
    /// Name or URL; classified by shape.
    pub icon: Option<String>,
    /// Explicit accessible label.
    pub label: Option<String>,
}

impl IconHandle {
    /// Handle for a packaged icon.
    #[must_use]
    pub fn named(name: &str) -> Self {
        Self {
            name: Some(name.to_string()),
            ..Self::default()
        }
    }

    /// Handle for an external SVG URL.
    #[must_use]
    pub fn from_src(src: &str) -> Self {
        Self {
            src: Some(src.to_string()),
            ..Self::default()
        }
    }

    /// The URL to fetch, or `None` when no input resolves.
    ///
    /// `src` wins; a resolved name maps to `{asset_base}/svg/{name}.svg`;
    /// a URL-shaped `icon` is used as-is last.
    #[must_use]
    pub fn resolve_url(&self, asset_base: &str) -> Option<String> {
        if let Some(src) = as_src(self.src.as_deref()) {
            return Some(src.to_string());
        }
        if let Some(name) = self.resolved_name() {
            return Some(named_url(asset_base, name));
        }
        as_src(self.icon.as_deref()).map(str::to_string)
    }

    /// The icon name in play, if the inputs name one.
    ///
    /// `icon` counts as a name only when it does not look like a URL.
    #[must_use]
    pub fn resolved_name(&self) -> Option<&str> {
        if let Some(name) = non_empty(self.name.as_deref()) {
            return Some(name);
        }
        non_empty(self.icon.as_deref()).filter(|icon| as_src(Some(icon)).is_none())
    }

    /// Accessible label: the explicit label, else the resolved name
    /// with hyphens rendered as spaces.
    #[must_use]
    pub fn aria_label(&self) -> Option<String> {
        if let Some(label) = non_empty(self.label.as_deref()) {
            return Some(label.to_string());
        }
        self.resolved_name().map(naming::display_label)
    }
}

fn non_empty(value: Option<&str>) -> Option<&str> {
    value.map(str::trim).filter(|v| !v.is_empty())
}

/// A value counts as a source URL when it has a path separator or an
/// extension dot; plain icon names have neither.
fn as_src(value: Option<&str>) -> Option<&str> {
    non_empty(value).filter(|v| v.contains('/') || v.contains('.'))
}

fn named_url(asset_base: &str, name: &str) -> String {
    format!("{}/svg/{name}.svg", asset_base.trim_end_matches('/'))
}
