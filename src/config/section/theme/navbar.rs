//! `[theme.navbar]` configuration.
//!
//! ```toml
//! [theme.navbar]
//! title = "Fireproof"
//! logo = { alt = "Fireproof Flame Logo", src = "img/logo.svg", href = "https://fireproof.storage/" }
//!
//! [[theme.navbar.items]]
//! type = "doc-sidebar"
//! sidebar_id = "tutorialSidebar"
//! label = "Documentation"
//!
//! [[theme.navbar.items]]
//! to = "https://github.com/fireproof-storage/fireproof"
//! label = "Star me on GitHub"
//! position = "right"
//! ```

use serde::{Deserialize, Serialize};

use crate::config::{ConfigDiagnostics, FieldPath};

/// Top navigation bar.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct NavbarConfig {
    /// Text next to the logo. Falls back to the site title.
    pub title: Option<String>,
    pub logo: Option<LogoConfig>,
    /// Display order is authoring order within each position.
    pub items: Vec<NavItem>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LogoConfig {
    pub alt: String,
    /// Image path relative to the static directory.
    pub src: String,
    /// Logo link target; the site root when unset.
    pub href: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NavItem {
    #[serde(rename = "type", default)]
    pub kind: NavItemType,
    pub label: String,
    /// Internal route or external URL (`link` items).
    #[serde(default, alias = "href")]
    pub to: Option<String>,
    /// Sidebar whose first entry is the target (`doc-sidebar` items).
    #[serde(default)]
    pub sidebar_id: Option<String>,
    #[serde(default)]
    pub position: NavPosition,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum NavItemType {
    DocSidebar,
    #[default]
    Link,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NavPosition {
    #[default]
    Left,
    Right,
}

impl NavbarConfig {
    pub const FIELD_LOGO_SRC: FieldPath = FieldPath::new("theme.navbar.logo.src");

    /// Validate navbar items.
    ///
    /// # Checks
    /// - every item has a non-empty label
    /// - `doc-sidebar` items name a sidebar
    /// - `link` items have a target
    pub fn validate(&self, diag: &mut ConfigDiagnostics) {
        if let Some(logo) = &self.logo
            && logo.src.trim().is_empty()
        {
            diag.error(Self::FIELD_LOGO_SRC, "logo src must not be empty");
        }

        for (i, item) in self.items.iter().enumerate() {
            if item.label.trim().is_empty() {
                diag.error(
                    FieldPath::indexed("theme.navbar.items", i, "label"),
                    "navbar item label must not be empty",
                );
            }
            match item.kind {
                NavItemType::DocSidebar if item.sidebar_id.is_none() => {
                    diag.error_with_hint(
                        FieldPath::indexed("theme.navbar.items", i, "sidebar_id"),
                        "doc-sidebar item needs a sidebar_id",
                        "e.g. sidebar_id = \"tutorialSidebar\"",
                    );
                }
                NavItemType::Link if item.to.as_deref().is_none_or(|t| t.trim().is_empty()) => {
                    diag.error_with_hint(
                        FieldPath::indexed("theme.navbar.items", i, "to"),
                        "link item needs a target",
                        "set `to` to a route like \"/docs/intro\" or a full URL",
                    );
                }
                _ => {}
            }
        }
    }
}
