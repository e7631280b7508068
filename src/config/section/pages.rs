//! `[[pages]]` standalone page configuration.
//!
//! A page is a hero header followed by body sections, rendered in authoring
//! order.
//!
//! ```toml
//! [[pages]]
//! path = "/"
//! title = "Live database for the web"
//! description = "Simplify your application state with Fireproof."
//!
//! [[pages.hero.buttons]]
//! label = "Get Started"
//! to = "/docs/react-tutorial"
//! style = "primary"
//!
//! [[pages.sections]]
//! kind = "code"
//! language = "jsx"
//! code = "npm install use-fireproof"
//! ```

use serde::{Deserialize, Serialize};

use crate::config::{ConfigDiagnostics, FieldPath};

/// Number of cards in a feature grid (12-column grid, `col--4` each).
pub const FEATURE_COUNT: usize = 3;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PageConfig {
    /// Route of the page, relative to `site.base_url`.
    pub path: String,
    /// Layout title; the site title alone when unset.
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub hero: HeroConfig,
    #[serde(default)]
    pub sections: Vec<Section>,
}

/// Page header. Title and tagline default to the site's.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct HeroConfig {
    pub title: Option<String>,
    pub tagline: Option<String>,
    pub buttons: Vec<HeroButton>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HeroButton {
    pub label: String,
    pub to: String,
    #[serde(default)]
    pub style: ButtonStyle,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ButtonStyle {
    Primary,
    #[default]
    Secondary,
}

impl ButtonStyle {
    pub const fn class(self) -> &'static str {
        match self {
            Self::Primary => "button button--primary button--lg",
            Self::Secondary => "button button--secondary button--lg",
        }
    }
}

/// Body section, tagged by `kind`.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum Section {
    /// Grid of exactly three feature cards.
    Features { items: Vec<FeatureEntry> },
    /// Markdown block with an optional heading.
    Prose {
        #[serde(default)]
        heading: Option<String>,
        body: String,
    },
    /// Code snippet.
    Code { language: String, code: String },
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FeatureEntry {
    pub title: String,
    /// Emoji glyph, or an image path/URL.
    pub icon: String,
    /// Inline Markdown.
    pub description: String,
}

impl PageConfig {
    /// Validate every page.
    ///
    /// # Checks
    /// - `path` starts with `/` and is unique
    /// - feature sections hold exactly three entries with title and description
    /// - hero buttons have a label and a target
    pub fn validate_all(pages: &[Self], diag: &mut ConfigDiagnostics) {
        let mut seen = rustc_hash::FxHashSet::default();
        for (p, page) in pages.iter().enumerate() {
            if !page.path.starts_with('/') {
                diag.error_with_hint(
                    FieldPath::indexed("pages", p, "path"),
                    format!("'{}' must start with '/'", page.path),
                    "use \"/\" for the home page",
                );
            }
            let route = crate::utils::path::route::normalize_route(&page.path, "/");
            if !seen.insert(route.clone()) {
                diag.error(
                    FieldPath::indexed("pages", p, "path"),
                    format!("duplicate page route '{route}'"),
                );
            }
            page.validate(p, diag);
        }
    }

    fn validate(&self, p: usize, diag: &mut ConfigDiagnostics) {
        let prefix = format!("pages[{p}]");

        for (b, button) in self.hero.buttons.iter().enumerate() {
            if button.label.trim().is_empty() || button.to.trim().is_empty() {
                diag.error(
                    FieldPath::indexed(&format!("{prefix}.hero.buttons"), b, ""),
                    "hero button needs a label and a target",
                );
            }
        }

        for (s, section) in self.sections.iter().enumerate() {
            let Section::Features { items } = section else {
                continue;
            };
            let sections = format!("{prefix}.sections");
            if items.len() != FEATURE_COUNT {
                diag.error_with_hint(
                    FieldPath::indexed(&sections, s, "items"),
                    format!(
                        "feature list has {} entries, expected {FEATURE_COUNT}",
                        items.len()
                    ),
                    "the grid has three equal columns",
                );
            }
            let items_path = format!("{sections}[{s}].items");
            for (i, item) in items.iter().enumerate() {
                if item.title.trim().is_empty() {
                    diag.error(
                        FieldPath::indexed(&items_path, i, "title"),
                        "feature title must not be empty",
                    );
                }
                if item.description.trim().is_empty() {
                    diag.error(
                        FieldPath::indexed(&items_path, i, "description"),
                        "feature description must not be empty",
                    );
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::test_parse_config;

    fn feature(title: &str) -> FeatureEntry {
        FeatureEntry {
            title: title.into(),
            icon: "🏗".into(),
            description: "Works anywhere.".into(),
        }
    }

    fn page(sections: Vec<Section>) -> PageConfig {
        PageConfig {
            path: "/".into(),
            title: None,
            description: None,
            hero: HeroConfig::default(),
            sections,
        }
    }

    #[test]
    fn test_parse_sections_in_order() {
        let config = test_parse_config(
            r#"
[[pages]]
path = "/"

[[pages.hero.buttons]]
label = "Try Demo"
to = "https://fireproof.storage/try-free/"

[[pages.sections]]
kind = "prose"
heading = "📦 Lightweight install"
body = "Get started."

[[pages.sections]]
kind = "code"
language = "jsx"
code = "npm install use-fireproof"

[[pages.sections]]
kind = "features"
items = [
  { title = "Build", icon = "🏗", description = "a" },
  { title = "Connect", icon = "🌩", description = "b" },
  { title = "Scale", icon = "🏔", description = "c" },
]
"#,
        );
        let page = &config.pages[0];
        assert_eq!(page.hero.buttons[0].style, ButtonStyle::Secondary);
        assert!(matches!(page.sections[0], Section::Prose { .. }));
        assert!(matches!(page.sections[1], Section::Code { .. }));
        assert!(matches!(&page.sections[2], Section::Features { items } if items.len() == 3));
    }

    #[test]
    fn test_feature_count_enforced() {
        let pages = [page(vec![Section::Features {
            items: vec![feature("Build"), feature("Connect")],
        }])];
        let mut diag = ConfigDiagnostics::new();
        PageConfig::validate_all(&pages, &mut diag);
        assert_eq!(diag.len(), 1);
        assert_eq!(diag.errors()[0].field.as_str(), "pages[0].sections[0].items");
    }

    #[test]
    fn test_feature_entries_non_empty() {
        let pages = [page(vec![Section::Features {
            items: vec![feature("Build"), feature(" "), feature("Scale")],
        }])];
        let mut diag = ConfigDiagnostics::new();
        PageConfig::validate_all(&pages, &mut diag);
        assert_eq!(
            diag.errors()[0].field.as_str(),
            "pages[0].sections[0].items[1].title"
        );
    }

    #[test]
    fn test_duplicate_and_relative_paths() {
        let mut second = page(vec![]);
        second.path = "/index.html".into();
        let mut third = page(vec![]);
        third.path = "about".into();
        let pages = [page(vec![]), second, third];

        let mut diag = ConfigDiagnostics::new();
        PageConfig::validate_all(&pages, &mut diag);
        let fields: Vec<_> = diag.errors().iter().map(|e| e.field.as_str()).collect();
        assert_eq!(fields, ["pages[1].path", "pages[2].path"]);
    }
}
