//! Site-wide render context, built once per build and shared read-only.

use crate::config::{HearthConfig, NavItemType, NavPosition};
use crate::content::{Content, ContentError};
use crate::core::LinkKind;
use crate::utils::path::route::href_for;

/// Stylesheet paths inside the output directory.
pub const THEME_CSS: &str = "assets/theme.css";
pub const CUSTOM_CSS: &str = "assets/custom.css";

/// A navbar entry with its target resolved.
#[derive(Debug, Clone)]
pub struct NavLink {
    pub label: String,
    /// Route or URL as authored (sidebar items: the sidebar's first page).
    pub target: String,
    pub position: NavPosition,
    /// Sidebar name for `doc-sidebar` items.
    pub sidebar: Option<String>,
}

/// Everything a renderer needs besides the page itself.
pub struct SiteContext<'a> {
    pub config: &'a HearthConfig,
    pub content: &'a Content,
    /// Year substituted into the footer copyright.
    pub year: i64,
    pub nav: Vec<NavLink>,
    /// Serialized search descriptor, when a search widget is configured.
    pub search: Option<String>,
    /// Stylesheet hrefs, base theme first.
    pub stylesheets: Vec<String>,
}

impl<'a> SiteContext<'a> {
    pub fn new(config: &'a HearthConfig, content: &'a Content) -> Result<Self, ContentError> {
        let nav = config
            .theme
            .navbar
            .items
            .iter()
            .map(|item| {
                let (target, sidebar) = match item.kind {
                    NavItemType::Link => (item.to.clone().unwrap_or_default(), None),
                    NavItemType::DocSidebar => {
                        let name = item.sidebar_id.clone().unwrap_or_default();
                        let first = content
                            .sidebars
                            .get(&name)
                            .and_then(|sidebar| sidebar.first_route())
                            .ok_or_else(|| ContentError::UnknownSidebar {
                                label: item.label.clone(),
                                sidebar: name.clone(),
                            })?;
                        (first.to_string(), Some(name))
                    }
                };
                Ok(NavLink {
                    label: item.label.clone(),
                    target,
                    position: item.position,
                    sidebar,
                })
            })
            .collect::<Result<Vec<_>, ContentError>>()?;

        let search = config
            .theme
            .search
            .as_ref()
            .map(|search| inline_json(&search.descriptor(&config.site.i18n.default_locale)))
            .transpose()?;

        let mut stylesheets = vec![href_for(&format!("/{THEME_CSS}"), &config.site.base_url)];
        if config.theme.custom_css.is_some() {
            stylesheets.push(href_for(&format!("/{CUSTOM_CSS}"), &config.site.base_url));
        }

        Ok(Self {
            config,
            content,
            year: config.build.year(),
            nav,
            search,
            stylesheets,
        })
    }

    /// Href for an authored link.
    ///
    /// Internal targets are relative to `site.base_url`; relative paths are
    /// read from the site root. External and fragment links pass through.
    pub fn link_href(&self, target: &str) -> String {
        match LinkKind::parse(target) {
            LinkKind::External(_) | LinkKind::Fragment(_) => target.to_string(),
            LinkKind::SiteRoot(path) => href_for(path, &self.config.site.base_url),
            LinkKind::FileRelative(path) => {
                href_for(&format!("/{path}"), &self.config.site.base_url)
            }
        }
    }

    /// Rewrite hook for Markdown authored in the config.
    pub fn rewrite_link(&self, target: &str) -> Option<String> {
        Some(self.link_href(target))
    }

    /// Absolute URL of a static asset for social cards (`og:image`).
    pub fn absolute_asset(&self, path: &str) -> String {
        match LinkKind::parse(path) {
            LinkKind::External(url) => url.to_string(),
            _ => self
                .config
                .site
                .absolute_url(&format!("/{}", path.trim_start_matches('/'))),
        }
    }
}

/// JSON safe to place inside a `<script>` element.
fn inline_json(value: &impl serde::Serialize) -> Result<String, ContentError> {
    serde_json::to_string(value)
        .map(|json| json.replace("</", "<\\/"))
        .map_err(ContentError::SearchDescriptor)
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;
    use crate::config::test_parse_config;

    /// Fireproof-like config without docs.
    pub fn fixture_config() -> HearthConfig {
        let mut config = test_parse_config(
            r#"
tagline = "Simplify your application state with an embedded live database."
url = "https://use-fireproof.com"
favicon = "img/favicon.ico"

[build]
year = 2024

[theme.navbar]
title = "Fireproof"
logo = { alt = "Fireproof Flame Logo", src = "img/logo.svg", href = "https://fireproof.storage/" }

[[theme.navbar.items]]
to = "/docs/react-tutorial"
label = "Tutorial"

[[theme.navbar.items]]
to = "https://github.com/fireproof-storage/fireproof"
label = "Star me on GitHub"
position = "right"

[theme.footer]
style = "dark"
copyright = "Copyright © {year} Fireproof"

[[theme.footer.links]]
title = "Docs"
items = [{ label = "React Hooks", to = "/docs/react-tutorial" }]

[theme.search]
app_id = "LPECO32JOJ"
api_key = "0ba664435d303eb4796062a1403e2046"
index_name = "use-fireproof"
"#,
        );
        config.site.title = "Fireproof".into();
        config
    }

    #[test]
    fn test_link_href() {
        let mut config = fixture_config();
        config.site.base_url = "/fp/".into();
        let content = Content::default();
        let ctx = SiteContext::new(&config, &content).unwrap();

        assert_eq!(ctx.link_href("/docs/react-tutorial"), "/fp/docs/react-tutorial");
        assert_eq!(ctx.link_href("img/logo.svg"), "/fp/img/logo.svg");
        assert_eq!(ctx.link_href("/"), "/fp/");
        assert_eq!(ctx.link_href("#top"), "#top");
        assert_eq!(
            ctx.link_href("https://fireproof.storage/"),
            "https://fireproof.storage/"
        );
        assert_eq!(ctx.stylesheets, ["/fp/assets/theme.css"]);
    }

    #[test]
    fn test_search_descriptor_embedded() {
        let config = fixture_config();
        let content = Content::default();
        let ctx = SiteContext::new(&config, &content).unwrap();
        let search = ctx.search.unwrap();
        assert!(search.contains(r#""indexName":"use-fireproof""#));
        assert_eq!(ctx.year, 2024);
    }

    #[test]
    fn test_inline_json() {
        let json = inline_json(&serde_json::json!({ "placeholder": "</script>" })).unwrap();
        assert_eq!(json, r#"{"placeholder":"<\/script>"}"#);

        // Non-string map keys cannot be written as JSON.
        let mut bad = std::collections::BTreeMap::new();
        bad.insert((1, 2), "x");
        assert!(matches!(inline_json(&bad), Err(ContentError::SearchDescriptor(_))));
    }

    #[test]
    fn test_unknown_sidebar_rejected() {
        let mut config = fixture_config();
        let navbar = test_parse_config(
            r#"
[[theme.navbar.items]]
type = "doc-sidebar"
label = "Documentation"
sidebar_id = "tutorialSidebar"
"#,
        );
        config.theme.navbar.items.extend(navbar.theme.navbar.items);
        let content = Content::default();
        assert!(matches!(
            SiteContext::new(&config, &content),
            Err(ContentError::UnknownSidebar { .. })
        ));
    }
}
