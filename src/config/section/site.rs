//! `[site]` section configuration.
//!
//! Site-wide constants set once at load time: title, tagline, deployment URL,
//! favicon and locales, plus the broken-link policies.
//!
//! # Example
//!
//! ```toml
//! [site]
//! title = "Fireproof"
//! tagline = "Simplify your application state with an embedded live database."
//! url = "https://use-fireproof.com"
//! base_url = "/"
//! favicon = "img/favicon.ico"
//! image = "img/card.png"
//! on_broken_links = "throw"
//! on_broken_markdown_links = "warn"
//!
//! [site.i18n]
//! default_locale = "en"
//! locales = ["en"]
//! ```

use serde::{Deserialize, Serialize};

use crate::config::{ConfigDiagnostics, FieldPath};

/// Site metadata shared by every page.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SiteConfig {
    /// Site title, shown in the hero and in every `<title>`.
    pub title: String,

    /// One-line tagline shown under the title.
    pub tagline: String,

    /// Production URL (scheme + host), used for absolute links and the sitemap.
    pub url: Option<String>,

    /// Path under which the site is served, `/` or `/project/`.
    pub base_url: String,

    /// Favicon path relative to the static directory.
    pub favicon: Option<String>,

    /// Social card image relative to the static directory.
    pub image: Option<String>,

    /// Locale settings.
    pub i18n: I18nConfig,

    /// Policy for broken navbar, footer, sidebar and page links.
    pub on_broken_links: LinkPolicy,

    /// Policy for broken links inside Markdown documents.
    pub on_broken_markdown_links: LinkPolicy,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            title: String::new(),
            tagline: String::new(),
            url: None,
            base_url: "/".into(),
            favicon: None,
            image: None,
            i18n: I18nConfig::default(),
            on_broken_links: LinkPolicy::Throw,
            on_broken_markdown_links: LinkPolicy::Warn,
        }
    }
}

/// `[site.i18n]` locale list.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct I18nConfig {
    pub default_locale: String,
    pub locales: Vec<String>,
}

impl Default for I18nConfig {
    fn default() -> Self {
        Self {
            default_locale: "en".into(),
            locales: vec!["en".into()],
        }
    }
}

/// What to do when a link does not resolve.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LinkPolicy {
    /// Abort the build before anything is written.
    #[default]
    Throw,
    /// Log every broken link and keep building.
    Warn,
    /// Drop broken links silently.
    Ignore,
}

impl SiteConfig {
    pub const FIELD_TITLE: FieldPath = FieldPath::new("site.title");
    pub const FIELD_URL: FieldPath = FieldPath::new("site.url");
    pub const FIELD_BASE_URL: FieldPath = FieldPath::new("site.base_url");
    pub const FIELD_LOCALE: FieldPath = FieldPath::new("site.i18n.default_locale");

    /// Validate site configuration.
    ///
    /// # Checks
    /// - `title` is not empty
    /// - `url` is an http(s) URL with a host
    /// - `base_url` starts and ends with `/`
    /// - `i18n.default_locale` is listed in `i18n.locales`
    pub fn validate(&self, diag: &mut ConfigDiagnostics) {
        if self.title.trim().is_empty() {
            diag.error(Self::FIELD_TITLE, "site title must not be empty");
        }

        if let Some(url_str) = &self.url {
            match url::Url::parse(url_str) {
                Ok(parsed) => {
                    if !matches!(parsed.scheme(), "http" | "https") {
                        diag.error_with_hint(
                            Self::FIELD_URL,
                            format!(
                                "scheme '{}' not supported, must be http or https",
                                parsed.scheme()
                            ),
                            "use format like https://example.com",
                        );
                    }
                    if parsed.host_str().is_none() {
                        diag.error_with_hint(
                            Self::FIELD_URL,
                            "URL must have a valid host",
                            "use format like https://example.com",
                        );
                    }
                }
                Err(e) => {
                    diag.error_with_hint(
                        Self::FIELD_URL,
                        format!("invalid URL: {}", e),
                        "use format like https://example.com",
                    );
                }
            }
        }

        if !self.base_url.starts_with('/') || !self.base_url.ends_with('/') {
            diag.error_with_hint(
                Self::FIELD_BASE_URL,
                format!("'{}' must start and end with '/'", self.base_url),
                "use \"/\" or \"/project/\"",
            );
        }

        if !self.i18n.locales.contains(&self.i18n.default_locale) {
            diag.error(
                Self::FIELD_LOCALE,
                format!(
                    "'{}' is not listed in site.i18n.locales",
                    self.i18n.default_locale
                ),
            );
        }
    }

    /// Absolute URL for a route: the origin of `url` joined with `base_url`
    /// and the route. A path in `url` is already reflected in `base_url`.
    pub fn absolute_url(&self, route: &str) -> String {
        let raw = self.url.as_deref().unwrap_or_default();
        let origin = url::Url::parse(raw)
            .ok()
            .filter(|parsed| parsed.has_host())
            .map(|parsed| parsed.origin().ascii_serialization())
            .unwrap_or_else(|| raw.trim_end_matches('/').to_string());
        format!(
            "{}{}",
            origin,
            crate::utils::path::route::href_for(route, &self.base_url)
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::test_parse_config;

    #[test]
    fn test_site_defaults() {
        let site = SiteConfig::default();
        assert_eq!(site.base_url, "/");
        assert_eq!(site.on_broken_links, LinkPolicy::Throw);
        assert_eq!(site.on_broken_markdown_links, LinkPolicy::Warn);
        assert_eq!(site.i18n.default_locale, "en");
    }

    #[test]
    fn test_policy_parse() {
        let config = test_parse_config(
            "on_broken_links = \"warn\"\non_broken_markdown_links = \"ignore\"",
        );
        assert_eq!(config.site.on_broken_links, LinkPolicy::Warn);
        assert_eq!(config.site.on_broken_markdown_links, LinkPolicy::Ignore);
    }

    #[test]
    fn test_validate_bad_url() {
        let site = SiteConfig {
            title: "Fireproof".into(),
            url: Some("ftp://use-fireproof.com".into()),
            ..Default::default()
        };
        let mut diag = ConfigDiagnostics::new();
        site.validate(&mut diag);
        assert_eq!(diag.len(), 1);
        assert_eq!(diag.errors()[0].field, SiteConfig::FIELD_URL);
    }

    #[test]
    fn test_validate_base_url_and_title() {
        let site = SiteConfig {
            base_url: "docs".into(),
            ..Default::default()
        };
        let mut diag = ConfigDiagnostics::new();
        site.validate(&mut diag);
        let fields: Vec<_> = diag.errors().iter().map(|e| e.field.as_str()).collect();
        assert!(fields.contains(&"site.title"));
        assert!(fields.contains(&"site.base_url"));
    }

    #[test]
    fn test_validate_locale() {
        let site = SiteConfig {
            title: "Fireproof".into(),
            i18n: I18nConfig {
                default_locale: "fr".into(),
                locales: vec!["en".into()],
            },
            ..Default::default()
        };
        let mut diag = ConfigDiagnostics::new();
        site.validate(&mut diag);
        assert_eq!(diag.errors()[0].field, SiteConfig::FIELD_LOCALE);
    }

    #[test]
    fn test_absolute_url() {
        let site = SiteConfig {
            url: Some("https://use-fireproof.com/".into()),
            ..Default::default()
        };
        assert_eq!(site.absolute_url("/"), "https://use-fireproof.com/");
        assert_eq!(
            site.absolute_url("/docs/intro"),
            "https://use-fireproof.com/docs/intro"
        );

        let project = SiteConfig {
            url: Some("https://fireproof-storage.github.io/docs/".into()),
            base_url: "/docs/".into(),
            ..Default::default()
        };
        assert_eq!(
            project.absolute_url("/intro"),
            "https://fireproof-storage.github.io/docs/intro"
        );
    }
}
