//! Sitemap generation.
//!
//! Lists every page and document route for search engine indexing.
//!
//! # Sitemap Format
//!
//! ```xml
//! <?xml version="1.0" encoding="UTF-8"?>
//! <urlset xmlns="http://www.sitemaps.org/schemas/sitemap/0.9">
//!   <url>
//!     <loc>https://use-fireproof.com/docs/react-tutorial</loc>
//!   </url>
//! </urlset>
//! ```

use std::borrow::Cow;

use crate::config::SiteConfig;
use crate::generator::minify_xml;

const SITEMAP_NS: &str = "http://www.sitemaps.org/schemas/sitemap/0.9";

/// Output file name.
pub const SITEMAP_FILE: &str = "sitemap.xml";

pub struct Sitemap {
    urls: Vec<String>,
}

impl Sitemap {
    /// Absolute URLs of `routes`, sorted and deduplicated.
    pub fn build<'a>(site: &SiteConfig, routes: impl IntoIterator<Item = &'a str>) -> Self {
        let mut routes: Vec<&str> = routes.into_iter().collect();
        routes.sort_unstable();
        routes.dedup();
        Self {
            urls: routes.into_iter().map(|route| site.absolute_url(route)).collect(),
        }
    }

    pub fn len(&self) -> usize {
        self.urls.len()
    }

    pub fn into_xml(self) -> String {
        let mut xml = String::with_capacity(64 + self.urls.len() * 64);

        xml.push_str("<?xml version=\"1.0\" encoding=\"UTF-8\"?>\n");
        xml.push_str("<urlset xmlns=\"");
        xml.push_str(SITEMAP_NS);
        xml.push_str("\">\n");

        for loc in self.urls {
            xml.push_str("  <url>\n    <loc>");
            xml.push_str(&escape_xml(&loc));
            xml.push_str("</loc>\n  </url>\n");
        }

        xml.push_str("</urlset>\n");
        xml
    }

    /// Serialized sitemap, minified when `minify` is set.
    pub fn into_bytes(self, minify: bool) -> Vec<u8> {
        let xml = self.into_xml();
        minify_xml(xml.as_bytes(), minify).into_owned()
    }
}

/// Escape special XML characters.
fn escape_xml(s: &str) -> Cow<'_, str> {
    // Fast path: check if escaping is needed
    if !s.contains(['&', '<', '>', '"', '\'']) {
        return Cow::Borrowed(s);
    }

    Cow::Owned(
        s.replace('&', "&amp;")
            .replace('<', "&lt;")
            .replace('>', "&gt;")
            .replace('"', "&quot;")
            .replace('\'', "&apos;"),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    fn site() -> SiteConfig {
        SiteConfig {
            url: Some("https://use-fireproof.com".into()),
            ..Default::default()
        }
    }

    #[test]
    fn test_escape_xml() {
        assert_eq!(escape_xml("hello"), "hello");
        assert_eq!(escape_xml("a & b"), "a &amp; b");
        assert_eq!(escape_xml("it's"), "it&apos;s");
    }

    #[test]
    fn test_sitemap_empty() {
        let xml = Sitemap::build(&site(), []).into_xml();
        assert!(xml.contains(&format!(r#"<urlset xmlns="{SITEMAP_NS}">"#)));
        assert!(!xml.contains("<url>"));
    }

    #[test]
    fn test_routes_once_in_order() {
        let sitemap = Sitemap::build(
            &site(),
            ["/docs/react-tutorial", "/", "/docs/intro", "/docs/intro"],
        );
        assert_eq!(sitemap.len(), 3);
        let xml = sitemap.into_xml();

        let home = xml.find("<loc>https://use-fireproof.com/</loc>").unwrap();
        let intro = xml.find("<loc>https://use-fireproof.com/docs/intro</loc>").unwrap();
        let tutorial = xml
            .find("<loc>https://use-fireproof.com/docs/react-tutorial</loc>")
            .unwrap();
        assert!(home < intro && intro < tutorial);
        assert_eq!(xml.matches("<url>").count(), 3);
    }

    #[test]
    fn test_minified_bytes() {
        let bytes = Sitemap::build(&site(), ["/"]).into_bytes(true);
        let xml = String::from_utf8(bytes).unwrap();
        assert!(!xml.contains('\n'));
        assert!(xml.contains("<url><loc>https://use-fireproof.com/</loc></url>"));
    }
}
