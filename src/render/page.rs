//! Standalone pages composed from `[[pages]]`.

use super::SiteContext;
use super::features::render_features;
use super::hero::render_hero;
use super::layout::{PageShell, render_layout};
use super::sections::{render_code, render_prose};
use crate::config::{PageConfig, Section};
use crate::utils::path::route::normalize_route;

/// A fully rendered HTML document and the hrefs it links to.
#[derive(Debug, Clone)]
pub struct RenderedPage {
    pub route: String,
    pub html: String,
    pub links: Vec<String>,
}

/// Hero first, then every section in authoring order.
pub fn render_page(ctx: &SiteContext<'_>, page: &PageConfig) -> RenderedPage {
    let route = normalize_route(&page.path, "/");
    let mut links = Vec::new();

    let mut body = render_hero(
        ctx,
        page.hero.title.as_deref(),
        page.hero.tagline.as_deref(),
        &page.hero.buttons,
        &mut links,
    );
    for section in &page.sections {
        let html = match section {
            Section::Features { items } => render_features(ctx, items, &mut links),
            Section::Prose { heading, body } => {
                render_prose(ctx, heading.as_deref(), body, &mut links)
            }
            Section::Code { language, code } => render_code(language, code),
        };
        body.push_str(&html);
    }

    let html = render_layout(
        ctx,
        PageShell {
            route: &route,
            title: page.title.as_deref(),
            description: page.description.as_deref(),
            main_class: "",
        },
        &body,
    );
    RenderedPage { route, html, links }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::test_parse_config;
    use crate::content::Content;

    const HOME: &str = r#"
tagline = "Simplify your application state with an embedded live database."

[[pages]]
path = "/"
title = "Live database for the web"

[[pages.hero.buttons]]
label = "Get Started"
to = "/docs/react-tutorial"
style = "primary"

[[pages.sections]]
kind = "features"
items = [
    { title = "Reactive", icon = "⚡", description = "Live queries." },
    { title = "Verifiable", icon = "🔒", description = "Proofs." },
    { title = "Portable", icon = "🌍", description = "Any cloud." },
]

[[pages.sections]]
kind = "code"
language = "jsx"
code = "npm install use-fireproof"
"#;

    #[test]
    fn test_home_page() {
        let mut config = test_parse_config(HOME);
        config.site.title = "Fireproof".into();
        let content = Content::default();
        let ctx = SiteContext::new(&config, &content).unwrap();
        let page = render_page(&ctx, &config.pages[0]);

        assert_eq!(page.route, "/");
        assert!(page.html.contains("<title>Live database for the web | Fireproof</title>"));
        assert!(page.html.contains(r#"<h1 class="hero__title">Fireproof</h1>"#));
        assert!(page.html.contains(
            "Simplify your application state with an embedded live database."
        ));
        assert_eq!(page.html.matches("col--4").count(), 3);
        let hero = page.html.find("hero__title").unwrap();
        let features = page.html.find("features").unwrap();
        let code = page.html.find("language-jsx").unwrap();
        assert!(hero < features && features < code);
        assert_eq!(page.links, ["/docs/react-tutorial"]);
    }

    #[test]
    fn test_render_is_deterministic() {
        let config = test_parse_config(HOME);
        let content = Content::default();
        let ctx = SiteContext::new(&config, &content).unwrap();
        let first = render_page(&ctx, &config.pages[0]);
        let second = render_page(&ctx, &config.pages[0]);
        assert_eq!(first.html, second.html);
    }
}
