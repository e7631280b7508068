//! The document shell every page shares: `<head>`, navbar, `<main>`, footer.

use super::SiteContext;
use super::footer::render_footer;
use super::navbar::render_navbar;
use crate::utils::html::{escape, open_tag};

/// Element id of the inline search descriptor.
pub const SEARCH_CONFIG_ID: &str = "hearth-search-config";

/// Per-page values of the shell.
#[derive(Debug, Clone, Copy, Default)]
pub struct PageShell<'a> {
    /// Canonical route, used for the active navbar link.
    pub route: &'a str,
    /// Page title; the site title alone when `None`.
    pub title: Option<&'a str>,
    /// Falls back to the site tagline.
    pub description: Option<&'a str>,
    /// Class on `<main>`.
    pub main_class: &'a str,
}

pub fn render_layout(ctx: &SiteContext<'_>, shell: PageShell<'_>, body: &str) -> String {
    let site = &ctx.config.site;
    let prism = &ctx.config.theme.prism;
    let mut out = String::with_capacity(body.len() + 4096);

    out.push_str("<!DOCTYPE html>\n");
    open_tag(
        &mut out,
        "html",
        &[
            ("lang", &site.i18n.default_locale),
            ("data-prism-theme", &prism.theme),
            ("data-prism-dark-theme", &prism.dark_theme),
        ],
    );
    out.push_str("\n<head>\n<meta charset=\"utf-8\">\n");
    out.push_str(r#"<meta name="viewport" content="width=device-width, initial-scale=1">"#);
    out.push('\n');

    let title = match shell.title {
        Some(page) if page != site.title => format!("{page} | {}", site.title),
        _ => site.title.clone(),
    };
    out.push_str("<title>");
    out.push_str(&escape(&title));
    out.push_str("</title>\n");

    let description = shell.description.unwrap_or(&site.tagline);
    if !description.is_empty() {
        open_tag(&mut out, "meta", &[("name", "description"), ("content", description)]);
        out.push('\n');
    }
    open_tag(&mut out, "meta", &[("property", "og:title"), ("content", &title)]);
    out.push('\n');
    if let Some(image) = &site.image {
        open_tag(
            &mut out,
            "meta",
            &[("property", "og:image"), ("content", &ctx.absolute_asset(image))],
        );
        out.push('\n');
    }
    if let Some(favicon) = &site.favicon {
        open_tag(&mut out, "link", &[("rel", "icon"), ("href", &ctx.link_href(favicon))]);
        out.push('\n');
    }
    for href in &ctx.stylesheets {
        open_tag(&mut out, "link", &[("rel", "stylesheet"), ("href", href)]);
        out.push('\n');
    }
    if let Some(search) = &ctx.search {
        out.push_str(&format!(
            r#"<script type="application/json" id="{SEARCH_CONFIG_ID}">{search}</script>"#
        ));
        out.push('\n');
    }
    out.push_str("</head>\n<body>\n");

    out.push_str(&render_navbar(ctx, shell.route));
    out.push('\n');
    if shell.main_class.is_empty() {
        out.push_str("<main>");
    } else {
        open_tag(&mut out, "main", &[("class", shell.main_class)]);
    }
    out.push_str(body);
    out.push_str("</main>\n");
    out.push_str(&render_footer(ctx));
    out.push_str("\n</body>\n</html>\n");
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::content::Content;
    use crate::render::context::tests::fixture_config;

    #[test]
    fn test_head() {
        let mut config = fixture_config();
        config.site.image = Some("img/card.png".into());
        let content = Content::default();
        let ctx = SiteContext::new(&config, &content).unwrap();
        let html = render_layout(
            &ctx,
            PageShell {
                route: "/",
                title: Some("Hello"),
                ..Default::default()
            },
            "<p>body</p>",
        );

        assert!(html.starts_with("<!DOCTYPE html>\n<html lang=\"en\""));
        assert!(html.contains("<title>Hello | Fireproof</title>"));
        assert!(html.contains(
            r#"<meta name="description" content="Simplify your application state with an embedded live database.">"#
        ));
        assert!(html.contains(
            r#"content="https://use-fireproof.com/img/card.png""#
        ));
        assert!(html.contains(r#"<link rel="icon" href="/img/favicon.ico">"#));
        assert!(html.contains(r#"<link rel="stylesheet" href="/assets/theme.css">"#));
        assert!(html.contains(r#"id="hearth-search-config">{"appId":"LPECO32JOJ""#));
        assert!(html.contains("<main><p>body</p></main>"));
    }

    #[test]
    fn test_title_without_page_title() {
        let config = fixture_config();
        let content = Content::default();
        let ctx = SiteContext::new(&config, &content).unwrap();
        let html = render_layout(&ctx, PageShell::default(), "");
        assert!(html.contains("<title>Fireproof</title>"));
    }

    #[test]
    fn test_no_search_widget_without_config() {
        let mut config = fixture_config();
        config.theme.search = None;
        let content = Content::default();
        let ctx = SiteContext::new(&config, &content).unwrap();
        let html = render_layout(&ctx, PageShell::default(), "");
        assert!(!html.contains(SEARCH_CONFIG_ID));
        assert!(!html.contains("hearth-search"));
    }
}
