//! Hero header of a standalone page.

use super::SiteContext;
use crate::config::HeroButton;
use crate::utils::html::{escape, open_tag};

/// Render the hero banner. Empty title and tagline fall back to the site's.
pub fn render_hero(
    ctx: &SiteContext<'_>,
    title: Option<&str>,
    tagline: Option<&str>,
    buttons: &[HeroButton],
    links: &mut Vec<String>,
) -> String {
    let site = &ctx.config.site;
    let title = title.unwrap_or(&site.title);
    let tagline = tagline.unwrap_or(&site.tagline);

    let mut out = String::with_capacity(512);
    out.push_str(r#"<header class="hero hero--primary"><div class="container">"#);
    out.push_str(r#"<h1 class="hero__title">"#);
    out.push_str(&escape(title));
    out.push_str("</h1>");
    if !tagline.is_empty() {
        out.push_str(r#"<p class="hero__subtitle">"#);
        out.push_str(&escape(tagline));
        out.push_str("</p>");
    }

    if !buttons.is_empty() {
        out.push_str(r#"<div class="buttons">"#);
        for button in buttons {
            let href = ctx.link_href(&button.to);
            open_tag(&mut out, "a", &[("class", button.style.class()), ("href", &href)]);
            out.push_str(&escape(&button.label));
            out.push_str("</a>");
            links.push(href);
        }
        out.push_str("</div>");
    }

    out.push_str("</div></header>");
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::section::pages::ButtonStyle;
    use crate::content::Content;
    use crate::render::context::tests::fixture_config;

    #[test]
    fn test_hero_shows_site_title_and_tagline() {
        let config = fixture_config();
        let content = Content::default();
        let ctx = SiteContext::new(&config, &content).unwrap();
        let mut links = Vec::new();
        let html = render_hero(&ctx, None, None, &[], &mut links);

        assert!(html.contains(r#"<h1 class="hero__title">Fireproof</h1>"#));
        assert!(html.contains(
            r#"<p class="hero__subtitle">Simplify your application state with an embedded live database.</p>"#
        ));
        assert!(links.is_empty());
    }

    #[test]
    fn test_buttons_in_order() {
        let config = fixture_config();
        let content = Content::default();
        let ctx = SiteContext::new(&config, &content).unwrap();
        let buttons = [
            HeroButton {
                label: "Get Started".into(),
                to: "/docs/react-tutorial".into(),
                style: ButtonStyle::Primary,
            },
            HeroButton {
                label: "Dashboard".into(),
                to: "https://dashboard.fireproof.storage/".into(),
                style: ButtonStyle::Secondary,
            },
        ];
        let mut links = Vec::new();
        let html = render_hero(&ctx, Some("Live data"), Some(""), &buttons, &mut links);

        assert!(html.contains("Live data</h1>"));
        assert!(!html.contains("hero__subtitle"));
        assert!(html.find("Get Started").unwrap() < html.find("Dashboard").unwrap());
        assert!(html.contains(
            r#"<a class="button button--primary button--lg" href="/docs/react-tutorial">"#
        ));
        assert_eq!(links, ["/docs/react-tutorial", "https://dashboard.fireproof.storage/"]);
    }
}
