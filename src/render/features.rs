//! The three-card feature grid.

use super::SiteContext;
use crate::config::FeatureEntry;
use crate::content::render_inline;
use crate::core::LinkKind;
use crate::utils::html::{escape, open_tag};
use crate::utils::mime::is_image_ref;

/// Render a row of feature cards, one `col col--4` column each.
pub fn render_features(
    ctx: &SiteContext<'_>,
    items: &[FeatureEntry],
    links: &mut Vec<String>,
) -> String {
    let mut out = String::with_capacity(256 + items.len() * 512);
    out.push_str(r#"<section class="features"><div class="container"><div class="row">"#);

    for item in items {
        out.push_str(r#"<div class="col col--4"><div class="text--center feature__icon">"#);
        render_icon(ctx, &mut out, item, links);
        out.push_str(r#"</div><div class="text--center padding-horiz--md"><h3>"#);
        out.push_str(&escape(&item.title));
        out.push_str("</h3><p>");
        let description = render_inline(&item.description, |link| ctx.rewrite_link(link));
        out.push_str(&description.html);
        links.extend(description.links);
        out.push_str("</p></div></div>");
    }

    out.push_str("</div></div></section>");
    out
}

fn render_icon(ctx: &SiteContext<'_>, out: &mut String, item: &FeatureEntry, links: &mut Vec<String>) {
    let icon = item.icon.trim();
    if is_image_ref(icon) || matches!(LinkKind::parse(icon), LinkKind::External(_)) {
        let src = ctx.link_href(icon);
        open_tag(
            out,
            "img",
            &[("class", "feature__svg"), ("src", &src), ("alt", &item.title)],
        );
        links.push(src);
    } else {
        open_tag(
            out,
            "span",
            &[("class", "feature__glyph"), ("role", "img"), ("aria-label", &item.title)],
        );
        out.push_str(&escape(icon));
        out.push_str("</span>");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::content::Content;
    use crate::render::context::tests::fixture_config;

    fn entry(title: &str, icon: &str, description: &str) -> FeatureEntry {
        FeatureEntry {
            title: title.into(),
            icon: icon.into(),
            description: description.into(),
        }
    }

    #[test]
    fn test_three_columns() {
        let config = fixture_config();
        let content = Content::default();
        let ctx = SiteContext::new(&config, &content).unwrap();
        let items = [
            entry("Reactive", "⚡", "Live queries update your UI."),
            entry("Verifiable", "🔒", "Cryptographic **proofs**."),
            entry("Portable", "img/cloud.svg", "Sync to [any cloud](/docs/react-tutorial)."),
        ];
        let mut links = Vec::new();
        let html = render_features(&ctx, &items, &mut links);

        assert_eq!(html.matches("col--4").count(), 3);
        assert!(html.contains("<h3>Reactive</h3>"));
        assert!(html.contains(r#"<span class="feature__glyph" role="img" aria-label="Reactive">⚡</span>"#));
        assert!(html.contains("Cryptographic <strong>proofs</strong>."));
        assert!(html.contains(r#"<img class="feature__svg" src="/img/cloud.svg" alt="Portable">"#));
        assert_eq!(links, ["/img/cloud.svg", "/docs/react-tutorial"]);
    }

    #[test]
    fn test_titles_are_escaped() {
        let config = fixture_config();
        let content = Content::default();
        let ctx = SiteContext::new(&config, &content).unwrap();
        let mut links = Vec::new();
        let html = render_features(&ctx, &[entry("<Sync>", "🔥", "x")], &mut links);
        assert!(html.contains("<h3>&lt;Sync&gt;</h3>"));
    }
}
