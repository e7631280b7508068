//! Footer link columns and copyright.

use super::SiteContext;
use crate::core::LinkKind;
use crate::utils::html::{escape, open_tag};

pub fn render_footer(ctx: &SiteContext<'_>) -> String {
    let footer = &ctx.config.theme.footer;
    let mut out = String::with_capacity(1024);

    out.push_str(&format!(
        r#"<footer class="footer footer--{}"><div class="container">"#,
        footer.style.as_str()
    ));

    if !footer.links.is_empty() {
        out.push_str(r#"<div class="row footer__links">"#);
        for column in &footer.links {
            out.push_str(r#"<div class="col footer__col"><div class="footer__title">"#);
            out.push_str(&escape(&column.title));
            out.push_str(r#"</div><ul class="footer__items">"#);
            for link in &column.items {
                out.push_str(r#"<li class="footer__item">"#);
                let href = ctx.link_href(&link.to);
                if matches!(LinkKind::parse(&link.to), LinkKind::External(_)) {
                    open_tag(
                        &mut out,
                        "a",
                        &[
                            ("class", "footer__link-item"),
                            ("href", &href),
                            ("target", "_blank"),
                            ("rel", "noopener noreferrer"),
                        ],
                    );
                } else {
                    open_tag(&mut out, "a", &[("class", "footer__link-item"), ("href", &href)]);
                }
                out.push_str(&escape(&link.label));
                out.push_str("</a></li>");
            }
            out.push_str("</ul></div>");
        }
        out.push_str("</div>");
    }

    if let Some(copyright) = footer.copyright_text(ctx.year) {
        out.push_str(r#"<div class="footer__bottom"><div class="footer__copyright">"#);
        out.push_str(&escape(&copyright));
        out.push_str("</div></div>");
    }

    out.push_str("</div></footer>");
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::content::Content;
    use crate::render::context::tests::fixture_config;

    #[test]
    fn test_footer() {
        let config = fixture_config();
        let content = Content::default();
        let ctx = SiteContext::new(&config, &content).unwrap();
        let html = render_footer(&ctx);

        assert!(html.starts_with(r#"<footer class="footer footer--dark">"#));
        assert!(html.contains(r#"<div class="footer__title">Docs</div>"#));
        assert!(html.contains(
            r#"<a class="footer__link-item" href="/docs/react-tutorial">React Hooks</a>"#
        ));
        assert!(html.contains("Copyright © 2024 Fireproof"));
    }
}
