//! Top navigation bar.

use super::SiteContext;
use super::context::NavLink;
use crate::config::NavPosition;
use crate::core::LinkKind;
use crate::utils::html::{close_tag, escape, open_tag};

pub fn render_navbar(ctx: &SiteContext<'_>, active_route: &str) -> String {
    let navbar = &ctx.config.theme.navbar;
    let mut out = String::with_capacity(1024);

    out.push_str(r#"<nav class="navbar" aria-label="Main"><div class="navbar__inner">"#);
    out.push_str(r#"<div class="navbar__items">"#);

    let brand_href = navbar
        .logo
        .as_ref()
        .and_then(|logo| logo.href.as_deref())
        .map_or_else(|| ctx.link_href("/"), |href| ctx.link_href(href));
    open_tag(&mut out, "a", &[("class", "navbar__brand"), ("href", &brand_href)]);
    if let Some(logo) = &navbar.logo {
        out.push_str(r#"<div class="navbar__logo">"#);
        open_tag(
            &mut out,
            "img",
            &[("src", &ctx.link_href(&logo.src)), ("alt", &logo.alt)],
        );
        out.push_str("</div>");
    }
    let title = navbar.title.as_deref().unwrap_or(&ctx.config.site.title);
    out.push_str(r#"<b class="navbar__title">"#);
    out.push_str(&escape(title));
    out.push_str("</b></a>");

    render_items(ctx, &mut out, NavPosition::Left, active_route);
    out.push_str("</div>");

    out.push_str(r#"<div class="navbar__items navbar__items--right">"#);
    render_items(ctx, &mut out, NavPosition::Right, active_route);
    if ctx.search.is_some() {
        out.push_str(r#"<div id="hearth-search" class="navbar__search"></div>"#);
    }
    out.push_str("</div></div></nav>");
    out
}

fn render_items(ctx: &SiteContext<'_>, out: &mut String, position: NavPosition, active_route: &str) {
    for item in ctx.nav.iter().filter(|item| item.position == position) {
        let class = if is_active(ctx, item, active_route) {
            "navbar__item navbar__link navbar__link--active"
        } else {
            "navbar__item navbar__link"
        };
        let href = ctx.link_href(&item.target);
        if matches!(LinkKind::parse(&item.target), LinkKind::External(_)) {
            open_tag(
                out,
                "a",
                &[
                    ("class", class),
                    ("href", &href),
                    ("target", "_blank"),
                    ("rel", "noopener noreferrer"),
                ],
            );
        } else {
            open_tag(out, "a", &[("class", class), ("href", &href)]);
        }
        out.push_str(&escape(&item.label));
        close_tag(out, "a");
    }
}

/// Sidebar items are active on every page of their sidebar, links on their
/// own route and below it.
fn is_active(ctx: &SiteContext<'_>, item: &NavLink, active_route: &str) -> bool {
    if let Some(name) = &item.sidebar {
        return ctx
            .content
            .sidebars
            .get(name)
            .is_some_and(|sidebar| sidebar.contains(active_route));
    }
    match LinkKind::parse(&item.target) {
        LinkKind::SiteRoot(_) => {
            let route = crate::utils::path::route::normalize_route(
                &item.target,
                &ctx.config.site.base_url,
            );
            route != "/"
                && (active_route == route
                    || active_route
                        .strip_prefix(route.as_str())
                        .is_some_and(|rest| rest.starts_with('/')))
        }
        _ => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::content::Content;
    use crate::render::context::tests::fixture_config;

    #[test]
    fn test_navbar_items_in_order() {
        let config = fixture_config();
        let content = Content::default();
        let ctx = SiteContext::new(&config, &content).unwrap();
        let html = render_navbar(&ctx, "/");

        assert!(html.contains(r#"<a class="navbar__brand" href="https://fireproof.storage/">"#));
        assert!(html.contains(r#"alt="Fireproof Flame Logo""#));
        let tutorial = html.find(">Tutorial</a>").unwrap();
        let right = html.find("navbar__items--right").unwrap();
        let github = html.find(">Star me on GitHub</a>").unwrap();
        assert!(tutorial < right && right < github);
        assert!(html.contains(r#"target="_blank""#));
        assert!(html.contains(r#"id="hearth-search""#));
    }

    #[test]
    fn test_active_link() {
        let config = fixture_config();
        let content = Content::default();
        let ctx = SiteContext::new(&config, &content).unwrap();

        let html = render_navbar(&ctx, "/docs/react-tutorial");
        assert!(html.contains(
            r#"<a class="navbar__item navbar__link navbar__link--active" href="/docs/react-tutorial">"#
        ));
        assert!(!render_navbar(&ctx, "/").contains("navbar__link--active"));
    }
}
