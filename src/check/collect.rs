//! Links written by the site configuration and sidebars.

use super::{LinkOrigin, SiteLink};
use crate::render::SiteContext;

/// Navbar, footer, sidebar and site asset links, rendered as hrefs.
///
/// Sidebar document items are resolved when the sidebars load, so only
/// sidebar `link` items appear here.
pub fn structural_links(ctx: &SiteContext<'_>) -> Vec<SiteLink> {
    let config = ctx.config;
    let mut links = Vec::new();

    let navbar = &config.theme.navbar;
    if let Some(logo) = &navbar.logo {
        links.push(SiteLink::new(LinkOrigin::Navbar, "navbar: logo", ctx.link_href(&logo.src)));
        if let Some(href) = &logo.href {
            links.push(SiteLink::new(LinkOrigin::Navbar, "navbar: logo", ctx.link_href(href)));
        }
    }
    for item in &ctx.nav {
        links.push(SiteLink::new(
            LinkOrigin::Navbar,
            format!("navbar: {}", item.label),
            ctx.link_href(&item.target),
        ));
    }

    for column in &config.theme.footer.links {
        for item in &column.items {
            links.push(SiteLink::new(
                LinkOrigin::Footer,
                format!("footer: {}", column.title),
                ctx.link_href(&item.to),
            ));
        }
    }

    for sidebar in ctx.content.sidebars.iter() {
        for href in sidebar.link_hrefs() {
            links.push(SiteLink::new(
                LinkOrigin::Sidebar,
                format!("sidebar: {}", sidebar.name),
                ctx.link_href(href),
            ));
        }
    }

    let site = &config.site;
    for asset in [&site.favicon, &site.image].into_iter().flatten() {
        links.push(SiteLink::new(LinkOrigin::Page, "site", ctx.link_href(asset)));
    }

    links
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::content::Content;
    use crate::render::context::tests::fixture_config;

    #[test]
    fn test_structural_links() {
        let config = fixture_config();
        let content = Content::default();
        let ctx = SiteContext::new(&config, &content).unwrap();
        let links = structural_links(&ctx);

        let targets: Vec<_> = links.iter().map(|l| l.target.as_str()).collect();
        assert_eq!(
            targets,
            [
                "/img/logo.svg",
                "https://fireproof.storage/",
                "/docs/react-tutorial",
                "https://github.com/fireproof-storage/fireproof",
                "/docs/react-tutorial",
                "/img/favicon.ico",
            ]
        );
        assert_eq!(links[2].source, "navbar: Tutorial");
        assert_eq!(links[4].origin, LinkOrigin::Footer);
        assert_eq!(links[4].source, "footer: Docs");
        assert!(links.iter().all(|l| l.origin.is_structural()));
    }
}
