//! Document pages, generated category indexes and the 404 page.

use super::SiteContext;
use super::layout::{PageShell, render_layout};
use super::page::RenderedPage;
use crate::content::{CategoryIndex, Doc, PageLink, Sidebar, SidebarNode};
use crate::core::LinkKind;
use crate::utils::html::{escape, open_tag};
use crate::utils::path::route::href_for;

/// Render one document with its sidebar and pagination.
///
/// `links` are the document's Markdown links only; sidebar and pagination
/// targets are checked once per sidebar.
pub fn render_doc(ctx: &SiteContext<'_>, doc: &Doc) -> RenderedPage {
    let sidebar = ctx.content.sidebars.sidebar_for(&doc.route);
    let mut body = String::with_capacity(doc.html.len() + 2048);

    body.push_str(r#"<div class="container"><div class="row">"#);
    if let Some(sidebar) = sidebar {
        render_sidebar(ctx, &mut body, sidebar, &doc.route);
    }
    body.push_str(r#"<div class="col doc__content"><article class="markdown">"#);
    if !doc.html.trim_start().starts_with("<h1") {
        body.push_str("<h1>");
        body.push_str(&escape(&doc.title));
        body.push_str("</h1>");
    }
    body.push_str(&doc.html);
    body.push_str("</article>");
    if let Some(sidebar) = sidebar {
        let (prev, next) = sidebar.neighbors(&doc.route);
        render_pagination(ctx, &mut body, prev, next);
    }
    body.push_str("</div></div></div>");

    let html = render_layout(
        ctx,
        PageShell {
            route: &doc.route,
            title: Some(&doc.title),
            description: doc.description.as_deref(),
            main_class: "docMainContainer",
        },
        &body,
    );
    RenderedPage {
        route: doc.route.clone(),
        html,
        links: doc.links.clone(),
    }
}

/// Render the generated index page of a category: a card per item.
pub fn render_category_index(ctx: &SiteContext<'_>, index: &CategoryIndex) -> RenderedPage {
    let sidebar = ctx.content.sidebars.get(&index.sidebar);
    let mut body = String::with_capacity(2048);

    body.push_str(r#"<div class="container"><div class="row">"#);
    if let Some(sidebar) = sidebar {
        render_sidebar(ctx, &mut body, sidebar, &index.route);
    }
    body.push_str(r#"<div class="col doc__content"><article class="markdown"><h1>"#);
    body.push_str(&escape(&index.title));
    body.push_str("</h1>");
    if let Some(description) = &index.description {
        body.push_str(r#"<p class="generated-index__description">"#);
        body.push_str(&escape(description));
        body.push_str("</p>");
    }

    body.push_str(r#"<ul class="card-list">"#);
    for item in &index.items {
        body.push_str(r#"<li class="card">"#);
        let href = node_href(ctx, item);
        match href {
            Some(href) => {
                open_tag(&mut body, "a", &[("class", "card__link"), ("href", &href)]);
                body.push_str("<h2>");
                body.push_str(&escape(item.label()));
                body.push_str("</h2></a>");
            }
            None => {
                body.push_str("<h2>");
                body.push_str(&escape(item.label()));
                body.push_str("</h2>");
            }
        }
        if let SidebarNode::Doc { id, .. } = item
            && let Some(description) = ctx
                .content
                .docs
                .get(id)
                .and_then(|doc| doc.description.as_deref())
        {
            body.push_str("<p>");
            body.push_str(&escape(description));
            body.push_str("</p>");
        }
        body.push_str("</li>");
    }
    body.push_str("</ul></article>");

    if let Some(sidebar) = sidebar {
        let (prev, next) = sidebar.neighbors(&index.route);
        render_pagination(ctx, &mut body, prev, next);
    }
    body.push_str("</div></div></div>");

    let html = render_layout(
        ctx,
        PageShell {
            route: &index.route,
            title: Some(&index.title),
            description: index.description.as_deref(),
            main_class: "docMainContainer",
        },
        &body,
    );
    RenderedPage {
        route: index.route.clone(),
        html,
        links: Vec::new(),
    }
}

/// `404.html`, linking back to the home page.
pub fn render_not_found(ctx: &SiteContext<'_>) -> String {
    let home = href_for("/", &ctx.config.site.base_url);
    let body = format!(
        r#"<div class="container margin-vert--xl"><h1 class="hero__title">Page Not Found</h1><p>We could not find what you were looking for.</p><p><a href="{}">Back to the home page</a></p></div>"#,
        escape(&home)
    );
    render_layout(
        ctx,
        PageShell {
            route: "/404",
            title: Some("Page Not Found"),
            description: None,
            main_class: "",
        },
        &body,
    )
}

fn node_href(ctx: &SiteContext<'_>, node: &SidebarNode) -> Option<String> {
    match node {
        SidebarNode::Link { href, .. } => Some(ctx.link_href(href)),
        _ => node
            .route()
            .map(|route| href_for(route, &ctx.config.site.base_url)),
    }
}

fn render_sidebar(ctx: &SiteContext<'_>, out: &mut String, sidebar: &Sidebar, active: &str) {
    out.push_str(r#"<aside class="col col--3 doc__sidebar"><nav class="menu" aria-label="Docs sidebar">"#);
    render_menu(ctx, out, &sidebar.items, active);
    out.push_str("</nav></aside>");
}

fn render_menu(ctx: &SiteContext<'_>, out: &mut String, nodes: &[SidebarNode], active: &str) {
    out.push_str(r#"<ul class="menu__list">"#);
    for node in nodes {
        out.push_str(r#"<li class="menu__list-item">"#);
        match node {
            SidebarNode::Category { label, route, items } => {
                match route {
                    Some(route) => {
                        let class = menu_link_class("menu__link menu__link--sublist", route == active);
                        let href = href_for(route, &ctx.config.site.base_url);
                        open_tag(out, "a", &[("class", class), ("href", &href)]);
                        out.push_str(&escape(label));
                        out.push_str("</a>");
                    }
                    None => {
                        out.push_str(r#"<span class="menu__link menu__link--sublist">"#);
                        out.push_str(&escape(label));
                        out.push_str("</span>");
                    }
                }
                render_menu(ctx, out, items, active);
            }
            SidebarNode::Doc { label, route, .. } => {
                let class = menu_link_class("menu__link", route == active);
                let href = href_for(route, &ctx.config.site.base_url);
                open_tag(out, "a", &[("class", class), ("href", &href)]);
                out.push_str(&escape(label));
                out.push_str("</a>");
            }
            SidebarNode::Link { label, href } => {
                let target = ctx.link_href(href);
                if matches!(LinkKind::parse(href), LinkKind::External(_)) {
                    open_tag(
                        out,
                        "a",
                        &[
                            ("class", "menu__link"),
                            ("href", &target),
                            ("target", "_blank"),
                            ("rel", "noopener noreferrer"),
                        ],
                    );
                } else {
                    open_tag(out, "a", &[("class", "menu__link"), ("href", &target)]);
                }
                out.push_str(&escape(label));
                out.push_str("</a>");
            }
        }
        out.push_str("</li>");
    }
    out.push_str("</ul>");
}

fn menu_link_class(base: &'static str, active: bool) -> &'static str {
    match (base, active) {
        ("menu__link", true) => "menu__link menu__link--active",
        ("menu__link menu__link--sublist", true) => {
            "menu__link menu__link--sublist menu__link--active"
        }
        (base, _) => base,
    }
}

fn render_pagination(
    ctx: &SiteContext<'_>,
    out: &mut String,
    prev: Option<PageLink<'_>>,
    next: Option<PageLink<'_>>,
) {
    if prev.is_none() && next.is_none() {
        return;
    }
    out.push_str(r#"<nav class="pagination-nav" aria-label="Docs pages">"#);
    for (link, class, sublabel) in [
        (prev, "pagination-nav__link pagination-nav__link--prev", "Previous"),
        (next, "pagination-nav__link pagination-nav__link--next", "Next"),
    ] {
        let Some(link) = link else { continue };
        let href = href_for(link.route, &ctx.config.site.base_url);
        open_tag(out, "a", &[("class", class), ("href", &href)]);
        out.push_str(r#"<div class="pagination-nav__sublabel">"#);
        out.push_str(sublabel);
        out.push_str(r#"</div><div class="pagination-nav__label">"#);
        out.push_str(&escape(link.label));
        out.push_str("</div></a>");
    }
    out.push_str("</nav>");
}
