//! Site building orchestration.
//!
//! Build phases:
//! - **Load** - scan documents, resolve sidebars
//! - **Render** - standalone pages, documents (parallel), category indexes, 404
//! - **Assemble** - static files, stylesheets, sitemap
//! - **Check** - resolve every collected link against the assembled tree
//! - **Write** - only when no `throw` policy was violated

use std::time::Instant;

use anyhow::{Context, Result, bail};
use rayon::prelude::*;

use crate::check::{
    LinkOrigin, LinkPolicies, LinkReport, RouteTable, SiteLink, check_links, structural_links,
};
use crate::config::HearthConfig;
use crate::content::Content;
use crate::embed::css;
use crate::generator::sitemap::{SITEMAP_FILE, Sitemap};
use crate::output::SiteOutput;
use crate::render::{
    CUSTOM_CSS, RenderedPage, SiteContext, THEME_CSS, render_category_index, render_doc,
    render_not_found, render_page,
};
use crate::utils::path::to_slash;
use crate::utils::plural_count;
use crate::{debug, log};

/// A rendered but unwritten site and its link report.
#[derive(Debug)]
pub struct SiteBuild {
    pub output: SiteOutput,
    pub report: LinkReport,
    pub page_count: usize,
    pub doc_count: usize,
}

/// Render and check the whole site without touching the output directory.
pub fn assemble_site(config: &HearthConfig) -> Result<SiteBuild> {
    let content = Content::load(config)?;
    let ctx = SiteContext::new(config, &content)?;
    debug!("build"; "loaded {}", plural_count(content.docs.len(), "document"));

    let pages: Vec<RenderedPage> = config.pages.iter().map(|page| render_page(&ctx, page)).collect();
    let docs: Vec<RenderedPage> = content
        .docs
        .as_slice()
        .par_iter()
        .map(|doc| render_doc(&ctx, doc))
        .collect();
    let indexes: Vec<RenderedPage> = content
        .sidebars
        .category_indexes()
        .iter()
        .map(|index| render_category_index(&ctx, index))
        .collect();

    let mut output = SiteOutput::new();
    let mut routes = Vec::with_capacity(pages.len() + docs.len() + indexes.len());
    for page in pages.iter().chain(&docs).chain(&indexes) {
        let path = to_slash(&crate::utils::path::route::route_output_path(&page.route));
        if output.contains(&path) {
            bail!("route `{}` is produced by more than one page", page.route);
        }
        output.insert_page(&page.route, page.html.clone());
        routes.push(page.route.as_str());
    }
    output.insert("404.html", render_not_found(&ctx));

    output.insert(THEME_CSS, css::THEME_CSS);
    if let Some(css) = &config.theme.custom_css {
        let content = std::fs::read(css).with_context(|| format!("failed to read {}", css.display()))?;
        output.insert(CUSTOM_CSS, content);
    }
    if config.build.sitemap {
        let sitemap = Sitemap::build(&config.site, routes.iter().copied());
        debug!("build"; "sitemap lists {}", plural_count(sitemap.len(), "URL"));
        output.insert(SITEMAP_FILE, sitemap.into_bytes(config.build.minify));
    }
    let static_count = output.add_static_dir(&config.build.static_dir)?;
    debug!("build"; "copied {}", plural_count(static_count, "static file"));

    let mut table = RouteTable::new(&config.site.base_url);
    for route in &routes {
        table.add_route(*route);
    }
    for path in output.paths() {
        table.add_file(path);
    }

    let links = collect_links(config, &ctx, &pages, &docs);
    debug!("link"; "checking {} against {}", plural_count(links.len(), "link"), plural_count(table.route_count(), "route"));
    let report = check_links(&links, &table, LinkPolicies::from_site(&config.site));

    Ok(SiteBuild {
        output,
        report,
        page_count: pages.len() + indexes.len(),
        doc_count: docs.len(),
    })
}

/// Every link of the site with its origin.
fn collect_links(
    config: &HearthConfig,
    ctx: &SiteContext<'_>,
    pages: &[RenderedPage],
    docs: &[RenderedPage],
) -> Vec<SiteLink> {
    let mut links = structural_links(ctx);

    for (page, source) in pages.iter().zip(&config.pages) {
        let origin = format!("page: {}", source.path);
        links.extend(
            page.links
                .iter()
                .map(|target| SiteLink::new(LinkOrigin::Page, origin.clone(), target.clone())),
        );
    }

    for (page, doc) in docs.iter().zip(ctx.content.docs.iter()) {
        let origin = to_slash(&config.root_relative(config.docs.path.join(&doc.source)));
        links.extend(
            page.links
                .iter()
                .map(|target| SiteLink::new(LinkOrigin::Markdown, origin.clone(), target.clone())),
        );
    }

    links
}

/// Build the site and write it to `[build] output`.
pub fn build_site(config: &HearthConfig) -> Result<SiteOutput> {
    let started = Instant::now();
    let build = assemble_site(config)?;

    build.report.finish()?;
    if !build.report.is_clean() {
        log!("link"; "{}", build.report);
    }

    build.output.write(&config.build.output, config.build.clean)?;

    log!(
        "build"; "{} and {} in {:.2?} -> {}",
        plural_count(build.page_count, "page"),
        plural_count(build.doc_count, "document"),
        started.elapsed(),
        config.root_relative(&config.build.output).display()
    );
    log!("build"; "{} files, digest {}", build.output.len(), &build.output.digest()[..16]);

    Ok(build.output)
}
