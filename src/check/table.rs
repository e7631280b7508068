//! The set of everything a link may point at.

use rustc_hash::FxHashSet;

use crate::core::LinkKind;
use crate::utils::path::route::normalize_route;

/// Routes produced by the build plus files present in the output tree.
#[derive(Debug, Default)]
pub struct RouteTable {
    routes: FxHashSet<String>,
    /// Output-relative paths with `/` separators, no leading `/`.
    files: FxHashSet<String>,
    base_url: String,
}

impl RouteTable {
    pub fn new(base_url: &str) -> Self {
        Self {
            base_url: base_url.to_string(),
            ..Default::default()
        }
    }

    pub fn add_route(&mut self, route: impl Into<String>) {
        self.routes.insert(route.into());
    }

    /// Register a file by its output-relative path.
    ///
    /// `guide/index.html` also registers the route `/guide`.
    pub fn add_file(&mut self, relative: &str) {
        let relative = relative.trim_start_matches('/');
        if relative.ends_with("index.html") {
            self.routes.insert(normalize_route(relative, "/"));
        }
        self.files.insert(relative.to_string());
    }

    pub fn route_count(&self) -> usize {
        self.routes.len()
    }

    /// Check one link target. The error is a short reason.
    ///
    /// - fragment-only links always resolve
    /// - external links must parse as absolute URLs
    /// - internal links must name a route or a file once normalized
    pub fn resolve(&self, link: &str) -> Result<(), String> {
        match LinkKind::parse(link) {
            LinkKind::Fragment(_) => Ok(()),
            LinkKind::External(url) => url::Url::parse(url)
                .map(|_| ())
                .map_err(|e| format!("malformed URL ({e})")),
            LinkKind::SiteRoot(_) | LinkKind::FileRelative(_) => {
                let route = normalize_route(link, &self.base_url);
                if self.routes.contains(&route) || self.files.contains(route.trim_start_matches('/'))
                {
                    Ok(())
                } else {
                    Err(format!("no page or file at `{route}`"))
                }
            }
        }
    }
}
