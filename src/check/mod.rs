//! Build-time link integrity.
//!
//! Every link the site renders is collected with its origin. Structural
//! origins (navbar, footer, sidebar, page) follow `site.on_broken_links`;
//! links inside Markdown documents follow `site.on_broken_markdown_links`
//! and nothing else.

mod collect;
mod report;
mod table;

use parking_lot::RwLock;
use rayon::prelude::*;
use thiserror::Error;

pub use collect::structural_links;
pub use report::{BrokenLink, LinkReport};
pub use table::RouteTable;

use crate::config::{LinkPolicy, SiteConfig};

/// Where a link was written.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum LinkOrigin {
    Navbar,
    Footer,
    Sidebar,
    /// Hero buttons, feature cards and prose of `[[pages]]`.
    Page,
    /// Body of a Markdown document.
    Markdown,
}

impl LinkOrigin {
    pub const fn is_structural(self) -> bool {
        !matches!(self, Self::Markdown)
    }
}

/// A link target together with where it came from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SiteLink {
    pub origin: LinkOrigin,
    /// Human-readable location: `navbar`, `footer: Docs`, `docs/intro.md`, ...
    pub source: String,
    pub target: String,
}

impl SiteLink {
    pub fn new(origin: LinkOrigin, source: impl Into<String>, target: impl Into<String>) -> Self {
        Self {
            origin,
            source: source.into(),
            target: target.into(),
        }
    }
}

/// The two broken-link policies of a site.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LinkPolicies {
    pub structural: LinkPolicy,
    pub markdown: LinkPolicy,
}

impl LinkPolicies {
    pub fn from_site(site: &SiteConfig) -> Self {
        Self {
            structural: site.on_broken_links,
            markdown: site.on_broken_markdown_links,
        }
    }

    pub const fn for_origin(self, origin: LinkOrigin) -> LinkPolicy {
        if origin.is_structural() {
            self.structural
        } else {
            self.markdown
        }
    }
}

#[derive(Debug, Error)]
pub enum LinkError {
    #[error("{count} broken link{} under a \"throw\" policy, nothing was written", crate::utils::plural_s(*.count))]
    Broken { count: usize },
}

/// Resolve every link and sort failures by policy.
pub fn check_links(links: &[SiteLink], table: &RouteTable, policies: LinkPolicies) -> LinkReport {
    let report = RwLock::new(LinkReport::default());

    links.par_iter().for_each(|link| {
        let Err(reason) = table.resolve(&link.target) else {
            return;
        };
        let broken = BrokenLink {
            origin: link.origin,
            target: link.target.clone(),
            reason,
        };
        match policies.for_origin(link.origin) {
            LinkPolicy::Throw => report.write().add_fatal(link.source.clone(), broken),
            LinkPolicy::Warn => report.write().add_warning(link.source.clone(), broken),
            LinkPolicy::Ignore => report.write().ignored += 1,
        }
    });

    let mut report = report.into_inner();
    report.sort();
    report
}

impl LinkReport {
    /// Print findings and fail when a `throw` policy was violated.
    pub fn finish(&self) -> Result<(), LinkError> {
        self.print();
        if self.ignored > 0 {
            crate::debug!("link"; "ignored {} broken link{}", self.ignored, crate::utils::plural_s(self.ignored));
        }
        if self.has_fatal() {
            return Err(LinkError::Broken {
                count: self.fatal_count(),
            });
        }
        Ok(())
    }
}
