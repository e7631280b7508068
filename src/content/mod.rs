//! Documentation content: Markdown documents and the sidebars over them.

mod doc;
mod error;
pub mod markdown;
mod meta;
mod sidebar;

pub use doc::{Doc, DocSet, ScanOptions, scan_docs};
pub use error::ContentError;
pub use markdown::{render_inline, render_markdown};
pub use sidebar::{CategoryIndex, PageLink, Sidebar, SidebarNode, Sidebars, load_sidebars};

use crate::config::HearthConfig;

/// Documents and sidebars of one build.
#[derive(Debug, Default)]
pub struct Content {
    pub docs: DocSet,
    pub sidebars: Sidebars,
}

impl Content {
    /// Scan the docs directory and resolve the sidebars.
    pub fn load(config: &HearthConfig) -> Result<Self, ContentError> {
        let route_prefix = config.docs.route_prefix();
        let docs = scan_docs(
            &config.docs.path,
            ScanOptions {
                route_prefix: &route_prefix,
                base_url: &config.site.base_url,
                skip_drafts: config.build.skip_drafts,
            },
        )?;
        if docs.is_empty() && config.docs.path.is_dir() {
            crate::log!("warning"; "no documents found under {}", config.docs.path.display());
        }
        let sidebars = load_sidebars(
            &config.docs.sidebar_path,
            &config.docs.path,
            &docs,
            &route_prefix,
        )?;
        Ok(Self { docs, sidebars })
    }
}
