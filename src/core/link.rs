//! Link classification.

use crate::utils::path::route::is_external_link;

/// Syntactic classification of links
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LinkKind<'a> {
    /// External link with URL scheme (https://, mailto:, tel:, etc.)
    External(&'a str),
    /// Pure fragment/anchor link (#section). Value is anchor without `#`.
    Fragment(&'a str),
    /// Site-root-relative path (/docs/intro, /img/logo.svg).
    SiteRoot(&'a str),
    /// File-relative path (./basics.md, ../other.md, img/logo.svg).
    FileRelative(&'a str),
}

impl<'a> LinkKind<'a> {
    /// Parse a link string into its syntactic kind.
    #[inline]
    pub fn parse(link: &'a str) -> Self {
        if is_external_link(link) {
            Self::External(link)
        } else if let Some(anchor) = link.strip_prefix('#') {
            Self::Fragment(anchor)
        } else if let Some(anchor) = link.strip_prefix("./#") {
            Self::Fragment(anchor)
        } else if link.starts_with('/') {
            Self::SiteRoot(link)
        } else {
            Self::FileRelative(link)
        }
    }

    /// Check if the link points at a Markdown source file (`.md`/`.mdx`).
    pub fn is_markdown_file(link: &str) -> bool {
        let path = link.split(['#', '?']).next().unwrap_or(link);
        path.ends_with(".md") || path.ends_with(".mdx")
    }
}
