//! Sidebars: named, ordered navigation trees over documents.
//!
//! Defined in `sidebars.toml`:
//!
//! ```toml
//! [sidebars]
//! tutorialSidebar = [
//!   "intro",
//!   { type = "category", label = "Database API", link = { type = "generated-index" }, items = [
//!     { type = "autogenerated", dir = "database-api" },
//!   ] },
//!   { type = "link", label = "GitHub", href = "https://github.com/fireproof-storage/fireproof" },
//! ]
//! ```
//!
//! Without the file, a single `tutorialSidebar` is autogenerated from the
//! whole docs directory. Autogenerated directories become categories labelled
//! by their `_category_.toml`.

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use rustc_hash::FxHashSet;
use serde::Deserialize;

use super::{ContentError, Doc, DocSet};
use crate::utils::path::route::normalize_route;
use crate::utils::slug::{slugify, title_case};

/// Name of the sidebar generated when no sidebar file exists.
pub const DEFAULT_SIDEBAR: &str = "tutorialSidebar";

const CATEGORY_FILE: &str = "_category_.toml";

// ============================================================================
// sidebar file
// ============================================================================

#[derive(Debug, Deserialize)]
struct SidebarsFile {
    #[serde(default)]
    sidebars: BTreeMap<String, Vec<SidebarEntry>>,
}

/// A bare string is shorthand for a doc item.
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
enum SidebarEntry {
    Doc(String),
    Item(SidebarItem),
}

#[derive(Debug, Clone, Deserialize)]
#[serde(tag = "type", rename_all = "kebab-case")]
enum SidebarItem {
    Doc {
        id: String,
        #[serde(default)]
        label: Option<String>,
    },
    Category {
        label: String,
        #[serde(default)]
        items: Vec<SidebarEntry>,
        #[serde(default)]
        link: Option<CategoryLink>,
    },
    Link {
        label: String,
        href: String,
    },
    Autogenerated {
        dir: String,
    },
}

#[derive(Debug, Clone, Deserialize)]
#[serde(tag = "type", rename_all = "kebab-case")]
enum CategoryLink {
    Doc {
        id: String,
    },
    GeneratedIndex {
        #[serde(default)]
        slug: Option<String>,
        #[serde(default)]
        title: Option<String>,
        #[serde(default)]
        description: Option<String>,
    },
}

/// `_category_.toml` contents.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct CategoryMeta {
    label: Option<String>,
    position: Option<f64>,
    generated_index: bool,
    description: Option<String>,
}

// ============================================================================
// resolved sidebars
// ============================================================================

#[derive(Debug, Clone, PartialEq)]
pub enum SidebarNode {
    Doc {
        id: String,
        label: String,
        route: String,
    },
    Category {
        label: String,
        /// Generated index page or linked document.
        route: Option<String>,
        items: Vec<SidebarNode>,
    },
    Link {
        label: String,
        href: String,
    },
}

impl SidebarNode {
    pub fn label(&self) -> &str {
        match self {
            Self::Doc { label, .. } | Self::Category { label, .. } | Self::Link { label, .. } => {
                label
            }
        }
    }

    /// Route this node links to inside the site, if any.
    pub fn route(&self) -> Option<&str> {
        match self {
            Self::Doc { route, .. } => Some(route),
            Self::Category { route, .. } => route.as_deref(),
            Self::Link { .. } => None,
        }
    }
}

#[derive(Debug, Clone)]
pub struct Sidebar {
    pub name: String,
    pub items: Vec<SidebarNode>,
}

/// One entry of a sidebar's reading order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageLink<'a> {
    pub label: &'a str,
    pub route: &'a str,
}

impl Sidebar {
    /// Pages in reading order: documents and category index pages, depth first.
    pub fn pages(&self) -> Vec<PageLink<'_>> {
        fn walk<'a>(nodes: &'a [SidebarNode], out: &mut Vec<PageLink<'a>>) {
            for node in nodes {
                if let Some(route) = node.route() {
                    out.push(PageLink {
                        label: node.label(),
                        route,
                    });
                }
                if let SidebarNode::Category { items, .. } = node {
                    walk(items, out);
                }
            }
        }
        let mut out = Vec::new();
        walk(&self.items, &mut out);
        out
    }

    /// Target of `doc-sidebar` navbar items.
    pub fn first_route(&self) -> Option<&str> {
        self.pages().first().map(|page| page.route)
    }

    pub fn contains(&self, route: &str) -> bool {
        self.pages().iter().any(|page| page.route == route)
    }

    /// `(previous, next)` of `route` in reading order.
    pub fn neighbors(&self, route: &str) -> (Option<PageLink<'_>>, Option<PageLink<'_>>) {
        let pages = self.pages();
        let Some(pos) = pages.iter().position(|page| page.route == route) else {
            return (None, None);
        };
        let prev = pos.checked_sub(1).map(|i| pages[i]);
        let next = pages.get(pos + 1).copied();
        (prev, next)
    }

    /// External and custom `link` items, for link checking.
    pub fn link_hrefs(&self) -> Vec<&str> {
        fn walk<'a>(nodes: &'a [SidebarNode], out: &mut Vec<&'a str>) {
            for node in nodes {
                match node {
                    SidebarNode::Link { href, .. } => out.push(href),
                    SidebarNode::Category { items, .. } => walk(items, out),
                    SidebarNode::Doc { .. } => {}
                }
            }
        }
        let mut out = Vec::new();
        walk(&self.items, &mut out);
        out
    }
}

/// Generated index page of a category.
#[derive(Debug, Clone)]
pub struct CategoryIndex {
    pub route: String,
    pub title: String,
    pub description: Option<String>,
    pub sidebar: String,
    pub items: Vec<SidebarNode>,
}

/// Every sidebar of the build, in name order.
#[derive(Debug, Default)]
pub struct Sidebars {
    sidebars: BTreeMap<String, Sidebar>,
    indexes: Vec<CategoryIndex>,
}

impl Sidebars {
    pub fn get(&self, name: &str) -> Option<&Sidebar> {
        self.sidebars.get(name)
    }

    pub fn iter(&self) -> impl Iterator<Item = &Sidebar> {
        self.sidebars.values()
    }

    /// The first sidebar (in name order) listing `route`.
    pub fn sidebar_for(&self, route: &str) -> Option<&Sidebar> {
        self.iter().find(|sidebar| sidebar.contains(route))
    }

    pub fn category_indexes(&self) -> &[CategoryIndex] {
        &self.indexes
    }
}

// ============================================================================
// loading
// ============================================================================

/// Load and resolve sidebars against the loaded documents.
pub fn load_sidebars(
    sidebar_path: &Path,
    docs_dir: &Path,
    docs: &DocSet,
    route_prefix: &str,
) -> Result<Sidebars, ContentError> {
    let definitions = if sidebar_path.is_file() {
        let content = std::fs::read_to_string(sidebar_path)
            .map_err(|e| ContentError::Io(sidebar_path.to_path_buf(), e))?;
        toml::from_str::<SidebarsFile>(&content)
            .map_err(|e| ContentError::SidebarFile(sidebar_path.to_path_buf(), e))?
            .sidebars
    } else {
        crate::debug!("sidebar"; "no {}, autogenerating {}", sidebar_path.display(), DEFAULT_SIDEBAR);
        BTreeMap::from([(
            DEFAULT_SIDEBAR.to_string(),
            vec![SidebarEntry::Item(SidebarItem::Autogenerated { dir: ".".into() })],
        )])
    };

    let mut resolver = Resolver {
        docs,
        docs_dir,
        route_prefix,
        taken: docs.iter().map(|doc| doc.route.clone()).collect(),
        indexes: Vec::new(),
        sidebar: String::new(),
    };

    let mut sidebars = BTreeMap::new();
    for (name, entries) in definitions {
        resolver.sidebar = name.clone();
        let items = resolver.resolve_entries(&entries)?;
        sidebars.insert(name.clone(), Sidebar { name, items });
    }

    Ok(Sidebars {
        sidebars,
        indexes: resolver.indexes,
    })
}

struct Resolver<'a> {
    docs: &'a DocSet,
    docs_dir: &'a Path,
    route_prefix: &'a str,
    /// Routes already used by documents and category indexes.
    taken: FxHashSet<String>,
    indexes: Vec<CategoryIndex>,
    sidebar: String,
}

impl Resolver<'_> {
    fn resolve_entries(&mut self, entries: &[SidebarEntry]) -> Result<Vec<SidebarNode>, ContentError> {
        let mut nodes = Vec::with_capacity(entries.len());
        for entry in entries {
            match entry {
                SidebarEntry::Doc(id) => nodes.push(self.doc_node(id, None)?),
                SidebarEntry::Item(item) => self.resolve_item(item, &mut nodes)?,
            }
        }
        Ok(nodes)
    }

    fn resolve_item(
        &mut self,
        item: &SidebarItem,
        nodes: &mut Vec<SidebarNode>,
    ) -> Result<(), ContentError> {
        match item {
            SidebarItem::Doc { id, label } => nodes.push(self.doc_node(id, label.as_deref())?),
            SidebarItem::Link { label, href } => nodes.push(SidebarNode::Link {
                label: label.clone(),
                href: href.clone(),
            }),
            SidebarItem::Autogenerated { dir } => nodes.extend(self.autogenerate(dir)?),
            SidebarItem::Category { label, items, link } => {
                let children = self.resolve_entries(items)?;
                let route = match link {
                    None => None,
                    Some(CategoryLink::Doc { id }) => Some(self.doc(id)?.route.clone()),
                    Some(CategoryLink::GeneratedIndex {
                        slug,
                        title,
                        description,
                    }) => Some(self.add_index(
                        label,
                        slug.as_deref(),
                        title.clone(),
                        description.clone(),
                        &children,
                    )?),
                };
                nodes.push(SidebarNode::Category {
                    label: label.clone(),
                    route,
                    items: children,
                });
            }
        }
        Ok(())
    }

    fn doc(&self, id: &str) -> Result<&Doc, ContentError> {
        self.docs.get(id).ok_or_else(|| ContentError::UnknownDoc {
            sidebar: self.sidebar.clone(),
            id: id.to_string(),
        })
    }

    fn doc_node(&self, id: &str, label: Option<&str>) -> Result<SidebarNode, ContentError> {
        let doc = self.doc(id)?;
        Ok(SidebarNode::Doc {
            id: doc.id.clone(),
            label: label.unwrap_or(doc.label()).to_string(),
            route: doc.route.clone(),
        })
    }

    fn add_index(
        &mut self,
        label: &str,
        slug: Option<&str>,
        title: Option<String>,
        description: Option<String>,
        items: &[SidebarNode],
    ) -> Result<String, ContentError> {
        let raw = match slug {
            Some(slug) => format!("{}/{}", self.route_prefix, slug.trim_start_matches('/')),
            None => format!("{}/category/{}", self.route_prefix, slugify(label)),
        };
        let route = normalize_route(&raw, "/");
        let title = title.unwrap_or_else(|| label.to_string());
        // The same category reached from another sidebar keeps its first index.
        if self
            .indexes
            .iter()
            .any(|index| index.route == route && index.title == title && index.items == items)
        {
            return Ok(route);
        }
        if !self.taken.insert(route.clone()) {
            return Err(ContentError::CategoryRoute {
                label: label.to_string(),
                route,
            });
        }
        self.indexes.push(CategoryIndex {
            route: route.clone(),
            title,
            description,
            sidebar: self.sidebar.clone(),
            items: items.to_vec(),
        });
        Ok(route)
    }

    /// Items for the documents and subdirectories of `dir` (`.` is the root).
    fn autogenerate(&mut self, dir: &str) -> Result<Vec<SidebarNode>, ContentError> {
        let dir = dir.trim_matches('/').trim_start_matches("./");
        let dir = if dir == "." { "" } else { dir };

        let in_tree = |doc: &&Doc| dir.is_empty() || doc.dir() == dir || doc.dir().starts_with(&format!("{dir}/"));
        if !dir.is_empty() && !self.docs.iter().any(|d| in_tree(&d)) {
            return Err(ContentError::UnknownDir {
                sidebar: self.sidebar.clone(),
                dir: dir.to_string(),
            });
        }

        // (position, sort key, node)
        let mut entries: Vec<(Option<f64>, String, SidebarNode)> = Vec::new();

        for doc in self.docs.iter().filter(|doc| doc.dir() == dir) {
            entries.push((
                doc.sidebar_position,
                doc.id.clone(),
                SidebarNode::Doc {
                    id: doc.id.clone(),
                    label: doc.label().to_string(),
                    route: doc.route.clone(),
                },
            ));
        }

        for sub in self.subdirectories(dir) {
            let meta = self.category_meta(&sub)?;
            let name = sub.rsplit('/').next().unwrap_or(&sub);
            let label = meta.label.unwrap_or_else(|| title_case(name));
            let children = self.autogenerate(&sub)?;
            let route = if meta.generated_index {
                Some(self.add_index(&label, None, None, meta.description, &children)?)
            } else {
                None
            };
            entries.push((
                meta.position,
                sub.clone(),
                SidebarNode::Category {
                    label,
                    route,
                    items: children,
                },
            ));
        }

        // Positioned items first, then the rest by path.
        entries.sort_by(|(pa, ka, _), (pb, kb, _)| match (pa, pb) {
            (Some(a), Some(b)) => a.total_cmp(b).then_with(|| ka.cmp(kb)),
            (Some(_), None) => std::cmp::Ordering::Less,
            (None, Some(_)) => std::cmp::Ordering::Greater,
            (None, None) => ka.cmp(kb),
        });

        Ok(entries.into_iter().map(|(_, _, node)| node).collect())
    }

    /// Direct subdirectories of `dir` that contain documents, sorted.
    fn subdirectories(&self, dir: &str) -> Vec<String> {
        let mut subs: Vec<String> = self
            .docs
            .iter()
            .filter_map(|doc| {
                let rest = if dir.is_empty() {
                    doc.dir()
                } else {
                    doc.dir().strip_prefix(dir)?.strip_prefix('/')?
                };
                let first = rest.split('/').next().filter(|s| !s.is_empty())?;
                Some(if dir.is_empty() {
                    first.to_string()
                } else {
                    format!("{dir}/{first}")
                })
            })
            .collect();
        subs.sort();
        subs.dedup();
        subs
    }

    fn category_meta(&self, dir: &str) -> Result<CategoryMeta, ContentError> {
        let path: PathBuf = self.docs_dir.join(dir).join(CATEGORY_FILE);
        if !path.is_file() {
            return Ok(CategoryMeta::default());
        }
        let content =
            std::fs::read_to_string(&path).map_err(|e| ContentError::Io(path.clone(), e))?;
        toml::from_str(&content).map_err(|e| ContentError::CategoryFile(path, e))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::content::{ScanOptions, scan_docs};
    use std::fs;
    use tempfile::TempDir;

    fn write(dir: &Path, path: &str, content: &str) {
        let full = dir.join(path);
        fs::create_dir_all(full.parent().unwrap()).unwrap();
        fs::write(full, content).unwrap();
    }

    fn fixture() -> (TempDir, DocSet) {
        let dir = TempDir::new().unwrap();
        let docs_dir = dir.path().join("docs");
        write(&docs_dir, "intro.md", "---\nsidebar_position: 1\n---\n# Intro");
        write(&docs_dir, "react-tutorial.md", "---\nsidebar_position: 2\n---\n# React Tutorial");
        write(&docs_dir, "chatgpt-quick-start.md", "# Coding with ChatGPT");
        write(&docs_dir, "database-api/basics.md", "---\nsidebar_position: 1\n---\n# Basics");
        write(&docs_dir, "database-api/sync.md", "---\nsidebar_position: 2\n---\n# Sync");
        write(
            &docs_dir,
            "database-api/_category_.toml",
            "label = \"Database API\"\nposition = 3\ngenerated_index = true\n",
        );
        let docs = scan_docs(
            &docs_dir,
            ScanOptions {
                route_prefix: "/docs",
                base_url: "/",
                skip_drafts: false,
            },
        )
        .unwrap();
        (dir, docs)
    }

    #[test]
    fn test_autogenerated_default_sidebar() {
        let (dir, docs) = fixture();
        let docs_dir = dir.path().join("docs");
        let sidebars =
            load_sidebars(&dir.path().join("sidebars.toml"), &docs_dir, &docs, "/docs").unwrap();

        let sidebar = sidebars.get(DEFAULT_SIDEBAR).unwrap();
        let labels: Vec<_> = sidebar.items.iter().map(SidebarNode::label).collect();
        assert_eq!(
            labels,
            ["Intro", "React Tutorial", "Database API", "Coding with ChatGPT"]
        );

        let routes: Vec<_> = sidebar.pages().iter().map(|p| p.route).collect();
        assert_eq!(
            routes,
            [
                "/docs/intro",
                "/docs/react-tutorial",
                "/docs/category/database-api",
                "/docs/database-api/basics",
                "/docs/database-api/sync",
                "/docs/chatgpt-quick-start",
            ]
        );

        let index = &sidebars.category_indexes()[0];
        assert_eq!(index.route, "/docs/category/database-api");
        assert_eq!(index.items.len(), 2);
    }

    #[test]
    fn test_sidebar_file() {
        let (dir, docs) = fixture();
        let docs_dir = dir.path().join("docs");
        let path = dir.path().join("sidebars.toml");
        write(
            dir.path(),
            "sidebars.toml",
            r#"
[sidebars]
tutorialSidebar = [
  "intro",
  { type = "doc", id = "react-tutorial", label = "React" },
  { type = "category", label = "API", link = { type = "generated-index", slug = "/api" }, items = [
    { type = "autogenerated", dir = "database-api" },
  ] },
  { type = "link", label = "GitHub", href = "https://github.com/fireproof-storage/fireproof" },
]
"#,
        );

        let sidebars = load_sidebars(&path, &docs_dir, &docs, "/docs").unwrap();
        let sidebar = sidebars.get("tutorialSidebar").unwrap();

        assert_eq!(sidebar.first_route(), Some("/docs/intro"));
        assert_eq!(sidebar.items[1].label(), "React");
        assert_eq!(sidebar.items[2].route(), Some("/docs/api"));
        assert_eq!(
            sidebar.link_hrefs(),
            ["https://github.com/fireproof-storage/fireproof"]
        );

        let (prev, next) = sidebar.neighbors("/docs/api");
        assert_eq!(prev.map(|p| p.route), Some("/docs/react-tutorial"));
        assert_eq!(next.map(|p| p.route), Some("/docs/database-api/basics"));

        assert_eq!(
            sidebars.sidebar_for("/docs/database-api/sync").map(|s| s.name.as_str()),
            Some("tutorialSidebar")
        );
        assert!(sidebars.sidebar_for("/docs/chatgpt-quick-start").is_none());
    }

    #[test]
    fn test_shared_generated_index() {
        let (dir, docs) = fixture();
        write(
            dir.path(),
            "sidebars.toml",
            r#"
[sidebars]
guide = [{ type = "autogenerated", dir = "." }]
reference = [{ type = "autogenerated", dir = "." }]
"#,
        );

        let sidebars =
            load_sidebars(&dir.path().join("sidebars.toml"), &dir.path().join("docs"), &docs, "/docs")
                .unwrap();
        assert_eq!(sidebars.category_indexes().len(), 1);
        assert_eq!(sidebars.category_indexes()[0].sidebar, "guide");
        assert!(sidebars.get("reference").unwrap().contains("/docs/category/database-api"));
    }

    #[test]
    fn test_unknown_doc_rejected() {
        let (dir, docs) = fixture();
        write(dir.path(), "sidebars.toml", "[sidebars]\nmain = [\"missing\"]\n");

        let err = load_sidebars(
            &dir.path().join("sidebars.toml"),
            &dir.path().join("docs"),
            &docs,
            "/docs",
        )
        .unwrap_err();
        assert!(matches!(err, ContentError::UnknownDoc { ref id, .. } if id == "missing"));
    }
}
