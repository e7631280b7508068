//! Documents: discovery, ids, routes and parallel rendering.
//!
//! | Source (under docs dir)     | Id                      | Route                          |
//! |-----------------------------|-------------------------|--------------------------------|
//! | `intro.md`                  | `intro`                 | `/docs/intro`                  |
//! | `database-api/basics.md`    | `database-api/basics`   | `/docs/database-api/basics`    |
//! | `guides/index.md`           | `guides/index`          | `/docs/guides`                 |
//! | `a.md` with `id: start`     | `start`                 | `/docs/start`                  |
//! | `a.md` with `slug: /`       | `a`                     | `/docs`                        |

use std::path::{Path, PathBuf};

use jwalk::WalkDir;
use rayon::prelude::*;
use rustc_hash::FxHashMap;

use super::markdown::render_markdown;
use super::meta::{DocMeta, split_frontmatter};
use super::ContentError;
use crate::core::LinkKind;
use crate::utils::path::route::{href_for, normalize_route, split_path_fragment};
use crate::utils::path::to_slash;

/// A rendered document.
#[derive(Debug, Clone)]
pub struct Doc {
    pub id: String,
    pub title: String,
    pub route: String,
    pub sidebar_label: Option<String>,
    pub sidebar_position: Option<f64>,
    pub description: Option<String>,
    /// Path relative to the docs directory with `/` separators.
    pub source: String,
    /// Body HTML.
    pub html: String,
    /// Link targets found in the body, `.md` links already rewritten.
    pub links: Vec<String>,
}

impl Doc {
    /// Label used in sidebars and pagers.
    pub fn label(&self) -> &str {
        self.sidebar_label.as_deref().unwrap_or(&self.title)
    }

    /// Directory of the source file, `` for top-level documents.
    pub fn dir(&self) -> &str {
        source_dir(&self.source)
    }
}

/// Every document of the build, ordered by source path.
#[derive(Debug, Default)]
pub struct DocSet {
    docs: Vec<Doc>,
    by_id: FxHashMap<String, usize>,
}

impl DocSet {
    fn new(docs: Vec<Doc>) -> Self {
        let by_id = docs
            .iter()
            .enumerate()
            .map(|(i, doc)| (doc.id.clone(), i))
            .collect();
        Self { docs, by_id }
    }

    pub fn get(&self, id: &str) -> Option<&Doc> {
        self.by_id.get(id).map(|&i| &self.docs[i])
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Doc> {
        self.docs.iter()
    }

    pub fn as_slice(&self) -> &[Doc] {
        &self.docs
    }

    pub fn len(&self) -> usize {
        self.docs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.docs.is_empty()
    }
}

/// Inputs for [`scan_docs`].
#[derive(Debug, Clone, Copy)]
pub struct ScanOptions<'a> {
    /// `/docs`, or `` when documents live at the site root.
    pub route_prefix: &'a str,
    pub base_url: &'a str,
    pub skip_drafts: bool,
}

/// Parsed but not yet rendered document.
struct Draft {
    source: String,
    path: PathBuf,
    meta: DocMeta,
    body: String,
}

/// Find, parse and render every document under `dir`.
///
/// A missing directory yields an empty set. Files and directories below `dir`
/// whose name starts with `_` or `.` are skipped; the name of `dir` itself
/// does not matter.
pub fn scan_docs(dir: &Path, options: ScanOptions<'_>) -> Result<DocSet, ContentError> {
    if !dir.is_dir() {
        crate::debug!("docs"; "no docs directory at {}", dir.display());
        return Ok(DocSet::default());
    }

    let mut files = collect_doc_files(dir);
    files.sort();

    let mut drafts = files
        .par_iter()
        .map(|path| read_draft(dir, path))
        .collect::<Result<Vec<_>, _>>()?;

    if options.skip_drafts {
        drafts.retain(|draft| !draft.meta.draft);
    }

    let placed = place_drafts(drafts, options.route_prefix)?;
    let routes: FxHashMap<&str, &str> = placed
        .iter()
        .map(|(draft, _, route)| (draft.source.as_str(), route.as_str()))
        .collect();

    let docs = placed
        .par_iter()
        .map(|(draft, id, route)| {
            let dir = source_dir(&draft.source);
            let rendered = render_markdown(&draft.body, |link| {
                rewrite_doc_link(link, dir, &routes, options.base_url)
            });
            let title = draft
                .meta
                .title
                .clone()
                .or(rendered.title)
                .unwrap_or_else(|| last_segment(id).to_string());

            Doc {
                id: id.clone(),
                title,
                route: route.clone(),
                sidebar_label: draft.meta.sidebar_label.clone(),
                sidebar_position: draft.meta.sidebar_position,
                description: draft.meta.description.clone(),
                source: draft.source.clone(),
                html: rendered.html,
                links: rendered.links,
            }
        })
        .collect::<Vec<_>>();

    crate::debug!("docs"; "loaded {} documents from {}", docs.len(), dir.display());
    Ok(DocSet::new(docs))
}

fn collect_doc_files(dir: &Path) -> Vec<PathBuf> {
    WalkDir::new(dir)
        .sort(true)
        .process_read_dir(|depth, _, _, children| {
            // `None` is the read that yields the root entry itself.
            if depth.is_none() {
                return;
            }
            children.retain(|entry| {
                entry
                    .as_ref()
                    .map(|e| !e.file_name().to_string_lossy().starts_with(['_', '.']))
                    .unwrap_or(true)
            });
        })
        .into_iter()
        .filter_map(Result::ok)
        .filter(|e| e.file_type().is_file())
        .map(|e| e.path())
        .filter(|p| matches!(p.extension().and_then(|e| e.to_str()), Some("md" | "mdx")))
        .collect()
}

fn read_draft(dir: &Path, path: &Path) -> Result<Draft, ContentError> {
    let content =
        std::fs::read_to_string(path).map_err(|e| ContentError::Io(path.to_path_buf(), e))?;
    let (meta, body) =
        split_frontmatter(&content).map_err(|e| ContentError::Frontmatter(path.to_path_buf(), e))?;
    let relative = path.strip_prefix(dir).unwrap_or(path);

    Ok(Draft {
        source: to_slash(relative),
        path: path.to_path_buf(),
        body: body.to_string(),
        meta,
    })
}

/// Assign ids and routes, rejecting collisions.
fn place_drafts(
    drafts: Vec<Draft>,
    route_prefix: &str,
) -> Result<Vec<(Draft, String, String)>, ContentError> {
    let mut ids: FxHashMap<String, PathBuf> = FxHashMap::default();
    let mut routes: FxHashMap<String, PathBuf> = FxHashMap::default();
    let mut placed = Vec::with_capacity(drafts.len());

    for draft in drafts {
        let id = doc_id(&draft.source, draft.meta.id.as_deref());
        let route = doc_route(&draft.source, &id, draft.meta.slug.as_deref(), route_prefix);

        if let Some(first) = ids.insert(id.clone(), draft.path.clone()) {
            return Err(ContentError::DuplicateId {
                id,
                first,
                second: draft.path,
            });
        }
        if let Some(first) = routes.insert(route.clone(), draft.path.clone()) {
            return Err(ContentError::DuplicateRoute {
                route,
                first,
                second: draft.path,
            });
        }
        placed.push((draft, id, route));
    }
    Ok(placed)
}

/// Id of a document: source path without extension, last segment replaced by
/// the frontmatter `id` when present.
pub fn doc_id(source: &str, meta_id: Option<&str>) -> String {
    let stem = source
        .strip_suffix(".mdx")
        .or_else(|| source.strip_suffix(".md"))
        .unwrap_or(source);
    match meta_id {
        Some(id) => match source_dir(source) {
            "" => id.to_string(),
            dir => format!("{dir}/{id}"),
        },
        None => stem.to_string(),
    }
}

/// Route of a document under `route_prefix`.
///
/// Absolute slugs are relative to the prefix, relative slugs to the
/// document's directory. `index` documents take their directory's route.
pub fn doc_route(source: &str, id: &str, slug: Option<&str>, route_prefix: &str) -> String {
    let raw = match slug {
        Some(slug) if slug.starts_with('/') => format!("{route_prefix}{slug}"),
        Some(slug) => match source_dir(source) {
            "" => format!("{route_prefix}/{slug}"),
            dir => format!("{route_prefix}/{dir}/{slug}"),
        },
        None => {
            let path = match id.rsplit_once('/') {
                Some((dir, "index")) => dir,
                None if id == "index" => "",
                _ => id,
            };
            format!("{route_prefix}/{path}")
        }
    };
    normalize_route(&raw, "/")
}

/// Rewrite a relative `.md` link into the href of the target document.
fn rewrite_doc_link(
    link: &str,
    dir: &str,
    routes: &FxHashMap<&str, &str>,
    base_url: &str,
) -> Option<String> {
    if !LinkKind::is_markdown_file(link) {
        return None;
    }
    let LinkKind::FileRelative(relative) = LinkKind::parse(link) else {
        return None;
    };
    let (path, fragment) = split_path_fragment(relative);
    let target = join_relative(dir, path)?;
    let href = href_for(routes.get(target.as_str())?, base_url);

    Some(if fragment.is_empty() {
        href
    } else {
        format!("{href}#{fragment}")
    })
}

/// Resolve `./` and `../` segments of `path` against `dir`.
/// Returns `None` when the path climbs above the docs root.
fn join_relative(dir: &str, path: &str) -> Option<String> {
    let mut parts: Vec<&str> = dir.split('/').filter(|s| !s.is_empty()).collect();
    for segment in path.split('/') {
        match segment {
            "" | "." => {}
            ".." => {
                parts.pop()?;
            }
            other => parts.push(other),
        }
    }
    Some(parts.join("/"))
}

fn source_dir(source: &str) -> &str {
    source.rsplit_once('/').map_or("", |(dir, _)| dir)
}

fn last_segment(id: &str) -> &str {
    id.rsplit_once('/').map_or(id, |(_, last)| last)
}
