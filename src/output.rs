//! The rendered site held in memory until every check has passed.
//!
//! Files are keyed by their output-relative path (`/` separators), so
//! iteration order is stable and two builds of the same input write the same
//! bytes in the same order.

use std::collections::BTreeMap;
use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use jwalk::WalkDir;

use crate::utils::path::route::route_output_path;
use crate::utils::path::to_slash;

#[derive(Debug, Default)]
pub struct SiteOutput {
    files: BTreeMap<String, Vec<u8>>,
}

impl SiteOutput {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a file, replacing any previous content at `path`.
    pub fn insert(&mut self, path: impl Into<String>, content: impl Into<Vec<u8>>) {
        self.files.insert(path.into(), content.into());
    }

    /// Add an HTML page at the file its route maps to.
    pub fn insert_page(&mut self, route: &str, html: String) {
        self.insert(to_slash(&route_output_path(route)), html);
    }

    /// Add every file under `dir` at the output root.
    ///
    /// Rendered pages take precedence over static files at the same path.
    pub fn add_static_dir(&mut self, dir: &Path) -> Result<usize> {
        if !dir.is_dir() {
            return Ok(0);
        }
        let mut count = 0;
        for entry in WalkDir::new(dir).sort(true).into_iter() {
            let entry = entry.with_context(|| format!("failed to walk {}", dir.display()))?;
            if !entry.file_type().is_file() {
                continue;
            }
            let path = entry.path();
            let relative = to_slash(path.strip_prefix(dir).unwrap_or(&path));
            if self.files.contains_key(&relative) {
                crate::debug!("static"; "{} shadowed by a rendered page", relative);
                continue;
            }
            let content =
                fs::read(&path).with_context(|| format!("failed to read {}", path.display()))?;
            self.files.insert(relative, content);
            count += 1;
        }
        Ok(count)
    }

    pub fn contains(&self, path: &str) -> bool {
        self.files.contains_key(path)
    }

    #[cfg(test)]
    pub fn get(&self, path: &str) -> Option<&[u8]> {
        self.files.get(path).map(Vec::as_slice)
    }

    pub fn paths(&self) -> impl Iterator<Item = &str> {
        self.files.keys().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.files.len()
    }

    /// blake3 over every `(path, content)` pair in path order, hex encoded.
    pub fn digest(&self) -> String {
        let mut hasher = blake3::Hasher::new();
        for (path, content) in &self.files {
            hasher.update(&(path.len() as u64).to_le_bytes());
            hasher.update(path.as_bytes());
            hasher.update(&(content.len() as u64).to_le_bytes());
            hasher.update(content);
        }
        hex::encode(hasher.finalize().as_bytes())
    }

    /// Write every file below `output`, removing the directory first when
    /// `clean` is set.
    pub fn write(&self, output: &Path, clean: bool) -> Result<()> {
        if clean && output.exists() {
            fs::remove_dir_all(output)
                .with_context(|| format!("failed to clean {}", output.display()))?;
        }
        for (relative, content) in &self.files {
            let path = output.join(relative);
            if let Some(parent) = path.parent() {
                fs::create_dir_all(parent)
                    .with_context(|| format!("failed to create {}", parent.display()))?;
            }
            fs::write(&path, content)
                .with_context(|| format!("failed to write {}", path.display()))?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_page_paths() {
        let mut output = SiteOutput::new();
        output.insert_page("/", "<html>home</html>".into());
        output.insert_page("/docs/intro", "<html>intro</html>".into());
        output.insert("404.html", "<html>missing</html>");

        let paths: Vec<_> = output.paths().collect();
        assert_eq!(paths, ["404.html", "docs/intro/index.html", "index.html"]);
    }

    #[test]
    fn test_digest_tracks_paths_and_content() {
        let mut a = SiteOutput::new();
        a.insert("index.html", "home");
        let mut b = SiteOutput::new();
        b.insert("index.html", "home");
        assert_eq!(a.digest(), b.digest());
        assert_eq!(a.digest().len(), 64);

        b.insert("index.html", "changed");
        assert_ne!(a.digest(), b.digest());

        let mut c = SiteOutput::new();
        c.insert("other.html", "home");
        assert_ne!(a.digest(), c.digest());
    }

    #[test]
    fn test_static_dir_does_not_shadow_pages() {
        let dir = TempDir::new().unwrap();
        let static_dir = dir.path().join("static");
        fs::create_dir_all(static_dir.join("img")).unwrap();
        fs::write(static_dir.join("img/logo.svg"), "<svg/>").unwrap();
        fs::write(static_dir.join("index.html"), "static home").unwrap();

        let mut output = SiteOutput::new();
        output.insert_page("/", "rendered home".into());
        assert_eq!(output.add_static_dir(&static_dir).unwrap(), 1);

        assert_eq!(output.get("img/logo.svg"), Some(b"<svg/>".as_slice()));
        assert_eq!(output.get("index.html"), Some(b"rendered home".as_slice()));
        assert_eq!(output.add_static_dir(&dir.path().join("missing")).unwrap(), 0);
    }

    #[test]
    fn test_write_and_clean() {
        let dir = TempDir::new().unwrap();
        let out = dir.path().join("build");
        fs::create_dir_all(&out).unwrap();
        fs::write(out.join("stale.html"), "old").unwrap();

        let mut output = SiteOutput::new();
        output.insert_page("/docs/intro", "intro".into());
        output.write(&out, false).unwrap();
        assert!(out.join("stale.html").exists());
        assert_eq!(fs::read_to_string(out.join("docs/intro/index.html")).unwrap(), "intro");

        output.write(&out, true).unwrap();
        assert!(!out.join("stale.html").exists());
        assert!(out.join("docs/intro/index.html").exists());
    }
}
