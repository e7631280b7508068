//! Site file creation.

use std::{
    fs,
    path::{Path, PathBuf},
};

use anyhow::{Context, Result};

use super::CONFIG_FILE;
use crate::embed::init::FILES;

/// Files to write ignore patterns to
const IGNORE_FILES: &[&str] = &[".gitignore"];

/// Write the configuration, ignore files and every embedded file under
/// `root`, creating directories as needed. Returns the written paths.
pub fn write_site(root: &Path, config: &str) -> Result<Vec<PathBuf>> {
    fs::create_dir_all(root)
        .with_context(|| format!("failed to create root directory '{}'", root.display()))?;

    let mut written = Vec::with_capacity(FILES.len() + 2);
    written.push(write_file(root, CONFIG_FILE, config.as_bytes())?);
    for name in IGNORE_FILES {
        written.push(write_file(root, name, b"/build\n")?);
    }
    for (relative, content) in FILES {
        written.push(write_file(root, relative, content)?);
    }
    Ok(written)
}

fn write_file(root: &Path, relative: &str, content: &[u8]) -> Result<PathBuf> {
    let path = root.join(relative);
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)
            .with_context(|| format!("failed to create directory '{}'", parent.display()))?;
    }
    fs::write(&path, content).with_context(|| format!("failed to write '{}'", path.display()))?;
    Ok(path)
}
