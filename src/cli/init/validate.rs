//! Pre-initialization validation.
//!
//! Validates target directory state before site creation.

use anyhow::{Context, Result, bail};
use std::{fs, path::Path};

/// Initialization mode determines validation rules.
#[derive(Debug, Clone, Copy)]
pub enum InitMode {
    /// `hearth init` - initialize in current directory (must be empty)
    CurrentDir,
    /// `hearth init <name>` - create new subdirectory (must not exist)
    NewDir,
}

/// Validate target directory for initialization.
///
/// # Rules
/// - `CurrentDir`: directory must be empty (or not exist)
/// - `NewDir`: directory must not exist
pub fn validate_target(root: &Path, mode: InitMode) -> Result<()> {
    match mode {
        InitMode::CurrentDir => {
            if !is_empty(root)? {
                bail!(
                    "current directory is not empty\n\
                     use `hearth init <name>` to create the site in a new subdirectory"
                );
            }
        }
        InitMode::NewDir => {
            if root.exists() {
                bail!(
                    "directory '{}' already exists\n\
                     choose a different name or remove the existing directory",
                    root.display()
                );
            }
        }
    }
    Ok(())
}

/// Check if directory is empty or doesn't exist.
fn is_empty(path: &Path) -> Result<bool> {
    if !path.exists() {
        return Ok(true);
    }
    let is_empty = fs::read_dir(path)
        .with_context(|| format!("failed to read directory '{}'", path.display()))?
        .next()
        .is_none();
    Ok(is_empty)
}
