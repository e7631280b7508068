//! Site initialization.
//!
//! Scaffolds the Fireproof documentation site: configuration, sidebars,
//! starter documents, stylesheet and images.
//!
//! - [`validate`]: target directory checks
//! - [`structure`]: file creation

mod structure;
mod validate;

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};

use crate::config::HearthConfig;
use crate::embed::init::{CONFIG_TOML, ConfigVars};
use crate::log;
use crate::utils::plural_count;

pub use validate::InitMode;

/// Config file name written by `init`.
pub const CONFIG_FILE: &str = "hearth.toml";

/// The scaffolded `hearth.toml`.
pub fn config_template() -> String {
    CONFIG_TOML.render(&ConfigVars {
        version: env!("CARGO_PKG_VERSION"),
    })
}

/// Create a new site in `name` (a new directory) or in the current directory.
///
/// With `dry_run`, prints the configuration to stdout and touches nothing.
pub fn new_site(name: Option<&Path>, dry_run: bool) -> Result<()> {
    if dry_run {
        print!("{}", config_template());
        return Ok(());
    }

    let cwd = std::env::current_dir().context("failed to read the current directory")?;
    let (root, mode) = match name {
        Some(name) => (cwd.join(name), InitMode::NewDir),
        None => (cwd, InitMode::CurrentDir),
    };
    let written = init_at(&root, mode)?;

    log!("init"; "created {} in {}", plural_count(written.len(), "file"), root.display());
    log!("init"; "run `hearth serve` to preview the site");
    Ok(())
}

/// Validate `root`, write every file and load the result back as a check.
pub fn init_at(root: &Path, mode: InitMode) -> Result<Vec<PathBuf>> {
    validate::validate_target(root, mode)?;
    let written = structure::write_site(root, &config_template())?;
    HearthConfig::from_file(&root.join(CONFIG_FILE))
        .context("scaffolded configuration does not load")?;
    Ok(written)
}
