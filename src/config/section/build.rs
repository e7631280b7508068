//! `[build]` section configuration.
//!
//! # Example
//!
//! ```toml
//! [build]
//! output = "build"        # Output directory
//! static_dir = "static"   # Copied verbatim to the output root
//! sitemap = true          # Emit sitemap.xml
//! minify = false          # Minify sitemap.xml
//! ```

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::config::{ConfigDiagnostics, FieldPath};

/// Build paths and switches.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct BuildConfig {
    /// Output directory, relative to the project root.
    pub output: PathBuf,

    /// Static files directory, relative to the project root.
    pub static_dir: PathBuf,

    /// Emit `sitemap.xml`.
    pub sitemap: bool,

    /// Minify generated XML.
    pub minify: bool,

    /// Fixed year for `{year}` in the footer copyright (reproducible builds).
    pub year: Option<i64>,

    /// Remove the output directory before writing (CLI only).
    #[serde(skip)]
    pub clean: bool,

    /// Leave out documents marked `draft` (CLI only).
    #[serde(skip)]
    pub skip_drafts: bool,
}

impl Default for BuildConfig {
    fn default() -> Self {
        Self {
            output: "build".into(),
            static_dir: "static".into(),
            sitemap: true,
            minify: false,
            year: None,
            clean: false,
            skip_drafts: false,
        }
    }
}

impl BuildConfig {
    pub const FIELD_OUTPUT: FieldPath = FieldPath::new("build.output");
    pub const FIELD_STATIC: FieldPath = FieldPath::new("build.static_dir");

    /// Check that configured directories are relative to the project root.
    ///
    /// Must run before path normalization, which makes every path absolute.
    pub fn validate_paths(&self, diag: &mut ConfigDiagnostics) {
        for (field, path) in [
            (Self::FIELD_OUTPUT, &self.output),
            (Self::FIELD_STATIC, &self.static_dir),
        ] {
            if path.is_absolute() {
                diag.error_with_hint(
                    field,
                    format!("'{}' must be relative to the project root", path.display()),
                    "remove the leading '/'",
                );
            }
        }
    }

    /// Build year used for copyright substitution.
    pub fn year(&self) -> i64 {
        self.year.unwrap_or_else(crate::utils::date::current_year)
    }
}
