//! `[docs]` section configuration.
//!
//! # Example
//!
//! ```toml
//! [docs]
//! path = "docs"                 # Markdown sources
//! route_base = "docs"           # Documents live under /docs/...
//! sidebar_path = "sidebars.toml"
//! ```

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::config::{ConfigDiagnostics, FieldPath};

/// Documentation content settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct DocsConfig {
    /// Directory holding `*.md` documents.
    pub path: PathBuf,

    /// First route segment of every document.
    pub route_base: String,

    /// Sidebar definition file. Missing file means one autogenerated sidebar.
    pub sidebar_path: PathBuf,
}

impl Default for DocsConfig {
    fn default() -> Self {
        Self {
            path: "docs".into(),
            route_base: "docs".into(),
            sidebar_path: "sidebars.toml".into(),
        }
    }
}

impl DocsConfig {
    pub const FIELD_ROUTE_BASE: FieldPath = FieldPath::new("docs.route_base");
    pub const FIELD_PATH: FieldPath = FieldPath::new("docs.path");

    pub fn validate_paths(&self, diag: &mut ConfigDiagnostics) {
        if self.path.is_absolute() {
            diag.error_with_hint(
                Self::FIELD_PATH,
                format!("'{}' must be relative to the project root", self.path.display()),
                "remove the leading '/'",
            );
        }
    }

    pub fn validate(&self, diag: &mut ConfigDiagnostics) {
        let base = self.route_base.trim_matches('/');
        if base.contains(|c: char| c.is_whitespace() || c == '#' || c == '?') {
            diag.error(
                Self::FIELD_ROUTE_BASE,
                format!("'{}' is not a valid route segment", self.route_base),
            );
        }
        if !self.path.is_dir() {
            diag.warn(
                Self::FIELD_PATH,
                format!("'{}' does not exist, no documents will be built", self.path.display()),
            );
        }
    }

    /// Route prefix of every document, `/docs` or `` when served at the root.
    pub fn route_prefix(&self) -> String {
        let base = self.route_base.trim_matches('/');
        if base.is_empty() {
            String::new()
        } else {
            format!("/{base}")
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_route_prefix() {
        let docs = DocsConfig::default();
        assert_eq!(docs.route_prefix(), "/docs");

        let docs = DocsConfig {
            route_base: "/".into(),
            ..Default::default()
        };
        assert_eq!(docs.route_prefix(), "");
    }

    #[test]
    fn test_invalid_route_base() {
        let docs = DocsConfig {
            route_base: "my docs".into(),
            ..Default::default()
        };
        let mut diag = ConfigDiagnostics::new();
        docs.validate(&mut diag);
        assert_eq!(diag.len(), 1);
    }

    #[test]
    fn test_missing_docs_dir_warns() {
        let dir = TempDir::new().unwrap();
        let mut docs = DocsConfig {
            path: dir.path().join("docs"),
            ..Default::default()
        };
        let mut diag = ConfigDiagnostics::new();
        docs.validate(&mut diag);
        assert!(diag.is_empty());
        assert_eq!(diag.warnings().len(), 1);
        assert_eq!(diag.warnings()[0].0, DocsConfig::FIELD_PATH);

        docs.path = dir.path().to_path_buf();
        let mut diag = ConfigDiagnostics::new();
        docs.validate(&mut diag);
        assert!(diag.warnings().is_empty());
    }
}
