//! `[theme]` section configuration.
//!
//! Everything the page chrome needs: navbar, footer, code block themes, the
//! optional search widget and an extra stylesheet.
//!
//! # Example
//!
//! ```toml
//! [theme]
//! custom_css = "src/css/custom.css"
//!
//! [theme.navbar]
//! title = "Fireproof"
//!
//! [theme.prism]
//! theme = "github"
//! dark_theme = "dracula"
//! ```

mod footer;
mod navbar;
mod prism;
mod search;

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

pub use footer::FooterConfig;
pub use navbar::{NavItemType, NavPosition, NavbarConfig};
pub use prism::PrismConfig;
pub use search::SearchConfig;

use crate::config::{ConfigDiagnostics, FieldPath};

/// Page chrome shared by every rendered page.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ThemeConfig {
    /// Stylesheet copied to `assets/custom.css` and linked after the base theme.
    pub custom_css: Option<PathBuf>,

    pub navbar: NavbarConfig,
    pub footer: FooterConfig,
    pub prism: PrismConfig,

    /// Search widget credentials. No widget is emitted when absent.
    pub search: Option<SearchConfig>,
}

impl ThemeConfig {
    pub const FIELD_CUSTOM_CSS: FieldPath = FieldPath::new("theme.custom_css");

    pub fn validate(&self, diag: &mut ConfigDiagnostics) {
        if let Some(css) = &self.custom_css
            && !css.is_file()
        {
            diag.error_with_hint(
                Self::FIELD_CUSTOM_CSS,
                format!("stylesheet '{}' not found", css.display()),
                "remove custom_css or create the file",
            );
        }

        self.navbar.validate(diag);
        self.footer.validate(diag);
        if let Some(search) = &self.search {
            search.validate(diag);
        }
    }
}
