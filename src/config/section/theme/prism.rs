//! `[theme.prism]` code block themes.

use serde::{Deserialize, Serialize};

/// Light and dark code theme names, exposed to stylesheets as
/// `data-prism-theme` / `data-prism-dark-theme` on `<html>`.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct PrismConfig {
    pub theme: String,
    pub dark_theme: String,
}

impl Default for PrismConfig {
    fn default() -> Self {
        Self {
            theme: "github".into(),
            dark_theme: "dracula".into(),
        }
    }
}
