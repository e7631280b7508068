//! `[theme.footer]` configuration.
//!
//! ```toml
//! [theme.footer]
//! style = "dark"
//! copyright = "Copyright © {year} Fireproof"
//!
//! [[theme.footer.links]]
//! title = "Docs"
//! items = [{ label = "React Hooks", to = "/docs/react-tutorial" }]
//! ```

use serde::{Deserialize, Serialize};

use crate::config::{ConfigDiagnostics, FieldPath};

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct FooterConfig {
    pub style: FooterStyle,
    pub links: Vec<FooterColumn>,
    /// May contain `{year}`.
    pub copyright: Option<String>,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FooterStyle {
    Dark,
    #[default]
    Light,
}

impl FooterStyle {
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Dark => "dark",
            Self::Light => "light",
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FooterColumn {
    pub title: String,
    #[serde(default)]
    pub items: Vec<FooterLink>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FooterLink {
    pub label: String,
    #[serde(alias = "href")]
    pub to: String,
}

impl FooterConfig {
    pub fn validate(&self, diag: &mut ConfigDiagnostics) {
        for (c, column) in self.links.iter().enumerate() {
            if column.title.trim().is_empty() {
                diag.error(
                    FieldPath::indexed("theme.footer.links", c, "title"),
                    "footer column title must not be empty",
                );
            }
            for (i, link) in column.items.iter().enumerate() {
                if link.to.trim().is_empty() {
                    diag.error(
                        FieldPath::indexed(
                            format!("theme.footer.links[{c}].items").as_str(),
                            i,
                            "to",
                        ),
                        format!("footer link '{}' has no target", link.label),
                    );
                }
            }
        }
    }

    /// Copyright line with `{year}` substituted.
    pub fn copyright_text(&self, year: i64) -> Option<String> {
        self.copyright
            .as_deref()
            .map(|text| text.replace("{year}", &year.to_string()))
    }
}
