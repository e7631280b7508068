//! `[theme.search]` search widget descriptor.
//!
//! ```toml
//! [theme.search]
//! app_id = "LPECO32JOJ"
//! api_key = "0ba664435d303eb4796062a1403e2046"   # public, search-only
//! index_name = "use-fireproof"
//! contextual_search = false
//! ```

use serde::{Deserialize, Serialize};
use serde_json::{Value, json};

use crate::config::{ConfigDiagnostics, FieldPath};

/// Credentials handed verbatim to the external search widget.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SearchConfig {
    pub app_id: String,
    pub api_key: String,
    pub index_name: String,
    #[serde(default)]
    pub contextual_search: bool,
}

impl SearchConfig {
    /// Element id the widget mounts into.
    pub const CONTAINER: &'static str = "#hearth-search";

    pub fn validate(&self, diag: &mut ConfigDiagnostics) {
        for (field, value) in [
            (FieldPath::new("theme.search.app_id"), &self.app_id),
            (FieldPath::new("theme.search.api_key"), &self.api_key),
            (FieldPath::new("theme.search.index_name"), &self.index_name),
        ] {
            if value.trim().is_empty() {
                diag.error(field, "must not be empty");
            }
        }
    }

    /// JSON object passed to the widget.
    ///
    /// Contextual search scopes results to the current locale through
    /// `searchParameters.facetFilters`.
    pub fn descriptor(&self, locale: &str) -> Value {
        let mut value = json!({
            "appId": self.app_id,
            "apiKey": self.api_key,
            "indexName": self.index_name,
            "container": Self::CONTAINER,
        });
        if self.contextual_search {
            value["searchParameters"] = json!({
                "facetFilters": [format!("language:{locale}")],
            });
        }
        value
    }
}
