//! Document frontmatter.
//!
//! Two fence styles are accepted:
//!
//! ```text
//! +++                          ---
//! title = "Basics"             title: Basics
//! sidebar_position = 2         sidebar_position: 2
//! +++                          ---
//! ```
//!
//! `+++` blocks are TOML. `---` blocks are read as flat `key: value` lines;
//! unknown keys are ignored in both.

use serde::Deserialize;

/// Frontmatter fields understood by the docs loader.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct DocMeta {
    /// Replaces the last segment of the path-derived id.
    pub id: Option<String>,
    pub title: Option<String>,
    /// Route override. Absolute slugs are relative to `base_url`, relative
    /// slugs to the document's directory route.
    pub slug: Option<String>,
    pub sidebar_label: Option<String>,
    pub sidebar_position: Option<f64>,
    pub description: Option<String>,
    pub draft: bool,
}

/// Split a document into frontmatter and body.
///
/// Returns default metadata and the whole input when no fence is present.
pub fn split_frontmatter(content: &str) -> Result<(DocMeta, &str), toml::de::Error> {
    match detect_frontmatter(content) {
        Some((fm, body, true)) => Ok((toml::from_str(fm)?, body)),
        Some((fm, body, false)) => Ok((parse_key_values(fm), body)),
        None => Ok((DocMeta::default(), content)),
    }
}

/// Returns `(frontmatter, body, is_toml)` if a fence opens the file.
fn detect_frontmatter(content: &str) -> Option<(&str, &str, bool)> {
    let trimmed = content.trim_start_matches('\u{feff}').trim_start();

    for (fence, is_toml) in [("---", false), ("+++", true)] {
        if let Some(rest) = trimmed.strip_prefix(fence)
            && rest.starts_with(['\n', '\r'])
            && let Some(end) = rest.find(&format!("\n{fence}"))
        {
            let fm = rest[..end].trim();
            let body = rest[end + 1 + fence.len()..].trim_start_matches(['\r', '\n']);
            return Some((fm, body, is_toml));
        }
    }
    None
}

fn parse_key_values(content: &str) -> DocMeta {
    let mut meta = DocMeta::default();

    for line in content.lines() {
        let line = line.trim();
        if line.is_empty() || line.starts_with('#') {
            continue;
        }
        let Some((key, value)) = line.split_once(':') else {
            continue;
        };
        let value = unquote(value.trim());

        match key.trim() {
            "id" => meta.id = Some(value.to_string()),
            "title" => meta.title = Some(value.to_string()),
            "slug" => meta.slug = Some(value.to_string()),
            "sidebar_label" => meta.sidebar_label = Some(value.to_string()),
            "sidebar_position" => meta.sidebar_position = value.parse().ok(),
            "description" => meta.description = Some(value.to_string()),
            "draft" => meta.draft = value.eq_ignore_ascii_case("true"),
            _ => {}
        }
    }

    meta
}

fn unquote(value: &str) -> &str {
    for quote in ['"', '\''] {
        if let Some(inner) = value
            .strip_prefix(quote)
            .and_then(|v| v.strip_suffix(quote))
        {
            return inner;
        }
    }
    value
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_key_value_frontmatter() {
        let content = "---\nid: quick-start\ntitle: \"Coding with ChatGPT\"\nsidebar_position: 2\ndraft: true\n---\n\n# Body";
        let (meta, body) = split_frontmatter(content).unwrap();
        assert_eq!(meta.id.as_deref(), Some("quick-start"));
        assert_eq!(meta.title.as_deref(), Some("Coding with ChatGPT"));
        assert_eq!(meta.sidebar_position, Some(2.0));
        assert!(meta.draft);
        assert_eq!(body, "# Body");
    }

    #[test]
    fn test_toml_frontmatter() {
        let content = "+++\ntitle = \"Sync\"\nsidebar_position = 3\nslug = \"/sync\"\n+++\nText";
        let (meta, body) = split_frontmatter(content).unwrap();
        assert_eq!(meta.title.as_deref(), Some("Sync"));
        assert_eq!(meta.sidebar_position, Some(3.0));
        assert_eq!(meta.slug.as_deref(), Some("/sync"));
        assert_eq!(body, "Text");
    }

    #[test]
    fn test_no_frontmatter() {
        let content = "# Title\n\n---\n\nAfter a rule";
        let (meta, body) = split_frontmatter(content).unwrap();
        assert_eq!(meta, DocMeta::default());
        assert_eq!(body, content);
    }

    #[test]
    fn test_invalid_toml_frontmatter() {
        assert!(split_frontmatter("+++\ntitle = \n+++\n").is_err());
    }

    #[test]
    fn test_unknown_keys_ignored() {
        let (meta, _) = split_frontmatter("---\nauthor: someone\ntags: a, b\n---\n").unwrap();
        assert_eq!(meta, DocMeta::default());
    }
}
