//! Configuration utility functions.

use std::path::{Path, PathBuf};

/// Path component of a URL, without surrounding slashes.
///
/// Port, credentials, query and fragment are ignored. Returns `None` if the
/// URL does not parse.
///
/// ```ignore
/// extract_url_path("https://fireproof-storage.github.io/docs/") -> Some("docs")
/// extract_url_path("https://use-fireproof.com")                 -> Some("")
/// extract_url_path("use-fireproof.com")                         -> None
/// ```
pub fn extract_url_path(url_str: &str) -> Option<String> {
    let parsed = url::Url::parse(url_str).ok()?;
    Some(parsed.path().trim_matches('/').to_string())
}

/// Find the config file by walking up from the current directory.
///
/// ```text
/// /home/user/site/docs/api/   <- cwd
/// /home/user/site/hearth.toml <- found
/// ```
pub fn find_config_file(config_name: &Path) -> Option<PathBuf> {
    if config_name.is_absolute() {
        return config_name.exists().then(|| config_name.to_path_buf());
    }

    let cwd = std::env::current_dir().ok()?;
    find_upward(&cwd, config_name)
}

fn find_upward(start: &Path, config_name: &Path) -> Option<PathBuf> {
    start
        .ancestors()
        .map(|dir| dir.join(config_name))
        .find(|candidate| candidate.is_file())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_extract_url_path() {
        assert_eq!(
            extract_url_path("https://fireproof-storage.github.io/docs/"),
            Some("docs".to_string())
        );
        assert_eq!(
            extract_url_path("https://example.com:8080/a/b?q=1#top"),
            Some("a/b".to_string())
        );
        assert_eq!(
            extract_url_path("https://use-fireproof.com"),
            Some(String::new())
        );
        assert_eq!(extract_url_path("use-fireproof.com"), None);
    }

    #[test]
    fn test_find_upward() {
        let dir = TempDir::new().unwrap();
        let nested = dir.path().join("docs/database-api");
        fs::create_dir_all(&nested).unwrap();
        fs::write(dir.path().join("hearth.toml"), "").unwrap();

        let found = find_upward(&nested, Path::new("hearth.toml")).unwrap();
        assert_eq!(found, dir.path().join("hearth.toml"));
        assert!(find_upward(&nested, Path::new("missing.toml")).is_none());
    }
}
