//! Site validation command: render and check links, write nothing.

use anyhow::Result;

use super::build::assemble_site;
use crate::config::HearthConfig;
use crate::log;
use crate::utils::plural_count;

/// Check every link of the site and print the report.
///
/// Fails under the same conditions as `build`; `--warn-only` has already
/// lowered both policies to `warn` at this point.
pub fn validate_site(config: &HearthConfig) -> Result<()> {
    let build = assemble_site(config)?;

    log!(
        "validate"; "checked {} and {}",
        plural_count(build.page_count, "page"),
        plural_count(build.doc_count, "document")
    );
    build.report.finish()?;
    log!("validate"; "{}", build.report);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_validate_writes_nothing() {
        let dir = TempDir::new().unwrap();
        fs::create_dir_all(dir.path().join("docs")).unwrap();
        fs::write(dir.path().join("docs/intro.md"), "# Intro\n").unwrap();
        let path = dir.path().join("hearth.toml");
        fs::write(
            &path,
            "[site]\ntitle = \"Fireproof\"\n\n[[theme.navbar.items]]\nto = \"/docs/intro\"\nlabel = \"Docs\"\n",
        )
        .unwrap();
        let config = HearthConfig::from_file(&path).unwrap();

        validate_site(&config).unwrap();
        assert!(!config.build.output.exists());
    }

    #[test]
    fn test_validate_fails_on_broken_navbar_link() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("hearth.toml");
        fs::write(
            &path,
            "[site]\ntitle = \"Fireproof\"\n\n[[theme.navbar.items]]\nto = \"/docs/intro\"\nlabel = \"Docs\"\n",
        )
        .unwrap();
        let config = HearthConfig::from_file(&path).unwrap();
        assert!(validate_site(&config).is_err());
    }
}
