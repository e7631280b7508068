//! Site configuration management for `hearth.toml`.
//!
//! # Module Structure
//!
//! ```text
//! config/
//! ├── section/       # Configuration section definitions
//! │   ├── build      # [build]
//! │   ├── docs       # [docs]
//! │   ├── pages      # [[pages]]
//! │   ├── serve      # [serve]
//! │   ├── site       # [site], [site.i18n]
//! │   └── theme/     # [theme.navbar], [theme.footer], [theme.prism], [theme.search]
//! ├── types/         # Diagnostics and field paths
//! └── mod.rs         # HearthConfig (this file)
//! ```
//!
//! The configuration is loaded and validated once, then shared read-only by
//! every renderer for the whole build.

pub mod section;
pub mod types;
mod util;

use util::{extract_url_path, find_config_file};

pub use section::{
    FeatureEntry, HeroButton, LinkPolicy, NavItemType, NavPosition, PageConfig, Section,
    SiteConfig,
};
pub use types::{ConfigDiagnostics, ConfigError, FieldPath};

use section::{BuildConfig, DocsConfig, ServeConfig, ThemeConfig};

use crate::{
    cli::{BuildArgs, Cli, Commands},
    log,
};
use anyhow::{Context, Result, bail};
use serde::{Deserialize, Serialize};
use std::{
    fs,
    io::IsTerminal,
    net::IpAddr,
    path::{Path, PathBuf},
};

// ============================================================================
// root configuration
// ============================================================================

/// Root configuration structure representing hearth.toml
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct HearthConfig {
    /// Absolute path to the config file (internal use only)
    #[serde(skip)]
    pub config_path: PathBuf,

    /// Project root directory - parent of config file (internal use only)
    #[serde(skip)]
    pub root: PathBuf,

    #[serde(default)]
    pub site: SiteConfig,

    #[serde(default)]
    pub docs: DocsConfig,

    #[serde(default)]
    pub theme: ThemeConfig,

    #[serde(default)]
    pub build: BuildConfig,

    #[serde(default)]
    pub serve: ServeConfig,

    /// Standalone pages, in authoring order.
    #[serde(default)]
    pub pages: Vec<PageConfig>,
}

impl HearthConfig {
    /// Load configuration from CLI arguments.
    ///
    /// Searches upward from cwd to find the config file. The project root is
    /// the config file's parent directory.
    pub fn load(cli: &Cli) -> Result<Self> {
        let config_path = match find_config_file(&cli.config) {
            Some(path) => path,
            None => bail!(ConfigError::Validation(format!(
                "config file '{}' not found, run 'hearth init' to create a new site",
                cli.config.display()
            ))),
        };

        let mut config = Self::from_path(&config_path)?;
        config.validate_paths()?;

        config.config_path = config_path;
        config.finalize(cli);
        config.validate()?;

        Ok(config)
    }

    /// Finalize configuration after loading.
    fn finalize(&mut self, cli: &Cli) {
        let root = self
            .config_path
            .parent()
            .map(Path::to_path_buf)
            .unwrap_or_default();

        Self::update_option(&mut self.build.output, cli.output.as_ref());
        self.apply_command_options(cli);
        self.normalize_paths(&root);

        // --site-url "https://example.github.io/project" implies base_url "/project/"
        self.sync_base_url_from_url();

        // The preview server serves the output directory at its root
        if matches!(cli.command, Commands::Serve { .. }) {
            self.site.base_url = "/".into();
        }
    }

    /// Derive `base_url` from the path component of `site.url`, if any.
    fn sync_base_url_from_url(&mut self) {
        if let Some(ref url) = self.site.url
            && let Some(path) = extract_url_path(url)
            && !path.is_empty()
        {
            self.site.base_url = format!("/{path}/");
        }
    }

    /// Load configuration from file path with unknown field detection.
    fn from_path(path: &Path) -> Result<Self> {
        let content =
            fs::read_to_string(path).map_err(|err| ConfigError::Io(path.to_path_buf(), err))?;

        let (config, ignored) = Self::parse_with_ignored(&content)?;

        if !ignored.is_empty() {
            Self::print_unknown_fields_warning(&ignored, path);
            if std::io::stdin().is_terminal() && !Self::prompt_continue()? {
                bail!("Aborted due to unknown config fields");
            }
        }

        Ok(config)
    }

    /// Parse TOML content, collecting any unknown fields.
    fn parse_with_ignored(content: &str) -> Result<(Self, Vec<String>)> {
        let mut ignored = Vec::new();
        let deserializer = toml::Deserializer::new(content);
        let config = serde_ignored::deserialize(deserializer, |path: serde_ignored::Path| {
            ignored.push(path.to_string());
        })
        .map_err(ConfigError::Toml)?;
        Ok((config, ignored))
    }

    /// Print warning about unknown fields.
    fn print_unknown_fields_warning(fields: &[String], path: &Path) {
        let display_path = path
            .file_name()
            .map(|n| n.to_string_lossy())
            .unwrap_or_else(|| path.to_string_lossy());
        eprintln!();
        log!("warning"; "unknown fields in {}:", display_path);
        log!("warning"; "ignoring:");
        for field in fields {
            eprintln!("- {}", field);
        }
        eprintln!();
    }

    /// Prompt user to continue. Returns true only if user explicitly confirms.
    fn prompt_continue() -> Result<bool> {
        use std::io::{self, Write};

        eprint!("Continue? [y/N] ");
        io::stderr().flush()?;

        let mut input = String::new();
        io::stdin().read_line(&mut input)?;

        let input = input.trim().to_lowercase();
        Ok(input == "y" || input == "yes")
    }

    /// Get path relative to the site root
    pub fn root_relative(&self, path: impl AsRef<Path>) -> PathBuf {
        path.as_ref()
            .strip_prefix(&self.root)
            .map(Path::to_path_buf)
            .unwrap_or_else(|_| path.as_ref().to_path_buf())
    }

    // ========================================================================
    // cli configuration updates
    // ========================================================================

    /// Apply command-specific configuration options.
    fn apply_command_options(&mut self, cli: &Cli) {
        match &cli.command {
            Commands::Build { build_args } => {
                self.apply_build_args(build_args);
            }
            Commands::Serve {
                build_args,
                interface,
                port,
            } => {
                self.apply_build_args(build_args);
                self.apply_serve_options(*interface, *port);
            }
            Commands::Validate { args } => {
                crate::logger::set_verbose(args.verbose);
                if args.warn_only {
                    self.site.on_broken_links = LinkPolicy::Warn;
                    self.site.on_broken_markdown_links = LinkPolicy::Warn;
                }
            }
            Commands::Init { .. } => {}
        }
    }

    /// Apply build arguments from CLI.
    fn apply_build_args(&mut self, args: &BuildArgs) {
        crate::logger::set_verbose(args.verbose);

        Self::update_option(&mut self.build.minify, args.minify.as_ref());
        Self::update_option(&mut self.build.sitemap, args.sitemap.as_ref());
        self.build.clean = args.clean;
        self.build.skip_drafts = args.skip_drafts;

        if let Some(ref url) = args.site_url {
            self.site.url = Some(url.clone());
        }
    }

    /// Apply serve-specific options.
    fn apply_serve_options(&mut self, interface: Option<IpAddr>, port: Option<u16>) {
        Self::update_option(&mut self.serve.interface, interface.as_ref());
        Self::update_option(&mut self.serve.port, port.as_ref());

        self.site.url = Some(format!(
            "http://{}:{}",
            self.serve.interface, self.serve.port
        ));
    }

    /// Update config option if CLI value is provided.
    fn update_option<T: Clone>(config_option: &mut T, cli_option: Option<&T>) {
        if let Some(option) = cli_option {
            *config_option = option.clone();
        }
    }

    // ========================================================================
    // path normalization
    // ========================================================================

    /// Normalize all paths relative to root directory.
    fn normalize_paths(&mut self, root: &Path) {
        use crate::utils::path::normalize_path;

        let root = normalize_path(root);
        self.config_path = normalize_path(&self.config_path);

        self.docs.path = normalize_path(&root.join(&self.docs.path));
        self.docs.sidebar_path = normalize_path(&root.join(&self.docs.sidebar_path));
        self.build.output = normalize_path(&root.join(&self.build.output));
        self.build.static_dir = normalize_path(&root.join(&self.build.static_dir));
        if let Some(css) = self.theme.custom_css.take() {
            self.theme.custom_css = Some(normalize_path(&root.join(css)));
        }

        self.root = root;
    }

    // ========================================================================
    // validation
    // ========================================================================

    /// Pre-validate paths before normalization makes them absolute.
    fn validate_paths(&self) -> Result<()> {
        let mut diag = ConfigDiagnostics::new();
        self.build.validate_paths(&mut diag);
        self.docs.validate_paths(&mut diag);
        diag.into_result()
            .map_err(|e| ConfigError::Diagnostics(e).into())
    }

    /// Validate the whole configuration.
    ///
    /// Collects all validation errors and returns them at once.
    pub fn validate(&self) -> Result<()> {
        let mut diag = ConfigDiagnostics::new();

        self.site.validate(&mut diag);
        self.docs.validate(&mut diag);
        self.theme.validate(&mut diag);
        PageConfig::validate_all(&self.pages, &mut diag);

        diag.print_warnings();

        diag.into_result()
            .map_err(|e| ConfigError::Diagnostics(e).into())
    }

    /// Parse and validate a config file without CLI overrides.
    ///
    /// Used by `init` to check the scaffolded config.
    pub fn from_file(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)
            .with_context(|| format!("failed to read {}", path.display()))?;
        let (mut config, _) = Self::parse_with_ignored(&content)?;
        config.config_path = path.to_path_buf();
        let root = path.parent().map(Path::to_path_buf).unwrap_or_default();
        config.normalize_paths(&root);
        config.validate()?;
        Ok(config)
    }
}

// ============================================================================
// Test Helpers (available to all modules via `use crate::config::test_*`)
// ============================================================================

/// Parse config with the minimal required `[site]` fields.
/// Panics if there are unknown fields (to catch config typos in tests).
#[cfg(test)]
pub fn test_parse_config(extra: &str) -> HearthConfig {
    let config = format!("[site]\ntitle = \"Test\"\n{extra}");
    let (parsed, ignored) = HearthConfig::parse_with_ignored(&config).unwrap();
    assert!(
        ignored.is_empty(),
        "test config has unknown fields: {:?}",
        ignored
    );
    parsed
}

// ============================================================================
// tests
// ============================================================================
