//! Command-line interface definitions.

use clap::{ColorChoice, Parser, Subcommand};
use std::path::PathBuf;

/// Hearth static site generator CLI
#[derive(Parser, Debug, Clone)]
#[command(version, about, long_about = None, arg_required_else_help = true)]
pub struct Cli {
    /// Control colored output (auto, always, never)
    #[arg(long, global = true, default_value = "auto")]
    pub color: ColorChoice,

    /// Output directory path (relative to project root)
    #[arg(short, long, global = true, value_hint = clap::ValueHint::DirPath)]
    pub output: Option<PathBuf>,

    /// Config file path (default: hearth.toml)
    #[arg(short = 'C', long, global = true, default_value = "hearth.toml", value_hint = clap::ValueHint::FilePath)]
    pub config: PathBuf,

    /// subcommands
    #[command(subcommand)]
    pub command: Commands,
}

/// Available subcommands
#[derive(Subcommand, Debug, Clone)]
pub enum Commands {
    /// Scaffold a new site with the Fireproof configuration
    #[command(visible_alias = "i")]
    Init {
        /// Site directory name/path (relative to current directory)
        #[arg(value_hint = clap::ValueHint::DirPath)]
        name: Option<PathBuf>,

        /// Print the configuration that would be written, create nothing
        #[arg(long)]
        dry: bool,
    },

    /// Build the site
    #[command(visible_alias = "b")]
    Build {
        #[command(flatten)]
        build_args: BuildArgs,
    },

    /// Build the site, then serve the output directory
    #[command(visible_alias = "s")]
    Serve {
        #[command(flatten)]
        build_args: BuildArgs,

        /// Network interface to bind (e.g., 127.0.0.1, 0.0.0.0)
        #[arg(short, long)]
        interface: Option<std::net::IpAddr>,

        /// Port number to listen on
        #[arg(short, long)]
        port: Option<u16>,
    },

    /// Check every link without writing output
    #[command(visible_alias = "v")]
    Validate {
        #[command(flatten)]
        args: ValidateArgs,
    },
}

/// Validate command arguments.
#[derive(clap::Args, Debug, Clone)]
pub struct ValidateArgs {
    /// Report broken links as warnings whatever the configured policy
    #[arg(long, short = 'w')]
    pub warn_only: bool,

    /// Enable verbose output for debugging
    #[arg(short = 'V', long)]
    pub verbose: bool,
}

/// Shared build arguments for Build and Serve commands
#[derive(clap::Args, Debug, Clone, Default)]
pub struct BuildArgs {
    /// Clean output directory completely before building
    #[arg(short, long)]
    pub clean: bool,

    /// Minify generated XML
    #[arg(short, long, action = clap::ArgAction::Set, num_args = 0..=1, default_missing_value = "true", require_equals = false)]
    pub minify: Option<bool>,

    /// Enable sitemap generation
    #[arg(short = 'S', long, action = clap::ArgAction::Set, num_args = 0..=1, default_missing_value = "true", require_equals = false)]
    pub sitemap: Option<bool>,

    /// Override site URL for deployment.
    ///
    /// Useful for CI/CD deployments where the production URL differs from the
    /// configured one. The path component becomes the base URL:
    ///   hearth build --site-url "https://fireproof-storage.github.io/docs"
    #[arg(short = 'U', long = "site-url", value_hint = clap::ValueHint::Url)]
    pub site_url: Option<String>,

    /// Enable verbose output for debugging
    #[arg(short = 'V', long)]
    pub verbose: bool,

    /// Skip draft documents during build (default: false, drafts are included)
    #[arg(short = 'E', long)]
    pub skip_drafts: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_build_flags() {
        let cli = Cli::parse_from([
            "hearth", "-C", "site.toml", "build", "--clean", "--sitemap=false", "-E",
        ]);
        assert_eq!(cli.config, PathBuf::from("site.toml"));
        let Commands::Build { build_args } = cli.command else {
            panic!("expected build");
        };
        assert!(build_args.clean);
        assert!(build_args.skip_drafts);
        assert_eq!(build_args.sitemap, Some(false));
        assert_eq!(build_args.minify, None);
    }

    #[test]
    fn test_parse_serve_and_global_output() {
        let cli = Cli::parse_from(["hearth", "serve", "--port", "3000", "-o", "public"]);
        assert_eq!(cli.output, Some(PathBuf::from("public")));
        assert!(matches!(cli.command, Commands::Serve { port: Some(3000), .. }));
    }

    #[test]
    fn test_parse_init() {
        let cli = Cli::parse_from(["hearth", "init", "my-site", "--dry"]);
        assert!(matches!(cli.command, Commands::Init { dry: true, .. }));
    }
}
