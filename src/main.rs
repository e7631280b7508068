//! hearth - static site generator for the Fireproof documentation site.

mod check;
mod cli;
mod config;
mod content;
mod core;
mod embed;
mod generator;
mod logger;
mod output;
mod render;
mod utils;

use anyhow::Result;
use clap::{ColorChoice, Parser};
use cli::{Cli, Commands};
use config::HearthConfig;

fn main() -> Result<()> {
    // Setup global Ctrl+C handler (before any blocking operations)
    core::setup_shutdown_handler()?;

    let cli = Cli::parse();

    // Set global color override based on CLI option
    match cli.color {
        ColorChoice::Always => owo_colors::set_override(true),
        ColorChoice::Never => owo_colors::set_override(false),
        ColorChoice::Auto => {} // owo-colors auto-detects TTY
    }

    if let Commands::Init { name, dry } = &cli.command {
        return cli::init::new_site(name.as_deref(), *dry);
    }

    let config = HearthConfig::load(&cli)?;

    match &cli.command {
        Commands::Init { .. } => Ok(()),
        Commands::Build { .. } => cli::build::build_site(&config).map(|_| ()),
        Commands::Serve { .. } => cli::serve::serve_site(&config),
        Commands::Validate { .. } => cli::validate::validate_site(&config),
    }
}
