//! Command-line interface module.

mod args;
pub mod build;
pub mod init;
pub mod serve;
pub mod validate;

pub use args::{BuildArgs, Cli, Commands};
