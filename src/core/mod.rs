//! Core types - pure abstractions shared across the codebase.

mod link;
mod state;

pub use link::LinkKind;
pub use state::{is_shutdown, register_server, setup_shutdown_handler};
