//! Path and URL utilities.
//!
//! Pure functions for path manipulation. No side effects.
//!
//! - [`fs`]: Filesystem path normalization (`normalize_path`, `to_slash`)
//! - [`route`]: Route utilities (`is_external_link`, `normalize_route`, `route_output_path`)

pub mod fs;
pub mod route;

pub use fs::{normalize_path, to_slash};
