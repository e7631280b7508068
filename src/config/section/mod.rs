//! Configuration section definitions.
//!
//! Each module corresponds to a section in `hearth.toml`:
//!
//! | Module   | TOML Section  | Purpose                                   |
//! |----------|---------------|-------------------------------------------|
//! | `build`  | `[build]`     | Output paths, sitemap, minify, drafts     |
//! | `docs`   | `[docs]`      | Docs directory, route base, sidebar file  |
//! | `pages`  | `[[pages]]`   | Standalone pages (hero + sections)        |
//! | `serve`  | `[serve]`     | Local preview server                      |
//! | `site`   | `[site]`      | Site metadata, locales, link policies     |
//! | `theme`  | `[theme]`     | Navbar, footer, code themes, search       |

mod build;
mod docs;
pub mod pages;
mod serve;
pub mod site;
pub mod theme;

pub use build::BuildConfig;
pub use docs::DocsConfig;
pub use pages::{FeatureEntry, HeroButton, PageConfig, Section};
pub use serve::ServeConfig;
pub use site::{LinkPolicy, SiteConfig};
pub use theme::{NavItemType, NavPosition, ThemeConfig};
