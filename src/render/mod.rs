//! HTML rendering.
//!
//! Every renderer is a pure function of the [`SiteContext`] and one page
//! input, returning a complete document. Nothing here touches the disk.

pub mod context;
mod doc;
mod features;
mod footer;
mod hero;
mod layout;
mod navbar;
mod page;
mod sections;

pub use context::{CUSTOM_CSS, SiteContext, THEME_CSS};
pub use doc::{render_category_index, render_doc, render_not_found};
pub use page::{RenderedPage, render_page};
