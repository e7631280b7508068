//! Content loading errors.

use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ContentError {
    #[error("IO error when reading `{0}`")]
    Io(PathBuf, #[source] std::io::Error),

    #[error("invalid frontmatter in `{0}`")]
    Frontmatter(PathBuf, #[source] toml::de::Error),

    #[error("invalid sidebar file `{0}`")]
    SidebarFile(PathBuf, #[source] toml::de::Error),

    #[error("documents `{first}` and `{second}` share the id `{id}`")]
    DuplicateId {
        id: String,
        first: PathBuf,
        second: PathBuf,
    },

    #[error("documents `{first}` and `{second}` both resolve to route `{route}`")]
    DuplicateRoute {
        route: String,
        first: PathBuf,
        second: PathBuf,
    },

    #[error("sidebar `{sidebar}` references unknown document `{id}`")]
    UnknownDoc { sidebar: String, id: String },

    #[error("invalid category file `{0}`")]
    CategoryFile(PathBuf, #[source] toml::de::Error),

    #[error("category `{label}` index route `{route}` is already taken")]
    CategoryRoute { label: String, route: String },

    #[error("sidebar `{sidebar}` autogenerates from missing directory `{dir}`")]
    UnknownDir { sidebar: String, dir: String },

    #[error("navbar item `{label}` points at sidebar `{sidebar}`, which has no pages")]
    UnknownSidebar { label: String, sidebar: String },

    #[error("failed to serialize the search descriptor")]
    SearchDescriptor(#[source] serde_json::Error),
}
