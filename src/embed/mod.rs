//! Resources compiled into the binary.
//!
//! - `css` - base stylesheet written to `assets/theme.css`
//! - `init` - files scaffolded by `hearth init`

mod template;

pub use template::{Template, TemplateVars};

pub mod css {
    /// Base theme (grid, navbar, hero, menu, footer).
    pub const THEME_CSS: &str = include_str!("css/theme.css");
}

pub mod init {
    use super::{Template, TemplateVars};

    /// Variables for the scaffolded `hearth.toml`.
    pub struct ConfigVars<'a> {
        pub version: &'a str,
    }

    impl TemplateVars for ConfigVars<'_> {
        fn apply(&self, content: &str) -> String {
            content.replace("__HEARTH_VERSION__", self.version)
        }
    }

    /// The Fireproof site configuration.
    pub const CONFIG_TOML: Template<ConfigVars<'static>> =
        Template::new(include_str!("init/hearth.toml"));

    /// Every other scaffolded file, keyed by its path under the site root.
    pub const FILES: &[(&str, &[u8])] = &[
        ("sidebars.toml", include_bytes!("init/sidebars.toml")),
        ("docs/intro.md", include_bytes!("init/docs/intro.md")),
        ("docs/react-tutorial.md", include_bytes!("init/docs/react-tutorial.md")),
        ("docs/chatgpt-quick-start.md", include_bytes!("init/docs/chatgpt-quick-start.md")),
        ("docs/contributing.md", include_bytes!("init/docs/contributing.md")),
        ("docs/react-hooks/_category_.toml", include_bytes!("init/docs/react-hooks/_category_.toml")),
        ("docs/react-hooks/use-live-query.md", include_bytes!("init/docs/react-hooks/use-live-query.md")),
        ("docs/database-api/_category_.toml", include_bytes!("init/docs/database-api/_category_.toml")),
        ("docs/database-api/basics.md", include_bytes!("init/docs/database-api/basics.md")),
        ("docs/database-api/sync.md", include_bytes!("init/docs/database-api/sync.md")),
        ("docs/database-api/replication.md", include_bytes!("init/docs/database-api/replication.md")),
        ("docs/database-api/encryption.md", include_bytes!("init/docs/database-api/encryption.md")),
        ("src/css/custom.css", include_bytes!("init/src/css/custom.css")),
        ("static/img/logo.svg", include_bytes!("init/static/img/logo.svg")),
        ("static/img/favicon.ico", include_bytes!("init/static/img/favicon.ico")),
        ("static/img/card.png", include_bytes!("init/static/img/card.png")),
    ];
}
