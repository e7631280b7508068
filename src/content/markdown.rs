//! Markdown to HTML rendering with pulldown-cmark.
//!
//! Besides plain rendering, a pass over the event stream:
//! - rewrites links through a caller-supplied resolver (`.md` file links
//!   become document routes),
//! - collects every link and image target for the link checker,
//! - gives headings stable `id` anchors and records the first `# Title`.

use pulldown_cmark::{CowStr, Event, HeadingLevel, LinkType, Options, Parser, Tag, TagEnd, html};
use rustc_hash::FxHashMap;

use crate::utils::slug::slugify;

/// Options for markdown conversion
#[derive(Debug, Clone, Default)]
pub struct MarkdownOptions {
    pub tables: bool,
    pub footnotes: bool,
    pub strikethrough: bool,
    pub task_lists: bool,
    /// `# Heading {#custom-id}`
    pub heading_attributes: bool,
}

impl MarkdownOptions {
    /// Create options with all extensions enabled
    pub fn all() -> Self {
        Self {
            tables: true,
            footnotes: true,
            strikethrough: true,
            task_lists: true,
            heading_attributes: true,
        }
    }

    fn to_pulldown_options(&self) -> Options {
        let mut opts = Options::empty();
        if self.tables {
            opts.insert(Options::ENABLE_TABLES);
        }
        if self.footnotes {
            opts.insert(Options::ENABLE_FOOTNOTES);
        }
        if self.strikethrough {
            opts.insert(Options::ENABLE_STRIKETHROUGH);
        }
        if self.task_lists {
            opts.insert(Options::ENABLE_TASKLISTS);
        }
        if self.heading_attributes {
            opts.insert(Options::ENABLE_HEADING_ATTRIBUTES);
        }
        opts
    }
}

/// Rendered Markdown fragment.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Rendered {
    pub html: String,
    /// Text of the first level-1 heading.
    pub title: Option<String>,
    /// Link and image targets in document order, after rewriting.
    pub links: Vec<String>,
}

/// Render a Markdown block.
///
/// `rewrite` may replace a link target; returning `None` keeps it as written.
pub fn render_markdown(source: &str, rewrite: impl Fn(&str) -> Option<String>) -> Rendered {
    let parser = Parser::new_ext(source, MarkdownOptions::all().to_pulldown_options());
    let mut links = Vec::new();

    let mut events: Vec<Event<'_>> = parser
        .map(|event| match event {
            Event::Start(Tag::Link {
                link_type,
                dest_url,
                title,
                id,
            }) => {
                let dest_url = rewrite_dest(dest_url, &rewrite);
                if link_type != LinkType::Email {
                    links.push(dest_url.to_string());
                }
                Event::Start(Tag::Link {
                    link_type,
                    dest_url,
                    title,
                    id,
                })
            }
            Event::Start(Tag::Image {
                link_type,
                dest_url,
                title,
                id,
            }) => {
                let dest_url = rewrite_dest(dest_url, &rewrite);
                links.push(dest_url.to_string());
                Event::Start(Tag::Image {
                    link_type,
                    dest_url,
                    title,
                    id,
                })
            }
            other => other,
        })
        .collect();

    let title = assign_heading_ids(&mut events);

    let mut out = String::with_capacity(source.len() * 3 / 2);
    html::push_html(&mut out, events.into_iter());

    Rendered {
        html: out,
        title,
        links,
    }
}

/// Render inline Markdown (a single paragraph) without the wrapping `<p>`.
pub fn render_inline(source: &str, rewrite: impl Fn(&str) -> Option<String>) -> Rendered {
    let mut rendered = render_markdown(source, rewrite);
    let trimmed = rendered.html.trim_end();
    if let Some(inner) = trimmed
        .strip_prefix("<p>")
        .and_then(|s| s.strip_suffix("</p>"))
        && !inner.contains("<p>")
    {
        rendered.html = inner.to_string();
    }
    rendered
}

fn rewrite_dest<'a>(dest: CowStr<'a>, rewrite: &impl Fn(&str) -> Option<String>) -> CowStr<'a> {
    match rewrite(&dest) {
        Some(new) => CowStr::from(new),
        None => dest,
    }
}

/// Give every heading an `id` (explicit ids are kept) and return the text of
/// the first `h1`.
fn assign_heading_ids(events: &mut [Event<'_>]) -> Option<String> {
    let mut used: FxHashMap<String, usize> = FxHashMap::default();
    let mut title = None;
    let mut i = 0;

    while i < events.len() {
        let Event::Start(Tag::Heading { level, .. }) = &events[i] else {
            i += 1;
            continue;
        };
        let level = *level;

        let mut text = String::new();
        let mut end = i + 1;
        while end < events.len() && !matches!(events[end], Event::End(TagEnd::Heading(_))) {
            if let Event::Text(t) | Event::Code(t) = &events[end] {
                text.push_str(t);
            }
            end += 1;
        }

        if level == HeadingLevel::H1 && title.is_none() {
            title = Some(text.trim().to_string());
        }

        if let Event::Start(Tag::Heading { id, .. }) = &mut events[i] {
            let base = match id {
                Some(explicit) => explicit.to_string(),
                None => slugify(&text),
            };
            let count = used.entry(base.clone()).or_insert(0);
            let unique = if *count == 0 {
                base
            } else {
                format!("{base}-{count}")
            };
            *count += 1;
            *id = Some(CowStr::from(unique));
        }

        i = end + 1;
    }

    title
}

#[cfg(test)]
mod tests {
    use super::*;

    fn plain(source: &str) -> Rendered {
        render_markdown(source, |_| None)
    }

    #[test]
    fn test_title_and_heading_ids() {
        let rendered = plain("# React Hooks\n\n## Install\n\n## Install\n");
        assert_eq!(rendered.title.as_deref(), Some("React Hooks"));
        assert!(rendered.html.contains(r#"<h1 id="react-hooks">React Hooks</h1>"#));
        assert!(rendered.html.contains(r#"<h2 id="install">"#));
        assert!(rendered.html.contains(r#"<h2 id="install-1">"#));
    }

    #[test]
    fn test_explicit_heading_id() {
        let rendered = plain("## Setup {#getting-started}\n");
        assert!(rendered.html.contains(r#"id="getting-started""#));
    }

    #[test]
    fn test_code_block_language_class() {
        let rendered = plain("```jsx\nnpm install use-fireproof\n```\n");
        assert!(rendered.html.contains(r#"<code class="language-jsx">"#));
    }

    #[test]
    fn test_links_collected_and_rewritten() {
        let rendered = render_markdown(
            "See [basics](./basics.md#put), [npm](https://www.npmjs.com/package/use-fireproof) and ![logo](/img/logo.svg).",
            |link| {
                link.starts_with("./basics.md")
                    .then(|| "/docs/database-api/basics#put".to_string())
            },
        );
        assert_eq!(
            rendered.links,
            [
                "/docs/database-api/basics#put",
                "https://www.npmjs.com/package/use-fireproof",
                "/img/logo.svg",
            ]
        );
        assert!(rendered.html.contains(r#"href="/docs/database-api/basics#put""#));
    }

    #[test]
    fn test_inline_strips_paragraph() {
        let rendered = render_inline("Works with [React](/docs/react-tutorial).", |_| None);
        assert_eq!(
            rendered.html,
            r#"Works with <a href="/docs/react-tutorial">React</a>."#
        );
    }

    #[test]
    fn test_malformed_markdown_renders() {
        let rendered = plain("[broken link(\n\n**unclosed");
        assert!(rendered.html.contains("broken link"));
        assert!(rendered.links.is_empty());
    }
}
