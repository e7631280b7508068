//! Prose and code body sections.

use super::SiteContext;
use crate::content::render_markdown;
use crate::utils::html::escape;

pub fn render_prose(
    ctx: &SiteContext<'_>,
    heading: Option<&str>,
    body: &str,
    links: &mut Vec<String>,
) -> String {
    let rendered = render_markdown(body, |link| ctx.rewrite_link(link));
    links.extend(rendered.links);

    let mut out = String::with_capacity(rendered.html.len() + 128);
    out.push_str(r#"<section class="prose"><div class="container">"#);
    if let Some(heading) = heading {
        out.push_str("<h2>");
        out.push_str(&escape(heading));
        out.push_str("</h2>");
    }
    out.push_str(&rendered.html);
    out.push_str("</div></section>");
    out
}

pub fn render_code(language: &str, code: &str) -> String {
    format!(
        r#"<section class="code"><div class="container"><pre><code class="language-{}">{}</code></pre></div></section>"#,
        escape(language),
        escape(code)
    )
}
