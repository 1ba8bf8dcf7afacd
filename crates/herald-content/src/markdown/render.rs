//! Markdown to HTML for update descriptions.
//!
//! Descriptions are written as plain text with occasional markdown, so the
//! conversion keeps the author's line breaks (every newline inside a
//! paragraph becomes `<br />`), opens links in a new browsing context, and
//! escapes raw HTML instead of passing it through.
//!
//! ```rust
//! use herald_content::markdown::render_markdown;
//!
//! let html = render_markdown("See [docs](https://example.com).\nThanks");
//! assert!(html.contains(r#"<a target="_blank" rel="noopener noreferrer" href="https://example.com">docs</a>"#));
//! assert!(html.contains("<br />"));
//! ```

use pulldown_cmark::{Event, Options, Parser, html};

const LINK_OPEN: &str = r#"<a href=""#;
const LINK_OPEN_NEW_CONTEXT: &str = r#"<a target="_blank" rel="noopener noreferrer" href=""#;

fn options() -> Options {
    Options::ENABLE_STRIKETHROUGH | Options::ENABLE_TABLES
}

/// Render markdown to an HTML fragment.
pub fn render_markdown(content: &str) -> String {
    let parser = Parser::new_ext(content, options()).map(|event| match event {
        Event::SoftBreak => Event::HardBreak,
        Event::Html(raw) | Event::InlineHtml(raw) => Event::Text(raw),
        other => other,
    });

    let mut out = String::with_capacity(content.len() * 3 / 2);
    html::push_html(&mut out, parser);

    // Raw HTML was turned into text above, so every anchor tag left in the
    // output was emitted for a markdown link.
    out.replace(LINK_OPEN, LINK_OPEN_NEW_CONTEXT)
}
