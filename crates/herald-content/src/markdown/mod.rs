//! Markdown utilities.
//!
//! - [`frontmatter`]: YAML frontmatter extraction for markdown-authored updates
//! - [`render`]: markdown to HTML with preserved line breaks and new-context links

pub mod frontmatter;
pub mod render;

pub use frontmatter::{FrontmatterResult, extract_frontmatter};
pub use render::render_markdown;
