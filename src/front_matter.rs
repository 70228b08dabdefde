//! Renders the YAML front matter block written at the top of a new post:
//!
//! ```markdown
//! ---
//! title: My first post
//! slug: my-first-post
//! tags:
//!   - rust
//! date: '2024-03-05T10:42:32.123Z'
//!
//! ---
//! ```

use std::fmt::Write;

use crate::error::Result;

const DELIMITER: &str = "---";

/// Post metadata with every field resolved.
pub struct FrontMatter {
    pub title: String,
    pub slug: String,
    pub tags: Vec<String>,
    pub date: String,
}

/// The rendered block plus the fields the writer needs for path computation.
pub struct RenderedArticle {
    pub content: String,
    pub date: String,
    pub slug: String,
    pub tags: Vec<String>,
}

// Serializing one scalar at a time keeps the YAML quoting rules (bare
// `hello`, quoted `'123'`) while the block layout stays fixed.
fn yaml_scalar(value: &str) -> Result<String> {
    let rendered = serde_yaml::to_string(value)?;
    Ok(rendered.trim_end_matches('\n').to_string())
}

pub fn render(front_matter: FrontMatter) -> Result<RenderedArticle> {
    let FrontMatter { title, slug, tags, date } = front_matter;

    let mut buf = String::new();
    let _ = writeln!(&mut buf, "{}", DELIMITER);
    let _ = writeln!(&mut buf, "title: {}", yaml_scalar(&title)?);
    let _ = writeln!(&mut buf, "slug: {}", yaml_scalar(&slug)?);
    if tags.is_empty() {
        let _ = writeln!(&mut buf, "tags: []");
    } else {
        let _ = writeln!(&mut buf, "tags:");
        for tag in &tags {
            let _ = writeln!(&mut buf, "  - {}", yaml_scalar(tag)?);
        }
    }
    let _ = writeln!(&mut buf, "date: {}", yaml_scalar(&date)?);
    // The blank line is the serialized block's trailing newline
    let _ = writeln!(&mut buf);
    buf.push_str(DELIMITER);

    Ok(RenderedArticle {
        content: buf,
        date,
        slug,
        tags,
    })
}
