//! Page rendering: fills an HTML template with a compiled document.

use thiserror::Error;

use crate::render::{RenderError, markdown_to_html};

pub const TITLE_PLACEHOLDER: &str = "{{ Title }}";
pub const CONTENT_PLACEHOLDER: &str = "{{ Content }}";

/// Marker a page title line has to start with.
const TITLE_MARKER: &str = "# ";

/// Attribute prefixes rewritten to the site's base path.
const ROOT_RELATIVE_PREFIXES: [&str; 2] = ["href=\"/", "src=\"/"];

#[derive(Debug, Error)]
pub enum PageError {
    #[error("markdown must start with an h1 header")]
    MissingTitle,

    #[error(transparent)]
    Render(#[from] RenderError),
}

/// Returns the text of the level-one heading on the document's first line.
///
/// # Errors
/// [`PageError::MissingTitle`] if the first non-blank line is not `# ...`.
pub fn extract_title(markdown: &str) -> Result<&str, PageError> {
    markdown
        .trim()
        .lines()
        .next()
        .and_then(|line| line.strip_prefix(TITLE_MARKER))
        .map(str::trim)
        .ok_or(PageError::MissingTitle)
}

/// Points root-relative `href` and `src` attributes at `base_path`.
///
/// A base path without a trailing `/` gets one, so `"/blog"` and `"/blog/"`
/// behave the same.
pub fn rewrite_base_path(html: &str, base_path: &str) -> String {
    let base = if base_path.ends_with('/') {
        base_path.to_string()
    } else {
        format!("{base_path}/")
    };

    ROOT_RELATIVE_PREFIXES
        .into_iter()
        .fold(html.to_string(), |html, prefix| {
            let attribute = &prefix[..prefix.len() - 1];
            html.replace(prefix, &format!("{attribute}{base}"))
        })
}

/// Renders a full page from markdown and a template.
///
/// Placeholders are replaced verbatim, then root-relative links are rewritten
/// against `base_path`.
pub fn render_page(markdown: &str, template: &str, base_path: &str) -> Result<String, PageError> {
    let title = extract_title(markdown)?;
    let content = markdown_to_html(markdown)?;
    let page = template
        .replace(TITLE_PLACEHOLDER, title)
        .replace(CONTENT_PLACEHOLDER, &content);
    Ok(rewrite_base_path(&page, base_path))
}
