//! Markdown rendering utilities.
//!
//! Team biographies are authored as markdown in the CMS.

use comrak::{Options, markdown_to_html as render};

/// Convert markdown content to sanitized HTML.
///
/// Supports strikethrough, tables and autolinks on top of CommonMark.
/// The output is sanitized using `ammonia` to prevent XSS attacks
/// by removing potentially dangerous HTML elements and attributes.
pub fn markdown_to_html(markdown: &str) -> String {
    let mut options = Options::default();
    options.extension.strikethrough = true;
    options.extension.table = true;
    options.extension.autolink = true;

    let html_output = render(markdown, &options);

    // Sanitize HTML to prevent XSS attacks
    ammonia::clean(&html_output)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_renders_paragraphs_and_emphasis() {
        let html = markdown_to_html("Admitted to the bar in **2009**.");
        assert!(html.contains("<strong>2009</strong>"));
        assert!(html.starts_with("<p>"));
    }

    #[test]
    fn test_strips_scripts() {
        let html = markdown_to_html("Hello <script>alert(1)</script>");
        assert!(!html.contains("<script>"));
    }
}
