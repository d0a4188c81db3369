//! Markdown descriptions to HTML.

use pulldown_cmark::{Options, Parser, html};

/// Parser options: GitHub Flavored Markdown, matching what API descriptions use.
fn parser_options() -> Options {
    Options::ENABLE_TABLES
        | Options::ENABLE_STRIKETHROUGH
        | Options::ENABLE_TASKLISTS
        | Options::ENABLE_GFM
}

/// Render a markdown description to HTML.
///
/// A blank source renders nothing, so the caller never emits an empty
/// wrapper. When `wrap` is given it receives the rendered block and returns
/// the final markup.
///
/// # Example
///
/// ```
/// use apiref_renderer::render_markdown;
///
/// assert_eq!(render_markdown("**bold**", None), "<p><strong>bold</strong></p>\n");
/// assert_eq!(render_markdown("   ", None), "");
/// ```
#[must_use]
pub fn render_markdown(source: &str, wrap: Option<&dyn Fn(&str) -> String>) -> String {
    if source.trim().is_empty() {
        return String::new();
    }

    let mut rendered = String::with_capacity(source.len() * 3 / 2);
    html::push_html(&mut rendered, Parser::new_ext(source, parser_options()));

    match wrap {
        Some(wrap) => wrap(&rendered),
        None => rendered,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_render_paragraph() {
        assert_eq!(
            render_markdown("Returns *all* pets.", None),
            "<p>Returns <em>all</em> pets.</p>\n"
        );
    }

    #[test]
    fn test_render_empty_source() {
        assert_eq!(render_markdown("", None), "");
        assert_eq!(render_markdown("\n\t ", Some(&|s: &str| format!("<div>{s}</div>"))), "");
    }

    #[test]
    fn test_render_with_wrap() {
        let wrap = |block: &str| format!("<div class=\"panel\">{block}</div>");
        assert_eq!(
            render_markdown("Hello", Some(&wrap)),
            "<div class=\"panel\"><p>Hello</p>\n</div>"
        );
    }

    #[test]
    fn test_render_gfm_table() {
        let html = render_markdown("| a | b |\n|---|---|\n| 1 | 2 |", None);
        assert!(html.contains("<table>"));
        assert!(html.contains("<td>1</td>"));
    }

    #[test]
    fn test_render_strikethrough() {
        let html = render_markdown("~~old~~", None);
        assert!(html.contains("<del>old</del>"));
    }
}
