//! Standalone HTML page template.
//!
//! Lays out the navigation sidebar next to the content column.

use std::fmt::Write;

use crate::util::escape_html;

/// All data needed to render a page.
pub struct PageData {
    pub title: String,
    /// Stylesheet link, if any.
    pub css_path: Option<String>,
    /// Serialized navigation list (see [`write_navigation`](crate::write_navigation)).
    pub navigation_html: String,
    /// Serialized content tree (see [`write_content`](crate::write_content)).
    pub content_html: String,
}

/// Render a complete HTML document.
#[must_use]
pub fn render_page(page: &PageData) -> String {
    let mut html = String::with_capacity(
        1024 + page.navigation_html.len() + page.content_html.len(),
    );

    html.push_str("<!DOCTYPE html>\n<html lang=\"en\">\n<head>\n");
    html.push_str("<meta charset=\"utf-8\">\n");
    html.push_str(
        "<meta name=\"viewport\" content=\"width=device-width, initial-scale=1\">\n",
    );
    let _ = writeln!(html, "<title>{}</title>", escape_html(&page.title));
    if let Some(css_path) = &page.css_path {
        let _ = writeln!(
            html,
            "<link rel=\"stylesheet\" href=\"{}\">",
            escape_html(css_path)
        );
    }
    html.push_str("</head>\n<body>\n");

    html.push_str("<div class=\"api-layout\">\n");

    html.push_str("<aside class=\"side-menu\">\n");
    let _ = writeln!(
        html,
        "<div class=\"side-menu-title\">{}</div>",
        escape_html(&page.title)
    );
    html.push_str(&page.navigation_html);
    html.push_str("</aside>\n");

    html.push_str("<main class=\"api-content\">\n");
    html.push_str(&page.content_html);
    html.push_str("</main>\n");

    html.push_str("</div>\n</body>\n</html>\n");
    html
}

#[cfg(test)]
mod tests {
    use super::*;

    fn page() -> PageData {
        PageData {
            title: "Pet <Store>".to_owned(),
            css_path: None,
            navigation_html: "<ul class=\"menu-items\" role=\"navigation\">\n</ul>\n".to_owned(),
            content_html: "<section id=\"a\" class=\"content-section\"></section>\n".to_owned(),
        }
    }

    #[test]
    fn test_render_page_structure() {
        let html = render_page(&page());

        assert!(html.starts_with("<!DOCTYPE html>"));
        assert!(html.contains("<title>Pet &lt;Store&gt;</title>"));
        assert!(!html.contains("<link rel=\"stylesheet\""));

        let nav = html.find("role=\"navigation\"").unwrap();
        let content = html.find("<section id=\"a\"").unwrap();
        assert!(nav < content);
        assert!(html.trim_end().ends_with("</html>"));
    }

    #[test]
    fn test_render_page_with_stylesheet() {
        let data = PageData {
            css_path: Some("assets/api.css".to_owned()),
            ..page()
        };

        let html = render_page(&data);

        assert!(html.contains("<link rel=\"stylesheet\" href=\"assets/api.css\">"));
    }
}
