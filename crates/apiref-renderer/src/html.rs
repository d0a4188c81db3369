//! HTML serialization of rendered trees.
//!
//! Produces semantic HTML5. Section containers carry the item id so
//! `#id` fragments scroll straight to them; children of a node are written
//! after its container, at the same level.

use std::fmt::Write;

use apiref_model::{ExternalDocs, HttpVerb};

use crate::content::{ContentNode, HeadingLevel, NodeBody, SectionBody};
use crate::navigation::{NavEntry, NavList};
use crate::operation::{CompactHeader, OperationDetail, OperationView};
use crate::util::escape_html;

/// Wrap a rendered description block in a compact middle panel.
pub(crate) fn middle_panel_wrap(block: &str) -> String {
    format!(r#"<div class="middle-panel compact">{block}</div>"#)
}

/// Serialize a rendered content tree. An empty tree produces an empty string.
#[must_use]
pub fn write_content(nodes: &[ContentNode<'_>]) -> String {
    let mut out = String::with_capacity(nodes.len() * 512);
    for node in nodes {
        write_node(&mut out, node);
    }
    out
}

fn write_node(out: &mut String, node: &ContentNode<'_>) {
    if let Some(section) = &node.section {
        let class = if section.tight_spacing {
            "content-section tight-spacing"
        } else {
            "content-section"
        };
        let _ = write!(out, r#"<section id="{}" class="{class}">"#, escape_html(section.id));
        match &section.body {
            NodeBody::Section(body) => write_section_body(out, body),
            NodeBody::Operation(view) => write_operation(out, view),
        }
        out.push_str("</section>\n");
    }
    for child in &node.children {
        write_node(out, child);
    }
}

fn write_share_link(out: &mut String, id: &str) {
    let _ = write!(
        out,
        r##"<a class="share-link" href="#{}" aria-label="Link to this section"></a>"##,
        escape_html(id)
    );
}

fn write_section_body(out: &mut String, body: &SectionBody<'_>) {
    let tag = match body.heading {
        HeadingLevel::Primary => "h1",
        HeadingLevel::Secondary => "h2",
    };
    out.push_str(r#"<div class="row"><div class="middle-panel">"#);
    let _ = write!(out, "<{tag}>");
    write_share_link(out, body.id);
    out.push_str(&escape_html(body.name));
    let _ = write!(out, "</{tag}></div></div>");

    out.push_str(&body.description_html);

    if let Some(docs) = body.external_docs {
        out.push_str(r#"<div class="row"><div class="middle-panel">"#);
        write_external_docs(out, docs);
        out.push_str("</div></div>");
    }
}

fn write_external_docs(out: &mut String, docs: &ExternalDocs) {
    let label = docs.description.as_deref().unwrap_or(&docs.url);
    let _ = write!(
        out,
        r#"<div class="external-docs"><a href="{}">{}</a></div>"#,
        escape_html(&docs.url),
        escape_html(label)
    );
}

fn write_verb_badge(out: &mut String, verb: HttpVerb, extra_class: &str) {
    let _ = write!(
        out,
        r#"<span class="operation-badge{extra_class} {verb}">{verb}</span>"#
    );
}

fn write_deprecated_badge(out: &mut String) {
    out.push_str(r#"<span class="badge badge-warning"> Deprecated </span>"#);
}

fn write_operation(out: &mut String, view: &OperationView<'_>) {
    match view {
        OperationView::Detail(detail) => write_operation_detail(out, detail),
        OperationView::Compact {
            header,
            body,
            state,
        } => {
            // Collapsed bodies stay in the page; `open` decides what shows.
            out.push_str(r#"<details class="expandable-container""#);
            if state.is_expanded() {
                out.push_str(" open");
            }
            out.push('>');
            write_compact_header(out, header);
            out.push_str(r#"<div class="expandable-body">"#);
            write_operation_detail(out, body);
            out.push_str("</div></details>");
        }
    }
}

fn write_compact_header(out: &mut String, header: &CompactHeader<'_>) {
    let _ = write!(
        out,
        r#"<summary class="expandable-header" data-toggle="{}">"#,
        escape_html(header.id)
    );
    out.push_str(r#"<h2 class="path-heading">"#);
    write_share_link(out, header.id);
    let _ = write!(
        out,
        r#"<span class="shelf-icon" data-direction="{}"></span>"#,
        header.direction.as_str()
    );
    write_verb_badge(out, header.verb, " large");
    let _ = write!(out, "<code>{}</code>&nbsp;&nbsp;", escape_html(header.path));
    if header.deprecated {
        write_deprecated_badge(out);
    }
    if let Some(summary) = header.summary {
        let _ = write!(out, "<br><small>{}</small>", escape_html(summary));
    }
    out.push_str("</h2></summary>");
}

fn write_operation_detail(out: &mut String, detail: &OperationDetail<'_>) {
    out.push_str(r#"<div class="operation"><div class="row"><div class="middle-panel">"#);
    out.push_str(r#"<h2 class="operation-summary">"#);
    write_share_link(out, detail.id);
    out.push_str(&escape_html(detail.summary));
    out.push_str("</h2>");
    if detail.deprecated {
        write_deprecated_badge(out);
    }
    out.push_str(r#"<div class="operation-endpoint">"#);
    write_verb_badge(out, detail.verb, "");
    let _ = write!(out, "<code>{}</code></div>", escape_html(detail.path));
    out.push_str(&detail.description_html);
    out.push_str("</div></div></div>");
}

/// Serialize a rendered navigation list.
#[must_use]
pub fn write_navigation(list: &NavList<'_>) -> String {
    let mut out = String::with_capacity(list.len() * 256);
    write_nav_list(&mut out, list);
    out
}

fn write_nav_list(out: &mut String, list: &NavList<'_>) {
    let class = if list.expanded {
        "menu-items"
    } else {
        "menu-items collapsed"
    };
    let _ = write!(out, r#"<ul class="{class}""#);
    if list.landmark {
        out.push_str(r#" role="navigation""#);
    }
    out.push_str(">\n");
    for entry in &list.entries {
        write_nav_entry(out, entry);
    }
    out.push_str("</ul>\n");
}

fn write_nav_entry(out: &mut String, entry: &NavEntry<'_>) {
    let item = entry.item;
    let _ = write!(
        out,
        r#"<li class="menu-item" data-item-id="{}">"#,
        escape_html(&item.id)
    );

    let mut label_class = format!("menu-item-label type-{}", item.item_type.as_str());
    if item.active {
        label_class.push_str(" active");
    }
    if item.deprecated {
        label_class.push_str(" deprecated");
    }
    let _ = write!(
        out,
        r##"<label class="{label_class}"><a href="#{}">"##,
        escape_html(&item.id)
    );
    if let Some(verb) = item.http_verb {
        write_verb_badge(out, verb, "");
    }
    let _ = write!(
        out,
        r#"<span class="menu-item-title">{}</span></a>"#,
        escape_html(&item.name)
    );
    if !entry.without_children {
        let direction = if item.expanded { "up" } else { "down" };
        let _ = write!(
            out,
            r#"<span class="shelf-icon" data-direction="{direction}"></span>"#
        );
    }
    out.push_str("</label>");

    if let Some(children) = &entry.children {
        write_nav_list(out, children);
    }
    out.push_str("</li>\n");
}
