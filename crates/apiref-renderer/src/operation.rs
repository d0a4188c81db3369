//! Operation nodes.
//!
//! In the default layout an operation always shows its full detail body. In
//! compact mode it collapses behind a one-line header and the detail body is
//! only revealed while the node is expanded. The body is still carried while
//! collapsed so static output can hand the toggle to the browser.

use apiref_model::{ContentItem, HttpVerb, OperationData};

use crate::config::PresentationConfig;
use crate::markdown::render_markdown;
use crate::state::ExpandState;

/// Direction of the disclosure indicator in a compact header.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Direction {
    Down,
    Up,
}

impl Direction {
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Down => "down",
            Self::Up => "up",
        }
    }
}

impl From<ExpandState> for Direction {
    fn from(state: ExpandState) -> Self {
        match state {
            ExpandState::Collapsed => Self::Down,
            ExpandState::Expanded => Self::Up,
        }
    }
}

/// Full operation body.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct OperationDetail<'a> {
    pub id: &'a str,
    pub verb: HttpVerb,
    pub path: &'a str,
    pub summary: &'a str,
    pub deprecated: bool,
    /// Rendered description, empty when the operation has none.
    pub description_html: String,
}

/// Clickable one-line header shown in compact mode.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CompactHeader<'a> {
    /// Share-anchor target and toggle key.
    pub id: &'a str,
    pub direction: Direction,
    pub verb: HttpVerb,
    pub path: &'a str,
    pub deprecated: bool,
    /// Summary line, absent when hidden by configuration or blank.
    pub summary: Option<&'a str>,
}

/// Rendered operation node.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum OperationView<'a> {
    /// Default layout: the detail body, unconditionally.
    Detail(OperationDetail<'a>),
    /// Compact layout: header plus a body revealed only while expanded.
    Compact {
        header: CompactHeader<'a>,
        body: OperationDetail<'a>,
        state: ExpandState,
    },
}

impl<'a> OperationView<'a> {
    /// The detail body, if it is revealed.
    #[must_use]
    pub fn detail(&self) -> Option<&OperationDetail<'a>> {
        match self {
            Self::Detail(detail) => Some(detail),
            Self::Compact { body, state, .. } => state.is_expanded().then_some(body),
        }
    }

    /// The detail body, revealed or not.
    #[must_use]
    pub fn body(&self) -> &OperationDetail<'a> {
        match self {
            Self::Detail(detail) | Self::Compact { body: detail, .. } => detail,
        }
    }

    /// The compact header, if any.
    #[must_use]
    pub fn header(&self) -> Option<&CompactHeader<'a>> {
        match self {
            Self::Detail(_) => None,
            Self::Compact { header, .. } => Some(header),
        }
    }
}

pub(crate) fn render_operation<'a>(
    item: &'a ContentItem,
    operation: &'a OperationData,
    config: &PresentationConfig,
    state: ExpandState,
) -> OperationView<'a> {
    if !config.compact_operation_header {
        return OperationView::Detail(render_detail(item, operation));
    }

    let summary = (!config.hide_operation_summary && !item.name.trim().is_empty())
        .then_some(item.name.as_str());

    OperationView::Compact {
        header: CompactHeader {
            id: &item.id,
            direction: state.into(),
            verb: operation.http_verb,
            path: &operation.path,
            deprecated: operation.deprecated,
            summary,
        },
        body: render_detail(item, operation),
        state,
    }
}

fn render_detail<'a>(item: &'a ContentItem, operation: &'a OperationData) -> OperationDetail<'a> {
    OperationDetail {
        id: &item.id,
        verb: operation.http_verb,
        path: &operation.path,
        summary: &item.name,
        deprecated: operation.deprecated,
        description_html: render_markdown(item.description.as_deref().unwrap_or_default(), None),
    }
}
