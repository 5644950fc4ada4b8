//! Element construction from a tool kind and two anchors.

use super::{Anchors, Element, ElementBody, ElementId, Stroke, StyleAttributes};
use crate::outline::OutlinePipeline;
use crate::tools::ToolKind;

/// Build an element of `kind`.
///
/// Shape kinds keep the anchors verbatim. Freehand elements are seeded with the
/// start anchor only and get their first outline from `pipeline`.
pub fn create_element(
    id: ElementId,
    kind: ToolKind,
    anchors: Anchors,
    style: StyleAttributes,
    pipeline: &OutlinePipeline,
) -> Element {
    let body = match kind {
        ToolKind::Line | ToolKind::Rectangle | ToolKind::Ellipse | ToolKind::Arrow => {
            ElementBody::Anchors(anchors)
        }
        ToolKind::Freehand => ElementBody::Stroke(Stroke::seeded(anchors.start(), pipeline)),
    };

    Element {
        id,
        kind,
        style,
        body,
    }
}
