//! Coordinate conversion from view-local frames into the snapshot root's space.

use glam::DVec2;
use sketchsnap_core::{LayoutError, Rect};
use sketchsnap_layout::{ContentNode, NodeKind, MAX_DEPTH};

use crate::view::ViewSource;

/// Map a child's frame from its parent's space into the common space.
///
/// `parent_origin` is the parent's origin in the common space and
/// `parent_bounds_origin` the parent's scroll offset.
pub fn to_common_space(local: Rect, parent_origin: DVec2, parent_bounds_origin: DVec2) -> Rect {
    let shift = parent_origin - parent_bounds_origin;
    local.offset_by(shift.x, shift.y)
}

/// Build the content tree of `root`, in the root's own coordinate space.
///
/// The root sits at the origin. Views that are not rendered are left out,
/// and map-like views keep no children.
pub fn content_tree<V: ViewSource>(root: &V) -> Result<ContentNode, LayoutError> {
    let frame = root.frame();
    build(root, Rect::new(0.0, 0.0, frame.width, frame.height), 0)
}

fn build<V: ViewSource>(view: &V, frame: Rect, depth: usize) -> Result<ContentNode, LayoutError> {
    if depth >= MAX_DEPTH {
        return Err(LayoutError::MaxDepthExceeded { depth: MAX_DEPTH });
    }

    let mut node = ContentNode::new(frame).with_kind(view.kind());
    node.content_size = view.content_size();

    if node.kind == NodeKind::MapLike {
        return Ok(node);
    }

    let scroll = view.bounds_origin();
    for child in view.children().filter(|child| child.is_rendered()) {
        let child_frame = to_common_space(child.frame(), frame.origin(), scroll);
        node.children.push(build(child, child_frame, depth + 1)?);
    }

    Ok(node)
}
