//! Snapshot builder: view hierarchy to document group.

use glam::DVec2;
use sketchsnap_core::{LayoutError, Rect};
use sketchsnap_document::{Group, Layer, LayerItem};
use sketchsnap_layout::{whole_content_bounds, ContentNode, NodeKind, MAX_DEPTH};

use crate::convert::content_tree;
use crate::view::ViewSource;

/// Default expansion policy: descend into everything except opaque custom views.
pub fn default_should_expand(node: &ContentNode) -> bool {
    node.kind != NodeKind::Opaque
}

/// Snapshot `view` into a group named `name`, using [`default_should_expand`].
pub fn make_group<V: ViewSource>(view: &V, name: &str) -> Result<Group, LayoutError> {
    make_group_with(view, name, &default_should_expand)
}

/// Snapshot `view` into a group named `name`.
///
/// The group's frame is the whole content bounds of the view, in the view's
/// own coordinate space. Views for which `should_expand` returns `false`
/// become single layers and their subviews are not captured. Map-like views
/// always become single layers.
pub fn make_group_with<V, F>(view: &V, name: &str, should_expand: &F) -> Result<Group, LayoutError>
where
    V: ViewSource,
    F: Fn(&ContentNode) -> bool,
{
    let tree = content_tree(view)?;
    let bounds = whole_content_bounds(&tree, should_expand)?;
    let origin = bounds.origin();

    let mut group = Group::new(name, bounds).with_alpha(view.alpha());
    let style = view.style();
    if let Some(shadow) = style.shadow {
        group = group.with_shadow(shadow);
    }

    if style.is_visible() {
        group.layers.push(styled_layer(view, relative_to(tree.frame, origin), 1.0).into());
    }

    if tree.kind != NodeKind::MapLike && should_expand(&tree) {
        capture_children(view, &tree, origin, should_expand, &mut group.layers, 1)?;
    }

    tracing::debug!(
        group = name,
        nodes = tree.node_count(),
        layers = group.leaf_count(),
        width = bounds.width,
        height = bounds.height,
        "captured view snapshot"
    );

    Ok(group)
}

fn relative_to(frame: Rect, origin: DVec2) -> Rect {
    frame.offset_by(-origin.x, -origin.y)
}

/// Capture the rendered subviews of `view`, paired with the matching nodes
/// of its content tree.
fn capture_children<V, F>(
    view: &V,
    node: &ContentNode,
    origin: DVec2,
    should_expand: &F,
    out: &mut Vec<LayerItem>,
    depth: usize,
) -> Result<(), LayoutError>
where
    V: ViewSource,
    F: Fn(&ContentNode) -> bool,
{
    if depth >= MAX_DEPTH {
        return Err(LayoutError::MaxDepthExceeded { depth: MAX_DEPTH });
    }

    let rendered = view.children().filter(|child| child.is_rendered());
    for (child, child_node) in rendered.zip(&node.children) {
        out.push(capture(child, child_node, origin, should_expand, depth)?);
    }

    Ok(())
}

fn capture<V, F>(
    view: &V,
    node: &ContentNode,
    origin: DVec2,
    should_expand: &F,
    depth: usize,
) -> Result<LayerItem, LayoutError>
where
    V: ViewSource,
    F: Fn(&ContentNode) -> bool,
{
    let frame = relative_to(node.frame, origin);

    let expand = node.kind != NodeKind::MapLike && !node.children.is_empty() && should_expand(node);
    if !expand {
        return Ok(styled_layer(view, frame, view.alpha()).into());
    }

    let style = view.style();
    let mut group = Group::new(view.name(), frame).with_alpha(view.alpha());
    if let Some(shadow) = style.shadow {
        group = group.with_shadow(shadow);
    }
    if style.is_visible() {
        let background = Rect::new(0.0, 0.0, frame.width, frame.height);
        group.layers.push(styled_layer(view, background, 1.0).into());
    }

    capture_children(view, node, node.frame.origin(), should_expand, &mut group.layers, depth + 1)?;

    Ok(group.into())
}

/// A leaf layer carrying the view's own drawing.
fn styled_layer<V: ViewSource>(view: &V, frame: Rect, alpha: f64) -> Layer {
    let style = view.style();
    let mut layer = Layer::new(view.name(), frame)
        .with_alpha(alpha)
        .with_corner_radius(style.corner_radius);

    if let Some(fill) = style.background.filter(|c| !c.is_transparent()) {
        layer = layer.with_fill(fill);
    }
    if let Some(border) = style.border {
        layer = layer.with_border(border);
    }
    if let Some(shadow) = style.shadow {
        layer = layer.with_shadow(shadow);
    }
    if let Some(text) = style.text {
        layer = layer.with_text(text);
    }
    layer
}
