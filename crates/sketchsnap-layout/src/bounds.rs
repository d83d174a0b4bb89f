//! Whole-content bounds of a captured view tree.
//!
//! A view's visible frame can be smaller than what it draws: scroll
//! containers have content beyond their viewport and subviews may hang
//! outside their parent. The accumulator walks the tree and unions every
//! rectangle that should appear in the snapshot.
//!
//! Every frame in a [`ContentNode`] tree is expressed in the same coordinate
//! space (usually the snapshot root's). Converting local frames into that
//! space happens when the tree is built, not here.

use sketchsnap_core::{LayoutError, Rect, Size};

/// Nesting limit for [`whole_content_bounds`].
pub const MAX_DEPTH: usize = 256;

/// How the accumulator treats a node.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub enum NodeKind {
    /// Plain view: its children are visited.
    #[default]
    Normal,
    /// Scrollable view whose content size may exceed its frame.
    ScrollContainer,
    /// Map-like view with virtual, unbounded content. Never descended into.
    MapLike,
    /// Custom view drawn as a single unit.
    Opaque,
}

/// A node of the tree fed to [`whole_content_bounds`].
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ContentNode {
    /// Frame in the common coordinate space.
    pub frame: Rect,
    /// Scrollable content size, for scroll containers.
    pub content_size: Option<Size>,
    /// How the accumulator treats this node.
    pub kind: NodeKind,
    /// Children, with frames in the same space as `frame`.
    pub children: Vec<ContentNode>,
}

impl ContentNode {
    /// Create a normal node with no children.
    pub fn new(frame: Rect) -> Self {
        Self {
            frame,
            ..Default::default()
        }
    }

    /// Create a scroll container with the given content size.
    pub fn scroll(frame: Rect, content_size: Size) -> Self {
        Self {
            frame,
            content_size: Some(content_size),
            kind: NodeKind::ScrollContainer,
            children: Vec::new(),
        }
    }

    /// Set the kind.
    pub fn with_kind(mut self, kind: NodeKind) -> Self {
        self.kind = kind;
        self
    }

    /// Append a child.
    pub fn with_child(mut self, child: ContentNode) -> Self {
        self.children.push(child);
        self
    }

    /// Append several children.
    pub fn with_children(mut self, children: impl IntoIterator<Item = ContentNode>) -> Self {
        self.children.extend(children);
        self
    }

    /// Total number of nodes in this subtree.
    pub fn node_count(&self) -> usize {
        1 + self.children.iter().map(ContentNode::node_count).sum::<usize>()
    }

    /// Whole content bounds, descending into every node except map-like ones.
    pub fn whole_content_bounds(&self) -> Result<Rect, LayoutError> {
        whole_content_bounds(self, &expand_all)
    }
}

/// Predicate that expands every node.
pub fn expand_all(_node: &ContentNode) -> bool {
    true
}

/// Compute the smallest rectangle enclosing `node`, its scrollable extent,
/// and the bounds of every descendant.
///
/// Map-like nodes contribute only their frame. When `should_expand` returns
/// `false` for a node, that node also contributes only its frame and its
/// subtree is skipped.
///
/// Fails with [`LayoutError::MaxDepthExceeded`] when the tree is nested more
/// than [`MAX_DEPTH`] levels deep.
pub fn whole_content_bounds<F>(node: &ContentNode, should_expand: &F) -> Result<Rect, LayoutError>
where
    F: Fn(&ContentNode) -> bool,
{
    accumulate(node, should_expand, 0)
}

fn accumulate<F>(node: &ContentNode, should_expand: &F, depth: usize) -> Result<Rect, LayoutError>
where
    F: Fn(&ContentNode) -> bool,
{
    if depth >= MAX_DEPTH {
        return Err(LayoutError::MaxDepthExceeded { depth: MAX_DEPTH });
    }

    let mut bounds = node.frame;

    if node.kind == NodeKind::MapLike || !should_expand(node) {
        return Ok(bounds);
    }

    if node.kind == NodeKind::ScrollContainer {
        if let Some(content_size) = node.content_size {
            let content = Rect::from_origin_size(node.frame.origin(), content_size);
            bounds = bounds.union(&content);
        }
    }

    for child in &node.children {
        let child_bounds = accumulate(child, should_expand, depth + 1)?;
        bounds = bounds.union(&child_bounds);
    }

    Ok(bounds)
}
