//! Host-agnostic view hierarchy.

use glam::DVec2;
use serde::{Deserialize, Serialize};
use sketchsnap_core::{Color, DocumentError, Rect, Size};
use sketchsnap_document::{Border, Shadow, TextStyle};
use sketchsnap_layout::NodeKind;

/// Visual attributes captured from a view.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ViewStyle {
    pub background: Option<Color>,
    pub border: Option<Border>,
    pub corner_radius: f64,
    pub shadow: Option<Shadow>,
    pub text: Option<TextStyle>,
}

impl ViewStyle {
    /// True when the view draws something of its own.
    pub fn is_visible(&self) -> bool {
        self.background.is_some_and(|c| !c.is_transparent())
            || self.border.is_some_and(|b| b.thickness > 0.0 && !b.color.is_transparent())
            || self.text.is_some()
    }
}

/// A view of the host UI toolkit, as seen by the snapshot builder.
///
/// Implement this over the toolkit's view objects. Queries must be made on
/// the thread that owns the hierarchy.
pub trait ViewSource {
    /// Display name, usually the view's type name.
    fn name(&self) -> &str;

    /// Frame in the parent's coordinate space.
    fn frame(&self) -> Rect;

    /// Origin of the visible region in the view's own coordinates.
    ///
    /// Non-zero for scrolled views.
    fn bounds_origin(&self) -> DVec2 {
        DVec2::ZERO
    }

    /// Size of the scrollable content, for scroll containers.
    fn content_size(&self) -> Option<Size> {
        None
    }

    fn kind(&self) -> NodeKind {
        NodeKind::Normal
    }

    fn is_hidden(&self) -> bool {
        false
    }

    fn alpha(&self) -> f64 {
        1.0
    }

    fn style(&self) -> ViewStyle;

    /// Subviews, back to front.
    fn children(&self) -> impl Iterator<Item = &Self>;

    /// Whether the view is rendered at all.
    fn is_rendered(&self) -> bool {
        !self.is_hidden() && self.alpha() > 0.0
    }
}

fn opaque() -> f64 {
    1.0
}

/// An owned, recorded view hierarchy.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ViewNode {
    pub name: String,
    pub frame: Rect,
    #[serde(default)]
    pub content_offset: DVec2,
    #[serde(default)]
    pub content_size: Option<Size>,
    #[serde(default)]
    pub kind: NodeKind,
    #[serde(default)]
    pub hidden: bool,
    #[serde(default = "opaque")]
    pub alpha: f64,
    #[serde(default)]
    pub style: ViewStyle,
    #[serde(default)]
    pub children: Vec<ViewNode>,
}

impl ViewNode {
    pub fn new(name: impl Into<String>, frame: Rect) -> Self {
        Self {
            name: name.into(),
            frame,
            content_offset: DVec2::ZERO,
            content_size: None,
            kind: NodeKind::Normal,
            hidden: false,
            alpha: 1.0,
            style: ViewStyle::default(),
            children: Vec::new(),
        }
    }

    /// A scroll view showing `content_size` worth of content, scrolled to `offset`.
    pub fn scroll(name: impl Into<String>, frame: Rect, content_size: Size, offset: DVec2) -> Self {
        Self {
            content_offset: offset,
            content_size: Some(content_size),
            kind: NodeKind::ScrollContainer,
            ..Self::new(name, frame)
        }
    }

    pub fn with_kind(mut self, kind: NodeKind) -> Self {
        self.kind = kind;
        self
    }

    pub fn with_background(mut self, color: Color) -> Self {
        self.style.background = Some(color);
        self
    }

    pub fn with_style(mut self, style: ViewStyle) -> Self {
        self.style = style;
        self
    }

    pub fn with_alpha(mut self, alpha: f64) -> Self {
        self.alpha = alpha;
        self
    }

    pub fn hidden(mut self) -> Self {
        self.hidden = true;
        self
    }

    pub fn with_child(mut self, child: ViewNode) -> Self {
        self.children.push(child);
        self
    }

    /// Parse a recorded hierarchy.
    pub fn from_json(json: &str) -> Result<Self, DocumentError> {
        Ok(serde_json::from_str(json)?)
    }
}

impl ViewSource for ViewNode {
    fn name(&self) -> &str {
        &self.name
    }

    fn frame(&self) -> Rect {
        self.frame
    }

    fn bounds_origin(&self) -> DVec2 {
        self.content_offset
    }

    fn content_size(&self) -> Option<Size> {
        self.content_size
    }

    fn kind(&self) -> NodeKind {
        self.kind
    }

    fn is_hidden(&self) -> bool {
        self.hidden
    }

    fn alpha(&self) -> f64 {
        self.alpha
    }

    fn style(&self) -> ViewStyle {
        self.style.clone()
    }

    fn children(&self) -> impl Iterator<Item = &Self> {
        self.children.iter()
    }
}
