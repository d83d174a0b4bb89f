//! Leaf layers and their style records.

use serde::{Deserialize, Serialize};
use sketchsnap_core::{Color, Rect};

use crate::group::Group;

/// A drop shadow.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Shadow {
    pub color: Color,
    pub offset_x: f64,
    pub offset_y: f64,
    pub blur_radius: f64,
}

/// A border drawn inside the layer's frame.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Border {
    pub color: Color,
    pub thickness: f64,
}

/// Horizontal text alignment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum TextAlignment {
    #[default]
    Left,
    Center,
    Right,
    Justified,
}

/// Text drawn by a layer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TextStyle {
    pub content: String,
    pub font_name: String,
    pub font_size: f64,
    pub color: Color,
    #[serde(default)]
    pub alignment: TextAlignment,
}

/// A leaf shape layer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Layer {
    pub name: String,
    /// Frame relative to the enclosing group
    pub frame: Rect,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fill: Option<Color>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub border: Option<Border>,
    pub corner_radius: f64,
    pub alpha: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub shadow: Option<Shadow>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub text: Option<TextStyle>,
}

impl Layer {
    /// Create an unstyled, fully opaque layer.
    pub fn new(name: impl Into<String>, frame: Rect) -> Self {
        Self {
            name: name.into(),
            frame,
            fill: None,
            border: None,
            corner_radius: 0.0,
            alpha: 1.0,
            shadow: None,
            text: None,
        }
    }

    pub fn with_fill(mut self, fill: Color) -> Self {
        self.fill = Some(fill);
        self
    }

    pub fn with_border(mut self, border: Border) -> Self {
        self.border = Some(border);
        self
    }

    pub fn with_corner_radius(mut self, radius: f64) -> Self {
        self.corner_radius = radius.max(0.0);
        self
    }

    pub fn with_alpha(mut self, alpha: f64) -> Self {
        self.alpha = alpha.clamp(0.0, 1.0);
        self
    }

    pub fn with_shadow(mut self, shadow: Shadow) -> Self {
        self.shadow = Some(shadow);
        self
    }

    pub fn with_text(mut self, text: TextStyle) -> Self {
        self.text = Some(text);
        self
    }
}

/// An entry in a group's layer list.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "_class", rename_all = "camelCase")]
pub enum LayerItem {
    Layer(Layer),
    Group(Group),
}

impl LayerItem {
    pub fn name(&self) -> &str {
        match self {
            LayerItem::Layer(layer) => &layer.name,
            LayerItem::Group(group) => &group.name,
        }
    }

    pub fn frame(&self) -> Rect {
        match self {
            LayerItem::Layer(layer) => layer.frame,
            LayerItem::Group(group) => group.frame,
        }
    }
}

impl From<Layer> for LayerItem {
    fn from(layer: Layer) -> Self {
        LayerItem::Layer(layer)
    }
}

impl From<Group> for LayerItem {
    fn from(group: Group) -> Self {
        LayerItem::Group(group)
    }
}
