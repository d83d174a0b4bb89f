//! Groups: named containers of layers.

use serde::{Deserialize, Serialize};
use sketchsnap_core::Rect;
use sketchsnap_layout::Framed;

use crate::layer::{LayerItem, Shadow};

/// A named group of layers.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Group {
    pub name: String,
    /// Frame relative to the enclosing group or artboard
    pub frame: Rect,
    pub alpha: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub shadow: Option<Shadow>,
    /// Children, back to front
    pub layers: Vec<LayerItem>,
}

impl Group {
    pub fn new(name: impl Into<String>, frame: Rect) -> Self {
        Self {
            name: name.into(),
            frame,
            alpha: 1.0,
            shadow: None,
            layers: Vec::new(),
        }
    }

    /// Append a layer or nested group.
    pub fn with_layer(mut self, layer: impl Into<LayerItem>) -> Self {
        self.layers.push(layer.into());
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

    /// Replace the name, keeping everything else.
    pub fn renamed(self, name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..self
        }
    }

    /// Number of leaf layers in this group and all nested groups.
    pub fn leaf_count(&self) -> usize {
        self.layers
            .iter()
            .map(|item| match item {
                LayerItem::Layer(_) => 1,
                LayerItem::Group(group) => group.leaf_count(),
            })
            .sum()
    }
}

impl Framed for Group {
    fn frame(&self) -> Rect {
        self.frame
    }

    fn set_frame(&mut self, frame: Rect) {
        self.frame = frame;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::layer::Layer;
    use sketchsnap_layout::{arrange, Axis};

    #[test]
    fn test_leaf_count_is_recursive() {
        let inner = Group::new("cell", Rect::new(0.0, 0.0, 100.0, 44.0))
            .with_layer(Layer::new("label", Rect::new(8.0, 8.0, 80.0, 20.0)))
            .with_layer(Layer::new("accessory", Rect::new(90.0, 8.0, 8.0, 8.0)));
        let group = Group::new("list", Rect::new(0.0, 0.0, 100.0, 200.0))
            .with_layer(Layer::new("background", Rect::new(0.0, 0.0, 100.0, 200.0)))
            .with_layer(inner);

        assert_eq!(group.leaf_count(), 3);
        assert_eq!(group.layers[1].name(), "cell");
    }

    #[test]
    fn test_renamed_keeps_contents() {
        let group = Group::new("UIWindow", Rect::new(0.0, 0.0, 10.0, 10.0))
            .with_alpha(0.5)
            .with_layer(Layer::new("a", Rect::zero()))
            .renamed("Login");

        assert_eq!(group.name, "Login");
        assert_eq!(group.alpha, 0.5);
        assert_eq!(group.layers.len(), 1);
    }

    #[test]
    fn test_groups_can_be_arranged() {
        let groups = vec![
            vec![Group::new("a", Rect::new(5.0, 5.0, 375.0, 667.0))],
            vec![Group::new("b", Rect::new(5.0, 5.0, 375.0, 812.0))],
        ];

        let placed = arrange(groups, 20.0, 20.0, Axis::Horizontal);

        assert_eq!(placed[0].frame, Rect::new(0.0, 0.0, 375.0, 667.0));
        assert_eq!(placed[1].frame, Rect::new(395.0, 0.0, 375.0, 812.0));
        assert_eq!(placed[1].name, "b");
    }
}
