//! Screen controllers and top-most controller resolution.

use serde::{Deserialize, Serialize};
use sketchsnap_core::{DocumentError, LayoutError};
use sketchsnap_layout::MAX_DEPTH;

use crate::view::{ViewNode, ViewSource};

/// How a controller hands over to the controller in front of it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum ControllerKind {
    /// Shows whatever it presented modally.
    #[default]
    Plain,
    /// Navigation stack: its visible controller is in front.
    Navigation,
    /// Tab container: its selected controller is in front.
    Tab,
}

/// A screen controller of the host UI toolkit.
pub trait ControllerSource {
    type View: ViewSource;

    fn kind(&self) -> ControllerKind;

    /// Visible controller of a navigation stack.
    fn visible(&self) -> Option<&Self>;

    /// Selected controller of a tab container.
    fn selected(&self) -> Option<&Self>;

    /// Controller presented modally on top of this one.
    fn presented(&self) -> Option<&Self>;

    /// Root view of the controller.
    fn view(&self) -> &Self::View;
}

/// Follow `root` to the controller currently in front.
///
/// Navigation stacks follow their visible controller, tab containers their
/// selected one, and any other controller what it presented. The walk stops
/// at the first controller with nothing to follow.
pub fn top_controller<C: ControllerSource>(root: &C) -> Result<&C, LayoutError> {
    let mut current = root;

    for _ in 0..MAX_DEPTH {
        let next = match current.kind() {
            ControllerKind::Navigation => current.visible(),
            ControllerKind::Tab => current.selected(),
            ControllerKind::Plain => current.presented(),
        };
        match next {
            Some(next) => current = next,
            None => return Ok(current),
        }
    }

    Err(LayoutError::MaxDepthExceeded { depth: MAX_DEPTH })
}

/// An owned, recorded controller hierarchy.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ControllerNode {
    #[serde(default)]
    pub kind: ControllerKind,
    pub view: ViewNode,
    #[serde(default)]
    pub visible: Option<Box<ControllerNode>>,
    #[serde(default)]
    pub selected: Option<Box<ControllerNode>>,
    #[serde(default)]
    pub presented: Option<Box<ControllerNode>>,
}

impl ControllerNode {
    pub fn new(view: ViewNode) -> Self {
        Self {
            kind: ControllerKind::Plain,
            view,
            visible: None,
            selected: None,
            presented: None,
        }
    }

    /// A navigation controller showing `visible`.
    pub fn navigation(view: ViewNode, visible: ControllerNode) -> Self {
        Self {
            kind: ControllerKind::Navigation,
            visible: Some(Box::new(visible)),
            ..Self::new(view)
        }
    }

    /// A tab controller with `selected` as the active tab.
    pub fn tab(view: ViewNode, selected: ControllerNode) -> Self {
        Self {
            kind: ControllerKind::Tab,
            selected: Some(Box::new(selected)),
            ..Self::new(view)
        }
    }

    pub fn presenting(mut self, presented: ControllerNode) -> Self {
        self.presented = Some(Box::new(presented));
        self
    }

    /// Parse a recorded hierarchy.
    pub fn from_json(json: &str) -> Result<Self, DocumentError> {
        Ok(serde_json::from_str(json)?)
    }
}

impl ControllerSource for ControllerNode {
    type View = ViewNode;

    fn kind(&self) -> ControllerKind {
        self.kind
    }

    fn visible(&self) -> Option<&Self> {
        self.visible.as_deref()
    }

    fn selected(&self) -> Option<&Self> {
        self.selected.as_deref()
    }

    fn presented(&self) -> Option<&Self> {
        self.presented.as_deref()
    }

    fn view(&self) -> &ViewNode {
        &self.view
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use sketchsnap_core::Rect;

    fn container(name: &str) -> ViewNode {
        ViewNode::new(name, Rect::new(0.0, 0.0, 375.0, 667.0))
    }

    fn screen(name: &str) -> ControllerNode {
        ControllerNode::new(container(name))
    }

    #[test]
    fn test_plain_controller_is_its_own_top() {
        let root = screen("Home");
        let top = top_controller(&root).unwrap();
        assert_eq!(top.view.name, "Home");
    }

    #[test]
    fn test_navigation_follows_visible() {
        let root = ControllerNode::navigation(container("UINavigationController"), screen("Detail"));
        assert_eq!(top_controller(&root).unwrap().view.name, "Detail");
    }

    #[test]
    fn test_tab_follows_selected() {
        let root = ControllerNode::tab(container("UITabBarController"), screen("Profile"));
        assert_eq!(top_controller(&root).unwrap().view.name, "Profile");
    }

    #[test]
    fn test_plain_follows_presented() {
        let root = screen("Home").presenting(screen("Compose"));
        assert_eq!(top_controller(&root).unwrap().view.name, "Compose");
    }

    #[test]
    fn test_empty_containers_fall_back_to_self() {
        let mut nav = ControllerNode::new(container("UINavigationController"));
        nav.kind = ControllerKind::Navigation;
        assert_eq!(top_controller(&nav).unwrap().view.name, "UINavigationController");

        let mut tab = ControllerNode::new(container("UITabBarController"));
        tab.kind = ControllerKind::Tab;
        assert_eq!(top_controller(&tab).unwrap().view.name, "UITabBarController");
    }

    #[test]
    fn test_containers_ignore_their_own_presented() {
        let root = ControllerNode::navigation(container("UINavigationController"), screen("List"))
            .presenting(screen("Alert"));
        assert_eq!(top_controller(&root).unwrap().view.name, "List");
    }

    #[test]
    fn test_nested_containers() {
        let detail = ControllerNode::navigation(
            container("UINavigationController"),
            screen("Feed").presenting(screen("Photo")),
        );
        let root = ControllerNode::tab(container("UITabBarController"), detail);

        assert_eq!(top_controller(&root).unwrap().view.name, "Photo");
    }

    #[test]
    fn test_recorded_hierarchy() {
        let json = r#"{
            "kind": "tab",
            "view": { "name": "UITabBarController", "frame": { "x": 0.0, "y": 0.0, "width": 375.0, "height": 667.0 } },
            "selected": {
                "view": { "name": "Settings", "frame": { "x": 0.0, "y": 0.0, "width": 375.0, "height": 618.0 } }
            }
        }"#;

        let root = ControllerNode::from_json(json).unwrap();
        assert_eq!(top_controller(&root).unwrap().view().frame.height, 618.0);
    }
}
