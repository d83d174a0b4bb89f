//! Capture view hierarchies into design documents.
//!
//! The host UI toolkit is reached through the [`ViewSource`] trait. A
//! snapshot walks the hierarchy once to build a [`ContentNode`] tree in the
//! root view's coordinate space, measures its whole content bounds, and then
//! mirrors the visible views as groups and layers.
//!
//! ```
//! use sketchsnap_core::Rect;
//! use sketchsnap_snapshot::{artboard_session, SessionConfig, ViewNode};
//!
//! let screen = ViewNode::new("Login", Rect::new(0.0, 0.0, 375.0, 667.0))
//!     .with_child(ViewNode::new("Button", Rect::new(16.0, 600.0, 343.0, 44.0)));
//!
//! let artboard = artboard_session("Review", &SessionConfig::default(), |session| {
//!     session.snap_view(&screen, "Login")
//! })
//! .unwrap();
//!
//! assert_eq!(artboard.frame, Rect::new(0.0, 0.0, 495.0, 787.0));
//! ```
//!
//! [`ContentNode`]: sketchsnap_layout::ContentNode

mod builder;
mod config;
mod controller;
mod convert;
mod session;
mod view;

pub use builder::{default_should_expand, make_group, make_group_with};
pub use config::{SessionConfig, CONFIG_FILE_NAME};
pub use controller::{top_controller, ControllerKind, ControllerNode, ControllerSource};
pub use convert::{content_tree, to_common_space};
pub use session::{artboard_session, ArtboardSession};
pub use view::{ViewNode, ViewSource, ViewStyle};
