//! Design document model for sketchsnap.
//!
//! A document is a tree of records a design tool can import:
//!
//! - [`Artboard`]: top-level canvas with a background color
//! - [`Group`]: named container with its own frame, alpha and shadow
//! - [`Layer`]: leaf shape (fill, border, corner radius, optional text)
//!
//! Frames of layers and nested groups are relative to their enclosing group.
//! Group frames inside an artboard are relative to the artboard.

mod artboard;
mod group;
mod layer;

pub use artboard::{make_artboard, Artboard, Page, DEFAULT_ARTBOARD_COLOR};
pub use group::Group;
pub use layer::{Border, Layer, LayerItem, Shadow, TextAlignment, TextStyle};
