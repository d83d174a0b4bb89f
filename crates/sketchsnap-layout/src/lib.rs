//! Layout computation for sketchsnap.
//!
//! Two pure algorithms live here:
//!
//! 1. **Content bounds**: the smallest rectangle enclosing a view, its
//!    scrollable extent, and every descendant ([`whole_content_bounds`]).
//! 2. **Stacking**: placing independently captured snapshots side by side
//!    without overlap ([`arrange`]).
//!
//! # Example
//!
//! ```
//! use sketchsnap_core::Rect;
//! use sketchsnap_layout::{arrange, Axis};
//!
//! let batches = vec![
//!     vec![Rect::new(0.0, 0.0, 10.0, 20.0)],
//!     vec![Rect::new(0.0, 0.0, 30.0, 5.0), Rect::new(0.0, 0.0, 5.0, 5.0)],
//! ];
//! let placed = arrange(batches, 2.0, 4.0, Axis::Horizontal);
//!
//! assert_eq!(placed[1], Rect::new(14.0, 0.0, 30.0, 5.0));
//! assert_eq!(placed[2], Rect::new(14.0, 7.0, 5.0, 5.0));
//! ```

mod bounds;
mod stack;

pub use bounds::{expand_all, whole_content_bounds, ContentNode, NodeKind, MAX_DEPTH};
pub use stack::{arrange, arrange_in_place, Axis, Framed, StackLayout};
