//! Core types and utilities for sketchsnap.
//!
//! This crate provides the foundational types used across the other sketchsnap crates:
//! - Geometry (rectangles, sizes, edge insets)
//! - Color values
//! - Error types

pub mod errors;
pub mod geometry;
pub mod types;

pub use errors::*;
pub use geometry::*;
pub use types::*;
