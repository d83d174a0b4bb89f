//! Artboards and pages.

use serde::{Deserialize, Serialize};
use sketchsnap_core::{Color, DocumentError, EdgeInsets, Rect};
use sketchsnap_layout::{Framed, StackLayout};

use crate::group::Group;

/// Light gray canvas behind arranged snapshots.
pub const DEFAULT_ARTBOARD_COLOR: Color = Color::white(245.0 / 255.0, 1.0);

/// A top-level canvas holding arranged groups.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Artboard {
    pub name: String,
    /// Frame in page coordinates; origin is (0, 0) until the artboard is arranged on a page
    pub frame: Rect,
    pub background: Color,
    pub layers: Vec<Group>,
}

impl Artboard {
    /// Serialize to compact JSON.
    pub fn to_json(&self) -> Result<String, DocumentError> {
        Ok(serde_json::to_string(self)?)
    }

    /// Serialize to indented JSON.
    pub fn to_json_pretty(&self) -> Result<String, DocumentError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Parse an artboard back from JSON.
    pub fn from_json(json: &str) -> Result<Self, DocumentError> {
        Ok(serde_json::from_str(json)?)
    }
}

impl Framed for Artboard {
    fn frame(&self) -> Rect {
        self.frame
    }

    fn set_frame(&mut self, frame: Rect) {
        self.frame = frame;
    }
}

/// Build an artboard around already arranged groups.
///
/// Every group is shifted by the left/top insets. The artboard spans from
/// the origin to the right-most and bottom-most group edge, plus the
/// right/bottom insets.
pub fn make_artboard(
    mut groups: Vec<Group>,
    insets: EdgeInsets,
    name: impl Into<String>,
    background: Color,
) -> Artboard {
    let mut width = 0.0_f64;
    let mut height = 0.0_f64;

    for group in &mut groups {
        group.frame = group.frame.offset_by(insets.left, insets.top);
        width = width.max(group.frame.right());
        height = height.max(group.frame.bottom());
    }

    width += insets.right;
    height += insets.bottom;

    let name = name.into();
    tracing::debug!(artboard = %name, groups = groups.len(), width, height, "assembled artboard");

    Artboard {
        name,
        frame: Rect::new(0.0, 0.0, width, height),
        background,
        layers: groups,
    }
}

/// A page of artboards.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Page {
    pub name: String,
    pub artboards: Vec<Artboard>,
}

impl Page {
    /// Lay out batches of artboards with `layout` and collect them on one page.
    pub fn from_batches(name: impl Into<String>, batches: Vec<Vec<Artboard>>, layout: &StackLayout) -> Self {
        Self {
            name: name.into(),
            artboards: layout.arrange(batches),
        }
    }

    /// Bounding box of every artboard on the page.
    pub fn bounds(&self) -> Rect {
        self.artboards
            .iter()
            .map(|artboard| artboard.frame)
            .reduce(|acc, frame| acc.union(&frame))
            .unwrap_or_default()
    }

    pub fn to_json(&self) -> Result<String, DocumentError> {
        Ok(serde_json::to_string(self)?)
    }
}
