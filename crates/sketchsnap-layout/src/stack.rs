//! Stack arrangement of captured snapshots.
//!
//! Items arrive in batches. Items of one batch stack along the secondary
//! axis; batches stack along the primary axis. With the default horizontal
//! primary axis each batch becomes a column and columns run left to right.

use sketchsnap_core::Rect;

/// Anything with a mutable frame that can be placed by [`arrange`].
pub trait Framed {
    fn frame(&self) -> Rect;
    fn set_frame(&mut self, frame: Rect);
}

impl Framed for Rect {
    fn frame(&self) -> Rect {
        *self
    }

    fn set_frame(&mut self, frame: Rect) {
        *self = frame;
    }
}

/// Axis along which batches are stacked.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub enum Axis {
    /// Batches run left to right; items in a batch run top to bottom.
    #[default]
    Horizontal,
    /// Batches run top to bottom; items in a batch run left to right.
    Vertical,
}

impl Axis {
    /// Extent of `rect` along this axis.
    fn main(self, rect: &Rect) -> f64 {
        match self {
            Axis::Horizontal => rect.width,
            Axis::Vertical => rect.height,
        }
    }

    /// Extent of `rect` across this axis.
    fn cross(self, rect: &Rect) -> f64 {
        match self {
            Axis::Horizontal => rect.height,
            Axis::Vertical => rect.width,
        }
    }

    /// Build a rectangle from axis-relative position and extents.
    fn rect(self, main_pos: f64, cross_pos: f64, main: f64, cross: f64) -> Rect {
        match self {
            Axis::Horizontal => Rect::new(main_pos, cross_pos, main, cross),
            Axis::Vertical => Rect::new(cross_pos, main_pos, cross, main),
        }
    }
}

/// Stack arrangement settings.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StackLayout {
    /// Gap between vertically adjacent items
    pub vertical_padding: f64,
    /// Gap between horizontally adjacent items
    pub horizontal_padding: f64,
    /// Axis along which batches are stacked
    pub primary: Axis,
}

impl Default for StackLayout {
    fn default() -> Self {
        Self {
            vertical_padding: 20.0,
            horizontal_padding: 20.0,
            primary: Axis::Horizontal,
        }
    }
}

impl StackLayout {
    /// Batches stacked left to right.
    pub fn horizontal() -> Self {
        Self::default()
    }

    /// Batches stacked top to bottom.
    pub fn vertical() -> Self {
        Self {
            primary: Axis::Vertical,
            ..Default::default()
        }
    }

    /// Set both paddings.
    pub fn with_padding(mut self, vertical: f64, horizontal: f64) -> Self {
        self.vertical_padding = vertical;
        self.horizontal_padding = horizontal;
        self
    }

    /// Position every item and flatten the batches in input order.
    pub fn arrange<T: Framed>(&self, groups: Vec<Vec<T>>) -> Vec<T> {
        arrange(groups, self.vertical_padding, self.horizontal_padding, self.primary)
    }
}

/// Position every item and return them flattened in input order.
///
/// Only origins change; sizes are taken from each item's current frame.
/// See [`arrange_in_place`] for the placement rules.
pub fn arrange<T: Framed>(
    mut groups: Vec<Vec<T>>,
    vertical_padding: f64,
    horizontal_padding: f64,
    primary: Axis,
) -> Vec<T> {
    arrange_in_place(&mut groups, vertical_padding, horizontal_padding, primary);
    groups.into_iter().flatten().collect()
}

/// Position every item starting from the origin, keeping the batches.
///
/// Within a batch each item starts where the previous one ended plus the
/// secondary padding. The next batch starts past the widest (or tallest)
/// item of the current one plus the primary padding. An empty batch still
/// consumes one primary padding.
pub fn arrange_in_place<T: Framed>(
    groups: &mut [Vec<T>],
    vertical_padding: f64,
    horizontal_padding: f64,
    primary: Axis,
) {
    let (primary_padding, secondary_padding) = match primary {
        Axis::Horizontal => (horizontal_padding, vertical_padding),
        Axis::Vertical => (vertical_padding, horizontal_padding),
    };
    let mut cursor = 0.0_f64;

    for (index, batch) in groups.iter_mut().enumerate() {
        let mut secondary = 0.0_f64;
        let mut max_extent = cursor;

        for item in batch.iter_mut() {
            let current = item.frame();
            let main = primary.main(&current);
            let cross = primary.cross(&current);

            item.set_frame(primary.rect(cursor, secondary, main, cross));

            secondary += cross + secondary_padding;
            max_extent = max_extent.max(cursor + main);
        }

        tracing::trace!(batch = index, items = batch.len(), start = cursor, end = max_extent, "placed batch");
        cursor = max_extent + primary_padding;
    }

    tracing::debug!(
        batches = groups.len(),
        items = groups.iter().map(Vec::len).sum::<usize>(),
        ?primary,
        "arranged snapshots"
    );
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sized(width: f64, height: f64) -> Rect {
        Rect::new(0.0, 0.0, width, height)
    }

    #[test]
    fn test_two_batches_horizontal() {
        let groups = vec![vec![sized(10.0, 20.0)], vec![sized(30.0, 5.0), sized(5.0, 5.0)]];

        let result = arrange(groups, 2.0, 4.0, Axis::Horizontal);

        assert_eq!(result.len(), 3);
        assert_eq!(result[0], Rect::new(0.0, 0.0, 10.0, 20.0));
        assert_eq!(result[1], Rect::new(14.0, 0.0, 30.0, 5.0));
        assert_eq!(result[2], Rect::new(14.0, 7.0, 5.0, 5.0));
    }

    #[test]
    fn test_two_batches_vertical() {
        let groups = vec![vec![sized(20.0, 10.0)], vec![sized(5.0, 30.0), sized(5.0, 5.0)]];

        let result = arrange(groups, 4.0, 2.0, Axis::Vertical);

        assert_eq!(result[0], Rect::new(0.0, 0.0, 20.0, 10.0));
        assert_eq!(result[1], Rect::new(0.0, 14.0, 5.0, 30.0));
        assert_eq!(result[2], Rect::new(7.0, 14.0, 5.0, 5.0));
    }

    #[test]
    fn test_widest_item_drives_next_batch() {
        let groups = vec![
            vec![sized(10.0, 10.0), sized(50.0, 10.0), sized(20.0, 10.0)],
            vec![sized(10.0, 10.0)],
        ];

        let result = arrange(groups, 0.0, 5.0, Axis::Horizontal);

        assert_eq!(result[3].x, 55.0);
        assert_eq!(result[3].y, 0.0);
    }

    #[test]
    fn test_origins_are_reset() {
        let groups = vec![vec![Rect::new(300.0, -40.0, 10.0, 10.0)]];
        let result = arrange(groups, 20.0, 20.0, Axis::Horizontal);
        assert_eq!(result[0], Rect::new(0.0, 0.0, 10.0, 10.0));
    }

    #[test]
    fn test_empty_input() {
        let result: Vec<Rect> = arrange(Vec::new(), 20.0, 20.0, Axis::Horizontal);
        assert!(result.is_empty());

        let result: Vec<Rect> = arrange(vec![Vec::new(), Vec::new()], 20.0, 20.0, Axis::Horizontal);
        assert!(result.is_empty());
    }

    #[test]
    fn test_empty_batch_consumes_padding() {
        let groups = vec![vec![sized(10.0, 10.0)], Vec::new(), vec![sized(10.0, 10.0)]];

        let result = arrange(groups, 3.0, 4.0, Axis::Horizontal);

        // 10 + 4 for the first batch, then 4 more for the empty one
        assert_eq!(result[1].x, 18.0);
    }

    #[test]
    fn test_negative_padding_pulls_items_together() {
        let groups = vec![vec![sized(10.0, 10.0), sized(10.0, 10.0)], vec![sized(10.0, 10.0)]];

        let result = arrange(groups, -5.0, -5.0, Axis::Horizontal);

        assert_eq!(result[1].y, 5.0);
        assert_eq!(result[2].x, 5.0);
    }

    #[test]
    fn test_in_place_keeps_batches() {
        let mut groups = vec![vec![sized(10.0, 10.0)], vec![sized(10.0, 10.0)]];
        arrange_in_place(&mut groups, 20.0, 20.0, Axis::Horizontal);
        assert_eq!(groups[1][0].x, 30.0);
    }

    #[test]
    fn test_stack_layout_defaults() {
        let layout = StackLayout::vertical().with_padding(1.0, 2.0);
        assert_eq!(layout.primary, Axis::Vertical);

        let result = layout.arrange(vec![vec![sized(10.0, 10.0)], vec![sized(10.0, 10.0)]]);
        assert_eq!(result[1], Rect::new(0.0, 11.0, 10.0, 10.0));
    }
}
