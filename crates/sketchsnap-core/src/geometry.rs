//! Geometry primitives.
//!
//! All coordinates are `f64` in a y-down space: `x` grows to the right and
//! `y` grows downward, matching the coordinate systems of mobile UI toolkits.

use glam::DVec2;

/// Axis-aligned rectangle.
///
/// Width and height are never negative; the constructors clamp them to zero.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Rect {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

impl Rect {
    /// Create a rectangle, clamping negative sizes to zero.
    pub fn new(x: f64, y: f64, width: f64, height: f64) -> Self {
        Self {
            x,
            y,
            width: width.max(0.0),
            height: height.max(0.0),
        }
    }

    pub const fn zero() -> Self {
        Self { x: 0.0, y: 0.0, width: 0.0, height: 0.0 }
    }

    /// Create a rectangle from an origin and a size.
    pub fn from_origin_size(origin: DVec2, size: Size) -> Self {
        Self::new(origin.x, origin.y, size.width, size.height)
    }

    /// Create a rectangle from position and size vectors.
    pub fn from_vecs(position: DVec2, size: DVec2) -> Self {
        Self::new(position.x, position.y, size.x, size.y)
    }

    /// Get the origin as a vector.
    pub fn origin(&self) -> DVec2 {
        DVec2::new(self.x, self.y)
    }

    /// Get the size.
    pub fn size(&self) -> Size {
        Size::new(self.width, self.height)
    }

    /// Get the right edge (x + width).
    pub fn right(&self) -> f64 {
        self.x + self.width
    }

    /// Get the bottom edge (y + height).
    pub fn bottom(&self) -> f64 {
        self.y + self.height
    }

    /// True when the rectangle covers no area.
    pub fn is_empty(&self) -> bool {
        self.width <= 0.0 || self.height <= 0.0
    }

    /// Smallest rectangle containing both `self` and `other`.
    pub fn union(&self, other: &Rect) -> Rect {
        let x1 = self.x.min(other.x);
        let y1 = self.y.min(other.y);
        let x2 = self.right().max(other.right());
        let y2 = self.bottom().max(other.bottom());
        Rect::new(x1, y1, x2 - x1, y2 - y1)
    }

    /// Compute intersection with another rectangle.
    pub fn intersect(&self, other: &Rect) -> Option<Rect> {
        let x1 = self.x.max(other.x);
        let y1 = self.y.max(other.y);
        let x2 = self.right().min(other.right());
        let y2 = self.bottom().min(other.bottom());

        if x1 < x2 && y1 < y2 {
            Some(Rect::new(x1, y1, x2 - x1, y2 - y1))
        } else {
            None
        }
    }

    /// True when the two rectangles share a region of positive area.
    ///
    /// Rectangles that only touch along an edge do not intersect.
    pub fn intersects(&self, other: &Rect) -> bool {
        self.intersect(other).is_some()
    }

    /// True when `other` lies entirely inside `self` (edges inclusive).
    pub fn contains_rect(&self, other: &Rect) -> bool {
        other.x >= self.x
            && other.y >= self.y
            && other.right() <= self.right()
            && other.bottom() <= self.bottom()
    }

    /// Move the rectangle without resizing it.
    pub fn offset_by(&self, dx: f64, dy: f64) -> Rect {
        Rect { x: self.x + dx, y: self.y + dy, ..*self }
    }

    /// Shrink the rectangle by the given insets. Negative insets grow it.
    pub fn inset_by(&self, insets: EdgeInsets) -> Rect {
        Rect::new(
            self.x + insets.left,
            self.y + insets.top,
            self.width - insets.horizontal(),
            self.height - insets.vertical(),
        )
    }

    /// Swap the x/y and width/height components.
    pub fn transposed(&self) -> Rect {
        Rect {
            x: self.y,
            y: self.x,
            width: self.height,
            height: self.width,
        }
    }
}

/// A width/height pair.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Size {
    pub width: f64,
    pub height: f64,
}

impl Size {
    /// Create a size, clamping negative components to zero.
    pub fn new(width: f64, height: f64) -> Self {
        Self {
            width: width.max(0.0),
            height: height.max(0.0),
        }
    }

    pub fn to_vec(&self) -> DVec2 {
        DVec2::new(self.width, self.height)
    }
}

/// Insets on all four edges.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct EdgeInsets {
    pub top: f64,
    pub left: f64,
    pub bottom: f64,
    pub right: f64,
}

impl EdgeInsets {
    pub const fn new(top: f64, left: f64, bottom: f64, right: f64) -> Self {
        Self { top, left, bottom, right }
    }

    /// Create uniform insets.
    pub const fn uniform(value: f64) -> Self {
        Self::new(value, value, value, value)
    }

    /// Total horizontal inset.
    pub fn horizontal(&self) -> f64 {
        self.left + self.right
    }

    /// Total vertical inset.
    pub fn vertical(&self) -> f64 {
        self.top + self.bottom
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_negative_size_is_clamped() {
        let rect = Rect::new(5.0, 5.0, -10.0, 3.0);
        assert_eq!(rect.width, 0.0);
        assert_eq!(rect.height, 3.0);
        assert!(rect.is_empty());
    }

    #[test]
    fn test_edges() {
        let rect = Rect::new(10.0, 20.0, 30.0, 40.0);
        assert_eq!(rect.right(), 40.0);
        assert_eq!(rect.bottom(), 60.0);
    }

    #[test]
    fn test_union_is_bounding_box() {
        let a = Rect::new(0.0, 0.0, 100.0, 50.0);
        let b = Rect::new(10.0, 40.0, 20.0, 30.0);
        assert_eq!(a.union(&b), Rect::new(0.0, 0.0, 100.0, 70.0));

        let c = Rect::new(-5.0, 60.0, 2.0, 2.0);
        assert_eq!(a.union(&c), Rect::new(-5.0, 0.0, 105.0, 62.0));
    }

    #[test]
    fn test_intersection() {
        let a = Rect::new(0.0, 0.0, 100.0, 100.0);
        let b = Rect::new(50.0, 50.0, 100.0, 100.0);
        let intersection = a.intersect(&b).unwrap();
        assert!((intersection.x - 50.0).abs() < 0.001);
        assert!((intersection.width - 50.0).abs() < 0.001);

        // Touching edges only
        let c = Rect::new(100.0, 0.0, 10.0, 10.0);
        assert!(!a.intersects(&c));
    }

    #[test]
    fn test_contains_rect() {
        let outer = Rect::new(0.0, 0.0, 100.0, 100.0);
        assert!(outer.contains_rect(&Rect::new(10.0, 10.0, 20.0, 20.0)));
        assert!(outer.contains_rect(&outer));
        assert!(!outer.contains_rect(&Rect::new(90.0, 90.0, 20.0, 20.0)));
    }

    #[test]
    fn test_inset_and_offset() {
        let rect = Rect::new(0.0, 0.0, 100.0, 80.0);
        let inset = rect.inset_by(EdgeInsets::new(10.0, 5.0, 10.0, 5.0));
        assert_eq!(inset, Rect::new(5.0, 10.0, 90.0, 60.0));
        assert_eq!(rect.offset_by(60.0, 60.0), Rect::new(60.0, 60.0, 100.0, 80.0));
    }

    #[test]
    fn test_transposed() {
        let rect = Rect::new(1.0, 2.0, 3.0, 4.0);
        assert_eq!(rect.transposed(), Rect::new(2.0, 1.0, 4.0, 3.0));
        assert_eq!(rect.transposed().transposed(), rect);
    }

    #[test]
    fn test_vec_conversions() {
        let rect = Rect::from_vecs(DVec2::new(3.0, 4.0), DVec2::new(5.0, 6.0));
        assert_eq!(rect.origin(), DVec2::new(3.0, 4.0));
        assert_eq!(rect.size().to_vec(), DVec2::new(5.0, 6.0));
    }
}
