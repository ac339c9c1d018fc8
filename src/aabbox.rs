//! Axis-aligned bounding box maintained by shapes and read by a broad-phase.

use crate::{Fp, Rect, Result, Vec2};
use approx::{AbsDiffEq, RelativeEq};
use serde_json::Value;

/// An axis-aligned bounding box in screen orientation: `top` is the minimum y, `bottom` the maximum y.
///
/// A freshly reset box is inverted (`left`/`top` at `+inf`, `right`/`bottom` at `-inf`) so that the first
/// [`AABBox::expand_to`] establishes real bounds. Edges only move through `reset` and `expand_to`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AABBox {
    top: Fp,
    left: Fp,
    bottom: Fp,
    right: Fp,
}

impl AABBox {
    /// Returns a box in the reset state.
    #[inline]
    pub fn new() -> AABBox {
        AABBox {
            top: Fp::INFINITY,
            left: Fp::INFINITY,
            bottom: Fp::NEG_INFINITY,
            right: Fp::NEG_INFINITY,
        }
    }

    pub fn from_edges(left: Fp, top: Fp, right: Fp, bottom: Fp) -> AABBox {
        //! Orders minimum and maximum values.
        AABBox {
            top: Fp::min(top, bottom),
            left: Fp::min(left, right),
            bottom: Fp::max(top, bottom),
            right: Fp::max(left, right),
        }
    }

    pub fn from_rect(rect_like: &Value) -> Result<AABBox> {
        //! Builds a box from a loosely typed `{x, y, width, height}` value. Fails with `InvalidArgument`.
        Rect::from_value(rect_like).map(AABBox::from)
    }

    pub fn from_points(points: &[Vec2]) -> AABBox {
        points.iter().fold(AABBox::new(), |mut acc, pt| {
            acc.expand_to(*pt);
            acc
        })
    }

    #[inline]
    pub fn reset(&mut self) {
        *self = AABBox::new();
    }

    #[inline]
    pub fn is_reset(&self) -> bool {
        //! Returns whether no point has been folded in since the last reset.
        //! An inverted box built from a negative-extent rect is not reset.
        *self == AABBox::new()
    }

    #[inline]
    pub fn expand_to(&mut self, point: Vec2) {
        // the sentinel edges lose every comparison, so the first point sets all four
        self.left = Fp::min(self.left, point.x);
        self.right = Fp::max(self.right, point.x);
        self.top = Fp::min(self.top, point.y);
        self.bottom = Fp::max(self.bottom, point.y);
    }

    pub fn expand_to_box(&mut self, other: &AABBox) {
        //! Grows `self` to enclose `other`. A reset `other` leaves `self` unchanged.
        if !other.is_reset() {
            self.expand_to(Vec2::new(other.left, other.top));
            self.expand_to(Vec2::new(other.right, other.bottom));
        }
    }

    pub fn to_rect(&self) -> Rect {
        Rect {
            x: self.left,
            y: self.top,
            width: self.right - self.left,
            height: self.bottom - self.top,
        }
    }

    #[inline]
    pub fn top(&self) -> Fp {
        self.top
    }
    #[inline]
    pub fn left(&self) -> Fp {
        self.left
    }
    #[inline]
    pub fn bottom(&self) -> Fp {
        self.bottom
    }
    #[inline]
    pub fn right(&self) -> Fp {
        self.right
    }

    /// Negative infinity on a reset box.
    #[inline]
    pub fn width(&self) -> Fp {
        self.right - self.left
    }
    /// Negative infinity on a reset box.
    #[inline]
    pub fn height(&self) -> Fp {
        self.bottom - self.top
    }

    #[inline]
    pub fn translate(self, offset: Vec2) -> AABBox {
        AABBox {
            top: self.top + offset.y,
            left: self.left + offset.x,
            bottom: self.bottom + offset.y,
            right: self.right + offset.x,
        }
    }

    #[inline]
    pub fn contains(&self, point: Vec2) -> bool {
        //! Edge-inclusive. Always false on a reset box.
        point.x >= self.left && point.x <= self.right && point.y >= self.top && point.y <= self.bottom
    }

    #[inline]
    pub fn overlaps(&self, other: &AABBox) -> bool {
        //! Edge-inclusive. Always false if either box is reset.
        self.left <= other.right
            && self.right >= other.left
            && self.top <= other.bottom
            && self.bottom >= other.top
    }
}

impl Default for AABBox {
    #[inline]
    fn default() -> Self {
        AABBox::new()
    }
}

impl From<Rect> for AABBox {
    /// Edges are taken as given: a negative width or height yields `left > right` or `top > bottom`.
    fn from(rect: Rect) -> Self {
        AABBox {
            top: rect.y,
            left: rect.x,
            bottom: rect.y + rect.height,
            right: rect.x + rect.width,
        }
    }
}

impl AbsDiffEq for AABBox {
    type Epsilon = Fp;

    fn default_epsilon() -> Fp {
        Fp::default_epsilon()
    }
    fn abs_diff_eq(&self, other: &Self, epsilon: Fp) -> bool {
        self.top.abs_diff_eq(&other.top, epsilon)
            && self.left.abs_diff_eq(&other.left, epsilon)
            && self.bottom.abs_diff_eq(&other.bottom, epsilon)
            && self.right.abs_diff_eq(&other.right, epsilon)
    }
}

impl RelativeEq for AABBox {
    fn default_max_relative() -> Fp {
        Fp::default_max_relative()
    }
    fn relative_eq(&self, other: &Self, epsilon: Fp, max_relative: Fp) -> bool {
        self.top.relative_eq(&other.top, epsilon, max_relative)
            && self.left.relative_eq(&other.left, epsilon, max_relative)
            && self.bottom.relative_eq(&other.bottom, epsilon, max_relative)
            && self.right.relative_eq(&other.right, epsilon, max_relative)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ShapeError;
    use approx::assert_relative_eq;
    use proptest::prelude::*;
    use serde_json::json;

    #[test]
    fn first_expand_sets_all_edges() {
        let mut b = AABBox::new();
        assert!(b.is_reset());
        b.expand_to(Vec2::new(3.0, -2.0));
        assert!(!b.is_reset());
        assert_eq!(b, AABBox::from_edges(3.0, -2.0, 3.0, -2.0));

        b.expand_to(Vec2::new(-1.0, 4.0));
        assert_eq!((b.left(), b.top(), b.right(), b.bottom()), (-1.0, -2.0, 3.0, 4.0));

        b.reset();
        assert!(b.is_reset());
        assert_eq!(b, AABBox::default());
    }

    #[test]
    fn rect_conversion() {
        let b = AABBox::from_rect(&json!({"x": 0, "y": 0, "width": 10, "height": 5})).unwrap();
        assert_eq!((b.left(), b.top(), b.right(), b.bottom()), (0.0, 0.0, 10.0, 5.0));
        assert_eq!(b.to_rect(), Rect::new(0.0, 0.0, 10.0, 5.0));
        assert_eq!(b.width(), 10.0);
        assert_eq!(b.height(), 5.0);

    }

    #[test]
    fn negative_extent_keeps_edges() {
        let b = AABBox::from_rect(&json!({"x": 10, "y": 0, "width": -10, "height": 5})).unwrap();
        assert_eq!((b.left(), b.top(), b.right(), b.bottom()), (10.0, 0.0, 0.0, 5.0));
        assert!(!b.is_reset());
        assert_eq!(b.to_rect(), Rect::new(10.0, 0.0, -10.0, 5.0));
    }

    #[test]
    fn rect_missing_width() {
        let r = AABBox::from_rect(&json!({"x": 0, "y": 0, "height": 5}));
        assert!(matches!(r, Err(ShapeError::InvalidArgument(_))));
    }

    #[test]
    fn queries() {
        let a = AABBox::from_edges(0.0, 0.0, 2.0, 2.0);
        let b = AABBox::from_edges(2.0, 1.0, 3.0, 3.0);
        let c = AABBox::from_edges(2.5, 2.5, 3.0, 3.0);
        assert!(a.overlaps(&b));
        assert!(b.overlaps(&a));
        assert!(!a.overlaps(&c));
        assert!(!a.overlaps(&AABBox::new()));
        assert!(!AABBox::new().overlaps(&AABBox::new()));

        assert!(a.contains(Vec2::new(2.0, 0.0)));
        assert!(!a.contains(Vec2::new(2.1, 0.0)));
        assert!(!AABBox::new().contains(Vec2::new(0.0, 0.0)));

        assert_eq!(a.translate(Vec2::new(1.0, -1.0)), AABBox::from_edges(1.0, -1.0, 3.0, 1.0));
    }

    #[test]
    fn expand_to_box() {
        let mut a = AABBox::new();
        a.expand_to_box(&AABBox::new());
        assert!(a.is_reset());

        a.expand_to_box(&AABBox::from_edges(0.0, 0.0, 1.0, 1.0));
        a.expand_to_box(&AABBox::from_edges(-1.0, 0.5, 0.5, 3.0));
        assert_eq!(a, AABBox::from_edges(-1.0, 0.0, 1.0, 3.0));
    }

    #[test]
    fn approx_cmp() {
        let a = AABBox::from_edges(0.1 + 0.2, 0.0, 1.0, 1.0);
        let b = AABBox::from_edges(0.3, 0.0, 1.0, 1.0);
        assert_relative_eq!(a, b);
    }

    fn points() -> impl Strategy<Value = Vec<(Fp, Fp)>> {
        prop::collection::vec(((-1.0e6 as Fp)..(1.0e6 as Fp), (-1.0e6 as Fp)..(1.0e6 as Fp)), 1..32)
    }

    proptest! {
        #[test]
        fn fold_is_min_max(pts in points()) {
            let v: Vec<Vec2> = pts.iter().map(|&(x, y)| Vec2::new(x, y)).collect();
            let b = AABBox::from_points(&v);
            let min_x = v.iter().map(|p| p.x).fold(Fp::INFINITY, Fp::min);
            let max_x = v.iter().map(|p| p.x).fold(Fp::NEG_INFINITY, Fp::max);
            let min_y = v.iter().map(|p| p.y).fold(Fp::INFINITY, Fp::min);
            let max_y = v.iter().map(|p| p.y).fold(Fp::NEG_INFINITY, Fp::max);
            prop_assert_eq!(b, AABBox::from_edges(min_x, min_y, max_x, max_y));
        }

        #[test]
        fn fold_is_permutation_invariant((pts, shuffled) in points().prop_flat_map(|v| (Just(v.clone()), Just(v).prop_shuffle()))) {
            let a: Vec<Vec2> = pts.iter().map(|&(x, y)| Vec2::new(x, y)).collect();
            let b: Vec<Vec2> = shuffled.iter().map(|&(x, y)| Vec2::new(x, y)).collect();
            prop_assert_eq!(AABBox::from_points(&a), AABBox::from_points(&b));
        }

        #[test]
        fn rect_round_trip(x in -10_000i32..10_000, y in -10_000i32..10_000, w in -10_000i32..10_000, h in -10_000i32..10_000) {
            let r = Rect::new(x as Fp, y as Fp, w as Fp, h as Fp);
            let b = AABBox::from(r);
            prop_assert_eq!(AABBox::from(b.to_rect()), b);
        }
    }
}
