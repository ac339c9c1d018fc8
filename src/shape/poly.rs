//! Convex polygon shape sharing the rectangle's update contract.

use super::{fold_world_box, Shape, ShapeType};
use crate::{error::ShapeError, AABBox, Body, Fp, Result, Vec2};

#[cfg(feature = "f64")]
use std::f64::consts::TAU;
#[cfg(not(feature = "f64"))]
use std::f32::consts::TAU;

/// A convex polygon in body-local space, wound like [`RectShape`](super::RectShape): counter-clockwise on screen.
#[derive(Debug, Clone, PartialEq)]
pub struct PolyShape {
    verts: Vec<Vec2>,
    /// World-space box from the last update.
    aabbox: AABBox,
}

/// Twice the shoelace signed area. Negative for counter-clockwise winding in y-down space.
fn double_signed_area(verts: &[Vec2]) -> Fp {
    let len = verts.len();
    (0..len).map(|i| verts[i].perp_dot(verts[(i + 1) % len])).sum()
}

impl PolyShape {
    /// `verts` must form a simple convex polygon, in either winding.
    ///
    /// Fails with `InvalidArgument` on fewer than three vertices, non-finite coordinates,
    /// repeated consecutive vertices, zero area, a concave outline, or an outline that winds
    /// around more than once (a star).
    pub fn new(verts: &[Vec2]) -> Result<PolyShape> {
        let len = verts.len();
        if len < 3 {
            return Err(ShapeError::invalid(format!("polygon needs at least 3 vertices, got {}", len)));
        }
        if verts.iter().any(|v| !v.x.is_finite() || !v.y.is_finite()) {
            return Err(ShapeError::invalid("polygon vertices must be finite"));
        }

        if (0..len).any(|i| verts[i] == verts[(i + 1) % len]) {
            return Err(ShapeError::invalid("polygon has repeated consecutive vertices"));
        }

        let area = double_signed_area(verts);
        if area == 0.0 {
            return Err(ShapeError::invalid("polygon has zero area"));
        }

        // every turn must agree with the overall winding; colinear runs are tolerated
        let sign = area.signum();
        let mut turning: Fp = 0.0;
        for i in 0..len {
            let a = verts[i];
            let b = verts[(i + 1) % len];
            let c = verts[(i + 2) % len];
            let (ab, bc) = (b - a, c - b);
            let cross = ab.perp_dot(bc);
            if cross * sign < 0.0 {
                return Err(ShapeError::invalid("polygon must be convex"));
            }
            turning += Fp::atan2(cross, ab.dot(bc));
        }
        // a simple outline turns exactly once; a star turns two or more times
        if (turning.abs() - TAU).abs() > 1.0e-3 {
            return Err(ShapeError::invalid("polygon outline must not self-intersect"));
        }

        let mut verts = verts.to_vec();
        if area > 0.0 {
            verts.reverse();
        }
        Ok(PolyShape { verts, aabbox: AABBox::new() })
    }

    #[inline]
    pub fn vertex_count(&self) -> usize {
        self.verts.len()
    }

    pub fn local_aabbox(&self) -> AABBox {
        AABBox::from_points(&self.verts)
    }
}

impl Shape for PolyShape {
    #[inline]
    fn shape_type(&self) -> ShapeType {
        ShapeType::Poly
    }

    fn get_vertices(&self) -> Vec<Vec2> {
        self.verts.clone()
    }

    #[inline]
    fn get_aabbox(&self) -> AABBox {
        self.aabbox
    }

    fn update(&mut self, body: Option<&dyn Body>) -> Result<()> {
        self.aabbox = fold_world_box(ShapeType::Poly, &self.verts, body)?;
        Ok(())
    }
}
