//! Shape capability set and its concrete variants.

mod poly;
mod rect;

pub use poly::PolyShape;
pub use rect::RectShape;

use crate::{error::ShapeError, AABBox, Body, Result, Vec2};
use tracing::{trace, warn};

/// Discriminates shape variants without inspecting the concrete type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ShapeType {
    Rect,
    Poly,
}

/// Everything a collision system needs from a shape.
pub trait Shape {
    fn shape_type(&self) -> ShapeType;

    /// Returns the shape's vertices in body-local space, in the variant's winding order.
    fn get_vertices(&self) -> Vec<Vec2>;

    /// Returns the world-space box cached by the last successful [`Shape::update`].
    fn get_aabbox(&self) -> AABBox;

    /// Recomputes the cached world-space box from `body`'s transform.
    ///
    /// Fails with `InvalidArgument` if `body` is absent, leaving the cached box untouched.
    /// Nothing calls this implicitly: the owner must call it after every transform change.
    fn update(&mut self, body: Option<&dyn Body>) -> Result<()>;

    fn get_world_vertices(&self, body: &dyn Body) -> Vec<Vec2> {
        //! Maps `get_vertices` through `body`, preserving order.
        self.get_vertices().into_iter().map(|v| body.get_global_pos(v)).collect()
    }
}

/// Folds the world-space image of `local` into a fresh box, or rejects an absent body.
fn fold_world_box(shape_type: ShapeType, local: &[Vec2], body: Option<&dyn Body>) -> Result<AABBox> {
    let body = match body {
        Some(body) => body,
        None => {
            warn!(?shape_type, "shape update without a body");
            return Err(ShapeError::invalid("body must not be absent"));
        }
    };

    let mut aabbox = AABBox::new();
    for &v in local {
        aabbox.expand_to(body.get_global_pos(v));
    }
    trace!(?shape_type, ?aabbox, "shape bounding box refolded");
    Ok(aabbox)
}

// ---------- AnyShape ---------- //

/// A shape of any variant, dispatched by `match` on its tag.
#[derive(Debug, Clone, PartialEq)]
pub enum AnyShape {
    Rect(RectShape),
    Poly(PolyShape),
}

impl AnyShape {
    pub fn get_rect(&self) -> Option<&RectShape> {
        match self {
            AnyShape::Rect(r) => Some(r),
            _ => None,
        }
    }
    pub fn get_poly(&self) -> Option<&PolyShape> {
        match self {
            AnyShape::Poly(p) => Some(p),
            _ => None,
        }
    }

    fn as_shape(&self) -> &dyn Shape {
        match self {
            AnyShape::Rect(r) => r,
            AnyShape::Poly(p) => p,
        }
    }
    fn as_shape_mut(&mut self) -> &mut dyn Shape {
        match self {
            AnyShape::Rect(r) => r,
            AnyShape::Poly(p) => p,
        }
    }
}

impl Shape for AnyShape {
    #[inline]
    fn shape_type(&self) -> ShapeType {
        self.as_shape().shape_type()
    }
    fn get_vertices(&self) -> Vec<Vec2> {
        self.as_shape().get_vertices()
    }
    #[inline]
    fn get_aabbox(&self) -> AABBox {
        self.as_shape().get_aabbox()
    }
    fn update(&mut self, body: Option<&dyn Body>) -> Result<()> {
        self.as_shape_mut().update(body)
    }
}

impl From<RectShape> for AnyShape {
    fn from(rect: RectShape) -> Self {
        AnyShape::Rect(rect)
    }
}
impl From<PolyShape> for AnyShape {
    fn from(poly: PolyShape) -> Self {
        AnyShape::Poly(poly)
    }
}
