//! Rectangle shape: four body-local corners and a cached world box.

use super::{fold_world_box, Shape, ShapeType};
use crate::{error::ShapeError, AABBox, Body, Rect, Result, Vec2};
use serde_json::Value;

/// An axis-aligned rectangle in body-local space. Rotates with its body, so its world box may be larger.
#[derive(Debug, Clone, PartialEq)]
pub struct RectShape {
    topleft: Vec2,
    topright: Vec2,
    bottomleft: Vec2,
    bottomright: Vec2,
    /// World-space box from the last update.
    aabbox: AABBox,
}

impl RectShape {
    pub fn new(rect_like: &Value) -> Result<RectShape> {
        //! Builds a shape from a loosely typed `{x, y, width, height}` value. Fails with `InvalidArgument`.
        AABBox::from_rect(rect_like).map(RectShape::from_local_box)
    }

    pub fn from_rect(rect: Rect) -> RectShape {
        RectShape::from_local_box(AABBox::from(rect))
    }

    pub fn from_aabbox(aabbox: AABBox) -> Result<RectShape> {
        //! Uses `aabbox`'s edges as the local corners. A reset box has no corners to take.
        if aabbox.is_reset() {
            return Err(ShapeError::invalid("cannot build a rect shape from a reset box"));
        }
        Ok(RectShape::from_local_box(aabbox))
    }

    fn from_local_box(b: AABBox) -> RectShape {
        RectShape {
            topleft: Vec2::new(b.left(), b.top()),
            topright: Vec2::new(b.right(), b.top()),
            bottomleft: Vec2::new(b.left(), b.bottom()),
            bottomright: Vec2::new(b.right(), b.bottom()),
            aabbox: AABBox::new(),
        }
    }

    pub fn get_rect(&self) -> Rect {
        //! The local-space rectangle. Use `get_aabbox` for world bounds.
        Rect {
            x: self.topleft.x,
            y: self.topleft.y,
            width: self.bottomright.x - self.topleft.x,
            height: self.bottomright.y - self.topleft.y,
        }
    }

    #[inline]
    pub fn topleft(&self) -> Vec2 {
        self.topleft
    }
    #[inline]
    pub fn topright(&self) -> Vec2 {
        self.topright
    }
    #[inline]
    pub fn bottomleft(&self) -> Vec2 {
        self.bottomleft
    }
    #[inline]
    pub fn bottomright(&self) -> Vec2 {
        self.bottomright
    }

    #[inline]
    fn corners(&self) -> [Vec2; 4] {
        // counter-clockwise on screen, starting from the bottom-left
        [self.bottomleft, self.bottomright, self.topright, self.topleft]
    }
}

impl Shape for RectShape {
    #[inline]
    fn shape_type(&self) -> ShapeType {
        ShapeType::Rect
    }

    fn get_vertices(&self) -> Vec<Vec2> {
        self.corners().to_vec()
    }

    #[inline]
    fn get_aabbox(&self) -> AABBox {
        self.aabbox
    }

    fn update(&mut self, body: Option<&dyn Body>) -> Result<()> {
        self.aabbox = fold_world_box(ShapeType::Rect, &self.corners(), body)?;
        Ok(())
    }
}
