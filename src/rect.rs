//! Rectangle interchange type.

use crate::{error::ShapeError, Fp, Result, Vec2};
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// A rectangle as exchanged with callers: origin at the top-left corner, y grows downward.
///
/// Deserializes from either `{"x": .., "y": .., "width": .., "height": ..}` or `[x, y, width, height]`.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Rect {
    pub x: Fp,
    pub y: Fp,
    pub width: Fp,
    pub height: Fp,
}

impl Rect {
    #[inline]
    pub fn new(x: Fp, y: Fp, width: Fp, height: Fp) -> Rect {
        Rect { x, y, width, height }
    }

    pub fn from_value(value: &Value) -> Result<Rect> {
        //! Interprets loosely typed input as four numeric fields, failing with `InvalidArgument` otherwise.
        Rect::deserialize(value).map_err(|e| ShapeError::invalid(format!("not a rect: {}", e)))
    }

    #[inline]
    pub fn topleft(&self) -> Vec2 {
        Vec2::new(self.x, self.y)
    }
    #[inline]
    pub fn bottomright(&self) -> Vec2 {
        Vec2::new(self.x + self.width, self.y + self.height)
    }
}
