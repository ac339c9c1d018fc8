use crate::{shape::AnyShape, AABBox, Fp, Result, Shape, Vec2};

/// Supplies the local-to-world mapping a shape folds its bounding box through.
pub trait Body {
    /// Applies the body's current rotation and translation to `local`. Must not mutate the body.
    fn get_global_pos(&self, local: Vec2) -> Vec2;
}

/// A rigid transform: rotation by `rot` radians about the local origin, then translation by `pos`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Transform {
    /// Posistion
    pub pos: Vec2,
    /// Rotation in radians
    pub rot: Fp,
}

impl Transform {
    #[inline]
    pub fn new(pos: Vec2, rot: Fp) -> Transform {
        Transform { pos, rot }
    }
    #[inline]
    pub fn identity() -> Transform {
        Transform::new(Vec2::new(0.0, 0.0), 0.0)
    }
    #[inline]
    pub fn from_translation(pos: Vec2) -> Transform {
        Transform::new(pos, 0.0)
    }
}

impl Default for Transform {
    fn default() -> Self {
        Transform::identity()
    }
}

impl Body for Transform {
    #[inline]
    fn get_global_pos(&self, local: Vec2) -> Vec2 {
        let (sin, cos) = self.rot.sin_cos();
        Vec2::new(local.x * cos - local.y * sin, local.x * sin + local.y * cos) + self.pos
    }
}

/// A body owning its attached shapes. Integration is left to the caller; this only keeps shapes in sync.
#[derive(Debug, Clone, Default)]
pub struct RigidBody {
    transform: Transform,
    /// Compositing shapes
    pub shapes: Vec<AnyShape>,
}

impl RigidBody {
    pub fn new(transform: Transform) -> RigidBody {
        RigidBody { transform, shapes: Vec::new() }
    }

    pub fn with_shape(mut self, shape: impl Into<AnyShape>) -> RigidBody {
        self.shapes.push(shape.into());
        self
    }

    #[inline]
    pub fn transform(&self) -> Transform {
        self.transform
    }

    pub fn set_transform(&mut self, transform: Transform) {
        //! Shape boxes go stale until `update_shapes` is called.
        self.transform = transform;
    }

    pub fn translate(&mut self, offset: Vec2) {
        //! Teleports the body. Shape boxes go stale until `update_shapes` is called.
        self.transform.pos += offset;
    }

    pub fn update_shapes(&mut self) -> Result<()> {
        //! Refolds every attached shape's bounding box against the current transform.
        //! Each shape is handed this body's transform, so the built-in shapes cannot fail here;
        //! an `Err` only comes from a shape's own `update` rejecting it, and stops at that shape.
        let transform = self.transform;
        for shape in self.shapes.iter_mut() {
            shape.update(Some(&transform))?;
        }
        Ok(())
    }

    pub fn get_aabbox(&self) -> AABBox {
        //! Union of the attached shapes' cached boxes. Reset if no shape has been updated.
        self.shapes.iter().fold(AABBox::new(), |mut acc, s| {
            acc.expand_to_box(&s.get_aabbox());
            acc
        })
    }
}

impl Body for RigidBody {
    #[inline]
    fn get_global_pos(&self, local: Vec2) -> Vec2 {
        self.transform.get_global_pos(local)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{PolyShape, Rect, RectShape};
    use approx::assert_relative_eq;

    #[cfg(feature = "f64")]
    use std::f64::consts::FRAC_PI_2;
    #[cfg(not(feature = "f64"))]
    use std::f32::consts::FRAC_PI_2;

    #[test]
    fn transform_apply() {
        let p = Vec2::new(1.0, 2.0);
        assert_eq!(Transform::identity().get_global_pos(p), p);
        assert_eq!(Transform::from_translation(Vec2::new(10.0, 5.0)).get_global_pos(p), Vec2::new(11.0, 7.0));

        // rotate (1, 0) to (0, 1), then translate
        let t = Transform::new(Vec2::new(10.0, 5.0), FRAC_PI_2);
        assert_relative_eq!(t.get_global_pos(Vec2::new(1.0, 0.0)), Vec2::new(10.0, 6.0), epsilon = 1e-6);
        assert_relative_eq!(t.get_global_pos(Vec2::new(0.0, 1.0)), Vec2::new(9.0, 5.0), epsilon = 1e-6);
    }

    #[test]
    fn body_shapes_follow_transform() {
        let mut body = RigidBody::new(Transform::identity())
            .with_shape(RectShape::from_rect(Rect::new(0.0, 0.0, 2.0, 1.0)))
            .with_shape(
                PolyShape::new(&[Vec2::new(3.0, 0.0), Vec2::new(4.0, 2.0), Vec2::new(2.0, 2.0)]).unwrap(),
            );
        assert!(body.get_aabbox().is_reset());

        body.update_shapes().unwrap();
        assert_eq!(body.get_aabbox(), AABBox::from_edges(0.0, 0.0, 4.0, 2.0));

        body.translate(Vec2::new(1.0, 1.0));
        assert_eq!(body.transform(), Transform::from_translation(Vec2::new(1.0, 1.0)));
        // stale until refreshed
        assert_eq!(body.get_aabbox(), AABBox::from_edges(0.0, 0.0, 4.0, 2.0));
        body.update_shapes().unwrap();
        assert_eq!(body.get_aabbox(), AABBox::from_edges(1.0, 1.0, 5.0, 3.0));

        body.set_transform(Transform::identity());
        body.update_shapes().unwrap();
        assert_eq!(body.shapes[0].get_aabbox(), AABBox::from_edges(0.0, 0.0, 2.0, 1.0));
    }

    #[test]
    fn update_shapes_with_builtin_shapes_is_ok() {
        assert!(RigidBody::default().update_shapes().is_ok());
        let mut body = RigidBody::new(Transform::new(Vec2::new(1.0, 2.0), 0.3))
            .with_shape(RectShape::from_rect(Rect::new(0.0, 0.0, 1.0, 1.0)))
            .with_shape(PolyShape::new(&[Vec2::new(0.0, 0.0), Vec2::new(1.0, 0.0), Vec2::new(0.0, 1.0)]).unwrap());
        assert!(body.update_shapes().is_ok());
        assert!(body.shapes.iter().all(|s| !s.get_aabbox().is_reset()));
    }

    #[test]
    fn body_is_a_body() {
        let body = RigidBody::new(Transform::from_translation(Vec2::new(-3.0, 4.0)));
        let mut shape = RectShape::from_rect(Rect::new(0.0, 0.0, 1.0, 1.0));
        shape.update(Some(&body)).unwrap();
        assert_eq!(shape.get_aabbox(), AABBox::from_edges(-3.0, 4.0, -2.0, 5.0));
    }
}
