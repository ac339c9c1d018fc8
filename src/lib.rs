//! Shape primitives for a 2D rigid-body engine, and the bounding box protocol a broad-phase relies on.
//!
//! Shapes keep their geometry in body-local space. After a body moves, the physics step calls
//! [`Shape::update`] on each attached shape, which maps the local vertices through the body's
//! transform and re-folds its cached [`AABBox`]. A collision system then reads
//! [`Shape::get_aabbox`] and [`Shape::get_vertices`].
//!
//! Coordinates are in screen orientation: y grows downward, so an `AABBox`'s `top` is its minimum y.

pub mod aabbox;
pub mod body;
pub mod error;
pub mod rect;
pub mod shape;
pub mod space;

#[cfg(feature = "f64")]
pub type Fp = f64;
#[cfg(feature = "f64")]
pub type Vec2 = glam::DVec2;

#[cfg(not(feature = "f64"))]
pub type Fp = f32;
#[cfg(not(feature = "f64"))]
pub type Vec2 = glam::Vec2;

pub use aabbox::AABBox;
pub use body::{Body, RigidBody, Transform};
pub use error::{Result, ShapeError};
pub use rect::Rect;
pub use shape::{AnyShape, PolyShape, RectShape, Shape, ShapeType};
pub use space::{BodyHandle, Space};
