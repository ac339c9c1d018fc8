//! Body registry running the per-step shape refresh and publishing boxes to a broad-phase.

use crate::{error::ShapeError, AABBox, Result, RigidBody, Shape, Transform};
use fnv::FnvBuildHasher;
use indexmap::IndexMap;
use tracing::debug;

/// Identifies a body within a [`Space`]. Never reused after removal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct BodyHandle(u64);

/// Owns bodies in insertion order. Performs no pair finding; consumers read [`Space::aabboxes`].
#[derive(Debug, Default)]
pub struct Space {
    bodies: IndexMap<BodyHandle, RigidBody, FnvBuildHasher>,
    next: u64,
}

impl Space {
    pub fn new() -> Space {
        Space::default()
    }

    pub fn insert(&mut self, body: RigidBody) -> BodyHandle {
        let handle = BodyHandle(self.next);
        self.next += 1;
        debug!(?handle, shapes = body.shapes.len(), "body inserted");
        self.bodies.insert(handle, body);
        handle
    }

    pub fn remove(&mut self, handle: BodyHandle) -> Option<RigidBody> {
        // shift, not swap: update order must stay insertion order
        let body = self.bodies.shift_remove(&handle);
        if body.is_some() {
            debug!(?handle, "body removed");
        }
        body
    }

    #[inline]
    pub fn get(&self, handle: BodyHandle) -> Option<&RigidBody> {
        self.bodies.get(&handle)
    }
    #[inline]
    pub fn get_mut(&mut self, handle: BodyHandle) -> Option<&mut RigidBody> {
        self.bodies.get_mut(&handle)
    }
    #[inline]
    pub fn len(&self) -> usize {
        self.bodies.len()
    }
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.bodies.is_empty()
    }

    pub fn set_transform(&mut self, handle: BodyHandle, transform: Transform) -> Result<()> {
        //! Moves a body. Its shape boxes go stale until `update_shapes` is called.
        match self.bodies.get_mut(&handle) {
            Some(body) => {
                body.set_transform(transform);
                Ok(())
            }
            None => Err(ShapeError::invalid(format!("unknown body {:?}", handle))),
        }
    }

    pub fn update_shapes(&mut self) -> Result<()> {
        //! Refreshes every shape of every body, in insertion order. Run after moving bodies, before broad-phase queries.
        //! Fails only where `RigidBody::update_shapes` does, which the built-in shapes never do.
        for body in self.bodies.values_mut() {
            body.update_shapes()?;
        }
        Ok(())
    }

    pub fn aabboxes(&self) -> impl Iterator<Item = (BodyHandle, usize, AABBox)> + '_ {
        //! Every shape's cached world box, tagged with its body and index within that body.
        self.bodies.iter().flat_map(|(&handle, body)| {
            body.shapes.iter().enumerate().map(move |(i, s)| (handle, i, s.get_aabbox()))
        })
    }
}
