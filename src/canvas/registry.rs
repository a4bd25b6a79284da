//! Identity-keyed, insertion-ordered registry of paint operations.

use super::error::CanvasError;
use crate::draw::PaintOp;
use std::sync::atomic::{AtomicU64, Ordering};

/// Opaque identity of a registered shape.
///
/// Two shapes with identical geometry are still distinct entries when their
/// ids differ. Ids are allocated once per shape object and survive
/// remove/re-add cycles, mirroring object identity in the original design.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct ShapeId(u64);

impl ShapeId {
    /// Allocates a fresh, process-unique identity.
    pub fn fresh() -> Self {
        static NEXT: AtomicU64 = AtomicU64::new(0);
        Self(NEXT.fetch_add(1, Ordering::Relaxed))
    }
}

/// Insertion-ordered mapping from shape identity to its paint operation.
///
/// Iteration order is paint order: the first entry added is bottom-most.
/// The registry is pure in-memory state with no locking of its own; the
/// canvas façade serializes every mutation and traversal.
#[derive(Debug, Default)]
pub struct Registry {
    entries: Vec<(ShapeId, PaintOp)>,
}

impl Registry {
    /// Creates an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Inserts an entry at the end of the paint order.
    ///
    /// Fails with [`CanvasError::DuplicateEntry`] when the identity is
    /// already registered; there is no implicit overwrite.
    pub fn add(&mut self, id: ShapeId, op: PaintOp) -> Result<(), CanvasError> {
        if self.contains(id) {
            return Err(CanvasError::DuplicateEntry);
        }
        self.entries.push((id, op));
        Ok(())
    }

    /// Removes an entry, preserving the relative order of the rest.
    ///
    /// Fails with [`CanvasError::NotFound`] when the identity is absent.
    pub fn remove(&mut self, id: ShapeId) -> Result<(), CanvasError> {
        let index = self
            .entries
            .iter()
            .position(|(entry_id, _)| *entry_id == id)
            .ok_or(CanvasError::NotFound)?;
        self.entries.remove(index);
        Ok(())
    }

    /// Drops every entry.
    pub fn clear(&mut self) {
        self.entries.clear();
    }

    /// Whether the identity is currently registered.
    pub fn contains(&self, id: ShapeId) -> bool {
        self.entries.iter().any(|(entry_id, _)| *entry_id == id)
    }

    /// Number of registered entries.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the registry is empty.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Paint operations in insertion order (bottom-most first).
    pub fn paint_ops(&self) -> impl Iterator<Item = &PaintOp> {
        self.entries.iter().map(|(_, op)| op)
    }

    /// Identities in insertion order.
    pub fn ids(&self) -> impl Iterator<Item = ShapeId> + '_ {
        self.entries.iter().map(|(id, _)| *id)
    }
}
