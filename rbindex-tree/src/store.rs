//! Caller-owned node storage
//!
//! The tree holds only [`NodeId`] handles. Every operation borrows the
//! storage that owns the records, the same discipline as a slab: all calls
//! on one tree must pass the same storage instance.

use rbindex_core::NodeId;

use crate::node::{Linked, RbNode};

/// Storage that resolves node handles to caller records
///
/// Resolving a handle that is not occupied is a programmer error and
/// panics, like indexing a slice out of bounds.
pub trait NodeStore {
    /// Record type embedding the linkage
    type Item: Linked;

    /// Get the record behind `id`
    fn record(&self, id: NodeId) -> &Self::Item;

    /// Get the record behind `id` mutably
    fn record_mut(&mut self, id: NodeId) -> &mut Self::Item;

    /// Get the linkage of the record behind `id`
    #[inline]
    fn node(&self, id: NodeId) -> &RbNode {
        self.record(id).links()
    }

    /// Get the linkage of the record behind `id` mutably
    #[inline]
    fn node_mut(&mut self, id: NodeId) -> &mut RbNode {
        self.record_mut(id).links_mut()
    }
}

impl<T: Linked> NodeStore for [T] {
    type Item = T;

    #[inline]
    fn record(&self, id: NodeId) -> &T {
        &self[id.index()]
    }

    #[inline]
    fn record_mut(&mut self, id: NodeId) -> &mut T {
        &mut self[id.index()]
    }
}

impl<T: Linked, const N: usize> NodeStore for [T; N] {
    type Item = T;

    #[inline]
    fn record(&self, id: NodeId) -> &T {
        &self[id.index()]
    }

    #[inline]
    fn record_mut(&mut self, id: NodeId) -> &mut T {
        &mut self[id.index()]
    }
}

#[cfg(feature = "alloc")]
impl<T: Linked> NodeStore for alloc::vec::Vec<T> {
    type Item = T;

    #[inline]
    fn record(&self, id: NodeId) -> &T {
        &self[id.index()]
    }

    #[inline]
    fn record_mut(&mut self, id: NodeId) -> &mut T {
        &mut self[id.index()]
    }
}

#[cfg(feature = "slab")]
impl<T: Linked> NodeStore for slab::Slab<T> {
    type Item = T;

    #[inline]
    fn record(&self, id: NodeId) -> &T {
        &self[id.index()]
    }

    #[inline]
    fn record_mut(&mut self, id: NodeId) -> &mut T {
        &mut self[id.index()]
    }
}
