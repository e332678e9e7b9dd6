//! Building a tree from many records at once

use core::cmp::Ordering;

use rbindex_core::{Mode, NodeId};
use tracing::debug;

use crate::node::Linked;
use crate::store::NodeStore;
use crate::tree::RbTree;

impl RbTree {
    /// Link the nodes named by `ids`, in iteration order, into a new tree
    ///
    /// The result equals inserting each node one by one. In
    /// [`Mode::Unique`] a node equal to one already linked stays off-tree.
    pub fn initialize<S, I, F>(store: &mut S, ids: I, mut cmp: F, mode: Mode) -> Self
    where
        S: NodeStore + ?Sized,
        I: IntoIterator<Item = NodeId>,
        F: FnMut(&S::Item, &S::Item) -> Ordering,
    {
        let mut tree = Self::new();
        let mut linked = 0usize;
        let mut rejected = 0usize;

        for id in ids {
            match tree.insert(store, id, &mut cmp, mode) {
                Ok(_) => linked += 1,
                Err(_) => rejected += 1,
            }
        }

        debug!(linked, rejected, ?mode, "initialized tree");
        tree
    }

    /// Build a tree over every record of a contiguous array
    ///
    /// Handle `i` names `items[i]`.
    pub fn from_slice<T, F>(items: &mut [T], cmp: F, mode: Mode) -> Self
    where
        T: Linked,
        F: FnMut(&T, &T) -> Ordering,
    {
        let len = items.len();
        Self::initialize(items, (0..len).map(NodeId::new), cmp, mode)
    }
}
