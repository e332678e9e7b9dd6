//! Ordered traversal, postorder traversal and bulk clear

use core::iter::FusedIterator;
use core::ops::ControlFlow;

use rbindex_core::{Direction, NodeId};
use tracing::debug;

use crate::navigate;
use crate::store::NodeStore;
use crate::tree::RbTree;

/// In-order iterator over node handles
///
/// Created by [`RbTree::iter`]. Travels toward `dir` starting from the
/// opposite extreme, so `Right` is ascending order.
pub struct Iter<'a, S: ?Sized> {
    store: &'a S,
    next: Option<NodeId>,
    dir: Direction,
}

impl<'a, S: NodeStore + ?Sized> Iterator for Iter<'a, S> {
    type Item = NodeId;

    fn next(&mut self) -> Option<NodeId> {
        let current = self.next?;
        self.next = navigate::next(self.store, current, self.dir);
        Some(current)
    }
}

impl<'a, S: NodeStore + ?Sized> FusedIterator for Iter<'a, S> {}

/// Postorder iterator: every node comes after both of its children
///
/// Created by [`RbTree::postorder`].
pub struct Postorder<'a, S: ?Sized> {
    store: &'a S,
    next: Option<NodeId>,
}

impl<'a, S: NodeStore + ?Sized> Iterator for Postorder<'a, S> {
    type Item = NodeId;

    fn next(&mut self) -> Option<NodeId> {
        let current = self.next?;
        self.next = navigate::postorder_next(self.store, current);
        Some(current)
    }
}

impl<'a, S: NodeStore + ?Sized> FusedIterator for Postorder<'a, S> {}

impl RbTree {
    /// Iterate node handles in order, travelling toward `dir`
    pub fn iter<'a, S: NodeStore + ?Sized>(&self, store: &'a S, dir: Direction) -> Iter<'a, S> {
        Iter {
            store,
            next: self.extreme(dir.opposite()),
            dir,
        }
    }

    /// Visit each record in order until the visitor breaks
    ///
    /// The visitor receives the handle, the record and the direction of
    /// travel, so one visitor can serve both orders. Returns the visitor's `Break` value, or `Continue` once every node
    /// has been seen. The tree must not be modified during the walk.
    pub fn iterate<S, B, F>(&self, store: &S, dir: Direction, mut visitor: F) -> ControlFlow<B>
    where
        S: NodeStore + ?Sized,
        F: FnMut(NodeId, &S::Item, Direction) -> ControlFlow<B>,
    {
        for id in self.iter(store, dir) {
            if let ControlFlow::Break(value) = visitor(id, store.record(id), dir) {
                return ControlFlow::Break(value);
            }
        }
        ControlFlow::Continue(())
    }

    /// Iterate node handles in postorder
    pub fn postorder<'a, S: NodeStore + ?Sized>(&self, store: &'a S) -> Postorder<'a, S> {
        Postorder {
            store,
            next: self.root.map(|root| navigate::postorder_first(store, root)),
        }
    }

    /// Unlink every node without rebalancing and return how many there were
    ///
    /// Each node is reset to off-tree, so its record can be dropped or
    /// reused as soon as this returns.
    pub fn clear<S: NodeStore + ?Sized>(&mut self, store: &mut S) -> usize {
        let mut cursor = self.root.map(|root| navigate::postorder_first(store, root));
        let mut count = 0;

        while let Some(node) = cursor {
            cursor = navigate::postorder_next(store, node);
            store.node_mut(node).reset();
            count += 1;
        }

        *self = Self::new();
        debug!(count, "cleared tree");
        count
    }
}
