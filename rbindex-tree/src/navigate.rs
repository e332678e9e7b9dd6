//! Structural navigation: in-order neighbours, subtree extremes, postorder

use rbindex_core::{Direction, NodeId};

use crate::node::Parent;
use crate::store::NodeStore;

/// Walk from `top` toward `dir` as far as the links go
///
/// `Left` yields the minimum of the subtree rooted at `top`.
pub fn first_in_subtree<S: NodeStore + ?Sized>(store: &S, top: NodeId, dir: Direction) -> NodeId {
    let mut node = top;
    while let Some(child) = store.node(node).child(dir) {
        node = child;
    }
    node
}

/// In-order neighbour of `node` in direction `dir`
///
/// `Right` is the successor and `Left` the predecessor. Works from the
/// links alone, no tree or comparator needed. `None` past the extreme.
pub fn next<S: NodeStore + ?Sized>(store: &S, node: NodeId, dir: Direction) -> Option<NodeId> {
    if let Some(child) = store.node(node).child(dir) {
        return Some(first_in_subtree(store, child, dir.opposite()));
    }

    // Climb while we are the `dir` child; the first ancestor reached from
    // the other side is the neighbour
    let mut current = node;
    let mut parent = store.node(current).parent();
    while let Some(p) = parent {
        if store.node(p).child(dir) != Some(current) {
            return Some(p);
        }
        current = p;
        parent = store.node(p).parent();
    }
    None
}

/// In-order successor of `node`
#[inline]
pub fn successor<S: NodeStore + ?Sized>(store: &S, node: NodeId) -> Option<NodeId> {
    next(store, node, Direction::Right)
}

/// In-order predecessor of `node`
#[inline]
pub fn predecessor<S: NodeStore + ?Sized>(store: &S, node: NodeId) -> Option<NodeId> {
    next(store, node, Direction::Left)
}

/// Root of the tree `node` is linked into, `None` when off-tree
///
/// Compare the result with [`RbTree::root`](crate::RbTree::root) to find
/// which tree owns a node.
pub fn root_of<S: NodeStore + ?Sized>(store: &S, node: NodeId) -> Option<NodeId> {
    let mut current = node;
    loop {
        match store.node(current).parent_slot() {
            Parent::OffTree => return None,
            Parent::Root => return Some(current),
            Parent::Node(parent) => current = parent,
        }
    }
}

/// First node of a postorder walk below `top`: the leftmost leaf
pub(crate) fn postorder_first<S: NodeStore + ?Sized>(store: &S, top: NodeId) -> NodeId {
    let mut node = top;
    loop {
        let links = store.node(node);
        match (links.left(), links.right()) {
            (Some(left), _) => node = left,
            (None, Some(right)) => node = right,
            (None, None) => return node,
        }
    }
}

/// Postorder successor of `node`
///
/// Reads only `node`'s parent and that parent's children, so `node`'s own
/// links may be discarded once this returns.
pub(crate) fn postorder_next<S: NodeStore + ?Sized>(store: &S, node: NodeId) -> Option<NodeId> {
    let parent = store.node(node).parent()?;
    let links = store.node(parent);
    match links.right() {
        Some(right) if links.left() == Some(node) => Some(postorder_first(store, right)),
        _ => Some(parent),
    }
}
