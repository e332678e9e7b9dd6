//! Rotation primitive and red-black fixups
//!
//! Every case is written once for a generic [`Direction`]; the mirrored
//! case is the same code with the direction flipped.

use rbindex_core::{Color, Direction, NodeId};

use crate::node::Parent;
use crate::store::NodeStore;
use crate::tree::RbTree;

/// Color of a possibly absent node; absent leaves are black
#[inline]
pub(crate) fn color_of<S: NodeStore + ?Sized>(store: &S, node: Option<NodeId>) -> Color {
    match node {
        Some(id) => store.node(id).color(),
        None => Color::Black,
    }
}

#[inline]
pub(crate) fn is_red<S: NodeStore + ?Sized>(store: &S, node: Option<NodeId>) -> bool {
    color_of(store, node).is_red()
}

/// Side on which `node` hangs below `parent`
#[inline]
pub(crate) fn side_of<S: NodeStore + ?Sized>(store: &S, parent: NodeId, node: NodeId) -> Direction {
    if store.node(parent).left() == Some(node) {
        Direction::Left
    } else {
        Direction::Right
    }
}

impl RbTree {
    /// Point whatever referenced `old` from above at `new` instead
    ///
    /// `parent` is the parent slot `old` had. Only the downward link is
    /// rewritten; the caller fixes `new`'s own parent slot.
    pub(crate) fn replace_child<S: NodeStore + ?Sized>(
        &mut self,
        store: &mut S,
        parent: Parent,
        old: NodeId,
        new: Option<NodeId>,
    ) {
        match parent {
            Parent::Node(p) => {
                let dir = side_of(store, p, old);
                store.node_mut(p).set_child(dir, new);
            }
            Parent::Root => self.root = new,
            Parent::OffTree => debug_assert!(false, "node {old} is not in a tree"),
        }
    }

    /// Rotate `node` toward `dir`
    ///
    /// The child on the opposite side takes `node`'s place and `node`
    /// becomes its child on side `dir`. Colors and extremes are untouched.
    pub(crate) fn rotate<S: NodeStore + ?Sized>(&mut self, store: &mut S, node: NodeId, dir: Direction) {
        let opp = dir.opposite();
        let Some(pivot) = store.node(node).child(opp) else {
            debug_assert!(false, "rotation of {node} without a {opp} child");
            return;
        };

        let inner = store.node(pivot).child(dir);
        store.node_mut(node).set_child(opp, inner);
        if let Some(inner) = inner {
            store.node_mut(inner).set_parent(Parent::Node(node));
        }

        let parent = store.node(node).parent_slot();
        store.node_mut(pivot).set_parent(parent);
        self.replace_child(store, parent, node, Some(pivot));

        store.node_mut(pivot).set_child(dir, Some(node));
        store.node_mut(node).set_parent(Parent::Node(pivot));
    }

    /// Restore the red-black invariants after linking the red leaf `node`
    pub(crate) fn insert_fixup<S: NodeStore + ?Sized>(&mut self, store: &mut S, mut node: NodeId) {
        while let Some(parent) = store.node(node).parent() {
            if store.node(parent).is_black() {
                break;
            }

            // A red parent is never the root
            let Some(grandparent) = store.node(parent).parent() else {
                store.node_mut(parent).set_color(Color::Black);
                break;
            };

            let dir = side_of(store, grandparent, parent);
            let uncle = store.node(grandparent).child(dir.opposite());

            if let Some(uncle) = uncle.filter(|&u| store.node(u).is_red()) {
                store.node_mut(parent).set_color(Color::Black);
                store.node_mut(uncle).set_color(Color::Black);
                store.node_mut(grandparent).set_color(Color::Red);
                node = grandparent;
                continue;
            }

            let mut top = parent;
            if side_of(store, parent, node) != dir {
                self.rotate(store, parent, dir);
                top = node;
            }

            store.node_mut(top).set_color(Color::Black);
            store.node_mut(grandparent).set_color(Color::Red);
            self.rotate(store, grandparent, dir.opposite());
            break;
        }

        if let Some(root) = self.root {
            store.node_mut(root).set_color(Color::Black);
        }
    }

    /// Restore the black height after a black node was unlinked
    ///
    /// `node` is the child promoted into the removed slot (possibly
    /// absent) and `parent` is the node that slot hangs from.
    pub(crate) fn extract_fixup<S: NodeStore + ?Sized>(
        &mut self,
        store: &mut S,
        mut node: Option<NodeId>,
        mut parent: Option<NodeId>,
    ) {
        while !is_red(store, node) {
            let Some(p) = parent else {
                break;
            };

            let dir = if store.node(p).left() == node {
                Direction::Left
            } else {
                Direction::Right
            };
            let far = dir.opposite();

            // The sibling carries the black height we lost, so it exists
            let Some(mut sibling) = store.node(p).child(far) else {
                debug_assert!(false, "black deficit under {p} without a sibling");
                break;
            };

            if store.node(sibling).is_red() {
                store.node_mut(sibling).set_color(Color::Black);
                store.node_mut(p).set_color(Color::Red);
                self.rotate(store, p, dir);
                let Some(next) = store.node(p).child(far) else {
                    break;
                };
                sibling = next;
            }

            let near_nephew = store.node(sibling).child(dir);
            let far_nephew = store.node(sibling).child(far);

            if !is_red(store, near_nephew) && !is_red(store, far_nephew) {
                store.node_mut(sibling).set_color(Color::Red);
                node = Some(p);
                parent = store.node(p).parent();
                continue;
            }

            if !is_red(store, far_nephew) {
                if let Some(near) = near_nephew {
                    store.node_mut(near).set_color(Color::Black);
                }
                store.node_mut(sibling).set_color(Color::Red);
                self.rotate(store, sibling, far);
                let Some(next) = store.node(p).child(far) else {
                    break;
                };
                sibling = next;
            }

            let parent_color = store.node(p).color();
            store.node_mut(sibling).set_color(parent_color);
            store.node_mut(p).set_color(Color::Black);
            if let Some(far_nephew) = store.node(sibling).child(far) {
                store.node_mut(far_nephew).set_color(Color::Black);
            }
            self.rotate(store, p, dir);
            node = self.root;
            break;
        }

        if let Some(node) = node {
            store.node_mut(node).set_color(Color::Black);
        }
    }
}
