//! Tree control block and the insert/extract/find entry points

use core::cmp::Ordering;

use rbindex_core::{Color, Direction, Mode, NodeId};
use tracing::trace;

use crate::navigate;
use crate::node::Parent;
use crate::store::NodeStore;

/// Red-black tree control block
///
/// Holds the root and the cached minimum and maximum. Nodes live in
/// caller-owned storage and are passed by handle; the tree never allocates.
/// The structure is not synchronized: at most one mutator may run at a
/// time and readers must be excluded while it does.
#[derive(Debug, PartialEq, Eq)]
pub struct RbTree {
    pub(crate) root: Option<NodeId>,
    /// Indexed by direction: `Left` is the minimum, `Right` the maximum
    pub(crate) extreme: [Option<NodeId>; 2],
}

// A copy would be a second control block over the same linked nodes
static_assertions::assert_not_impl_any!(RbTree: Clone, Copy);

/// Successful insertion
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct Inserted {
    /// The node became the cached minimum
    pub new_minimum: bool,
    /// The node became the cached maximum
    pub new_maximum: bool,
}

/// Insertion rejected in [`Mode::Unique`]; carries the equal node already linked
#[derive(Debug, Copy, Clone, PartialEq, Eq, thiserror::Error)]
#[error("node {0} already holds an equal key")]
pub struct Conflict(pub NodeId);

impl RbTree {
    /// Create a new empty tree
    pub const fn new() -> Self {
        Self {
            root: None,
            extreme: [None, None],
        }
    }

    /// Create a tree whose only node is `node`
    pub fn initialize_one<S: NodeStore + ?Sized>(store: &mut S, node: NodeId) -> Self {
        debug_assert!(store.node(node).is_off_tree(), "node {node} is already in a tree");
        let links = store.node_mut(node);
        links.link_leaf(Parent::Root);
        links.set_color(Color::Black);
        Self {
            root: Some(node),
            extreme: [Some(node), Some(node)],
        }
    }

    /// Check if tree is empty
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.root.is_none()
    }

    #[inline]
    pub fn root(&self) -> Option<NodeId> {
        self.root
    }

    /// Cached minimum, O(1)
    #[inline]
    pub fn min(&self) -> Option<NodeId> {
        self.extreme(Direction::Left)
    }

    /// Cached maximum, O(1)
    #[inline]
    pub fn max(&self) -> Option<NodeId> {
        self.extreme(Direction::Right)
    }

    /// Cached extreme on the given side: `Left` is the minimum
    #[inline]
    pub fn extreme(&self, dir: Direction) -> Option<NodeId> {
        self.extreme[dir.index()]
    }

    /// Check if `node` is linked into this tree
    ///
    /// Walks parent links up to the root, so this is O(log n). Meant for
    /// diagnostics and assertions.
    pub fn contains<S: NodeStore + ?Sized>(&self, store: &S, node: NodeId) -> bool {
        self.root.is_some() && navigate::root_of(store, node) == self.root
    }

    /// Find a node comparing equal to `key`
    ///
    /// In [`Mode::Multiset`] the first equal node in order is returned,
    /// which is the earliest inserted of its run.
    pub fn find<S, K, F>(&self, store: &S, key: &K, mut cmp: F, mode: Mode) -> Option<NodeId>
    where
        S: NodeStore + ?Sized,
        K: ?Sized,
        F: FnMut(&K, &S::Item) -> Ordering,
    {
        let mut found = None;
        let mut cursor = self.root;

        while let Some(current) = cursor {
            let links = store.node(current);
            cursor = match cmp(key, store.record(current)) {
                Ordering::Less => links.left(),
                Ordering::Greater => links.right(),
                Ordering::Equal => {
                    if mode.is_unique() {
                        return Some(current);
                    }
                    found = Some(current);
                    links.left()
                }
            };
        }

        found
    }

    /// Insert the off-tree node `node`
    ///
    /// Equal keys descend to the right, so a duplicate lands after every
    /// node it ties with. In [`Mode::Unique`] an equal key aborts the
    /// insertion, leaving `node` off-tree, and the existing node is
    /// returned in the [`Conflict`].
    pub fn insert<S, F>(
        &mut self,
        store: &mut S,
        node: NodeId,
        mut cmp: F,
        mode: Mode,
    ) -> Result<Inserted, Conflict>
    where
        S: NodeStore + ?Sized,
        F: FnMut(&S::Item, &S::Item) -> Ordering,
    {
        debug_assert!(store.node(node).is_off_tree(), "node {node} is already in a tree");

        let mut parent = Parent::Root;
        let mut dir = Direction::Left;
        let mut cursor = self.root;
        let mut leftmost = true;
        let mut rightmost = true;

        while let Some(current) = cursor {
            match cmp(store.record(node), store.record(current)) {
                Ordering::Less => {
                    dir = Direction::Left;
                    rightmost = false;
                }
                Ordering::Equal if mode.is_unique() => {
                    trace!(%node, existing = %current, "insert rejected");
                    return Err(Conflict(current));
                }
                Ordering::Equal | Ordering::Greater => {
                    dir = Direction::Right;
                    leftmost = false;
                }
            }
            parent = Parent::Node(current);
            cursor = store.node(current).child(dir);
        }

        store.node_mut(node).link_leaf(parent);
        match parent {
            Parent::Node(p) => store.node_mut(p).set_child(dir, Some(node)),
            Parent::Root | Parent::OffTree => self.root = Some(node),
        }

        // Rotations never change which node is first or last in order
        if leftmost {
            self.extreme[Direction::Left.index()] = Some(node);
        }
        if rightmost {
            self.extreme[Direction::Right.index()] = Some(node);
        }

        self.insert_fixup(store, node);

        Ok(Inserted {
            new_minimum: leftmost,
            new_maximum: rightmost,
        })
    }

    /// Remove `node`, which must be linked into this tree
    ///
    /// A node with two children is replaced by its in-order successor: the
    /// successor's links are moved into the vacated position, records are
    /// never copied. `node` is off-tree on return.
    pub fn extract<S: NodeStore + ?Sized>(&mut self, store: &mut S, node: NodeId) {
        debug_assert!(self.contains(store, node), "node {node} is not in this tree");

        for dir in Direction::ALL {
            if self.extreme[dir.index()] == Some(node) {
                self.extreme[dir.index()] = navigate::next(store, node, dir.opposite());
            }
        }

        let links = *store.node(node);
        let parent_slot = links.parent_slot();

        let (child, parent, removed_color) = match (links.left(), links.right()) {
            (Some(left), Some(right)) => {
                let mut successor = right;
                let mut successor_parent = node;
                while let Some(next) = store.node(successor).left() {
                    successor_parent = successor;
                    successor = next;
                }

                let removed_color = store.node(successor).color();
                let child = store.node(successor).right();

                let parent = if successor == right {
                    successor
                } else {
                    store.node_mut(successor_parent).set_child(Direction::Left, child);
                    if let Some(child) = child {
                        store.node_mut(child).set_parent(Parent::Node(successor_parent));
                    }
                    store.node_mut(successor).set_child(Direction::Right, Some(right));
                    store.node_mut(right).set_parent(Parent::Node(successor));
                    successor_parent
                };

                self.replace_child(store, parent_slot, node, Some(successor));
                let moved = store.node_mut(successor);
                moved.set_parent(parent_slot);
                moved.set_child(Direction::Left, Some(left));
                moved.set_color(links.color());
                store.node_mut(left).set_parent(Parent::Node(successor));

                (child, Some(parent), removed_color)
            }
            _ => {
                let child = links.left().or(links.right());
                self.replace_child(store, parent_slot, node, child);
                if let Some(child) = child {
                    store.node_mut(child).set_parent(parent_slot);
                }
                (child, links.parent(), links.color())
            }
        };

        store.node_mut(node).reset();

        if removed_color.is_black() {
            self.extract_fixup(store, child, parent);
        }

        trace!(%node, "extracted");
    }

    /// Extract and return the cached extreme on side `dir`
    pub fn pop<S: NodeStore + ?Sized>(&mut self, store: &mut S, dir: Direction) -> Option<NodeId> {
        let node = self.extreme(dir)?;
        self.extract(store, node);
        Some(node)
    }

    /// Extract and return the minimum
    pub fn pop_min<S: NodeStore + ?Sized>(&mut self, store: &mut S) -> Option<NodeId> {
        self.pop(store, Direction::Left)
    }

    /// Extract and return the maximum
    pub fn pop_max<S: NodeStore + ?Sized>(&mut self, store: &mut S) -> Option<NodeId> {
        self.pop(store, Direction::Right)
    }

    /// Put the off-tree node `replacement` exactly where `victim` is
    ///
    /// The replacement inherits the victim's parent, children, color and
    /// extreme role; no rebalancing happens. It must order the same as the
    /// victim relative to every other node. `victim` is off-tree on return.
    pub fn replace_node<S: NodeStore + ?Sized>(
        &mut self,
        store: &mut S,
        victim: NodeId,
        replacement: NodeId,
    ) {
        debug_assert!(
            store.node(replacement).is_off_tree(),
            "node {replacement} is already in a tree"
        );

        let links = *store.node(victim);
        self.replace_child(store, links.parent_slot(), victim, Some(replacement));

        for dir in Direction::ALL {
            if let Some(child) = links.child(dir) {
                store.node_mut(child).set_parent(Parent::Node(replacement));
            }
            if self.extreme[dir.index()] == Some(victim) {
                self.extreme[dir.index()] = Some(replacement);
            }
        }

        *store.node_mut(replacement) = links;
        store.node_mut(victim).reset();
    }
}

impl Default for RbTree {
    fn default() -> Self {
        Self::new()
    }
}
