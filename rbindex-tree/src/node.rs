//! Embedded node linkage

use rbindex_core::{Color, Direction, NodeId};
use static_assertions::const_assert;

/// Where a node currently hangs
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub(crate) enum Parent {
    /// Not linked into any tree
    OffTree,
    /// Linked as the root of some tree
    Root,
    /// Linked below the given node
    Node(NodeId),
}

/// Red-black tree linkage embedded in a caller record
///
/// The tree only ever rewrites these fields; the surrounding record, and
/// its key, are never moved or copied. A fresh node is off-tree.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct RbNode {
    parent: Parent,
    child: [Option<NodeId>; 2],
    color: Color,
}

const_assert!(core::mem::size_of::<RbNode>() <= 32);

impl RbNode {
    /// Create an off-tree node
    pub const fn new() -> Self {
        Self {
            parent: Parent::OffTree,
            child: [None, None],
            color: Color::Red,
        }
    }

    /// Get the parent, `None` for the root and for off-tree nodes
    #[inline]
    pub fn parent(&self) -> Option<NodeId> {
        match self.parent {
            Parent::Node(parent) => Some(parent),
            Parent::Root | Parent::OffTree => None,
        }
    }

    /// Get the child on the given side
    #[inline]
    pub fn child(&self, dir: Direction) -> Option<NodeId> {
        self.child[dir.index()]
    }

    #[inline]
    pub fn left(&self) -> Option<NodeId> {
        self.child(Direction::Left)
    }

    #[inline]
    pub fn right(&self) -> Option<NodeId> {
        self.child(Direction::Right)
    }

    /// Get the color of this node
    #[inline]
    pub fn color(&self) -> Color {
        self.color
    }

    /// Check if node is red
    #[inline]
    pub fn is_red(&self) -> bool {
        self.color.is_red()
    }

    /// Check if node is black
    #[inline]
    pub fn is_black(&self) -> bool {
        self.color.is_black()
    }

    /// Check if node is the root of a tree
    #[inline]
    pub fn is_root(&self) -> bool {
        self.parent == Parent::Root
    }

    /// Check if node is not part of any tree
    #[inline]
    pub fn is_off_tree(&self) -> bool {
        self.parent == Parent::OffTree
    }

    #[inline]
    pub(crate) fn parent_slot(&self) -> Parent {
        self.parent
    }

    #[inline]
    pub(crate) fn set_parent(&mut self, parent: Parent) {
        self.parent = parent;
    }

    #[inline]
    pub(crate) fn set_child(&mut self, dir: Direction, child: Option<NodeId>) {
        self.child[dir.index()] = child;
    }

    #[inline]
    pub(crate) fn set_color(&mut self, color: Color) {
        self.color = color;
    }

    /// Link as a red leaf below `parent`
    #[inline]
    pub(crate) fn link_leaf(&mut self, parent: Parent) {
        self.parent = parent;
        self.child = [None, None];
        self.color = Color::Red;
    }

    /// Return to the off-tree state
    #[inline]
    pub(crate) fn reset(&mut self) {
        *self = Self::new();
    }
}

impl Default for RbNode {
    fn default() -> Self {
        Self::new()
    }
}

/// A caller record that embeds an [`RbNode`]
///
/// This is the downcast seam between linkage and record: the tree reads
/// keys only through the comparator, which receives whole records.
pub trait Linked {
    fn links(&self) -> &RbNode;
    fn links_mut(&mut self) -> &mut RbNode;
}

impl Linked for RbNode {
    fn links(&self) -> &RbNode {
        self
    }

    fn links_mut(&mut self) -> &mut RbNode {
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_node_is_off_tree() {
        let node = RbNode::new();
        assert!(node.is_off_tree());
        assert!(!node.is_root());
        assert_eq!(node.parent(), None);
        assert_eq!(node.left(), None);
        assert_eq!(node.right(), None);
        assert_eq!(node, RbNode::default());
    }

    #[test]
    fn test_rb_node_color() {
        let mut node = RbNode::new();
        assert_eq!(node.color(), Color::Red);

        node.set_color(Color::Black);
        assert_eq!(node.color(), Color::Black);
        assert!(node.is_black());

        node.set_color(Color::Red);
        assert!(node.is_red());
    }

    #[test]
    fn test_root_is_distinct_from_off_tree() {
        let mut node = RbNode::new();
        node.link_leaf(Parent::Root);
        assert!(node.is_root());
        assert!(!node.is_off_tree());
        assert_eq!(node.parent(), None);

        node.reset();
        assert!(node.is_off_tree());
    }

    #[test]
    fn test_rb_node_parent_and_children() {
        let mut node = RbNode::new();
        node.link_leaf(Parent::Node(NodeId(7)));
        node.set_child(Direction::Left, Some(NodeId(3)));
        node.set_child(Direction::Right, Some(NodeId(9)));

        assert_eq!(node.parent(), Some(NodeId(7)));
        assert_eq!(node.left(), Some(NodeId(3)));
        assert_eq!(node.child(Direction::Right), Some(NodeId(9)));
        assert!(!node.is_root());
    }
}
