//! Tree shapes left behind by the seeded random walk
//!
//! For every node count the walk in [`random_ops`](crate::helpers::random_ops)
//! is deterministic, so the final tree is too. These tables list the linked
//! records in ascending order with their parent, children and color, and pin
//! the balancing down case by case.

use rbindex_tree::{Color, Direction, Mode, NodeId, RbTree};

use crate::helpers::TestNode;

/// Linkage of one record as seen from an in-order walk
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NodeShape {
    pub key: u32,
    pub parent: Option<NodeId>,
    pub left: Option<NodeId>,
    pub right: Option<NodeId>,
    pub color: Color,
}

impl NodeShape {
    /// Shape of a linked record
    pub fn of(record: &TestNode) -> Self {
        Self {
            key: record.key,
            parent: record.node.parent(),
            left: record.node.left(),
            right: record.node.right(),
            color: record.node.color(),
        }
    }
}

/// In-order shapes of every linked record
pub fn shapes(tree: &RbTree, nodes: &[TestNode]) -> Vec<NodeShape> {
    tree.iter(nodes, Direction::Right)
        .map(|id| NodeShape::of(&nodes[id.index()]))
        .collect()
}

/// Expected shape after the default-seeded walk over `n` records
///
/// `None` outside `1..=31`.
pub fn random_walk_shape(n: usize, mode: Mode) -> Option<&'static [NodeShape]> {
    let table = if mode.is_unique() { &UNIQUE } else { &MULTISET };
    n.checked_sub(1).and_then(|i| table.get(i)).copied()
}

const NIL: Option<NodeId> = None;
const R: Color = Color::Red;
const B: Color = Color::Black;

const fn tn(index: u32) -> Option<NodeId> {
    Some(NodeId(index))
}

const fn node(
    key: u32,
    parent: Option<NodeId>,
    left: Option<NodeId>,
    right: Option<NodeId>,
    color: Color,
) -> NodeShape {
    NodeShape {
        key,
        parent,
        left,
        right,
        color,
    }
}

/// Record `i` carries key `i`; indexed by node count minus one
#[rustfmt::skip]
static UNIQUE: [&[NodeShape]; 31] = [
    // 1
    &[
        node(0, NIL, NIL, NIL, B),
    ],
    // 2
    &[],
    // 3
    &[
        node(2, NIL, NIL, NIL, B),
    ],
    // 4
    &[
        node(0, tn(3), NIL, NIL, R),
        node(3, NIL, tn(0), NIL, B),
    ],
    // 5
    &[
        node(0, tn(1), NIL, NIL, R),
        node(1, NIL, tn(0), tn(4), B),
        node(4, tn(1), NIL, NIL, R),
    ],
    // 6
    &[
        node(0, tn(2), NIL, NIL, R),
        node(2, NIL, tn(0), NIL, B),
    ],
    // 7
    &[
        node(0, tn(2), NIL, tn(1), B),
        node(1, tn(0), NIL, NIL, R),
        node(2, NIL, tn(0), tn(5), B),
        node(4, tn(5), NIL, NIL, R),
        node(5, tn(2), tn(4), NIL, B),
    ],
    // 8
    &[
        node(0, tn(1), NIL, NIL, B),
        node(1, NIL, tn(0), tn(6), B),
        node(5, tn(6), NIL, NIL, R),
        node(6, tn(1), tn(5), NIL, B),
    ],
    // 9
    &[
        node(1, tn(2), NIL, NIL, B),
        node(2, tn(6), tn(1), tn(4), R),
        node(4, tn(2), NIL, tn(5), B),
        node(5, tn(4), NIL, NIL, R),
        node(6, NIL, tn(2), tn(7), B),
        node(7, tn(6), NIL, tn(8), B),
        node(8, tn(7), NIL, NIL, R),
    ],
    // 10
    &[
        node(0, tn(2), NIL, NIL, B),
        node(2, tn(6), tn(0), tn(4), R),
        node(3, tn(4), NIL, NIL, R),
        node(4, tn(2), tn(3), NIL, B),
        node(6, NIL, tn(2), tn(8), B),
        node(8, tn(6), NIL, NIL, B),
    ],
    // 11
    &[
        node(2, tn(6), NIL, NIL, B),
        node(6, NIL, tn(2), tn(8), B),
        node(7, tn(8), NIL, NIL, R),
        node(8, tn(6), tn(7), tn(9), B),
        node(9, tn(8), NIL, NIL, R),
    ],
    // 12
    &[
        node(0, tn(1), NIL, NIL, R),
        node(1, tn(3), tn(0), tn(2), B),
        node(2, tn(1), NIL, NIL, R),
        node(3, tn(5), tn(1), tn(4), R),
        node(4, tn(3), NIL, NIL, B),
        node(5, NIL, tn(3), tn(9), B),
        node(9, tn(5), NIL, tn(11), B),
        node(11, tn(9), NIL, NIL, R),
    ],
    // 13
    &[
        node(0, tn(1), NIL, NIL, R),
        node(1, tn(3), tn(0), NIL, B),
        node(3, tn(8), tn(1), tn(5), R),
        node(4, tn(5), NIL, NIL, R),
        node(5, tn(3), tn(4), tn(6), B),
        node(6, tn(5), NIL, NIL, R),
        node(8, NIL, tn(3), tn(11), B),
        node(10, tn(11), NIL, NIL, R),
        node(11, tn(8), tn(10), NIL, B),
    ],
    // 14
    &[
        node(3, tn(5), NIL, NIL, R),
        node(5, tn(6), tn(3), NIL, B),
        node(6, NIL, tn(5), tn(12), B),
        node(8, tn(12), NIL, NIL, B),
        node(12, tn(6), tn(8), tn(13), R),
        node(13, tn(12), NIL, NIL, B),
    ],
    // 15
    &[
        node(0, tn(2), NIL, NIL, R),
        node(2, tn(8), tn(0), tn(7), B),
        node(7, tn(2), NIL, NIL, R),
        node(8, NIL, tn(2), tn(12), B),
        node(9, tn(12), NIL, tn(10), B),
        node(10, tn(9), NIL, NIL, R),
        node(12, tn(8), tn(9), tn(13), R),
        node(13, tn(12), NIL, tn(14), B),
        node(14, tn(13), NIL, NIL, R),
    ],
    // 16
    &[
        node(0, tn(5), NIL, tn(3), B),
        node(3, tn(0), NIL, NIL, R),
        node(5, tn(10), tn(0), tn(7), R),
        node(7, tn(5), NIL, NIL, B),
        node(10, NIL, tn(5), tn(12), B),
        node(12, tn(10), NIL, NIL, B),
    ],
    // 17
    &[
        node(0, tn(1), NIL, NIL, R),
        node(1, tn(3), tn(0), NIL, B),
        node(3, tn(7), tn(1), tn(5), R),
        node(4, tn(5), NIL, NIL, R),
        node(5, tn(3), tn(4), NIL, B),
        node(7, NIL, tn(3), tn(9), B),
        node(8, tn(9), NIL, NIL, B),
        node(9, tn(7), tn(8), tn(16), R),
        node(16, tn(9), NIL, NIL, B),
    ],
    // 18
    &[
        node(0, tn(2), NIL, tn(1), B),
        node(1, tn(0), NIL, NIL, R),
        node(2, tn(4), tn(0), tn(3), B),
        node(3, tn(2), NIL, NIL, B),
        node(4, NIL, tn(2), tn(12), B),
        node(5, tn(6), NIL, NIL, R),
        node(6, tn(8), tn(5), tn(7), B),
        node(7, tn(6), NIL, NIL, R),
        node(8, tn(12), tn(6), tn(10), R),
        node(9, tn(10), NIL, NIL, R),
        node(10, tn(8), tn(9), NIL, B),
        node(12, tn(4), tn(8), tn(17), B),
        node(14, tn(17), NIL, NIL, R),
        node(17, tn(12), tn(14), NIL, B),
    ],
    // 19
    &[
        node(1, tn(2), NIL, NIL, R),
        node(2, tn(6), tn(1), NIL, B),
        node(6, tn(11), tn(2), tn(8), B),
        node(8, tn(6), NIL, tn(9), B),
        node(9, tn(8), NIL, NIL, R),
        node(11, NIL, tn(6), tn(14), B),
        node(12, tn(14), NIL, NIL, B),
        node(14, tn(11), tn(12), tn(16), B),
        node(16, tn(14), NIL, NIL, B),
    ],
    // 20
    &[
        node(0, tn(3), NIL, tn(1), B),
        node(1, tn(0), NIL, NIL, R),
        node(3, tn(9), tn(0), tn(7), B),
        node(4, tn(7), NIL, NIL, R),
        node(7, tn(3), tn(4), NIL, B),
        node(9, NIL, tn(3), tn(12), B),
        node(10, tn(12), NIL, NIL, B),
        node(12, tn(9), tn(10), tn(17), B),
        node(14, tn(17), NIL, NIL, B),
        node(17, tn(12), tn(14), tn(18), R),
        node(18, tn(17), NIL, tn(19), B),
        node(19, tn(18), NIL, NIL, R),
    ],
    // 21
    &[
        node(0, tn(3), NIL, tn(1), B),
        node(1, tn(0), NIL, NIL, R),
        node(3, tn(11), tn(0), tn(5), B),
        node(4, tn(5), NIL, NIL, B),
        node(5, tn(3), tn(4), tn(8), R),
        node(8, tn(5), NIL, NIL, B),
        node(11, NIL, tn(3), tn(15), B),
        node(13, tn(15), NIL, NIL, B),
        node(15, tn(11), tn(13), tn(17), B),
        node(16, tn(17), NIL, NIL, R),
        node(17, tn(15), tn(16), NIL, B),
    ],
    // 22
    &[
        node(1, tn(3), NIL, tn(2), B),
        node(2, tn(1), NIL, NIL, R),
        node(3, tn(8), tn(1), tn(7), B),
        node(4, tn(7), NIL, NIL, R),
        node(7, tn(3), tn(4), NIL, B),
        node(8, NIL, tn(3), tn(14), B),
        node(10, tn(11), NIL, NIL, R),
        node(11, tn(14), tn(10), NIL, B),
        node(14, tn(8), tn(11), tn(18), B),
        node(15, tn(18), NIL, NIL, B),
        node(18, tn(14), tn(15), tn(21), R),
        node(21, tn(18), NIL, NIL, B),
    ],
    // 23
    &[
        node(0, tn(2), NIL, NIL, R),
        node(2, tn(8), tn(0), tn(7), B),
        node(7, tn(2), NIL, NIL, R),
        node(8, tn(12), tn(2), tn(11), B),
        node(11, tn(8), NIL, NIL, B),
        node(12, NIL, tn(8), tn(17), B),
        node(13, tn(15), NIL, tn(14), B),
        node(14, tn(13), NIL, NIL, R),
        node(15, tn(17), tn(13), tn(16), R),
        node(16, tn(15), NIL, NIL, B),
        node(17, tn(12), tn(15), tn(20), B),
        node(20, tn(17), NIL, tn(21), B),
        node(21, tn(20), NIL, NIL, R),
    ],
    // 24
    &[
        node(4, tn(6), NIL, tn(5), B),
        node(5, tn(4), NIL, NIL, R),
        node(6, tn(14), tn(4), tn(10), B),
        node(8, tn(10), NIL, NIL, R),
        node(10, tn(6), tn(8), NIL, B),
        node(14, NIL, tn(6), tn(20), B),
        node(15, tn(16), NIL, NIL, R),
        node(16, tn(20), tn(15), NIL, B),
        node(20, tn(14), tn(16), tn(22), B),
        node(22, tn(20), NIL, NIL, B),
    ],
    // 25
    &[
        node(0, tn(1), NIL, NIL, R),
        node(1, tn(3), tn(0), NIL, B),
        node(3, tn(13), tn(1), tn(5), B),
        node(4, tn(5), NIL, NIL, B),
        node(5, tn(3), tn(4), tn(6), R),
        node(6, tn(5), NIL, tn(9), B),
        node(9, tn(6), NIL, NIL, R),
        node(13, NIL, tn(3), tn(19), B),
        node(14, tn(15), NIL, NIL, R),
        node(15, tn(16), tn(14), NIL, B),
        node(16, tn(19), tn(15), tn(17), R),
        node(17, tn(16), NIL, NIL, B),
        node(19, tn(13), tn(16), tn(23), B),
        node(23, tn(19), NIL, tn(24), B),
        node(24, tn(23), NIL, NIL, R),
    ],
    // 26
    &[
        node(0, tn(1), NIL, NIL, R),
        node(1, tn(3), tn(0), NIL, B),
        node(3, tn(11), tn(1), tn(9), B),
        node(6, tn(9), NIL, NIL, R),
        node(9, tn(3), tn(6), tn(10), B),
        node(10, tn(9), NIL, NIL, R),
        node(11, NIL, tn(3), tn(14), B),
        node(12, tn(14), NIL, tn(13), B),
        node(13, tn(12), NIL, NIL, R),
        node(14, tn(11), tn(12), tn(20), B),
        node(18, tn(20), NIL, NIL, B),
        node(20, tn(14), tn(18), tn(23), R),
        node(21, tn(23), NIL, NIL, R),
        node(23, tn(20), tn(21), NIL, B),
    ],
    // 27
    &[
        node(3, tn(8), NIL, NIL, B),
        node(8, tn(19), tn(3), tn(17), B),
        node(12, tn(17), NIL, NIL, R),
        node(17, tn(8), tn(12), NIL, B),
        node(19, NIL, tn(8), tn(24), B),
        node(20, tn(21), NIL, NIL, R),
        node(21, tn(24), tn(20), tn(23), B),
        node(23, tn(21), NIL, NIL, R),
        node(24, tn(19), tn(21), tn(25), B),
        node(25, tn(24), NIL, tn(26), B),
        node(26, tn(25), NIL, NIL, R),
    ],
    // 28
    &[
        node(0, tn(5), NIL, NIL, B),
        node(5, tn(13), tn(0), tn(7), R),
        node(7, tn(5), NIL, NIL, B),
        node(13, NIL, tn(5), tn(17), B),
        node(15, tn(17), NIL, NIL, B),
        node(17, tn(13), tn(15), tn(26), R),
        node(21, tn(26), NIL, NIL, R),
        node(26, tn(17), tn(21), NIL, B),
    ],
    // 29
    &[
        node(0, tn(3), NIL, tn(1), B),
        node(1, tn(0), NIL, NIL, R),
        node(3, tn(12), tn(0), tn(6), B),
        node(4, tn(6), NIL, NIL, B),
        node(6, tn(3), tn(4), tn(8), R),
        node(7, tn(8), NIL, NIL, R),
        node(8, tn(6), tn(7), tn(11), B),
        node(11, tn(8), NIL, NIL, R),
        node(12, NIL, tn(3), tn(17), B),
        node(13, tn(17), NIL, tn(14), B),
        node(14, tn(13), NIL, NIL, R),
        node(17, tn(12), tn(13), tn(25), B),
        node(22, tn(25), NIL, NIL, R),
        node(25, tn(17), tn(22), tn(27), B),
        node(27, tn(25), NIL, NIL, R),
    ],
    // 30
    &[
        node(0, tn(4), NIL, NIL, R),
        node(4, tn(6), tn(0), NIL, B),
        node(6, tn(13), tn(4), tn(9), R),
        node(8, tn(9), NIL, NIL, R),
        node(9, tn(6), tn(8), tn(12), B),
        node(12, tn(9), NIL, NIL, R),
        node(13, NIL, tn(6), tn(18), B),
        node(14, tn(16), NIL, NIL, R),
        node(16, tn(18), tn(14), tn(17), B),
        node(17, tn(16), NIL, NIL, R),
        node(18, tn(13), tn(16), tn(27), R),
        node(20, tn(27), NIL, NIL, R),
        node(27, tn(18), tn(20), tn(28), B),
        node(28, tn(27), NIL, NIL, R),
    ],
    // 31
    &[
        node(0, tn(2), NIL, NIL, R),
        node(2, tn(5), tn(0), NIL, B),
        node(5, tn(11), tn(2), tn(9), B),
        node(7, tn(9), NIL, NIL, R),
        node(9, tn(5), tn(7), NIL, B),
        node(11, NIL, tn(5), tn(21), B),
        node(14, tn(16), NIL, NIL, R),
        node(16, tn(21), tn(14), tn(18), B),
        node(18, tn(16), NIL, NIL, R),
        node(21, tn(11), tn(16), tn(30), B),
        node(30, tn(21), NIL, NIL, B),
    ],
];

/// Record `i` carries key `i / 2`; indexed by node count minus one
#[rustfmt::skip]
static MULTISET: [&[NodeShape]; 31] = [
    // 1
    &[
        node(0, NIL, NIL, NIL, B),
    ],
    // 2
    &[],
    // 3
    &[
        node(1, NIL, NIL, NIL, B),
    ],
    // 4
    &[
        node(0, NIL, NIL, tn(3), B),
        node(1, tn(0), NIL, NIL, R),
    ],
    // 5
    &[
        node(0, tn(1), NIL, NIL, R),
        node(0, NIL, tn(0), tn(4), B),
        node(2, tn(1), NIL, NIL, R),
    ],
    // 6
    &[
        node(0, tn(2), NIL, NIL, R),
        node(1, NIL, tn(0), NIL, B),
    ],
    // 7
    &[
        node(0, tn(2), NIL, tn(1), B),
        node(0, tn(0), NIL, NIL, R),
        node(1, NIL, tn(0), tn(4), B),
        node(2, tn(4), NIL, NIL, R),
        node(2, tn(2), tn(5), NIL, B),
    ],
    // 8
    &[
        node(0, tn(5), NIL, tn(0), B),
        node(0, tn(1), NIL, NIL, R),
        node(2, NIL, tn(1), tn(6), B),
        node(3, tn(5), NIL, NIL, B),
    ],
    // 9
    &[
        node(0, tn(2), NIL, NIL, B),
        node(1, tn(6), tn(1), tn(4), R),
        node(2, tn(2), NIL, tn(5), B),
        node(2, tn(4), NIL, NIL, R),
        node(3, NIL, tn(2), tn(7), B),
        node(3, tn(6), NIL, tn(8), B),
        node(4, tn(7), NIL, NIL, R),
    ],
    // 10
    &[
        node(0, tn(2), NIL, NIL, B),
        node(1, tn(6), tn(0), tn(4), R),
        node(1, tn(4), NIL, NIL, R),
        node(2, tn(2), tn(3), NIL, B),
        node(3, NIL, tn(2), tn(8), B),
        node(4, tn(6), NIL, NIL, B),
    ],
    // 11
    &[
        node(1, tn(6), NIL, NIL, B),
        node(3, NIL, tn(2), tn(8), B),
        node(3, tn(8), NIL, NIL, R),
        node(4, tn(6), tn(7), tn(9), B),
        node(4, tn(8), NIL, NIL, R),
    ],
    // 12
    &[
        node(0, tn(1), NIL, NIL, B),
        node(0, tn(5), tn(0), tn(3), R),
        node(1, tn(1), NIL, tn(2), B),
        node(1, tn(3), NIL, NIL, R),
        node(2, NIL, tn(1), tn(9), B),
        node(2, tn(9), NIL, NIL, B),
        node(4, tn(5), tn(4), tn(11), R),
        node(5, tn(9), NIL, NIL, B),
    ],
    // 13
    &[
        node(0, tn(0), NIL, NIL, R),
        node(0, tn(3), tn(1), NIL, B),
        node(1, tn(6), tn(0), tn(4), R),
        node(2, tn(3), NIL, tn(5), B),
        node(2, tn(4), NIL, NIL, R),
        node(3, NIL, tn(3), tn(11), B),
        node(4, tn(11), NIL, NIL, R),
        node(5, tn(6), tn(8), tn(10), B),
        node(5, tn(11), NIL, NIL, R),
    ],
    // 14
    &[
        node(1, tn(5), NIL, NIL, R),
        node(2, tn(6), tn(3), NIL, B),
        node(3, NIL, tn(5), tn(13), B),
        node(4, tn(13), NIL, NIL, B),
        node(6, tn(6), tn(8), tn(12), R),
        node(6, tn(13), NIL, NIL, B),
    ],
    // 15
    &[
        node(0, tn(2), NIL, NIL, R),
        node(1, tn(9), tn(0), tn(7), B),
        node(3, tn(2), NIL, NIL, R),
        node(4, NIL, tn(2), tn(10), B),
        node(4, tn(10), NIL, NIL, B),
        node(5, tn(9), tn(8), tn(12), R),
        node(6, tn(12), NIL, NIL, R),
        node(6, tn(10), tn(13), tn(14), B),
        node(7, tn(12), NIL, NIL, R),
    ],
    // 16
    &[
        node(0, tn(5), NIL, tn(3), B),
        node(1, tn(0), NIL, NIL, R),
        node(2, tn(10), tn(0), tn(7), R),
        node(3, tn(5), NIL, NIL, B),
        node(5, NIL, tn(5), tn(12), B),
        node(6, tn(10), NIL, NIL, B),
    ],
    // 17
    &[
        node(0, tn(0), NIL, NIL, R),
        node(0, tn(3), tn(1), NIL, B),
        node(1, tn(7), tn(0), tn(5), R),
        node(2, tn(3), NIL, tn(4), B),
        node(2, tn(5), NIL, NIL, R),
        node(3, NIL, tn(3), tn(8), B),
        node(4, tn(8), NIL, NIL, B),
        node(4, tn(7), tn(9), tn(16), R),
        node(8, tn(8), NIL, NIL, B),
    ],
    // 18
    &[
        node(0, tn(3), NIL, tn(1), B),
        node(0, tn(0), NIL, NIL, R),
        node(1, tn(4), tn(0), tn(2), B),
        node(1, tn(3), NIL, NIL, B),
        node(2, NIL, tn(3), tn(12), B),
        node(2, tn(6), NIL, NIL, R),
        node(3, tn(8), tn(5), tn(7), B),
        node(3, tn(6), NIL, NIL, R),
        node(4, tn(12), tn(6), tn(10), R),
        node(4, tn(10), NIL, NIL, R),
        node(5, tn(8), tn(9), NIL, B),
        node(6, tn(4), tn(8), tn(14), B),
        node(7, tn(12), NIL, tn(17), B),
        node(8, tn(14), NIL, NIL, R),
    ],
    // 19
    &[
        node(0, tn(2), NIL, NIL, R),
        node(1, tn(6), tn(1), NIL, B),
        node(3, tn(11), tn(2), tn(9), B),
        node(4, tn(6), NIL, tn(8), B),
        node(4, tn(9), NIL, NIL, R),
        node(5, NIL, tn(6), tn(14), B),
        node(6, tn(14), NIL, NIL, B),
        node(7, tn(11), tn(12), tn(16), B),
        node(8, tn(14), NIL, NIL, B),
    ],
    // 20
    &[
        node(0, tn(3), NIL, tn(1), B),
        node(0, tn(0), NIL, NIL, R),
        node(1, tn(9), tn(0), tn(7), B),
        node(2, tn(7), NIL, NIL, R),
        node(3, tn(3), tn(4), NIL, B),
        node(4, NIL, tn(3), tn(14), B),
        node(5, tn(14), NIL, tn(12), B),
        node(6, tn(10), NIL, NIL, R),
        node(7, tn(9), tn(10), tn(18), B),
        node(8, tn(18), NIL, NIL, R),
        node(9, tn(14), tn(17), tn(19), B),
        node(9, tn(18), NIL, NIL, R),
    ],
    // 21
    &[
        node(0, tn(3), NIL, tn(1), B),
        node(0, tn(0), NIL, NIL, R),
        node(1, tn(8), tn(0), tn(4), B),
        node(2, tn(3), NIL, tn(5), B),
        node(2, tn(4), NIL, NIL, R),
        node(4, NIL, tn(3), tn(13), B),
        node(5, tn(13), NIL, NIL, B),
        node(6, tn(8), tn(11), tn(17), B),
        node(7, tn(17), NIL, NIL, B),
        node(8, tn(13), tn(15), tn(16), R),
        node(8, tn(17), NIL, NIL, B),
    ],
    // 22
    &[
        node(0, tn(3), NIL, NIL, B),
        node(1, tn(8), tn(1), tn(4), B),
        node(1, tn(4), NIL, NIL, B),
        node(2, tn(3), tn(2), tn(7), R),
        node(3, tn(4), NIL, NIL, B),
        node(4, NIL, tn(3), tn(14), B),
        node(5, tn(14), NIL, tn(10), B),
        node(5, tn(11), NIL, NIL, R),
        node(7, tn(8), tn(11), tn(18), B),
        node(7, tn(18), NIL, NIL, B),
        node(9, tn(14), tn(15), tn(21), R),
        node(10, tn(18), NIL, NIL, B),
    ],
    // 23
    &[
        node(0, tn(2), NIL, NIL, R),
        node(1, tn(8), tn(0), tn(7), B),
        node(3, tn(2), NIL, NIL, R),
        node(4, tn(12), tn(2), tn(11), B),
        node(5, tn(8), NIL, NIL, B),
        node(6, NIL, tn(8), tn(17), B),
        node(6, tn(15), NIL, NIL, B),
        node(7, tn(17), tn(13), tn(16), R),
        node(7, tn(16), NIL, NIL, R),
        node(8, tn(15), tn(14), NIL, B),
        node(8, tn(12), tn(15), tn(20), B),
        node(10, tn(17), NIL, tn(21), B),
        node(10, tn(20), NIL, NIL, R),
    ],
    // 24
    &[
        node(2, tn(6), NIL, tn(5), B),
        node(2, tn(4), NIL, NIL, R),
        node(3, tn(14), tn(4), tn(10), B),
        node(4, tn(10), NIL, NIL, R),
        node(5, tn(6), tn(8), NIL, B),
        node(7, NIL, tn(6), tn(20), B),
        node(7, tn(16), NIL, NIL, R),
        node(8, tn(20), tn(15), NIL, B),
        node(10, tn(14), tn(16), tn(22), B),
        node(11, tn(20), NIL, NIL, B),
    ],
    // 25
    &[
        node(0, tn(3), NIL, tn(1), B),
        node(0, tn(0), NIL, NIL, R),
        node(1, tn(13), tn(0), tn(4), B),
        node(2, tn(4), NIL, NIL, B),
        node(2, tn(3), tn(5), tn(6), R),
        node(3, tn(4), NIL, tn(9), B),
        node(4, tn(6), NIL, NIL, R),
        node(6, NIL, tn(3), tn(19), B),
        node(7, tn(17), NIL, tn(14), B),
        node(7, tn(15), NIL, NIL, R),
        node(8, tn(19), tn(15), tn(16), R),
        node(8, tn(17), NIL, NIL, B),
        node(9, tn(13), tn(17), tn(23), B),
        node(11, tn(19), NIL, tn(24), B),
        node(12, tn(23), NIL, NIL, R),
    ],
    // 26
    &[
        node(0, tn(3), NIL, tn(0), B),
        node(0, tn(1), NIL, NIL, R),
        node(1, tn(9), tn(1), tn(6), B),
        node(3, tn(3), NIL, NIL, B),
        node(4, NIL, tn(3), tn(14), B),
        node(5, tn(12), NIL, tn(10), B),
        node(5, tn(11), NIL, NIL, R),
        node(6, tn(14), tn(11), tn(13), R),
        node(6, tn(12), NIL, NIL, B),
        node(7, tn(9), tn(12), tn(20), B),
        node(9, tn(20), NIL, NIL, B),
        node(10, tn(14), tn(18), tn(23), R),
        node(10, tn(23), NIL, NIL, R),
        node(11, tn(20), tn(21), NIL, B),
    ],
    // 27
    &[
        node(1, tn(8), NIL, NIL, B),
        node(4, tn(19), tn(3), tn(17), B),
        node(6, tn(17), NIL, NIL, R),
        node(8, tn(8), tn(12), NIL, B),
        node(9, NIL, tn(8), tn(25), B),
        node(10, tn(21), NIL, NIL, R),
        node(10, tn(25), tn(20), tn(23), B),
        node(11, tn(21), NIL, NIL, R),
        node(12, tn(19), tn(21), tn(24), B),
        node(12, tn(25), NIL, tn(26), B),
        node(13, tn(24), NIL, NIL, R),
    ],
    // 28
    &[
        node(0, tn(5), NIL, NIL, B),
        node(2, tn(13), tn(0), tn(7), R),
        node(3, tn(5), NIL, NIL, B),
        node(6, NIL, tn(5), tn(17), B),
        node(7, tn(17), NIL, NIL, B),
        node(8, tn(13), tn(15), tn(26), R),
        node(10, tn(26), NIL, NIL, R),
        node(13, tn(17), tn(21), NIL, B),
    ],
    // 29
    &[
        node(0, tn(3), NIL, tn(1), B),
        node(0, tn(0), NIL, NIL, R),
        node(1, tn(11), tn(0), tn(6), B),
        node(2, tn(6), NIL, NIL, B),
        node(3, tn(3), tn(4), tn(7), R),
        node(3, tn(6), NIL, tn(8), B),
        node(4, tn(7), NIL, NIL, R),
        node(5, NIL, tn(3), tn(22), B),
        node(6, tn(12), NIL, NIL, B),
        node(6, tn(22), tn(13), tn(17), R),
        node(7, tn(17), NIL, NIL, R),
        node(8, tn(12), tn(14), NIL, B),
        node(11, tn(11), tn(12), tn(25), B),
        node(12, tn(22), NIL, tn(27), B),
        node(13, tn(25), NIL, NIL, R),
    ],
    // 30
    &[
        node(0, tn(4), NIL, NIL, B),
        node(2, tn(13), tn(0), tn(9), R),
        node(3, tn(9), NIL, NIL, R),
        node(4, tn(4), tn(6), tn(8), B),
        node(4, tn(9), NIL, NIL, R),
        node(6, tn(14), tn(4), tn(12), B),
        node(6, tn(13), NIL, NIL, B),
        node(7, NIL, tn(13), tn(18), B),
        node(8, tn(18), NIL, tn(16), B),
        node(8, tn(17), NIL, NIL, R),
        node(9, tn(14), tn(17), tn(27), B),
        node(10, tn(27), NIL, NIL, R),
        node(13, tn(18), tn(20), tn(28), B),
        node(14, tn(27), NIL, NIL, R),
    ],
    // 31
    &[
        node(0, tn(2), NIL, NIL, R),
        node(1, tn(5), tn(0), NIL, B),
        node(2, tn(11), tn(2), tn(9), B),
        node(3, tn(9), NIL, NIL, R),
        node(4, tn(5), tn(7), NIL, B),
        node(5, NIL, tn(5), tn(21), B),
        node(7, tn(16), NIL, NIL, R),
        node(8, tn(21), tn(14), tn(18), B),
        node(9, tn(16), NIL, NIL, R),
        node(10, tn(11), tn(16), tn(30), B),
        node(15, tn(21), NIL, NIL, B),
    ],
];
