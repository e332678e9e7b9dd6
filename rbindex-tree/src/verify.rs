//! Structural invariant checker
//!
//! Used by the test suites after every mutation. Walks the whole tree, so it
//! is O(n).

use core::cmp::Ordering;

use rbindex_core::{Direction, NodeId};

use crate::node::Parent;
use crate::store::NodeStore;
use crate::tree::RbTree;

/// First broken invariant found by [`RbTree::verify`]
#[derive(Debug, Copy, Clone, PartialEq, Eq, thiserror::Error)]
pub enum Violation {
    #[error("root {0} is red")]
    RedRoot(NodeId),

    #[error("root {0} is not marked as root")]
    RootNotMarked(NodeId),

    #[error("child {child} does not link back to parent {parent}")]
    BrokenParentLink { parent: NodeId, child: NodeId },

    #[error("red node {parent} has red child {child}")]
    RedChildOfRed { parent: NodeId, child: NodeId },

    #[error("black height below {node} differs: {left} on the left, {right} on the right")]
    BlackHeight {
        node: NodeId,
        left: usize,
        right: usize,
    },

    #[error("{next} sorts before its in-order predecessor {prev}")]
    OutOfOrder { prev: NodeId, next: NodeId },

    #[error("cached {side} extreme is {cached:?}, the tree holds {actual:?}")]
    StaleExtreme {
        side: Direction,
        cached: Option<NodeId>,
        actual: Option<NodeId>,
    },
}

/// Summary of a tree that passed verification
#[derive(Debug, Copy, Clone, PartialEq, Eq, Default)]
pub struct Report {
    /// Number of linked nodes
    pub nodes: usize,
    /// Black nodes on every path from the root down to an absent leaf
    pub black_height: usize,
}

impl RbTree {
    /// Check every red-black, linkage, ordering and extreme-cache invariant
    pub fn verify<S, F>(&self, store: &S, mut cmp: F) -> Result<Report, Violation>
    where
        S: NodeStore + ?Sized,
        F: FnMut(&S::Item, &S::Item) -> Ordering,
    {
        let Some(root) = self.root else {
            for side in Direction::ALL {
                check_extreme(side, self.extreme(side), None)?;
            }
            return Ok(Report::default());
        };

        let links = store.node(root);
        if links.parent_slot() != Parent::Root {
            return Err(Violation::RootNotMarked(root));
        }
        if links.is_red() {
            return Err(Violation::RedRoot(root));
        }

        let (black_height, nodes) = check_subtree(store, root)?;

        let mut prev: Option<NodeId> = None;
        for node in self.iter(store, Direction::Right) {
            if let Some(prev) = prev {
                if cmp(store.record(prev), store.record(node)) == Ordering::Greater {
                    return Err(Violation::OutOfOrder { prev, next: node });
                }
            }
            prev = Some(node);
        }

        for side in Direction::ALL {
            let actual = crate::navigate::first_in_subtree(store, root, side);
            check_extreme(side, self.extreme(side), Some(actual))?;
        }

        Ok(Report {
            nodes,
            black_height,
        })
    }
}

fn check_extreme(
    side: Direction,
    cached: Option<NodeId>,
    actual: Option<NodeId>,
) -> Result<(), Violation> {
    if cached == actual {
        Ok(())
    } else {
        Err(Violation::StaleExtreme {
            side,
            cached,
            actual,
        })
    }
}

/// Returns the black height and node count of the subtree at `node`
fn check_subtree<S: NodeStore + ?Sized>(
    store: &S,
    node: NodeId,
) -> Result<(usize, usize), Violation> {
    let links = store.node(node);
    let mut heights = [0; 2];
    let mut count = 1;

    for dir in Direction::ALL {
        let Some(child) = links.child(dir) else {
            continue;
        };
        let child_links = store.node(child);
        if child_links.parent_slot() != Parent::Node(node) {
            return Err(Violation::BrokenParentLink {
                parent: node,
                child,
            });
        }
        if links.is_red() && child_links.is_red() {
            return Err(Violation::RedChildOfRed {
                parent: node,
                child,
            });
        }
        let (height, nodes) = check_subtree(store, child)?;
        heights[dir.index()] = height;
        count += nodes;
    }

    let [left, right] = heights;
    if left != right {
        return Err(Violation::BlackHeight { node, left, right });
    }

    Ok((left + usize::from(links.is_black()), count))
}
