//! Intrusive red-black ordered index
//!
//! The linkage ([`RbNode`]) lives inside caller records and the tree never
//! allocates. Nodes are named by [`NodeId`] handles into caller-owned
//! storage ([`NodeStore`]), and comparators are plain closures passed to
//! each ordering operation.
//!
//! Beyond a textbook red-black tree this index:
//!
//! - caches the minimum and maximum, so both are O(1);
//! - keeps nodes with equal keys in insertion order ([`Mode::Multiset`]);
//! - can reject equal keys instead ([`Mode::Unique`]).
//!
//! ```
//! use rbindex_tree::{Direction, Linked, Mode, NodeId, RbNode, RbTree};
//!
//! struct Job {
//!     deadline: u64,
//!     node: RbNode,
//! }
//!
//! impl Linked for Job {
//!     fn links(&self) -> &RbNode {
//!         &self.node
//!     }
//!     fn links_mut(&mut self) -> &mut RbNode {
//!         &mut self.node
//!     }
//! }
//!
//! let mut jobs: Vec<Job> = [30, 10, 20]
//!     .into_iter()
//!     .map(|deadline| Job { deadline, node: RbNode::new() })
//!     .collect();
//! let by_deadline = |a: &Job, b: &Job| a.deadline.cmp(&b.deadline);
//!
//! let mut tree = RbTree::from_slice(&mut jobs, by_deadline, Mode::Multiset);
//! assert_eq!(tree.min(), Some(NodeId(1)));
//!
//! let order: Vec<u64> = tree
//!     .iter(jobs.as_slice(), Direction::Right)
//!     .map(|id| jobs[id.index()].deadline)
//!     .collect();
//! assert_eq!(order, [10, 20, 30]);
//!
//! assert_eq!(tree.pop_min(jobs.as_mut_slice()), Some(NodeId(1)));
//! assert!(jobs[1].node.is_off_tree());
//! ```
//!
//! The structure is not synchronized. Callers serialize mutation
//! themselves.

#![cfg_attr(not(test), no_std)]

#[cfg(feature = "alloc")]
extern crate alloc;

mod balance;
mod bulk;
pub mod iter;
pub mod navigate;
pub mod node;
pub mod store;
pub mod tree;
pub mod verify;

pub use iter::{Iter, Postorder};
pub use node::{Linked, RbNode};
pub use rbindex_core::{Color, Direction, Mode, NodeId};
pub use store::NodeStore;
pub use tree::{Conflict, Inserted, RbTree};
pub use verify::{Report, Violation};
