//! Test records, fixtures and the randomized operation driver

use std::cmp::Ordering;

use rbindex_tree::{Direction, Linked, Mode, NodeId, RbNode, RbTree};
use tracing::{debug, info};

use crate::config::HarnessConfig;
use crate::error::HarnessError;
use crate::fixtures::{shapes, NodeShape};

/// Record type used by every harness run
#[derive(Debug, Clone, Default)]
pub struct TestNode {
    pub key: u32,
    pub node: RbNode,
}

impl TestNode {
    pub fn new(key: u32) -> Self {
        Self {
            key,
            node: RbNode::new(),
        }
    }
}

impl Linked for TestNode {
    fn links(&self) -> &RbNode {
        &self.node
    }

    fn links_mut(&mut self) -> &mut RbNode {
        &mut self.node
    }
}

/// Orders records by key only, so equal keys tie
pub fn by_key(a: &TestNode, b: &TestNode) -> Ordering {
    a.key.cmp(&b.key)
}

/// Orders a bare key against a record
pub fn key_order(key: &u32, node: &TestNode) -> Ordering {
    key.cmp(&node.key)
}

/// Off-tree records carrying `keys`, handle `i` naming `keys[i]`
pub fn test_nodes(keys: &[u32]) -> Vec<TestNode> {
    keys.iter().copied().map(TestNode::new).collect()
}

/// Keys of the linked records in ascending order
pub fn in_order_keys(tree: &RbTree, nodes: &[TestNode]) -> Vec<u32> {
    tree.iter(nodes, Direction::Right)
        .map(|id| nodes[id.index()].key)
        .collect()
}

/// Linear congruential generator driving the randomized runs
#[derive(Debug, Clone)]
pub struct Lcg {
    state: u32,
}

impl Lcg {
    pub fn new(seed: u32) -> Self {
        Self { state: seed }
    }

    /// Pick an index below `n` from the current state, then advance
    pub fn next_index(&mut self, n: usize) -> usize {
        let index = (self.state >> 13) as usize % n;
        self.state = self.state.wrapping_mul(1_664_525).wrapping_add(1_013_904_223);
        index
    }
}

/// Outcome of one randomized run
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RandomRun {
    pub nodes: usize,
    pub mode: Mode,
    pub steps: usize,
    pub inserts: usize,
    pub extracts: usize,
    /// Handles still linked at the end, in order
    pub live: Vec<NodeId>,
    /// Keys of `live`
    pub keys: Vec<u32>,
    /// Linkage of `live`, in the same order
    pub shape: Vec<NodeShape>,
}

/// Toggle pseudo-randomly chosen records in and out of one tree
///
/// Runs `n³` steps over `n` records. `mode` picks the key layout: with
/// `Unique` record `i` has key `i`, with `Multiset` it has key `i / 2`, so
/// keys come in pairs. Each step inserts the chosen record if it is
/// off-tree and extracts it otherwise. Insertion always admits duplicates,
/// so both layouts go through the same descent.
pub fn random_ops(n: usize, mode: Mode, config: &HarnessConfig) -> Result<RandomRun, HarnessError> {
    if n == 0 {
        return Err(HarnessError::NoNodes);
    }

    let spread = if mode.is_unique() { 1 } else { 2 };
    let mut nodes: Vec<TestNode> = (0..n).map(|i| TestNode::new((i / spread) as u32)).collect();
    let mut tree = RbTree::new();
    let mut lcg = Lcg::new(config.seed);
    let steps = n * n * n;
    let (mut inserts, mut extracts) = (0, 0);

    for step in 0..steps {
        let index = lcg.next_index(n);
        let node = NodeId::new(index);

        if nodes[index].node.is_off_tree() {
            tree.insert(&mut nodes, node, by_key, Mode::Multiset)
                .map_err(|conflict| HarnessError::Conflict {
                    step,
                    node,
                    existing: conflict.0,
                })?;
            inserts += 1;
        } else {
            tree.extract(&mut nodes, node);
            extracts += 1;
        }

        if config.verify_each_step {
            tree.verify(&nodes, by_key)
                .map_err(|violation| HarnessError::Violation { step, violation })?;
        }
    }

    tree.verify(&nodes, by_key)
        .map_err(|violation| HarnessError::Violation { step: steps, violation })?;

    let live: Vec<NodeId> = tree.iter(&nodes, Direction::Right).collect();
    let keys = live.iter().map(|id| nodes[id.index()].key).collect();
    let shape = shapes(&tree, &nodes);
    debug!(n, ?mode, steps, inserts, extracts, live = live.len(), "random run finished");

    Ok(RandomRun {
        nodes: n,
        mode,
        steps,
        inserts,
        extracts,
        live,
        keys,
        shape,
    })
}

/// Random runs for every node count up to `config.max_nodes`, both modes
pub fn random_ops_all(config: &HarnessConfig) -> Result<Vec<RandomRun>, HarnessError> {
    let mut runs = Vec::with_capacity(config.max_nodes * 2);
    for n in 1..=config.max_nodes {
        runs.push(random_ops(n, Mode::Unique, config)?);
        runs.push(random_ops(n, Mode::Multiset, config)?);
    }
    info!(runs = runs.len(), max_nodes = config.max_nodes, "random runs passed");
    Ok(runs)
}
