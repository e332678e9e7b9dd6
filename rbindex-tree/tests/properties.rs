//! Property-based tests for the ordered index.
//!
//! Every mutation is followed by a full structural check, and the in-order
//! sequence is compared against a sorted `Vec` oracle of `(key, handle)`.

use std::cmp::Ordering;

use proptest::prelude::*;
use rbindex_tree::{navigate, Direction, Linked, Mode, NodeId, RbNode, RbTree};

const MAX_NODES: usize = 64;

#[derive(Debug)]
struct Entry {
    key: u8,
    node: RbNode,
}

impl Linked for Entry {
    fn links(&self) -> &RbNode {
        &self.node
    }

    fn links_mut(&mut self) -> &mut RbNode {
        &mut self.node
    }
}

fn entries(keys: &[u8]) -> Vec<Entry> {
    keys.iter()
        .map(|&key| Entry {
            key,
            node: RbNode::new(),
        })
        .collect()
}

fn by_key(a: &Entry, b: &Entry) -> Ordering {
    a.key.cmp(&b.key)
}

fn key_order(key: &u8, entry: &Entry) -> Ordering {
    key.cmp(&entry.key)
}

fn in_order(tree: &RbTree, store: &[Entry], dir: Direction) -> Vec<NodeId> {
    tree.iter(store, dir).collect()
}

// ============================================================================
//  Strategies
// ============================================================================

/// Small key space so duplicates are common
fn keys() -> impl Strategy<Value = Vec<u8>> {
    prop::collection::vec(0u8..16, 0..=MAX_NODES)
}

/// Keys plus a permutation selecting an extraction order
fn keys_and_order() -> impl Strategy<Value = (Vec<u8>, Vec<usize>)> {
    keys().prop_flat_map(|keys| {
        let order: Vec<usize> = (0..keys.len()).collect();
        (Just(keys), Just(order).prop_shuffle())
    })
}

/// Operations for a long-running random walk
#[derive(Debug, Clone)]
enum Op {
    Toggle(usize),
    PopMin,
    PopMax,
}

fn operations() -> impl Strategy<Value = Vec<Op>> {
    prop::collection::vec(
        prop_oneof![
            6 => (0..MAX_NODES).prop_map(Op::Toggle),
            1 => Just(Op::PopMin),
            1 => Just(Op::PopMax),
        ],
        0..200,
    )
}

// ============================================================================
//  Properties
// ============================================================================

proptest! {
    #[test]
    fn multiset_order_is_stable(keys in keys()) {
        let mut store = entries(&keys);
        let mut tree = RbTree::new();
        for i in 0..keys.len() {
            tree.insert(store.as_mut_slice(), NodeId::new(i), by_key, Mode::Multiset).unwrap();
            tree.verify(store.as_slice(), by_key).unwrap();
        }

        // Sorting by key then handle is insertion order within each run
        let mut oracle: Vec<NodeId> = (0..keys.len()).map(NodeId::new).collect();
        oracle.sort_by_key(|id| (keys[id.index()], *id));
        prop_assert_eq!(in_order(&tree, &store, Direction::Right), oracle.clone());

        oracle.reverse();
        prop_assert_eq!(in_order(&tree, &store, Direction::Left), oracle);
    }

    #[test]
    fn drain_max_yields_reverse_order(keys in keys()) {
        let mut store = entries(&keys);
        let mut tree = RbTree::from_slice(&mut store, by_key, Mode::Multiset);

        let mut oracle: Vec<(u8, NodeId)> = (0..keys.len())
            .map(|i| (keys[i], NodeId::new(i)))
            .collect();
        oracle.sort();
        oracle.reverse();

        let mut drained = Vec::with_capacity(keys.len());
        while let Some(id) = tree.pop_max(store.as_mut_slice()) {
            prop_assert!(store[id.index()].node.is_off_tree());
            drained.push((store[id.index()].key, id));
            let report = tree.verify(store.as_slice(), by_key).unwrap();
            prop_assert_eq!(report.nodes, keys.len() - drained.len());
        }

        prop_assert_eq!(drained, oracle);
        prop_assert!(tree.is_empty());
        prop_assert_eq!(tree.min(), None);
        prop_assert!(store.iter().all(|e| e.node.is_off_tree()));
    }

    #[test]
    fn unique_mode_keeps_first_of_each_key(keys in keys()) {
        let mut store = entries(&keys);
        let mut tree = RbTree::new();
        let mut seen = [None; 16];
        for (i, &key) in keys.iter().enumerate() {
            let id = NodeId::new(i);
            match tree.insert(store.as_mut_slice(), id, by_key, Mode::Unique) {
                Ok(_) => {
                    prop_assert!(seen[key as usize].is_none());
                    seen[key as usize] = Some(id);
                }
                Err(conflict) => {
                    prop_assert_eq!(Some(conflict.0), seen[key as usize]);
                    prop_assert!(store[i].node.is_off_tree());
                }
            }
        }

        let report = tree.verify(store.as_slice(), by_key).unwrap();
        let expected: Vec<NodeId> = seen.iter().flatten().copied().collect();
        prop_assert_eq!(report.nodes, expected.len());
        prop_assert_eq!(in_order(&tree, &store, Direction::Right), expected);
    }

    #[test]
    fn extremes_survive_arbitrary_extraction((keys, order) in keys_and_order()) {
        let mut store = entries(&keys);
        let mut tree = RbTree::from_slice(&mut store, by_key, Mode::Multiset);
        let mut live: Vec<NodeId> = in_order(&tree, &store, Direction::Right);

        for index in order {
            let id = NodeId::new(index);
            tree.extract(store.as_mut_slice(), id);
            live.retain(|&n| n != id);

            tree.verify(store.as_slice(), by_key).unwrap();
            prop_assert!(store[index].node.is_off_tree());
            prop_assert_eq!(tree.min(), live.first().copied());
            prop_assert_eq!(tree.max(), live.last().copied());
        }
        prop_assert!(tree.is_empty());
    }

    #[test]
    fn find_returns_first_of_run(keys in keys(), probe in 0u8..16) {
        let mut store = entries(&keys);
        let tree = RbTree::from_slice(&mut store, by_key, Mode::Multiset);

        let expected = keys.iter().position(|&k| k == probe).map(NodeId::new);
        prop_assert_eq!(tree.find(store.as_slice(), &probe, key_order, Mode::Multiset), expected);

        if let Some(first) = expected {
            let before = navigate::predecessor(store.as_slice(), first);
            prop_assert!(before.map_or(true, |id| store[id.index()].key < probe));
        }
    }

    #[test]
    fn bulk_matches_incremental(keys in keys()) {
        let mut bulk_store = entries(&keys);
        let bulk = RbTree::from_slice(&mut bulk_store, by_key, Mode::Multiset);

        let mut step_store = entries(&keys);
        let mut step = RbTree::new();
        for i in 0..keys.len() {
            step.insert(step_store.as_mut_slice(), NodeId::new(i), by_key, Mode::Multiset).unwrap();
        }

        prop_assert_eq!(&bulk, &step);
        let bulk_links: Vec<RbNode> = bulk_store.iter().map(|e| e.node).collect();
        let step_links: Vec<RbNode> = step_store.iter().map(|e| e.node).collect();
        prop_assert_eq!(bulk_links, step_links);
    }

    #[test]
    fn random_walk_keeps_invariants(keys in prop::collection::vec(0u8..16, MAX_NODES), ops in operations()) {
        let mut store = entries(&keys);
        let mut tree = RbTree::new();
        let mut linked = vec![false; MAX_NODES];

        for op in ops {
            match op {
                Op::Toggle(index) => {
                    let id = NodeId::new(index);
                    if linked[index] {
                        tree.extract(store.as_mut_slice(), id);
                    } else {
                        tree.insert(store.as_mut_slice(), id, by_key, Mode::Multiset).unwrap();
                    }
                    linked[index] = !linked[index];
                }
                Op::PopMin | Op::PopMax => {
                    let dir = if matches!(op, Op::PopMin) { Direction::Left } else { Direction::Right };
                    let expected = tree.extreme(dir);
                    let popped = tree.pop(store.as_mut_slice(), dir);
                    prop_assert_eq!(popped, expected);
                    if let Some(id) = popped {
                        linked[id.index()] = false;
                    }
                }
            }

            let report = tree.verify(store.as_slice(), by_key).unwrap();
            prop_assert_eq!(report.nodes, linked.iter().filter(|&&l| l).count());
            for (index, &is_linked) in linked.iter().enumerate() {
                prop_assert_eq!(tree.contains(store.as_slice(), NodeId::new(index)), is_linked);
            }
        }

        let cleared = tree.clear(store.as_mut_slice());
        prop_assert_eq!(cleared, linked.iter().filter(|&&l| l).count());
        prop_assert!(store.iter().all(|e| e.node.is_off_tree()));
    }
}
