use cucumber::{given, then, when, World};
use rbindex_test_framework::config::DEFAULT_SEED;
use rbindex_test_framework::helpers::{by_key, in_order_keys, key_order, TestNode};
use rbindex_test_framework::{
    random_ops, random_ops_all, random_walk_shape, HarnessConfig, HarnessError, RandomRun,
};
use rbindex_tree::{navigate, Mode, NodeId, RbTree};
use tracing::info;

#[derive(Debug, Default, World)]
pub struct IndexWorld {
    tree: RbTree,
    nodes: Vec<TestNode>,
    rejected: Vec<NodeId>,
    found: Option<NodeId>,
    drained: Vec<u32>,
    run: Option<RandomRun>,
    runs: Vec<RandomRun>,
    config: Option<HarnessConfig>,
}

impl IndexWorld {
    fn verify(&self) {
        self.tree.verify(&self.nodes, by_key).unwrap();
    }

    fn config(&self) -> &HarnessConfig {
        self.config.as_ref().expect("harness configuration not loaded")
    }

    fn key_of(&self, id: Option<NodeId>) -> Option<u32> {
        id.map(|id| self.nodes[id.index()].key)
    }
}

fn parse_mode(mode: &str) -> Mode {
    match mode {
        "unique" => Mode::Unique,
        "multiset" => Mode::Multiset,
        other => panic!("unknown mode {other}"),
    }
}

fn parse_keys(keys: &str) -> Vec<u32> {
    keys.split(',')
        .map(str::trim)
        .filter(|k| !k.is_empty() && *k != "none")
        .map(|k| k.parse().unwrap())
        .collect()
}

#[given("the harness configuration")]
fn load_config(world: &mut IndexWorld) -> Result<(), HarnessError> {
    world.config = Some(HarnessConfig::load()?);
    Ok(())
}

#[given("an empty tree")]
fn empty_tree(world: &mut IndexWorld) {
    world.tree = RbTree::new();
    world.nodes.clear();
}

#[when(regex = r"^I insert keys (.+) in (unique|multiset) mode$")]
fn insert_keys(world: &mut IndexWorld, keys: String, mode: String) {
    let mode = parse_mode(&mode);
    for key in parse_keys(&keys) {
        let id = NodeId::new(world.nodes.len());
        world.nodes.push(TestNode::new(key));
        if world.tree.insert(&mut world.nodes, id, by_key, mode).is_err() {
            world.rejected.push(id);
        }
        world.verify();
    }
}

#[when(regex = r"^I extract node (\d+)$")]
fn extract_node(world: &mut IndexWorld, node: u32) {
    world.tree.extract(&mut world.nodes, NodeId(node));
    world.verify();
}

#[when("I drain the tree from the minimum")]
fn drain_min(world: &mut IndexWorld) {
    while let Some(id) = world.tree.pop_min(&mut world.nodes) {
        world.drained.push(world.nodes[id.index()].key);
        world.verify();
    }
}

#[when(regex = r"^I find key (\d+) in (unique|multiset) mode$")]
fn find_key(world: &mut IndexWorld, key: u32, mode: String) {
    world.found = world
        .tree
        .find(world.nodes.as_slice(), &key, key_order, parse_mode(&mode));
}

#[when(regex = r"^I run the random walk over (\d+) nodes in (unique|multiset) mode$")]
fn random_walk(world: &mut IndexWorld, nodes: usize, mode: String) {
    let run = random_ops(nodes, parse_mode(&mode), world.config()).unwrap();
    world.run = Some(run);
}

#[when("I run the random walks for every size up to the configured maximum")]
fn random_walks_all(world: &mut IndexWorld) {
    world.runs = random_ops_all(world.config()).unwrap();
}

#[then("the tree should be empty")]
fn tree_empty(world: &mut IndexWorld) {
    assert!(world.tree.is_empty());
    assert_eq!(world.tree.min(), None);
    assert_eq!(world.tree.max(), None);
}

#[then(regex = r"^the root key should be (\d+)$")]
fn root_key(world: &mut IndexWorld, key: u32) {
    assert_eq!(world.key_of(world.tree.root()), Some(key));
}

#[then(regex = r"^the minimum key should be (\d+)$")]
fn minimum_key(world: &mut IndexWorld, key: u32) {
    assert_eq!(world.key_of(world.tree.min()), Some(key));
}

#[then(regex = r"^the maximum key should be (\d+)$")]
fn maximum_key(world: &mut IndexWorld, key: u32) {
    assert_eq!(world.key_of(world.tree.max()), Some(key));
}

#[then(regex = r"^the minimum should be node (\d+)$")]
fn minimum_node(world: &mut IndexWorld, node: u32) {
    assert_eq!(world.tree.min(), Some(NodeId(node)));
}

#[then(regex = r"^the maximum should be node (\d+)$")]
fn maximum_node(world: &mut IndexWorld, node: u32) {
    assert_eq!(world.tree.max(), Some(NodeId(node)));
}

#[then(regex = r"^node (\d+) should be off-tree$")]
fn node_off_tree(world: &mut IndexWorld, node: u32) {
    assert!(world.nodes[node as usize].node.is_off_tree());
}

#[then(regex = r"^node (\d+) should have been rejected$")]
fn node_rejected(world: &mut IndexWorld, node: u32) {
    assert!(world.rejected.contains(&NodeId(node)));
    assert!(world.nodes[node as usize].node.is_off_tree());
}

#[then(regex = r"^the keys in order should be (.+)$")]
fn keys_in_order(world: &mut IndexWorld, keys: String) {
    assert_eq!(in_order_keys(&world.tree, &world.nodes), parse_keys(&keys));
}

#[then(regex = r"^the found node should be node (\d+)$")]
fn found_node(world: &mut IndexWorld, node: u32) {
    assert_eq!(world.found, Some(NodeId(node)));
}

#[then("nothing should be found")]
fn nothing_found(world: &mut IndexWorld) {
    assert_eq!(world.found, None);
}

#[then(regex = r"^the successor of the found node should be node (\d+)$")]
fn found_successor(world: &mut IndexWorld, node: u32) {
    let found = world.found.unwrap();
    assert_eq!(navigate::successor(world.nodes.as_slice(), found), Some(NodeId(node)));
}

#[then(regex = r"^the predecessor of the found node should be node (\d+)$")]
fn found_predecessor(world: &mut IndexWorld, node: u32) {
    let found = world.found.unwrap();
    assert_eq!(navigate::predecessor(world.nodes.as_slice(), found), Some(NodeId(node)));
}

#[then(regex = r"^the drained keys should be (.+)$")]
fn drained_keys(world: &mut IndexWorld, keys: String) {
    assert_eq!(world.drained, parse_keys(&keys));
}

#[then(regex = r"^the resulting keys should be (.+)$")]
fn resulting_keys(world: &mut IndexWorld, keys: String) {
    let run = world.run.as_ref().unwrap();
    assert_eq!(run.keys, parse_keys(&keys));
}

#[then("the tree shape should match the recorded shape")]
fn shape_matches(world: &mut IndexWorld) {
    let run = world.run.as_ref().unwrap();
    assert_eq!(world.config().seed, DEFAULT_SEED, "shapes are recorded for the default seed");
    let expected = random_walk_shape(run.nodes, run.mode).unwrap();
    assert_eq!(run.shape, expected);
}

#[then("there should be one run per size in each mode")]
fn run_count(world: &mut IndexWorld) {
    let max_nodes = world.config().max_nodes;
    assert_eq!(world.runs.len(), max_nodes * 2);
    for n in 1..=max_nodes {
        for mode in [Mode::Unique, Mode::Multiset] {
            assert!(world.runs.iter().any(|run| run.nodes == n && run.mode == mode));
        }
    }
}

#[then("every run with a recorded shape should match it")]
fn every_shape_matches(world: &mut IndexWorld) {
    if world.config().seed != DEFAULT_SEED {
        return;
    }
    for run in &world.runs {
        if let Some(expected) = random_walk_shape(run.nodes, run.mode) {
            assert_eq!(run.shape, expected, "{} nodes, {:?}", run.nodes, run.mode);
        }
    }
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<(), HarnessError> {
    rbindex_test_framework::init_tracing();
    let config = HarnessConfig::load()?;
    info!(?config, "harness configuration loaded");
    IndexWorld::run(concat!(env!("CARGO_MANIFEST_DIR"), "/features")).await;
    Ok(())
}
