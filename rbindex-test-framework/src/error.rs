//! Harness errors

use rbindex_tree::{NodeId, Violation};

#[derive(Debug, thiserror::Error)]
pub enum HarnessError {
    #[error("Configuration error: {0}")]
    Config(#[from] ::config::ConfigError),

    #[error("A run needs at least one node")]
    NoNodes,

    #[error("Step {step}: insert of {node} conflicted with {existing}")]
    Conflict {
        step: usize,
        node: NodeId,
        existing: NodeId,
    },

    #[error("Step {step}: {violation}")]
    Violation {
        step: usize,
        #[source]
        violation: Violation,
    },
}
