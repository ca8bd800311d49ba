/*!
# Errors

All fallible operations of this crate return [`GraphError`]. Errors are raised eagerly
(e.g. when an edge refers to a node that does not exist) and never leave a graph in a
partially modified state.
*/

use crate::{Node, NumNodes};

/// Errors raised while building a graph or running an analysis on it.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum GraphError {
    #[error("node {node} is out of range for a graph with {number_of_nodes} nodes")]
    NodeOutOfRange { node: Node, number_of_nodes: NumNodes },

    #[error("self-loop at node {node} is not allowed")]
    SelfLoop { node: Node },

    #[error("subset DP supports at most {limit} nodes, but the graph has {number_of_nodes}")]
    TooManyNodes { number_of_nodes: NumNodes, limit: NumNodes },

    #[error("backtracking search gave up after {limit} steps")]
    StepLimitExceeded { limit: u64 },
}

pub type Result<T> = std::result::Result<T, GraphError>;
