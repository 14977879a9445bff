//! Error type shared by every graph operation.
//!
//! Errors fall into two groups:
//! - **contract violations** (`InvalidNode`, `CapacityExceeded`, `InvalidWeight`):
//!   the caller passed something the graph can never accept. They are reported
//!   before any mutation takes place, so the graph is unchanged afterwards.
//! - **data-dependent outcomes** (`CyclicGraph`, `NotADag`): the request was
//!   well-formed but the graph's shape does not admit an answer.

use thiserror::Error;

use crate::graph::NodeId;

/// Errors reported by [`MatrixGraph`](crate::graph::MatrixGraph) and its algorithms.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GraphError {
    /// A node id outside `[0, node_count)` was passed to an operation.
    #[error("node {id} is out of range for a graph with {node_count} nodes")]
    InvalidNode {
        /// The offending id.
        id: NodeId,
        /// Number of nodes allocated when the call was made.
        node_count: usize,
    },

    /// `add_node` was called on a graph whose fixed capacity is exhausted.
    #[error("graph capacity of {capacity} nodes exceeded")]
    CapacityExceeded {
        /// The capacity chosen at construction.
        capacity: usize,
    },

    /// Edge weights must be finite and nonzero: zero means "no edge" and
    /// infinity means "unreachable".
    #[error("edge weight must be finite and nonzero")]
    InvalidWeight,

    /// A topological order was requested for a graph that contains a cycle.
    #[error("graph contains a cycle")]
    CyclicGraph,

    /// The operation is only defined for directed acyclic graphs.
    #[error("operation requires a directed acyclic graph")]
    NotADag,
}

impl GraphError {
    /// Returns `true` for errors caused by invalid arguments rather than by
    /// the shape of the graph.
    ///
    /// Contract violations indicate a bug in the caller; `CyclicGraph` and
    /// `NotADag` are ordinary outcomes that callers are expected to handle.
    pub fn is_contract_violation(&self) -> bool {
        matches!(
            self,
            GraphError::InvalidNode { .. } | GraphError::CapacityExceeded { .. } | GraphError::InvalidWeight
        )
    }
}

/// Result alias used throughout the crate.
pub type Result<T> = std::result::Result<T, GraphError>;
