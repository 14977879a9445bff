//! Node identifiers and node records.
//!
//! [`NodeId`] is a strongly-typed, dense, zero-based handle. Ids are handed out
//! by [`MatrixGraph::add_node`](crate::graph::MatrixGraph::add_node) in
//! allocation order and are never reused: nodes cannot be deleted, so an id
//! stays valid for the lifetime of its graph (and of every clone of it).

use std::fmt;

use serde::{Deserialize, Serialize};

/// A strongly-typed identifier for nodes within a graph.
///
/// `NodeId` wraps a `usize` index, which doubles as the row/column of the
/// node in the graph's adjacency store.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct NodeId(pub(crate) usize);

impl NodeId {
    /// Creates a new `NodeId` from a raw index value.
    ///
    /// Normal usage obtains ids from `add_node`; constructing one by hand is
    /// mostly useful in tests and when translating external indices.
    #[must_use]
    #[inline]
    pub const fn new(index: usize) -> Self {
        NodeId(index)
    }

    /// Returns the raw index value of this node identifier.
    #[must_use]
    #[inline]
    pub const fn index(self) -> usize {
        self.0
    }
}

impl fmt::Debug for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "NodeId({})", self.0)
    }
}

impl fmt::Display for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "n{}", self.0)
    }
}

impl From<usize> for NodeId {
    #[inline]
    fn from(index: usize) -> Self {
        NodeId(index)
    }
}

impl From<NodeId> for usize {
    #[inline]
    fn from(node: NodeId) -> Self {
        node.0
    }
}

/// A vertex of a [`MatrixGraph`](crate::graph::MatrixGraph).
///
/// The degree counters are a cache of the adjacency store's contents, kept
/// exact by every edge mutation of the owning graph. Only the graph can
/// change them; callers see nodes through shared references.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Node {
    pub(crate) id: NodeId,
    pub(crate) name: String,
    pub(crate) in_degree: usize,
    pub(crate) out_degree: usize,
}

impl Node {
    pub(crate) fn new(id: NodeId, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
            in_degree: 0,
            out_degree: 0,
        }
    }

    /// The node's id.
    #[inline]
    pub fn id(&self) -> NodeId {
        self.id
    }

    /// The name given at allocation.
    #[inline]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Number of incoming edges.
    #[inline]
    pub fn in_degree(&self) -> usize {
        self.in_degree
    }

    /// Number of outgoing edges.
    #[inline]
    pub fn out_degree(&self) -> usize {
        self.out_degree
    }
}

impl fmt::Display for Node {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.name, self.id)
    }
}
