//! A weighted graph stored as a fixed-capacity adjacency matrix.
//!
//! `MatrixGraph` owns an ordered node list and a square [`WeightedAdjacency`]
//! store whose side is the capacity chosen at construction. Entry `(u, v)`
//! holds the weight of the edge `u -> v`; zero means "no edge". Undirected
//! graphs keep the store symmetric.
//!
//! Each [`Node`] caches its in/out degree. The counters are updated inside
//! the edge mutators and never recomputed from the store, so every mutator
//! here must keep them exact (see [`MatrixGraph::validate_invariants`]).
//!
//! ### Performance Characteristics
//! | Operation | Dense | Sparse |
//! |-----------|-------|--------|
//! | `add_node` | \(O(1)\) | \(O(1)\) |
//! | `add_edge` / `remove_edge` | \(O(1)\) | \(O(m)\) |
//! | `children` / `parents` | \(O(n)\) | \(O(m + k \log k)\) |
//! | `leaves` / `roots` | \(O(n)\) | \(O(n)\) |
//! | `clone` | \(O(c^2)\) | \(O(m)\) |
//!
//! where `n` is the node count, `m` the number of stored entries and `c` the capacity.

use num_traits::{Float, One, Zero};

use crate::error::{GraphError, Result};
use crate::graph::node::{Node, NodeId};
use crate::matrix::{DenseMatrix, SparseMatrix, WeightedAdjacency};

/// A graph backed by a dense `f64` adjacency matrix.
pub type DenseGraph = MatrixGraph<DenseMatrix<f64>>;

/// A graph backed by a sparse coordinate-list `f64` adjacency matrix.
pub type SparseGraph = MatrixGraph<SparseMatrix<f64>>;

/// A directed or undirected weighted graph over an adjacency store `S`.
///
/// `Clone` produces a fully independent deep copy (new node list, new store);
/// algorithms that need a scratch graph start from one.
#[derive(Debug, Clone)]
pub struct MatrixGraph<S = DenseMatrix<f64>> {
    directed: bool,
    pub(crate) nodes: Vec<Node>,
    pub(crate) adjacency: S,
}

impl MatrixGraph<DenseMatrix<f64>> {
    /// Creates an empty graph on a dense store with room for `max_nodes` nodes.
    ///
    /// Memory is \(O(\text{max\_nodes}^2)\) up front; edge lookups are \(O(1)\).
    pub fn dense(directed: bool, max_nodes: usize) -> Self {
        Self::new(directed, max_nodes)
    }
}

impl MatrixGraph<SparseMatrix<f64>> {
    /// Creates an empty graph on a sparse store with room for `max_nodes` nodes.
    ///
    /// Memory grows with the number of edges; edge lookups scan the stored edges.
    pub fn sparse(directed: bool, max_nodes: usize) -> Self {
        Self::new(directed, max_nodes)
    }
}

impl<S: WeightedAdjacency> MatrixGraph<S> {
    /// Creates an empty graph whose store is preallocated to `max_nodes × max_nodes`.
    pub fn new(directed: bool, max_nodes: usize) -> Self {
        Self::with_store(directed, S::with_dimensions(max_nodes, max_nodes))
    }

    /// Creates an empty graph on a caller-provided store.
    ///
    /// The store's side length becomes the node capacity.
    ///
    /// # Panics
    /// Panics if the store is not square or already holds entries.
    pub fn with_store(directed: bool, store: S) -> Self {
        assert_eq!(
            store.rows(),
            store.cols(),
            "adjacency store must be square, got {}x{}",
            store.rows(),
            store.cols()
        );
        assert!(!store.has_nonzero(), "adjacency store must start empty");

        Self {
            directed,
            nodes: Vec::with_capacity(store.rows()),
            adjacency: store,
        }
    }

    /// Maximum number of nodes this graph can hold.
    #[inline]
    pub fn capacity(&self) -> usize {
        self.adjacency.rows()
    }

    /// Number of nodes allocated so far.
    #[inline]
    pub fn size(&self) -> usize {
        self.nodes.len()
    }

    /// Alias for [`size`](Self::size).
    #[inline]
    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    /// Returns `true` if no node has been allocated.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Returns the direction flag chosen at construction.
    #[inline]
    pub fn is_directed(&self) -> bool {
        self.directed
    }

    /// Read-only access to the backing store.
    #[inline]
    pub fn adjacency(&self) -> &S {
        &self.adjacency
    }

    /// Appends a node with both degrees zero and returns its id.
    ///
    /// # Errors
    /// [`GraphError::CapacityExceeded`] once `capacity()` nodes exist.
    pub fn add_node(&mut self, name: impl Into<String>) -> Result<NodeId> {
        let capacity = self.capacity();
        if self.nodes.len() == capacity {
            return Err(GraphError::CapacityExceeded { capacity });
        }

        let id = NodeId::new(self.nodes.len());
        let node = Node::new(id, name);
        #[cfg(feature = "tracing")]
        tracing::debug!(node = %id, name = %node.name, "node added");
        self.nodes.push(node);
        Ok(id)
    }

    /// Fails with [`GraphError::InvalidNode`] unless `id` is in `[0, node_count)`.
    #[inline]
    pub(crate) fn check_node(&self, id: NodeId) -> Result<()> {
        if id.index() < self.nodes.len() {
            Ok(())
        } else {
            Err(GraphError::InvalidNode {
                id,
                node_count: self.nodes.len(),
            })
        }
    }

    /// Returns the node with the given id.
    pub fn node(&self, id: NodeId) -> Result<&Node> {
        self.check_node(id)?;
        Ok(&self.nodes[id.index()])
    }

    /// All nodes in id order.
    #[inline]
    pub fn nodes(&self) -> &[Node] {
        &self.nodes
    }

    /// Returns the first node with the given name.
    pub fn find_node(&self, name: &str) -> Option<&Node> {
        self.nodes.iter().find(|n| n.name == name)
    }

    /// Adds an edge of weight one. See [`add_edge_with_weight`](Self::add_edge_with_weight).
    pub fn add_edge(&mut self, from: NodeId, to: NodeId) -> Result<()> {
        self.add_edge_with_weight(from, to, S::Weight::one())
    }

    /// Adds (or re-weights) the edge `from -> to`.
    ///
    /// Undirected graphs also store `to -> from`. Degrees change only when the
    /// edge did not exist yet; an undirected self-loop adds two to both of the
    /// node's counters.
    ///
    /// # Errors
    /// - [`GraphError::InvalidNode`] if either id is out of range.
    /// - [`GraphError::InvalidWeight`] if `weight` is zero, NaN or infinite.
    pub fn add_edge_with_weight(&mut self, from: NodeId, to: NodeId, weight: S::Weight) -> Result<()> {
        self.check_node(from)?;
        self.check_node(to)?;
        if weight.is_zero() || !weight.is_finite() {
            return Err(GraphError::InvalidWeight);
        }

        #[cfg(feature = "tracing")]
        tracing::trace!(from = %from, to = %to, weight = ?weight, "edge added");
        self.insert_edge(from.index(), to.index(), weight);
        Ok(())
    }

    /// Removes the edge `from -> to` (and its mirror in undirected graphs).
    ///
    /// Returns `Ok(false)` if there was no such edge.
    ///
    /// # Errors
    /// [`GraphError::InvalidNode`] if either id is out of range.
    pub fn remove_edge(&mut self, from: NodeId, to: NodeId) -> Result<bool> {
        self.check_node(from)?;
        self.check_node(to)?;

        let removed = self.erase_edge(from.index(), to.index());
        #[cfg(feature = "tracing")]
        if removed {
            tracing::trace!(from = %from, to = %to, "edge removed");
        }
        Ok(removed)
    }

    /// Writes an edge between two validated indices and updates the degree cache.
    pub(crate) fn insert_edge(&mut self, from: usize, to: usize, weight: S::Weight) {
        let existed = !self.adjacency.weight(from, to).is_zero();
        self.adjacency.set_weight(from, to, weight);
        if !self.directed {
            self.adjacency.set_weight(to, from, weight);
        }
        if existed {
            return;
        }

        self.nodes[from].out_degree += 1;
        self.nodes[to].in_degree += 1;
        if !self.directed {
            self.nodes[to].out_degree += 1;
            self.nodes[from].in_degree += 1;
        }
    }

    /// Clears an edge between two validated indices and updates the degree cache.
    pub(crate) fn erase_edge(&mut self, from: usize, to: usize) -> bool {
        if self.adjacency.weight(from, to).is_zero() {
            return false;
        }

        let zero = S::Weight::zero();
        self.adjacency.set_weight(from, to, zero);
        self.nodes[from].out_degree -= 1;
        self.nodes[to].in_degree -= 1;
        if !self.directed {
            self.adjacency.set_weight(to, from, zero);
            self.nodes[to].out_degree -= 1;
            self.nodes[from].in_degree -= 1;
        }
        true
    }

    /// Nodes reachable over one outgoing edge, in ascending id order.
    pub fn children(&self, of: NodeId) -> Result<Vec<&Node>> {
        Ok(self.children_with_weights(of)?.into_iter().map(|(n, _)| n).collect())
    }

    /// Like [`children`](Self::children), paired with the edge weights.
    pub fn children_with_weights(&self, of: NodeId) -> Result<Vec<(&Node, S::Weight)>> {
        self.check_node(of)?;
        Ok(self
            .adjacency
            .row_entries(of.index())
            .into_iter()
            .map(|(col, w)| (&self.nodes[col], w))
            .collect())
    }

    /// Nodes with an edge into `of`, in ascending id order.
    pub fn parents(&self, of: NodeId) -> Result<Vec<&Node>> {
        Ok(self.parents_with_weights(of)?.into_iter().map(|(n, _)| n).collect())
    }

    /// Like [`parents`](Self::parents), paired with the edge weights.
    pub fn parents_with_weights(&self, of: NodeId) -> Result<Vec<(&Node, S::Weight)>> {
        self.check_node(of)?;
        Ok(self
            .adjacency
            .col_entries(of.index())
            .into_iter()
            .map(|(row, w)| (&self.nodes[row], w))
            .collect())
    }

    /// Nodes without outgoing edges, in id order.
    pub fn leaves(&self) -> Vec<&Node> {
        self.nodes.iter().filter(|n| n.out_degree == 0).collect()
    }

    /// Nodes without incoming edges, in id order.
    pub fn roots(&self) -> Vec<&Node> {
        self.nodes.iter().filter(|n| n.in_degree == 0).collect()
    }

    /// Returns `true` if the store holds at least one edge.
    #[inline]
    pub fn has_edges(&self) -> bool {
        self.adjacency.has_nonzero()
    }

    /// Returns `true` if the edge `from -> to` exists.
    pub fn has_edge(&self, from: NodeId, to: NodeId) -> Result<bool> {
        Ok(self.edge_weight(from, to)?.is_some())
    }

    /// Weight of the edge `from -> to`, if present.
    pub fn edge_weight(&self, from: NodeId, to: NodeId) -> Result<Option<S::Weight>> {
        self.check_node(from)?;
        self.check_node(to)?;
        let w = self.adjacency.weight(from.index(), to.index());
        Ok((!w.is_zero()).then_some(w))
    }

    /// Number of edges. An undirected edge (including a self-loop) counts once.
    pub fn edge_count(&self) -> usize {
        let stored = self.adjacency.count_nonzero();
        if self.directed {
            return stored;
        }
        let loops = (0..self.nodes.len())
            .filter(|&i| !self.adjacency.weight(i, i).is_zero())
            .count();
        (stored + loops) / 2
    }

    /// All edges as `(from, to, weight)` in row-major order.
    ///
    /// Undirected graphs report each edge once, with `from <= to`.
    pub fn edges(&self) -> Vec<(NodeId, NodeId, S::Weight)> {
        let mut out = Vec::new();
        for from in 0..self.nodes.len() {
            for (to, w) in self.adjacency.row_entries(from) {
                if self.directed || from <= to {
                    out.push((NodeId::new(from), NodeId::new(to), w));
                }
            }
        }
        out
    }

    /// Checks that every cached degree matches the store, and that undirected
    /// stores are symmetric.
    ///
    /// Returns `true` if all invariants hold.
    pub fn validate_invariants(&self) -> bool {
        self.nodes.iter().enumerate().all(|(i, node)| {
            let out = self.adjacency.row_entries(i);
            let inc = self.adjacency.col_entries(i);
            if self.directed {
                return node.id.index() == i && node.out_degree == out.len() && node.in_degree == inc.len();
            }

            let has_loop = out.iter().any(|&(j, _)| j == i);
            let expected = out.len() + usize::from(has_loop);
            let symmetric = out == inc;
            node.id.index() == i && symmetric && node.out_degree == expected && node.in_degree == expected
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ids(nodes: &[&Node]) -> Vec<usize> {
        nodes.iter().map(|n| n.id().index()).collect()
    }

    #[test]
    fn test_add_node_until_capacity() {
        let mut g = MatrixGraph::dense(true, 2);
        assert!(g.is_empty());
        assert_eq!(g.add_node("a"), Ok(NodeId::new(0)));
        assert_eq!(g.add_node("b"), Ok(NodeId::new(1)));
        assert_eq!(g.add_node("c"), Err(GraphError::CapacityExceeded { capacity: 2 }));
        assert_eq!(g.size(), 2);
        assert_eq!(g.capacity(), 2);
        assert_eq!(g.find_node("b").map(Node::id), Some(NodeId::new(1)));
        assert!(g.find_node("z").is_none());
    }

    #[test]
    fn test_invalid_node_is_rejected_without_mutation() {
        let mut g = MatrixGraph::sparse(true, 4);
        let a = g.add_node("a").unwrap();
        let ghost = NodeId::new(1);

        let err = g.add_edge(a, ghost).unwrap_err();
        assert_eq!(err, GraphError::InvalidNode { id: ghost, node_count: 1 });
        assert!(err.is_contract_violation());
        assert!(!g.has_edges());
        assert_eq!(g.node(a).unwrap().out_degree(), 0);

        assert!(g.remove_edge(ghost, a).is_err());
        assert!(g.children(ghost).is_err());
        assert!(g.parents(ghost).is_err());
        assert!(g.node(ghost).is_err());
    }

    #[test]
    fn test_zero_and_nan_weights_are_rejected() {
        let mut g = MatrixGraph::dense(true, 2);
        let a = g.add_node("a").unwrap();
        let b = g.add_node("b").unwrap();
        assert_eq!(g.add_edge_with_weight(a, b, 0.0), Err(GraphError::InvalidWeight));
        assert_eq!(g.add_edge_with_weight(a, b, f64::NAN), Err(GraphError::InvalidWeight));
        assert!(!g.has_edges());
    }

    #[test]
    fn test_infinite_weights_are_rejected() {
        let mut g = MatrixGraph::dense(true, 3);
        let a = g.add_node("a").unwrap();
        let b = g.add_node("b").unwrap();
        let c = g.add_node("c").unwrap();
        assert_eq!(g.add_edge_with_weight(a, b, f64::INFINITY), Err(GraphError::InvalidWeight));
        assert_eq!(g.add_edge_with_weight(a, b, f64::NEG_INFINITY), Err(GraphError::InvalidWeight));
        assert!(!g.has_edges());
        assert_eq!(g.node(a).unwrap().out_degree(), 0);

        // Reachability and the distance table agree on the edges that remain.
        g.add_edge_with_weight(b, c, 1.0).unwrap();
        assert_eq!(g.has_path(a, c), Ok(false));
        assert_eq!(g.shortest_path_weights()[(a.index(), c.index())], f64::INFINITY);
        assert_eq!(g.transitive_closure().edge_count(), 1);
    }

    #[test]
    fn test_directed_edges_and_degrees() {
        let mut g = MatrixGraph::dense(true, 4);
        let a = g.add_node("a").unwrap();
        let b = g.add_node("b").unwrap();
        let c = g.add_node("c").unwrap();

        g.add_edge_with_weight(a, c, 2.0).unwrap();
        g.add_edge_with_weight(a, b, 1.0).unwrap();
        g.add_edge(c, b).unwrap();

        assert_eq!(ids(&g.children(a).unwrap()), vec![1, 2]);
        assert_eq!(ids(&g.parents(b).unwrap()), vec![0, 2]);
        let weights: Vec<f64> = g.children_with_weights(a).unwrap().into_iter().map(|(_, w)| w).collect();
        assert_eq!(weights, vec![1.0, 2.0]);

        assert_eq!(g.node(a).unwrap().out_degree(), 2);
        assert_eq!(g.node(b).unwrap().in_degree(), 2);
        assert_eq!(ids(&g.roots()), vec![0]);
        assert_eq!(ids(&g.leaves()), vec![1]);
        assert_eq!(g.edge_count(), 3);
        assert!(g.validate_invariants());
    }

    #[test]
    fn test_reweighting_keeps_degrees_exact() {
        let mut g = MatrixGraph::dense(true, 2);
        let a = g.add_node("a").unwrap();
        let b = g.add_node("b").unwrap();
        g.add_edge_with_weight(a, b, 1.0).unwrap();
        g.add_edge_with_weight(a, b, 5.0).unwrap();
        assert_eq!(g.edge_weight(a, b), Ok(Some(5.0)));
        assert_eq!(g.node(a).unwrap().out_degree(), 1);
        assert_eq!(g.node(b).unwrap().in_degree(), 1);
        assert!(g.validate_invariants());
    }

    #[test]
    fn test_remove_edge_restores_state() {
        let mut g = MatrixGraph::sparse(true, 3);
        let a = g.add_node("a").unwrap();
        let b = g.add_node("b").unwrap();

        assert_eq!(g.remove_edge(a, b), Ok(false));
        g.add_edge_with_weight(a, b, 0.5).unwrap();
        assert_eq!(g.remove_edge(a, b), Ok(true));
        assert_eq!(g.remove_edge(a, b), Ok(false));

        assert!(g.children(a).unwrap().is_empty());
        assert!(g.parents(b).unwrap().is_empty());
        assert_eq!(g.node(a).unwrap().out_degree(), 0);
        assert_eq!(g.node(b).unwrap().in_degree(), 0);
        assert!(g.validate_invariants());
    }

    #[test]
    fn test_undirected_edges_mirror() {
        let mut g = MatrixGraph::dense(false, 3);
        let u = g.add_node("u").unwrap();
        let v = g.add_node("v").unwrap();
        g.add_edge_with_weight(u, v, 3.0).unwrap();

        assert_eq!(g.edge_weight(v, u), Ok(Some(3.0)));
        assert_eq!(ids(&g.children(u).unwrap()), vec![1]);
        assert_eq!(ids(&g.children(v).unwrap()), vec![0]);
        for id in [u, v] {
            let node = g.node(id).unwrap();
            assert_eq!((node.in_degree(), node.out_degree()), (1, 1));
        }
        assert_eq!(g.edge_count(), 1);
        assert_eq!(g.edges(), vec![(u, v, 3.0)]);

        g.remove_edge(v, u).unwrap();
        assert!(!g.has_edges());
        assert!(g.validate_invariants());
    }

    #[test]
    fn test_undirected_self_loop_counts_twice() {
        let mut g = MatrixGraph::dense(false, 1);
        let u = g.add_node("u").unwrap();
        g.add_edge(u, u).unwrap();

        let node = g.node(u).unwrap();
        assert_eq!((node.in_degree(), node.out_degree()), (2, 2));
        assert_eq!(g.edge_count(), 1);
        assert!(g.validate_invariants());

        g.remove_edge(u, u).unwrap();
        let node = g.node(u).unwrap();
        assert_eq!((node.in_degree(), node.out_degree()), (0, 0));
    }

    #[test]
    fn test_directed_self_loop() {
        let mut g = MatrixGraph::sparse(true, 1);
        let u = g.add_node("u").unwrap();
        g.add_edge(u, u).unwrap();
        assert_eq!(ids(&g.children(u).unwrap()), vec![0]);
        assert_eq!(ids(&g.parents(u).unwrap()), vec![0]);
        let node = g.node(u).unwrap();
        assert_eq!((node.in_degree(), node.out_degree()), (1, 1));
        assert!(g.validate_invariants());
    }

    #[test]
    fn test_clone_is_independent() {
        let mut g = MatrixGraph::dense(true, 3);
        let a = g.add_node("a").unwrap();
        let b = g.add_node("b").unwrap();
        g.add_edge(a, b).unwrap();

        let mut copy = g.clone();
        copy.remove_edge(a, b).unwrap();
        copy.add_node("c").unwrap();

        assert!(g.has_edge(a, b).unwrap());
        assert_eq!(g.size(), 2);
        assert_eq!(g.node(b).unwrap().in_degree(), 1);
        assert_eq!(copy.size(), 3);
    }

    #[test]
    #[should_panic(expected = "must be square")]
    fn test_with_store_rejects_rectangular() {
        let _ = MatrixGraph::with_store(true, DenseMatrix::<f64>::with_dimensions(2, 3));
    }
}
