//! Frontier-driven graph traversal.
//!
//! Breadth-first and depth-first search share one routine, [`visit`]; the
//! only difference between them is the pop order of the [`Frontier`] that
//! holds pending work. Each pending entry carries the path that discovered it
//! and the weights along that path, so the visitor sees, for every node, the
//! exact route the traversal took to reach it.
//!
//! Children are pushed in ascending id order. With a [`Queue`] this gives
//! fewest-edge discovery paths; with a [`Stack`] the most recently pushed
//! (highest id) pending child is explored first.

use serde::{Deserialize, Serialize};

use crate::collections::{Frontier, Queue, Stack};
use crate::error::Result;
use crate::graph::matrix_graph::MatrixGraph;
use crate::graph::node::{Node, NodeId};
use crate::matrix::{Weight, WeightedAdjacency};

/// A route through the graph: `nodes[i] -> nodes[i + 1]` has weight `weights[i]`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Path<W> {
    pub(crate) nodes: Vec<NodeId>,
    pub(crate) weights: Vec<W>,
}

impl<W: Weight> Path<W> {
    /// The nodes along the path, source first.
    #[inline]
    pub fn nodes(&self) -> &[NodeId] {
        &self.nodes
    }

    /// Edge weights along the path; one shorter than [`nodes`](Self::nodes).
    #[inline]
    pub fn weights(&self) -> &[W] {
        &self.weights
    }

    /// Number of edges on the path.
    #[inline]
    pub fn hops(&self) -> usize {
        self.weights.len()
    }

    /// First node of the path, `None` for an empty path.
    ///
    /// Paths returned by the graph always hold at least one node; an empty
    /// one can only come from deserialization.
    #[inline]
    pub fn source(&self) -> Option<NodeId> {
        self.nodes.first().copied()
    }

    /// Last node of the path, `None` for an empty path.
    #[inline]
    pub fn target(&self) -> Option<NodeId> {
        self.nodes.last().copied()
    }

    /// Sum of the edge weights; zero for a single-node path.
    pub fn total_weight(&self) -> W {
        self.weights.iter().fold(W::zero(), |acc, &w| acc + w)
    }

    /// Splits the path into its node and weight sequences.
    pub fn into_parts(self) -> (Vec<NodeId>, Vec<W>) {
        (self.nodes, self.weights)
    }
}

/// A pending unit of traversal work: a node and the route that discovered it.
#[derive(Debug, Clone)]
pub struct FrontierEntry<W> {
    node: NodeId,
    path: Vec<NodeId>,
    weights: Vec<W>,
}

impl<W> FrontierEntry<W> {
    /// The node waiting to be visited.
    #[inline]
    pub fn node(&self) -> NodeId {
        self.node
    }
}

/// Visits every node reachable from `start` in the order dictated by `frontier`.
///
/// A node can be pushed more than once (duplicates are only pruned against
/// the visited set at push time), so entries for already visited nodes are
/// skipped when popped. Stops as soon as `visitor` returns `true`, and returns
/// whether it did.
///
/// `start` must be a valid node of `graph`.
pub(crate) fn visit<S, F, V>(graph: &MatrixGraph<S>, frontier: &mut F, start: NodeId, visitor: &mut V) -> bool
where
    S: WeightedAdjacency,
    F: Frontier<FrontierEntry<S::Weight>>,
    V: FnMut(&Node, &[NodeId], &[S::Weight]) -> bool,
{
    let mut visited = vec![false; graph.node_count()];
    frontier.push(FrontierEntry {
        node: start,
        path: vec![start],
        weights: Vec::new(),
    });

    while let Some(entry) = frontier.pop() {
        let idx = entry.node.index();
        if visited[idx] {
            continue;
        }
        visited[idx] = true;

        if visitor(&graph.nodes[idx], &entry.path, &entry.weights) {
            return true;
        }

        for (child, w) in graph.adjacency.row_entries(idx) {
            if visited[child] {
                continue;
            }
            let child = NodeId::new(child);
            let mut path = entry.path.clone();
            path.push(child);
            let mut weights = entry.weights.clone();
            weights.push(w);
            frontier.push(FrontierEntry {
                node: child,
                path,
                weights,
            });
        }
    }

    false
}

impl<S: WeightedAdjacency> MatrixGraph<S> {
    /// Breadth-first traversal from `start`.
    ///
    /// `visitor(node, path, weights)` is called once per reachable node with the
    /// fewest-edge path from `start`; returning `true` stops the traversal.
    /// Returns `Ok(true)` if the visitor stopped it.
    ///
    /// # Errors
    /// [`GraphError::InvalidNode`](crate::GraphError::InvalidNode) if `start` is out of range.
    pub fn visit_bfs<V>(&self, start: NodeId, visitor: V) -> Result<bool>
    where
        V: FnMut(&Node, &[NodeId], &[S::Weight]) -> bool,
    {
        self.visit_with(Queue::new(), start, visitor)
    }

    /// Depth-first traversal from `start`. Same contract as [`visit_bfs`](Self::visit_bfs),
    /// except that the reported path is the first one found depth-first.
    pub fn visit_dfs<V>(&self, start: NodeId, visitor: V) -> Result<bool>
    where
        V: FnMut(&Node, &[NodeId], &[S::Weight]) -> bool,
    {
        self.visit_with(Stack::new(), start, visitor)
    }

    /// Traversal from `start` driven by a caller-supplied frontier.
    pub fn visit_with<F, V>(&self, mut frontier: F, start: NodeId, mut visitor: V) -> Result<bool>
    where
        F: Frontier<FrontierEntry<S::Weight>>,
        V: FnMut(&Node, &[NodeId], &[S::Weight]) -> bool,
    {
        self.check_node(start)?;
        Ok(visit(self, &mut frontier, start, &mut visitor))
    }
}
