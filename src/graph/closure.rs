//! Transitive closure and transitive reduction.
//!
//! Both are derived from the Floyd–Warshall distance table and return a new
//! graph; the receiver is never modified.

use num_traits::{Float, Zero};

use crate::error::{GraphError, Result};
use crate::graph::matrix_graph::MatrixGraph;
use crate::matrix::WeightedAdjacency;

impl<S: WeightedAdjacency> MatrixGraph<S> {
    /// Returns a copy with an extra edge `i -> j` for every pair that is
    /// connected by a path but not by a direct edge.
    ///
    /// Each added edge carries the minimum path weight from `i` to `j`.
    /// Pairs whose minimum weight is exactly zero cannot be represented (zero
    /// means "no edge") and are left without a shortcut.
    pub fn transitive_closure(&self) -> Self {
        let mut closure = self.clone();
        let dist = self.shortest_path_weights();
        let n = self.node_count();

        for i in 0..n {
            for j in 0..n {
                if i == j || !self.adjacency.weight(i, j).is_zero() {
                    continue;
                }
                let d = dist[(i, j)];
                if d.is_finite() && !d.is_zero() {
                    closure.insert_edge(i, j, d);
                }
            }
        }

        #[cfg(feature = "tracing")]
        tracing::debug!(
            added = closure.edge_count() - self.edge_count(),
            edges = closure.edge_count(),
            "transitive closure"
        );
        closure
    }

    /// Returns a copy without the edges implied by longer paths.
    ///
    /// Edge `i -> k` is dropped whenever some `j` (other than `i` and `k`) is
    /// reachable from `i` and reaches `k`. The result keeps the reachability
    /// relation of the input with the fewest edges.
    ///
    /// # Errors
    /// [`GraphError::NotADag`] for undirected or cyclic graphs, where the
    /// reduction is not uniquely defined.
    pub fn transitive_reduction(&self) -> Result<Self> {
        if !self.is_dag() {
            return Err(GraphError::NotADag);
        }

        let mut reduced = self.clone();
        let dist = reduced.shortest_path_weights();
        let n = reduced.node_count();

        for i in 0..n {
            for j in 0..n {
                if i == j || !dist[(i, j)].is_finite() {
                    continue;
                }
                for k in 0..n {
                    if k != j && dist[(j, k)].is_finite() {
                        reduced.erase_edge(i, k);
                    }
                }
            }
        }

        #[cfg(feature = "tracing")]
        tracing::debug!(
            removed = self.edge_count() - reduced.edge_count(),
            edges = reduced.edge_count(),
            "transitive reduction"
        );
        Ok(reduced)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::graph::{DenseGraph, NodeId, SparseGraph};

    #[test]
    fn test_closure_of_chain() {
        let mut g = SparseGraph::sparse(true, 4);
        let n: Vec<NodeId> = (0..4).map(|i| g.add_node(format!("v{i}")).unwrap()).collect();
        g.add_edge_with_weight(n[0], n[1], 1.0).unwrap();
        g.add_edge_with_weight(n[1], n[2], 2.0).unwrap();
        g.add_edge_with_weight(n[2], n[3], 4.0).unwrap();

        let closure = g.transitive_closure();
        assert_eq!(closure.edge_count(), 6);
        assert_eq!(closure.edge_weight(n[0], n[3]), Ok(Some(7.0)));
        assert_eq!(closure.edge_weight(n[1], n[3]), Ok(Some(6.0)));
        assert_eq!(closure.edge_weight(n[3], n[0]), Ok(None));
        assert!(closure.validate_invariants());

        assert_eq!(g.edge_count(), 3);
    }

    #[test]
    fn test_closure_keeps_direct_weights() {
        let mut g = DenseGraph::dense(true, 3);
        let a = g.add_node("a").unwrap();
        let b = g.add_node("b").unwrap();
        let c = g.add_node("c").unwrap();
        g.add_edge_with_weight(a, b, 1.0).unwrap();
        g.add_edge_with_weight(b, c, 1.0).unwrap();
        g.add_edge_with_weight(a, c, 9.0).unwrap();

        let closure = g.transitive_closure();
        assert_eq!(closure.edge_count(), 3);
        assert_eq!(closure.edge_weight(a, c), Ok(Some(9.0)));
    }

    #[test]
    fn test_reduction_drops_shortcuts() {
        let mut g = DenseGraph::dense(true, 4);
        let n: Vec<NodeId> = (0..4).map(|i| g.add_node(format!("v{i}")).unwrap()).collect();
        g.add_edge(n[0], n[1]).unwrap();
        g.add_edge(n[1], n[2]).unwrap();
        g.add_edge(n[2], n[3]).unwrap();
        g.add_edge(n[0], n[2]).unwrap();
        g.add_edge(n[0], n[3]).unwrap();

        let reduced = g.transitive_reduction().unwrap();
        assert_eq!(
            reduced.edges().into_iter().map(|(f, t, _)| (f.index(), t.index())).collect::<Vec<_>>(),
            vec![(0, 1), (1, 2), (2, 3)]
        );
        assert!(reduced.validate_invariants());
        assert_eq!(g.edge_count(), 5);
    }

    #[test]
    fn test_reduction_rejects_non_dags() {
        let mut cyclic = DenseGraph::dense(true, 2);
        let a = cyclic.add_node("a").unwrap();
        let b = cyclic.add_node("b").unwrap();
        cyclic.add_edge(a, b).unwrap();
        cyclic.add_edge(b, a).unwrap();
        assert_eq!(cyclic.transitive_reduction().unwrap_err(), GraphError::NotADag);

        let undirected = DenseGraph::dense(false, 2);
        assert_eq!(undirected.transitive_reduction().unwrap_err(), GraphError::NotADag);
    }
}
