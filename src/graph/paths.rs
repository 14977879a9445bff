//! Shortest paths.
//!
//! Two notions of "shortest" live here:
//! - [`MatrixGraph::shortest_path`] is the fewest-edge path, found by a
//!   breadth-first traversal. It matches the minimum-weight path only when all
//!   edges weigh the same.
//! - [`MatrixGraph::shortest_path_weights`] is the Floyd–Warshall all-pairs
//!   minimum-weight distance table, and [`MatrixGraph::lightest_path`] recovers
//!   the matching minimum-weight route.
//!
//! Floyd–Warshall runs in \(O(n^3)\) time and \(O(n^2)\) memory over the
//! allocated nodes (not the full capacity). With the `parallel` feature each
//! round relaxes the rows of the table concurrently.

use num_traits::{Float, Zero};
#[cfg(feature = "parallel")]
use rayon::prelude::*;

use crate::error::Result;
use crate::graph::matrix_graph::MatrixGraph;
use crate::graph::node::NodeId;
use crate::graph::traversal::Path;
use crate::matrix::{DenseMatrix, Weight, WeightedAdjacency};

/// Minimum-weight distances and next hops between every ordered pair of nodes.
#[derive(Debug, Clone, PartialEq)]
pub struct AllPairsPaths<W> {
    distances: DenseMatrix<W>,
    next: DenseMatrix<Option<NodeId>>,
}

impl<W: Weight> AllPairsPaths<W> {
    /// Number of nodes covered by the tables.
    #[inline]
    pub fn len(&self) -> usize {
        self.distances.rows()
    }

    /// Returns `true` if the tables cover no nodes.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// The `n × n` distance table; `+∞` marks unreachable pairs.
    #[inline]
    pub fn distances(&self) -> &DenseMatrix<W> {
        &self.distances
    }

    /// Consumes the result, keeping only the distance table.
    pub fn into_distances(self) -> DenseMatrix<W> {
        self.distances
    }

    /// Minimum total weight from `from` to `to`, `+∞` if unreachable.
    ///
    /// # Panics
    /// Panics if either id is outside the table.
    pub fn distance(&self, from: NodeId, to: NodeId) -> W {
        self.distances[(from.index(), to.index())]
    }

    /// The nodes of a minimum-weight route from `from` to `to`.
    ///
    /// Returns `None` when `to` is unreachable, or when a negative cycle keeps
    /// the route from being well defined.
    ///
    /// # Panics
    /// Panics if either id is outside the table.
    pub fn route(&self, from: NodeId, to: NodeId) -> Option<Vec<NodeId>> {
        let mut current = self.next[(from.index(), to.index())]?;
        let mut nodes = vec![from];
        if from == to {
            return Some(nodes);
        }

        nodes.push(current);
        while current != to {
            current = self.next[(current.index(), to.index())]?;
            nodes.push(current);
            if nodes.len() > self.len() {
                return None;
            }
        }
        Some(nodes)
    }
}

impl<S: WeightedAdjacency> MatrixGraph<S> {
    /// Fewest-edge path from `from` to `to`, found breadth-first.
    ///
    /// `from == to` yields the single-node path. Returns `Ok(None)` when `to`
    /// is unreachable.
    pub fn shortest_path(&self, from: NodeId, to: NodeId) -> Result<Option<Path<S::Weight>>> {
        self.check_node(from)?;
        self.check_node(to)?;
        if from == to {
            return Ok(Some(Path {
                nodes: vec![from],
                weights: Vec::new(),
            }));
        }

        let mut found = None;
        self.visit_bfs(from, |node, path, weights| {
            if node.id() != to {
                return false;
            }
            found = Some(Path {
                nodes: path.to_vec(),
                weights: weights.to_vec(),
            });
            true
        })?;
        Ok(found)
    }

    /// Total weight of [`shortest_path`](Self::shortest_path): `+∞` when
    /// unreachable, zero when `from == to`.
    pub fn shortest_path_weight(&self, from: NodeId, to: NodeId) -> Result<S::Weight> {
        Ok(self
            .shortest_path(from, to)?
            .map_or_else(S::Weight::infinity, |path| path.total_weight()))
    }

    /// Returns `true` if `to` is reachable from `from` (always for `from == to`).
    pub fn has_path(&self, from: NodeId, to: NodeId) -> Result<bool> {
        Ok(self.shortest_path(from, to)?.is_some())
    }

    /// All-pairs minimum-weight distances (Floyd–Warshall).
    ///
    /// Entry `(i, j)` is zero on the diagonal, `+∞` for unreachable pairs and
    /// the minimum path weight otherwise.
    pub fn shortest_path_weights(&self) -> DenseMatrix<S::Weight> {
        self.all_pairs_shortest_paths().into_distances()
    }

    /// Floyd–Warshall distances together with a next-hop table for route recovery.
    pub fn all_pairs_shortest_paths(&self) -> AllPairsPaths<S::Weight> {
        let n = self.node_count();
        let mut distances = DenseMatrix::filled(n, n, S::Weight::infinity());
        let mut next: DenseMatrix<Option<NodeId>> = DenseMatrix::filled(n, n, None);

        for i in 0..n {
            for (j, w) in self.adjacency.row_entries(i) {
                distances[(i, j)] = w;
                next[(i, j)] = Some(NodeId::new(j));
            }
            distances[(i, i)] = S::Weight::zero();
            next[(i, i)] = Some(NodeId::new(i));
        }

        #[cfg(feature = "tracing")]
        tracing::debug!(nodes = n, "floyd-warshall");

        if n == 0 {
            return AllPairsPaths { distances, next };
        }

        for k in 0..n {
            let via_k = distances.row(k).map(<[_]>::to_vec).unwrap_or_default();
            let relax = |(dist_row, next_row): (&mut [S::Weight], &mut [Option<NodeId>])| {
                let to_k = dist_row[k];
                if !to_k.is_finite() {
                    return;
                }
                let hop = next_row[k];
                for (j, &from_k) in via_k.iter().enumerate() {
                    let candidate = to_k + from_k;
                    if candidate < dist_row[j] {
                        dist_row[j] = candidate;
                        next_row[j] = hop;
                    }
                }
            };

            #[cfg(feature = "parallel")]
            distances
                .as_mut_slice()
                .par_chunks_mut(n)
                .zip(next.as_mut_slice().par_chunks_mut(n))
                .for_each(relax);

            #[cfg(not(feature = "parallel"))]
            distances
                .as_mut_slice()
                .chunks_mut(n)
                .zip(next.as_mut_slice().chunks_mut(n))
                .for_each(relax);
        }

        AllPairsPaths { distances, next }
    }

    /// Minimum-weight path from `from` to `to`, or `Ok(None)` if unreachable.
    ///
    /// Computes the full all-pairs table; prefer
    /// [`all_pairs_shortest_paths`](Self::all_pairs_shortest_paths) when
    /// querying many pairs.
    pub fn lightest_path(&self, from: NodeId, to: NodeId) -> Result<Option<Path<S::Weight>>> {
        self.check_node(from)?;
        self.check_node(to)?;

        let Some(nodes) = self.all_pairs_shortest_paths().route(from, to) else {
            return Ok(None);
        };
        let weights = nodes
            .windows(2)
            .map(|hop| self.adjacency.weight(hop[0].index(), hop[1].index()))
            .collect();
        Ok(Some(Path { nodes, weights }))
    }
}
