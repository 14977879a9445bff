//! # `adjgraph` - Adjacency-Matrix Graph Engine
//!
//! Directed and undirected weighted graphs stored as fixed-capacity
//! adjacency matrices, with traversal, shortest-path, topological ordering
//! and transitive closure/reduction algorithms.
//!
//! ## Key Features
//!
//! - **Representation polymorphism**: every algorithm runs unchanged on a
//!   dense row-major matrix or a sparse coordinate-list matrix, through the
//!   [`WeightedAdjacency`] trait
//! - **Cached degrees**: each [`Node`] carries in/out degree counters kept exact
//!   by the edge mutators
//! - **One traversal routine**: BFS and DFS are the same algorithm driven by a
//!   FIFO or LIFO [`Frontier`], reporting the discovery path of every node
//! - **Copy-based algorithms**: topological sort, closure and reduction work on
//!   a deep clone and never disturb the caller's graph
//!
//! ## Architecture
//!
//! ### Core Abstractions
//!
//! 1. **Adjacency stores** (`matrix`):
//!    - [`DenseMatrix`]: \(O(1)\) access, \(O(c^2)\) memory for capacity `c`
//!    - [`SparseMatrix`]: \(O(m)\) access and memory for `m` edges
//!    - Zero weight means "no edge"
//!
//! 2. **Graph engine** (`graph`):
//!    - [`MatrixGraph`]: owns the node list and the store
//!    - Capacity fixed at construction; node ids are dense and never reused
//!
//! 3. **Frontiers** (`collections`):
//!    - [`Stack`] (LIFO) yields depth-first order
//!    - [`Queue`] (FIFO) yields breadth-first order
//!
//! ### Errors
//!
//! Every fallible operation returns [`Result`]. Invalid node ids, exhausted
//! capacity and zero, NaN or infinite weights are contract violations reported before any
//! mutation; a cyclic graph passed to [`MatrixGraph::topological_sort`] is an
//! ordinary outcome ([`GraphError::CyclicGraph`]).
//!
//! ### Features
//!
//! - `tracing`: emit `tracing` events from mutators and algorithms
//! - `parallel`: relax Floyd–Warshall rows with `rayon`
//!
//! ## Example
//!
//! ```rust
//! use adjgraph::{DenseGraph, GraphError};
//!
//! let mut g = DenseGraph::dense(true, 4);
//! let a = g.add_node("a")?;
//! let b = g.add_node("b")?;
//! let c = g.add_node("c")?;
//! g.add_edge_with_weight(a, b, 0.5)?;
//! g.add_edge_with_weight(b, c, 0.25)?;
//!
//! let order: Vec<&str> = g.topological_sort()?.iter().map(|n| n.name()).collect();
//! assert_eq!(order, ["a", "b", "c"]);
//! assert_eq!(g.shortest_path_weights()[(0, 2)], 0.75);
//!
//! g.add_edge(c, a)?;
//! assert_eq!(g.topological_sort(), Err(GraphError::CyclicGraph));
//! # Ok::<(), GraphError>(())
//! ```

#![warn(missing_docs, clippy::all, clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::must_use_candidate)]

pub mod collections;
pub mod error;
pub mod graph;
pub mod matrix;

pub use collections::{Frontier, Queue, Stack};
pub use error::{GraphError, Result};
pub use graph::{AllPairsPaths, DenseGraph, MatrixGraph, Node, NodeId, Path, SparseGraph};
pub use matrix::{DenseMatrix, SparseMatrix, Weight, WeightedAdjacency};
