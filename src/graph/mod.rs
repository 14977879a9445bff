//! Adjacency-matrix graphs and the algorithms that run on them.
//!
//! - `node`: node ids and node records
//! - `matrix_graph`: the graph itself (construction, mutation, queries)
//! - `traversal`: frontier-driven BFS/DFS with discovery paths
//! - `paths`: fewest-hop and minimum-weight shortest paths
//! - `ordering`: cycle detection, DAG/tree checks, topological sort
//! - `closure`: transitive closure and reduction

pub mod closure;
pub mod matrix_graph;
pub mod node;
pub mod ordering;
pub mod paths;
pub mod traversal;

pub use matrix_graph::{DenseGraph, MatrixGraph, SparseGraph};
pub use node::{Node, NodeId};
pub use paths::AllPairsPaths;
pub use traversal::{FrontierEntry, Path};
