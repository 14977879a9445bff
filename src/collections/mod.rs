//! Small containers used by the graph algorithms.
//!
//! - `frontier`: LIFO/FIFO pending-work containers that drive traversals
//! - `disjoint_set`: union-find over dense ids

pub mod disjoint_set;
pub mod frontier;

pub use disjoint_set::DisjointSet;
pub use frontier::{Frontier, Queue, Stack};
