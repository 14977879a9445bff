//! Cycle detection, DAG/tree classification and topological ordering.

use crate::collections::{DisjointSet, Frontier, Queue};
use crate::error::{GraphError, Result};
use crate::graph::matrix_graph::MatrixGraph;
use crate::graph::node::{Node, NodeId};
use crate::matrix::WeightedAdjacency;

#[derive(Clone, Copy, PartialEq, Eq)]
enum Color {
    /// Not yet discovered.
    White,
    /// On the current DFS path.
    Gray,
    /// Fully explored.
    Black,
}

struct Frame {
    node: usize,
    children: Vec<usize>,
    cursor: usize,
}

impl<S: WeightedAdjacency> MatrixGraph<S> {
    fn child_indices(&self, node: usize) -> Vec<usize> {
        self.adjacency.row_entries(node).into_iter().map(|(c, _)| c).collect()
    }

    /// Returns `true` if the graph contains a cycle.
    ///
    /// Directed graphs look for a back edge with an iterative three-colour DFS
    /// (a self-loop counts). Undirected graphs report a cycle for a self-loop
    /// or for an edge joining two already connected nodes.
    pub fn has_cycles(&self) -> bool {
        let found = if self.is_directed() {
            self.has_directed_cycle()
        } else {
            self.has_undirected_cycle()
        };
        #[cfg(feature = "tracing")]
        if found {
            tracing::debug!(directed = self.is_directed(), "cycle detected");
        }
        found
    }

    fn has_directed_cycle(&self) -> bool {
        let n = self.node_count();
        let mut color = vec![Color::White; n];

        for root in 0..n {
            if color[root] != Color::White {
                continue;
            }

            color[root] = Color::Gray;
            let mut stack = vec![Frame {
                node: root,
                children: self.child_indices(root),
                cursor: 0,
            }];

            while let Some(frame) = stack.last_mut() {
                let Some(&child) = frame.children.get(frame.cursor) else {
                    color[frame.node] = Color::Black;
                    stack.pop();
                    continue;
                };
                frame.cursor += 1;

                match color[child] {
                    Color::Gray => return true,
                    Color::White => {
                        color[child] = Color::Gray;
                        stack.push(Frame {
                            node: child,
                            children: self.child_indices(child),
                            cursor: 0,
                        });
                    }
                    Color::Black => {}
                }
            }
        }

        false
    }

    fn has_undirected_cycle(&self) -> bool {
        let mut components = DisjointSet::new(self.node_count());
        self.edges()
            .into_iter()
            .any(|(u, v, _)| u == v || !components.union(u.index(), v.index()))
    }

    /// Returns `true` for a directed graph without cycles.
    ///
    /// Undirected graphs are never DAGs, even when acyclic.
    pub fn is_dag(&self) -> bool {
        self.is_directed() && !self.has_cycles()
    }

    /// Returns `true` for a DAG in which no node has more than one parent.
    pub fn is_tree(&self) -> bool {
        self.is_dag() && self.nodes.iter().all(|n| n.in_degree <= 1)
    }

    /// Orders the nodes so that every edge points forward (Kahn's algorithm).
    ///
    /// Works on a scratch copy: the roots are queued in id order, and each
    /// dequeued node's outgoing edges are removed from the copy; a child is
    /// queued when its last incoming edge goes. Ready nodes come out in the
    /// order they became ready.
    ///
    /// # Errors
    /// [`GraphError::CyclicGraph`] if edges remain once no node is ready.
    pub fn topological_sort(&self) -> Result<Vec<&Node>> {
        let mut work = self.clone();
        let mut ready: Queue<NodeId> = work.roots().into_iter().map(Node::id).collect();
        let mut order = Vec::with_capacity(self.node_count());

        while let Some(id) = ready.pop() {
            order.push(&self.nodes[id.index()]);
            for child in work.child_indices(id.index()) {
                let last_parent = work.nodes[child].in_degree == 1;
                work.erase_edge(id.index(), child);
                if last_parent {
                    ready.push(NodeId::new(child));
                }
            }
        }

        if work.has_edges() {
            #[cfg(feature = "tracing")]
            tracing::debug!(
                ordered = order.len(),
                nodes = self.node_count(),
                "topological sort found a cycle"
            );
            return Err(GraphError::CyclicGraph);
        }

        #[cfg(feature = "tracing")]
        tracing::debug!(nodes = order.len(), "topological sort complete");
        Ok(order)
    }
}
