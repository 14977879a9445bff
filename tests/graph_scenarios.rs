use adjgraph::{DenseMatrix, GraphError, MatrixGraph, Node, NodeId, SparseMatrix, WeightedAdjacency};

const EPS: f64 = 1e-9;

/// a->b(0.1), a->c(0.2), b->d(0.3), b->e(0.4), e->f(0.5), c->f(0.6)
fn scenario<S: WeightedAdjacency<Weight = f64>>() -> anyhow::Result<MatrixGraph<S>> {
    let mut g = MatrixGraph::<S>::new(true, 6);
    let ids: Vec<NodeId> = ["a", "b", "c", "d", "e", "f"]
        .into_iter()
        .map(|name| g.add_node(name))
        .collect::<Result<_, _>>()?;
    let [a, b, c, d, e, f] = ids[..] else {
        anyhow::bail!("expected six nodes");
    };

    g.add_edge_with_weight(a, b, 0.1)?;
    g.add_edge_with_weight(a, c, 0.2)?;
    g.add_edge_with_weight(b, d, 0.3)?;
    g.add_edge_with_weight(b, e, 0.4)?;
    g.add_edge_with_weight(e, f, 0.5)?;
    g.add_edge_with_weight(c, f, 0.6)?;
    Ok(g)
}

fn names<'a>(nodes: &[&'a Node]) -> Vec<&'a str> {
    nodes.iter().map(|n| n.name()).collect()
}

fn edge_pairs<S: WeightedAdjacency>(g: &MatrixGraph<S>) -> Vec<(usize, usize)> {
    g.edges().into_iter().map(|(f, t, _)| (f.index(), t.index())).collect()
}

fn check_all_pairs_row<S: WeightedAdjacency<Weight = f64>>() -> anyhow::Result<()> {
    let g = scenario::<S>()?;
    let dist = g.shortest_path_weights();
    let expected = [0.0, 0.1, 0.2, 0.4, 0.5, 0.8];
    let row = dist.row(0).expect("row 0 exists");
    for (j, (&got, &want)) in row.iter().zip(expected.iter()).enumerate() {
        assert!((got - want).abs() < EPS, "dist[0][{j}] = {got}, expected {want}");
    }
    Ok(())
}

#[test]
fn scenario_all_pairs_row_dense() -> anyhow::Result<()> {
    check_all_pairs_row::<DenseMatrix<f64>>()
}

#[test]
fn scenario_all_pairs_row_sparse() -> anyhow::Result<()> {
    check_all_pairs_row::<SparseMatrix<f64>>()
}

fn check_topological_order<S: WeightedAdjacency<Weight = f64>>() -> anyhow::Result<()> {
    let g = scenario::<S>()?;
    assert_eq!(names(&g.topological_sort()?), vec!["a", "b", "c", "d", "e", "f"]);
    Ok(())
}

#[test]
fn scenario_topological_order_dense() -> anyhow::Result<()> {
    check_topological_order::<DenseMatrix<f64>>()
}

#[test]
fn scenario_topological_order_sparse() -> anyhow::Result<()> {
    check_topological_order::<SparseMatrix<f64>>()
}

fn check_bfs_stops_at_target<S: WeightedAdjacency<Weight = f64>>() -> anyhow::Result<()> {
    let g = scenario::<S>()?;
    let mut visited = Vec::new();
    let mut weights = Vec::new();
    let stopped = g.visit_bfs(NodeId::new(0), |node, _path, w| {
        visited.push(node.name().to_owned());
        weights.push(w.to_vec());
        node.id() == NodeId::new(2)
    })?;

    assert!(stopped);
    assert_eq!(visited, vec!["a", "b", "c"]);
    assert_eq!(weights, vec![vec![], vec![0.1], vec![0.2]]);
    Ok(())
}

#[test]
fn scenario_bfs_stops_at_target_dense() -> anyhow::Result<()> {
    check_bfs_stops_at_target::<DenseMatrix<f64>>()
}

#[test]
fn scenario_bfs_stops_at_target_sparse() -> anyhow::Result<()> {
    check_bfs_stops_at_target::<SparseMatrix<f64>>()
}

fn check_closure_and_reduction<S: WeightedAdjacency<Weight = f64>>() -> anyhow::Result<()> {
    let g = scenario::<S>()?;

    let closure = g.transitive_closure();
    assert_eq!(closure.edge_count(), 10);
    assert_eq!(closure.size(), 6);
    assert!(closure.validate_invariants());
    let a_to_f = closure.edge_weight(NodeId::new(0), NodeId::new(5))?.expect("closure adds a->f");
    assert!((a_to_f - 0.8).abs() < EPS);

    let reduced = closure.transitive_reduction()?;
    assert_eq!(edge_pairs(&reduced), edge_pairs(&g));
    assert_eq!(reduced.edge_count(), 6);
    assert!(reduced.validate_invariants());

    // Neither input was modified.
    assert_eq!(g.edge_count(), 6);
    assert_eq!(closure.edge_count(), 10);
    Ok(())
}

#[test]
fn scenario_closure_and_reduction_dense() -> anyhow::Result<()> {
    check_closure_and_reduction::<DenseMatrix<f64>>()
}

#[test]
fn scenario_closure_and_reduction_sparse() -> anyhow::Result<()> {
    check_closure_and_reduction::<SparseMatrix<f64>>()
}

#[test]
fn scenario_queries() -> anyhow::Result<()> {
    let g = scenario::<DenseMatrix<f64>>()?;
    let a = NodeId::new(0);
    let f = NodeId::new(5);

    assert_eq!(names(&g.roots()), vec!["a"]);
    assert_eq!(names(&g.leaves()), vec!["d", "f"]);
    assert_eq!(names(&g.parents(f)?), vec!["c", "e"]);
    assert!(g.is_dag());
    assert!(!g.is_tree());
    assert!(g.has_path(a, f)?);
    assert!(!g.has_path(f, a)?);

    // Fewest hops wins over lighter weight: a->c->f (0.8) has two edges,
    // a->b->e->f (1.0) has three.
    let path = g.shortest_path(a, f)?.expect("f is reachable");
    assert_eq!(path.nodes(), &[a, NodeId::new(2), f]);
    assert!((g.shortest_path_weight(a, f)? - 0.8).abs() < EPS);
    Ok(())
}

#[test]
fn capacity_and_invalid_ids() {
    let mut g = MatrixGraph::sparse(false, 1);
    let only = g.add_node("only").unwrap();
    let err = g.add_node("extra").unwrap_err();
    assert_eq!(err, GraphError::CapacityExceeded { capacity: 1 });
    assert!(err.is_contract_violation());

    let missing = NodeId::new(1);
    assert!(matches!(g.add_edge(only, missing), Err(GraphError::InvalidNode { .. })));
    assert!(matches!(g.shortest_path(missing, only), Err(GraphError::InvalidNode { .. })));
    assert!(matches!(g.visit_bfs(missing, |_, _, _| false), Err(GraphError::InvalidNode { .. })));
    assert_eq!(g.size(), 1);
}

#[test]
fn undirected_graph_is_symmetric() -> anyhow::Result<()> {
    let mut g = MatrixGraph::dense(false, 3);
    let u = g.add_node("u")?;
    let v = g.add_node("v")?;
    let w = g.add_node("w")?;
    g.add_edge_with_weight(u, v, 2.5)?;
    g.add_edge_with_weight(v, w, 1.5)?;

    let from_u = g.children_with_weights(u)?;
    let from_v = g.children_with_weights(v)?;
    assert_eq!(from_u.len(), 1);
    assert_eq!(from_u[0].0.id(), v);
    assert!(from_v.iter().any(|(n, wt)| n.id() == u && *wt == 2.5));
    assert_eq!(g.shortest_path_weights()[(2, 0)], 4.0);
    assert!(!g.is_dag());
    assert!(g.validate_invariants());
    Ok(())
}
