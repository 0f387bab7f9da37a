use strata::{
    astar, bellman_ford, bellman_ford_path, dijkstra, floyd_warshall, Graph, GraphError,
    NodeIndex,
};

fn weighted_directed(
    nodes: usize,
    edges: &[(usize, usize, i64)],
) -> (Graph<usize, i64>, Vec<NodeIndex>) {
    let mut ixs = Vec::new();
    let g = Graph::empty_directed().with_mutations(|scope| {
        let n: Vec<_> = (0..nodes).map(|i| scope.add_node(i)).collect();
        for &(u, v, w) in edges {
            scope.add_edge(n[u], n[v], w).unwrap();
        }
        ixs = n;
    });
    (g, ixs)
}

#[test]
fn dijkstra_prefers_the_cheap_detour() {
    // A->B(1), B->C(2), A->C(8): best A..C is 3 through B.
    let (g, n) = weighted_directed(3, &[(0, 1, 1), (1, 2, 2), (0, 2, 8)]);
    let best = dijkstra(&g, n[0], n[2], |&w| w).unwrap();
    assert_eq!(best.distance, 3);
    assert_eq!(best.path, vec![n[0], n[1], n[2]]);
}

#[test]
fn dijkstra_unreachable_and_stale_indices_are_absent() {
    let (g, n) = weighted_directed(3, &[(0, 1, 1)]);
    assert!(dijkstra(&g, n[2], n[0], |&w| w).is_none());

    let (pruned, _) = g.remove_node(n[1]).unwrap();
    assert!(dijkstra(&pruned, n[0], n[1], |&w| w).is_none());
    assert!(dijkstra(&pruned, n[1], n[0], |&w| w).is_none());
}

#[test]
fn dijkstra_source_equals_target() {
    let (g, n) = weighted_directed(2, &[(0, 1, 5)]);
    let best = dijkstra(&g, n[0], n[0], |&w| w).unwrap();
    assert_eq!(best.distance, 0);
    assert_eq!(best.path, vec![n[0]]);
}

#[test]
fn dijkstra_works_with_float_costs() {
    let (g, n) = weighted_directed(3, &[(0, 1, 15), (1, 2, 25), (0, 2, 100)]);
    let best = dijkstra(&g, n[0], n[2], |&w| w as f64 / 10.0).unwrap();
    assert!((best.distance - 4.0).abs() < 1e-9);
}

#[test]
fn dijkstra_on_undirected_graphs_crosses_edges_both_ways() {
    let mut ixs = Vec::new();
    let g = Graph::empty_undirected().with_mutations(|scope| {
        let a = scope.add_node(());
        let b = scope.add_node(());
        scope.add_edge(a, b, 4u32).unwrap();
        ixs = vec![a, b];
    });
    let best = dijkstra(&g, ixs[1], ixs[0], |&w| w).unwrap();
    assert_eq!(best.distance, 4);
    assert_eq!(best.path, vec![ixs[1], ixs[0]]);
}

#[test]
fn astar_with_zero_heuristic_matches_dijkstra() {
    let (g, n) = weighted_directed(
        5,
        &[(0, 1, 2), (1, 4, 9), (0, 2, 3), (2, 3, 3), (3, 4, 2), (1, 3, 4)],
    );
    let plain = dijkstra(&g, n[0], n[4], |&w| w).unwrap();
    let guided = astar(&g, n[0], n[4], |&w| w, |_, _| 0).unwrap();
    assert_eq!(plain.distance, guided.distance);
    assert_eq!(plain.path, guided.path);
}

#[test]
fn astar_finds_optimal_path_with_admissible_heuristic() {
    // Payload is a remaining-hop lower bound, which never overestimates
    // the true remaining cost (every edge costs at least 2).
    let mut ixs = Vec::new();
    let g = Graph::empty_directed().with_mutations(|scope| {
        let n: Vec<_> = (0..4).map(|i| scope.add_node(3 - i as i64)).collect();
        scope.add_edge(n[0], n[1], 2i64).unwrap();
        scope.add_edge(n[1], n[2], 2).unwrap();
        scope.add_edge(n[2], n[3], 2).unwrap();
        scope.add_edge(n[0], n[3], 10).unwrap();
        ixs = n;
    });
    let best = astar(&g, ixs[0], ixs[3], |&w| w, |_, &hops_left| hops_left).unwrap();
    assert_eq!(best.distance, 6);
    assert_eq!(best.path, ixs);
}

#[test]
fn bellman_ford_tolerates_negative_edges() {
    let (g, n) = weighted_directed(4, &[(0, 1, 4), (0, 2, 2), (2, 1, -3), (1, 3, 1)]);
    let tree = bellman_ford(&g, n[0], |&w| w).unwrap();
    assert_eq!(tree.distance(n[1]), Some(-1));
    assert_eq!(tree.distance(n[3]), Some(0));
    let path = tree.path_to(n[3]).unwrap();
    assert_eq!(path.path, vec![n[0], n[2], n[1], n[3]]);
}

#[test]
fn bellman_ford_agrees_with_dijkstra_on_non_negative_weights() {
    let (g, n) = weighted_directed(
        6,
        &[
            (0, 1, 7),
            (0, 2, 9),
            (0, 5, 14),
            (1, 2, 10),
            (1, 3, 15),
            (2, 3, 11),
            (2, 5, 2),
            (3, 4, 6),
            (4, 5, 9),
        ],
    );
    let tree = bellman_ford(&g, n[0], |&w| w).unwrap();
    for &target in &n {
        let single = dijkstra(&g, n[0], target, |&w| w);
        assert_eq!(single.map(|p| p.distance), tree.distance(target));
    }
}

#[test]
fn bellman_ford_reports_negative_cycles() {
    let (g, n) = weighted_directed(3, &[(0, 1, 1), (1, 2, -2), (2, 1, -2)]);
    assert_eq!(
        bellman_ford(&g, n[0], |&w| w).unwrap_err(),
        GraphError::NegativeCycle
    );
    assert_eq!(
        bellman_ford_path(&g, n[0], n[2], |&w| w),
        Err(GraphError::NegativeCycle)
    );
}

#[test]
fn unreachable_negative_cycle_does_not_poison_reachable_results() {
    // The cycle is unreachable from the source, so relaxation never touches
    // it and reachable distances stay finite and stable.
    let (g, n) = weighted_directed(4, &[(0, 1, 3), (2, 3, -5), (3, 2, -5)]);
    let tree = bellman_ford(&g, n[0], |&w| w).unwrap();
    assert_eq!(tree.distance(n[1]), Some(3));
    assert_eq!(tree.distance(n[2]), None);
}

#[test]
fn floyd_warshall_matches_single_pair_results() {
    let (g, n) = weighted_directed(
        4,
        &[(0, 1, 5), (1, 2, 3), (2, 3, 1), (0, 3, 10), (3, 0, 2)],
    );
    let all = floyd_warshall(&g, |&w| w).unwrap();
    for &a in &n {
        for &b in &n {
            let pair = bellman_ford(&g, a, |&w| w).unwrap().distance(b);
            assert_eq!(all.distance(a, b), pair, "pair {a:?} -> {b:?}");
        }
    }
    let path = all.path(n[0], n[3]).unwrap();
    assert_eq!(path.distance, 9);
    assert_eq!(path.path, vec![n[0], n[1], n[2], n[3]]);
}

#[test]
fn floyd_warshall_detects_negative_cycles_on_the_diagonal() {
    let (g, _) = weighted_directed(3, &[(0, 1, 2), (1, 0, -5)]);
    assert_eq!(
        floyd_warshall(&g, |&w| w).unwrap_err(),
        GraphError::NegativeCycle
    );
}

#[test]
fn shortest_path_respects_parallel_edges() {
    let (g, n) = weighted_directed(2, &[(0, 1, 9), (0, 1, 4)]);
    let best = dijkstra(&g, n[0], n[1], |&w| w).unwrap();
    assert_eq!(best.distance, 4);

    let all = floyd_warshall(&g, |&w| w).unwrap();
    assert_eq!(all.distance(n[0], n[1]), Some(4));
}

#[test]
fn dijkstra_reaches_target_iff_same_component() {
    let mut ixs = Vec::new();
    let g = Graph::empty_undirected().with_mutations(|scope| {
        let n: Vec<_> = (0..4).map(|_| scope.add_node(())).collect();
        scope.add_edge(n[0], n[1], 1u32).unwrap();
        scope.add_edge(n[2], n[3], 1).unwrap();
        ixs = n;
    });
    let components = strata::connected_components(&g);
    for &a in &ixs {
        for &b in &ixs {
            let same_component = components
                .iter()
                .any(|c| c.contains(&a) && c.contains(&b));
            assert_eq!(dijkstra(&g, a, b, |&w| w).is_some(), same_component);
        }
    }
}
