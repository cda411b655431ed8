use heron_graphlib::{AdjacencyList, Error, GraphOptions};

#[test]
fn add_node_allocates_monotonic_ids() {
    let mut g = AdjacencyList::directed();
    let a = g.add_node();
    let b = g.add_node();
    g.delete_node(a).unwrap();
    let c = g.add_node();

    assert_eq!((a, b, c), (0, 1, 2));
    assert_eq!(g.nodes().collect::<Vec<_>>(), vec![1, 2]);
}

#[test]
fn initial_node_count_preallocates_ids() {
    let mut g = AdjacencyList::new(GraphOptions {
        node_count: 3,
        ..Default::default()
    });
    assert_eq!(g.node_count(), 3);
    assert_eq!(g.add_node(), 3);
}

#[test]
fn directed_edges_respect_direction() {
    let mut g = AdjacencyList::new(GraphOptions {
        node_count: 2,
        ..Default::default()
    });
    g.add_edge(0, 1).unwrap();

    assert!(g.has_edge(0, 1));
    assert!(!g.has_edge(1, 0));
    assert_eq!(g.edges_of(0).unwrap(), vec![(1, 1.0)]);
    assert_eq!(g.edges_of(1).unwrap(), Vec::new());
    assert_eq!(g.edge_count(), 1);
}

#[test]
fn edges_to_missing_nodes_are_rejected() {
    let mut g = AdjacencyList::new(GraphOptions {
        node_count: 1,
        ..Default::default()
    });

    assert!(matches!(g.add_edge(0, 9), Err(Error::NodeNotFound { id: 9 })));
    assert_eq!(g.delete_edge(4, 0), Err(Error::NodeNotFound { id: 4 }));
    assert!(g.edges_of(5).is_err());
}

#[test]
fn deleting_a_node_drops_incoming_edges() {
    let mut g = AdjacencyList::new(GraphOptions {
        node_count: 3,
        ..Default::default()
    });
    g.add_edge(0, 2).unwrap();
    g.add_edge(1, 2).unwrap();
    g.add_edge(2, 0).unwrap();

    g.delete_node(2).unwrap();

    assert_eq!(g.edge_count(), 0);
    assert!(g.edges().is_empty());
}

#[test]
fn in_degrees_count_incoming_edges() {
    let mut g = AdjacencyList::new(GraphOptions {
        node_count: 3,
        ..Default::default()
    });
    g.add_edge(0, 2).unwrap();
    g.add_edge(1, 2).unwrap();
    g.add_edge(0, 1).unwrap();

    let degrees = g.in_degrees();
    assert_eq!(degrees.get(&0), Some(&0));
    assert_eq!(degrees.get(&1), Some(&1));
    assert_eq!(degrees.get(&2), Some(&2));
}

#[test]
fn adjacency_matrix_uses_infinity_for_missing_edges() {
    let mut g = AdjacencyList::new(GraphOptions {
        node_count: 3,
        ..Default::default()
    });
    g.add_edge_with_weight(0, 1, 2.5).unwrap();
    g.add_edge_with_weight(2, 0, -1.0).unwrap();
    g.delete_node(1).unwrap();
    g.add_edge_with_weight(0, 2, 3.0).unwrap();

    let m = g.adjacency_matrix();
    assert_eq!(m.ids(), &[0, 2]);
    assert_eq!(m.weights(), &[vec![f64::INFINITY, 3.0], vec![-1.0, f64::INFINITY]]);
    assert_eq!(m.get(2, 0), Some(-1.0));
    assert_eq!(m.get(1, 0), None);
}
