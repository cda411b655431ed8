use heron_graphlib::{Error, FlowGraph};

#[test]
fn add_edge_creates_a_zero_capacity_twin() {
    let mut g = FlowGraph::new(2);
    let e = g.add_edge(0, 1, 5).unwrap();

    assert_eq!(e, 0);
    let twin = g.edge(e ^ 1).unwrap();
    assert_eq!((twin.from, twin.to, twin.capacity, twin.flow), (1, 0, 0, 0));
    assert_eq!(g.out_edges(0), &[0]);
    assert_eq!(g.out_edges(1), &[1]);
}

#[test]
fn augment_moves_capacity_to_the_twin() {
    let mut g = FlowGraph::new(2);
    let e = g.add_edge(0, 1, 5).unwrap();
    g.augment(e, 3);

    assert_eq!(g.edge(e).unwrap().residual(), 2);
    assert_eq!(g.edge(e ^ 1).unwrap().residual(), 3);
    assert_eq!(g.outflow(0), 3);
    assert_eq!(g.outflow(1), -3);

    g.reset();
    assert_eq!(g.edge(e).unwrap().residual(), 5);
}

#[test]
fn invalid_edges_are_rejected() {
    let mut g = FlowGraph::new(2);
    assert_eq!(g.add_edge(0, 2, 1), Err(Error::OutOfRange { index: 2, len: 2 }));
    assert!(matches!(
        g.add_edge(0, 1, -4),
        Err(Error::InvalidArgument { .. })
    ));
}
