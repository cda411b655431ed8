use heron::alg::cuts;
use heron::graphlib::{AdjacencyList, GraphOptions};
use heron::Error;

/// Two triangles joined through node 2 - 3, with a pendant node 7 hanging off 5.
fn bowtie() -> AdjacencyList {
    let mut g = AdjacencyList::new(GraphOptions {
        directed: false,
        node_count: 8,
    });
    for (v, w) in [
        (0, 1),
        (1, 2),
        (2, 0),
        (2, 3),
        (3, 4),
        (4, 5),
        (5, 3),
        (5, 7),
    ] {
        g.add_edge(v, w).unwrap();
    }
    g
}

#[test]
fn bridges_are_edges_outside_every_cycle() {
    assert_eq!(cuts::bridges(&bowtie()).unwrap(), vec![(2, 3), (5, 7)]);
}

#[test]
fn articulation_points_split_their_component() {
    assert_eq!(
        cuts::articulation_points(&bowtie()).unwrap(),
        vec![2, 3, 5]
    );
}

#[test]
fn a_dfs_root_is_a_cut_vertex_only_with_several_children() {
    let mut star = AdjacencyList::new(GraphOptions {
        directed: false,
        node_count: 4,
    });
    star.add_edge(0, 1).unwrap();
    star.add_edge(0, 2).unwrap();
    star.add_edge(0, 3).unwrap();
    assert_eq!(cuts::articulation_points(&star).unwrap(), vec![0]);

    let mut cycle = AdjacencyList::new(GraphOptions {
        directed: false,
        node_count: 3,
    });
    cycle.add_path(&[0, 1, 2, 0]).unwrap();
    assert!(cuts::articulation_points(&cycle).unwrap().is_empty());
    assert!(cuts::bridges(&cycle).unwrap().is_empty());
}

#[test]
fn cut_searches_require_an_undirected_graph() {
    let g = AdjacencyList::directed();
    assert!(matches!(cuts::bridges(&g), Err(Error::InvalidArgument { .. })));
    assert!(matches!(
        cuts::articulation_points(&g),
        Err(Error::InvalidArgument { .. })
    ));
}

#[test]
fn a_long_path_is_all_bridges() {
    let n = 100_000;
    let mut g = AdjacencyList::new(GraphOptions {
        directed: false,
        node_count: n,
    });
    let ids: Vec<usize> = (0..n).collect();
    g.add_path(&ids).unwrap();

    let bridges = cuts::bridges(&g).unwrap();
    assert_eq!(bridges.len(), n - 1);
    assert_eq!(bridges[0], (0, 1));
    assert_eq!(bridges[n - 2], (n - 2, n - 1));

    let points = cuts::articulation_points(&g).unwrap();
    assert_eq!(points, (1..n - 1).collect::<Vec<_>>());
}
