use crate::error::Error;
use crate::graph::*;
use crate::transport::{TransferMatrix, TransportMode};

fn arc_targets(network: &impl Network, vertex: usize) -> Vec<usize> {
    network
        .vertex(vertex)
        .expect("vertex must exist")
        .arcs()
        .map(|arc| arc.target())
        .collect()
}

#[test_log::test]
fn undirected_stores_both_directions() {
    let mut graph = UndirectedGraph::new(3);
    graph.connect(0, 1, 7).expect("edge must insert");
    graph.connect(1, 2, 2).expect("edge must insert");

    assert_eq!(graph.vertex_count(), 3);
    assert_eq!(graph.edge_count(), 2);

    assert_eq!(arc_targets(&graph, 0), vec![1]);
    assert_eq!(arc_targets(&graph, 1), vec![0, 2]);
    assert_eq!(arc_targets(&graph, 2), vec![1]);
}

#[test_log::test]
fn directed_stores_one_direction() {
    let mut graph = DirectedGraph::new(3);
    graph.connect(0, 1, 5).expect("edge must insert");

    assert_eq!(graph.vertex_count(), 3);
    assert_eq!(graph.edge_count(), 1);

    assert_eq!(arc_targets(&graph, 0), vec![1]);
    assert!(arc_targets(&graph, 1).is_empty());
    assert!(arc_targets(&graph, 2).is_empty());
}

#[test]
fn parallel_arcs_are_kept() {
    let graph = DirectedGraph::from_edges(2, [(0, 1, 3), (0, 1, 9)]).expect("graph must build");

    let weights = graph
        .vertex(0)
        .expect("vertex must exist")
        .arcs()
        .map(|arc| arc.costs().cost(TransportMode::Feet, TransportMode::Feet))
        .collect::<Vec<_>>();

    assert_eq!(weights, vec![3, 9]);
}

#[test]
fn arcs_keep_insertion_order() {
    let graph = DirectedGraph::from_edges(
        6,
        [(0, 4, 1), (0, 1, 1), (0, 5, 1), (0, 2, 1), (0, 3, 1), (3, 0, 1), (0, 4, 2)],
    )
    .expect("graph must build");

    assert_eq!(arc_targets(&graph, 0), vec![4, 1, 5, 2, 3, 4]);
    assert_eq!(arc_targets(&graph, 3), vec![0]);

    let mut undirected = UndirectedGraph::new(4);
    undirected.connect(2, 1, 1).expect("edge must insert");
    undirected.connect(1, 3, 1).expect("edge must insert");
    undirected.connect(0, 1, 1).expect("edge must insert");

    assert_eq!(arc_targets(&undirected, 1), vec![2, 3, 0]);
}

#[test]
fn scalar_edges_are_diagonal() {
    let edge = Edge::from((0, 1, 4));

    assert_eq!(edge.costs, TransferMatrix::diagonal(4));
    assert!(!edge.costs.allows(TransportMode::Feet, TransportMode::Bus));
}

#[test]
fn out_of_range_endpoints_are_rejected() {
    let mut directed = DirectedGraph::new(2);
    assert_eq!(
        directed.connect(0, 2, 1),
        Err(Error::OutOfRange {
            vertex: 2,
            vertex_count: 2
        })
    );

    let mut undirected = UndirectedGraph::new(2);
    assert!(undirected.connect(5, 0, 1).is_err());

    // Nothing half-inserted on failure.
    assert_eq!(undirected.edge_count(), 0);
    assert!(arc_targets(&undirected, 0).is_empty());

    assert!(directed.vertex(2).is_err());
    assert!(UndirectedGraph::from_edges(1, [(0, 1, 1)]).is_err());
}

#[test]
fn vertices_default_to_free_continuation() {
    let mut graph = DirectedGraph::new(2);
    let vertex = graph.vertex(1).expect("vertex must exist");

    assert_eq!(vertex.id(), 1);
    assert_eq!(*vertex.transfers(), TransferMatrix::diagonal(0));

    graph
        .set_transfers(1, TransferMatrix::uniform(2))
        .expect("vertex must exist");
    assert_eq!(
        graph
            .vertex(1)
            .expect("vertex must exist")
            .transfers()
            .cost(TransportMode::Bus, TransportMode::Car),
        2
    );

    assert!(graph.set_transfers(2, TransferMatrix::default()).is_err());
}

#[test]
fn debug_summarises_size() {
    let graph = UndirectedGraph::from_edges(3, [(0, 1, 1)]).expect("graph must build");

    assert_eq!(
        format!("{graph:?}"),
        "UndirectedGraph with Vertices: 3, Edges: 1"
    );
    assert_eq!(
        format!("{:?}", graph.vertex(0).expect("vertex must exist")),
        "Vertex 0, Arcs: 1"
    );
}
