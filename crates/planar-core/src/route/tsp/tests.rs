use super::*;
use crate::graph::{Graph, Node};

/// Four hubs A..D with symmetric costs
/// A-B 20, A-C 42, A-D 35, B-C 30, B-D 34, C-D 12
fn four_hub_costs() -> PathMatrix {
    let mut distances = PathMatrix::new(4);
    for (a, b, cost) in [
        (0, 1, 20),
        (0, 2, 42),
        (0, 3, 35),
        (1, 2, 30),
        (1, 3, 34),
        (2, 3, 12),
    ] {
        distances.set_cost(a, b, cost).unwrap();
        distances.set_cost(b, a, cost).unwrap();
    }
    distances
}

/// Complete graph over A..D with each node mapped to its hub
fn four_hub_graph() -> (Graph, HubMap) {
    let mut graph = Graph::new();
    let ids: Vec<NodeId> = ["A", "B", "C", "D"]
        .iter()
        .map(|label| graph.add_node(Node::new(*label, 3)))
        .collect();
    for (i, a) in ids.iter().enumerate() {
        for b in &ids[i + 1..] {
            assert!(graph.create_bidirectional_edge(*a, *b));
        }
    }
    let hubs = HubMap::from_nodes(ids).unwrap();
    (graph, hubs)
}

#[test]
fn test_fixture_nodes_have_degree_three() {
    let (graph, hubs) = four_hub_graph();
    for (_, node) in hubs.iter() {
        assert_eq!(graph.degree(node), Some(3));
    }
}

#[test]
fn test_route_from_hub_zero() {
    let distances = four_hub_costs();
    let (_, hubs) = four_hub_graph();
    let mut tsp = NearestNeighbourTsp::new(&distances, &hubs, 0).unwrap();

    let route = tsp.execute().unwrap();
    let joined: String = route.iter().map(ToString::to_string).collect();
    assert_eq!(joined, "0123");
    assert_eq!(tsp.route(), &[0, 1, 2, 3]);
}

#[test]
fn test_route_from_other_source() {
    let distances = four_hub_costs();
    let (_, hubs) = four_hub_graph();
    let mut tsp = NearestNeighbourTsp::new(&distances, &hubs, 3).unwrap();

    // D -> C (12) -> B (30) -> A (20)
    assert_eq!(tsp.execute().unwrap(), vec![3, 2, 1, 0]);
    assert_eq!(tsp.source_hub(), 3);
}

#[test]
fn test_route_visits_every_hub_once() {
    let distances = four_hub_costs();
    let hubs = HubMap::new();
    for source in 0..4 {
        let mut tsp = NearestNeighbourTsp::new(&distances, &hubs, source).unwrap();
        let route = tsp.execute().unwrap();
        assert_eq!(route.len(), 4);
        assert_eq!(route[0], source);
        let distinct: BTreeSet<usize> = route.iter().copied().collect();
        assert_eq!(distinct.len(), 4);
    }
}

#[test]
fn test_closed_tour_cost_includes_return_leg() {
    let distances = four_hub_costs();
    let hubs = HubMap::new();
    let mut tsp = NearestNeighbourTsp::new(&distances, &hubs, 0).unwrap();
    assert_eq!(tsp.closed_tour_cost(), None);

    tsp.execute().unwrap();
    assert_eq!(tour_cost(&distances, tsp.route()), Some(62));
    assert_eq!(tsp.closed_tour_cost(), Some(97));
}

#[test]
fn test_ties_pick_lowest_hub() {
    let distances = PathMatrix::from_rows(vec![
        vec![0, 5, 5, 5],
        vec![5, 0, 7, 7],
        vec![5, 7, 0, 7],
        vec![5, 7, 7, 0],
    ])
    .unwrap();
    let hubs = HubMap::new();
    let mut tsp = NearestNeighbourTsp::new(&distances, &hubs, 0).unwrap();
    assert_eq!(tsp.execute().unwrap(), vec![0, 1, 2, 3]);
}

#[test]
fn test_unset_costs_are_never_selected() {
    let mut distances = PathMatrix::new(3);
    distances.set_cost(0, 2, 50).unwrap();
    distances.set_cost(2, 1, 50).unwrap();
    let hubs = HubMap::new();
    let mut tsp = NearestNeighbourTsp::new(&distances, &hubs, 0).unwrap();

    // 0 -> 1 is unset, so the expensive but known 0 -> 2 wins
    assert_eq!(tsp.execute().unwrap(), vec![0, 2, 1]);
    assert_eq!(tsp.closed_tour_cost(), None);
}

#[test]
fn test_no_selectable_hub_is_an_error() {
    let distances = PathMatrix::new(3);
    let hubs = HubMap::new();
    let mut tsp = NearestNeighbourTsp::new(&distances, &hubs, 1).unwrap();

    let err = tsp.execute().unwrap_err();
    match err {
        PlanarError::RouteConstruction {
            current_hub,
            remaining,
        } => {
            assert_eq!(current_hub, 1);
            assert_eq!(remaining, 2);
        }
        other => panic!("expected RouteConstruction, got {:?}", other),
    }
    assert_eq!(tsp.route(), &[1]);
}

#[test]
fn test_single_hub_route() {
    let distances = PathMatrix::new(1);
    let hubs = HubMap::new();
    let mut tsp = NearestNeighbourTsp::new(&distances, &hubs, 0).unwrap();
    assert_eq!(tsp.execute().unwrap(), vec![0]);
    assert_eq!(tsp.closed_tour_cost(), Some(0));
}

#[test]
fn test_source_out_of_range() {
    let distances = PathMatrix::new(2);
    let hubs = HubMap::new();
    let err = NearestNeighbourTsp::new(&distances, &hubs, 2).unwrap_err();
    assert!(matches!(err, PlanarError::InvalidValue { .. }));
}

#[test]
fn test_execute_is_repeatable() {
    let distances = four_hub_costs();
    let hubs = HubMap::new();
    let mut tsp = NearestNeighbourTsp::new(&distances, &hubs, 0).unwrap();
    let first = tsp.execute().unwrap();
    let second = tsp.execute().unwrap();
    assert_eq!(first, second);
    assert_eq!(tsp.route().len(), 4);
}

#[test]
fn test_route_nodes_follow_hub_map() {
    let distances = four_hub_costs();
    let (graph, hubs) = four_hub_graph();
    let mut tsp = NearestNeighbourTsp::new(&distances, &hubs, 0).unwrap();
    tsp.execute().unwrap();

    let labels: Vec<&str> = tsp
        .route_nodes()
        .unwrap()
        .into_iter()
        .map(|id| graph.node(id).unwrap().label())
        .collect();
    assert_eq!(labels, vec!["A", "B", "C", "D"]);
}

#[test]
fn test_route_nodes_missing_hub() {
    let distances = four_hub_costs();
    let hubs = HubMap::from_nodes([NodeId(0)]).unwrap();
    let mut tsp = NearestNeighbourTsp::new(&distances, &hubs, 0).unwrap();
    tsp.execute().unwrap();
    assert!(matches!(
        tsp.route_nodes(),
        Err(PlanarError::NotFound { .. })
    ));
}
