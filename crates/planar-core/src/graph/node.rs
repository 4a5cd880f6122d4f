use std::collections::HashMap;

use crate::graph::coordinate::Coordinate;
use crate::graph::types::{EdgeId, NodeId};

/// A labelled, weighted point in the plane with a local adjacency cache.
///
/// The cache maps each neighbour to the identity of the outgoing edge that
/// reaches it. It is maintained by [`Graph`](crate::graph::Graph) only, which
/// keeps it in step with the graph-wide edge set.
#[derive(Debug, Clone, PartialEq)]
pub struct Node {
    location: Coordinate,
    weight: f64,
    label: String,
    adjacency: HashMap<NodeId, EdgeId>,
}

impl Node {
    /// Create a node at the origin. `capacity` presizes the adjacency cache;
    /// it is a hint and the cache grows past it.
    pub fn new(label: impl Into<String>, capacity: usize) -> Self {
        Node {
            location: Coordinate::default(),
            weight: 0.0,
            label: label.into(),
            adjacency: HashMap::with_capacity(capacity),
        }
    }

    /// Create a node at the given location
    pub fn at(label: impl Into<String>, location: Coordinate, capacity: usize) -> Self {
        Node {
            location,
            ..Node::new(label, capacity)
        }
    }

    pub fn with_weight(mut self, weight: f64) -> Self {
        self.weight = weight;
        self
    }

    pub fn label(&self) -> &str {
        &self.label
    }

    pub fn set_label(&mut self, label: impl Into<String>) {
        self.label = label.into();
    }

    pub fn weight(&self) -> f64 {
        self.weight
    }

    pub fn set_weight(&mut self, weight: f64) {
        self.weight = weight;
    }

    pub fn location(&self) -> Coordinate {
        self.location
    }

    pub fn set_location(&mut self, x: f64, y: f64) {
        self.location.set_location(x, y);
    }

    pub fn set_coordinate(&mut self, location: Coordinate) {
        self.location = location;
    }

    /// Euclidean distance between this node and another
    pub fn distance_to(&self, other: &Node) -> f64 {
        self.location.distance(&other.location)
    }

    /// Number of outgoing edges
    pub fn out_degree(&self) -> usize {
        self.adjacency.len()
    }

    pub fn neighbours(&self) -> impl Iterator<Item = NodeId> + '_ {
        self.adjacency.keys().copied()
    }

    pub fn edges(&self) -> impl Iterator<Item = EdgeId> + '_ {
        self.adjacency.values().copied()
    }

    /// The outgoing edge reaching `neighbour`, if any
    pub fn edge_to(&self, neighbour: NodeId) -> Option<EdgeId> {
        self.adjacency.get(&neighbour).copied()
    }

    pub fn is_connected_to(&self, neighbour: NodeId) -> bool {
        self.adjacency.contains_key(&neighbour)
    }

    pub fn adjacency_capacity(&self) -> usize {
        self.adjacency.capacity()
    }

    pub(crate) fn attach(&mut self, edge: EdgeId) {
        self.adjacency.insert(edge.target, edge);
    }

    pub(crate) fn detach(&mut self, neighbour: NodeId) -> Option<EdgeId> {
        self.adjacency.remove(&neighbour)
    }

    pub(crate) fn clear_adjacency(&mut self) -> Vec<EdgeId> {
        self.adjacency.drain().map(|(_, edge)| edge).collect()
    }
}

impl std::fmt::Display for Node {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "Node{{label='{}', location={}, degree={}}}",
            self.label,
            self.location,
            self.out_degree()
        )
    }
}
