use serde::Serialize;

use crate::graph::types::{EdgeId, NodeId};

/// A directed, weighted relation between two nodes.
///
/// Edges do not own their endpoints; the graph resolves them by identity. The
/// Euclidean length is derived from the endpoints' locations, see
/// [`Graph::edge_length`](crate::graph::Graph::edge_length).
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Edge {
    source: NodeId,
    target: NodeId,
    weight: f64,
}

impl Edge {
    pub fn new(source: NodeId, target: NodeId) -> Self {
        Edge {
            source,
            target,
            weight: 0.0,
        }
    }

    pub fn weighted(source: NodeId, target: NodeId, weight: f64) -> Self {
        Edge {
            source,
            target,
            weight,
        }
    }

    pub fn id(&self) -> EdgeId {
        EdgeId::new(self.source, self.target)
    }

    pub fn source(&self) -> NodeId {
        self.source
    }

    pub fn target(&self) -> NodeId {
        self.target
    }

    pub fn weight(&self) -> f64 {
        self.weight
    }

    pub fn set_weight(&mut self, weight: f64) {
        self.weight = weight;
    }
}

impl std::fmt::Display for Edge {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "E[{}, {}]", self.source, self.target)
    }
}
