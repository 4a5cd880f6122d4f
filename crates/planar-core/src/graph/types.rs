use serde::{Deserialize, Serialize};

/// Identity of a node within a [`Graph`](crate::graph::Graph).
///
/// Identities are minted by the graph and never reused, so a stale id simply
/// stops resolving once its node is deleted.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
)]
#[serde(transparent)]
pub struct NodeId(pub(crate) usize);

impl NodeId {
    pub fn index(&self) -> usize {
        self.0
    }
}

impl std::fmt::Display for NodeId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "n{}", self.0)
    }
}

/// Identity of a directed edge: at most one edge exists per ordered pair.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
)]
pub struct EdgeId {
    pub source: NodeId,
    pub target: NodeId,
}

impl EdgeId {
    pub fn new(source: NodeId, target: NodeId) -> Self {
        EdgeId { source, target }
    }

    /// The id of the edge running the other way
    pub fn reversed(&self) -> Self {
        EdgeId {
            source: self.target,
            target: self.source,
        }
    }

    pub fn touches(&self, node: NodeId) -> bool {
        self.source == node || self.target == node
    }
}

impl std::fmt::Display for EdgeId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}->{}", self.source, self.target)
    }
}

/// Adjacency contract consumed by traversal algorithms
pub trait Adjacency {
    /// Whether `node` belongs to the graph. Providers without a node set
    /// treat every id as present.
    fn contains(&self, _node: NodeId) -> bool {
        true
    }

    /// Number of outgoing edges; zero for unknown nodes
    fn out_degree(&self, node: NodeId) -> usize;

    /// Targets of the node's outgoing edges
    fn neighbours(&self, node: NodeId) -> Vec<NodeId>;
}
