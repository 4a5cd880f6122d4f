use std::collections::HashMap;

use crate::error::{PlanarError, Result};
use crate::graph::{Graph, NodeId};
use crate::matrix::PathMatrix;

/// Bidirectional lookup between hub indices and graph nodes.
///
/// Each hub maps to exactly one node and each node to at most one hub.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct HubMap {
    by_hub: HashMap<usize, NodeId>,
    by_node: HashMap<NodeId, usize>,
}

impl HubMap {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number hubs `0..n` in iteration order of `nodes`
    pub fn from_nodes(nodes: impl IntoIterator<Item = NodeId>) -> Result<Self> {
        let mut map = HubMap::new();
        for (hub, node) in nodes.into_iter().enumerate() {
            map.insert(hub, node)?;
        }
        Ok(map)
    }

    /// Bind `hub` to `node`, replacing any node previously bound to `hub`.
    ///
    /// Fails if `node` already belongs to a different hub.
    pub fn insert(&mut self, hub: usize, node: NodeId) -> Result<()> {
        if let Some(existing) = self.by_node.get(&node) {
            if *existing != hub {
                return Err(PlanarError::already_exists(
                    "hub node",
                    format!("{} (bound to hub {})", node, existing),
                ));
            }
        }

        if let Some(previous) = self.by_hub.insert(hub, node) {
            self.by_node.remove(&previous);
        }
        self.by_node.insert(node, hub);
        Ok(())
    }

    pub fn remove_hub(&mut self, hub: usize) -> Option<NodeId> {
        let node = self.by_hub.remove(&hub)?;
        self.by_node.remove(&node);
        Some(node)
    }

    pub fn node(&self, hub: usize) -> Option<NodeId> {
        self.by_hub.get(&hub).copied()
    }

    pub fn hub(&self, node: NodeId) -> Option<usize> {
        self.by_node.get(&node).copied()
    }

    pub fn contains_hub(&self, hub: usize) -> bool {
        self.by_hub.contains_key(&hub)
    }

    pub fn contains_node(&self, node: NodeId) -> bool {
        self.by_node.contains_key(&node)
    }

    pub fn len(&self) -> usize {
        self.by_hub.len()
    }

    pub fn is_empty(&self) -> bool {
        self.by_hub.is_empty()
    }

    /// `(hub, node)` pairs in ascending hub order
    pub fn iter(&self) -> impl Iterator<Item = (usize, NodeId)> {
        let mut pairs: Vec<(usize, NodeId)> =
            self.by_hub.iter().map(|(h, n)| (*h, *n)).collect();
        pairs.sort_unstable();
        pairs.into_iter()
    }
}

/// Build a cost table of rounded Euclidean distances between the hubs'
/// nodes. Hubs must be numbered `0..hubs.len()` without gaps.
#[tracing::instrument(skip(graph, hubs), fields(hubs = hubs.len()))]
pub fn euclidean_matrix(graph: &Graph, hubs: &HubMap) -> Result<PathMatrix> {
    let n = hubs.len();
    let mut nodes = Vec::with_capacity(n);
    for hub in 0..n {
        let node_id = hubs
            .node(hub)
            .ok_or_else(|| PlanarError::not_found("hub", hub))?;
        let node = graph
            .node(node_id)
            .ok_or_else(|| PlanarError::not_found("node", node_id))?;
        nodes.push(node.location());
    }

    let mut matrix = PathMatrix::new(n);
    for (s, from) in nodes.iter().enumerate() {
        for (t, to) in nodes.iter().enumerate() {
            if s == t {
                continue;
            }
            let distance = from.distance(to).round();
            if !distance.is_finite() || distance > f64::from(i32::MAX - 1) {
                crate::bail_invalid!(
                    "distance",
                    format!("{} between hubs {} and {}", distance, s, t)
                );
            }
            matrix.set_cost(s, t, distance as i32)?;
        }
    }

    tracing::debug!(hubs = n, "built euclidean cost table");
    Ok(matrix)
}
