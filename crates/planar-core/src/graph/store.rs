use std::collections::HashMap;

use crate::graph::algos::bfs::BreadthFirstSearch;
use crate::graph::coordinate::{Area, Coordinate};
use crate::graph::edge::Edge;
use crate::graph::node::Node;
use crate::graph::types::{Adjacency, EdgeId, NodeId};

/// A graph of labelled points in the plane.
///
/// The graph owns every node and every edge. Nodes reference their outgoing
/// edges by [`EdgeId`] only, and every mutation keeps the per-node adjacency
/// caches and the graph-wide edge set in agreement: after any call returns,
/// an edge is present in one exactly when it is present in the other.
///
/// Invalid mutations (self-loops, unknown endpoints) are no-ops reported
/// through the return value, never errors.
#[derive(Debug, Clone, Default)]
pub struct Graph {
    nodes: HashMap<NodeId, Node>,
    edges: HashMap<EdgeId, Edge>,
    next_id: usize,
}

impl Graph {
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an empty graph presized for the given node and edge counts
    pub fn with_capacity(num_nodes: usize, num_edges: usize) -> Self {
        Graph {
            nodes: HashMap::with_capacity(num_nodes),
            edges: HashMap::with_capacity(num_edges),
            next_id: 0,
        }
    }

    // ------------------------------------------------------------------
    // Nodes
    // ------------------------------------------------------------------

    /// Register a node and return its identity.
    ///
    /// Each call mints a new identity, so the same node value added twice
    /// becomes two nodes. A node copied out of another graph arrives without
    /// its old adjacency: edges only exist once created through this graph.
    pub fn add_node(&mut self, mut node: Node) -> NodeId {
        node.clear_adjacency();
        let id = NodeId(self.next_id);
        self.next_id += 1;
        self.nodes.insert(id, node);
        id
    }

    /// Create an unlabelled node at `(x, y)`
    pub fn create_node(&mut self, x: f64, y: f64, capacity: usize) -> NodeId {
        self.add_node(Node::at("", Coordinate::new(x, y), capacity))
    }

    /// Create an unlabelled node at `location`
    pub fn create_node_at(&mut self, location: Coordinate, capacity: usize) -> NodeId {
        self.add_node(Node::at("", location, capacity))
    }

    /// Create a node sharing the location of `template`, presized to its
    /// degree. Returns `None` if `template` is not in the graph.
    pub fn create_node_like(&mut self, template: NodeId) -> Option<NodeId> {
        let source = self.nodes.get(&template)?;
        let node = Node::at(source.label(), source.location(), source.out_degree());
        Some(self.add_node(node))
    }

    pub fn node(&self, id: NodeId) -> Option<&Node> {
        self.nodes.get(&id)
    }

    pub fn node_mut(&mut self, id: NodeId) -> Option<&mut Node> {
        self.nodes.get_mut(&id)
    }

    pub fn contains_node(&self, id: NodeId) -> bool {
        self.nodes.contains_key(&id)
    }

    /// All nodes, in no particular order
    pub fn nodes(&self) -> impl Iterator<Item = (NodeId, &Node)> + '_ {
        self.nodes.iter().map(|(id, node)| (*id, node))
    }

    /// All node identities in ascending order
    pub fn node_ids(&self) -> Vec<NodeId> {
        let mut ids: Vec<NodeId> = self.nodes.keys().copied().collect();
        ids.sort();
        ids
    }

    pub fn num_nodes(&self) -> usize {
        self.nodes.len()
    }

    /// Degree (number of outgoing edges) of a node; `None` if absent
    pub fn degree(&self, id: NodeId) -> Option<usize> {
        self.nodes.get(&id).map(Node::out_degree)
    }

    /// Remove a node after removing every edge that touches it
    pub fn delete_node(&mut self, id: NodeId) -> Option<Node> {
        if !self.nodes.contains_key(&id) {
            tracing::debug!(node = %id, "delete_node: unknown node");
            return None;
        }
        let removed_edges = self.delete_edges(id);
        let node = self.nodes.remove(&id);
        tracing::debug!(node = %id, removed_edges, "delete_node");
        node
    }

    // ------------------------------------------------------------------
    // Edges
    // ------------------------------------------------------------------

    /// Create a directed edge. Returns `None` for self-loops and unknown
    /// endpoints; returns the existing edge if one already joins the pair.
    pub fn create_directed_edge(&mut self, source: NodeId, target: NodeId) -> Option<EdgeId> {
        if source == target {
            tracing::debug!(node = %source, "create_directed_edge: self-loop rejected");
            return None;
        }
        if !self.nodes.contains_key(&target) {
            tracing::debug!(%source, %target, "create_directed_edge: unknown target");
            return None;
        }
        let Some(node) = self.nodes.get_mut(&source) else {
            tracing::debug!(%source, %target, "create_directed_edge: unknown source");
            return None;
        };

        if let Some(existing) = node.edge_to(target) {
            return Some(existing);
        }

        let edge = Edge::new(source, target);
        let id = edge.id();
        node.attach(id);
        self.edges.insert(id, edge);
        Some(id)
    }

    /// Create a directed edge and set its weight
    pub fn create_weighted_directed_edge(
        &mut self,
        source: NodeId,
        target: NodeId,
        weight: f64,
    ) -> Option<EdgeId> {
        let id = self.create_directed_edge(source, target)?;
        if let Some(edge) = self.edges.get_mut(&id) {
            edge.set_weight(weight);
        }
        Some(id)
    }

    /// Create a pair of independent directed edges, one each way
    pub fn create_bidirectional_edge(&mut self, source: NodeId, target: NodeId) -> bool {
        if !self.can_join(source, target) {
            return false;
        }
        self.create_directed_edge(source, target);
        self.create_directed_edge(target, source);
        true
    }

    /// Create a pair of independent weighted directed edges
    pub fn create_weighted_bidirectional_edge(
        &mut self,
        source: NodeId,
        target: NodeId,
        weight: f64,
    ) -> bool {
        if !self.can_join(source, target) {
            return false;
        }
        self.create_weighted_directed_edge(source, target, weight);
        self.create_weighted_directed_edge(target, source, weight);
        true
    }

    fn can_join(&self, source: NodeId, target: NodeId) -> bool {
        let valid =
            source != target && self.nodes.contains_key(&source) && self.nodes.contains_key(&target);
        if !valid {
            tracing::debug!(%source, %target, "edge creation rejected");
        }
        valid
    }

    pub fn edge(&self, id: EdgeId) -> Option<&Edge> {
        self.edges.get(&id)
    }

    pub fn edge_mut(&mut self, id: EdgeId) -> Option<&mut Edge> {
        self.edges.get_mut(&id)
    }

    /// The directed edge from `source` to `target`, if any
    pub fn edge_between(&self, source: NodeId, target: NodeId) -> Option<&Edge> {
        self.edges.get(&EdgeId::new(source, target))
    }

    /// All edges, in no particular order
    pub fn edges(&self) -> impl Iterator<Item = &Edge> + '_ {
        self.edges.values()
    }

    /// All edge identities in ascending order
    pub fn edge_ids(&self) -> Vec<EdgeId> {
        let mut ids: Vec<EdgeId> = self.edges.keys().copied().collect();
        ids.sort();
        ids
    }

    pub fn num_edges(&self) -> usize {
        self.edges.len()
    }

    /// Euclidean length of an edge, from its endpoints' locations
    pub fn edge_length(&self, id: EdgeId) -> Option<f64> {
        if !self.edges.contains_key(&id) {
            return None;
        }
        self.euclidean_distance(id.source, id.target)
    }

    /// Euclidean distance between two nodes
    pub fn euclidean_distance(&self, a: NodeId, b: NodeId) -> Option<f64> {
        let a = self.nodes.get(&a)?;
        let b = self.nodes.get(&b)?;
        Some(a.distance_to(b))
    }

    /// Delete the edges joining `source` and `target`, in both directions.
    ///
    /// Returns `false` only when either endpoint is unknown; deleting a pair
    /// with no edges between them succeeds.
    pub fn delete_edge(&mut self, source: NodeId, target: NodeId) -> bool {
        if !self.nodes.contains_key(&source) || !self.nodes.contains_key(&target) {
            tracing::debug!(%source, %target, "delete_edge: unknown endpoint");
            return false;
        }
        self.detach_directed(source, target);
        self.detach_directed(target, source);
        true
    }

    /// Delete the edges joining the endpoints of `id`, in both directions
    pub fn delete_edge_by_id(&mut self, id: EdgeId) -> bool {
        self.delete_edge(id.source, id.target)
    }

    fn detach_directed(&mut self, source: NodeId, target: NodeId) {
        if let Some(node) = self.nodes.get_mut(&source) {
            if let Some(edge) = node.detach(target) {
                self.edges.remove(&edge);
            }
        }
    }

    /// Delete every edge touching `node`. Returns the number removed.
    pub fn delete_edges(&mut self, node: NodeId) -> usize {
        // Mark first so the edge set is not mutated while it is scanned
        let marked: Vec<EdgeId> = self
            .edges
            .keys()
            .filter(|id| id.touches(node))
            .copied()
            .collect();

        let before = self.edges.len();
        for id in marked {
            self.delete_edge_by_id(id);
        }
        before - self.edges.len()
    }

    /// Drop the outgoing edges of `node`, leaving incoming edges in place
    pub fn clear_node_edges(&mut self, node: NodeId) {
        let Some(n) = self.nodes.get_mut(&node) else {
            return;
        };
        for id in n.clear_adjacency() {
            self.edges.remove(&id);
        }
    }

    /// Delete every edge in the graph, keeping the nodes
    pub fn delete_all_edges(&mut self) {
        self.edges.clear();
        for node in self.nodes.values_mut() {
            node.clear_adjacency();
        }
    }

    /// Delete every node and edge
    pub fn clear(&mut self) {
        self.nodes.clear();
        self.edges.clear();
    }

    // ------------------------------------------------------------------
    // Queries
    // ------------------------------------------------------------------

    /// Whether a breadth-first search from one node reaches every node.
    ///
    /// The search starts from the lowest node identity. For directed graphs
    /// this is reachability from that node, not strong connectivity.
    pub fn is_connected(&self) -> bool {
        let Some(source) = self.nodes.keys().min().copied() else {
            return true;
        };
        if self.nodes.len() == 1 {
            return true;
        }
        let mut bfs = BreadthFirstSearch::new();
        let reached = bfs.find_all_sized(self, source, self.nodes.len());
        reached.len() == self.nodes.len()
    }

    /// Whether every node has an edge to every other node
    pub fn is_complete(&self) -> bool {
        let expected = self.nodes.len().saturating_sub(1);
        self.nodes.values().all(|n| n.out_degree() == expected)
    }

    /// Greatest breadth-first depth reachable from `node`; `None` if absent.
    ///
    /// An isolated node yields [`UNKNOWN_DEPTH`](crate::graph::UNKNOWN_DEPTH).
    pub fn eccentricity(&self, node: NodeId) -> Option<i32> {
        if !self.nodes.contains_key(&node) {
            return None;
        }
        let mut bfs = BreadthFirstSearch::new();
        bfs.find_all(self, node);
        Some(bfs.max_depth())
    }

    /// First node (by identity) located exactly at `(x, y)`
    pub fn node_at(&self, x: f64, y: f64) -> Option<NodeId> {
        self.node_ids().into_iter().find(|id| {
            self.nodes
                .get(id)
                .is_some_and(|n| n.location().x == x && n.location().y == y)
        })
    }

    /// First node (by identity) strictly closer than `tolerance` to `location`
    pub fn node_near(&self, location: &Coordinate, tolerance: f64) -> Option<NodeId> {
        self.node_ids().into_iter().find(|id| {
            self.nodes
                .get(id)
                .is_some_and(|n| location.distance(&n.location()) < tolerance)
        })
    }

    /// Nodes located inside `area`, ascending by identity
    pub fn nodes_within(&self, area: &Area) -> Vec<NodeId> {
        self.node_ids()
            .into_iter()
            .filter(|id| {
                self.nodes
                    .get(id)
                    .is_some_and(|n| area.contains(&n.location()))
            })
            .collect()
    }

    /// First node (by identity) carrying `label`
    pub fn node_by_label(&self, label: &str) -> Option<NodeId> {
        self.node_ids()
            .into_iter()
            .find(|id| self.nodes.get(id).is_some_and(|n| n.label() == label))
    }
}

impl Adjacency for Graph {
    fn contains(&self, node: NodeId) -> bool {
        self.nodes.contains_key(&node)
    }

    fn out_degree(&self, node: NodeId) -> usize {
        self.nodes.get(&node).map_or(0, Node::out_degree)
    }

    fn neighbours(&self, node: NodeId) -> Vec<NodeId> {
        self.nodes
            .get(&node)
            .map(|n| n.neighbours().collect())
            .unwrap_or_default()
    }
}
