//! Build in-memory graphs from command-line descriptions

use std::collections::HashMap;

use planar_core::config::GraphConfig;
use planar_core::error::{PlanarError, Result};
use planar_core::graph::{Graph, Node, NodeId};

use crate::cli::GraphArgs;

/// A graph whose nodes are known by their command-line labels
pub struct LabelledGraph {
    pub graph: Graph,
    /// Node identities in order of first mention
    pub order: Vec<NodeId>,
}

impl LabelledGraph {
    pub fn label(&self, id: NodeId) -> &str {
        self.graph.node(id).map_or("", Node::label)
    }

    /// Node carrying `label`, or a not-found error
    pub fn resolve(&self, label: &str) -> Result<NodeId> {
        self.graph
            .node_by_label(label)
            .ok_or_else(|| PlanarError::not_found("node", label))
    }
}

/// Build a graph from `--nodes` and `--edges`. Nodes are created on first
/// mention; self-loops are dropped by the graph.
pub fn build_graph(args: &GraphArgs, config: &GraphConfig) -> LabelledGraph {
    let mut graph = Graph::new();
    let mut ids: HashMap<String, NodeId> = HashMap::new();
    let mut order = Vec::new();

    let mut intern = |graph: &mut Graph, label: &str| -> NodeId {
        *ids.entry(label.to_string()).or_insert_with(|| {
            let id = graph.add_node(Node::new(label, config.node_capacity));
            order.push(id);
            id
        })
    };

    for label in args.nodes.iter().map(|l| l.trim()).filter(|l| !l.is_empty()) {
        intern(&mut graph, label);
    }

    for (source, target) in &args.edges.0 {
        let a = intern(&mut graph, source);
        let b = intern(&mut graph, target);
        if args.directed {
            graph.create_directed_edge(a, b);
        } else {
            graph.create_bidirectional_edge(a, b);
        }
    }

    tracing::debug!(
        nodes = graph.num_nodes(),
        edges = graph.num_edges(),
        directed = args.directed,
        "build_graph"
    );

    LabelledGraph { graph, order }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cli::parse::{parse_edge_list, EdgeList};

    fn args(edges: &str, nodes: &[&str], directed: bool) -> GraphArgs {
        GraphArgs {
            edges: parse_edge_list(edges).unwrap(),
            nodes: nodes.iter().map(|n| n.to_string()).collect(),
            directed,
        }
    }

    #[test]
    fn test_build_undirected() {
        let built = build_graph(&args("a-b,b-c", &[], false), &GraphConfig::default());
        assert_eq!(built.order.len(), 3);
        assert_eq!(built.graph.num_edges(), 4);
        assert_eq!(built.label(built.order[2]), "c");
    }

    #[test]
    fn test_build_directed_with_isolated_nodes() {
        let built = build_graph(&args("a-b", &["z", "a"], true), &GraphConfig::default());
        assert_eq!(built.order.len(), 3);
        assert_eq!(built.label(built.order[0]), "z");
        assert_eq!(built.graph.num_edges(), 1);
    }

    #[test]
    fn test_self_loop_is_dropped() {
        let built = build_graph(&args("a-a", &[], false), &GraphConfig::default());
        assert_eq!(built.graph.num_nodes(), 1);
        assert_eq!(built.graph.num_edges(), 0);
    }

    #[test]
    fn test_resolve_unknown_label() {
        let input = GraphArgs {
            edges: EdgeList::default(),
            nodes: vec!["a".to_string()],
            directed: false,
        };
        let built = build_graph(&input, &GraphConfig::default());
        assert!(built.resolve("a").is_ok());
        assert!(matches!(
            built.resolve("b"),
            Err(PlanarError::NotFound { .. })
        ));
    }
}
