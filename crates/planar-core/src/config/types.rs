//! Configuration type definitions

use serde::{Deserialize, Serialize};

/// Current configuration format version
pub const CONFIG_FORMAT_VERSION: u32 = 1;

/// Default number of nodes the BFS engine presizes its queue and maps for
pub const DEFAULT_SIZE_HINT: usize = 255;

/// Top-level planar configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlanarConfig {
    /// Configuration format version for compatibility checking
    #[serde(default = "default_version")]
    pub version: u32,

    /// Graph construction and spatial lookup
    #[serde(default)]
    pub graph: GraphConfig,

    /// Breadth-first search defaults
    #[serde(default)]
    pub search: SearchConfig,

    /// Nearest-neighbour routing defaults
    #[serde(default)]
    pub route: RouteConfig,
}

/// Configuration for graph construction
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GraphConfig {
    /// Advisory adjacency capacity for newly created nodes
    #[serde(default = "default_node_capacity")]
    pub node_capacity: usize,

    /// Distance below which a coordinate lookup matches a node
    #[serde(default = "default_lookup_tolerance")]
    pub lookup_tolerance: f64,
}

/// Configuration for breadth-first search
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SearchConfig {
    /// Expected node count, used only to presize traversal storage
    #[serde(default = "default_size_hint")]
    pub size_hint: usize,

    /// Maximum hop count to expand (unbounded when absent)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub depth_limit: Option<i32>,
}

/// Configuration for nearest-neighbour routing
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RouteConfig {
    /// Hub the tour starts from
    #[serde(default)]
    pub source_hub: usize,

    /// Informational upper bound on path cost, carried on the matrix
    #[serde(default)]
    pub max_distance: i32,
}

fn default_version() -> u32 {
    CONFIG_FORMAT_VERSION
}

fn default_node_capacity() -> usize {
    4
}

fn default_lookup_tolerance() -> f64 {
    1e-4
}

fn default_size_hint() -> usize {
    DEFAULT_SIZE_HINT
}

impl Default for GraphConfig {
    fn default() -> Self {
        GraphConfig {
            node_capacity: default_node_capacity(),
            lookup_tolerance: default_lookup_tolerance(),
        }
    }
}

impl Default for SearchConfig {
    fn default() -> Self {
        SearchConfig {
            size_hint: default_size_hint(),
            depth_limit: None,
        }
    }
}

impl Default for PlanarConfig {
    fn default() -> Self {
        PlanarConfig {
            version: CONFIG_FORMAT_VERSION,
            graph: GraphConfig::default(),
            search: SearchConfig::default(),
            route: RouteConfig::default(),
        }
    }
}
