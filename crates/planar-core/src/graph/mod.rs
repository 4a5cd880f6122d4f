//! Planar graph model and traversal
//!
//! Provides the in-memory graph of labelled points in the plane:
//! - Coordinates and rectangular areas
//! - Nodes, directed edges, and the owning `Graph` store
//! - The `Adjacency` trait for pluggable traversal sources
//! - Breadth-first search with depth bookkeeping

pub mod algos;
pub mod coordinate;
pub mod edge;
pub mod node;
pub mod store;
pub mod types;

pub use algos::{BfsOptions, BreadthFirstSearch, UNBOUNDED_DEPTH, UNKNOWN_DEPTH};
pub use coordinate::{Area, Coordinate};
pub use edge::Edge;
pub use node::Node;
pub use store::Graph;
pub use types::{Adjacency, EdgeId, NodeId};
