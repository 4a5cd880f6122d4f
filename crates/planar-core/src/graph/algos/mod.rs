//! Graph algorithm implementations
//!
//! - `bfs`: Breadth-first reachability with hop depths

pub mod bfs;

pub use bfs::{BfsOptions, BreadthFirstSearch, UNBOUNDED_DEPTH, UNKNOWN_DEPTH};
