//! Route construction over hub cost tables
//!
//! - `hubs`: bidirectional hub index to graph node mapping, and the Euclidean
//!   cost table builder
//! - `tsp`: greedy nearest-neighbour tour construction

pub mod hubs;
pub mod tsp;

pub use hubs::{euclidean_matrix, HubMap};
pub use tsp::{tour_cost, NearestNeighbourTsp};
