//! Planar Core Library
//!
//! Planar graph model, breadth-first reachability, hub cost tables and
//! nearest-neighbour route construction.

pub mod config;
pub mod error;
pub mod format;
pub mod graph;
pub mod logging;
pub mod matrix;
pub mod route;
