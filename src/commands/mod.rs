//! CLI commands for planar

pub mod connectivity;
pub mod dispatch;
pub mod eccentricity;
pub mod input;
pub mod reach;
pub mod tour;
