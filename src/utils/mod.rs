//! Shared infrastructure used across the analyses.
//!
//! - [`graph`] - Node handles, adjacency traits and graph algorithms

pub mod graph;
