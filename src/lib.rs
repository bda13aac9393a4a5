//! Sparse Paths - weighted-graph engine over sparse adjacency storage
//!
//! This library provides a generic two-dimensional sparse container, a
//! weighted graph built on top of it, and two single-source shortest-path
//! algorithms: a label-correcting Dijkstra variant for non-negative edge
//! weights and Bellman-Ford with negative-cycle detection.
//!
//! Graphs are populated through edge insertion, algorithms read the graph
//! through its edge-query interface, and each run produces an immutable
//! [`ShortestPathResult`] from which distances and paths can be queried.

pub mod algorithm;
pub mod data_structures;
pub mod graph;

pub use algorithm::{
    bellman_ford::BellmanFord, dijkstra::Dijkstra, ShortestPathAlgorithm, ShortestPathResult,
};
pub use data_structures::SparseGrid;
/// Re-export main types for convenient use
pub use graph::sparse::SparseGraph;

/// Error types for the library
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    #[error("index {index} out of range for bound {bound}")]
    IndexOutOfRange { index: usize, bound: usize },

    #[error("node {0} is not reachable from the origin")]
    Unreachable(usize),
}

/// Result type for the library
pub type Result<T> = std::result::Result<T, Error>;
