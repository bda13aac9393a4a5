use rand::prelude::*;

use crate::graph::SparseGraph;
use crate::Result;

/// Generates a random directed graph with `nodes` nodes and roughly `edges`
/// edges. Weights are integer-valued in `1..=max_weight` so that different
/// algorithms produce bit-identical distance sums on the same input.
pub fn random_directed(nodes: usize, edges: usize, max_weight: u32) -> Result<SparseGraph<f64>> {
    random_graph(nodes, edges, max_weight, false)
}

/// Generates a random undirected graph with `nodes` nodes and roughly
/// `edges` edges, weights as in [`random_directed`]
pub fn random_undirected(nodes: usize, edges: usize, max_weight: u32) -> Result<SparseGraph<f64>> {
    random_graph(nodes, edges, max_weight, true)
}

fn random_graph(
    nodes: usize,
    edges: usize,
    max_weight: u32,
    undirected: bool,
) -> Result<SparseGraph<f64>> {
    assert!(nodes > 1, "graph needs at least two nodes");
    assert!(max_weight > 0, "max_weight must be positive");

    let mut graph = SparseGraph::new(nodes, undirected);
    let mut rng = rand::thread_rng();

    for _ in 0..edges {
        let i = rng.gen_range(0..nodes);
        let j = rng.gen_range(0..nodes);
        // Skip self-loops; duplicate picks just overwrite the earlier weight
        if i != j {
            let weight = rng.gen_range(1..=max_weight) as f64;
            graph.add_edge(i, j, weight)?;
        }
    }

    Ok(graph)
}
