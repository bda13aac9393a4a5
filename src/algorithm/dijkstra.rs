use num_traits::{Float, Zero};
use std::collections::HashSet;
use std::fmt::Debug;

use crate::algorithm::{ShortestPathAlgorithm, ShortestPathResult};
use crate::graph::Graph;
use crate::{Error, Result};

/// Label-correcting Dijkstra variant.
///
/// Instead of a priority queue this keeps a frontier set and scans it for
/// the member with minimum tentative distance each round, and a node whose
/// distance improves re-enters the frontier even after it was removed.
/// That costs O(V^2) frontier scans plus O(E) relaxations but stays correct
/// for non-negative weights, since tentative distances only ever decrease.
///
/// Non-negativity is assumed, not enforced: feeding negative edge weights
/// produces silently incorrect results rather than an error. Use
/// [`BellmanFord`](crate::BellmanFord) for graphs that may carry them.
#[derive(Debug, Default)]
pub struct Dijkstra;

impl Dijkstra {
    /// Creates a new Dijkstra algorithm instance
    pub fn new() -> Self {
        Dijkstra
    }
}

impl<W, G> ShortestPathAlgorithm<W, G> for Dijkstra
where
    W: Float + Zero + Debug + Copy,
    G: Graph<W>,
{
    fn name(&self) -> &'static str {
        "Dijkstra"
    }

    fn compute_shortest_paths(&self, graph: &G, origin: usize) -> Result<ShortestPathResult<W>> {
        if !graph.has_node(origin) {
            return Err(Error::IndexOutOfRange {
                index: origin,
                bound: graph.node_count(),
            });
        }

        let n = graph.node_count();

        // Initialize distances and predecessors
        let mut distances = vec![W::infinity(); n];
        let mut predecessors = vec![0usize; n];
        distances[origin] = W::zero();
        predecessors[origin] = origin;

        // The frontier starts as the origin alone
        let mut frontier: HashSet<usize> = HashSet::new();
        frontier.insert(origin);

        loop {
            // Scan the frontier for the node with minimum tentative
            // distance; the first one encountered wins ties
            let mut nearest: Option<usize> = None;
            for &node in &frontier {
                let closer = match nearest {
                    Some(best) => distances[node] < distances[best],
                    None => true,
                };
                if closer {
                    nearest = Some(node);
                }
            }
            let u = match nearest {
                Some(u) => u,
                None => break,
            };
            frontier.remove(&u);

            // Relax the outgoing edges of u; improved nodes join the
            // frontier again even if they were removed before
            for (v, weight) in graph.outgoing_edges(u) {
                let relaxed = distances[u] + weight;
                if relaxed < distances[v] {
                    distances[v] = relaxed;
                    predecessors[v] = u;
                    frontier.insert(v);
                }
            }
        }

        Ok(ShortestPathResult::new(origin, distances, predecessors, false))
    }
}
