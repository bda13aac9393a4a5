use log::{debug, warn};
use num_traits::{Float, Zero};
use std::fmt::Debug;

use crate::algorithm::{ShortestPathAlgorithm, ShortestPathResult};
use crate::graph::Graph;
use crate::{Error, Result};

/// Bellman-Ford single-source shortest paths.
///
/// Tolerates negative edge weights and flags negative cycles reachable
/// from the origin. Runs up to `node_count` relaxation passes over every
/// node's adjacency, exiting early once a pass applies no update; an
/// update still required on the final pass cannot belong to any simple
/// path and therefore proves a negative cycle.
#[derive(Debug, Default)]
pub struct BellmanFord;

impl BellmanFord {
    /// Creates a new Bellman-Ford algorithm instance
    pub fn new() -> Self {
        BellmanFord
    }
}

impl<W, G> ShortestPathAlgorithm<W, G> for BellmanFord
where
    W: Float + Zero + Debug + Copy,
    G: Graph<W>,
{
    fn name(&self) -> &'static str {
        "Bellman-Ford"
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

        let mut negative_cycle = false;

        for pass in 0..n {
            let last_pass = pass + 1 == n;
            let mut updated = false;

            for i in 0..n {
                for (j, weight) in graph.outgoing_edges(i) {
                    // An unreached i has distance +inf, so the candidate
                    // stays +inf and never passes the strict test
                    let relaxed = distances[i] + weight;
                    if relaxed < distances[j] {
                        updated = true;
                        if last_pass {
                            // Convergence is guaranteed after n-1 passes,
                            // so this improvement proves a negative cycle.
                            // Leave the vectors as pass n-1 wrote them and
                            // abandon the rest of this node's adjacency;
                            // the remaining nodes are still scanned.
                            if !negative_cycle {
                                warn!(
                                    "negative cycle reachable from {} detected on pass {}",
                                    origin,
                                    pass + 1
                                );
                            }
                            negative_cycle = true;
                            break;
                        }
                        distances[j] = relaxed;
                        predecessors[j] = i;
                    }
                }
            }

            // A quiet pass cannot be followed by a noisy one
            if !updated {
                debug!("converged after {} of {} passes", pass + 1, n);
                break;
            }
        }

        Ok(ShortestPathResult::new(
            origin,
            distances,
            predecessors,
            negative_cycle,
        ))
    }
}
