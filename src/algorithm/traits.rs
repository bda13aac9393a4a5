use num_traits::{Float, Zero};
use serde::{Deserialize, Serialize};
use std::fmt::{self, Debug, Display};

use crate::graph::Graph;
use crate::{Error, Result};

/// Result of a shortest path algorithm execution.
///
/// The snapshot owns its vectors; it stays valid however the graph that
/// produced it is used afterwards. Unreachable nodes hold the positive
/// infinity sentinel in `distances` and a meaningless predecessor entry,
/// which is why [`ShortestPathResult::path_to`] refuses to walk them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ShortestPathResult<W>
where
    W: Float + Zero + Debug + Copy,
{
    /// Origin node of the computation
    origin: usize,

    /// Distance from the origin to each node, +inf when unreachable
    distances: Vec<W>,

    /// Preceding node on the shortest known path; `predecessors[origin]`
    /// is the origin itself
    predecessors: Vec<usize>,

    /// Whether a negative cycle reachable from the origin was detected
    negative_cycle: bool,
}

impl<W> ShortestPathResult<W>
where
    W: Float + Zero + Debug + Copy,
{
    pub(crate) fn new(
        origin: usize,
        distances: Vec<W>,
        predecessors: Vec<usize>,
        negative_cycle: bool,
    ) -> Self {
        ShortestPathResult {
            origin,
            distances,
            predecessors,
            negative_cycle,
        }
    }

    /// Returns the origin node of the computation
    pub fn origin(&self) -> usize {
        self.origin
    }

    /// Returns the distance from the origin to `node`, which is positive
    /// infinity when no path exists
    pub fn distance_to(&self, node: usize) -> Result<W> {
        self.distances
            .get(node)
            .copied()
            .ok_or(Error::IndexOutOfRange {
                index: node,
                bound: self.distances.len(),
            })
    }

    /// Reconstructs the path from the origin to `node` by walking the
    /// predecessor vector backwards, then reversing. Fails with
    /// `Unreachable` when the distance is infinite; predecessors of
    /// unreached nodes are never traversed.
    pub fn path_to(&self, node: usize) -> Result<Vec<usize>> {
        let distance = self.distance_to(node)?;
        if distance.is_infinite() {
            return Err(Error::Unreachable(node));
        }

        let mut path = vec![node];
        let mut current = node;
        while current != self.origin {
            // A detected negative cycle can leave a cyclic predecessor
            // chain behind; bound the walk so it cannot spin forever
            if path.len() > self.predecessors.len() {
                return Err(Error::Unreachable(node));
            }
            current = self.predecessors[current];
            path.push(current);
        }
        path.reverse();
        Ok(path)
    }

    /// Returns true if the algorithm detected a negative cycle reachable
    /// from the origin
    pub fn has_negative_cycle(&self) -> bool {
        self.negative_cycle
    }

    /// Borrows the distance vector
    pub fn distances(&self) -> &[W] {
        &self.distances
    }

    /// Borrows the predecessor vector
    pub fn predecessors(&self) -> &[usize] {
        &self.predecessors
    }
}

/// Lists the distance and predecessor chain of every node
impl<W> Display for ShortestPathResult<W>
where
    W: Float + Zero + Debug + Copy + Display,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "negative cycle detected: {}", self.negative_cycle)?;
        for node in 0..self.distances.len() {
            let distance = self.distances[node];
            if distance.is_finite() {
                write!(f, "distance from {} to {}: {}", self.origin, node, distance)?;
                if let Ok(path) = self.path_to(node) {
                    write!(f, ", via")?;
                    for step in path {
                        write!(f, " {}", step)?;
                    }
                }
                writeln!(f)?;
            } else {
                writeln!(f, "distance from {} to {}: inf", self.origin, node)?;
            }
        }
        Ok(())
    }
}

/// Trait for shortest path algorithms
pub trait ShortestPathAlgorithm<W, G>
where
    W: Float + Zero + Debug + Copy,
    G: Graph<W>,
{
    /// Compute shortest paths from an origin node to all other nodes
    fn compute_shortest_paths(&self, graph: &G, origin: usize) -> Result<ShortestPathResult<W>>;

    /// Get the name of the algorithm
    fn name(&self) -> &'static str;
}
