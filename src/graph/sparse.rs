use num_traits::{Float, Zero};
use serde::{Deserialize, Serialize};
use std::fmt::{self, Debug, Display};

use crate::data_structures::SparseGrid;
use crate::graph::traits::Graph;
use crate::{Error, Result};

/// A weighted graph stored as a sparse adjacency matrix.
///
/// The node count is fixed at construction and the backing grid uses
/// positive infinity as its default, so an absent edge and an unreachable
/// distance share one sentinel that no finite weight can collide with.
/// Undirected graphs mirror every insertion into the transposed cell.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SparseGraph<W>
where
    W: Float + Zero + Debug + Copy,
{
    /// Number of nodes; edges are addressed by ids below this bound
    node_count: usize,

    /// Whether insertions are mirrored, making the matrix symmetric
    symmetric: bool,

    /// Adjacency cells, default = +inf
    grid: SparseGrid<W>,
}

impl<W> SparseGraph<W>
where
    W: Float + Zero + Debug + Copy,
{
    /// Creates a graph with `node_count` nodes and no edges. When
    /// `undirected` is true every inserted edge is mirrored.
    pub fn new(node_count: usize, undirected: bool) -> Self {
        SparseGraph {
            node_count,
            symmetric: undirected,
            grid: SparseGrid::with_bounds(node_count, node_count, W::infinity()),
        }
    }

    /// Creates a directed graph with `node_count` nodes
    pub fn directed(node_count: usize) -> Self {
        SparseGraph::new(node_count, false)
    }

    /// Creates an undirected graph with `node_count` nodes
    pub fn undirected(node_count: usize) -> Self {
        SparseGraph::new(node_count, true)
    }

    /// Returns true if insertions are mirrored
    pub fn is_undirected(&self) -> bool {
        self.symmetric
    }

    /// Inserts an edge from `i` to `j` with the given weight, mirroring it
    /// into (j, i) when the graph is undirected
    pub fn add_edge(&mut self, i: usize, j: usize, weight: W) -> Result<()> {
        self.grid.put(i, j, weight)?;
        if self.symmetric {
            self.grid.put(j, i, weight)?;
        }
        Ok(())
    }

    /// Inserts an edge with unit weight, for unweighted use
    pub fn add_unit_edge(&mut self, i: usize, j: usize) -> Result<()> {
        self.add_edge(i, j, W::one())
    }

    /// Bulk edge insertion with the same semantics as repeated `add_edge`
    pub fn add_edges(&mut self, triples: &[(usize, usize, W)]) -> Result<()> {
        for &(i, j, weight) in triples {
            self.add_edge(i, j, weight)?;
        }
        Ok(())
    }
}

impl<W> Graph<W> for SparseGraph<W>
where
    W: Float + Zero + Debug + Copy,
{
    fn node_count(&self) -> usize {
        self.node_count
    }

    fn edge_count(&self) -> usize {
        self.grid.len()
    }

    fn has_node(&self, node: usize) -> bool {
        node < self.node_count
    }

    fn edge_weight(&self, from: usize, to: usize) -> Result<W> {
        if !self.has_node(from) {
            return Err(Error::IndexOutOfRange {
                index: from,
                bound: self.node_count,
            });
        }
        if !self.has_node(to) {
            return Err(Error::IndexOutOfRange {
                index: to,
                bound: self.node_count,
            });
        }
        if from == to {
            return Ok(W::zero());
        }
        self.grid.get(from, to)
    }

    fn outgoing_edges(&self, node: usize) -> Box<dyn Iterator<Item = (usize, W)> + '_> {
        if let Some(cells) = self.grid.row(node) {
            Box::new(cells.iter().map(|(&neighbor, &weight)| (neighbor, weight)))
        } else {
            Box::new(std::iter::empty())
        }
    }
}

/// Renders the adjacency matrix, printing `inf` for absent edges
impl<W> Display for SparseGraph<W>
where
    W: Float + Zero + Debug + Copy + Display,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for i in 0..self.node_count {
            for j in 0..self.node_count {
                if j > 0 {
                    write!(f, " ")?;
                }
                // edge_weight cannot fail inside the node bounds
                match self.edge_weight(i, j) {
                    Ok(w) if w.is_finite() => write!(f, "{}", w)?,
                    _ => write!(f, "inf")?,
                }
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
