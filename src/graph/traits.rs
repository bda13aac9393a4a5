use num_traits::{Float, Zero};
use std::fmt::Debug;

use crate::Result;

/// Read interface of a weighted graph.
///
/// The shortest-path algorithms depend only on this trait; they never
/// mutate a graph and never see its storage.
pub trait Graph<W>: Debug
where
    W: Float + Zero + Debug + Copy,
{
    /// Returns the number of nodes in the graph
    fn node_count(&self) -> usize;

    /// Returns the number of stored directed arcs
    fn edge_count(&self) -> usize;

    /// Returns true if the node id is valid for this graph
    fn has_node(&self, node: usize) -> bool;

    /// Weight of the edge from `from` to `to`: zero on the diagonal,
    /// positive infinity when the nodes are not adjacent
    fn edge_weight(&self, from: usize, to: usize) -> Result<W>;

    /// Returns an iterator over the outgoing edges of a node as
    /// (neighbor, weight) pairs. A node with no outgoing edges yields an
    /// empty iterator, never an absent value.
    fn outgoing_edges(&self, node: usize) -> Box<dyn Iterator<Item = (usize, W)> + '_>;
}
