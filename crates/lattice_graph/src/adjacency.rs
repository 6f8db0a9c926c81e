//! Adjacency extraction for serialization and inspection.

use crate::graph::{Graph, VertexId};

/// Neighbour ids per vertex, indexed by vertex id.
pub type AdjacencyTable = Vec<Vec<VertexId>>;

/// Flatten a graph into one row of neighbour ids per vertex.
///
/// Rows follow vertex id order and each row follows half-edge order.
/// Weights are dropped.
pub fn adjacency_table<G: Graph + ?Sized>(graph: &G) -> AdjacencyTable {
  graph
    .vertices()
    .iter()
    .map(|v| v.neighbors().collect())
    .collect()
}

#[cfg(test)]
#[path = "adjacency_test.rs"]
mod adjacency_test;
