//! Degree and coupling statistics for a finished graph.
//!
//! Used for logging after a build and for sanity checks in tests.

use crate::graph::{Graph, Vertex};

/// Summary of a built lattice.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct GraphStats {
  /// Vertex count (`L³`).
  pub vertices: usize,
  /// Half-edge count.
  pub half_edges: usize,
  /// Vertex count per degree (index = degree).
  pub degree_histogram: Vec<usize>,
  /// Half-edge count per distinct weight, ascending by weight.
  pub weight_histogram: Vec<(f64, usize)>,
  /// Sum of all half-edge weights.
  pub total_weight: f64,
}

impl GraphStats {
  pub fn from_graph<G: Graph + ?Sized>(graph: &G) -> Self {
    let mut stats = Self {
      vertices: graph.nv(),
      ..Self::default()
    };

    for vertex in graph.vertices() {
      stats.record_vertex(vertex);
    }
    stats
      .weight_histogram
      .sort_by(|a, b| a.0.total_cmp(&b.0));
    stats
  }

  fn record_vertex(&mut self, vertex: &Vertex) {
    let degree = vertex.degree();
    if self.degree_histogram.len() <= degree {
      self.degree_histogram.resize(degree + 1, 0);
    }
    self.degree_histogram[degree] += 1;

    for edge in &vertex.edges {
      self.half_edges += 1;
      self.total_weight += edge.weight;
      match self
        .weight_histogram
        .iter_mut()
        .find(|(w, _)| *w == edge.weight)
      {
        Some((_, count)) => *count += 1,
        None => self.weight_histogram.push((edge.weight, 1)),
      }
    }
  }

  /// Smallest vertex degree, `None` for an empty graph.
  pub fn min_degree(&self) -> Option<usize> {
    self.degree_histogram.iter().position(|&n| n > 0)
  }

  /// Largest vertex degree, `None` for an empty graph.
  pub fn max_degree(&self) -> Option<usize> {
    self.degree_histogram.iter().rposition(|&n| n > 0)
  }

  /// Average out-degree.
  pub fn mean_degree(&self) -> f64 {
    if self.vertices == 0 {
      0.0
    } else {
      self.half_edges as f64 / self.vertices as f64
    }
  }
}

#[cfg(test)]
#[path = "stats_test.rs"]
mod stats_test;
