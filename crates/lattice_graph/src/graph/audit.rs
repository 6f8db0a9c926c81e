//! Post-construction symmetry audit.
//!
//! Grid bonds are symmetric by construction. Hierarchical centre bonds are
//! emitted one direction per octant and only pair up because both octants of
//! a boundary are visited, so finished graphs are checked here instead of
//! trusting the recursion.

use rayon::prelude::*;

use super::{Graph, Vertex, VertexId};

/// A `(from -> to, weight)` half-edge whose reverse count differs.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct UnmatchedEdge {
  pub from: VertexId,
  pub to: VertexId,
  pub weight: f64,
  /// Copies of `from -> to` with this weight.
  pub forward: usize,
  /// Copies of `to -> from` with this weight.
  pub backward: usize,
}

/// Outcome of [`audit_symmetry`].
#[derive(Clone, Debug, Default, PartialEq)]
pub struct SymmetryReport {
  /// Half-edges inspected.
  pub checked: usize,
  /// Distinct `(from, to, weight)` triples without a matching reverse.
  pub unmatched: Vec<UnmatchedEdge>,
}

impl SymmetryReport {
  pub fn is_symmetric(&self) -> bool {
    self.unmatched.is_empty()
  }
}

/// Check that every half-edge `i -> j` of weight `w` has as many `j -> i`
/// partners of weight `w` as it has copies.
///
/// Vertices are scanned in parallel; the report lists findings in vertex
/// order regardless of scheduling.
#[cfg_attr(feature = "tracing", tracing::instrument(skip_all, name = "graph::audit_symmetry"))]
pub fn audit_symmetry<G: Graph + Sync + ?Sized>(graph: &G) -> SymmetryReport {
  let vertices = graph.vertices();
  let unmatched: Vec<UnmatchedEdge> = vertices
    .par_iter()
    .flat_map_iter(|vertex| unmatched_edges(vertices, vertex))
    .collect();

  SymmetryReport {
    checked: vertices.iter().map(Vertex::degree).sum(),
    unmatched,
  }
}

fn unmatched_edges<'a>(
  vertices: &'a [Vertex],
  vertex: &'a Vertex,
) -> impl Iterator<Item = UnmatchedEdge> + 'a {
  vertex
    .edges
    .iter()
    .enumerate()
    // first occurrence of each (neighbor, weight) only
    .filter(move |(k, e)| !vertex.edges[..*k].contains(e))
    .filter_map(move |(_, e)| {
      let forward = vertex.edges.iter().filter(|f| *f == e).count();
      let backward = vertices
        .get(e.neighbor)
        .map(|n| {
          n.edges
            .iter()
            .filter(|b| b.neighbor == vertex.id && b.weight == e.weight)
            .count()
        })
        .unwrap_or(0);
      (forward != backward).then_some(UnmatchedEdge {
        from: vertex.id,
        to: e.neighbor,
        weight: e.weight,
        forward,
        backward,
      })
    })
}

#[cfg(test)]
#[path = "audit_test.rs"]
mod audit_test;
