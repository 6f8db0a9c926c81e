//! GridGraph - open-boundary nearest-neighbour cube.

use glam::UVec3;

use super::{Graph, Vertex, VertexArena, UNIT_WEIGHT};
use crate::index::{linear, spatial};
use crate::GraphError;

/// Simple cubic lattice of side `L` with open boundaries.
///
/// Vertex `(x, y, z)` is bonded to each axis neighbour that stays inside
/// `[0, L)`. Every vertex adds its own half-edges, so each bond appears once
/// from either endpoint. Degree ranges from 3 (corner) to 6 (interior) and
/// the half-edge count is `6 L² (L - 1)` for `L >= 2`.
#[derive(Clone, Debug, PartialEq)]
pub struct GridGraph {
  arena: VertexArena,
}

impl GridGraph {
  /// Build the grid. `L = 0` gives an empty graph, `L = 1` a lone vertex.
  ///
  /// # Panics
  /// Panics if `L³` overflows `usize` (`L > 2_642_245` on 64-bit targets).
  /// Use [`GridGraph::try_new`] for sides that are not known to fit.
  pub fn new(side: u32) -> Self {
    match Self::try_new(side) {
      Ok(grid) => grid,
      Err(err) => panic!("{err}"),
    }
  }

  /// Fallible [`GridGraph::new`]; fails with [`GraphError::SideTooLarge`].
  #[cfg_attr(feature = "tracing", tracing::instrument(skip_all, name = "graph::grid"))]
  pub fn try_new(side: u32) -> Result<Self, GraphError> {
    let mut arena = VertexArena::new(side)?;
    for i in 0..arena.vertices().len() {
      let coord = spatial(i, side);
      for neighbor in axis_neighbors(coord, side) {
        arena.add_edge(i, linear(neighbor, side), UNIT_WEIGHT);
      }
    }
    Ok(Self { arena })
  }
}

impl Graph for GridGraph {
  fn side(&self) -> u32 {
    self.arena.side()
  }

  fn vertices(&self) -> &[Vertex] {
    self.arena.vertices()
  }

  fn edge_count(&self) -> usize {
    self.arena.edge_count()
  }
}

/// In-bounds axis neighbours in the order -x, +x, -y, +y, -z, +z.
fn axis_neighbors(coord: UVec3, side: u32) -> impl Iterator<Item = UVec3> {
  (0..3).flat_map(move |axis| {
    let lower = (coord[axis] > 0).then(|| {
      let mut n = coord;
      n[axis] -= 1;
      n
    });
    let upper = (coord[axis] + 1 < side).then(|| {
      let mut n = coord;
      n[axis] += 1;
      n
    });
    lower.into_iter().chain(upper)
  })
}

#[cfg(test)]
#[path = "grid_test.rs"]
mod grid_test;
