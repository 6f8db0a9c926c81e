//! Lattice - caller-selected topology behind one [`Graph`] value.

use std::fmt;

use super::{Graph, GridGraph, HierarchicalGraph, Vertex};
use crate::GraphError;

/// Which builder to run.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Topology {
  /// Open-boundary nearest-neighbour cube.
  Grid,
  /// Octree-subdivided cube with `levels` levels (1 = plain grid).
  Hierarchical { levels: u32 },
}

impl fmt::Display for Topology {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    match self {
      Topology::Grid => write!(f, "grid"),
      Topology::Hierarchical { levels } => write!(f, "hierarchical({levels} levels)"),
    }
  }
}

/// A built lattice of either topology.
#[derive(Clone, Debug, PartialEq)]
pub enum Lattice {
  Grid(GridGraph),
  Hierarchical(HierarchicalGraph),
}

impl Lattice {
  /// Build a cube of side `side` with the requested topology.
  pub fn build(side: u32, topology: Topology) -> Result<Self, GraphError> {
    Ok(match topology {
      Topology::Grid => Lattice::Grid(GridGraph::try_new(side)?),
      Topology::Hierarchical { levels } => {
        Lattice::Hierarchical(HierarchicalGraph::new(side, levels)?)
      }
    })
  }

  /// Topology this lattice was built with.
  pub fn topology(&self) -> Topology {
    match self {
      Lattice::Grid(_) => Topology::Grid,
      Lattice::Hierarchical(h) => Topology::Hierarchical {
        levels: h.levels(),
      },
    }
  }

  fn as_graph(&self) -> &dyn Graph {
    match self {
      Lattice::Grid(g) => g,
      Lattice::Hierarchical(h) => h,
    }
  }
}

impl Graph for Lattice {
  fn side(&self) -> u32 {
    self.as_graph().side()
  }

  fn vertices(&self) -> &[Vertex] {
    self.as_graph().vertices()
  }

  fn edge_count(&self) -> usize {
    self.as_graph().edge_count()
  }
}

impl From<GridGraph> for Lattice {
  fn from(graph: GridGraph) -> Self {
    Lattice::Grid(graph)
  }
}

impl From<HierarchicalGraph> for Lattice {
  fn from(graph: HierarchicalGraph) -> Self {
    Lattice::Hierarchical(graph)
  }
}

#[cfg(test)]
#[path = "lattice_test.rs"]
mod lattice_test;
