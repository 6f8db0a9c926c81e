//! HierarchicalGraph - octree-subdivided lattice with renormalized couplings.
//!
//! The cube is split into octants recursively. At the finest level each
//! octant is an ordinary [`GridGraph`]; at every coarser level the 8 octants
//! of a cube bond their centre vertices along each axis with weight `h²`,
//! where `h` is the octant side. Coarse bonds stand in for the `h²`
//! nearest-neighbour bonds crossing the face between two octants.
//!
//! ```text
//! level 1 (L_level = 8, h = 4)        level 0 (L_level = 4)
//! ┌───────┬───────┐                   ┌─┬─┬─┬─┐
//! │   c ──┼── c   │  weight 16        ├─┼─┼─┼─┤  plain grid,
//! │   │   │   │   │                   ├─┼─┼─┼─┤  weight 1
//! ├───┼───┼───┼───┤                   └─┴─┴─┴─┘
//! │   c ──┼── c   │
//! └───────┴───────┘
//! ```
//!
//! Centre vertices are existing lattice sites, not new vertices. Their x and
//! y components sit at `h/2` inside the octant, the z component sits on the
//! octant's lower face.

use glam::UVec3;

use super::{Graph, GridGraph, Vertex, VertexArena, UNIT_WEIGHT};
use crate::index::{linear, spatial};
use crate::{GraphError, OCTANT_OFFSETS};

/// Renormalization-style hierarchical lattice over the `L³` index space.
#[derive(Clone, Debug, PartialEq)]
pub struct HierarchicalGraph {
  arena: VertexArena,
  levels: u32,
}

impl HierarchicalGraph {
  /// Largest level count whose divisor `2^levels` fits in a `u32`.
  pub const MAX_LEVELS: u32 = u32::BITS - 1;

  /// Build a hierarchical lattice of side `side` with `levels` octree levels.
  ///
  /// `levels = 1` is a plain grid. The side must be a positive multiple of
  /// `2^levels` and `side³` must fit in a `usize`; anything else is rejected
  /// before any edge is added.
  #[cfg_attr(feature = "tracing", tracing::instrument(skip_all, name = "graph::hierarchical"))]
  pub fn new(side: u32, levels: u32) -> Result<Self, GraphError> {
    validate(side, levels)?;
    let arena = VertexArena::new(side)?;

    let leaf = {
      #[cfg(feature = "tracing")]
      let _span = tracing::info_span!("leaf_template").entered();
      GridGraph::try_new(side >> (levels - 1))?
    };

    let mut builder = LevelBuilder {
      arena,
      leaf: &leaf,
      side,
    };
    let created = {
      #[cfg(feature = "tracing")]
      let _span = tracing::info_span!("generate_levels").entered();
      builder.generate_level(UVec3::ZERO, side, levels - 1)
    };
    debug_assert_eq!(created, builder.arena.edge_count());

    #[cfg(feature = "tracing")]
    tracing::debug!(side, levels, edges = created, "hierarchical lattice built");

    Ok(Self {
      arena: builder.arena,
      levels,
    })
  }

  /// Number of octree levels, including the grid level.
  pub fn levels(&self) -> u32 {
    self.levels
  }

  /// Side of the grids at the finest level.
  pub fn leaf_side(&self) -> u32 {
    self.arena.side() >> (self.levels - 1)
  }
}

impl Graph for HierarchicalGraph {
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

/// Reject level counts and sides the recursion cannot tile exactly.
fn validate(side: u32, levels: u32) -> Result<(), GraphError> {
  if levels == 0 || levels > HierarchicalGraph::MAX_LEVELS {
    return Err(GraphError::InvalidLevels {
      levels,
      max: HierarchicalGraph::MAX_LEVELS,
    });
  }
  let divisor = 1u32 << levels;
  if side == 0 || side % divisor != 0 {
    return Err(GraphError::SideNotDivisible {
      side,
      levels,
      divisor,
    });
  }
  Ok(())
}

/// Centre vertex of the octant at `local` inside the cube at `origin`.
#[inline]
fn octant_center(origin: UVec3, half: u32, local: UVec3) -> UVec3 {
  // z stays on the octant's lower face
  origin + half * local + UVec3::new(half / 2, half / 2, 0)
}

/// Recursion state: the shared arena plus the leaf grid every octant copies.
struct LevelBuilder<'a> {
  arena: VertexArena,
  leaf: &'a GridGraph,
  side: u32,
}

impl LevelBuilder<'_> {
  /// Fill the cube at `origin` with side `level_side`; returns half-edges added.
  fn generate_level(&mut self, origin: UVec3, level_side: u32, level: u32) -> usize {
    if level == 0 {
      return self.copy_leaf(origin);
    }

    let half = level_side / 2;
    let weight = f64::from(half).powi(2);
    let mut created = 0;

    for local in OCTANT_OFFSETS {
      created += self.generate_level(origin + half * local, half, level - 1);

      let center = linear(octant_center(origin, half, local), self.side);
      for axis in 0..3 {
        let mut across = local;
        across[axis] = 1 - local[axis];
        let neighbor = linear(octant_center(origin, half, across), self.side);
        self.arena.add_edge(center, neighbor, weight);
        created += 1;
      }
    }

    created
  }

  /// Translate the leaf grid to `origin` and append its half-edges.
  fn copy_leaf(&mut self, origin: UVec3) -> usize {
    let leaf_side = self.leaf.side();
    for vertex in self.leaf.vertices() {
      let from = linear(origin + spatial(vertex.id, leaf_side), self.side);
      for edge in &vertex.edges {
        let to = linear(origin + spatial(edge.neighbor, leaf_side), self.side);
        self.arena.add_edge(from, to, UNIT_WEIGHT);
      }
    }
    self.leaf.edge_count()
  }
}

#[cfg(test)]
#[path = "hierarchical_test.rs"]
mod hierarchical_test;
