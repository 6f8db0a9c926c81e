//! Graph model shared by all lattice builders.
//!
//! A graph is a fixed arena of `L³` vertices indexed by id. Each vertex owns
//! its outgoing half-edges; an undirected bond is two half-edges, one per
//! endpoint. Builders fill the arena in a single pass and then only hand out
//! shared references, so a finished graph is immutable.
//!
//! # Module Structure
//!
//! - [`grid`]: `GridGraph` - open-boundary nearest-neighbour cube
//! - [`hierarchical`]: `HierarchicalGraph` - octree-subdivided cube with
//!   weighted centre bonds
//! - [`lattice`]: `Lattice` / `Topology` - caller-selected builder
//! - [`audit`]: half-edge symmetry check for finished graphs

use smallvec::SmallVec;

use crate::index::vertex_count;
use crate::{GraphError, DIMENSION};

pub mod audit;
pub mod grid;
pub mod hierarchical;
pub mod lattice;

// Re-exports
pub use audit::{audit_symmetry, SymmetryReport};
pub use grid::GridGraph;
pub use hierarchical::HierarchicalGraph;
pub use lattice::{Lattice, Topology};

/// Linear vertex id (position in the vertex arena).
pub type VertexId = usize;

/// Weight carried by nearest-neighbour bonds.
pub const UNIT_WEIGHT: f64 = 1.0;

/// One directed, weighted relation from the owning vertex to `neighbor`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct HalfEdge {
  /// Target vertex id.
  pub neighbor: VertexId,
  /// Coupling strength.
  pub weight: f64,
}

impl HalfEdge {
  pub fn new(neighbor: VertexId, weight: f64) -> Self {
    Self { neighbor, weight }
  }
}

/// Lattice site with its outgoing half-edges in insertion order.
///
/// Six inline slots cover every grid vertex without spilling to the heap.
#[derive(Clone, Debug, PartialEq)]
pub struct Vertex {
  /// Vertex id, equal to its index in the arena.
  pub id: VertexId,
  /// Outgoing half-edges.
  pub edges: SmallVec<[HalfEdge; 6]>,
}

impl Vertex {
  pub fn new(id: VertexId) -> Self {
    Self {
      id,
      edges: SmallVec::new(),
    }
  }

  /// Number of outgoing half-edges.
  #[inline]
  pub fn degree(&self) -> usize {
    self.edges.len()
  }

  /// Neighbour ids in half-edge order.
  pub fn neighbors(&self) -> impl Iterator<Item = VertexId> + '_ {
    self.edges.iter().map(|e| e.neighbor)
  }
}

/// Read access a cluster engine needs from a lattice.
///
/// Implemented by every concrete builder output; engines stay generic over
/// this trait instead of a particular topology.
pub trait Graph {
  /// Side length `L` of the cube.
  fn side(&self) -> u32;

  /// All vertices, indexed by id.
  fn vertices(&self) -> &[Vertex];

  /// Number of half-edges created during construction.
  fn edge_count(&self) -> usize;

  /// Spatial dimension `D`.
  fn dimension(&self) -> u32 {
    DIMENSION
  }

  /// Vertex count `nv = L^D`.
  fn nv(&self) -> usize {
    self.vertices().len()
  }

  /// Vertex by id, `None` if out of range.
  fn vertex(&self, id: VertexId) -> Option<&Vertex> {
    self.vertices().get(id)
  }
}

/// Pre-sized vertex store written by the builders.
#[derive(Clone, Debug, PartialEq)]
pub(crate) struct VertexArena {
  side: u32,
  vertices: Vec<Vertex>,
  edge_count: usize,
}

impl VertexArena {
  /// Allocate `side³` vertices with ids equal to their positions.
  pub(crate) fn new(side: u32) -> Result<Self, GraphError> {
    let vertices = (0..vertex_count(side)?).map(Vertex::new).collect();
    Ok(Self {
      side,
      vertices,
      edge_count: 0,
    })
  }

  /// Append a half-edge `from -> to`.
  #[inline]
  pub(crate) fn add_edge(&mut self, from: VertexId, to: VertexId, weight: f64) {
    debug_assert!(to < self.vertices.len(), "neighbor {to} outside arena");
    self.vertices[from].edges.push(HalfEdge::new(to, weight));
    self.edge_count += 1;
  }

  pub(crate) fn side(&self) -> u32 {
    self.side
  }

  pub(crate) fn vertices(&self) -> &[Vertex] {
    &self.vertices
  }

  pub(crate) fn edge_count(&self) -> usize {
    self.edge_count
  }
}
