//! lattice_graph - Lattice topologies for cluster-update spin simulations
//!
//! This crate builds the graphs a Wolff-style cluster engine runs on: spins
//! live on vertices, couplings live on weighted half-edges. The engine itself
//! is not part of this crate; it only reads graphs through the [`Graph`]
//! trait.
//!
//! # Features
//!
//! - **Grid**: open-boundary nearest-neighbour cube of side `L`
//! - **Hierarchical**: octree-subdivided cube whose leaves are grids and whose
//!   coarse levels bond octant centres with weight `h²` (`h` = octant side)
//! - **Symmetry audit**: post-construction check that every half-edge has a
//!   partner of equal weight
//! - **Adjacency tables**: per-vertex neighbour lists for text dumps
//! - **XY model types and measurements**: spin/rotation values plus observer
//!   hooks the engine calls around each cluster flip
//!
//! # Example
//!
//! ```ignore
//! use lattice_graph::{adjacency_table, Graph, HierarchicalGraph};
//!
//! let graph = HierarchicalGraph::new(8, 3)?;
//! assert_eq!(graph.nv(), 512);
//!
//! let table = adjacency_table(&graph);
//! println!("{}", lattice_graph::io::table_to_string(&table));
//! ```

pub mod error;
pub mod index;

// Re-export commonly used items
pub use error::GraphError;
pub use index::{to_1d, to_3d, DIMENSION, OCTANT_OFFSETS};

// Graph model and builders
pub mod graph;
pub use graph::{
  audit_symmetry, Graph, GridGraph, HalfEdge, HierarchicalGraph, Lattice, SymmetryReport,
  Topology, Vertex, VertexId,
};

// Neighbour tables for serialization
pub mod adjacency;
pub use adjacency::{adjacency_table, AdjacencyTable};

// Degree and coupling statistics
pub mod stats;
pub use stats::GraphStats;

// XY spin model values
pub mod xy;
pub use xy::{RotationXy, SpinXy};

// Observer hooks around cluster flips
pub mod measurement;
pub use measurement::{
  ClusterEvent, ClusterEventKind, CrossSectionMeasurement, EventMeasurement, Measurement,
  NullMeasurement, SweepState,
};

// Plain-text dumps
pub mod io;
