//! Observer hooks a cluster engine calls around each cluster flip.
//!
//! The engine owns the spins and the random stream; measurements only see a
//! read-only [`SweepState`] snapshot. Each measurement is an independent
//! implementation of [`Measurement`]; there is no shared base type.
//!
//! # Module Structure
//!
//! - [`event`]: `EventMeasurement` - listener registry keyed by event kind
//! - [`cross_section`]: `CrossSectionMeasurement` - `z = 0` plane of a
//!   scalar spin field

use crate::graph::VertexId;

pub mod cross_section;
pub mod event;

// Re-exports
pub use cross_section::{cross_section, CrossSectionMeasurement, Scalar};
pub use event::{ClusterEvent, ClusterEventKind, EventMeasurement};

/// Read-only view of the simulation at one step.
#[derive(Debug)]
pub struct SweepState<'a, G: ?Sized, X> {
  /// Zero-based index of the current cluster flip.
  pub step: usize,
  /// Total number of cluster flips in the run.
  pub total: usize,
  /// Lattice the spins live on.
  pub graph: &'a G,
  /// Spin per vertex, indexed by vertex id.
  pub spins: &'a [X],
}

impl<G: ?Sized, X> Clone for SweepState<'_, G, X> {
  fn clone(&self) -> Self {
    *self
  }
}

impl<G: ?Sized, X> Copy for SweepState<'_, G, X> {}

/// Observer invoked by the engine. Both hooks default to no-ops.
///
/// `R` is the transformation type the engine applies to a cluster.
pub trait Measurement<G: ?Sized, X, R> {
  /// Before a cluster grows from `seed` under transformation `transform`.
  fn pre_cluster(&mut self, _state: &SweepState<'_, G, X>, _seed: VertexId, _transform: &R) {}

  /// After the cluster has been flipped.
  fn post_cluster(&mut self, _state: &SweepState<'_, G, X>) {}
}

/// Measurement that records nothing.
#[derive(Clone, Copy, Debug, Default)]
pub struct NullMeasurement;

impl<G: ?Sized, X, R> Measurement<G, X, R> for NullMeasurement {}
