//! CrossSectionMeasurement - scalar field on the `z = 0` plane.
//!
//! Relies on the shared index layout: ids `0..L²` are the `z = 0` plane in
//! row-major `(x, y)` order for grid and hierarchical lattices alike.

use glam::UVec3;

use super::{Measurement, SweepState};
use crate::graph::Graph;
use crate::index::linear;
use crate::xy::SpinXy;
use crate::GraphError;

/// Spin types that reduce to one number per vertex.
pub trait Scalar {
  fn scalar(&self) -> f64;
}

impl Scalar for SpinXy {
  fn scalar(&self) -> f64 {
    self.theta
  }
}

impl Scalar for f64 {
  fn scalar(&self) -> f64 {
    *self
  }
}

/// Read the `z = 0` plane of `spins`; entry `x + L·y` holds vertex `(x, y, 0)`.
///
/// Fails if `spins` is shorter than the plane.
pub fn cross_section<G, X>(graph: &G, spins: &[X]) -> Result<Vec<f64>, GraphError>
where
  G: Graph + ?Sized,
  X: Scalar,
{
  let side = graph.side();
  let mut plane = Vec::with_capacity((side as usize).pow(2));
  for y in 0..side {
    for x in 0..side {
      let id = linear(UVec3::new(x, y, 0), side);
      let spin = spins.get(id).ok_or(GraphError::IndexOutOfRange {
        index: id,
        len: spins.len(),
      })?;
      plane.push(spin.scalar());
    }
  }
  Ok(plane)
}

/// Keeps the cross-section taken after the most recent cluster.
///
/// A failed read leaves [`latest`](Self::latest) untouched and is kept in
/// [`last_error`](Self::last_error) until the next successful read.
#[derive(Clone, Debug, Default)]
pub struct CrossSectionMeasurement {
  latest: Vec<f64>,
  recorded: usize,
  last_error: Option<GraphError>,
}

impl CrossSectionMeasurement {
  pub fn new() -> Self {
    Self::default()
  }

  /// Most recent plane, empty before the first cluster.
  pub fn latest(&self) -> &[f64] {
    &self.latest
  }

  /// Number of planes recorded so far.
  pub fn recorded(&self) -> usize {
    self.recorded
  }

  /// Error from the most recent cluster, `None` if its plane was recorded.
  pub fn last_error(&self) -> Option<&GraphError> {
    self.last_error.as_ref()
  }
}

impl<G, X, R> Measurement<G, X, R> for CrossSectionMeasurement
where
  G: Graph + ?Sized,
  X: Scalar,
{
  fn post_cluster(&mut self, state: &SweepState<'_, G, X>) {
    match cross_section(state.graph, state.spins) {
      Ok(plane) => {
        self.latest = plane;
        self.recorded += 1;
        self.last_error = None;
      }
      Err(err) => {
        #[cfg(feature = "tracing")]
        tracing::warn!(step = state.step, error = %err, "cross-section skipped");
        self.last_error = Some(err);
      }
    }
  }
}

#[cfg(test)]
#[path = "cross_section_test.rs"]
mod cross_section_test;
