//! Error type for lattice construction and index mapping.

use glam::UVec3;
use thiserror::Error;

/// Failures raised while mapping indices or building a lattice.
///
/// Every variant aborts the call that produced it; builders never hand out a
/// partially constructed graph.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GraphError {
  #[error("coordinate {coord} outside cube of side {side}")]
  CoordinateOutOfRange { coord: UVec3, side: u32 },

  #[error("vertex index {index} outside store of {len} vertices")]
  IndexOutOfRange { index: usize, len: usize },

  #[error("side {side} is too large: side³ vertex ids overflow usize")]
  SideTooLarge { side: u32 },

  #[error("hierarchical lattice needs 1 or more levels (at most {max}), got {levels}")]
  InvalidLevels { levels: u32, max: u32 },

  #[error("side {side} must be a positive multiple of 2^{levels} = {divisor}")]
  SideNotDivisible { side: u32, levels: u32, divisor: u32 },
}
