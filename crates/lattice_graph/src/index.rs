//! Index mapping between linear vertex ids and cube coordinates.
//!
//! Every lattice in this crate lays its vertices out in the same order, so a
//! vertex id alone tells you where the vertex sits in the cube.
//!
//! # 3D Indexing
//!
//! ```text
//! index = x + L * y + L² * z
//!
//! Address:  0       1       ...  L-1       L       ...  L²-1        L²
//! Content: [0,0,0] [1,0,0]  ... [L-1,0,0] [0,1,0]  ... [L-1,L-1,0] [0,0,1]
//!          └────────────── z = 0 plane ──────────────────────────┘
//! ```
//!
//! X is the minor axis (stride 1), Y the middle (stride L), Z the major
//! (stride L²). The first `L²` ids therefore form the `z = 0` plane in
//! row-major `(x, y)` order, which cross-section extraction relies on.
//!
//! # Octant Order
//!
//! ```text
//! Octant indices (binary: ZYX), same as to_3d(i, 2):
//!   0 = (0,0,0)    4 = (0,0,1)
//!   1 = (1,0,0)    5 = (1,0,1)
//!   2 = (0,1,0)    6 = (0,1,1)
//!   3 = (1,1,0)    7 = (1,1,1)
//! ```

use glam::UVec3;

use crate::GraphError;

/// Spatial dimension of every lattice built by this crate.
pub const DIMENSION: u32 = 3;

/// Local offsets of the 8 octants of a cube, indexed by octant number.
pub const OCTANT_OFFSETS: [UVec3; 8] = [
  UVec3::new(0, 0, 0),
  UVec3::new(1, 0, 0),
  UVec3::new(0, 1, 0),
  UVec3::new(1, 1, 0),
  UVec3::new(0, 0, 1),
  UVec3::new(1, 0, 1),
  UVec3::new(0, 1, 1),
  UVec3::new(1, 1, 1),
];

/// Number of vertices in a cube of the given side (`L³`).
///
/// Fails with [`GraphError::SideTooLarge`] when `L³` does not fit in a
/// `usize`. Once this succeeds every in-range id and coordinate maps
/// without overflow.
#[inline]
pub fn vertex_count(side: u32) -> Result<usize, GraphError> {
  let len = side as usize;
  len
    .checked_mul(len)
    .and_then(|plane| plane.checked_mul(len))
    .ok_or(GraphError::SideTooLarge { side })
}

/// Convert cube coordinates to a linear vertex id.
///
/// Fails if any component lies outside `[0, side)` or the cube is too large
/// to index.
pub fn to_1d(coord: UVec3, side: u32) -> Result<usize, GraphError> {
  vertex_count(side)?;
  if coord.cmpge(UVec3::splat(side)).any() {
    return Err(GraphError::CoordinateOutOfRange { coord, side });
  }
  Ok(linear(coord, side))
}

/// Convert a linear vertex id back to cube coordinates.
///
/// Fails if `index >= side³` or the cube is too large to index.
pub fn to_3d(index: usize, side: u32) -> Result<UVec3, GraphError> {
  let len = vertex_count(side)?;
  if index >= len {
    return Err(GraphError::IndexOutOfRange { index, len });
  }
  Ok(spatial(index, side))
}

/// Unchecked [`to_1d`] for callers that construct in-range coordinates.
#[inline(always)]
pub(crate) fn linear(coord: UVec3, side: u32) -> usize {
  debug_assert!(
    coord.cmplt(UVec3::splat(side)).all(),
    "coordinate {coord} outside cube of side {side}"
  );
  let side = side as usize;
  coord.x as usize + side * coord.y as usize + side * side * coord.z as usize
}

/// Unchecked [`to_3d`] for callers that iterate over `0..side³`.
#[inline(always)]
pub(crate) fn spatial(index: usize, side: u32) -> UVec3 {
  debug_assert!(
    vertex_count(side).is_ok_and(|len| index < len),
    "index {index} outside cube of side {side}"
  );
  let side = side as usize;
  let plane = side * side;
  let z = index / plane;
  let rest = index % plane;
  UVec3::new((rest % side) as u32, (rest / side) as u32, z as u32)
}

#[cfg(test)]
#[path = "index_test.rs"]
mod index_test;
