//! XY model values: planar spins and the rotations a cluster flip applies.
//!
//! Angles live in `(0, 2π]` after a rotation: `act` wraps values above `2π`
//! down, `act_inverse` wraps values at or below zero up. Only one wrap is
//! applied, which is enough for inputs already in range.

use std::f64::consts::TAU;

use rand::Rng;

/// Planar spin given by its angle in radians.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct SpinXy {
  pub theta: f64,
}

impl SpinXy {
  pub fn new(theta: f64) -> Self {
    Self { theta }
  }
}

/// Rotation of the plane by `angle` radians.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct RotationXy {
  pub angle: f64,
}

impl RotationXy {
  pub fn new(angle: f64) -> Self {
    Self { angle }
  }
}

/// Group action of a transformation on values of type `T`.
pub trait Action<T> {
  fn act(&self, x: &T) -> T;
  fn act_inverse(&self, x: &T) -> T;
}

impl Action<SpinXy> for RotationXy {
  fn act(&self, s: &SpinXy) -> SpinXy {
    SpinXy::new(wrap_above(s.theta + self.angle))
  }

  fn act_inverse(&self, s: &SpinXy) -> SpinXy {
    SpinXy::new(wrap_below(s.theta - self.angle))
  }
}

impl Action<RotationXy> for RotationXy {
  fn act(&self, t: &RotationXy) -> RotationXy {
    RotationXy::new(wrap_above(t.angle + self.angle))
  }

  fn act_inverse(&self, t: &RotationXy) -> RotationXy {
    RotationXy::new(wrap_below(t.angle - self.angle))
  }
}

#[inline]
fn wrap_above(angle: f64) -> f64 {
  if angle > TAU {
    angle - TAU
  } else {
    angle
  }
}

#[inline]
fn wrap_below(angle: f64) -> f64 {
  if angle <= 0.0 {
    angle + TAU
  } else {
    angle
  }
}

/// Spin-spin coupling `cos(θa - θb)`.
#[inline]
pub fn xy_coupling(a: &SpinXy, b: &SpinXy) -> f64 {
  (a.theta - b.theta).cos()
}

/// Rotation by an angle drawn uniformly from `[0, 2π)`.
pub fn uniform_rotation<R: Rng + ?Sized>(rng: &mut R) -> RotationXy {
  RotationXy::new(rng.random_range(0.0..TAU))
}

/// `count` spins with independent uniform angles.
pub fn random_spins<R: Rng + ?Sized>(rng: &mut R, count: usize) -> Vec<SpinXy> {
  (0..count)
    .map(|_| SpinXy::new(rng.random_range(0.0..TAU)))
    .collect()
}

#[cfg(test)]
#[path = "xy_test.rs"]
mod xy_test;
