#![warn(missing_docs)]

//! Math types for tricast.
//!
//! Thin wrappers around nalgebra: points, vectors, unit directions and the
//! tolerance shared by every intersection query.

use nalgebra::{Unit, Vector3};
use serde::{Deserialize, Serialize};

/// A point in 3D space.
pub type Point3 = nalgebra::Point3<f64>;

/// A vector in 3D space.
pub type Vec3 = Vector3<f64>;

/// A unit (normalized) direction vector in 3D space.
pub type Dir3 = Unit<Vector3<f64>>;

/// Tolerance used by the intersection tests.
///
/// A single epsilon guards both the parallel-ray determinant and the
/// minimum accepted ray parameter.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Tolerance {
    /// Smallest determinant / ray parameter treated as non-zero.
    pub epsilon: f64,
}

impl Tolerance {
    /// Default intersection tolerance (1e-6).
    pub const DEFAULT: Self = Self { epsilon: 1e-6 };

    /// Build a tolerance with a custom epsilon.
    pub const fn new(epsilon: f64) -> Self {
        Self { epsilon }
    }

    /// Check if a scalar is effectively zero (`|d| < epsilon`).
    #[inline]
    pub fn is_zero(&self, d: f64) -> bool {
        d.abs() < self.epsilon
    }

    /// Check if a scalar is strictly beyond the tolerance (`d > epsilon`).
    #[inline]
    pub fn is_positive(&self, d: f64) -> bool {
        d > self.epsilon
    }

    /// True for a finite, strictly positive epsilon.
    pub fn is_valid(&self) -> bool {
        self.epsilon.is_finite() && self.epsilon > 0.0
    }
}

impl Default for Tolerance {
    fn default() -> Self {
        Self::DEFAULT
    }
}

/// True if every component of `v` is finite.
#[inline]
pub fn is_finite_vec(v: &Vec3) -> bool {
    v.iter().all(|c| c.is_finite())
}

/// True if every coordinate of `p` is finite.
#[inline]
pub fn is_finite_point(p: &Point3) -> bool {
    is_finite_vec(&p.coords)
}
