//! Ray representation and the intersection record.

use serde::{Deserialize, Serialize};
use tricast_math::{Dir3, Point3, Vec3};

/// Markers closer than this give a zero direction in [`Ray::through`].
pub const MIN_AIM_DISTANCE: f64 = 1e-5;

/// A ray in 3D space defined by origin and direction.
///
/// The direction is stored as given. Ray parameters returned by the
/// intersection tests are measured in multiples of its length, so pass a
/// unit direction when `t` should be a physical distance.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Ray {
    /// Origin point of the ray.
    pub origin: Point3,
    /// Direction of the ray (not necessarily unit length).
    pub direction: Vec3,
}

impl Ray {
    /// Create a new ray from origin and direction.
    pub fn new(origin: Point3, direction: Vec3) -> Self {
        Self { origin, direction }
    }

    /// Create a ray starting at `from` and aimed at `to`, with unit direction.
    ///
    /// Points at most [`MIN_AIM_DISTANCE`] apart give a zero direction, which
    /// every intersection test reports as a miss.
    pub fn through(from: Point3, to: Point3) -> Self {
        let direction = (to - from)
            .try_normalize(MIN_AIM_DISTANCE)
            .unwrap_or_else(Vec3::zeros);
        Self {
            origin: from,
            direction,
        }
    }

    /// Evaluate the ray at parameter `t`: `origin + t * direction`.
    #[inline]
    pub fn at(&self, t: f64) -> Point3 {
        self.origin + self.direction * t
    }

    /// Normalized direction, or `None` for a zero-length direction.
    pub fn unit_direction(&self) -> Option<Dir3> {
        Dir3::try_new(self.direction, 0.0)
    }
}

/// Result of a ray-triangle intersection.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RayHit {
    /// Parameter along the ray where intersection occurs.
    pub t: f64,
    /// 3D intersection point, `origin + t * direction`.
    pub point: Point3,
    /// Barycentric weight of the second vertex.
    pub u: f64,
    /// Barycentric weight of the third vertex.
    pub v: f64,
    /// Unit geometric normal of the triangle, `(v1 - v0) x (v2 - v0)`.
    pub normal: Vec3,
}

impl RayHit {
    /// Create a new ray hit.
    pub fn new(t: f64, point: Point3, u: f64, v: f64, normal: Vec3) -> Self {
        Self {
            t,
            point,
            u,
            v,
            normal,
        }
    }

    /// Barycentric weight of the first vertex, `1 - u - v`.
    #[inline]
    pub fn w(&self) -> f64 {
        1.0 - self.u - self.v
    }
}
