//! Ray-triangle intersection algorithms.
//!
//! Every entry point runs the same [`moller_trumbore::solve`] and differs
//! only in what it reports for a hit. The return style is chosen through
//! [`HitReport`], so the distance form and the point form share one epsilon
//! and one set of comparisons.

mod checked;
pub mod moller_trumbore;

pub use checked::validate;
pub use moller_trumbore::TriangleHit;

use tricast_math::{Point3, Tolerance};

use crate::error::Result;
use crate::{Ray, RayHit, Triangle};

/// A return style for a successful intersection.
pub trait HitReport: Sized {
    /// Build the report from the solved system.
    fn report(ray: &Ray, tri: &Triangle, hit: &TriangleHit) -> Self;
}

/// Distance form: the ray parameter `t`.
impl HitReport for f64 {
    #[inline]
    fn report(_ray: &Ray, _tri: &Triangle, hit: &TriangleHit) -> Self {
        hit.t
    }
}

/// Point form: `origin + t * direction`.
impl HitReport for Point3 {
    #[inline]
    fn report(ray: &Ray, _tri: &Triangle, hit: &TriangleHit) -> Self {
        ray.at(hit.t)
    }
}

/// Full record: `t`, point, barycentrics and the unit normal.
impl HitReport for RayHit {
    fn report(ray: &Ray, tri: &Triangle, hit: &TriangleHit) -> Self {
        // A hit implies |det| >= epsilon, so the area vector is non-zero
        let normal = tri.area_vector().normalize();
        RayHit::new(hit.t, ray.at(hit.t), hit.u, hit.v, normal)
    }
}

/// Raw solution: `t` and the barycentrics `u`, `v`.
impl HitReport for TriangleHit {
    #[inline]
    fn report(_ray: &Ray, _tri: &Triangle, hit: &TriangleHit) -> Self {
        *hit
    }
}

/// Ray-triangle intersector with a fixed tolerance.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Intersector {
    /// Tolerance for the parallel check and the minimum ray parameter.
    pub tolerance: Tolerance,
}

impl Intersector {
    /// Create an intersector with the given tolerance.
    pub const fn new(tolerance: Tolerance) -> Self {
        Self { tolerance }
    }

    /// Intersect, reporting a hit in the style `R`.
    #[inline]
    pub fn intersect<R: HitReport>(&self, ray: &Ray, tri: &Triangle) -> Option<R> {
        moller_trumbore::solve(ray, tri, &self.tolerance).map(|hit| R::report(ray, tri, &hit))
    }

    /// Ray parameter of the hit.
    pub fn distance(&self, ray: &Ray, tri: &Triangle) -> Option<f64> {
        self.intersect(ray, tri)
    }

    /// Point of the hit.
    pub fn point(&self, ray: &Ray, tri: &Triangle) -> Option<Point3> {
        self.intersect(ray, tri)
    }

    /// Full hit record.
    pub fn hit(&self, ray: &Ray, tri: &Triangle) -> Option<RayHit> {
        self.intersect(ray, tri)
    }

    /// Validate the inputs, then intersect.
    ///
    /// Degenerate or non-finite input is an error here instead of a silent miss.
    pub fn try_hit(&self, ray: &Ray, tri: &Triangle) -> Result<Option<RayHit>> {
        validate(ray, tri, &self.tolerance)?;
        Ok(self.hit(ray, tri))
    }
}

/// Intersect a ray with the triangle `(v0, v1, v2)`, returning the ray parameter.
///
/// Returns `Some(t)` with `t > 1e-6` if the ray hits the triangle, or `None`
/// if it misses, runs parallel to the triangle's plane, or only meets it at
/// or behind the origin. `t` is measured in multiples of the direction's
/// length.
///
/// A zero direction or collinear vertices report a miss; use
/// [`try_intersect`] to have them reported as errors.
pub fn intersect_distance(ray: &Ray, v0: &Point3, v1: &Point3, v2: &Point3) -> Option<f64> {
    Intersector::default().distance(ray, &Triangle::new(*v0, *v1, *v2))
}

/// Intersect a ray with the triangle `(v0, v1, v2)`, returning the hit point.
///
/// Accepts and rejects exactly the same inputs as [`intersect_distance`].
pub fn intersect_point(ray: &Ray, v0: &Point3, v1: &Point3, v2: &Point3) -> Option<Point3> {
    Intersector::default().point(ray, &Triangle::new(*v0, *v1, *v2))
}

/// Intersect a ray with a triangle, returning the full hit record.
pub fn intersect_triangle(ray: &Ray, tri: &Triangle) -> Option<RayHit> {
    Intersector::default().hit(ray, tri)
}

/// Checked intersection with the default tolerance.
pub fn try_intersect(ray: &Ray, tri: &Triangle) -> Result<Option<RayHit>> {
    Intersector::default().try_hit(ray, tri)
}
